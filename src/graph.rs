//! Graphviz rendering of a machine.
//!
//! A read-only projection: one edge statement per declared transition, one
//! node statement per declared state with its role deciding shape and color.

use crate::core::StateRole;
use crate::machine::Machine;

const PREAMBLE: &str = "digraph fsm {
\tsize =\"4,4\";
\tnode [shape=circle,fontsize=12,fixedsize=true,width=0.8];
\tedge [fontsize=6];
\trankdir=LR;
";

fn role_attrs(role: StateRole) -> &'static str {
    match role {
        StateRole::Start => r#"[shape="doublecircle" color="blue"]"#,
        StateRole::End => r#"[shape="doublecircle" color="red"]"#,
        StateRole::Plain => r#"[shape="circle" color="black"]"#,
    }
}

impl Machine {
    /// Render the machine as a Graphviz `digraph`.
    ///
    /// The start state draws as a blue double circle, the end state as a red
    /// one, and plain states as black circles. Statement order follows map
    /// iteration and is not stable across calls; the output is meant for
    /// visualization tooling, not for comparison.
    pub fn dot_graph(&self) -> String {
        let mut out = String::from(PREAMBLE);
        for record in self.registry().transitions() {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [ label = \"{}\" ];\n",
                record.from, record.to, record.label
            ));
        }
        out.push('\n');
        for (name, hooks) in self.registry().states() {
            out.push_str(&format!("    \"{}\" {};\n", name, role_attrs(hooks.role())));
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateHooks;

    fn sample_machine() -> Machine {
        let mut machine = Machine::new();
        machine.add_state("start", StateHooks::none());
        machine.add_state("a", StateHooks::none());
        machine.add_state("finish", StateHooks::none());
        machine.add_transition("toA", "start", "a");
        machine.add_transition("toFinish", "a", "finish");
        machine.designate_start("start");
        machine.designate_end("finish");
        machine
    }

    #[test]
    fn renders_fixed_preamble_and_closing_brace() {
        let dot = sample_machine().dot_graph();
        assert!(dot.starts_with("digraph fsm {\n"));
        assert!(dot.contains("\trankdir=LR;\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn renders_one_statement_per_edge_and_node() {
        let dot = sample_machine().dot_graph();
        assert!(dot.contains(r#"    "start" -> "a" [ label = "toA" ];"#));
        assert!(dot.contains(r#"    "a" -> "finish" [ label = "toFinish" ];"#));
        assert!(dot.contains(r#"    "start" [shape="doublecircle" color="blue"];"#));
        assert!(dot.contains(r#"    "finish" [shape="doublecircle" color="red"];"#));
        assert!(dot.contains(r#"    "a" [shape="circle" color="black"];"#));
    }

    #[test]
    fn edge_statements_precede_node_statements() {
        let dot = sample_machine().dot_graph();
        let edge = dot.find(r#""start" -> "a""#).unwrap();
        let node = dot.find(r#""a" [shape"#).unwrap();
        assert!(edge < node);
    }

    #[test]
    fn empty_machine_renders_a_bare_graph() {
        let dot = Machine::new().dot_graph();
        assert!(dot.starts_with("digraph fsm {\n"));
        assert!(dot.ends_with("\n}\n"));
        assert!(!dot.contains("->"));
    }
}
