//! Directed, labeled edges between state names.

use serde::{Deserialize, Serialize};

/// One declared edge between two state names.
///
/// The label is a human-readable transition name and is not required to be
/// unique; two edges may share a label. Only the `(from, to)` pair identifies
/// an edge in the registry.
///
/// Edges reference state names without owning them: an edge may point at a
/// name that was never declared as a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Human-readable transition name.
    #[serde(rename = "name")]
    pub label: String,
    /// Source state name.
    pub from: String,
    /// Target state name.
    pub to: String,
}

impl TransitionRecord {
    /// Create an edge from `from` to `to` with the given label.
    pub fn new(
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_name_from_to() {
        let record = TransitionRecord::new("submit", "draft", "review");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"submit","from":"draft","to":"review"}"#);
    }

    #[test]
    fn roundtrips_through_json() {
        let record = TransitionRecord::new("approve", "review", "published");
        let json = serde_json::to_string(&record).unwrap();
        let decoded: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn labels_may_repeat_across_edges() {
        let a = TransitionRecord::new("finish", "b", "end");
        let b = TransitionRecord::new("finish", "c", "end");
        assert_eq!(a.label, b.label);
        assert_ne!(a, b);
    }
}
