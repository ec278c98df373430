//! Registry of declared states and the edges between them.

use super::state::{StateHooks, StateRole};
use super::transition::TransitionRecord;
use std::collections::HashMap;

/// Owns the declared states and the directed edges between them.
///
/// States are keyed by name; edges by the ordered `(from, to)` pair, so at
/// most one edge exists per pair and state names containing hyphens cannot
/// collide in memory. The hyphen-joined `"from-to"` form exists only on the
/// snapshot wire.
///
/// Every mutation follows a permissive last-write-wins policy: redefinition
/// overwrites, removal of something absent is a no-op, and nothing here
/// raises errors.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    states: HashMap<String, StateHooks>,
    transitions: HashMap<(String, String), TransitionRecord>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record stored under `name`.
    ///
    /// The stored role is always reset to `Plain`: roles are assigned through
    /// machine designation, never through insertion. The empty string is a
    /// valid key.
    pub fn add_state(&mut self, name: impl Into<String>, mut hooks: StateHooks) {
        hooks.role = StateRole::Plain;
        self.states.insert(name.into(), hooks);
    }

    /// Remove the record stored under `name`, if any.
    pub fn remove_state(&mut self, name: &str) {
        self.states.remove(name);
    }

    /// Whether a record is stored under `name`.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// The record stored under `name`, if any.
    pub fn state(&self, name: &str) -> Option<&StateHooks> {
        self.states.get(name)
    }

    /// Overwrite the role of the record stored under `name`, if present.
    pub(crate) fn set_role(&mut self, name: &str, role: StateRole) {
        if let Some(hooks) = self.states.get_mut(name) {
            hooks.role = role;
        }
    }

    /// Insert or overwrite the edge from `from` to `to`.
    ///
    /// Endpoints are not validated; an edge may be declared before, or
    /// independent of, its states. A second insertion for the same pair
    /// silently replaces the first even if the labels differ.
    pub fn add_transition(
        &mut self,
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) {
        let from = from.into();
        let to = to.into();
        let record = TransitionRecord::new(label, from.clone(), to.clone());
        self.transitions.insert((from, to), record);
    }

    /// Remove the edge from `from` to `to`, if any.
    ///
    /// Removal is keyed by the pair, never by label: labels may repeat across
    /// edges, so only the pair identifies a unique record.
    pub fn remove_transition(&mut self, from: &str, to: &str) {
        self.transitions.remove(&(from.to_owned(), to.to_owned()));
    }

    /// The edge from `from` to `to`, if declared.
    pub fn lookup_transition(&self, from: &str, to: &str) -> Option<&TransitionRecord> {
        self.transitions.get(&(from.to_owned(), to.to_owned()))
    }

    /// Iterate over declared states in unspecified order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateHooks)> {
        self.states.iter().map(|(name, hooks)| (name.as_str(), hooks))
    }

    /// Iterate over declared edges in unspecified order.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.transitions.values()
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of declared edges.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
