//! State roles and per-state callback records.
//!
//! A state is just a name in the registry; what it *carries* is a
//! [`StateHooks`] record — its role plus optional lifecycle callbacks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback fired when a state is entered or exited.
///
/// Hooks are shared pointers so a record can be cached by value (the machine
/// keeps a copy of the active state's record to fire its exit callback
/// without a registry lookup).
pub type Hook = Arc<dyn Fn() + Send + Sync>;

/// Semantic role of a declared state.
///
/// Serializes as its numeric discriminant (`0`/`1`/`2`), matching the
/// snapshot wire format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StateRole {
    /// The designated initial state.
    Start,
    /// The designated final state.
    End,
    /// Any state without an explicit designation.
    #[default]
    Plain,
}

impl From<StateRole> for u8 {
    fn from(role: StateRole) -> u8 {
        match role {
            StateRole::Start => 0,
            StateRole::End => 1,
            StateRole::Plain => 2,
        }
    }
}

impl TryFrom<u8> for StateRole {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StateRole::Start),
            1 => Ok(StateRole::End),
            2 => Ok(StateRole::Plain),
            other => Err(format!("unknown state role discriminant: {other}")),
        }
    }
}

/// Per-state record: optional lifecycle callbacks plus the state's role.
///
/// `on_enter` fires when the machine moves onto the state, `on_exit` when it
/// moves off. `on_update` is stored but never invoked by the machine; it is
/// reserved for callers that poll the active state themselves.
///
/// # Example
///
/// ```rust
/// use cogwork::StateHooks;
///
/// let hooks = StateHooks::new()
///     .enter(|| println!("entered"))
///     .exit(|| println!("left"));
/// ```
#[derive(Clone, Default)]
pub struct StateHooks {
    pub(crate) on_enter: Option<Hook>,
    pub(crate) on_update: Option<Hook>,
    pub(crate) on_exit: Option<Hook>,
    pub(crate) role: StateRole,
}

impl StateHooks {
    /// Create an empty record with no callbacks and the `Plain` role.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with no callbacks at all, for states that are pure names.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the enter callback.
    pub fn enter<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(hook));
        self
    }

    /// Set the update callback. Never fired by the machine itself.
    pub fn update<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_update = Some(Arc::new(hook));
        self
    }

    /// Set the exit callback.
    pub fn exit<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_exit = Some(Arc::new(hook));
        self
    }

    /// The state's current role.
    pub fn role(&self) -> StateRole {
        self.role
    }

    /// The stored update callback, if any, for caller-driven polling.
    pub fn on_update(&self) -> Option<&Hook> {
        self.on_update.as_ref()
    }
}

impl fmt::Debug for StateHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHooks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn role_discriminants_match_wire_format() {
        assert_eq!(u8::from(StateRole::Start), 0);
        assert_eq!(u8::from(StateRole::End), 1);
        assert_eq!(u8::from(StateRole::Plain), 2);
    }

    #[test]
    fn role_rejects_unknown_discriminant() {
        assert_eq!(StateRole::try_from(0), Ok(StateRole::Start));
        assert_eq!(StateRole::try_from(1), Ok(StateRole::End));
        assert_eq!(StateRole::try_from(2), Ok(StateRole::Plain));
        assert!(StateRole::try_from(3).is_err());
    }

    #[test]
    fn role_serializes_as_number() {
        let json = serde_json::to_string(&StateRole::Plain).unwrap();
        assert_eq!(json, "2");
        let role: StateRole = serde_json::from_str("0").unwrap();
        assert_eq!(role, StateRole::Start);
    }

    #[test]
    fn default_record_has_no_hooks_and_plain_role() {
        let hooks = StateHooks::new();
        assert!(hooks.on_enter.is_none());
        assert!(hooks.on_update.is_none());
        assert!(hooks.on_exit.is_none());
        assert_eq!(hooks.role(), StateRole::Plain);
    }

    #[test]
    fn fluent_setters_store_hooks() {
        let hooks = StateHooks::new().enter(|| {}).update(|| {}).exit(|| {});
        assert!(hooks.on_enter.is_some());
        assert!(hooks.on_update.is_some());
        assert!(hooks.on_exit.is_some());
    }

    #[test]
    fn cloned_record_shares_hooks() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let hooks = StateHooks::new().enter(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let copy = hooks.clone();
        (copy.on_enter.as_ref().unwrap())();
        (hooks.on_enter.as_ref().unwrap())();

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
