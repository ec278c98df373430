//! The machine: a registry plus a cursor over it.

use crate::core::{Registry, StateHooks, StateRole, TransitionRecord};
use tracing::debug;

/// A finite state machine over named states.
///
/// A machine owns a [`Registry`] of declared states and edges plus a cursor
/// naming the active state. It is driven forward with
/// [`change_state_to`](Machine::change_state_to), which only moves along
/// declared edges and fires the affected states' callbacks synchronously on
/// the caller's stack. Invalid requests are silently ignored rather than
/// signaled; callers wanting strict validation pre-check with
/// [`has_valid_transition`](Machine::has_valid_transition).
///
/// # Concurrency
///
/// The machine does no locking of its own. Sharing one instance across
/// threads requires an external lock covering every operation: the
/// exit-then-enter sequence must observe a consistent view of both registry
/// maps, so wrap the whole machine rather than its parts.
#[derive(Clone, Debug, Default)]
pub struct Machine {
    registry: Registry,
    /// Name of the active state; empty until a start state is designated.
    current: String,
    /// Cached copy of the active state's record, used to fire its exit
    /// callback without a registry lookup.
    current_hooks: StateHooks,
    strict: bool,
}

impl Machine {
    /// Create an empty machine with no states, edges, or cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the state named `name`. See [`Registry::add_state`].
    pub fn add_state(&mut self, name: impl Into<String>, hooks: StateHooks) {
        self.registry.add_state(name, hooks);
    }

    /// Remove the state named `name`, if declared.
    pub fn remove_state(&mut self, name: &str) {
        self.registry.remove_state(name);
    }

    /// Whether a state named `name` is declared.
    pub fn has_state(&self, name: &str) -> bool {
        self.registry.has_state(name)
    }

    /// Insert or overwrite the edge from `from` to `to`. See
    /// [`Registry::add_transition`].
    pub fn add_transition(
        &mut self,
        label: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) {
        self.registry.add_transition(label, from, to);
    }

    /// Remove the edge from `from` to `to`, if declared.
    pub fn remove_transition(&mut self, from: &str, to: &str) {
        self.registry.remove_transition(from, to);
    }

    /// Read access to the underlying registry, used by the exporters.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Reject transitions whose target state was never declared.
    ///
    /// Off by default. When enabled, [`change_state_to`](Machine::change_state_to)
    /// treats an edge pointing at an undeclared state like a missing edge, so
    /// the cursor and the cached record can never diverge.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Designate `name` as the start state and move the cursor onto it.
    ///
    /// Only the first call has any effect: once the cursor is set it never
    /// reverts to unset, and repeating the designation would re-fire the
    /// enter callback. If `name` was declared, its record is cached, its
    /// `on_enter` fires before this returns, and its role is promoted to
    /// `Start`. An undeclared name still claims the cursor; it just has no
    /// record to cache, fire, or promote.
    pub fn designate_start(&mut self, name: &str) {
        if !self.current.is_empty() {
            debug!(current = %self.current, "start state already designated, ignoring");
            return;
        }
        debug!(state = %name, "designating start state");
        self.current = name.to_owned();
        if let Some(hooks) = self.registry.state(name).cloned() {
            self.current_hooks = hooks;
            if let Some(hook) = self.current_hooks.on_enter.clone() {
                hook();
            }
            self.registry.set_role(name, StateRole::Start);
        }
    }

    /// Mark `name` as the end state.
    ///
    /// Unconditional: may be repeated, overwrites the target's role each
    /// time, and fires no callback. A silent no-op for undeclared names.
    pub fn designate_end(&mut self, name: &str) {
        debug!(state = %name, "designating end state");
        self.registry.set_role(name, StateRole::End);
    }

    /// Move the cursor to `target` if an edge from the active state exists.
    ///
    /// No matching edge means a silent no-op: the cursor stays put and no
    /// callback fires. On a valid edge the cached active record's `on_exit`
    /// fires first, then the target's record is cached and its `on_enter`
    /// fires, then the cursor advances. Self-edges re-fire both callbacks on
    /// the same state. Both callbacks complete before this returns, and a
    /// panicking callback propagates to the caller.
    ///
    /// A valid edge whose target was never declared as a state still
    /// advances the cursor, but the cached record is left pointing at the
    /// previous state, so a later exit callback fires for the wrong logical
    /// state. This preserves the original implementation's observable
    /// behavior; enable [`set_strict`](Machine::set_strict) to reject such
    /// transitions instead.
    pub fn change_state_to(&mut self, target: &str) {
        let Some(record) = self.registry.lookup_transition(&self.current, target) else {
            debug!(from = %self.current, to = %target, "no transition declared, ignoring");
            return;
        };
        let label = record.label.clone();
        if self.strict && !self.registry.has_state(target) {
            debug!(from = %self.current, to = %target, "target state undeclared, rejecting");
            return;
        }
        debug!(from = %self.current, to = %target, transition = %label, "changing state");
        if let Some(hook) = self.current_hooks.on_exit.clone() {
            hook();
        }
        if let Some(hooks) = self.registry.state(target).cloned() {
            self.current_hooks = hooks;
            if let Some(hook) = self.current_hooks.on_enter.clone() {
                hook();
            }
        }
        self.current = target.to_owned();
    }

    /// Check whether an edge from `from` to `to` is declared.
    ///
    /// Pure query with no side effects; this is the same lookup
    /// [`change_state_to`](Machine::change_state_to) performs, exposed for
    /// callers that want to pre-validate instead of polling the cursor.
    pub fn has_valid_transition(&self, from: &str, to: &str) -> Option<&TransitionRecord> {
        self.registry.lookup_transition(from, to)
    }

    /// Name of the active state, or the empty string before designation.
    pub fn current_state_name(&self) -> &str {
        &self.current
    }

    /// Replace the whole configuration, used by snapshot decoding. The hook
    /// cache is cleared because decoded states carry no callbacks.
    pub(crate) fn restore(&mut self, registry: Registry, current: String) {
        self.registry = registry;
        self.current = current;
        self.current_hooks = StateHooks::none();
    }
}
