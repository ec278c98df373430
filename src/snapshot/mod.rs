//! Structured snapshots of a machine for persistence and transport.
//!
//! A snapshot is the serializable view of a machine: declared states with
//! their roles, declared edges, and the cursor. Callbacks are not data and
//! never serialize; a decoded machine carries none.
//!
//! The wire format is a three-field object — `states`, `transitions`,
//! `current` — with edges keyed by the legacy hyphen-joined `"from-to"`
//! string. That key form is ambiguous when state names themselves contain
//! hyphens; decoding therefore rebuilds edges from each record's own
//! `from`/`to` fields and ignores the textual key, so a collision can merge
//! wire entries but never corrupt the tuple-keyed registry further.

use crate::core::{Registry, StateHooks, StateRole, TransitionRecord};
use crate::machine::Machine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod error;

pub use error::SnapshotError;

/// Cursor name the compatibility decode resets to, regardless of the
/// snapshot's `current` field. See [`Machine::decode_snapshot`].
const DECODE_RESET_STATE: &str = "start";

/// Wire view of one declared state: just its role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The state's role, as its numeric discriminant.
    #[serde(rename = "type")]
    pub role: StateRole,
}

/// Serializable view of a machine.
///
/// Ordered maps keep the encoding deterministic and key-sorted. Sortedness
/// is an implementation property, not a wire contract — consumers must not
/// rely on key order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Declared states, keyed by name.
    pub states: BTreeMap<String, StateSnapshot>,
    /// Declared edges, keyed by the hyphen-joined `"from-to"` string.
    pub transitions: BTreeMap<String, TransitionRecord>,
    /// Name of the active state, or the empty string if uninitialized.
    pub current: String,
}

impl Snapshot {
    /// Capture the serializable view of `machine`.
    pub fn capture(machine: &Machine) -> Self {
        let states = machine
            .registry()
            .states()
            .map(|(name, hooks)| (name.to_owned(), StateSnapshot { role: hooks.role() }))
            .collect();
        let transitions = machine
            .registry()
            .transitions()
            .map(|record| (format!("{}-{}", record.from, record.to), record.clone()))
            .collect();
        Snapshot {
            states,
            transitions,
            current: machine.current_state_name().to_owned(),
        }
    }

    /// Encode as JSON text.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::EncodeFailed(e.to_string()))
    }

    /// Decode from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(|e| SnapshotError::DecodeFailed(e.to_string()))
    }

    /// Encode as a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::EncodeFailed(e.to_string()))
    }

    /// Decode from a binary blob produced by [`to_bytes`](Snapshot::to_bytes).
    pub fn from_bytes(raw: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(raw).map_err(|e| SnapshotError::DecodeFailed(e.to_string()))
    }

    /// Rebuild a registry from the decoded content. Edge identity comes from
    /// each record's own fields, not the textual map key.
    fn registry(&self) -> Registry {
        let mut registry = Registry::new();
        for (name, state) in &self.states {
            registry.add_state(name.clone(), StateHooks::none());
            registry.set_role(name, state.role);
        }
        for record in self.transitions.values() {
            registry.add_transition(record.label.clone(), record.from.clone(), record.to.clone());
        }
        registry
    }
}

impl Machine {
    /// Encode the machine's states, edges, and cursor as JSON.
    pub fn encode_snapshot(&self) -> Result<String, SnapshotError> {
        Snapshot::capture(self).to_json()
    }

    /// Replace this machine's configuration from a JSON snapshot.
    ///
    /// The registry is replaced wholesale; decoded states carry no
    /// callbacks. For wire compatibility with the original implementation
    /// the cursor is reset to the literal `"start"`, *not* to the snapshot's
    /// `current` field. Use
    /// [`decode_snapshot_strict`](Machine::decode_snapshot_strict) to honor
    /// the encoded cursor instead.
    pub fn decode_snapshot(&mut self, raw: &str) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::from_json(raw)?;
        debug!(
            states = snapshot.states.len(),
            transitions = snapshot.transitions.len(),
            "restoring machine from snapshot"
        );
        self.restore(snapshot.registry(), DECODE_RESET_STATE.to_owned());
        Ok(())
    }

    /// Like [`decode_snapshot`](Machine::decode_snapshot), but the cursor is
    /// set to the snapshot's `current` field.
    pub fn decode_snapshot_strict(&mut self, raw: &str) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::from_json(raw)?;
        debug!(
            states = snapshot.states.len(),
            transitions = snapshot.transitions.len(),
            current = %snapshot.current,
            "restoring machine from snapshot"
        );
        let registry = snapshot.registry();
        self.restore(registry, snapshot.current);
        Ok(())
    }
}
