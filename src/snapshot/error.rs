//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding snapshots.
///
/// Decoding fails only on structural malformation (bad JSON, truncated
/// bytes, out-of-range role discriminants) — never on semantic issues such
/// as edges referencing undeclared states.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed.
    #[error("snapshot encoding failed: {0}")]
    EncodeFailed(String),

    /// The input was not a structurally valid snapshot.
    #[error("snapshot decoding failed: {0}")]
    DecodeFailed(String),
}
