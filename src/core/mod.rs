//! Core data model: state records, transition records, and the registry.
//!
//! Everything here is plain data plus map bookkeeping. Driving the cursor
//! and firing callbacks belongs to [`crate::machine`]; the two exporters
//! live in their own modules and only read from here.

mod registry;
mod state;
mod transition;

pub use registry::Registry;
pub use state::{Hook, StateHooks, StateRole};
pub use transition::TransitionRecord;
