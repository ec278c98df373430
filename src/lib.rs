//! Cogwork: a small embeddable finite state machine.
//!
//! A machine is configured at runtime from named states and directed,
//! labeled transitions between them, then driven forward one transition at a
//! time. States may carry enter/exit callbacks which fire synchronously as
//! the cursor moves. Two read-only exporters round out the surface: a
//! structured snapshot for persistence or transport, and a Graphviz
//! rendering for visualization.
//!
//! # Core Concepts
//!
//! - **States** are plain string names, each carrying a [`StateHooks`]
//!   record with optional enter/exit callbacks
//! - **Transitions** are directed labeled edges; the machine only moves
//!   along declared edges and silently ignores everything else
//! - **Designation** promotes one state to the start role (claiming the
//!   cursor and firing its enter callback) and any number of states to the
//!   end role
//!
//! # Example
//!
//! ```rust
//! use cogwork::{Machine, StateHooks};
//!
//! let mut machine = Machine::new();
//! machine.add_state("draft", StateHooks::new().exit(|| println!("leaving draft")));
//! machine.add_state("review", StateHooks::new().enter(|| println!("under review")));
//! machine.add_state("published", StateHooks::none());
//!
//! machine.add_transition("submit", "draft", "review");
//! machine.add_transition("approve", "review", "published");
//!
//! machine.designate_start("draft");
//! machine.designate_end("published");
//!
//! machine.change_state_to("review");
//! assert_eq!(machine.current_state_name(), "review");
//!
//! // No edge from review back to draft was declared: silently ignored.
//! machine.change_state_to("draft");
//! assert_eq!(machine.current_state_name(), "review");
//! ```
//!
//! # Concurrency
//!
//! The machine does no locking of its own. Share one instance across threads
//! only behind an external lock that covers every operation.

pub mod core;
pub mod machine;
pub mod snapshot;

mod graph;

// Re-export commonly used types
pub use crate::core::{Hook, Registry, StateHooks, StateRole, TransitionRecord};
pub use crate::machine::Machine;
pub use crate::snapshot::{Snapshot, SnapshotError, StateSnapshot};
