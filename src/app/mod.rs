//! Application layer: session state and event handling.
//!
//! This module implements the mutable half of the engine. The immutable
//! [`PuzzleData`](crate::puzzle::PuzzleData) is built once per puzzle load;
//! everything that changes while the user plays (the selection and the typed
//! answers) lives in a [`Session`] here and is driven exclusively through
//! [`handle_event`].
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → Session mutation → render flag
//!                            │
//!                            └── pure navigation queries (crate::puzzle)
//! ```
//!
//! # Modules
//!
//! - [`handler`]: The [`Event`] type and dispatch logic
//! - [`state`]: [`Session`], [`Selection`], transitions, and view model
//!   computation

pub mod handler;
pub mod state;

pub use handler::{handle_event, Event};
pub use state::{Selection, Session};
