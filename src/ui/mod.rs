//! Presentation-facing view models.
//!
//! The engine stays ignorant of how it is rendered: no scroll bookkeeping, no
//! focus management, no element registries. This module holds the one thing
//! the presentation layer consumes directly: immutable render snapshots
//! computed from puzzle and session state.
//!
//! # Modules
//!
//! - [`viewmodel`]: Grid, cell, and word view models

pub mod viewmodel;

pub use viewmodel::{CellView, GridViewModel, WordView};
