//! Domain layer for the crossword engine.
//!
//! This module contains the core domain types shared across the engine,
//! independent of how puzzles are loaded or how a host renders them. The types
//! here are plain data; the construction logic that fills them in lives in
//! [`crate::puzzle`].
//!
//! # Organization
//!
//! - [`answers`]: The session's typed-letter map
//! - [`cell`]: Grid positions and cell types
//! - [`error`]: Error types and result aliases
//! - [`grid`]: The built cell matrix
//! - [`word`]: Words, orientations, and arrow directions
//!
//! # Examples
//!
//! ```
//! use crosskey::{Direction, Orientation, Position};
//!
//! let pos = Position::new(0, 3);
//! assert_eq!(pos.key(), "0,3");
//! assert_eq!(Direction::Right.orientation(), Orientation::Across);
//! ```

pub mod answers;
pub mod cell;
pub mod error;
pub mod grid;
pub mod word;

pub use answers::Answers;
pub use cell::{Cell, CellKind, Position};
pub use error::{PuzzleError, Result};
pub use grid::Grid;
pub use word::{Direction, Orientation, Word};
