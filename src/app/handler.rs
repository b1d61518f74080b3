//! Event handling: the single entry point for user actions.
//!
//! This module defines [`Event`], the serde-serializable description of one
//! discrete user action, and [`handle_event`], which applies it to a
//! [`Session`] against an immutable [`PuzzleData`]. Each call is one
//! synchronous pass (nothing suspends, nothing runs in the background) and
//! the returned flag tells the host whether anything changed and a re-render
//! is needed.
//!
//! # Event Types
//!
//! - **Selection**: [`Tap`](Event::Tap), [`Arrow`](Event::Arrow),
//!   [`NextWord`](Event::NextWord), [`PrevWord`](Event::PrevWord)
//! - **Input**: [`TypeLetter`](Event::TypeLetter), [`Delete`](Event::Delete)
//!
//! # Example
//!
//! ```
//! use crosskey::{handle_event, Event, Layout, PuzzleData, Session};
//!
//! let puzzle = PuzzleData::build(&Layout::new(vec![
//!     "AT.".to_string(),
//!     "N.S".to_string(),
//!     ".ER".to_string(),
//! ]));
//! let mut session = Session::new();
//!
//! let changed = handle_event(&puzzle, &mut session, &Event::Tap { row: 0, col: 0 });
//! assert!(changed);
//! ```

use serde::{Deserialize, Serialize};

use crate::app::state::Session;
use crate::domain::Direction;
use crate::puzzle::PuzzleData;

/// One discrete user action, as reported by the presentation layer.
///
/// Serializable so hosts can hand events across a process or language
/// boundary; the engine itself never constructs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A tap (or click) on the cell at `(row, col)`.
    Tap {
        /// Zero-based row of the tapped cell.
        row: usize,
        /// Zero-based column of the tapped cell.
        col: usize,
    },

    /// An arrow key press.
    Arrow(Direction),

    /// Tab: jump to the next word in clue-number order.
    NextWord,

    /// Shift+Tab: jump to the previous word in clue-number order.
    PrevWord,

    /// A typed character. Non-alphabetic input is ignored by the handler.
    TypeLetter(char),

    /// Backspace: clear the selected cell and retreat.
    Delete,
}

/// Processes one event, mutating the session, and reports whether state
/// changed.
///
/// Degenerate situations (taps on black cells, arrows at the grid boundary,
/// input without a selection) are no-ops that return `false`; there is no
/// error channel here by design.
///
/// # Tracing
///
/// Each call runs inside a debug-level span tagged with the event.
pub fn handle_event(puzzle: &PuzzleData, session: &mut Session, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Tap { row, col } => session.tap_cell(puzzle, *row, *col),
        Event::Arrow(direction) => session.move_arrow(puzzle, *direction),
        Event::NextWord => session.jump_word(puzzle, false),
        Event::PrevWord => session.jump_word(puzzle, true),
        Event::TypeLetter(letter) => session.enter_letter(puzzle, *letter),
        Event::Delete => session.delete_letter(puzzle),
    }
}
