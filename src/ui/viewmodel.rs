//! View model types representing renderable widget state.
//!
//! This module defines immutable view models computed from puzzle and session
//! state. View models are optimized for rendering and contain pre-computed
//! display information: which cell is selected, which cells belong to the
//! active and crossing words, and the letter each cell should display. They
//! contain no business logic.
//!
//! View models are created via [`crate::app::Session::view_model`] and handed
//! to the presentation layer, typically serialized across the host boundary.

use serde::Serialize;

use crate::domain::{Orientation, Word};

/// Complete render snapshot of the grid for one frame.
///
/// Computed on demand from `(PuzzleData, Session)`; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GridViewModel {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Per-cell display state, `cells[row][col]`.
    pub cells: Vec<Vec<CellView>>,

    /// The word being navigated, if a cell is selected.
    pub active_word: Option<WordView>,

    /// The word in the opposite orientation through the selected cell, if any
    /// and distinct from the active word.
    pub crossing_word: Option<WordView>,
}

/// Display state for a single cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    /// Zero-based row of this cell.
    pub row: usize,

    /// Zero-based column of this cell.
    pub col: usize,

    /// Whether this is a blocked cell.
    pub is_black: bool,

    /// Clue number label, if this cell starts a word.
    pub clue_number: Option<u32>,

    /// The letter the user has typed here, if any. This is the cell's display
    /// letter; solutions are never exposed through the view model.
    pub entry: Option<char>,

    /// Whether this cell is the current selection.
    pub is_selected: bool,

    /// Whether this cell belongs to the active word (selection excluded, so
    /// renderers can style the cursor cell separately).
    pub in_active_word: bool,

    /// Whether this cell belongs to the crossing word.
    pub in_crossing_word: bool,
}

/// Identifying display information for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    /// The axis the word reads along.
    pub orientation: Orientation,

    /// Id within the orientation's word list.
    pub id: usize,

    /// The clue number label.
    pub clue_number: u32,

    /// The clue text.
    pub clue: String,
}

impl WordView {
    /// Captures the display fields of a word.
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self {
            orientation: word.orientation,
            id: word.id,
            clue_number: word.clue_number,
            clue: word.clue.clone(),
        }
    }
}
