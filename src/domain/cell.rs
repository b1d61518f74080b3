//! Grid positions and cell types.
//!
//! This module defines [`Position`], the zero-based grid coordinate used across
//! the engine, and [`Cell`], one square of the built crossword grid. Cells are
//! plain data: the word back-links and clue numbers are filled in by the word
//! indexer after the grid is built.

use serde::{Deserialize, Serialize};

use super::word::Orientation;

/// A grid coordinate: zero-based row and column.
///
/// Positions are cheap to copy and are the unit of every navigation query.
/// The presentation layer identifies cells by the canonical `"row,col"` key
/// produced by [`Position::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Canonical `"row,col"` cell key consumed by the presentation layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosskey::Position;
    ///
    /// assert_eq!(Position::new(3, 14).key(), "3,14");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        format!("{},{}", self.row, self.col)
    }
}

/// Whether a square holds a letter or is blocked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// A playable square with a solution letter.
    Letter,
    /// A blocked square. Black cells carry no solution, clue number, or word ids.
    Black,
}

/// One square of the crossword grid.
///
/// Letter cells know their solution letter and, once indexing has run, which
/// across/down word they belong to and whether they carry a clue number. Black
/// cells carry none of that; the invariant is enforced by construction: the
/// [`black`](Cell::black) constructor leaves every optional field empty and the
/// indexer only ever back-links letter cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based row of this cell.
    pub row: usize,

    /// Zero-based column of this cell.
    pub col: usize,

    /// Letter or black.
    pub kind: CellKind,

    /// Solution letter (uppercase). Always `Some` for letter cells, always
    /// `None` for black cells.
    pub solution: Option<char>,

    /// Clue number shown on this cell, if it starts a retained word.
    ///
    /// A cell that starts both an across and a down word carries the single
    /// number shared by both.
    pub clue_number: Option<u32>,

    /// Id of the across word this cell belongs to, if any.
    pub across_word: Option<usize>,

    /// Id of the down word this cell belongs to, if any.
    pub down_word: Option<usize>,
}

impl Cell {
    /// Creates a letter cell with its solution letter (uppercased).
    pub(crate) fn letter(row: usize, col: usize, solution: char) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Letter,
            solution: Some(solution.to_ascii_uppercase()),
            clue_number: None,
            across_word: None,
            down_word: None,
        }
    }

    /// Creates a black cell.
    pub(crate) const fn black(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Black,
            solution: None,
            clue_number: None,
            across_word: None,
            down_word: None,
        }
    }

    /// Whether this is a playable letter cell.
    #[must_use]
    pub fn is_letter(&self) -> bool {
        self.kind == CellKind::Letter
    }

    /// Whether this is a blocked cell.
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.kind == CellKind::Black
    }

    /// The id of the word through this cell in the given orientation, if any.
    #[must_use]
    pub const fn word_id(&self, orientation: Orientation) -> Option<usize> {
        match orientation {
            Orientation::Across => self.across_word,
            Orientation::Down => self.down_word,
        }
    }

    /// Whether this cell belongs to a word in the given orientation.
    #[must_use]
    pub const fn has_word(&self, orientation: Orientation) -> bool {
        self.word_id(orientation).is_some()
    }

    /// The orientation this cell supports, preferring across over down.
    ///
    /// Returns `None` for black cells and for letter cells that survived
    /// indexing without belonging to any word (isolated cells).
    #[must_use]
    pub const fn preferred_orientation(&self) -> Option<Orientation> {
        if self.across_word.is_some() {
            Some(Orientation::Across)
        } else if self.down_word.is_some() {
            Some(Orientation::Down)
        } else {
            None
        }
    }

    /// This cell's coordinates as a [`Position`].
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { row: self.row, col: self.col }
    }
}
