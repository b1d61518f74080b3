//! Word, orientation, and arrow-direction types.
//!
//! A word is a maximal run of letter cells along one axis, indexed with an id,
//! a clue number, and its ordered cell list. Orientations name the two reading
//! axes; directions name the four raw arrow-key movements and map onto the
//! orientation they navigate.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::Position;

/// The axis along which a word reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}

/// A raw arrow-key movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// The word orientation an arrow key navigates.
    ///
    /// Left/right arrows read across; up/down arrows read down. Pure mapping,
    /// no state.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosskey::{Direction, Orientation};
    ///
    /// assert_eq!(Direction::Left.orientation(), Orientation::Across);
    /// assert_eq!(Direction::Up.orientation(), Orientation::Down);
    /// ```
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Across,
            Self::Up | Self::Down => Orientation::Down,
        }
    }

    /// Row/column delta of a single step in this direction.
    pub(crate) const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// An indexed run of letter cells with a clue.
///
/// # Invariants
///
/// - `cells.len() >= 2`.
/// - `cells` is contiguous along the orientation axis: consecutive entries
///   differ by exactly 1 in the relevant coordinate, with no black cell
///   between first and last.
///
/// Both invariants are established by the word indexer
/// ([`crate::puzzle::index`]) and preserved by [`crate::puzzle::PuzzleData`]'s
/// immutability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Id of this word within its orientation's word list.
    pub id: usize,

    /// The axis this word reads along.
    pub orientation: Orientation,

    /// The sequential label shown on this word's first cell.
    pub clue_number: u32,

    /// Clue text. Definition-supplied, or a generated placeholder such as
    /// `"Across 3"` when the definition carries none.
    pub clue: String,

    /// Ordered cell positions, first to last.
    pub cells: Vec<Position>,
}

impl Word {
    /// Number of cells in this word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell list is empty. Always `false` for indexed words; kept
    /// for API completeness alongside [`len`](Word::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The word's first cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// The word's last cell, if any.
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Whether the word passes through the given position.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Index of the given position within the word's cell list.
    #[must_use]
    pub fn position_of(&self, pos: Position) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == pos)
    }
}
