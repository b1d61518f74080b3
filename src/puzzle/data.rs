//! The immutable puzzle value and its lookup queries.
//!
//! [`PuzzleData`] is built once per puzzle load (grid construction, word
//! indexing, and clue-order precomputation all happen in the constructor) and
//! is never mutated afterwards. Every engine query borrows it; there is no
//! global or cached instance anywhere in the crate.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Cell, Grid, Orientation, Word};
use crate::puzzle::index;
use crate::puzzle::layout::Layout;

/// A fully indexed crossword puzzle: the grid plus its across/down words.
///
/// Construction is total: malformed layouts produce a degenerate (possibly
/// empty) puzzle rather than an error. The word lists are ordered by scan
/// discovery (id order); the clue-number orderings needed for word-to-word
/// traversal are precomputed, since down words are discovered column-major and
/// their scan order differs from clue order.
///
/// # Examples
///
/// ```
/// use crosskey::{Layout, Orientation, PuzzleData};
///
/// let puzzle = PuzzleData::build(&Layout::new(vec![
///     "AT.".to_string(),
///     "N.S".to_string(),
///     ".ER".to_string(),
/// ]));
///
/// assert_eq!(puzzle.words(Orientation::Across).len(), 2);
/// assert_eq!(puzzle.words(Orientation::Down).len(), 2);
/// assert!(puzzle.cell_at(0, 2).is_some_and(|c| c.is_black()));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleData {
    grid: Grid,
    across_words: Vec<Word>,
    down_words: Vec<Word>,
    /// Across word ids sorted by clue number.
    across_order: Vec<usize>,
    /// Down word ids sorted by clue number.
    down_order: Vec<usize>,
}

impl PuzzleData {
    /// Builds and indexes a puzzle from a static layout.
    ///
    /// Runs the grid builder and word indexer exactly once. Never fails:
    /// layouts without any words yield a puzzle with empty word lists.
    #[must_use]
    pub fn build(layout: &Layout) -> Self {
        Self::build_with_clues(layout, &[], &[])
    }

    /// Builds a puzzle and applies definition-supplied clue texts.
    ///
    /// Clue texts are matched to words in clue-number order per orientation;
    /// words beyond the end of a list keep their generated placeholder, and
    /// surplus texts are ignored.
    pub(crate) fn build_with_clues(
        layout: &Layout,
        across_clues: &[String],
        down_clues: &[String],
    ) -> Self {
        let _span = tracing::debug_span!(
            "build_puzzle",
            rows = layout.row_count(),
            cols = layout.col_count()
        )
        .entered();

        let mut grid = layout.build_grid();
        let (mut across_words, mut down_words) = index::index_grid(&mut grid);

        let across_order = clue_order(&across_words);
        let down_order = clue_order(&down_words);

        apply_clue_texts(&mut across_words, &across_order, across_clues);
        apply_clue_texts(&mut down_words, &down_order, down_clues);

        Self { grid, across_words, down_words, across_order, down_order }
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The cell at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    /// The across word list, in id order.
    #[must_use]
    pub fn across_words(&self) -> &[Word] {
        &self.across_words
    }

    /// The down word list, in id order.
    #[must_use]
    pub fn down_words(&self) -> &[Word] {
        &self.down_words
    }

    /// The word list for an orientation, in id order.
    #[must_use]
    pub fn words(&self, orientation: Orientation) -> &[Word] {
        match orientation {
            Orientation::Across => &self.across_words,
            Orientation::Down => &self.down_words,
        }
    }

    /// Total number of words across both orientations.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.across_words.len() + self.down_words.len()
    }

    /// The word with the given id in the given orientation.
    #[must_use]
    pub fn word(&self, orientation: Orientation, id: usize) -> Option<&Word> {
        self.words(orientation).get(id)
    }

    /// Word ids of an orientation sorted by clue number.
    #[must_use]
    pub fn clue_order(&self, orientation: Orientation) -> &[usize] {
        match orientation {
            Orientation::Across => &self.across_order,
            Orientation::Down => &self.down_order,
        }
    }

    /// The word passing through `(row, col)` in the given orientation.
    ///
    /// Returns `None` for out-of-range positions, black cells, and letter
    /// cells with no word in that orientation.
    #[must_use]
    pub fn word_containing(&self, row: usize, col: usize, orientation: Orientation) -> Option<&Word> {
        let cell = self.cell_at(row, col)?;
        let id = cell.word_id(orientation)?;
        self.word(orientation, id)
    }

    /// `"row,col"` keys of the word through `(row, col)` in the given
    /// orientation, for highlight rendering. Empty when no such word exists.
    #[must_use]
    pub fn active_word_cell_keys(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> HashSet<String> {
        self.word_containing(row, col, orientation)
            .map(|word| word.cells.iter().map(|pos| pos.key()).collect())
            .unwrap_or_default()
    }
}

/// Word ids sorted by clue number.
fn clue_order(words: &[Word]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&id| words[id].clue_number);
    order
}

/// Overwrites placeholder clues with definition-supplied texts, matched in
/// clue-number order.
fn apply_clue_texts(words: &mut [Word], order: &[usize], texts: &[String]) {
    for (slot, &id) in order.iter().enumerate() {
        if let Some(text) = texts.get(slot) {
            if let Some(word) = words.get_mut(id) {
                word.clue = text.clone();
            }
        }
    }

    if texts.len() > order.len() {
        tracing::debug!(
            supplied = texts.len(),
            words = order.len(),
            "ignoring surplus clue texts"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn fixture() -> PuzzleData {
        PuzzleData::build(&Layout::new(vec![
            "AT.".to_string(),
            "N.S".to_string(),
            ".ER".to_string(),
        ]))
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let puzzle = fixture();
        assert!(puzzle.cell_at(0, 0).is_some());
        assert!(puzzle.cell_at(3, 0).is_none());
        assert!(puzzle.cell_at(0, 3).is_none());
    }

    #[test]
    fn word_containing_respects_orientation() {
        let puzzle = fixture();

        let across = puzzle.word_containing(0, 1, Orientation::Across).expect("word");
        assert_eq!(across.cells, vec![Position::new(0, 0), Position::new(0, 1)]);

        // (0,1) has no down word.
        assert!(puzzle.word_containing(0, 1, Orientation::Down).is_none());
        // Black cell has neither.
        assert!(puzzle.word_containing(0, 2, Orientation::Across).is_none());
        // Out of range.
        assert!(puzzle.word_containing(9, 9, Orientation::Across).is_none());
    }

    #[test]
    fn active_word_cell_keys_for_highlighting() {
        let puzzle = fixture();

        let keys = puzzle.active_word_cell_keys(2, 2, Orientation::Across);
        assert_eq!(keys, HashSet::from(["2,1".to_string(), "2,2".to_string()]));

        assert!(puzzle.active_word_cell_keys(0, 2, Orientation::Across).is_empty());
    }

    #[test]
    fn down_clue_order_differs_from_scan_order() {
        // Down words: col 0 starts at (1,0), col 2 starts at (0,2). The scan
        // discovers col 0 first, but (0,2) is numbered before (1,0).
        let puzzle = PuzzleData::build(&Layout::new(vec![
            "..A".to_string(),
            "B.C".to_string(),
            "D.E".to_string(),
        ]));

        assert_eq!(puzzle.down_words().len(), 2);
        assert_eq!(puzzle.down_words()[0].first(), Some(Position::new(1, 0)));
        assert_eq!(puzzle.down_words()[1].first(), Some(Position::new(0, 2)));
        assert_eq!(puzzle.clue_order(Orientation::Down), &[1, 0]);
    }

    #[test]
    fn clue_texts_apply_in_clue_number_order() {
        let layout = Layout::new(vec!["AT.".to_string(), "N.S".to_string(), ".ER".to_string()]);
        let puzzle = PuzzleData::build_with_clues(
            &layout,
            &["First across".to_string()],
            &["First down".to_string(), "Second down".to_string()],
        );

        // Across: clue number 1 gets the supplied text, clue number 3 keeps
        // its placeholder.
        assert_eq!(puzzle.across_words()[0].clue, "First across");
        assert_eq!(puzzle.across_words()[1].clue, "Across 3");

        // Down: texts are matched by clue number (1 then 2), not scan order.
        assert_eq!(puzzle.down_words()[0].clue, "First down");
        assert_eq!(puzzle.down_words()[1].clue, "Second down");
    }

    #[test]
    fn degenerate_layouts_build_empty_puzzles() {
        let empty = PuzzleData::build(&Layout::new(vec![]));
        assert_eq!(empty.rows(), 0);
        assert_eq!(empty.word_count(), 0);

        let all_black = PuzzleData::build(&Layout::new(vec!["..".to_string()]));
        assert_eq!(all_black.word_count(), 0);
    }
}
