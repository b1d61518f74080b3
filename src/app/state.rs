//! Session state: the selection, the answer map, and their transition rules.
//!
//! This module defines [`Session`], the single mutable state container for one
//! widget instance, holding the current [`Selection`] and the typed-letter
//! [`Answers`] map. Every transition takes the immutable
//! [`PuzzleData`](crate::puzzle::PuzzleData) by reference and returns whether
//! state actually changed, so the caller knows when to re-render.
//!
//! # State Components
//!
//! - **Selection**: the focused cell plus the orientation being navigated,
//!   `None` until the host selects a cell
//! - **Answers**: letters typed so far, keyed by cell position
//!
//! # Transition Rules
//!
//! Transitions implement the selection state machine: tap toggling, arrow
//! movement with orientation switching, word-to-word jumps, and the typing /
//! deletion cursor advance. Degenerate inputs (taps on black cells, arrows at
//! the boundary, typing with no selection) are no-ops, never errors.

use serde::{Deserialize, Serialize};

use crate::domain::{Answers, Direction, Orientation, Position, Word};
use crate::puzzle::navigation;
use crate::puzzle::PuzzleData;
use crate::ui::viewmodel::{CellView, GridViewModel, WordView};

/// The currently focused cell plus the orientation being navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Zero-based row of the selected cell.
    pub row: usize,
    /// Zero-based column of the selected cell.
    pub col: usize,
    /// The axis the user is currently navigating along.
    pub orientation: Orientation,
}

impl Selection {
    /// The selected cell as a [`Position`].
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { row: self.row, col: self.col }
    }
}

/// Mutable state owned by one widget session.
///
/// Created empty at session start and mutated only by the event handler, one
/// user action at a time. The puzzle itself is not stored here; it is built
/// once per load and passed by reference to every method.
///
/// # Examples
///
/// ```
/// use crosskey::{Layout, PuzzleData, Session};
///
/// let puzzle = PuzzleData::build(&Layout::new(vec![
///     "AT.".to_string(),
///     "N.S".to_string(),
///     ".ER".to_string(),
/// ]));
///
/// let mut session = Session::new();
/// assert!(session.selection().is_none());
///
/// session.select_first(&puzzle);
/// assert!(session.selection().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: Option<Selection>,
    answers: Answers,
}

impl Session {
    /// Creates a session with no selection and no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The letters typed so far.
    #[must_use]
    pub const fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Moves the selection to the puzzle's natural starting cell.
    ///
    /// Convenience for hosts that want an initial selection before the first
    /// tap: the first cell of the lowest-numbered across word (or the first
    /// letter cell), with whichever orientation that cell supports, preferring
    /// across. Returns `false` when the grid has no letter cells.
    pub fn select_first(&mut self, puzzle: &PuzzleData) -> bool {
        let Some(start) = navigation::first_cell(puzzle) else {
            return false;
        };

        let orientation = puzzle
            .cell_at(start.row, start.col)
            .and_then(|cell| cell.preferred_orientation())
            .unwrap_or(Orientation::Across);

        self.selection = Some(Selection { row: start.row, col: start.col, orientation });
        true
    }

    /// Handles a tap on the cell at `(row, col)`.
    ///
    /// Tapping the already-selected cell flips the orientation when the cell
    /// belongs to both an across and a down word, and keeps it otherwise (an
    /// intentional no-op). Tapping a different letter cell moves the selection
    /// there, keeping the current orientation when the cell has a word in it
    /// and otherwise switching to whichever orientation the cell supports,
    /// preferring across. Taps on black cells and out-of-range positions are
    /// ignored.
    pub fn tap_cell(&mut self, puzzle: &PuzzleData, row: usize, col: usize) -> bool {
        let Some(cell) = puzzle.cell_at(row, col) else {
            return false;
        };
        if !cell.is_letter() {
            return false;
        }

        if let Some(selection) = self.selection {
            if selection.row == row && selection.col == col {
                if cell.has_word(Orientation::Across) && cell.has_word(Orientation::Down) {
                    let flipped = selection.orientation.opposite();
                    tracing::debug!(row, col, orientation = %flipped, "tap toggles orientation");
                    self.selection = Some(Selection { row, col, orientation: flipped });
                    return true;
                }
                // Single-orientation cell: keep the current orientation.
                return false;
            }
        }

        let current = self.selection.map(|s| s.orientation).unwrap_or(Orientation::Across);
        let orientation = if cell.has_word(current) {
            current
        } else {
            cell.preferred_orientation().unwrap_or(current)
        };

        tracing::debug!(row, col, orientation = %orientation, "cell selected");
        self.selection = Some(Selection { row, col, orientation });
        true
    }

    /// Handles an arrow key press.
    ///
    /// When the arrow implies the other orientation and the current cell has a
    /// word there, only the orientation switches and the selection does not
    /// move. Otherwise the selection steps to the nearest letter cell in the
    /// raw direction (skipping black cells), adopting the arrow-implied
    /// orientation when the destination supports it and falling back to
    /// whichever orientation the destination does support. At the grid
    /// boundary nothing changes.
    pub fn move_arrow(&mut self, puzzle: &PuzzleData, direction: Direction) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };

        let implied = direction.orientation();
        if implied != selection.orientation {
            let switches = puzzle
                .cell_at(selection.row, selection.col)
                .is_some_and(|cell| cell.has_word(implied));
            if switches {
                tracing::debug!(orientation = %implied, "arrow switches orientation in place");
                self.selection = Some(Selection { orientation: implied, ..selection });
                return true;
            }
        }

        let Some(dest) = navigation::adjacent_letter_cell(puzzle, selection.position(), direction)
        else {
            return false;
        };

        let orientation = puzzle
            .cell_at(dest.row, dest.col)
            .map_or(selection.orientation, |cell| {
                if cell.has_word(implied) {
                    implied
                } else {
                    cell.preferred_orientation().unwrap_or(selection.orientation)
                }
            });

        self.selection = Some(Selection { row: dest.row, col: dest.col, orientation });
        true
    }

    /// Jumps to the adjacent word in clue-number order (Tab / Shift+Tab).
    ///
    /// Adopts the orientation of the destination word and moves to its first
    /// cell. No-op when there is no selection or the selected cell has no word
    /// in the current orientation.
    pub fn jump_word(&mut self, puzzle: &PuzzleData, reverse: bool) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };

        let Some((first, orientation)) =
            navigation::next_word(puzzle, selection.position(), selection.orientation, reverse)
        else {
            return false;
        };

        self.selection = Some(Selection { row: first.row, col: first.col, orientation });
        true
    }

    /// Records a typed letter at the selected cell and advances the cursor.
    ///
    /// Only ASCII alphabetic input is accepted; everything else is ignored.
    /// The letter is stored uppercase. The cursor then steps forward within
    /// the active word; at the word's end it jumps to the first unfilled cell
    /// of the next word of the same orientation (judged against the answers
    /// including the letter just typed), and stays put when every cell of that
    /// orientation is already answered.
    pub fn enter_letter(&mut self, puzzle: &PuzzleData, letter: char) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };
        if !letter.is_ascii_alphabetic() {
            return false;
        }

        let pos = selection.position();
        self.answers.set(pos, letter);
        tracing::trace!(row = pos.row, col = pos.col, letter = %letter.to_ascii_uppercase(), "letter entered");

        let next = navigation::step_within_word(puzzle, pos, selection.orientation, false)
            .or_else(|| {
                navigation::first_unfilled_cell_in_adjacent_word(
                    puzzle,
                    pos,
                    selection.orientation,
                    false,
                    &self.answers,
                )
            });

        if let Some(next) = next {
            self.selection = Some(Selection { row: next.row, col: next.col, ..selection });
        }

        true
    }

    /// Clears the selected cell's answer and retreats the cursor.
    ///
    /// The cursor steps backward within the active word; at the word's first
    /// cell it jumps to the *last* cell of the previous word in clue-number
    /// order, adopting that word's orientation (which equals the current one
    /// except across the across/down wrap boundary).
    pub fn delete_letter(&mut self, puzzle: &PuzzleData) -> bool {
        let Some(selection) = self.selection else {
            return false;
        };

        let pos = selection.position();
        let removed = self.answers.clear(pos);
        tracing::trace!(row = pos.row, col = pos.col, removed = removed.is_some(), "letter cleared");

        if let Some(prev) = navigation::step_within_word(puzzle, pos, selection.orientation, true) {
            self.selection = Some(Selection { row: prev.row, col: prev.col, ..selection });
            return true;
        }

        if let Some((first, orientation)) =
            navigation::next_word(puzzle, pos, selection.orientation, true)
        {
            let last = puzzle
                .word_containing(first.row, first.col, orientation)
                .and_then(Word::last);
            if let Some(last) = last {
                self.selection = Some(Selection { row: last.row, col: last.col, orientation });
            }
        }

        removed.is_some() || self.selection != Some(selection)
    }

    /// The word being navigated: the word in the selection's orientation
    /// through the selected cell, falling back to the other orientation when
    /// none exists there (isolated cell).
    #[must_use]
    pub fn active_word<'a>(&self, puzzle: &'a PuzzleData) -> Option<&'a Word> {
        let selection = self.selection?;
        puzzle
            .word_containing(selection.row, selection.col, selection.orientation)
            .or_else(|| {
                puzzle.word_containing(
                    selection.row,
                    selection.col,
                    selection.orientation.opposite(),
                )
            })
    }

    /// The word in the opposite orientation through the selected cell, if any.
    /// At most one exists, since a cell belongs to at most one word per
    /// orientation.
    #[must_use]
    pub fn crossing_word<'a>(&self, puzzle: &'a PuzzleData) -> Option<&'a Word> {
        let selection = self.selection?;
        puzzle.word_containing(
            selection.row,
            selection.col,
            selection.orientation.opposite(),
        )
    }

    /// Whether every letter cell has an answer matching its solution letter.
    #[must_use]
    pub fn is_solved(&self, puzzle: &PuzzleData) -> bool {
        puzzle
            .grid()
            .letter_cells()
            .all(|cell| self.answers.get(cell.position()) == cell.solution)
    }

    /// Computes a render snapshot from the current state.
    ///
    /// Pre-computes everything the presentation layer needs per cell: the
    /// display letter, the clue number, and the selected / active-word /
    /// crossing-word flags. The crossing word is omitted when it coincides
    /// with the active word (which happens only via the isolated-cell
    /// fallback).
    #[must_use]
    pub fn view_model(&self, puzzle: &PuzzleData) -> GridViewModel {
        let active = self.active_word(puzzle);
        let crossing = self
            .crossing_word(puzzle)
            .filter(|word| {
                active.map_or(true, |a| (a.orientation, a.id) != (word.orientation, word.id))
            });

        let selected = self.selection.map(|s| (s.row, s.col));

        let cells = (0..puzzle.rows())
            .map(|row| {
                (0..puzzle.cols())
                    .map(|col| {
                        let pos = Position::new(row, col);
                        let cell = puzzle.cell_at(row, col);
                        let is_selected = selected == Some((row, col));

                        CellView {
                            row,
                            col,
                            is_black: cell.map_or(true, |c| c.is_black()),
                            clue_number: cell.and_then(|c| c.clue_number),
                            entry: self.answers.get(pos),
                            is_selected,
                            in_active_word: !is_selected
                                && active.is_some_and(|word| word.contains(pos)),
                            in_crossing_word: crossing.is_some_and(|word| word.contains(pos)),
                        }
                    })
                    .collect()
            })
            .collect();

        GridViewModel {
            rows: puzzle.rows(),
            cols: puzzle.cols(),
            cells,
            active_word: active.map(WordView::from_word),
            crossing_word: crossing.map(WordView::from_word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Layout;

    fn fixture() -> PuzzleData {
        PuzzleData::build(&Layout::new(vec![
            "AT.".to_string(),
            "N.S".to_string(),
            ".ER".to_string(),
        ]))
    }

    fn select(session: &mut Session, puzzle: &PuzzleData, row: usize, col: usize) {
        assert!(session.tap_cell(puzzle, row, col));
    }

    #[test]
    fn select_first_picks_the_first_across_word() {
        let puzzle = fixture();
        let mut session = Session::new();

        assert!(session.select_first(&puzzle));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (0, 0));
        assert_eq!(selection.orientation, Orientation::Across);
    }

    #[test]
    fn tapping_a_shared_cell_twice_toggles_orientation() {
        let puzzle = fixture();
        let mut session = Session::new();

        // (0,0) belongs to both an across and a down word.
        select(&mut session, &puzzle, 0, 0);
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Across));

        assert!(session.tap_cell(&puzzle, 0, 0));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (0, 0));
        assert_eq!(selection.orientation, Orientation::Down);

        assert!(session.tap_cell(&puzzle, 0, 0));
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Across));
    }

    #[test]
    fn tapping_a_single_orientation_cell_twice_keeps_orientation() {
        let puzzle = fixture();
        let mut session = Session::new();

        // (0,1) only has an across word; the second tap is a no-op.
        select(&mut session, &puzzle, 0, 1);
        assert!(!session.tap_cell(&puzzle, 0, 1));
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Across));
    }

    #[test]
    fn tapping_a_different_cell_keeps_a_supported_orientation() {
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 0, 0);
        // (2,1) has an across word, so across is kept.
        select(&mut session, &puzzle, 2, 1);
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Across));
    }

    #[test]
    fn tapping_a_cell_without_the_current_orientation_switches() {
        let puzzle = fixture();
        let mut session = Session::new();

        // Start navigating down from the shared corner.
        select(&mut session, &puzzle, 0, 0);
        assert!(session.tap_cell(&puzzle, 0, 0));
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Down));

        // (0,1) has no down word: selection switches to across.
        select(&mut session, &puzzle, 0, 1);
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Across));
    }

    #[test]
    fn taps_on_black_cells_are_ignored() {
        let puzzle = fixture();
        let mut session = Session::new();

        assert!(!session.tap_cell(&puzzle, 0, 2));
        assert!(!session.tap_cell(&puzzle, 9, 9));
        assert!(session.selection().is_none());
    }

    #[test]
    fn arrow_switches_orientation_in_place_when_supported() {
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 0, 0);
        // Down arrow implies Down; (0,0) has a down word: no movement.
        assert!(session.move_arrow(&puzzle, Direction::Down));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (0, 0));
        assert_eq!(selection.orientation, Orientation::Down);
    }

    #[test]
    fn arrow_moves_when_orientation_already_matches() {
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 0, 0);
        assert!(session.move_arrow(&puzzle, Direction::Right));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (0, 1));
        assert_eq!(selection.orientation, Orientation::Across);
    }

    #[test]
    fn arrow_falls_back_to_the_destination_orientation() {
        let puzzle = fixture();
        let mut session = Session::new();

        // (1,0) has only a down word. Right arrow implies across, the current
        // cell has no across word, so the selection moves: it skips the black
        // (1,1) and lands on (1,2), which supports only down.
        select(&mut session, &puzzle, 1, 0);
        assert_eq!(session.selection().map(|s| s.orientation), Some(Orientation::Down));

        assert!(session.move_arrow(&puzzle, Direction::Right));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (1, 2));
        assert_eq!(selection.orientation, Orientation::Down);
    }

    #[test]
    fn arrow_at_the_boundary_is_a_no_op() {
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 0, 0);
        assert!(session.move_arrow(&puzzle, Direction::Down));

        // Up from the top row with orientation already Down: no cell above.
        let before = *session.selection().expect("selection");
        let changed = session.move_arrow(&puzzle, Direction::Up);
        assert!(!changed);
        assert_eq!(session.selection(), Some(&before));
    }

    #[test]
    fn jump_word_follows_clue_order_and_orientation() {
        let puzzle = fixture();
        let mut session = Session::new();

        // Words in cycle order: across 1 (AT), across 3 (ER), down 1, down 2.
        select(&mut session, &puzzle, 0, 0);
        assert!(session.jump_word(&puzzle, false));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (2, 1));
        assert_eq!(selection.orientation, Orientation::Across);

        assert!(session.jump_word(&puzzle, false));
        let selection = session.selection().expect("selection");
        assert_eq!((selection.row, selection.col), (0, 0));
        assert_eq!(selection.orientation, Orientation::Down);
    }

    #[test]
    fn active_and_crossing_words_derive_from_the_selection() {
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 0, 0);
        let active = session.active_word(&puzzle).expect("active");
        assert_eq!(active.orientation, Orientation::Across);
        let crossing = session.crossing_word(&puzzle).expect("crossing");
        assert_eq!(crossing.orientation, Orientation::Down);

        // (0,1) has no crossing word.
        select(&mut session, &puzzle, 0, 1);
        assert!(session.crossing_word(&puzzle).is_none());
    }

    #[test]
    fn active_word_falls_back_for_isolated_cells() {
        // (1,2) in this layout belongs only to a down word; selecting it with
        // across orientation must still produce that word as active.
        let puzzle = fixture();
        let mut session = Session::new();

        select(&mut session, &puzzle, 1, 2);
        // tap_cell already switched to down; force across to exercise the
        // fallback.
        session.selection = Some(Selection { row: 1, col: 2, orientation: Orientation::Across });

        let active = session.active_word(&puzzle).expect("fallback word");
        assert_eq!(active.orientation, Orientation::Down);
    }

    #[test]
    fn is_solved_requires_every_letter_to_match() {
        let puzzle = fixture();
        let mut session = Session::new();
        assert!(!session.is_solved(&puzzle));

        for cell in puzzle.grid().letter_cells() {
            if let Some(solution) = cell.solution {
                session.answers.set(cell.position(), solution);
            }
        }
        assert!(session.is_solved(&puzzle));

        session.answers.set(Position::new(0, 0), 'Z');
        assert!(!session.is_solved(&puzzle));
    }

    #[test]
    fn view_model_reflects_selection_and_highlights() {
        let puzzle = fixture();
        let mut session = Session::new();
        select(&mut session, &puzzle, 0, 0);
        session.enter_letter(&puzzle, 'a');

        let vm = session.view_model(&puzzle);
        assert_eq!(vm.rows, 3);
        assert_eq!(vm.cols, 3);

        // The typed letter shows at (0,0); the selection advanced to (0,1).
        assert_eq!(vm.cells[0][0].entry, Some('A'));
        assert!(!vm.cells[0][0].is_selected);
        assert!(vm.cells[0][1].is_selected);
        // Selected cell is excluded from the active-word flag.
        assert!(vm.cells[0][0].in_active_word);
        assert!(!vm.cells[0][1].in_active_word);
        // The crossing word at (0,1) does not exist.
        assert!(vm.crossing_word.is_none());
        // Black cell renders black with no number.
        assert!(vm.cells[0][2].is_black);
        assert_eq!(vm.cells[0][2].clue_number, None);
        // Clue numbers surface on starting cells.
        assert_eq!(vm.cells[0][0].clue_number, Some(1));
    }
}
