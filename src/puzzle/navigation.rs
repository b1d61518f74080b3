//! Pure navigation queries over an indexed puzzle.
//!
//! Every function here takes a borrowed [`PuzzleData`] plus positional and
//! orientation arguments and returns `Option`. `None` uniformly means "no
//! such cell/word in that direction", which callers treat as "no-op, selection
//! unchanged". Nothing in this module mutates state or panics.
//!
//! Word-to-word traversal works over a single conceptual cycle: all across
//! words in clue-number order followed by all down words in clue-number
//! order, wrapped circularly. Stepping past the last word of one orientation
//! therefore lands on the other orientation's first word, and stepping back
//! before the first lands on the other's last. When one orientation has
//! no words at all, the cycle degenerates to the remaining list.

use crate::domain::{Answers, Direction, Orientation, Position};
use crate::puzzle::data::PuzzleData;

/// The nearest letter cell from `pos` in a raw arrow direction.
///
/// Steps one unit at a time, skipping over black cells, until a letter cell or
/// the grid boundary is reached. Returns `None` at the boundary; there is no
/// wraparound. Never returns a black cell or an out-of-grid position.
#[must_use]
pub fn adjacent_letter_cell(
    puzzle: &PuzzleData,
    pos: Position,
    direction: Direction,
) -> Option<Position> {
    let (row_step, col_step) = direction.offset();
    let mut row = pos.row as isize;
    let mut col = pos.col as isize;

    loop {
        row += row_step;
        col += col_step;

        if row < 0 || col < 0 {
            return None;
        }

        let cell = puzzle.cell_at(row as usize, col as usize)?;
        if cell.is_letter() {
            return Some(cell.position());
        }
        // Black cell: keep stepping in the same direction.
    }
}

/// The previous/next cell within the word containing `pos`.
///
/// Returns `None` when `pos` has no word in the given orientation, or when it
/// sits at the word's start (`reverse`) or end (forward).
#[must_use]
pub fn step_within_word(
    puzzle: &PuzzleData,
    pos: Position,
    orientation: Orientation,
    reverse: bool,
) -> Option<Position> {
    let word = puzzle.word_containing(pos.row, pos.col, orientation)?;
    let at = word.position_of(pos)?;

    let target = if reverse { at.checked_sub(1)? } else { at + 1 };
    word.cells.get(target).copied()
}

/// The first cell of the word adjacent to the one containing `pos`, with the
/// orientation that word reads in.
///
/// Words are traversed in the across-then-down clue-number cycle described in
/// the module docs. Returns `None` when `pos` has no word in the given
/// orientation.
#[must_use]
pub fn next_word(
    puzzle: &PuzzleData,
    pos: Position,
    orientation: Orientation,
    reverse: bool,
) -> Option<(Position, Orientation)> {
    let current = puzzle.word_containing(pos.row, pos.col, orientation)?;
    let cycle = word_cycle(puzzle);

    let at = cycle
        .iter()
        .position(|&(o, id)| o == orientation && id == current.id)?;

    let len = cycle.len();
    let target = if reverse { (at + len - 1) % len } else { (at + 1) % len };
    let (next_orientation, id) = cycle[target];

    let word = puzzle.word(next_orientation, id)?;
    word.first().map(|first| (first, next_orientation))
}

/// The first unanswered cell in the words adjacent to the one containing
/// `pos`, searching the given orientation only.
///
/// Candidates are visited in clue-number order starting from the word after
/// (or before, with `reverse`) the current one, wrapping around that
/// orientation's full list with the current word considered last. Returns the
/// first cell without an [`Answers`] entry in the first candidate that has
/// one; `None` iff every cell of every word of the orientation is answered
/// (or `pos` has no word in it).
#[must_use]
pub fn first_unfilled_cell_in_adjacent_word(
    puzzle: &PuzzleData,
    pos: Position,
    orientation: Orientation,
    reverse: bool,
    answers: &Answers,
) -> Option<Position> {
    let current = puzzle.word_containing(pos.row, pos.col, orientation)?;
    let order = puzzle.clue_order(orientation);
    let at = order.iter().position(|&id| id == current.id)?;
    let len = order.len();

    for step in 1..=len {
        let slot = if reverse { (at + len - step) % len } else { (at + step) % len };
        let word = puzzle.word(orientation, order[slot])?;

        if let Some(unfilled) = word.cells.iter().find(|&&cell| !answers.contains(cell)) {
            return Some(*unfilled);
        }
    }

    None
}

/// The natural starting cell of a puzzle.
///
/// The first cell of the lowest-numbered across word; failing that, the first
/// letter cell in row-major order; `None` when the grid has no letter cells.
#[must_use]
pub fn first_cell(puzzle: &PuzzleData) -> Option<Position> {
    if let Some(&id) = puzzle.clue_order(Orientation::Across).first() {
        if let Some(first) = puzzle.word(Orientation::Across, id).and_then(|w| w.first()) {
            return Some(first);
        }
    }

    puzzle.grid().letter_cells().next().map(|cell| cell.position())
}

/// All words as `(orientation, id)` pairs: across in clue-number order, then
/// down in clue-number order.
fn word_cycle(puzzle: &PuzzleData) -> Vec<(Orientation, usize)> {
    let across = puzzle
        .clue_order(Orientation::Across)
        .iter()
        .map(|&id| (Orientation::Across, id));
    let down = puzzle
        .clue_order(Orientation::Down)
        .iter()
        .map(|&id| (Orientation::Down, id));
    across.chain(down).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::layout::Layout;

    /// 5×5 ring: across HELLO/TIMES/DOGMA, down along both edge columns.
    fn ring() -> PuzzleData {
        PuzzleData::build(&Layout::new(vec![
            "HELLO".to_string(),
            "A...A".to_string(),
            "TIMES".to_string(),
            "E...T".to_string(),
            "DOGMA".to_string(),
        ]))
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn adjacent_steps_one_letter_cell() {
        let puzzle = ring();
        assert_eq!(adjacent_letter_cell(&puzzle, pos(0, 0), Direction::Right), Some(pos(0, 1)));
        assert_eq!(adjacent_letter_cell(&puzzle, pos(0, 0), Direction::Down), Some(pos(1, 0)));
    }

    #[test]
    fn adjacent_skips_over_black_runs() {
        let puzzle = ring();
        // (2,1) -> down: (3,1) is black, lands on (4,1).
        assert_eq!(adjacent_letter_cell(&puzzle, pos(2, 1), Direction::Down), Some(pos(4, 1)));
        // (1,0) -> right: (1,1)..(1,3) are black, lands on (1,4).
        assert_eq!(adjacent_letter_cell(&puzzle, pos(1, 0), Direction::Right), Some(pos(1, 4)));
    }

    #[test]
    fn adjacent_stops_at_the_boundary() {
        let puzzle = ring();
        assert_eq!(adjacent_letter_cell(&puzzle, pos(0, 0), Direction::Up), None);
        assert_eq!(adjacent_letter_cell(&puzzle, pos(0, 0), Direction::Left), None);
        assert_eq!(adjacent_letter_cell(&puzzle, pos(4, 4), Direction::Down), None);
        assert_eq!(adjacent_letter_cell(&puzzle, pos(4, 4), Direction::Right), None);
    }

    #[test]
    fn adjacent_iteration_terminates_at_every_edge() {
        let puzzle = ring();
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            for start in puzzle.grid().letter_cells().map(|c| c.position()) {
                let mut cursor = start;
                let mut steps = 0;
                while let Some(next) = adjacent_letter_cell(&puzzle, cursor, direction) {
                    let cell = puzzle.cell_at(next.row, next.col).expect("in grid");
                    assert!(cell.is_letter());
                    cursor = next;
                    steps += 1;
                    assert!(steps <= 5, "walk must terminate within the grid span");
                }
            }
        }
    }

    #[test]
    fn step_within_word_walks_the_cell_list() {
        let puzzle = ring();
        assert_eq!(
            step_within_word(&puzzle, pos(0, 0), Orientation::Across, false),
            Some(pos(0, 1))
        );
        assert_eq!(
            step_within_word(&puzzle, pos(0, 1), Orientation::Across, true),
            Some(pos(0, 0))
        );
        // Boundary of traversal, both ends.
        assert_eq!(step_within_word(&puzzle, pos(0, 0), Orientation::Across, true), None);
        assert_eq!(step_within_word(&puzzle, pos(0, 4), Orientation::Across, false), None);
        // No word in that orientation at (2,1).
        assert_eq!(step_within_word(&puzzle, pos(2, 1), Orientation::Down, false), None);
    }

    #[test]
    fn forward_then_backward_returns_to_the_interior_cell() {
        let puzzle = ring();
        for word in puzzle.across_words().iter().chain(puzzle.down_words().iter()) {
            for &cell in &word.cells[..word.len() - 1] {
                let forward = step_within_word(&puzzle, cell, word.orientation, false)
                    .expect("interior cell steps forward");
                let back = step_within_word(&puzzle, forward, word.orientation, true)
                    .expect("steps back");
                assert_eq!(back, cell);
            }
        }
    }

    #[test]
    fn next_word_wraps_across_into_down_and_back() {
        let puzzle = ring();
        // Across clue numbers: HELLO=1, TIMES=3, DOGMA=4. Down: (0,0)=1, (0,4)=2.

        // Past the last across word -> first down word.
        let (first, orientation) =
            next_word(&puzzle, pos(4, 0), Orientation::Across, false).expect("wraps");
        assert_eq!(orientation, Orientation::Down);
        assert_eq!(first, pos(0, 0));

        // Before the first across word -> last down word.
        let (last_down, orientation) =
            next_word(&puzzle, pos(0, 0), Orientation::Across, true).expect("wraps back");
        assert_eq!(orientation, Orientation::Down);
        assert_eq!(last_down, pos(0, 4));

        // Past the last down word -> first across word.
        let (first_across, orientation) =
            next_word(&puzzle, pos(0, 4), Orientation::Down, false).expect("wraps");
        assert_eq!(orientation, Orientation::Across);
        assert_eq!(first_across, pos(0, 0));
    }

    #[test]
    fn next_word_cycles_through_every_word() {
        let puzzle = ring();
        let total = puzzle.word_count();
        assert_eq!(total, 5);

        let mut cursor = pos(0, 0);
        let mut orientation = Orientation::Across;
        let start = puzzle
            .word_containing(cursor.row, cursor.col, orientation)
            .map(|w| (w.id, w.orientation))
            .expect("start word");

        for _ in 0..total {
            let (next, next_orientation) =
                next_word(&puzzle, cursor, orientation, false).expect("cycle continues");
            cursor = next;
            orientation = next_orientation;
        }

        let end = puzzle
            .word_containing(cursor.row, cursor.col, orientation)
            .map(|w| (w.id, w.orientation))
            .expect("end word");
        assert_eq!(end, start);
    }

    #[test]
    fn next_word_stays_in_orientation_when_the_other_is_empty() {
        // Two across words, no down words.
        let puzzle = PuzzleData::build(&Layout::new(vec!["AB.CD".to_string()]));
        assert!(puzzle.down_words().is_empty());

        let (first, orientation) =
            next_word(&puzzle, pos(0, 3), Orientation::Across, false).expect("wraps to own list");
        assert_eq!(orientation, Orientation::Across);
        assert_eq!(first, pos(0, 0));
    }

    #[test]
    fn next_word_requires_a_containing_word() {
        let puzzle = ring();
        // (2,1) has no down word; black (1,1) has nothing.
        assert_eq!(next_word(&puzzle, pos(2, 1), Orientation::Down, false), None);
        assert_eq!(next_word(&puzzle, pos(1, 1), Orientation::Across, false), None);
    }

    #[test]
    fn first_unfilled_scans_adjacent_words_in_clue_order() {
        let puzzle = ring();
        let mut answers = Answers::new();

        // From HELLO with nothing answered, the next across word is TIMES.
        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(0, 0),
                Orientation::Across,
                false,
                &answers
            ),
            Some(pos(2, 0))
        );

        // Fill TIMES entirely: the search moves on to DOGMA.
        for col in 0..5 {
            answers.set(pos(2, col), 'X');
        }
        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(0, 0),
                Orientation::Across,
                false,
                &answers
            ),
            Some(pos(4, 0))
        );

        // Partially filled words yield their first gap.
        answers.set(pos(4, 0), 'X');
        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(0, 0),
                Orientation::Across,
                false,
                &answers
            ),
            Some(pos(4, 1))
        );
    }

    #[test]
    fn first_unfilled_wraps_back_to_the_current_word() {
        let puzzle = ring();
        let mut answers = Answers::new();

        // Everything answered except one cell of the current word.
        for word in puzzle.across_words() {
            for &cell in &word.cells {
                answers.set(cell, 'X');
            }
        }
        answers.clear(pos(0, 2));

        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(0, 0),
                Orientation::Across,
                false,
                &answers
            ),
            Some(pos(0, 2))
        );
    }

    #[test]
    fn first_unfilled_is_none_iff_the_orientation_is_fully_answered() {
        let puzzle = ring();
        let mut answers = Answers::new();

        for word in puzzle.across_words() {
            for &cell in &word.cells {
                answers.set(cell, 'X');
            }
        }

        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(0, 0),
                Orientation::Across,
                false,
                &answers
            ),
            None
        );

        // Down words share edge cells with across words but are not all
        // answered, so the down search still finds gaps.
        assert!(first_unfilled_cell_in_adjacent_word(
            &puzzle,
            pos(0, 0),
            Orientation::Down,
            false,
            &answers
        )
        .is_some());
    }

    #[test]
    fn reverse_search_visits_the_previous_word_first() {
        let puzzle = ring();
        let answers = Answers::new();

        // From TIMES backwards, the previous across word is HELLO.
        assert_eq!(
            first_unfilled_cell_in_adjacent_word(
                &puzzle,
                pos(2, 0),
                Orientation::Across,
                true,
                &answers
            ),
            Some(pos(0, 0))
        );
    }

    #[test]
    fn first_cell_prefers_the_lowest_numbered_across_word() {
        let puzzle = ring();
        assert_eq!(first_cell(&puzzle), Some(pos(0, 0)));
    }

    #[test]
    fn first_cell_falls_back_to_row_major_letters() {
        // No across words at all: isolated letters only.
        let puzzle = PuzzleData::build(&Layout::new(vec!["A.".to_string(), ".B".to_string()]));
        assert!(puzzle.across_words().is_empty());
        assert_eq!(first_cell(&puzzle), Some(pos(0, 0)));

        let empty = PuzzleData::build(&Layout::new(vec!["..".to_string()]));
        assert_eq!(first_cell(&empty), None);
    }
}
