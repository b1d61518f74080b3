//! Word indexing: scans, validity pruning, and clue numbering.
//!
//! Indexing runs once per puzzle load, immediately after the grid is built:
//!
//! 1. **Across scan**: row-major, left to right. A cell starts an across word
//!    iff it sits on the left edge or borders black on the left, and its right
//!    neighbor is a letter. From a start, the maximal letter run is collected.
//! 2. **Down scan**: column-major, top to bottom, the symmetric rule on
//!    vertical neighbors.
//! 3. **Validity pruning**: every candidate is re-validated structurally
//!    against the current grid: a word is kept iff its cells are still a
//!    contiguous letter run of length ≥ 2. Anything else (single-cell
//!    fragments included) is dropped and surviving words are re-id'd densely.
//! 4. **Clue numbering**: one row-major pass over the final word set. A cell
//!    is numbered iff it is the first cell of a retained across or down word;
//!    numbers run 1..N with no gaps, and a cell starting both words shares one
//!    number between them.
//!
//! The pruning step is structural on purpose: orphan fragments left behind by
//! grid edits are recognized by shape, not by any hard-coded coordinates.

use std::collections::HashMap;

use crate::domain::{Grid, Orientation, Position, Word};

/// Scans the grid, prunes invalid runs, numbers clues, and back-links cells.
///
/// Returns the `(across, down)` word lists. Cell back-links (`across_word`,
/// `down_word`, `clue_number`) are written into `grid` as a side effect; black
/// cells are never touched.
pub(crate) fn index_grid(grid: &mut Grid) -> (Vec<Word>, Vec<Word>) {
    let mut across_runs = scan_runs(grid, Orientation::Across);
    let mut down_runs = scan_runs(grid, Orientation::Down);

    retain_valid_runs(grid, &mut across_runs, Orientation::Across);
    retain_valid_runs(grid, &mut down_runs, Orientation::Down);

    let numbers = assign_clue_numbers(grid, &across_runs, &down_runs);

    let across = build_words(grid, across_runs, Orientation::Across, &numbers);
    let down = build_words(grid, down_runs, Orientation::Down, &numbers);

    tracing::debug!(
        across_words = across.len(),
        down_words = down.len(),
        clue_numbers = numbers.len(),
        "grid indexed"
    );

    (across, down)
}

/// Collects the maximal letter runs of the given orientation, in scan order.
///
/// Across runs are discovered row-major, down runs column-major. Runs of
/// length 1 are never produced: the start predicate requires a same-axis
/// letter neighbor.
pub(crate) fn scan_runs(grid: &Grid, orientation: Orientation) -> Vec<Vec<Position>> {
    match orientation {
        Orientation::Across => scan_across(grid),
        Orientation::Down => scan_down(grid),
    }
}

fn scan_across(grid: &Grid) -> Vec<Vec<Position>> {
    let mut runs = Vec::new();

    for row in 0..grid.rows() {
        let mut col = 0;
        while col < grid.cols() {
            let starts = grid.is_letter(row, col)
                && (col == 0 || !grid.is_letter(row, col - 1))
                && grid.is_letter(row, col + 1);

            if starts {
                let mut run = Vec::new();
                while grid.is_letter(row, col) {
                    run.push(Position::new(row, col));
                    col += 1;
                }
                runs.push(run);
            } else {
                col += 1;
            }
        }
    }

    runs
}

fn scan_down(grid: &Grid) -> Vec<Vec<Position>> {
    let mut runs = Vec::new();

    for col in 0..grid.cols() {
        let mut row = 0;
        while row < grid.rows() {
            let starts = grid.is_letter(row, col)
                && (row == 0 || !grid.is_letter(row - 1, col))
                && grid.is_letter(row + 1, col);

            if starts {
                let mut run = Vec::new();
                while grid.is_letter(row, col) {
                    run.push(Position::new(row, col));
                    row += 1;
                }
                runs.push(run);
            } else {
                row += 1;
            }
        }
    }

    runs
}

/// Drops runs that are no longer a contiguous letter run of length ≥ 2 in the
/// current grid. Remaining runs keep their relative order, so re-enumeration
/// yields dense ids.
pub(crate) fn retain_valid_runs(
    grid: &Grid,
    runs: &mut Vec<Vec<Position>>,
    orientation: Orientation,
) {
    runs.retain(|run| {
        let valid = is_valid_run(grid, run, orientation);
        if !valid {
            tracing::debug!(
                orientation = %orientation,
                start = ?run.first(),
                len = run.len(),
                "dropping invalid word fragment"
            );
        }
        valid
    });
}

/// Whether `cells` still describes a word: length ≥ 2, every cell a letter in
/// the current grid, and consecutive cells adjacent along the orientation
/// axis. Contiguity plus all-letters together guarantee no black cell sits
/// between the endpoints.
pub(crate) fn is_valid_run(grid: &Grid, cells: &[Position], orientation: Orientation) -> bool {
    if cells.len() < 2 {
        return false;
    }

    let contiguous = cells.windows(2).all(|pair| match orientation {
        Orientation::Across => pair[1].row == pair[0].row && pair[1].col == pair[0].col + 1,
        Orientation::Down => pair[1].col == pair[0].col && pair[1].row == pair[0].row + 1,
    });

    contiguous && cells.iter().all(|pos| grid.is_letter(pos.row, pos.col))
}

/// Row-major numbering pass over the retained runs.
///
/// Writes each number onto its grid cell and returns the start-position → clue
/// number map the word builders read from.
fn assign_clue_numbers(
    grid: &mut Grid,
    across_runs: &[Vec<Position>],
    down_runs: &[Vec<Position>],
) -> HashMap<Position, u32> {
    let across_starts: Vec<Position> = across_runs.iter().filter_map(|r| r.first().copied()).collect();
    let down_starts: Vec<Position> = down_runs.iter().filter_map(|r| r.first().copied()).collect();

    let mut numbers = HashMap::new();
    let mut next = 1u32;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            if across_starts.contains(&pos) || down_starts.contains(&pos) {
                numbers.insert(pos, next);
                if let Some(cell) = grid.cell_mut(row, col) {
                    cell.clue_number = Some(next);
                }
                next += 1;
            }
        }
    }

    numbers
}

/// Turns runs into [`Word`]s with dense ids and placeholder clue text, and
/// back-links every cell to its word.
fn build_words(
    grid: &mut Grid,
    runs: Vec<Vec<Position>>,
    orientation: Orientation,
    numbers: &HashMap<Position, u32>,
) -> Vec<Word> {
    runs.into_iter()
        .enumerate()
        .filter_map(|(id, cells)| {
            let first = cells.first().copied()?;
            let clue_number = numbers.get(&first).copied()?;

            for pos in &cells {
                if let Some(cell) = grid.cell_mut(pos.row, pos.col) {
                    match orientation {
                        Orientation::Across => cell.across_word = Some(id),
                        Orientation::Down => cell.down_word = Some(id),
                    }
                }
            }

            Some(Word {
                id,
                orientation,
                clue_number,
                clue: format!("{orientation} {clue_number}"),
                cells,
            })
        })
        .collect()
}
