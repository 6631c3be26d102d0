//! Board Rules
//!
//! Pass/fail predicates over a board. Each row check works on a single line of
//! cells, so columns are checked by running the same code over the transposed
//! board.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::board::{read_board, Board, Cell};

/// How a line with hints on both ends is judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DoubleHintPolicy {
    /// The line passes when at least one of its two hints holds
    #[default]
    Either,
    /// Each hint must hold on its own
    Both,
}

/// End of a line a hint is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

/// A hint that does not match the buildings seen from its side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityMismatch {
    pub side: Side,
    /// Hint value, `None` when the hint cell is unfilled
    pub hint: Option<u8>,
    /// Buildings seen, `None` when an unfilled cell blocks the count
    pub visible: Option<usize>,
}

/// Cells between the two hint positions of a line
pub fn interior(line: &[Cell]) -> &[Cell] {
    if line.len() < 2 {
        &[]
    } else {
        &line[1..line.len() - 1]
    }
}

/// Count buildings visible looking from the start of the line inwards
///
/// A building is visible when it is strictly taller than everything before it.
/// Border cells are skipped; an unfilled cell makes the count unknowable.
pub fn count_visible(line: &[Cell]) -> Option<usize> {
    let mut highest = 0;
    let mut visible = 0;

    for cell in interior(line) {
        match *cell {
            Cell::Digit(height) => {
                if height > highest {
                    highest = height;
                    visible += 1;
                }
            }
            Cell::Border => continue,
            Cell::Unknown => return None,
        }
    }

    Some(visible)
}

/// True if exactly `hint` buildings are visible from the start of the line
pub fn left_to_right_check(line: &[Cell], hint: u8) -> bool {
    count_visible(line) == Some(usize::from(hint))
}

/// True if the board has no unfilled cells
pub fn check_not_finished_board(board: &Board) -> bool {
    board.rows().all(|row| !row.iter().any(|cell| cell.is_unknown()))
}

/// First interior cell that repeats an earlier one, ignoring border cells
///
/// Unfilled cells are compared like any other, so two of them count as a repeat.
pub fn find_duplicate(line: &[Cell]) -> Option<Cell> {
    let mut seen = HashSet::new();
    interior(line)
        .iter()
        .filter(|cell| !cell.is_border())
        .find(|cell| !seen.insert(**cell))
        .copied()
}

/// Every value that appears more than once among the interior cells, in order of
/// its first repeat
pub fn find_duplicates(line: &[Cell]) -> Vec<Cell> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for cell in interior(line).iter().filter(|cell| !cell.is_border()) {
        if !seen.insert(*cell) && !repeated.contains(cell) {
            repeated.push(*cell);
        }
    }
    repeated
}

/// Indices of the rows holding buildings (all but the first and last)
pub fn interior_rows(board: &Board) -> std::ops::Range<usize> {
    1..board.size().saturating_sub(1)
}

/// True if no interior row repeats a height
pub fn check_uniqueness_in_rows(board: &Board) -> bool {
    interior_rows(board).all(|row| find_duplicate(board.row(row)).is_none())
}

fn check_from_start(line: &[Cell], side: Side) -> Option<VisibilityMismatch> {
    let hint = line.first().and_then(|cell| cell.digit());
    let passes = hint.is_some_and(|hint| left_to_right_check(line, hint));
    if passes {
        None
    } else {
        Some(VisibilityMismatch {
            side,
            hint,
            visible: count_visible(line),
        })
    }
}

fn check_from_end(line: &[Cell]) -> Option<VisibilityMismatch> {
    let reversed: Vec<Cell> = line.iter().rev().copied().collect();
    check_from_start(&reversed, Side::End)
}

/// Hints of a line that are not satisfied
///
/// An empty result means the line passes. Lines without hints always pass.
pub fn line_visibility(line: &[Cell], policy: DoubleHintPolicy) -> Vec<VisibilityMismatch> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Vec::new();
    };

    match (first.is_border(), last.is_border()) {
        (true, true) => Vec::new(),
        (true, false) => check_from_end(line).into_iter().collect(),
        (false, true) => check_from_start(line, Side::Start).into_iter().collect(),
        (false, false) => {
            let forward = check_from_start(line, Side::Start);
            let backward = check_from_end(line);
            let either_holds = forward.is_none() || backward.is_none();
            if policy == DoubleHintPolicy::Either && either_holds {
                Vec::new()
            } else {
                forward.into_iter().chain(backward).collect()
            }
        }
    }
}

/// True if every row's hints match, using the default double-hint policy
pub fn check_horizontal_visibility(board: &Board) -> bool {
    check_horizontal_visibility_with(board, DoubleHintPolicy::default())
}

pub fn check_horizontal_visibility_with(board: &Board, policy: DoubleHintPolicy) -> bool {
    board
        .rows()
        .all(|row| line_visibility(row, policy).is_empty())
}

/// Uniqueness and visibility for columns, using the default double-hint policy
pub fn check_columns(board: &Board) -> bool {
    check_columns_with(board, DoubleHintPolicy::default())
}

pub fn check_columns_with(board: &Board, policy: DoubleHintPolicy) -> bool {
    let columns = board.transpose();
    check_uniqueness_in_rows(&columns) && check_horizontal_visibility_with(&columns, policy)
}

/// Full rule check of a loaded board
pub fn check_board(board: &Board) -> bool {
    check_board_with(board, DoubleHintPolicy::default())
}

pub fn check_board_with(board: &Board, policy: DoubleHintPolicy) -> bool {
    let finished = check_not_finished_board(board);
    log::debug!("finished={}", finished);
    if !finished {
        return false;
    }

    let rows_unique = check_uniqueness_in_rows(board);
    log::debug!("rows_unique={}", rows_unique);
    if !rows_unique {
        return false;
    }

    let rows_visible = check_horizontal_visibility_with(board, policy);
    log::debug!("rows_visible={}", rows_visible);
    if !rows_visible {
        return false;
    }

    let columns = check_columns_with(board, policy);
    log::debug!("columns={}", columns);
    columns
}

/// Load a board file and check it against every rule
///
/// Rule violations give `Ok(false)`; unreadable or malformed files are errors.
pub fn check_skyscrapers(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let board = read_board(path)?;
    let verdict = check_board(&board);
    log::info!("{}: {}", path.display(), if verdict { "ok" } else { "failed" });
    Ok(verdict)
}
