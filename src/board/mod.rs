//! Skyscrapers Board
//!
//! Square grid of cells: the outer ring holds hints, the interior holds buildings.
//! Boards are parsed once and never mutated afterwards.

pub mod cell;
pub mod loader;

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

pub use cell::{line_to_string, parse_line, Cell};
pub use loader::read_board;

/// An immutable N×N board stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Parse board text, one row per line
    ///
    /// Every line must have the same length and the number of lines must equal
    /// that length.
    pub fn parse(text: &str) -> Result<Self> {
        let mut size = None;
        let mut cells = Vec::new();
        let mut rows = 0;

        for (line_num, line) in text.lines().enumerate() {
            let row = match parse_line(line) {
                Ok(row) => row,
                Err((col, ch)) => bail!(
                    "line {}, column {}: unexpected character '{}'",
                    line_num + 1,
                    col + 1,
                    ch
                ),
            };

            let expected = *size.get_or_insert(row.len());
            if row.len() != expected {
                bail!(
                    "line {}: expected {} cells, found {}",
                    line_num + 1,
                    expected,
                    row.len()
                );
            }

            cells.extend(row);
            rows += 1;
        }

        let size = match size {
            Some(0) | None => bail!("board is empty"),
            Some(size) => size,
        };
        if rows != size {
            bail!("board must be square: {} rows of {} cells", rows, size);
        }

        Ok(Self { size, cells })
    }

    /// Build a board from rows of text, as used in tests and benchmarks
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let text = rows
            .iter()
            .map(|r| r.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&text)
    }

    /// Number of rows (and columns), border included
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), `None` when outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Cells of a row; callers pass indices below `size()`
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Cells of a column, top to bottom
    pub fn column(&self, col: usize) -> Option<Vec<Cell>> {
        (0..self.size).map(|row| self.get(row, col)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Board whose i-th row is this board's i-th column
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..n {
            for row in 0..n {
                cells.push(self.cells[row * n + col]);
            }
        }
        Self { size: n, cells }
    }

    /// Positions (row, column) of all unfilled cells
    pub fn unknown_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_unknown())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line_to_string(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 7] = [
        "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
    ];

    #[test]
    fn test_parse_sample_board() {
        let board = Board::from_rows(&SAMPLE).expect("valid board");
        assert_eq!(board.size(), 7);
        assert_eq!(board.get(0, 3), Some(Cell::Digit(2)));
        assert_eq!(board.get(0, 0), Some(Cell::Border));
        assert_eq!(line_to_string(board.row(3)), "*543215");
        assert_eq!(board.column(1).map(|c| line_to_string(&c)).as_deref(), Some("*125342"));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let board = Board::from_rows(&SAMPLE).expect("valid board");
        assert_eq!(board.get(7, 0), None);
        assert_eq!(board.get(0, 7), None);
        assert_eq!(board.column(7), None);
    }

    #[test]
    fn test_display_reproduces_text() {
        let board = Board::from_rows(&SAMPLE).expect("valid board");
        assert_eq!(board.to_string(), SAMPLE.join("\n"));
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let board: Board = "*1*\r\n2?*\r\n***\r\n".parse().expect("valid board");
        assert_eq!(board.size(), 3);
        assert_eq!(board.unknown_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let board = Board::from_rows(&SAMPLE).expect("valid board");
        let transposed = board.transpose();
        assert_eq!(line_to_string(transposed.row(3)), "2413251");
        assert_ne!(transposed, board);
        assert_eq!(transposed.transpose(), board);
    }

    #[test]
    fn test_rejects_malformed_boards() {
        assert!(Board::parse("").is_err());
        assert!(Board::parse("\n").is_err());

        let ragged = Board::parse("***\n**\n***").unwrap_err();
        assert!(ragged.to_string().contains("line 2"));

        let not_square = Board::parse("****\n****\n****").unwrap_err();
        assert!(not_square.to_string().contains("square"));

        let bad_char = Board::parse("***\n*x*\n***").unwrap_err();
        assert!(bad_char.to_string().contains("'x'"));
    }
}
