//! Board Cells
//!
//! A single position on the board, classified once at load time.

use std::fmt;

/// Marker for a cell that has not been filled in yet
pub const UNKNOWN_CHAR: char = '?';

/// Marker for a border position without a hint
pub const BORDER_CHAR: char = '*';

/// One cell of a skyscrapers board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Building height inside the grid, or a visibility hint on the border
    Digit(u8),
    /// Unfilled cell ('?')
    Unknown,
    /// No building and no hint ('*')
    Border,
}

impl Cell {
    /// Classify a character, returning `None` for anything outside the board alphabet
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            UNKNOWN_CHAR => Some(Cell::Unknown),
            BORDER_CHAR => Some(Cell::Border),
            c => c.to_digit(10).map(|d| Cell::Digit(d as u8)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Digit(d) => char::from(b'0' + d),
            Cell::Unknown => UNKNOWN_CHAR,
            Cell::Border => BORDER_CHAR,
        }
    }

    /// Height or hint value, if this cell holds a digit
    pub fn digit(self) -> Option<u8> {
        match self {
            Cell::Digit(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_border(self) -> bool {
        matches!(self, Cell::Border)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Cell::Unknown)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a single line of board text into cells
///
/// Returns the column index of the first character outside the alphabet on failure.
pub fn parse_line(line: &str) -> Result<Vec<Cell>, (usize, char)> {
    line.chars()
        .enumerate()
        .map(|(col, ch)| Cell::from_char(ch).ok_or((col, ch)))
        .collect()
}

/// Render a line of cells back to its text form
pub fn line_to_string(line: &[Cell]) -> String {
    line.iter().map(|c| c.to_char()).collect()
}
