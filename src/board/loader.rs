//! Board Loader
//!
//! Reads board text from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Board;

/// Read and parse a board file
pub fn read_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;

    let board = Board::parse(&text)
        .with_context(|| format!("Malformed board in {}", path.display()))?;
    log::debug!("Loaded {}x{} board from {:?}", board.size(), board.size(), path);

    Ok(board)
}
