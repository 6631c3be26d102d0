//! Skyscrapers Board Checker
//!
//! Validates filled or partially filled Skyscrapers puzzle boards.
//!
//! This library provides:
//! - Board parsing into typed cells
//! - Row, column and visibility rule checks
//! - Diagnostic reports naming each failed rule
//! - Configuration and the command-line driver

pub mod board;
pub mod cli;
pub mod config;
pub mod validation;

// Re-exports for clean public API
pub use board::{read_board, Board, Cell};
pub use config::Config;
pub use validation::{
    check_board, check_skyscrapers, validate_board, CheckOptions, Diagnostic, DoubleHintPolicy,
    Rule, Severity, ValidationResult,
};
