//! Validation
//!
//! Boolean rule predicates plus an engine that reports where each rule fails.

pub mod engine;
pub mod rules;

pub use engine::{validate_board, CheckOptions, Diagnostic, Rule, Severity, ValidationResult};
pub use rules::{
    check_board, check_board_with, check_columns, check_horizontal_visibility,
    check_not_finished_board, check_skyscrapers, check_uniqueness_in_rows, count_visible,
    left_to_right_check, DoubleHintPolicy,
};
