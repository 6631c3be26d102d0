//! Validation Engine
//!
//! Runs every rule over a board and collects diagnostics describing each
//! failure, instead of stopping at the first one.

use serde::Serialize;

use crate::board::{Board, Cell};
use crate::validation::rules::{
    find_duplicates, interior, interior_rows, line_visibility, DoubleHintPolicy, Side,
    VisibilityMismatch,
};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Rule a diagnostic belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Finished,
    RowUniqueness,
    RowVisibility,
    ColumnUniqueness,
    ColumnVisibility,
    HeightRange,
}

/// A diagnostic message for a rule violation
///
/// `row` and `column` are 1-based positions in the board text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub rule: Rule,
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub message: String,
    pub severity: Severity,
}

/// Options controlling how a board is judged
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CheckOptions {
    pub double_hint: DoubleHintPolicy,
}

/// Result of validating a board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    fn add(&mut self, rule: Rule, position: (Option<usize>, Option<usize>), message: String) {
        self.diagnostics.push(Diagnostic {
            rule,
            row: position.0,
            column: position.1,
            message,
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, rule: Rule, row: usize, column: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            rule,
            row: Some(row),
            column: Some(column),
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// True if any error was reported for `rule`
    pub fn has_error(&self, rule: Rule) -> bool {
        self.errors().any(|d| d.rule == rule)
    }
}

/// Orientation of the lines being checked
#[derive(Debug, Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

impl Axis {
    fn noun(self) -> &'static str {
        match self {
            Axis::Rows => "row",
            Axis::Columns => "column",
        }
    }

    fn side_name(self, side: Side) -> &'static str {
        match (self, side) {
            (Axis::Rows, Side::Start) => "left",
            (Axis::Rows, Side::End) => "right",
            (Axis::Columns, Side::Start) => "top",
            (Axis::Columns, Side::End) => "bottom",
        }
    }

    fn position(self, index: usize) -> (Option<usize>, Option<usize>) {
        match self {
            Axis::Rows => (Some(index + 1), None),
            Axis::Columns => (None, Some(index + 1)),
        }
    }

    fn uniqueness_rule(self) -> Rule {
        match self {
            Axis::Rows => Rule::RowUniqueness,
            Axis::Columns => Rule::ColumnUniqueness,
        }
    }

    fn visibility_rule(self) -> Rule {
        match self {
            Axis::Rows => Rule::RowVisibility,
            Axis::Columns => Rule::ColumnVisibility,
        }
    }
}

/// Validate a board against every rule
///
/// `is_valid()` on the result agrees with
/// [`check_board_with`](crate::validation::rules::check_board_with) for the same policy.
pub fn validate_board(board: &Board, options: &CheckOptions) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (row, column) in board.unknown_cells() {
        result.add(
            Rule::Finished,
            (Some(row + 1), Some(column + 1)),
            "Cell is not filled in".to_string(),
        );
    }

    check_heights(board, &mut result);

    check_lines(board, Axis::Rows, options, &mut result);
    check_lines(&board.transpose(), Axis::Columns, options, &mut result);

    log::debug!(
        "Validated {}x{} board: {} diagnostics",
        board.size(),
        board.size(),
        result.diagnostics.len()
    );
    result
}

/// Warn about building heights that cannot occur on a board of this size
fn check_heights(board: &Board, result: &mut ValidationResult) {
    let max_height = board.size().saturating_sub(2);

    for row in interior_rows(board) {
        for (offset, cell) in interior(board.row(row)).iter().enumerate() {
            if let Cell::Digit(height) = *cell {
                if height == 0 || usize::from(height) > max_height {
                    result.add_warning(
                        Rule::HeightRange,
                        row + 1,
                        offset + 2,
                        format!("Height {} is outside 1..={}", height, max_height),
                    );
                }
            }
        }
    }
}

fn check_lines(lines: &Board, axis: Axis, options: &CheckOptions, result: &mut ValidationResult) {
    for index in interior_rows(lines) {
        for cell in find_duplicates(lines.row(index)) {
            result.add(
                axis.uniqueness_rule(),
                axis.position(index),
                format!("Repeated value '{}' in {} {}", cell, axis.noun(), index + 1),
            );
        }
    }

    for (index, line) in lines.rows().enumerate() {
        for mismatch in line_visibility(line, options.double_hint) {
            result.add(
                axis.visibility_rule(),
                axis.position(index),
                describe_mismatch(axis, index, &mismatch),
            );
        }
    }
}

fn describe_mismatch(axis: Axis, index: usize, mismatch: &VisibilityMismatch) -> String {
    let side = axis.side_name(mismatch.side);
    let hint = match mismatch.hint {
        Some(hint) => format!("hint {}", hint),
        None => "unfilled hint".to_string(),
    };
    let seen = match mismatch.visible {
        Some(count) => format!("{} visible", count),
        None => "visibility unknown".to_string(),
    };

    format!(
        "{} {}: {} {} does not match ({})",
        axis.noun(),
        index + 1,
        side,
        hint,
        seen
    )
}
