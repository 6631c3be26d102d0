//! End-to-end checks of board files on disk
use std::io::Write;

use skyscrapers_checker::{check_skyscrapers, read_board};
use tempfile::NamedTempFile;

const SAMPLE: &str = "***21**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***\n";

fn board_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write board");
    file
}

#[test]
fn test_sample_board_passes() {
    let file = board_file(SAMPLE);
    assert!(check_skyscrapers(file.path()).expect("readable board"));
}

#[test]
fn test_final_newline_is_optional() {
    let file = board_file(SAMPLE.trim_end());
    let board = read_board(file.path()).expect("readable board");
    assert_eq!(board.size(), 7);
    assert!(check_skyscrapers(file.path()).expect("readable board"));
}

#[test]
fn test_unfinished_board_fails() {
    let file = board_file("***21**\n4?????*\n4?????*\n*?????5\n*?????*\n*?????*\n*2*1***\n");
    assert!(!check_skyscrapers(file.path()).expect("readable board"));
}

#[test]
fn test_repeated_height_fails() {
    let file = board_file("***21**\n412453*\n423145*\n*553215\n*35214*\n*41532*\n*2*1***\n");
    assert!(!check_skyscrapers(file.path()).expect("readable board"));
}

#[test]
fn test_wrong_column_hint_fails() {
    // top hint of column 4 changed from 1 to 3
    let file = board_file("***23**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***\n");
    assert!(!check_skyscrapers(file.path()).expect("readable board"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = check_skyscrapers(dir.path().join("missing.txt")).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.txt"));
}

#[test]
fn test_malformed_board_is_an_error() {
    let file = board_file("***21**\n412453*\n42314*\n");
    let err = check_skyscrapers(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("line 3"));
}

#[test]
fn test_report_types_from_crate_root() {
    use skyscrapers_checker::{validate_board, CheckOptions, Rule, Severity};

    let file = board_file("***21**\n412453*\n423145*\n*553215\n*35214*\n*41532*\n*2*1***\n");
    let board = read_board(file.path()).expect("readable board");
    let result = validate_board(&board, &CheckOptions::default());

    let diagnostic = result.errors().next().expect("repeated height reported");
    assert_eq!(diagnostic.rule, Rule::RowUniqueness);
    assert_eq!(diagnostic.severity, Severity::Error);
}
