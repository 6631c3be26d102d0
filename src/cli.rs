//! Command-line driver
//!
//! Checks each board file named on the command line and prints a verdict.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::board::read_board;
use crate::config::{Args, Config, OutputFormat};
use crate::validation::{validate_board, CheckOptions, Diagnostic, Severity};

/// Verdict and diagnostics for one board file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load and validate a single board file
pub fn check_file(path: &Path, options: &CheckOptions) -> Result<FileReport> {
    let board = read_board(path)?;
    let result = validate_board(&board, options);
    let valid = result.is_valid();
    log::info!("{}: {}", path.display(), if valid { "ok" } else { "failed" });

    Ok(FileReport {
        path: path.display().to_string(),
        valid,
        diagnostics: result.diagnostics,
    })
}

/// Check every configured board, writing results to `out`
///
/// Returns true when all boards pass. Stops at the first file that cannot be loaded,
/// after writing the reports of the files checked before it.
pub fn run(config: &Config, out: &mut impl Write) -> Result<bool> {
    let mut reports = Vec::new();
    let mut load_error = None;

    for path in &config.paths {
        match check_file(path, &config.options) {
            Ok(report) => reports.push(report),
            Err(e) => {
                load_error = Some(e);
                break;
            }
        }
    }

    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                write_text(report, out)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    match load_error {
        Some(e) => Err(e),
        None => Ok(reports.iter().all(|r| r.valid)),
    }
}

fn write_text(report: &FileReport, out: &mut impl Write) -> io::Result<()> {
    let verdict = if report.valid { "ok" } else { "FAILED" };
    writeln!(out, "{}: {}", report.path, verdict)?;

    for diagnostic in &report.diagnostics {
        let level = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let location = match (diagnostic.row, diagnostic.column) {
            (Some(row), Some(column)) => format!("{}:{}", row, column),
            (Some(row), None) => format!("row {}", row),
            (None, Some(column)) => format!("column {}", column),
            (None, None) => "board".to_string(),
        };
        writeln!(out, "  {} [{}] {}", level, location, diagnostic.message)?;
    }

    Ok(())
}

/// Entry point for the `skyscrapers` binary
///
/// Exit status is 0 when every board passes, 1 when any fails and 2 on errors.
pub fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let result = Config::from_args(args).and_then(|config| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&config, &mut out)
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
