//! Configuration management for the skyscrapers checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config files (user-global and per-project)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::validation::{CheckOptions, DoubleHintPolicy};

/// Name of the per-project config file, looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".skyscrapers.toml";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the skyscrapers checker
#[derive(Debug, Parser)]
#[command(name = "skyscrapers")]
#[command(about = "Check Skyscrapers puzzle boards against the rules")]
#[command(version)]
pub struct Args {
    /// Board files to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Policy for lines with a hint on both ends
    #[arg(
        long,
        value_enum,
        help = "Lines with two hints pass when either hint holds, or only when both do"
    )]
    pub double_hint: Option<DoubleHintPolicy>,

    /// Explicit config file, takes precedence over discovered ones
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings that may come from a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub double_hint: Option<DoubleHintPolicy>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Overlay `other` on top of `self`; values set in `other` win
    fn merge(self, other: FileConfig) -> FileConfig {
        FileConfig {
            double_hint: other.double_hint.or(self.double_hint),
            format: other.format.or(self.format),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board files to check
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub options: CheckOptions,
    /// Log level
    pub log_level: String,
    /// Config files that were found and applied, lowest priority first
    pub config_files: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from explicit arguments, discovering config files
    pub fn from_args(args: Args) -> Result<Self> {
        Self::resolve(args, &default_config_paths())
    }

    /// Create configuration from arguments and a list of optional config files
    ///
    /// `discovered` is ordered lowest priority first. Missing discovered files are
    /// skipped and unreadable ones are ignored with a warning; an explicit
    /// `--config` file must load.
    pub fn resolve(args: Args, discovered: &[PathBuf]) -> Result<Self> {
        let mut file_config = FileConfig::default();
        let mut config_files = Vec::new();

        for path in discovered.iter().filter(|p| p.is_file()) {
            match FileConfig::load(path) {
                Ok(loaded) => {
                    file_config = file_config.merge(loaded);
                    config_files.push(path.clone());
                }
                Err(e) => log::warn!("Ignoring config file: {:#}", e),
            }
        }

        if let Some(explicit) = &args.config {
            file_config = file_config.merge(FileConfig::load(explicit)?);
            config_files.push(explicit.clone());
        }

        let double_hint = args
            .double_hint
            .or(file_config.double_hint)
            .unwrap_or_default();

        Ok(Config {
            paths: args.paths,
            format: args.format.or(file_config.format).unwrap_or_default(),
            options: CheckOptions { double_hint },
            log_level: args.log_level,
            config_files,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.config_files
            .iter()
            .any(|p| p.file_name().is_some_and(|name| name == PROJECT_CONFIG_FILE))
    }
}

/// Config files searched by default, lowest priority first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User-global config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("skyscrapers").join("config.toml"));
    }

    paths.push(PathBuf::from(PROJECT_CONFIG_FILE));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "skyscrapers",
            "--double-hint",
            "both",
            "--format",
            "json",
            "a.txt",
            "b.txt",
        ])
        .expect("valid args");

        assert_eq!(args.paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.double_hint, Some(DoubleHintPolicy::Both));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_paths_are_required() {
        assert!(Args::try_parse_from(["skyscrapers"]).is_err());
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = FileConfig {
            double_hint: Some(DoubleHintPolicy::Both),
            format: Some(OutputFormat::Json),
        };
        let overlay = FileConfig {
            double_hint: None,
            format: Some(OutputFormat::Text),
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.double_hint, Some(DoubleHintPolicy::Both));
        assert_eq!(merged.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_file_config_from_toml() {
        let parsed: FileConfig =
            toml::from_str("double_hint = \"both\"\nformat = \"json\"\n").expect("valid toml");
        assert_eq!(parsed.double_hint, Some(DoubleHintPolicy::Both));
        assert_eq!(parsed.format, Some(OutputFormat::Json));

        assert!(toml::from_str::<FileConfig>("unknown = 1").is_err());
    }
}
