//! Command-line argument parsing for the grid shell
//!
//! Supports:
//! - Opening a saved grid file
//! - New blank grid mode
//! - Reading commands from a script file instead of stdin
//! - Overriding the blank row count

use clap::Parser;
use std::path::PathBuf;

/// Job request spreadsheet editor
#[derive(Parser, Debug)]
#[command(name = "jobgrid", version, about = "Job request spreadsheet editor")]
pub struct CliArgs {
    /// Grid JSON file to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Start with a blank grid (ignore FILE)
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Read commands from FILE instead of stdin
    #[arg(short = 's', long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Rows in a blank grid (overrides config)
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Only print the grid on `print`
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Write the effective config to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Print the current log file path and exit
    #[arg(long)]
    pub log_path: bool,
}

/// What grid the session starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Blank grid of the configured row count
    Blank,
    /// Load this file once the shell is running
    Open(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Script to run; `None` reads stdin
    pub script: Option<PathBuf>,
    pub rows: Option<usize>,
    /// Suppress the grid after each command
    pub quiet: bool,
    pub write_config: bool,
    pub log_path: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match self.file {
            Some(path) if !self.new => {
                if path.is_dir() {
                    return Err(format!("Cannot open a directory: {}", path.display()));
                }
                StartupMode::Open(path)
            }
            _ => StartupMode::Blank,
        };

        if let Some(script) = &self.script {
            if script.is_dir() {
                return Err(format!("Script is a directory: {}", script.display()));
            }
        }

        if self.rows == Some(0) {
            return Err("--rows must be at least 1".to_string());
        }

        Ok(StartupConfig {
            mode,
            script: self.script,
            rows: self.rows,
            quiet: self.quiet,
            write_config: self.write_config,
            log_path: self.log_path,
        })
    }
}

impl StartupConfig {
    /// File to load at startup, if any
    pub fn file_path(&self) -> Option<&PathBuf> {
        match &self.mode {
            StartupMode::Open(path) => Some(path),
            StartupMode::Blank => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: Option<&str>) -> CliArgs {
        CliArgs {
            file: file.map(PathBuf::from),
            new: false,
            script: None,
            rows: None,
            quiet: false,
            write_config: false,
            log_path: false,
        }
    }

    #[test]
    fn test_no_file_gives_blank_mode() {
        let config = args(None).into_config().unwrap();
        assert_eq!(config.mode, StartupMode::Blank);
        assert_eq!(config.file_path(), None);
    }

    #[test]
    fn test_new_flag_ignores_file() {
        let mut cli = args(Some("jobs.json"));
        cli.new = true;
        let config = cli.into_config().unwrap();
        assert_eq!(config.mode, StartupMode::Blank);
    }

    #[test]
    fn test_single_file() {
        let config = args(Some("jobs.json")).into_config().unwrap();
        assert_eq!(config.file_path(), Some(&PathBuf::from("jobs.json")));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = args(Some(dir.path().to_str().unwrap()));
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let mut cli = args(None);
        cli.rows = Some(0);
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_parse_flags() {
        let cli = CliArgs::parse_from(["jobgrid", "-n", "--script", "cmds.txt", "--rows", "5"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.mode, StartupMode::Blank);
        assert_eq!(config.script, Some(PathBuf::from("cmds.txt")));
        assert_eq!(config.rows, Some(5));
        assert!(!config.write_config);
    }
}
