//! Command-line argument parsing
//!
//! Supports:
//! - Printing the outline of one file as text or JSON
//! - Focusing the entry that contains a given line
//! - Watch mode that re-publishes the outline whenever the file changes

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::OutlineConfig;

/// Print the `#pragma region` outline of a source file
#[derive(Parser, Debug)]
#[command(
    name = "pragma-outline",
    version,
    about = "Print the #pragma region outline of a source file"
)]
pub struct CliArgs {
    /// File to outline
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat line N as the caret position and focus its entry
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep running and re-publish when the file changes
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Rows kept above the focused entry (overrides the config file)
    #[arg(long, value_name = "N")]
    pub entries_above: Option<usize>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub file: PathBuf,
    /// Caret line, 1-indexed (0 from the user is treated as 1)
    pub caret_line: Option<usize>,
    pub format: OutputFormat,
    pub watch: bool,
    pub outline: OutlineConfig,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded configuration
    pub fn into_config(self, mut outline: OutlineConfig) -> Result<StartupConfig, String> {
        if self.file.is_dir() {
            return Err(format!("{} is a directory", self.file.display()));
        }

        if let Some(above) = self.entries_above {
            outline.entries_above_focus = above;
        }
        if self.no_color || self.format == OutputFormat::Json {
            outline.color = false;
        }

        Ok(StartupConfig {
            file: self.file,
            caret_line: self.line.map(|line| line.max(1)),
            format: self.format,
            watch: self.watch,
            outline,
        })
    }
}
