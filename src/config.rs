//! Outline configuration persistence
//!
//! Stores user preferences in `~/.config/pragma-outline/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Rows kept above the focused entry when scrolling to it
pub const DEFAULT_ENTRIES_ABOVE_FOCUS: usize = 17;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Rows shown above the focused entry after a scroll
    #[serde(default = "default_entries_above_focus")]
    pub entries_above_focus: usize,

    /// Quiet period before a file change counts as settled (watch mode)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Rows the terminal view shows at once
    #[serde(default = "default_visible_rows")]
    pub visible_rows: usize,

    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// ANSI colors in terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_entries_above_focus() -> usize {
    DEFAULT_ENTRIES_ABOVE_FOCUS
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_visible_rows() -> usize {
    40
}

fn default_true() -> bool {
    true
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            entries_above_focus: default_entries_above_focus(),
            debounce_ms: default_debounce_ms(),
            visible_rows: default_visible_rows(),
            show_line_numbers: true,
            color: true,
        }
    }
}

impl OutlineConfig {
    /// Config from the standard location; defaults when absent or unreadable
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory, using default outline config");
                Self::default()
            }
        }
    }

    /// Config from `path`; a missing or broken file yields defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(config)) => {
                tracing::info!("Outline config loaded from {}", path.display());
                config
            }
            Ok(None) => {
                tracing::debug!("No outline config at {}", path.display());
                Self::default()
            }
            Err(reason) => {
                tracing::warn!("Ignoring outline config at {}: {}", path.display(), reason);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };
        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Write to the standard location
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = crate::config_paths::config_file() else {
            return Err("No config directory available".to_string());
        };
        self.save_to(&path)
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self).map_err(|e| format!("Cannot encode config: {}", e))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Cannot create {}: {}", dir.display(), e))?;
        }
        std::fs::write(path, yaml).map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;

        tracing::info!("Outline config saved to {}", path.display());
        Ok(())
    }
}
