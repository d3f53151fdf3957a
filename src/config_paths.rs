//! Where pragma-outline keeps its files
//!
//! `PRAGMA_OUTLINE_HOME` overrides the location outright. Otherwise:
//! - Unix/macOS: `$XDG_CONFIG_HOME/pragma-outline/`, else `~/.config/pragma-outline/`
//! - Windows: `%APPDATA%\pragma-outline\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "pragma-outline";

/// Environment variable that replaces the whole config directory
pub const HOME_ENV: &str = "PRAGMA_OUTLINE_HOME";

pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = non_empty_var(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    non_empty_var("APPDATA")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    non_empty_var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn non_empty_var(name: &str) -> Option<std::ffi::OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
