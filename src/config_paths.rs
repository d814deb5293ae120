//! Centralized configuration paths for pincode
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/pincode/`
//! - Windows: `%APPDATA%\pincode\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "pincode";

/// Base config directory for pincode
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/pincode`
///   - Else: `~/.config/pincode`
///
/// Windows:
///   - `%APPDATA%\pincode`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/pincode/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/pincode/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `logs/` (and any missing parents) under `base`
fn create_logs_dir(base: &Path) -> Result<PathBuf> {
    let logs = base.join("logs");
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create log directory {}", logs.display()))?;
    Ok(logs)
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let base = config_dir().context("No config directory available")?;
    create_logs_dir(&base)
}
