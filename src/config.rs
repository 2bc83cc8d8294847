//! Settings loaded from `~/.config/tsundoku/config.toml`.
//!
//! ```toml
//! [layout]
//! gap_threshold = 20.0
//! baseline_tolerance = 0.0
//! geometry = "last"
//!
//! [pages]
//! on_error = "skip"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::driver::PageErrorPolicy;
use crate::layout::LayoutConfig;

/// Page iteration settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub on_error: PageErrorPolicy,
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutConfig,
    pub pages: PageSettings,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.layout.validate()?;
        Ok(settings)
    }
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing default file yields defaults; an explicitly named file must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or holds
/// out-of-range thresholds.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            let default = config_path();
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Settings::from_toml(&content).with_context(|| format!("invalid settings in {}", path.display()))
}

/// Return the path to the default settings file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tsundoku")
        .join("config.toml")
}
