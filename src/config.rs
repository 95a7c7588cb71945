//! Settings file support.
//!
//! Compiler settings can be stored in a TOML file (conventionally
//! `csc.toml`) and loaded before a build. Field names are kebab-case
//! versions of the settings fields; enum values are the lower-cased switch
//! values.

use std::path::Path;

use anyhow::{Context, Result};

use crate::settings::CscSettings;

/// Load compiler settings from a TOML file.
pub fn load(path: &Path) -> Result<CscSettings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("failed to parse settings file: {}", path.display()))
}

/// Load settings with fallback to defaults if the file doesn't exist.
pub fn load_or_default(path: &Path) -> CscSettings {
    if path.exists() {
        load(path).unwrap_or_else(|e| {
            tracing::warn!("failed to load settings from {}: {}", path.display(), e);
            CscSettings::default()
        })
    } else {
        CscSettings::default()
    }
}
