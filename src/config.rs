//! Rendering configuration.
//!
//! The default language is injected here instead of living in mutable
//! process-wide state: the renderer loads [`RenderSettings`] once and passes
//! `default_language` to [`crate::catalog::Catalog::load_with`].

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::Language;

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Page-rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// Language served when a request carries no explicit language.
    pub default_language: Language,
}

/// Load settings from `.edge-page-i18n.json` in the workspace root.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no settings file; callers use `RenderSettings::default()`
///
/// # Errors
/// - file read error
/// - JSON parse error
pub fn load_from_workspace(workspace_root: &Path) -> Result<Option<RenderSettings>, ConfigError> {
    let config_path = workspace_root.join(".edge-page-i18n.json");

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: RenderSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
