//! Configuration file loading and storage root resolution.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BannerError;
use crate::style::Style;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where banners are kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Defaults applied when command-line flags are omitted.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Storage configuration.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Storage root override. A leading `~/` expands to the home directory.
    pub root: Option<String>,
}

/// Default values from the config file.
#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    /// Style name used when `--style` is not given.
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    Style::Box.name().to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { style: default_style() }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Style to use when none was given on the command line. Unknown names
    /// fall back to box.
    #[must_use]
    pub fn default_style(&self) -> Style {
        Style::from_name(&self.defaults.style)
    }

    /// Resolve the storage root: explicit flag, then config file, then
    /// `~/.bcp-shell/banners/custom`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown.
    pub fn storage_root(&self, explicit: Option<&Path>) -> Result<PathBuf, BannerError> {
        if let Some(p) = explicit {
            return Ok(p.to_path_buf());
        }
        match self.storage.root.as_deref() {
            Some(root) => expand_home(root),
            None => Ok(home_dir()?.join(".bcp-shell/banners/custom")),
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `~/.bcp-shell/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    default_config_path()
}

/// Default config path: `~/.bcp-shell/config.toml`.
fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".bcp-shell/config.toml"),
        None => PathBuf::from("bcp-banner.toml"),
    }
}

fn home_dir() -> Result<PathBuf, BannerError> {
    dirs::home_dir().ok_or(BannerError::NoHomeDir)
}

/// Expand a leading `~/` (or a bare `~`) to the home directory.
fn expand_home(path: &str) -> Result<PathBuf, BannerError> {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}
