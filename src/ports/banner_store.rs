//! Banner store port for persisting rendered banners.

use std::path::{Path, PathBuf};

use crate::error::BannerError;

/// Persists rendered banners and enumerates the ones already saved.
pub trait BannerStore {
    /// Directory banners are stored under.
    fn root(&self) -> &Path;

    /// Save `content` under `name`, replacing any existing banner of that
    /// name. Returns the location written.
    ///
    /// # Errors
    ///
    /// Returns an error if the banner cannot be persisted.
    fn save(&self, name: &str, content: &str) -> Result<PathBuf, BannerError>;

    /// Names of all stored banners, relative to [`BannerStore::root`], sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn list(&self) -> Result<Vec<String>, BannerError>;
}
