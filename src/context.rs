//! Service context that bundles all port trait objects.

use std::path::PathBuf;

use crate::adapters::live::clock::SystemClock;
use crate::adapters::live::filesystem::FsBannerStore;
use crate::ports::{BannerStore, Clock};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Where banners are saved and listed from.
    pub store: Box<dyn BannerStore>,
    /// Time source for timestamped styles.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Create a live context storing banners under `root`.
    #[must_use]
    pub fn live(root: PathBuf) -> Self {
        Self { store: Box::new(FsBannerStore::new(root)), clock: Box::new(SystemClock) }
    }
}
