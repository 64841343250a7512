//! Banner creation and listing on top of a [`ServiceContext`].

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::error::BannerError;
use crate::render::render;
use crate::style::Style;

/// Render `text` in `style` and save it as banner `name`.
///
/// An existing banner with the same name is overwritten. Returns the path
/// written.
///
/// # Errors
///
/// Returns an error if rendering fails (empty text in a box) or the banner
/// cannot be saved.
pub fn create_banner(
    ctx: &ServiceContext,
    name: &str,
    text: &str,
    style: Style,
) -> Result<PathBuf, BannerError> {
    tracing::info!(name, style = style.name(), "creating banner");
    let content = render(style, text, ctx.clock.now())?;
    ctx.store.save(name, &content)
}

/// Names of every banner under the storage root, sorted.
///
/// # Errors
///
/// Returns an error if the storage root exists but cannot be walked.
pub fn list_banners(ctx: &ServiceContext) -> Result<Vec<String>, BannerError> {
    let names = ctx.store.list()?;
    tracing::debug!(count = names.len(), root = %ctx.store.root().display(), "listed banners");
    Ok(names)
}
