//! Banner file naming.

use std::path::{Path, PathBuf};

/// File extension every stored banner carries.
pub const BANNER_EXTENSION: &str = "banner";

/// File name for a banner: the name verbatim plus the banner extension.
#[must_use]
pub fn banner_file_name(name: &str) -> String {
    format!("{name}.{BANNER_EXTENSION}")
}

/// Full path a banner named `name` is stored at under `root`.
///
/// Names containing `/` land in subdirectories of `root`.
#[must_use]
pub fn banner_path(root: &Path, name: &str) -> PathBuf {
    root.join(banner_file_name(name))
}

/// Recover a banner name from a path relative to the storage root.
///
/// Components are joined with `/` regardless of platform. Returns `None` for
/// files that are not banners.
#[must_use]
pub fn banner_name(relative: &Path) -> Option<String> {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    joined.strip_suffix(&format!(".{BANNER_EXTENSION}")).map(str::to_string)
}
