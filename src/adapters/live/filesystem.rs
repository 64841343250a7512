//! Live adapter for the `BannerStore` port backed by a directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BannerError;
use crate::output::{banner_name, banner_path};
use crate::ports::BannerStore;

/// Stores each banner as `<root>/<name>.banner`.
pub struct FsBannerStore {
    root: PathBuf,
}

impl FsBannerStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first save.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl BannerStore for FsBannerStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn save(&self, name: &str, content: &str) -> Result<PathBuf, BannerError> {
        let path = banner_path(&self.root, name);
        let dir = path.parent().unwrap_or(self.root.as_path());

        fs::create_dir_all(dir)
            .map_err(|source| BannerError::CreateDir { path: dir.to_path_buf(), source })?;
        fs::write(&path, content)
            .map_err(|source| BannerError::Write { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "banner written");
        Ok(path)
    }

    fn list(&self) -> Result<Vec<String>, BannerError> {
        if !self.root.is_dir() {
            tracing::debug!(root = %self.root.display(), "storage root missing, no banners");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        collect_banners(&self.root, &self.root, &mut names)?;
        names.sort();
        Ok(names)
    }
}

/// Walk `dir` recursively, pushing the name of every banner file found.
///
/// Symlinked directories are not followed.
fn collect_banners(root: &Path, dir: &Path, names: &mut Vec<String>) -> Result<(), BannerError> {
    let read_err =
        |source: std::io::Error| BannerError::ReadDir { path: dir.to_path_buf(), source };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        if entry.file_type().map_err(read_err)?.is_dir() {
            collect_banners(root, &path, names)?;
        } else if let Some(name) = path.strip_prefix(root).ok().and_then(banner_name) {
            tracing::trace!(name = %name, "found banner");
            names.push(name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsBannerStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBannerStore::new(dir.path().join("banners"));
        (dir, store)
    }

    #[test]
    fn save_creates_root_and_writes_verbatim() {
        let (_dir, store) = store();
        let path = store.save("motd", "hello\n").unwrap();

        assert_eq!(path, store.root().join("motd.banner"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn save_overwrites_existing() {
        let (_dir, store) = store();
        store.save("motd", "first").unwrap();
        let path = store.save("motd", "second").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
        assert_eq!(store.list().unwrap(), vec!["motd"]);
    }

    #[test]
    fn save_nested_name_creates_subdirectory() {
        let (_dir, store) = store();
        let path = store.save("team/ops", "x").unwrap();

        assert!(path.ends_with("team/ops.banner"));
        assert_eq!(store.list().unwrap(), vec!["team/ops"]);
    }

    #[test]
    fn list_missing_root_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_is_sorted_and_skips_other_files() {
        let (_dir, store) = store();
        store.save("c", "3").unwrap();
        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        fs::write(store.root().join("notes.txt"), "not a banner").unwrap();

        assert_eq!(store.list().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn save_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = FsBannerStore::new(blocker.join("banners"));
        let err = store.save("motd", "x").unwrap_err();
        assert!(matches!(err, BannerError::CreateDir { .. }));
    }
}
