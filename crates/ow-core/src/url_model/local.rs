//! Local path resolution against the sync folder.

use std::path::{Path, PathBuf};

use crate::error::OwError;

/// Checks that `path` exists and returns its absolute, symlink-free form.
pub fn resolve_local_path(path: &Path) -> Result<PathBuf, OwError> {
    if !path.exists() {
        return Err(OwError::InvalidInput(format!(
            "path does not exist: {}",
            path.display()
        )));
    }
    path.canonicalize()
        .map_err(|e| OwError::InvalidInput(format!("cannot resolve {}: {}", path.display(), e)))
}

/// Removes the `sync_root` prefix and one leading separator from `path`.
///
/// The prefix must match on a path-segment boundary: `/sync2/a` is not inside `/sync`.
pub fn relativize_local_path(path: &Path, sync_root: &Path) -> Result<String, OwError> {
    let outside = || OwError::PathOutsideSyncRoot {
        path: path.to_path_buf(),
        sync_root: sync_root.to_path_buf(),
    };
    let abs = path
        .to_str()
        .ok_or_else(|| OwError::InvalidInput(format!("path is not UTF-8: {}", path.display())))?;
    let root = sync_root.to_str().ok_or_else(|| {
        OwError::InvalidInput(format!("sync folder is not UTF-8: {}", sync_root.display()))
    })?;
    if root.is_empty() {
        return Err(outside());
    }

    let rest = abs.strip_prefix(root).ok_or_else(outside)?;
    if rest.is_empty() || root.ends_with('/') {
        return Ok(rest.to_string());
    }
    rest.strip_prefix('/').map(str::to_string).ok_or_else(outside)
}
