//! Operation orchestrators, one per CLI action.
//!
//! Each run is a straight pipeline; the first failing stage ends it.

mod album;
mod internal_link;
mod lock;

pub use album::{dir_to_album, AlbumReport};
pub use internal_link::get_internal_link;
pub use lock::{lock_or_unlock, LockAction};

use std::path::{Path, PathBuf};

use crate::config::OwConfig;
use crate::error::OwError;
use crate::url_model::{build_files_url, relativize_local_path, resolve_local_path};

/// Resolves a local path inside the sync folder to its WebDAV files URL.
pub(crate) fn files_url_for(cfg: &OwConfig, path: &Path) -> Result<String, OwError> {
    let realpath = resolve_local_path(path)?;
    tracing::debug!("absolute path is {}", realpath.display());

    let relative = relativize_local_path(&realpath, &sync_root(cfg))?;
    tracing::debug!("relative path is {}", relative);

    let url = build_files_url(&cfg.server, &cfg.username, &relative);
    tracing::debug!("WebDAV path is {}", url);
    Ok(url)
}

/// Configured sync folder with symlinks resolved when it exists locally,
/// so it compares equal to canonicalized targets.
fn sync_root(cfg: &OwConfig) -> PathBuf {
    cfg.local_sync_folder
        .canonicalize()
        .unwrap_or_else(|_| cfg.local_sync_folder.clone())
}
