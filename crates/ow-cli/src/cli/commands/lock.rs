//! `ow lock <path>` / `ow unlock <path>`.

use anyhow::Result;
use ow_core::config::OwConfig;
use ow_core::ops::{self, LockAction};
use ow_core::webdav::{DavClient, Transport};
use std::path::Path;

/// Silent on success; the lock itself lives on the server.
pub fn run_lock<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    path: &Path,
    action: LockAction,
) -> Result<()> {
    tracing::debug!("{} {}...", action, path.display());
    ops::lock_or_unlock(cfg, client, path, action)?;
    tracing::debug!("{} success!", action);
    Ok(())
}
