//! `ow dir-album <folder>` – build a Photos album from a synced folder.

use anyhow::Result;
use ow_core::config::OwConfig;
use ow_core::diagnostics::Diagnostics;
use ow_core::ops;
use ow_core::webdav::{DavClient, Transport};

pub fn run_dir_album<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    diagnostics: &Diagnostics,
    target: &str,
) -> Result<()> {
    let report = ops::dir_to_album(cfg, client, diagnostics, target)?;
    tracing::info!(
        album = %report.album_name,
        copied = report.copied,
        "album created at {}",
        report.album_url
    );
    Ok(())
}
