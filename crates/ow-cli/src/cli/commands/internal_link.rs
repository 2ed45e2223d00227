//! `ow internal-link <path>` – print `{server}/f/{fileid}`.

use anyhow::Result;
use ow_core::config::OwConfig;
use ow_core::ops;
use ow_core::webdav::{DavClient, Transport};
use std::path::Path;

pub fn run_internal_link<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    path: &Path,
) -> Result<()> {
    let link = ops::get_internal_link(cfg, client, path)?;
    println!("{}", link);
    Ok(())
}
