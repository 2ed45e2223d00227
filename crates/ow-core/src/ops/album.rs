//! Directory → album: create a Photos album named after a synced folder and
//! copy the folder's images and videos into it.
//!
//! Stages: confirm folder, derive name, MKCOL album, list + COPY media.
//! A failure at any stage stops the run; copies already made stay in place.

use std::path::Path;

use crate::config::OwConfig;
use crate::diagnostics::Diagnostics;
use crate::error::OwError;
use crate::propfind::{is_single_collection, parse_multistatus, MEDIA_PROPFIND};
use crate::url_model::{build_album_url, clean_album_name};
use crate::webdav::{DavClient, DavRequest, Method, Transport};

use super::files_url_for;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumReport {
    pub album_name: String,
    pub album_url: String,
    pub copied: usize,
}

pub fn dir_to_album<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    diagnostics: &Diagnostics,
    target: &str,
) -> Result<AlbumReport, OwError> {
    // 1. The target must be exactly one collection.
    let folder_url = files_url_for(cfg, Path::new(target))?;
    let request = DavRequest::new(Method::Propfind, &folder_url)
        .header("Depth", "0")
        .body(MEDIA_PROPFIND);
    let response = client.send(&request)?;
    diagnostics.snapshot("folder", &response.body);

    let status = parse_multistatus(&response.body)?;
    if !is_single_collection(status.collection_markers) {
        return Err(OwError::NotADirectory {
            url: folder_url,
            collections: status.collection_markers,
        });
    }

    // 2. Album name from the raw target.
    let album_name = clean_album_name(target)?;
    tracing::debug!("album name is {:?}", album_name);

    // 3. Create-only; an existing album is rejected by the server.
    let album_url = build_album_url(&cfg.server, &cfg.username, &album_name);
    tracing::debug!("creating album {}", album_url);
    client.send(&DavRequest::new(Method::Mkcol, &album_url))?;

    // 4. List with the server's default depth and copy media in document order.
    let request = DavRequest::new(Method::Propfind, &folder_url).body(MEDIA_PROPFIND);
    let response = client.send(&request)?;
    diagnostics.snapshot("listing", &response.body);

    let media = parse_multistatus(&response.body)?.media_entries(&cfg.server);
    tracing::debug!("{} media file(s) to copy", media.len());

    for entry in &media {
        let destination = format!("{}/{}", album_url, entry.base_name);
        tracing::debug!("copying {} to {}", entry.remote_url, destination);
        let request = DavRequest::new(Method::Copy, &entry.remote_url)
            .header("Destination", destination);
        client.send(&request)?;
    }

    Ok(AlbumReport {
        album_name,
        album_url,
        copied: media.len(),
    })
}
