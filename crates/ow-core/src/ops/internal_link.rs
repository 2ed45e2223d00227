//! Internal link: local path → `oc:fileid` → `{server}/f/{id}`.

use std::path::Path;

use crate::config::OwConfig;
use crate::error::OwError;
use crate::propfind::{extract_file_id, FILEID_PROPFIND};
use crate::url_model::internal_link;
use crate::webdav::{DavClient, DavRequest, Method, Transport};

use super::files_url_for;

/// Looks up the server-side file id of `path` and returns its permalink.
pub fn get_internal_link<T: Transport>(
    cfg: &OwConfig,
    client: &DavClient<'_, T>,
    path: &Path,
) -> Result<String, OwError> {
    let url = files_url_for(cfg, path)?;

    tracing::debug!("fetching internal file ID...");
    let request = DavRequest::new(Method::Propfind, &url).body(FILEID_PROPFIND);
    let response = client.send(&request)?;

    let file_id = extract_file_id(&response.body)?;
    tracing::debug!("fileId is {:?}", file_id);

    let file_id = file_id.ok_or_else(|| OwError::MissingFileId {
        url,
        status: response.status,
        body: response.body.clone(),
    })?;
    Ok(internal_link(&cfg.server, &file_id))
}
