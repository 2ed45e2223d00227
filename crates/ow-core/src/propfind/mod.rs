//! PROPFIND request bodies and multi-status response parsing.
//!
//! Responses use the `DAV:` and `http://owncloud.org/ns` namespaces; element
//! matching is done on resolved namespaces, not on prefixes, so servers that
//! pick other prefixes parse the same.

mod body;
mod parse;

pub use body::{FILEID_PROPFIND, MEDIA_PROPFIND};
pub use parse::{parse_multistatus, MultiStatus, PropRecord};

use crate::error::OwError;

/// A media resource found in a folder listing, ready to be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    /// Absolute URL of the resource (server base + href).
    pub remote_url: String,
    /// Last href segment, still percent-encoded as the server sent it.
    pub base_name: String,
}

/// First `oc:fileid` text anywhere in the document.
pub fn extract_file_id(xml: &str) -> Result<Option<String>, OwError> {
    Ok(parse_multistatus(xml)?.first_file_id)
}

/// Number of `d:resourcetype/d:collection` markers in the document.
pub fn count_collections(xml: &str) -> Result<usize, OwError> {
    Ok(parse_multistatus(xml)?.collection_markers)
}

/// True only when exactly one collection marker is present.
pub fn is_single_collection(collection_markers: usize) -> bool {
    collection_markers == 1
}

/// Image and video resources of a listing, in document order.
pub fn extract_media_records(xml: &str, server: &str) -> Result<Vec<MediaEntry>, OwError> {
    Ok(parse_multistatus(xml)?.media_entries(server))
}

fn is_media_type(content_type: &str) -> bool {
    content_type.starts_with("image") || content_type.starts_with("video")
}

impl MultiStatus {
    pub fn media_entries(&self, server: &str) -> Vec<MediaEntry> {
        self.records
            .iter()
            .filter(|r| r.content_type.as_deref().is_some_and(is_media_type))
            .map(|r| MediaEntry {
                remote_url: format!("{}{}", server, r.href),
                base_name: r
                    .href
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }
}
