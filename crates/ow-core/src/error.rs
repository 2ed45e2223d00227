//! Error type shared by every WebDAV operation.
//!
//! All variants are terminal for the current invocation; nothing here is retried.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OwError {
    /// Missing or unusable local input (nonexistent path, non-UTF-8 path, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("path {} is not inside sync folder {}", path.display(), sync_root.display())]
    PathOutsideSyncRoot { path: PathBuf, sync_root: PathBuf },

    #[error("album name derived from {raw:?} is empty")]
    EmptyAlbumName { raw: String },

    /// Connection-level failure before any HTTP response arrived.
    #[error("{method} {url} request failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Status code outside the accepted [200, 400) band.
    #[error("{method} {url} returned HTTP {status}. Response text: {body}")]
    Rejected {
        method: String,
        url: String,
        status: u32,
        body: String,
    },

    #[error(
        "{action} failed. Is the Temporary files lock app installed? If attempting to unlock, \
         is the path actually locked? HTTP request was {method} {url}; \
         HTTP response code {status}. Response text: {body}"
    )]
    LockRejected {
        action: String,
        method: String,
        url: String,
        status: u32,
        body: String,
    },

    #[error("malformed XML response: {0}")]
    XmlParse(String),

    #[error("no file id in PROPFIND response for {url} (HTTP {status}). Response text: {body}")]
    MissingFileId {
        url: String,
        status: u32,
        body: String,
    },

    #[error("{url} is not a single directory ({collections} collection markers found)")]
    NotADirectory { url: String, collections: usize },
}

impl From<quick_xml::Error> for OwError {
    fn from(e: quick_xml::Error) -> Self {
        OwError::XmlParse(e.to_string())
    }
}

impl OwError {
    /// True for the input-validation family (no request was sent).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            OwError::InvalidInput(_)
                | OwError::PathOutsideSyncRoot { .. }
                | OwError::EmptyAlbumName { .. }
        )
    }
}
