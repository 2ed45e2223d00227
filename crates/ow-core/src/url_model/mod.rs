//! URL modeling: maps local paths and album names to WebDAV resource URLs.

mod album;
mod local;

pub use album::clean_album_name;
pub use local::{relativize_local_path, resolve_local_path};

/// WebDAV root for user files, relative to the server base.
pub const FILES_ROOT: &str = "remote.php/dav/files";
/// WebDAV root for the Photos app, relative to the server base.
pub const PHOTOS_ROOT: &str = "remote.php/dav/photos";

/// Joins server, files root, username and a sync-relative path.
///
/// `relative_path` is used as-is (no percent-encoding); it must not start with `/`.
pub fn build_files_url(server: &str, username: &str, relative_path: &str) -> String {
    [server, FILES_ROOT, username, relative_path].join("/")
}

/// Joins server, photos root, username, `albums` and the percent-encoded album name.
pub fn build_album_url(server: &str, username: &str, album_name: &str) -> String {
    let encoded = urlencoding::encode(album_name);
    [server, PHOTOS_ROOT, username, "albums", encoded.as_ref()].join("/")
}

/// Permalink for an internal file id, e.g. `https://cloud.example.com/f/42`.
pub fn internal_link(server: &str, file_id: &str) -> String {
    format!("{}/f/{}", server, file_id)
}
