//! Album name derivation from a folder path.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::OwError;

fn date_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} ").expect("valid date regex"))
}

/// Derives an album name from a folder path.
///
/// Trailing `/` are dropped, the last segment is taken and leading `YYYY-MM-DD `
/// date stamps are removed (repeatedly, so the result is stable under re-cleaning).
///
/// - `clean_album_name("/sync/2023-08-07 Beach Trip/")` → `"Beach Trip"`
/// - `clean_album_name("NoDatePrefix")` → `"NoDatePrefix"`
pub fn clean_album_name(raw: &str) -> Result<String, OwError> {
    let trimmed = raw.trim_end_matches('/');
    let mut name = trimmed.rsplit('/').next().unwrap_or("");
    while let Some(m) = date_prefix().find(name) {
        name = &name[m.end()..];
    }
    if name.is_empty() {
        return Err(OwError::EmptyAlbumName {
            raw: raw.to_string(),
        });
    }
    Ok(name.to_string())
}
