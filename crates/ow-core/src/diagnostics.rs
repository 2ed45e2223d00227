//! Debug-only helpers: XML pretty-printing and temp-file snapshots of responses.
//!
//! Always compiled in; [`Diagnostics::enabled`] gates all side effects.

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub enabled: bool,
    /// Where snapshots go; the system temp dir when `None`.
    pub snapshot_dir: Option<PathBuf>,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            snapshot_dir: None,
        }
    }

    /// Writes the re-indented `xml` to a kept temp file and returns its path.
    /// Does nothing when disabled; write failures are logged, never fatal.
    pub fn snapshot(&self, label: &str, xml: &str) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        match self.write_snapshot(label, xml) {
            Ok(path) => {
                tracing::debug!("{} response saved to {}", label, path.display());
                Some(path)
            }
            Err(e) => {
                tracing::warn!("could not save {} snapshot: {:#}", label, e);
                None
            }
        }
    }

    fn write_snapshot(&self, label: &str, xml: &str) -> Result<PathBuf> {
        let prefix = format!("ow-{}-", label);
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".xml");
        let mut file = match &self.snapshot_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(pretty_xml(xml).as_bytes())?;
        file.flush()?;
        let (_, path) = file.keep()?;
        Ok(path)
    }
}

/// Re-indents `xml` by two spaces; returns the input unchanged if it does not parse.
pub fn pretty_xml(xml: &str) -> String {
    reindent(xml).unwrap_or_else(|| xml.to_string())
}

fn reindent(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    loop {
        match reader.read_event().ok()? {
            Event::Eof => break,
            event => writer.write_event(event).ok()?,
        }
    }
    String::from_utf8(writer.into_inner()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_xml_indents_nested_elements() {
        let out = pretty_xml("<a><b><c>x</c></b></a>");
        assert_eq!(out, "<a>\n  <b>\n    <c>x</c>\n  </b>\n</a>");
    }

    #[test]
    fn pretty_xml_keeps_unparseable_input() {
        assert_eq!(pretty_xml("<a></b>"), "<a></b>");
    }

    #[test]
    fn disabled_snapshot_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let diag = Diagnostics {
            enabled: false,
            snapshot_dir: Some(dir.path().to_path_buf()),
        };
        assert!(diag.snapshot("propfind", "<a/>").is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn enabled_snapshot_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let diag = Diagnostics {
            enabled: true,
            snapshot_dir: Some(dir.path().to_path_buf()),
        };
        let path = diag.snapshot("listing", "<a><b/></a>").unwrap();
        assert!(path.starts_with(dir.path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ow-listing-"));
        assert!(name.ends_with(".xml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<a>\n  <b/>\n</a>");
    }
}
