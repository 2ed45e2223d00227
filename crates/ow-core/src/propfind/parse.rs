//! Single-pass, namespace-aware multi-status parser.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::OwError;

const DAV_NS: &[u8] = b"DAV:";
const OC_NS: &[u8] = b"http://owncloud.org/ns";

/// One `d:response` element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropRecord {
    pub href: String,
    pub content_type: Option<String>,
    pub is_collection: bool,
    pub file_id: Option<String>,
}

/// Parsed PROPFIND result.
#[derive(Debug, Default, Clone)]
pub struct MultiStatus {
    pub records: Vec<PropRecord>,
    /// First `oc:fileid` seen anywhere in the document.
    pub first_file_id: Option<String>,
    /// Count of `d:collection` elements directly inside `d:resourcetype`.
    pub collection_markers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Elem {
    Response,
    Href,
    ContentType,
    ResourceType,
    Collection,
    FileId,
    Other,
}

fn classify(ns: &ResolveResult, local: &[u8]) -> Elem {
    match ns {
        ResolveResult::Bound(Namespace(n)) if *n == DAV_NS => match local {
            b"response" => Elem::Response,
            b"href" => Elem::Href,
            b"getcontenttype" => Elem::ContentType,
            b"resourcetype" => Elem::ResourceType,
            b"collection" => Elem::Collection,
            _ => Elem::Other,
        },
        ResolveResult::Bound(Namespace(n)) if *n == OC_NS && local == b"fileid" => Elem::FileId,
        _ => Elem::Other,
    }
}

#[derive(Default)]
struct State {
    out: MultiStatus,
    stack: Vec<Elem>,
    current: Option<PropRecord>,
    seen_root: bool,
}

impl State {
    fn open(&mut self, elem: Elem) {
        self.seen_root = true;
        match elem {
            Elem::Response => self.current = Some(PropRecord::default()),
            Elem::Collection if self.stack.last() == Some(&Elem::ResourceType) => {
                self.out.collection_markers += 1;
                if let Some(rec) = self.current.as_mut() {
                    rec.is_collection = true;
                }
            }
            _ => {}
        }
        self.stack.push(elem);
    }

    fn close(&mut self) {
        if self.stack.pop() == Some(Elem::Response) {
            if let Some(rec) = self.current.take() {
                self.out.records.push(rec);
            }
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last() {
            Some(Elem::FileId) => {
                if self.out.first_file_id.is_none() {
                    self.out.first_file_id = Some(text.to_string());
                }
                if let Some(rec) = self.current.as_mut() {
                    rec.file_id.get_or_insert_with(String::new).push_str(text);
                }
            }
            Some(Elem::Href) => {
                if let Some(rec) = self.current.as_mut() {
                    rec.href.push_str(text);
                }
            }
            Some(Elem::ContentType) => {
                if let Some(rec) = self.current.as_mut() {
                    rec.content_type
                        .get_or_insert_with(String::new)
                        .push_str(text);
                }
            }
            _ => {}
        }
    }
}

/// Parses a multi-status body. Not-well-formed input is an `XmlParse` error;
/// there is no partial result.
pub fn parse_multistatus(xml: &str) -> Result<MultiStatus, OwError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut state = State::default();
    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                let elem = classify(&ns, e.local_name().as_ref());
                state.open(elem);
            }
            (ns, Event::Empty(e)) => {
                let elem = classify(&ns, e.local_name().as_ref());
                state.open(elem);
                state.close();
            }
            (_, Event::End(_)) => state.close(),
            (_, Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| OwError::XmlParse(err.to_string()))?;
                state.text(&text);
            }
            (_, Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                state.text(&text);
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if !state.seen_root {
        return Err(OwError::XmlParse("document has no root element".to_string()));
    }
    if !state.stack.is_empty() {
        return Err(OwError::XmlParse(format!(
            "document ended with {} unclosed element(s)",
            state.stack.len()
        )));
    }
    Ok(state.out)
}
