pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;

// WebDAV orchestration: URL building, request execution, response parsing.
pub mod ops;
pub mod propfind;
pub mod url_model;
pub mod webdav;
