//! WebDAV request execution.
//!
//! [`Transport`] is the seam between orchestration and the network; the
//! production implementation is [`CurlTransport`]. [`DavClient`] adds
//! credentials, logging and the success classification on top.

mod transport;

pub use transport::CurlTransport;

use std::fmt;

use crate::config::Credentials;
use crate::error::OwError;

/// WebDAV methods issued by ow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Propfind,
    Lock,
    Unlock,
    Mkcol,
    Copy,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Propfind => "PROPFIND",
            Method::Lock => "LOCK",
            Method::Unlock => "UNLOCK",
            Method::Mkcol => "MKCOL",
            Method::Copy => "COPY",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request; sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// XML body, sent with `Content-Type: application/xml`.
    pub body: Option<String>,
}

impl DavRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavResponse {
    pub status: u32,
    pub body: String,
}

/// Accepted iff `200 <= code < 400`. 3xx counts as success and is not followed.
pub fn is_accepted_status(code: u32) -> bool {
    (200..400).contains(&code)
}

/// Sends a request and returns whatever status the server answered with.
/// Only connection-level failures are errors here.
pub trait Transport {
    fn execute(&self, request: &DavRequest, credentials: &Credentials)
        -> Result<DavResponse, OwError>;
}

/// Credentials bound to a transport.
pub struct DavClient<'a, T: Transport> {
    transport: &'a T,
    credentials: &'a Credentials,
}

impl<'a, T: Transport> DavClient<'a, T> {
    pub fn new(transport: &'a T, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Executes `request`; a status outside [200, 400) becomes [`OwError::Rejected`].
    pub fn send(&self, request: &DavRequest) -> Result<DavResponse, OwError> {
        tracing::debug!(method = %request.method, url = %request.url, "request");
        if !request.headers.is_empty() {
            tracing::debug!(headers = ?request.headers, "request headers");
        }
        let response = self.transport.execute(request, self.credentials)?;
        tracing::debug!(
            status = response.status,
            "HTTP response code {}. Response text: {}",
            response.status,
            response.body
        );
        if !is_accepted_status(response.status) {
            return Err(OwError::Rejected {
                method: request.method.to_string(),
                url: request.url.clone(),
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}
