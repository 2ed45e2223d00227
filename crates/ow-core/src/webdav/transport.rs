//! libcurl-backed transport.

use crate::config::Credentials;
use crate::error::OwError;

use super::{DavRequest, DavResponse, Transport};

/// Blocking transport using one curl easy handle per request.
///
/// Redirects are not followed and libcurl's default timeouts apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }
}

/// Percent-encodes characters libcurl would refuse (spaces, non-ASCII) while
/// keeping existing escapes. Unparseable URLs are passed through unchanged.
pub(crate) fn normalize_url(raw: &str) -> String {
    url::Url::parse(raw)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| raw.to_string())
}

impl Transport for CurlTransport {
    fn execute(
        &self,
        request: &DavRequest,
        credentials: &Credentials,
    ) -> Result<DavResponse, OwError> {
        let method = request.method.as_str();
        let transport_err = |source: curl::Error| OwError::Transport {
            method: method.to_string(),
            url: request.url.clone(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&normalize_url(&request.url)).map_err(transport_err)?;
        easy.username(&credentials.username).map_err(transport_err)?;
        easy.password(&credentials.secret).map_err(transport_err)?;
        easy.follow_location(false).map_err(transport_err)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))
                .map_err(transport_err)?;
        }
        if let Some(xml) = &request.body {
            list.append("Content-Type: application/xml; charset=utf-8")
                .map_err(transport_err)?;
            // post_fields switches libcurl to POST; custom_request below overrides the verb.
            easy.post_fields_copy(xml.as_bytes()).map_err(transport_err)?;
        }
        easy.http_headers(list).map_err(transport_err)?;
        easy.custom_request(method).map_err(transport_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport_err)?;
            transfer.perform().map_err(transport_err)?;
        }

        let status = easy.response_code().map_err(transport_err)?;
        Ok(DavResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
