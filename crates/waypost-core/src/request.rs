//! HTTP Request types

use crate::headers::{ACCEPT, CONTENT_TYPE};
use crate::{Headers, Method, Params};

/// HTTP Request
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Request path (without query string)
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: bytes::Bytes,
    /// Route parameters (populated by the router)
    pub params: Params,
}

impl Request {
    /// Create a new request
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: Headers::new(),
            body: bytes::Bytes::new(),
            params: Params::new(),
        }
    }

    /// Get a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Get content-type header
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// Content type without parameters, lowercased
    pub fn media_type(&self) -> Option<String> {
        self.content_type()
            .and_then(|ct| ct.split(';').next())
            .map(|mt| mt.trim().to_ascii_lowercase())
            .filter(|mt| !mt.is_empty())
    }

    /// Media types from the Accept header, most preferred first.
    ///
    /// Entries are ordered by descending `q` (ties keep header order) and
    /// `q=0` entries are dropped.
    pub fn accept_media_types(&self) -> Vec<String> {
        let Some(accept) = self.header(ACCEPT) else {
            return Vec::new();
        };

        let mut ranked: Vec<(f32, String)> = accept
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let media_type = parts.next()?.trim();
                if media_type.is_empty() {
                    return None;
                }
                let quality = parts
                    .filter_map(|p| p.split_once('='))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                    .map_or(1.0, |(_, q)| q.trim().parse::<f32>().unwrap_or(1.0));
                Some((quality, media_type.to_string()))
            })
            .filter(|(quality, _)| *quality > 0.0)
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().map(|(_, media_type)| media_type).collect()
    }

    /// Parse query string into key-value pairs
    pub fn query_params(&self) -> Params {
        self.query.as_deref().map(parse_urlencoded).unwrap_or_default()
    }
}

/// Builder for constructing requests
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Create a new builder
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request: Request::new(method, path),
        }
    }

    /// Set query string
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.request.query = Some(query.into());
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name, value);
        self
    }

    /// Set body
    pub fn body(mut self, body: impl Into<bytes::Bytes>) -> Self {
        self.request.body = body.into();
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        self.request
    }
}

/// Parse `a=1&b=2` pairs. Later keys overwrite earlier ones; keys without
/// `=` map to an empty value.
pub fn parse_urlencoded(input: &str) -> Params {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (urlencoding_decode(key), urlencoding_decode(value))
        })
        .collect()
}

/// Percent and `+` decoding; invalid escapes are kept as written
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match hex_pair(bytes[i + 1], bytes[i + 2]) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let digit = |b: u8| (b as char).to_digit(16);
    Some((digit(high)? * 16 + digit(low)?) as u8)
}
