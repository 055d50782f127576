//! HTTP Response types

use crate::headers::CONTENT_LENGTH;
use crate::Headers;
use bytes::Bytes;

/// HTTP Status Code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::OK
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of the fixed not-found response
pub const NOT_FOUND_BODY: &str = "Not Found";

/// HTTP Response: the (status, headers, body) triple handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// The fixed reply for requests no route resolves:
    /// 404, `Content-Length: 9`, `Not Found`.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NOT_FOUND)
            .header(CONTENT_LENGTH, NOT_FOUND_BODY.len().to_string())
            .body(NOT_FOUND_BODY)
            .build()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Get content-type header
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get body as string (if UTF-8)
    pub fn body_string(&self) -> Option<String> {
        std::str::from_utf8(&self.body).ok().map(|s| s.to_string())
    }

    /// Split into the wire triple
    pub fn into_parts(self) -> (StatusCode, Headers, Bytes) {
        (self.status, self.headers, self.body)
    }
}

/// Builder for constructing responses
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Create a new builder
    pub fn new(status: StatusCode) -> Self {
        Self {
            response: Response::new(status),
        }
    }

    /// Set a header, replacing any previous value
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response.headers.insert(name, value);
        self
    }

    /// Merge a header map
    pub fn headers(mut self, headers: &Headers) -> Self {
        self.response.headers.merge(headers);
        self
    }

    /// Set body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.response.body = body.into();
        self
    }

    /// Build the response
    pub fn build(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(StatusCode::default(), StatusCode::OK);
        assert_eq!(StatusCode::from(418), StatusCode(418));
        assert_eq!(StatusCode::NOT_FOUND.to_string(), "404");
    }

    #[test]
    fn test_not_found_triple() {
        let (status, headers, body) = Response::not_found().into_parts();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers, Headers::from([("Content-Length", "9")]));
        assert_eq!(&body[..], b"Not Found");
    }

    #[test]
    fn test_builder_replaces_headers() {
        let res = ResponseBuilder::new(StatusCode::OK)
            .header("content-type", "text/plain")
            .headers(&Headers::from([("Content-Type", "image/png"), ("X-Test", "1")]))
            .body("Hello")
            .build();

        assert_eq!(res.content_type(), Some("image/png"));
        assert_eq!(res.headers.len(), 2);
        assert_eq!(res.body_string().as_deref(), Some("Hello"));
    }
}
