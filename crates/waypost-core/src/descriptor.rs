//! Handler output, before assembly

use crate::{Headers, StatusCode};
use bytes::Bytes;
use serde_json::Value;

/// What a handler declares about its response.
///
/// Any number of content fields may be set; assembly uses the first
/// populated one in the order `json`, `html`, `text`, `body`. An empty
/// string counts as populated.
///
/// ```
/// use serde_json::json;
/// use waypost_core::{ResponseDescriptor, StatusCode};
///
/// let descriptor = ResponseDescriptor::json(json!({ "id": 1 }))
///     .with_status(StatusCode::CREATED)
///     .with_header("Location", "/tasks/1");
/// assert_eq!(descriptor.status, StatusCode::CREATED);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    /// Merged over derived headers; same name replaces
    pub headers: Headers,
    /// Structured data, sent as `application/json`; `null` counts as unset
    pub json: Option<Value>,
    /// Markup, sent as `text/html`
    pub html: Option<String>,
    /// Plain text, sent as `text/plain`
    pub text: Option<String>,
    /// Raw body, no content type derived
    pub body: Option<Bytes>,
}

impl ResponseDescriptor {
    /// 200 with no content
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn json(value: impl Into<Value>) -> Self {
        Self::empty().with_json(value)
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Self::empty().with_html(markup)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::empty().with_text(text)
    }

    pub fn body(body: impl Into<Bytes>) -> Self {
        Self::empty().with_body(body)
    }

    pub fn with_status(mut self, status: impl Into<StatusCode>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.merge(&headers);
        self
    }

    pub fn with_json(mut self, value: impl Into<Value>) -> Self {
        self.json = Some(value.into());
        self
    }

    pub fn with_html(mut self, markup: impl Into<String>) -> Self {
        self.html = Some(markup.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}
