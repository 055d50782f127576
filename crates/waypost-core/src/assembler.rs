//! Response assembly
//!
//! Turns a [`ResponseDescriptor`] into the wire [`Response`]:
//! - content: first populated of json (non-null), html, text, body; else
//!   empty
//! - headers: `Content-Length`, then the derived `Content-Type` (if any),
//!   then the handler's headers, which replace same-named entries
//! - status: as declared

use crate::headers::{CONTENT_LENGTH, CONTENT_TYPE};
use crate::{mime, Headers, Response, ResponseDescriptor};
use bytes::Bytes;
use serde_json::Value;

/// Assemble the final response. Never fails.
pub fn assemble(descriptor: ResponseDescriptor) -> Response {
    let ResponseDescriptor {
        status,
        headers: overrides,
        json,
        html,
        text,
        body,
    } = descriptor;

    // A null document is unset, like a missing one
    let json = json.filter(|value| !value.is_null());

    let (content_type, content) = if let Some(value) = json {
        (Some(mime::JSON), Bytes::from(serialize_json(value)))
    } else if let Some(markup) = html {
        (Some(mime::HTML), Bytes::from(markup))
    } else if let Some(text) = text {
        (Some(mime::TEXT), Bytes::from(text))
    } else {
        (None, body.unwrap_or_default())
    };

    let mut headers = Headers::new();
    headers.insert(CONTENT_LENGTH, content.len().to_string());
    if let Some(content_type) = content_type {
        headers.insert(CONTENT_TYPE, content_type);
    }
    headers.merge(&overrides);

    Response {
        status,
        headers,
        body: content,
    }
}

/// JSON text for a structured value.
///
/// A string that already parses as JSON is passed through untouched so the
/// caller's formatting survives; anything else is serialized.
fn serialize_json(value: Value) -> String {
    match value {
        Value::String(text) => match serde_json::from_str::<serde::de::IgnoredAny>(&text) {
            Ok(_) => text,
            Err(error) => {
                tracing::debug!(%error, "structured string is not JSON, serializing it");
                Value::String(text).to_string()
            }
        },
        other => other.to_string(),
    }
}

impl From<ResponseDescriptor> for Response {
    fn from(descriptor: ResponseDescriptor) -> Self {
        assemble(descriptor)
    }
}
