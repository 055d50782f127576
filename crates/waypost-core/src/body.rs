//! Request body parsers, chosen by declared media type

use crate::request::parse_urlencoded;
use crate::{mime, Params};
use serde_json::Value;

/// Turns a request body into string parameters.
///
/// Parsers never fail: a body they cannot read contributes no parameters.
pub trait BodyParser: Send + Sync {
    fn parse(&self, body: &[u8]) -> Params;
}

/// Top-level members of a JSON object.
///
/// String members keep their value; any other member is kept as its JSON
/// text. Malformed input and non-object documents yield nothing.
pub struct JsonParser;

impl BodyParser for JsonParser {
    fn parse(&self, body: &[u8]) -> Params {
        if body.is_empty() {
            return Params::new();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(members)) => members
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) => (key, s),
                    other => (key, other.to_string()),
                })
                .collect(),
            Ok(_) => Params::new(),
            Err(error) => {
                tracing::debug!(%error, "ignoring malformed JSON body");
                Params::new()
            }
        }
    }
}

/// `application/x-www-form-urlencoded` bodies
pub struct FormParser;

impl BodyParser for FormParser {
    fn parse(&self, body: &[u8]) -> Params {
        parse_urlencoded(&String::from_utf8_lossy(body))
    }
}

/// Ignores the body
pub struct NullParser;

impl BodyParser for NullParser {
    fn parse(&self, _body: &[u8]) -> Params {
        Params::new()
    }
}

/// Pick the parser for a media type
pub fn parser_for(media_type: Option<&str>) -> &'static dyn BodyParser {
    match media_type {
        Some(mt) if mt.contains(mime::JSON) => &JsonParser,
        Some(mt) if mt == mime::FORM => &FormParser,
        _ => &NullParser,
    }
}
