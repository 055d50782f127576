//! Media type names

pub const JSON: &str = "application/json";
pub const HTML: &str = "text/html";
pub const TEXT: &str = "text/plain";
pub const XML: &str = "application/xml";
pub const CSV: &str = "text/csv";
pub const FORM: &str = "application/x-www-form-urlencoded";

/// Media type for a path extension (without the dot)
pub fn from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "json" => Some(JSON),
        "html" | "htm" => Some(HTML),
        "txt" => Some(TEXT),
        "xml" => Some(XML),
        "csv" => Some(CSV),
        _ => None,
    }
}
