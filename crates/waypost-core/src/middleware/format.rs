//! Format extension middleware
//!
//! `/tasks.json` is routed as `/tasks` with `application/json` put in front
//! of the Accept list. Unknown extensions are left alone.

use super::Middleware;
use crate::headers::ACCEPT;
use crate::{mime, Request, Response};

/// Strips a known format extension from the last path segment
#[derive(Debug, Default, Clone, Copy)]
pub struct Format;

impl Format {
    pub fn new() -> Self {
        Self
    }
}

/// Split `/a/b.ext` into the path without the extension and its media type
fn split_extension(path: &str) -> Option<(&str, &'static str)> {
    let last = path.rsplit('/').next()?;
    let (stem, ext) = last.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let media_type = mime::from_extension(ext)?;
    Some((&path[..path.len() - ext.len() - 1], media_type))
}

impl Middleware for Format {
    fn before(&self, req: &mut Request) -> Option<Response> {
        let (path, media_type) = split_extension(&req.path)?;
        let path = path.to_string();

        let accept = match req.header(ACCEPT).map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{media_type}, {existing}"),
            _ => media_type.to_string(),
        };

        tracing::trace!(from = %req.path, to = %path, media_type, "format extension");
        req.path = path;
        req.headers.insert(ACCEPT, accept);
        None
    }

    fn after(&self, _req: &Request, _res: &mut Response) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestBuilder};

    #[test]
    fn test_strips_known_extension() {
        let mut req = Request::new(Method::Get, "/tasks.json");
        assert!(Format.before(&mut req).is_none());

        assert_eq!(req.path, "/tasks");
        assert_eq!(req.header("Accept"), Some("application/json"));
    }

    #[test]
    fn test_prepends_to_existing_accept() {
        let mut req = RequestBuilder::new(Method::Get, "/tasks/1.html")
            .header("Accept", "application/json")
            .build();
        Format.before(&mut req);

        assert_eq!(req.path, "/tasks/1");
        assert_eq!(
            req.accept_media_types(),
            vec!["text/html", "application/json"]
        );
    }

    #[test]
    fn test_leaves_other_paths_alone() {
        for path in ["/tasks", "/archive.tar.gz", "/.json", "/v1.2/tasks", "/"] {
            let mut req = Request::new(Method::Get, path);
            Format.before(&mut req);
            assert_eq!(req.path, path);
            assert!(req.header("Accept").is_none());
        }
    }
}
