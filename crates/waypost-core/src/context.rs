//! Per-request handler context

use crate::body::parser_for;
use crate::{Params, Request};

/// What a handler sees of the request.
///
/// Parameters are merged from the query string, then the parsed body, then
/// the route variables; later sources win on key collisions.
#[derive(Debug)]
pub struct Context<'r> {
    request: &'r Request,
    params: Params,
    accept: Vec<String>,
}

impl<'r> Context<'r> {
    pub fn new(request: &'r Request) -> Self {
        let media_type = request.media_type();
        let mut params = request.query_params();
        params.extend(parser_for(media_type.as_deref()).parse(&request.body));
        params.extend(request.params.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            request,
            params,
            accept: request.accept_media_types(),
        }
    }

    pub fn request(&self) -> &Request {
        self.request
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Accepted media types, most preferred first
    pub fn accept_media_types(&self) -> &[String] {
        &self.accept
    }

    /// First entry of the accept list
    pub fn preferred_media_type(&self) -> Option<&str> {
        self.accept.first().map(String::as_str)
    }
}
