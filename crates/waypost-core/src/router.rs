//! Dispatcher: route lookup, handler invocation, 404 fallback

use crate::{assemble, Context, Endpoint, Handler, Method, Request, Response, Result};
use std::io;
use waypost_router::{Printer, RouteTable};

/// Routes requests to registered handlers
#[derive(Debug, Default)]
pub struct Router {
    table: RouteTable<Endpoint>,
}

impl Router {
    /// Create a new router
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route; GET also answers HEAD
    pub fn route<H: Handler>(&mut self, method: Method, path: &str, handler: H) -> Result<()> {
        self.add(method, path, Endpoint::new(handler))
    }

    /// Add a route for an already shared endpoint
    pub fn add(&mut self, method: Method, path: &str, endpoint: Endpoint) -> Result<()> {
        tracing::debug!(method = %method, path, handler = endpoint.name(), "route registered");
        self.table.route(method, path, endpoint)?;
        Ok(())
    }

    /// Add a GET route
    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Get, path, handler)
    }

    /// Add a POST route
    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Post, path, handler)
    }

    /// Add a PUT route
    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Put, path, handler)
    }

    /// Add a PATCH route
    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Patch, path, handler)
    }

    /// Add a DELETE route
    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> Result<()> {
        self.route(Method::Delete, path, handler)
    }

    /// Dispatch a request.
    ///
    /// Route variables are stored on the request before the handler runs.
    /// A miss yields [`Response::not_found`].
    pub fn dispatch(&self, req: &mut Request) -> Response {
        let Some(matched) = self.table.lookup(req.method, &req.path) else {
            tracing::debug!(method = %req.method, path = %req.path, "no route");
            return Response::not_found();
        };

        tracing::trace!(
            method = %req.method,
            path = %req.path,
            handler = matched.value.name(),
            params = matched.params.len(),
            "route matched"
        );
        let endpoint = matched.value;
        req.params = matched.params;

        assemble(endpoint.call(&Context::new(req)))
    }

    /// Write the sorted route listing
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.table.print(out)
    }

    /// Route listing as a string
    pub fn listing(&self) -> String {
        Printer::new(&self.table).to_string()
    }

    pub fn table(&self) -> &RouteTable<Endpoint> {
        &self.table
    }
}
