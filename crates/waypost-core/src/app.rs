//! Application facade: registration, middleware, dispatch
//!
//! An [`App`] is built mutably, then frozen into an `Arc` and shared by
//! every request thread. Nothing in it changes after [`App::freeze`].

use crate::middleware::{Cors, Format, Middleware, MiddlewareChain, RequestLog};
use crate::{Handler, Request, Response, Result, Router, ServerConfig};
use std::io;
use std::sync::Arc;

/// A routed application
pub struct App {
    router: Router,
    middleware: MiddlewareChain,
}

impl App {
    /// An application with the default configuration
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    /// Build the middleware stack described by `config`.
    ///
    /// Outermost first: request log (if enabled), CORS, format extension.
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut middleware = MiddlewareChain::new();
        if config.log_requests {
            middleware.add(RequestLog);
        }
        middleware.add(Cors::new(config.cors.clone()));
        middleware.add(Format);

        Self {
            router: Router::new(),
            middleware,
        }
    }

    /// Add a GET route (HEAD is registered too)
    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self> {
        self.router.get(path, handler)?;
        Ok(self)
    }

    /// Add a POST route
    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self> {
        self.router.post(path, handler)?;
        Ok(self)
    }

    /// Add a PUT route
    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self> {
        self.router.put(path, handler)?;
        Ok(self)
    }

    /// Add a PATCH route
    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self> {
        self.router.patch(path, handler)?;
        Ok(self)
    }

    /// Add a DELETE route
    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self> {
        self.router.delete(path, handler)?;
        Ok(self)
    }

    /// Append a middleware inside the built-in ones
    pub fn with<M: Middleware + 'static>(&mut self, middleware: M) -> &mut Self {
        self.middleware.add(middleware);
        self
    }

    /// Handle one request
    pub fn call(&self, mut req: Request) -> Response {
        self.middleware
            .run(&mut req, |req| self.router.dispatch(req))
    }

    /// Write the sorted route listing
    pub fn print_routes<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.router.print(out)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Finish registration and share the application
    pub fn freeze(self) -> Arc<Self> {
        tracing::debug!(
            routes = self.router.table().routes().len(),
            middleware = self.middleware.len(),
            "application frozen"
        );
        Arc::new(self)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
