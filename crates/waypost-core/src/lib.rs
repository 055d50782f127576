//! waypost-core: request dispatch and response assembly
//!
//! Handlers return a [`ResponseDescriptor`]; the dispatcher turns it into a
//! concrete [`Response`] with derived `Content-Type` and `Content-Length`.
//!
//! ## Features
//! - Exact-match and trie routing via `waypost-router`
//! - Route, query and body parameters merged per request
//! - JSON, HTML and text responses with header overrides
//! - CORS, format-extension and request-log middleware
//! - TOML configuration
//!
//! ## Example
//! ```
//! use waypost_core::{handler_fn, App, Method, Request, ResponseDescriptor};
//!
//! let mut app = App::new();
//! app.get("/tasks/:id", handler_fn("ShowTask", |cx| {
//!     ResponseDescriptor::text(format!("task {}", cx.param("id").unwrap_or("?")))
//! }))
//! .unwrap();
//!
//! let app = app.freeze();
//! let res = app.call(Request::new(Method::Get, "/tasks/7"));
//! assert_eq!(res.body_string().as_deref(), Some("task 7"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod app;
pub mod assembler;
pub mod body;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod handler;
pub mod headers;
pub mod middleware;
pub mod mime;
pub mod request;
pub mod response;
pub mod router;

// Re-exports
pub use app::App;
pub use assembler::assemble;
pub use config::ServerConfig;
pub use context::Context;
pub use descriptor::ResponseDescriptor;
pub use error::{Error, Result};
pub use handler::{handler_fn, Endpoint, FnHandler, Handler};
pub use headers::Headers;
pub use request::{Request, RequestBuilder};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use router::Router;
pub use waypost_router::{Method, Params, RouteError};

// Middleware re-exports
pub use middleware::{Middleware, MiddlewareChain};
