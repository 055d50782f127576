//! Request handlers

use crate::{Context, ResponseDescriptor};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Handles a routed request
pub trait Handler: Send + Sync + 'static {
    /// Produce the response for one request
    fn call(&self, cx: &Context<'_>) -> ResponseDescriptor;

    /// Identity shown in route listings
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

/// A closure handler with an explicit name
pub struct FnHandler<F> {
    name: Cow<'static, str>,
    f: F,
}

/// Wrap a closure as a [`Handler`]
///
/// ```
/// use waypost_core::{handler_fn, Handler, ResponseDescriptor};
///
/// let ping = handler_fn("Ping", |_cx| ResponseDescriptor::text("pong"));
/// assert_eq!(ping.name(), "Ping");
/// ```
pub fn handler_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> FnHandler<F>
where
    F: Fn(&Context<'_>) -> ResponseDescriptor + Send + Sync + 'static,
{
    FnHandler {
        name: name.into(),
        f,
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&Context<'_>) -> ResponseDescriptor + Send + Sync + 'static,
{
    fn call(&self, cx: &Context<'_>) -> ResponseDescriptor {
        (self.f)(cx)
    }

    fn name(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

/// A registered handler, shared between the routes it serves
#[derive(Clone)]
pub struct Endpoint {
    name: Cow<'static, str>,
    handler: Arc<dyn Handler>,
}

impl Endpoint {
    pub fn new<H: Handler>(handler: H) -> Self {
        Self {
            name: handler.name(),
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, cx: &Context<'_>) -> ResponseDescriptor {
        self.handler.call(cx)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Endpoint").field(&self.name).finish()
    }
}
