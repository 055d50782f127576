//! Middleware implementations
//!
//! Middlewares wrap the dispatcher in registration order: the first one
//! added is the outermost.

pub mod cors;
pub mod format;
pub mod request_log;

// Re-exports for convenience
pub use cors::{Cors, CorsConfig};
pub use format::Format;
pub use request_log::RequestLog;

use crate::{Request, Response};

/// Middleware trait - process request/response
pub trait Middleware: Send + Sync {
    /// Process request before handler; returning a response short-circuits
    fn before(&self, req: &mut Request) -> Option<Response>;

    /// Process response after handler
    fn after(&self, req: &Request, res: &mut Response);
}

/// Middleware chain
#[derive(Default)]
pub struct MiddlewareChain {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    /// Run the chain around `endpoint`.
    ///
    /// `after` runs in reverse order, and only for middlewares whose
    /// `before` ran without short-circuiting.
    pub fn run<F>(&self, req: &mut Request, endpoint: F) -> Response
    where
        F: FnOnce(&mut Request) -> Response,
    {
        let mut entered = 0;
        let mut early = None;
        for m in &self.middlewares {
            if let Some(res) = m.before(req) {
                early = Some(res);
                break;
            }
            entered += 1;
        }

        let mut res = match early {
            Some(res) => res,
            None => endpoint(req),
        };

        for m in self.middlewares[..entered].iter().rev() {
            m.after(req, &mut res);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, ResponseBuilder, StatusCode};
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        short_circuit: bool,
    }

    impl Middleware for Recorder {
        fn before(&self, _req: &mut Request) -> Option<Response> {
            self.log.lock().unwrap().push(format!("before {}", self.name));
            self.short_circuit
                .then(|| ResponseBuilder::new(StatusCode::FORBIDDEN).build())
        }

        fn after(&self, _req: &Request, res: &mut Response) {
            self.log.lock().unwrap().push(format!("after {}", self.name));
            res.headers.insert(format!("X-{}", self.name), "1");
        }
    }

    fn chain(log: &Arc<Mutex<Vec<String>>>, stops: &[bool]) -> MiddlewareChain {
        let mut chain = MiddlewareChain::new();
        for (name, short_circuit) in ["a", "b", "c"].into_iter().zip(stops) {
            chain.add(Recorder {
                name,
                log: Arc::clone(log),
                short_circuit: *short_circuit,
            });
        }
        chain
    }

    #[test]
    fn test_nesting_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = chain(&log, &[false, false, false]);

        let mut req = Request::new(Method::Get, "/");
        let res = chain.run(&mut req, |_| Response::new(StatusCode::OK));

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(
            *log.lock().unwrap(),
            ["before a", "before b", "before c", "after c", "after b", "after a"]
        );
    }

    #[test]
    fn test_short_circuit_skips_inner_layers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = chain(&log, &[false, true, false]);

        let mut req = Request::new(Method::Get, "/");
        let res = chain.run(&mut req, |_| panic!("endpoint must not run"));

        assert_eq!(res.status, StatusCode::FORBIDDEN);
        assert_eq!(*log.lock().unwrap(), ["before a", "before b", "after a"]);
        assert!(res.headers.contains("X-a"));
        assert!(!res.headers.contains("X-b"));
    }
}
