//! Request logging middleware

use super::Middleware;
use crate::{Request, Response};

/// Emits one `info` event per completed request
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLog;

impl Middleware for RequestLog {
    fn before(&self, _req: &mut Request) -> Option<Response> {
        None
    }

    fn after(&self, req: &Request, res: &mut Response) {
        tracing::info!(
            method = %req.method,
            path = %req.path,
            status = %res.status,
            bytes = res.body.len(),
            "request completed"
        );
    }
}
