//! Error types for waypost-router

use thiserror::Error;

/// Errors raised while registering routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Method name outside the supported set
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// A `:` segment with nothing after it
    #[error("Empty placeholder name in {template}")]
    EmptyPlaceholder { template: String },

    /// Placeholder names are restricted to `[A-Za-z0-9_]`
    #[error("Invalid placeholder `{segment}` in {template}")]
    InvalidPlaceholder { template: String, segment: String },

    /// `:` anywhere but the start of a segment
    #[error("Placeholder must start the segment: `{segment}` in {template}")]
    MisplacedPlaceholder { template: String, segment: String },
}
