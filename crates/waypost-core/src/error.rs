//! Error types for waypost-core

use thiserror::Error;
use waypost_router::RouteError;

/// Result type alias for waypost operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for route registration and configuration.
///
/// Request handling itself has no error path: a miss is a 404 response and
/// response assembly cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed route template or unknown method
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Header configuration that is not a table of valid header strings
    #[error("Invalid header configuration: {0}")]
    InvalidHeaderConfiguration(String),

    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
