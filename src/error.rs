//! Error types for the library client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::services::LibraryService`]
///
/// Failures are propagated as-is: there is no retry and no mapping of
/// status codes to domain errors. Callers decide what a 404 or 409 means.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// HTTP status of the response, when the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Errors raised by the route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route named {0}")]
    UnknownRoute(String),

    #[error("Route {route} requires parameter '{param}'")]
    MissingParam { route: String, param: String },
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
