//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No anti-forgery token available. Raised when constructing the client
    /// or when the configured source stops yielding a token; never a
    /// transport condition.
    #[error("Anti-forgery token not available. Ensure {0} is configured.")]
    MissingToken(String),

    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No response received from the server.
    #[error("No response received from the server: {0}")]
    Network(#[from] reqwest::Error),

    /// Response received with an error status. Carries the server-provided
    /// message when the body had one.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True for connectivity failures where no response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// True when the server answered with an error status.
    pub fn is_server(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }
}
