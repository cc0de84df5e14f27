//! Client configuration.

use std::time::Duration;

/// Where the anti-forgery token comes from.
///
/// The hosting environment exposes the token either statically (injected at
/// startup) or through an environment variable that may rotate, so the
/// variable is re-read on every access rather than cached.
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// Fixed token value.
    Static(String),
    /// Named environment variable, read at call time.
    Env(String),
}

impl TokenSource {
    /// Resolve the current token value, if any.
    pub fn token(&self) -> Option<String> {
        match self {
            TokenSource::Static(value) => Some(value.clone()),
            TokenSource::Env(name) => std::env::var(name).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenSource::Static(_) => "a static anti-forgery token".to_string(),
            TokenSource::Env(name) => format!("the {name} environment variable"),
        }
    }
}

/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API.
    pub base_url: String,
    /// Request timeout. Deliberately generous: the transport layer's own
    /// timeout is the only effective bound on these requests.
    pub timeout: Duration,
    /// Anti-forgery token source.
    pub token_source: TokenSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout: Duration::from_secs(1000),
            token_source: TokenSource::Env("CLIPIQ_CSRF_TOKEN".to_string()),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CLIPIQ_API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            timeout: Duration::from_secs(
                std::env::var("CLIPIQ_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            token_source: TokenSource::Env("CLIPIQ_CSRF_TOKEN".to_string()),
        }
    }

    /// Replace the token source.
    pub fn with_token(mut self, token_source: TokenSource) -> Self {
        self.token_source = token_source;
        self
    }
}
