//! HTTP client for the ClipIQ backend API.
//!
//! Wraps the four backend operations the client flow depends on: metadata
//! fetch, source ingestion, generation submission, and per-facet SEO data
//! retrieval. Requests carry a JSON content type and an anti-forgery token
//! sourced from configuration; a missing token is a construction-time error,
//! not a per-request one.

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::{ClientConfig, TokenSource};
pub use error::{ClientError, ClientResult};
