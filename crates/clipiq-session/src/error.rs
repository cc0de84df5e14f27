//! Session orchestration errors.

use thiserror::Error;

use clipiq_client::ClientError;
use clipiq_models::{BuildError, SourceRefError};

/// Errors surfaced by session orchestration operations.
///
/// Network failures are wrapped per stage so callers can tell which step of
/// a user action failed; local precondition failures pass through unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Local validation failure; the triggering action is blocked entirely
    /// and nothing reaches the network.
    #[error(transparent)]
    Reference(#[from] SourceRefError),

    /// Local precondition failure while assembling a generation request.
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Error fetching video metadata: {0}")]
    MetadataFetch(#[source] ClientError),

    #[error("Error ingesting source video: {0}")]
    Ingestion(#[source] ClientError),

    #[error("Error during video generation: {0}")]
    Submission(#[source] ClientError),

    #[error("No source reference has been fetched in this session")]
    NoActiveSource,

    #[error("Nothing has been generated in this session yet")]
    NothingGenerated,
}
