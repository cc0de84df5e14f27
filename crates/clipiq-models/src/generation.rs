//! Backend acknowledgement types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Acknowledgement returned when a generation request is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationResult {
    /// Human-readable status message for display.
    pub message: String,

    /// Identifier of the generated content, consumed by the SEO stage.
    /// Older backend revisions omit it; the session falls back to the
    /// source video ID in that case.
    #[serde(rename = "generatedContentId", default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// Acknowledgement returned when source ingestion is triggered.
///
/// Ingestion is fire-and-forget for display purposes: this is logged, not
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IngestionAck {
    /// Status message from the backend.
    pub message: String,

    /// Storage location of the ingested media, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
