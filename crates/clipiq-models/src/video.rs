//! Video metadata returned by the backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Descriptive metadata for a fetched source video.
///
/// Produced by a successful metadata fetch and read-only afterwards. A new
/// fetch replaces the whole value; it is never merged with stale data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetadata {
    /// Video title.
    pub title: String,

    /// Preview thumbnail URL.
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,

    /// 11-character video ID. The backend response omits it, so the client
    /// backfills it from the validated reference after decoding.
    #[serde(default)]
    pub video_id: String,
}
