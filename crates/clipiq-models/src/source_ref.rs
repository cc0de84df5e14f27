//! Source reference validation and video ID extraction.
//!
//! A source reference is the user-pasted YouTube link identifying the video
//! to clip. References are treated as untrusted input: only YouTube hosts are
//! accepted, video IDs are strictly validated (11 chars, alphanumeric plus
//! `-_`), and nothing here touches the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a source reference.
///
/// `Empty` is distinct from the malformed variants so callers can
/// short-circuit blank input with a clearer message before any pattern
/// matching runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceRefError {
    #[error("No URL provided")]
    Empty,

    #[error("URL is not a YouTube link")]
    UnsupportedHost,

    #[error("Video ID has invalid format (must be 11 alphanumeric characters)")]
    InvalidVideoId,

    #[error("Could not find a video ID in the URL")]
    VideoIdNotFound,
}

/// A validated source video reference.
///
/// Construction via [`SourceReference::parse`] is the only way to obtain one,
/// so any `SourceReference` handed to the network layer has already passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    /// The user-supplied URL, trimmed.
    raw: String,
    /// Extracted 11-character video ID.
    video_id: String,
}

impl SourceReference {
    /// Parse and validate a raw user-supplied reference.
    pub fn parse(raw: &str) -> Result<Self, SourceRefError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceRefError::Empty);
        }
        let video_id = extract_video_id(trimmed)?;
        Ok(Self {
            raw: trimmed.to_string(),
            video_id,
        })
    }

    /// The URL as the user entered it (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The extracted 11-character video ID.
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// Normalized canonical watch URL, used as the query value sent to the
    /// backend regardless of which link form the user pasted.
    pub fn canonical_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

impl std::fmt::Display for SourceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Check whether a string is a well-formed source reference.
///
/// Pure function: it can only fail for pattern-mismatch reasons, never for
/// network or parsing ones.
pub fn validate(reference: &str) -> bool {
    let trimmed = reference.trim();
    !trimmed.is_empty() && extract_video_id(trimmed).is_ok()
}

/// Extract a YouTube video ID from a URL.
///
/// Supports all common YouTube URL forms, with or without scheme and `www`:
/// - `https://youtube.com/watch?v=VIDEO_ID`
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `https://youtube.com/v/VIDEO_ID`
/// - `https://youtube.com/shorts/VIDEO_ID`
pub fn extract_video_id(url: &str) -> Result<String, SourceRefError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SourceRefError::Empty);
    }

    if !is_youtube_host(url) {
        return Err(SourceRefError::UnsupportedHost);
    }

    // Extraction strategies in order of preference.
    if let Some(id) = extract_from_watch_url(url) {
        return validate_id(id);
    }
    if let Some(id) = extract_after(url, "youtu.be/") {
        return validate_id(id);
    }
    if let Some(id) = extract_after(url, "/embed/") {
        return validate_id(id);
    }
    if let Some(id) = extract_after(url, "/v/") {
        return validate_id(id);
    }
    if let Some(id) = extract_after(url, "/shorts/") {
        return validate_id(id);
    }

    Err(SourceRefError::VideoIdNotFound)
}

/// Check whether the URL points at a YouTube host.
fn is_youtube_host(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Extract the ID from `watch?v=` / `&v=` style URLs.
fn extract_from_watch_url(url: &str) -> Option<String> {
    let pos = url.find("?v=").or_else(|| url.find("&v="))?;
    extract_id_segment(&url[pos + 3..])
}

/// Extract the ID segment following a path marker such as `/embed/`.
fn extract_after(url: &str, marker: &str) -> Option<String> {
    let pos = url.find(marker)?;
    let start = pos + marker.len();
    if start >= url.len() {
        return None;
    }
    extract_id_segment(&url[start..])
}

/// Take everything up to the next delimiter.
fn extract_id_segment(segment: &str) -> Option<String> {
    let delimiters = ['&', '#', '?', '/'];
    let end = segment
        .find(|c| delimiters.contains(&c))
        .unwrap_or(segment.len());
    Some(segment[..end].trim().to_string())
}

/// Validate video ID format: exactly 11 characters, alphanumeric plus `-_`.
fn validate_id(id: String) -> Result<String, SourceRefError> {
    if id.len() != 11 {
        return Err(SourceRefError::InvalidVideoId);
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SourceRefError::InvalidVideoId);
    }
    Ok(id)
}
