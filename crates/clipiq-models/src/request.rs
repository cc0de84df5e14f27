//! Clip generation request payload and builder.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::{SourceReference, VideoMetadata};

/// Maximum number of clips per generation request.
pub const MAX_CLIP_COUNT: u8 = 4;

/// The user's chosen optimization mode.
///
/// Gates which parameters are relevant: clip duration and count only apply
/// to short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum OptimizationProfile {
    #[serde(rename = "Long Form")]
    LongForm,
    #[serde(rename = "Short Form")]
    ShortForm,
}

impl OptimizationProfile {
    /// The aspect ratio this profile resets to when selected.
    ///
    /// Long form aspect ratio is never independently selectable in the
    /// current product; switching profile always overrides any earlier
    /// explicit choice.
    pub fn default_aspect_ratio(&self) -> AspectRatio {
        match self {
            OptimizationProfile::LongForm => AspectRatio::Wide16x9,
            OptimizationProfile::ShortForm => AspectRatio::Tall9x16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationProfile::LongForm => "Long Form",
            OptimizationProfile::ShortForm => "Short Form",
        }
    }
}

impl fmt::Display for OptimizationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "9:16")]
    Tall9x16,
    #[serde(rename = "4:3")]
    Classic4x3,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Tall9x16 => "9:16",
            AspectRatio::Classic4x3 => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clip duration for short-form generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum ClipDuration {
    #[serde(rename = "30s")]
    S30,
    #[serde(rename = "60s")]
    S60,
    #[default]
    #[serde(rename = "90s")]
    S90,
}

impl ClipDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipDuration::S30 => "30s",
            ClipDuration::S60 => "60s",
            ClipDuration::S90 => "90s",
        }
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from building a clip request with unmet preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No optimization profile chosen")]
    MissingProfile,

    #[error("Video metadata not fetched yet")]
    MissingMetadata,

    #[error("Clip count must be between 1 and {MAX_CLIP_COUNT}, got {0}")]
    InvalidClipCount(u8),
}

/// Immutable generation request payload.
///
/// Field names follow the backend wire format. Duration and count are
/// omitted entirely for long-form requests rather than carrying stale
/// short-form choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClipRequest {
    #[serde(rename = "videoURL")]
    pub video_url: String,

    #[serde(rename = "optimizationType")]
    pub optimization_type: OptimizationProfile,

    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: AspectRatio,

    #[serde(rename = "clipLength", skip_serializing_if = "Option::is_none")]
    pub clip_length: Option<ClipDuration>,

    #[serde(rename = "clipCount", skip_serializing_if = "Option::is_none")]
    pub clip_count: Option<u8>,
}

/// Accumulates user-chosen generation parameters into a [`ClipRequest`].
///
/// The only cross-field coupling lives in [`set_profile`]: choosing a
/// profile resets the aspect ratio to that profile's default, overriding any
/// earlier explicit choice.
///
/// [`set_profile`]: ClipRequestBuilder::set_profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequestBuilder {
    profile: Option<OptimizationProfile>,
    aspect_ratio: AspectRatio,
    clip_duration: ClipDuration,
    clip_count: u8,
}

impl Default for ClipRequestBuilder {
    fn default() -> Self {
        Self {
            profile: None,
            aspect_ratio: AspectRatio::Wide16x9,
            clip_duration: ClipDuration::S90,
            clip_count: 1,
        }
    }
}

impl ClipRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the optimization profile, resetting the aspect ratio to the
    /// profile default.
    pub fn set_profile(&mut self, profile: OptimizationProfile) {
        self.profile = Some(profile);
        self.aspect_ratio = profile.default_aspect_ratio();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_clip_duration(&mut self, duration: ClipDuration) {
        self.clip_duration = duration;
    }

    /// Set the number of clips to generate (1..=4).
    pub fn set_clip_count(&mut self, count: u8) -> Result<(), BuildError> {
        if count == 0 || count > MAX_CLIP_COUNT {
            return Err(BuildError::InvalidClipCount(count));
        }
        self.clip_count = count;
        Ok(())
    }

    pub fn profile(&self) -> Option<OptimizationProfile> {
        self.profile
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Build the immutable request payload.
    ///
    /// Fails when no profile has been chosen or when no metadata fetch has
    /// succeeded yet (`metadata` is `None`).
    pub fn build(
        &self,
        source: &SourceReference,
        metadata: Option<&VideoMetadata>,
    ) -> Result<ClipRequest, BuildError> {
        let profile = self.profile.ok_or(BuildError::MissingProfile)?;
        if metadata.is_none() {
            return Err(BuildError::MissingMetadata);
        }

        // Duration and count are short-form-only parameters.
        let (clip_length, clip_count) = match profile {
            OptimizationProfile::LongForm => (None, None),
            OptimizationProfile::ShortForm => (Some(self.clip_duration), Some(self.clip_count)),
        };

        Ok(ClipRequest {
            video_url: source.canonical_url(),
            optimization_type: profile,
            aspect_ratio: self.aspect_ratio,
            clip_length,
            clip_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceReference {
        SourceReference::parse("https://youtu.be/dQw4w9WgXcQ").unwrap()
    }

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            title: "Test".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
            video_id: "dQw4w9WgXcQ".to_string(),
        }
    }

    #[test]
    fn test_profile_switch_resets_aspect_ratio() {
        let mut builder = ClipRequestBuilder::new();

        builder.set_profile(OptimizationProfile::ShortForm);
        assert_eq!(builder.aspect_ratio(), AspectRatio::Tall9x16);

        builder.set_aspect_ratio(AspectRatio::Classic4x3);
        builder.set_profile(OptimizationProfile::LongForm);
        assert_eq!(builder.aspect_ratio(), AspectRatio::Wide16x9);

        builder.set_profile(OptimizationProfile::ShortForm);
        assert_eq!(builder.aspect_ratio(), AspectRatio::Tall9x16);
    }

    #[test]
    fn test_build_requires_profile() {
        let builder = ClipRequestBuilder::new();
        let meta = metadata();
        assert_eq!(
            builder.build(&source(), Some(&meta)),
            Err(BuildError::MissingProfile)
        );
    }

    #[test]
    fn test_build_requires_metadata() {
        let mut builder = ClipRequestBuilder::new();
        builder.set_profile(OptimizationProfile::ShortForm);
        assert_eq!(builder.build(&source(), None), Err(BuildError::MissingMetadata));
    }

    #[test]
    fn test_long_form_omits_short_form_fields() {
        let mut builder = ClipRequestBuilder::new();
        builder.set_profile(OptimizationProfile::ShortForm);
        builder.set_clip_count(4).unwrap();
        builder.set_clip_duration(ClipDuration::S30);

        // Switching away from short form must not carry stale duration/count.
        builder.set_profile(OptimizationProfile::LongForm);
        let meta = metadata();
        let request = builder.build(&source(), Some(&meta)).unwrap();

        assert_eq!(request.optimization_type, OptimizationProfile::LongForm);
        assert_eq!(request.aspect_ratio, AspectRatio::Wide16x9);
        assert_eq!(request.clip_length, None);
        assert_eq!(request.clip_count, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("clipLength").is_none());
        assert!(json.get("clipCount").is_none());
    }

    #[test]
    fn test_short_form_wire_format() {
        let mut builder = ClipRequestBuilder::new();
        builder.set_profile(OptimizationProfile::ShortForm);
        builder.set_clip_duration(ClipDuration::S60);
        builder.set_clip_count(3).unwrap();

        let meta = metadata();
        let request = builder.build(&source(), Some(&meta)).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["videoURL"],
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(json["optimizationType"], "Short Form");
        assert_eq!(json["aspectRatio"], "9:16");
        assert_eq!(json["clipLength"], "60s");
        assert_eq!(json["clipCount"], 3);
    }

    #[test]
    fn test_clip_count_bounds() {
        let mut builder = ClipRequestBuilder::new();
        assert_eq!(
            builder.set_clip_count(0),
            Err(BuildError::InvalidClipCount(0))
        );
        assert_eq!(
            builder.set_clip_count(5),
            Err(BuildError::InvalidClipCount(5))
        );
        assert!(builder.set_clip_count(1).is_ok());
        assert!(builder.set_clip_count(MAX_CLIP_COUNT).is_ok());
    }

    #[test]
    fn test_explicit_ratio_meaningful_for_short_form() {
        let mut builder = ClipRequestBuilder::new();
        builder.set_profile(OptimizationProfile::ShortForm);
        builder.set_aspect_ratio(AspectRatio::Classic4x3);

        let meta = metadata();
        let request = builder.build(&source(), Some(&meta)).unwrap();
        assert_eq!(request.aspect_ratio, AspectRatio::Classic4x3);
    }
}
