//! Shared data models for the ClipIQ client.
//!
//! This crate provides Serde-serializable types for:
//! - Source reference validation and video ID extraction
//! - Video metadata returned by the backend
//! - Clip generation requests and the request builder
//! - Generation/ingestion acknowledgements
//! - SEO facets and their display sentinels

pub mod generation;
pub mod request;
pub mod seo;
pub mod source_ref;
pub mod video;

// Re-export common types
pub use generation::{GenerationResult, IngestionAck};
pub use request::{
    AspectRatio, BuildError, ClipDuration, ClipRequest, ClipRequestBuilder, OptimizationProfile,
    MAX_CLIP_COUNT,
};
pub use seo::{SeoFacet, FETCH_FAILED_SENTINEL, NO_DATA_SENTINEL};
pub use source_ref::{extract_video_id, validate, SourceRefError, SourceReference};
pub use video::VideoMetadata;
