//! The per-flow session and its orchestration operations.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use clipiq_client::ApiClient;
use clipiq_models::{
    AspectRatio, BuildError, ClipDuration, ClipRequestBuilder, GenerationResult,
    OptimizationProfile, SourceRefError, SourceReference, VideoMetadata,
};

use crate::error::SessionError;
use crate::seo::{FacetRequest, SeoPanel};
use crate::state::Slot;

/// In-memory state for one clipping flow.
///
/// The session exclusively owns the source reference, fetched metadata, and
/// builder state for the duration of the flow; fetching a new source resets
/// all of it.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    source: Option<SourceReference>,
    metadata: Slot<VideoMetadata>,
    builder: ClipRequestBuilder,
    generation: Option<GenerationResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            source: None,
            metadata: Slot::new(),
            builder: ClipRequestBuilder::new(),
            generation: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn source(&self) -> Option<&SourceReference> {
        self.source.as_ref()
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.get()
    }

    pub fn generation(&self) -> Option<&GenerationResult> {
        self.generation.as_ref()
    }

    // Builder pass-throughs. Parameter accumulation is independent of any
    // network call, so these never fail on session state.

    pub fn set_profile(&mut self, profile: OptimizationProfile) {
        self.builder.set_profile(profile);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.builder.set_aspect_ratio(aspect_ratio);
    }

    pub fn set_clip_duration(&mut self, duration: ClipDuration) {
        self.builder.set_clip_duration(duration);
    }

    pub fn set_clip_count(&mut self, count: u8) -> Result<(), BuildError> {
        self.builder.set_clip_count(count)
    }

    pub fn profile(&self) -> Option<OptimizationProfile> {
        self.builder.profile()
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.builder.aspect_ratio()
    }

    /// Validate a raw reference, fetch its metadata, then trigger ingestion.
    ///
    /// The three steps are strictly sequenced: nothing reaches the network
    /// before validation passes, and ingestion is only issued once the
    /// metadata fetch has completed successfully. An ingestion failure fails
    /// the overall action, but the fetched metadata stays applied so the
    /// user keeps the partial progress.
    pub async fn fetch_source(
        &mut self,
        client: &ApiClient,
        raw_reference: &str,
    ) -> Result<VideoMetadata, SessionError> {
        // Blank input gets its own message before any pattern matching.
        if raw_reference.trim().is_empty() {
            return Err(SessionError::Reference(SourceRefError::Empty));
        }

        let source = SourceReference::parse(raw_reference)?;
        info!(session_id = %self.id, video_id = source.video_id(), "starting fetch flow");
        self.restart_with(source.clone());

        let ticket = self.metadata.begin();
        let metadata = client
            .fetch_metadata(&source)
            .await
            .map_err(SessionError::MetadataFetch)?;

        if !self.metadata.commit(ticket, metadata.clone()) {
            debug!(session_id = %self.id, "metadata response superseded, discarding");
        }

        match client.trigger_ingestion(&source).await {
            Ok(ack) => {
                // Fire-and-forget for display purposes.
                info!(session_id = %self.id, message = %ack.message, "source ingestion triggered");
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "source ingestion failed");
                return Err(SessionError::Ingestion(e));
            }
        }

        Ok(metadata)
    }

    /// Build the clip request from accumulated state and submit it.
    ///
    /// On failure the previous generation result (if any) is kept; nothing
    /// is partially overwritten.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<GenerationResult, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoActiveSource)?;
        let request = self.builder.build(source, self.metadata.get())?;

        let result = client
            .submit_generation(&request)
            .await
            .map_err(SessionError::Submission)?;

        info!(session_id = %self.id, message = %result.message, "generation accepted");
        self.generation = Some(result.clone());
        Ok(result)
    }

    /// Open the SEO stage for the generated content.
    ///
    /// Requires a successful submission. Returns the panel together with the
    /// fetch request for the initially selected facet (Keywords). Backends
    /// that omit a generated-content identifier are keyed by the source
    /// video ID instead.
    pub fn open_seo_panel(&self) -> Result<(SeoPanel, FacetRequest), SessionError> {
        let generation = self
            .generation
            .as_ref()
            .ok_or(SessionError::NothingGenerated)?;

        let content_id = generation
            .content_id
            .clone()
            .or_else(|| self.metadata.get().map(|m| m.video_id.clone()))
            .ok_or(SessionError::NothingGenerated)?;

        Ok(SeoPanel::open(content_id))
    }

    /// Reset everything owned by the session for a new source reference.
    fn restart_with(&mut self, source: SourceReference) {
        self.source = Some(source);
        self.metadata.clear();
        self.builder = ClipRequestBuilder::new();
        self.generation = None;
    }
}
