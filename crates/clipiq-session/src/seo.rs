//! SEO facet retrieval state machine.
//!
//! One facet is fetched at a time, keyed by the facet tab the user selects.
//! Nothing is pre-fetched for unselected tabs. Selecting a facet hands back
//! a [`FacetRequest`] stamped with the panel's current sequence number;
//! in-flight fetches are never cancelled, but a response whose request is no
//! longer current is discarded when applied — last selected facet wins.

use std::collections::HashMap;

use tracing::{debug, warn};

use clipiq_client::{ApiClient, ClientResult};
use clipiq_models::{SeoFacet, FETCH_FAILED_SENTINEL, NO_DATA_SENTINEL};

/// A pending fetch for one facet, issued at a particular selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetRequest {
    facet: SeoFacet,
    seq: u64,
}

impl FacetRequest {
    pub fn facet(&self) -> SeoFacet {
        self.facet
    }
}

/// Per-content SEO display state.
#[derive(Debug, Clone)]
pub struct SeoPanel {
    content_id: String,
    active: SeoFacet,
    seq: u64,
    data: HashMap<SeoFacet, String>,
}

impl SeoPanel {
    /// Open the panel with Keywords selected and no data, returning the
    /// fetch request for the initial facet.
    pub fn open(content_id: impl Into<String>) -> (Self, FacetRequest) {
        let mut panel = Self {
            content_id: content_id.into(),
            active: SeoFacet::Keywords,
            seq: 0,
            data: HashMap::new(),
        };
        let initial = panel.select(SeoFacet::Keywords);
        (panel, initial)
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn active(&self) -> SeoFacet {
        self.active
    }

    /// Text cached for a facet, if any fetch for it has completed.
    pub fn text(&self, facet: SeoFacet) -> Option<&str> {
        self.data.get(&facet).map(String::as_str)
    }

    /// Text for the currently selected facet.
    pub fn active_text(&self) -> Option<&str> {
        self.text(self.active)
    }

    /// Select a facet, superseding any outstanding fetch.
    pub fn select(&mut self, facet: SeoFacet) -> FacetRequest {
        self.active = facet;
        self.seq += 1;
        FacetRequest {
            facet,
            seq: self.seq,
        }
    }

    /// Apply a fetch outcome.
    ///
    /// Returns `false` when the request has been superseded by a later
    /// selection; the result is dropped and no facet's cached text changes.
    /// Failures store the failure sentinel under the requested facet only.
    pub fn apply(&mut self, request: FacetRequest, outcome: ClientResult<Option<String>>) -> bool {
        if request.seq != self.seq {
            debug!(
                content_id = %self.content_id,
                facet = %request.facet,
                "discarding stale facet response"
            );
            return false;
        }

        let text = match outcome {
            Ok(Some(text)) => text,
            Ok(None) => NO_DATA_SENTINEL.to_string(),
            Err(e) => {
                warn!(
                    content_id = %self.content_id,
                    facet = %request.facet,
                    error = %e,
                    "facet fetch failed"
                );
                FETCH_FAILED_SENTINEL.to_string()
            }
        };

        self.data.insert(request.facet, text);
        true
    }

    /// Fetch the data for a pending request and apply it.
    pub async fn refresh(&mut self, client: &ApiClient, request: FacetRequest) -> bool {
        let outcome = client.fetch_seo_facet(&self.content_id, request.facet).await;
        self.apply(request, outcome)
    }

    /// Select a facet and fetch its data in one step.
    pub async fn show(&mut self, client: &ApiClient, facet: SeoFacet) -> Option<&str> {
        let request = self.select(facet);
        self.refresh(client, request).await;
        self.active_text()
    }
}
