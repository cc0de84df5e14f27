//! Session state machine and request orchestration.
//!
//! One [`Session`] owns the state for a single clipping flow: the validated
//! source reference, fetched video metadata, accumulated generation
//! parameters, and the generation acknowledgement. Orchestration methods
//! sequence the dependent network calls (validate, fetch metadata, trigger
//! ingestion, submit generation) and enforce the gating rules between them.
//!
//! The [`SeoPanel`] drives the per-facet SEO retrieval state machine, with a
//! sequence-number guard that discards responses arriving after the selected
//! facet has changed.

pub mod error;
pub mod seo;
pub mod session;
pub mod state;

pub use error::SessionError;
pub use seo::{FacetRequest, SeoPanel};
pub use session::Session;
pub use state::{Slot, Ticket};
