//! SEO metadata facets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel shown when a facet response carried no payload.
pub const NO_DATA_SENTINEL: &str = "No data available for this section.";

/// Sentinel shown when a facet fetch failed. Stored under the requested
/// facet only, so the display never shows another facet's stale text.
pub const FETCH_FAILED_SENTINEL: &str = "Failed to fetch data. Please try again later.";

/// One discrete category of generated SEO metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeoFacet {
    /// Initially selected facet.
    #[default]
    Keywords,
    Description,
    Title,
    Tags,
}

impl SeoFacet {
    /// All facets in display order.
    pub const ALL: &'static [SeoFacet] = &[
        SeoFacet::Keywords,
        SeoFacet::Description,
        SeoFacet::Title,
        SeoFacet::Tags,
    ];

    /// Lowercase name used as the URL path segment and response key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeoFacet::Keywords => "keywords",
            SeoFacet::Description => "description",
            SeoFacet::Title => "title",
            SeoFacet::Tags => "tags",
        }
    }
}

impl fmt::Display for SeoFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeoFacet {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keywords" => Ok(SeoFacet::Keywords),
            "description" => Ok(SeoFacet::Description),
            "title" => Ok(SeoFacet::Title),
            "tags" => Ok(SeoFacet::Tags),
            _ => Err(FacetParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown SEO facet: {0}")]
pub struct FacetParseError(String);
