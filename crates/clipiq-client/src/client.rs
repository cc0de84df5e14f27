//! Backend API HTTP client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use clipiq_models::{
    ClipRequest, GenerationResult, IngestionAck, SeoFacet, SourceReference, VideoMetadata,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Header carrying the anti-forgery token.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Client for the ClipIQ backend API.
///
/// All operations are single network calls with no retry: failure policy is
/// the caller's concern.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// Fails when the base URL is malformed or when no anti-forgery token is
    /// available from the configured source. The token check here makes a
    /// missing token a startup error for the whole client rather than a
    /// per-request surprise.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Url::parse(&config.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        if config.token_source.token().is_none() {
            return Err(ClientError::MissingToken(config.token_source.describe()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Fetch descriptive metadata for a validated source reference.
    ///
    /// The reference has already passed validation by construction; this
    /// method does not re-validate.
    pub async fn fetch_metadata(&self, source: &SourceReference) -> ClientResult<VideoMetadata> {
        let url = format!("{}/fetch-video/", self.config.base_url);
        debug!(video_id = source.video_id(), "fetching video metadata");

        let response = self
            .http
            .get(&url)
            .query(&[("url", source.canonical_url())])
            .send()
            .await?;

        let mut metadata: VideoMetadata = decode(response).await?;
        // The backend response carries title and thumbnail only.
        if metadata.video_id.is_empty() {
            metadata.video_id = source.video_id().to_string();
        }
        Ok(metadata)
    }

    /// Trigger backend ingestion (download + storage) of the source media.
    pub async fn trigger_ingestion(&self, source: &SourceReference) -> ClientResult<IngestionAck> {
        let url = format!("{}/download-video/", self.config.base_url);
        debug!(video_id = source.video_id(), "triggering source ingestion");

        let response = self
            .http
            .get(&url)
            .query(&[("url", source.canonical_url())])
            .send()
            .await?;

        decode(response).await
    }

    /// Submit a built clip request to the generation endpoint.
    ///
    /// The anti-forgery token is re-read from its source on every submission
    /// in case it has rotated since the client was constructed.
    pub async fn submit_generation(&self, request: &ClipRequest) -> ClientResult<GenerationResult> {
        let token = self
            .config
            .token_source
            .token()
            .ok_or_else(|| ClientError::MissingToken(self.config.token_source.describe()))?;

        let url = format!("{}/generate-video/", self.config.base_url);
        debug!(
            profile = %request.optimization_type,
            aspect_ratio = %request.aspect_ratio,
            "submitting generation request"
        );

        let response = self
            .http
            .post(&url)
            .header(CSRF_HEADER, token)
            .json(request)
            .send()
            .await?;

        decode(response).await
    }

    /// Fetch one SEO facet's text for a generated-content identifier.
    ///
    /// Returns `None` when the response carried no payload under the facet's
    /// key; the caller decides what sentinel to display.
    pub async fn fetch_seo_facet(
        &self,
        content_id: &str,
        facet: SeoFacet,
    ) -> ClientResult<Option<String>> {
        let url = format!(
            "{}/seo-data/{}/{}/",
            self.config.base_url, content_id, facet
        );
        debug!(content_id, facet = %facet, "fetching SEO facet data");

        let response = self.http.get(&url).send().await?;
        let body: Value = decode(response).await?;

        Ok(facet_text(&body, facet))
    }
}

/// Extract the facet payload from a response body.
///
/// Keywords and tags come back as arrays, title and description as strings;
/// both render as a single text block.
fn facet_text(body: &Value, facet: SeoFacet) -> Option<String> {
    match body.get(facet.as_str()) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Array(items)) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

/// Decode a response, turning error statuses into [`ClientError::Server`]
/// with the server-provided message when the body carries one.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = server_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Server error occurred.".to_string());
        warn!(status = status.as_u16(), %message, "request failed");
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Pull the `error` field out of an error response body, if present.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenSource;

    fn test_config() -> ClientConfig {
        ClientConfig::default().with_token(TokenSource::Static("test-token".to_string()))
    }

    #[test]
    fn test_new_requires_token() {
        let config = ClientConfig::default().with_token(TokenSource::Env(
            "CLIPIQ_TEST_ABSENT_TOKEN_VAR".to_string(),
        ));
        let err = ApiClient::new(config).unwrap_err();
        assert!(matches!(err, ClientError::MissingToken(_)));
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        let err = ApiClient::new(config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_facet_text_string_and_array() {
        let body = serde_json::json!({
            "title": "Optimized Title",
            "keywords": ["rust", "clips", "seo"],
            "description": "",
        });
        assert_eq!(
            facet_text(&body, SeoFacet::Title).as_deref(),
            Some("Optimized Title")
        );
        assert_eq!(
            facet_text(&body, SeoFacet::Keywords).as_deref(),
            Some("rust, clips, seo")
        );
        assert_eq!(facet_text(&body, SeoFacet::Description), None);
        assert_eq!(facet_text(&body, SeoFacet::Tags), None);
    }

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            server_message(r#"{"error": "Video not found"}"#).as_deref(),
            Some("Video not found")
        );
        assert_eq!(server_message("<html>nope</html>"), None);
        assert_eq!(server_message(r#"{"detail": "other"}"#), None);
    }
}
