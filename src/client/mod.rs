use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub mod web;
pub mod youtube;

use crate::error::{Result, SupadataError};
use crate::options::{CrawlOptions, MapOptions, ScrapeOptions, VideoListOptions};

/// Production endpoint used when no override is given
pub const DEFAULT_BASE_URL: &str = "https://api.supadata.ai";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Optional settings for [`SupadataClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Base endpoint override, kept verbatim
    pub base_url: Option<String>,

    /// Per-request timeout handed to the transport
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Async client for the Supadata API.
///
/// Holds only the key, the base endpoint and a pooled HTTP client, so it is
/// cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct SupadataClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl SupadataClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with explicit options. No request is sent.
    ///
    /// A base URL override is stored and reported verbatim by
    /// [`base_url`](Self::base_url), but it must be an absolute `http` or
    /// `https` URL; anything else is a [`SupadataError::Configuration`].
    pub fn with_options(api_key: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SupadataError::Configuration("API key is required".to_string()));
        }

        let base_url = options
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let mut key_value = HeaderValue::from_str(&api_key).map_err(|_| {
            SupadataError::Configuration("API key contains invalid header characters".to_string())
        })?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("supadata-rust/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            SupadataError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        tracing::debug!("Supadata client ready for {}", base_url);

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    /// Base endpoint exactly as configured
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Check API key validity
    pub async fn check_api_key(&self) -> Result<Value> {
        self.execute(self.get("/v1/health")).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.endpoint(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.endpoint(path))
    }

    /// Send a request and normalize whatever comes back.
    ///
    /// Every endpoint goes through here, so error classification lives in
    /// exactly one place.
    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let request = request.build().map_err(SupadataError::Http)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!("{} {}", method, path);

        let response = self.http.execute(request).await.map_err(|e| {
            let err = SupadataError::from_transport(e);
            if err.is_network() {
                tracing::warn!("{} {} got no response: {:?}", method, path, err);
            }
            err
        })?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, path, status);

        if !status.is_success() {
            // The status is already known; a broken body only loses the details
            let body = match response.bytes().await {
                Ok(bytes) => parse_error_body(&bytes),
                Err(e) => {
                    tracing::debug!("{} {} error body unreadable: {}", method, path, e);
                    None
                }
            };
            let err = SupadataError::from_response(status, body);
            tracing::warn!("{} {} failed: {}", method, path, err);
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| {
            let err = SupadataError::from_transport(e);
            tracing::warn!("{} {} body was cut off: {:?}", method, path, err);
            err
        })?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Keep the raw body around for callers: JSON when it parses, text otherwise
fn parse_error_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = Url::parse(base_url)
        .map_err(|_| SupadataError::Configuration(format!("Invalid base URL: {}", base_url)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SupadataError::Configuration(
            "Base URL must use HTTP or HTTPS protocol".to_string(),
        ));
    }

    Ok(())
}

/// Fail before any I/O when a required argument is empty
pub(crate) fn require(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SupadataError::Validation(format!("{} is required", what)));
    }
    Ok(())
}

/// The full set of Supadata operations.
///
/// [`SupadataClient`] is the real implementation; the trait exists so code
/// that drives the API can be exercised against a stand-in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupadataApi: Send + Sync {
    async fn get_transcript(&self, video_id: &str) -> Result<Value>;

    async fn check_api_key(&self) -> Result<Value>;

    async fn get_url_content(&self, url: &str, options: &ScrapeOptions) -> Result<Value>;

    async fn translate_transcript(&self, video_id: &str, target_language: &str)
        -> Result<Value>;

    async fn map_website(&self, url: &str, options: &MapOptions) -> Result<Value>;

    async fn crawl_website(&self, url: &str, options: &CrawlOptions) -> Result<Value>;

    async fn get_crawl_result(&self, job_id: &str) -> Result<Value>;

    async fn get_video(&self, video_id: &str) -> Result<Value>;

    async fn get_channel(&self, channel_id: &str) -> Result<Value>;

    async fn get_playlist(&self, playlist_id: &str) -> Result<Value>;

    async fn get_channel_videos(
        &self,
        channel_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value>;

    async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value>;
}

#[async_trait]
impl SupadataApi for SupadataClient {
    async fn get_transcript(&self, video_id: &str) -> Result<Value> {
        SupadataClient::get_transcript(self, video_id).await
    }

    async fn check_api_key(&self) -> Result<Value> {
        SupadataClient::check_api_key(self).await
    }

    async fn get_url_content(&self, url: &str, options: &ScrapeOptions) -> Result<Value> {
        SupadataClient::get_url_content(self, url, options).await
    }

    async fn translate_transcript(
        &self,
        video_id: &str,
        target_language: &str,
    ) -> Result<Value> {
        SupadataClient::translate_transcript(self, video_id, target_language).await
    }

    async fn map_website(&self, url: &str, options: &MapOptions) -> Result<Value> {
        SupadataClient::map_website(self, url, options).await
    }

    async fn crawl_website(&self, url: &str, options: &CrawlOptions) -> Result<Value> {
        SupadataClient::crawl_website(self, url, options).await
    }

    async fn get_crawl_result(&self, job_id: &str) -> Result<Value> {
        SupadataClient::get_crawl_result(self, job_id).await
    }

    async fn get_video(&self, video_id: &str) -> Result<Value> {
        SupadataClient::get_video(self, video_id).await
    }

    async fn get_channel(&self, channel_id: &str) -> Result<Value> {
        SupadataClient::get_channel(self, channel_id).await
    }

    async fn get_playlist(&self, playlist_id: &str) -> Result<Value> {
        SupadataClient::get_playlist(self, playlist_id).await
    }

    async fn get_channel_videos(
        &self,
        channel_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value> {
        SupadataClient::get_channel_videos(self, channel_id, options).await
    }

    async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        options: &VideoListOptions,
    ) -> Result<Value> {
        SupadataClient::get_playlist_videos(self, playlist_id, options).await
    }
}
