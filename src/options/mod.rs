//! Optional parameters for the endpoints that accept them.
//!
//! Each struct is an allow-list: only the named fields ever reach the API.
//! Unset fields are left out of the request entirely. Values are not range
//! checked; the service decides what it accepts.

use serde::{Deserialize, Serialize};

/// Options for `GET /v1/web/scrape`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOptions {
    /// Preferred content language (ISO 639-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Drop links from the returned content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_links: Option<bool>,

    /// Link depth to follow from the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl ScrapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn no_links(mut self, no_links: bool) -> Self {
        self.no_links = Some(no_links);
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// Options for `GET /v1/web/map`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_links: Option<bool>,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn no_links(mut self, no_links: bool) -> Self {
        self.no_links = Some(no_links);
        self
    }
}

/// Options for `POST /v1/web/crawl`, merged into the JSON body next to `url`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlOptions {
    /// Upper bound on pages fetched by the job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,

    /// How many links deep the crawl may go
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,

    /// Maximum number of results returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CrawlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Kind of uploads to list for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    All,
    Video,
    Short,
    Live,
}

impl VideoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::All => "all",
            VideoKind::Video => "video",
            VideoKind::Short => "short",
            VideoKind::Live => "live",
        }
    }
}

impl std::fmt::Display for VideoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the channel and playlist video listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<VideoKind>,
}

impl VideoListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn kind(mut self, kind: VideoKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
