//! Supadata - an async client for the Supadata API
//!
//! Wraps the transcript, web scraping/crawling and YouTube metadata endpoints
//! behind one method per endpoint. Payloads come back as untouched
//! [`serde_json::Value`]s; failures are normalized into [`SupadataError`].
//!
//! ```rust,no_run
//! use supadata::SupadataClient;
//!
//! # async fn run() -> supadata::Result<()> {
//! let client = SupadataClient::new("your-api-key")?;
//! let transcript = client.get_transcript("dQw4w9WgXcQ").await?;
//! println!("{}", transcript);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod output;

pub use cli::{Cli, Commands, OutputFormat};
pub use client::{ClientOptions, SupadataApi, SupadataClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::{Result, SupadataError};
pub use options::{CrawlOptions, MapOptions, ScrapeOptions, VideoKind, VideoListOptions};
