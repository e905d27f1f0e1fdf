use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::time::Duration;

use crate::client::SupadataApi;
use crate::options::{CrawlOptions, MapOptions, ScrapeOptions, VideoKind, VideoListOptions};

#[derive(Parser)]
#[command(
    name = "supadata",
    about = "Supadata - YouTube transcripts, web scraping and metadata from the command line",
    version,
    long_about = "A small CLI around the Supadata API. Every subcommand performs a single API call and prints the JSON payload it returns."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Supadata API key (overrides the config file)
    #[arg(long, env = "SUPADATA_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the API (overrides the config file)
    #[arg(long, env = "SUPADATA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Check that the API key is valid
    Health,

    /// Get the transcript of a YouTube video
    Transcript {
        #[arg(value_name = "VIDEO_ID")]
        video_id: String,
    },

    /// Translate the transcript of a YouTube video
    Translate {
        #[arg(value_name = "VIDEO_ID")]
        video_id: String,

        /// Target language code (e.g. es, fr, de)
        #[arg(value_name = "LANG")]
        target_language: String,
    },

    /// Get the content of a web page
    Scrape {
        url: String,

        /// Preferred content language
        #[arg(short, long)]
        lang: Option<String>,

        /// Strip links from the content
        #[arg(long)]
        no_links: bool,

        /// Link depth to follow
        #[arg(long)]
        depth: Option<u32>,
    },

    /// List the URLs of a website
    Map {
        url: String,

        #[arg(short, long)]
        lang: Option<String>,

        #[arg(long)]
        no_links: bool,
    },

    /// Start a crawl job for a website
    Crawl {
        url: String,

        /// Maximum number of pages to crawl
        #[arg(long)]
        max_pages: Option<u32>,

        /// Maximum link depth
        #[arg(long)]
        depth: Option<u32>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,

        /// Wait this many seconds, then fetch the job result once
        #[arg(long, value_name = "SECS")]
        wait: Option<u64>,
    },

    /// Get the result of a crawl job
    CrawlResult {
        #[arg(value_name = "JOB_ID")]
        job_id: String,
    },

    /// Get YouTube video metadata
    Video {
        #[arg(value_name = "VIDEO_ID")]
        video_id: String,
    },

    /// Get YouTube channel metadata
    Channel {
        #[arg(value_name = "CHANNEL_ID")]
        channel_id: String,
    },

    /// Get YouTube playlist metadata
    Playlist {
        #[arg(value_name = "PLAYLIST_ID")]
        playlist_id: String,
    },

    /// List the videos of a YouTube channel
    ChannelVideos {
        #[arg(value_name = "CHANNEL_ID")]
        channel_id: String,

        #[arg(long)]
        limit: Option<u32>,

        /// Kind of videos to list
        #[arg(long = "type", value_enum)]
        kind: Option<VideoKindArg>,
    },

    /// List the videos of a YouTube playlist
    PlaylistVideos {
        #[arg(value_name = "PLAYLIST_ID")]
        playlist_id: String,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show or initialize the config file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum VideoKindArg {
    All,
    Video,
    Short,
    Live,
}

impl From<VideoKindArg> for VideoKind {
    fn from(kind: VideoKindArg) -> Self {
        match kind {
            VideoKindArg::All => VideoKind::All,
            VideoKindArg::Video => VideoKind::Video,
            VideoKindArg::Short => VideoKind::Short,
            VideoKindArg::Live => VideoKind::Live,
        }
    }
}

/// Run one API command and return the payload to print
pub async fn execute(api: &dyn SupadataApi, command: &Commands, quiet: bool) -> Result<Value> {
    let payload = match command {
        Commands::Health => api.check_api_key().await?,
        Commands::Transcript { video_id } => api.get_transcript(video_id).await?,
        Commands::Translate {
            video_id,
            target_language,
        } => api.translate_transcript(video_id, target_language).await?,
        Commands::Scrape {
            url,
            lang,
            no_links,
            depth,
        } => {
            let options = ScrapeOptions {
                lang: lang.clone(),
                no_links: no_links.then_some(true),
                depth: *depth,
            };
            api.get_url_content(url, &options).await?
        }
        Commands::Map { url, lang, no_links } => {
            let options = MapOptions {
                lang: lang.clone(),
                no_links: no_links.then_some(true),
            };
            api.map_website(url, &options).await?
        }
        Commands::Crawl {
            url,
            max_pages,
            depth,
            limit,
            wait,
        } => {
            let options = CrawlOptions {
                max_pages: *max_pages,
                depth: *depth,
                limit: *limit,
            };
            let job = api.crawl_website(url, &options).await?;
            match wait {
                Some(secs) => wait_for_crawl(api, job, *secs, quiet).await?,
                None => job,
            }
        }
        Commands::CrawlResult { job_id } => api.get_crawl_result(job_id).await?,
        Commands::Video { video_id } => api.get_video(video_id).await?,
        Commands::Channel { channel_id } => api.get_channel(channel_id).await?,
        Commands::Playlist { playlist_id } => api.get_playlist(playlist_id).await?,
        Commands::ChannelVideos {
            channel_id,
            limit,
            kind,
        } => {
            let options = VideoListOptions {
                limit: *limit,
                kind: kind.map(VideoKind::from),
            };
            api.get_channel_videos(channel_id, &options).await?
        }
        Commands::PlaylistVideos { playlist_id, limit } => {
            let options = VideoListOptions {
                limit: *limit,
                kind: None,
            };
            api.get_playlist_videos(playlist_id, &options).await?
        }
        Commands::Config { .. } => anyhow::bail!("The config command does not call the API"),
    };

    Ok(payload)
}

/// Sleep once, then fetch the job result a single time. Jobs that are still
/// running come back as-is; polling again is up to the user.
async fn wait_for_crawl(api: &dyn SupadataApi, job: Value, secs: u64, quiet: bool) -> Result<Value> {
    let job_id = match job.get("jobId").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => {
            tracing::warn!("Crawl response has no jobId, nothing to wait for");
            return Ok(job);
        }
    };

    tracing::info!("Crawl job {} started, waiting {}s", job_id, secs);

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Invalid progress template")?,
        );
        spinner.set_message(format!("Waiting for crawl job {}...", job_id));
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    };

    tokio::time::sleep(Duration::from_secs(secs)).await;
    spinner.finish_and_clear();

    Ok(api.get_crawl_result(&job_id).await?)
}
