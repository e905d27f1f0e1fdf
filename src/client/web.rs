use serde::Serialize;
use serde_json::Value;

use super::{require, SupadataClient};
use crate::error::Result;
use crate::options::{CrawlOptions, MapOptions, ScrapeOptions};

/// JSON body for starting a crawl: `url` plus the flattened options
#[derive(Serialize)]
struct CrawlRequest<'a> {
    url: &'a str,
    #[serde(flatten)]
    options: &'a CrawlOptions,
}

impl SupadataClient {
    /// Get the content of a web page
    pub async fn get_url_content(&self, url: &str, options: &ScrapeOptions) -> Result<Value> {
        require(url, "URL")?;

        let request = self
            .get("/v1/web/scrape")
            .query(&[("url", url)])
            .query(options);
        self.execute(request).await
    }

    /// List the URLs discoverable on a website
    pub async fn map_website(&self, url: &str, options: &MapOptions) -> Result<Value> {
        require(url, "URL")?;

        let request = self.get("/v1/web/map").query(&[("url", url)]).query(options);
        self.execute(request).await
    }

    /// Start a crawl job. The response carries the job id to pass to
    /// [`get_crawl_result`](Self::get_crawl_result); nothing is polled here.
    pub async fn crawl_website(&self, url: &str, options: &CrawlOptions) -> Result<Value> {
        require(url, "URL")?;

        let request = self
            .post("/v1/web/crawl")
            .json(&CrawlRequest { url, options });
        self.execute(request).await
    }

    /// Fetch the current state or results of a crawl job
    pub async fn get_crawl_result(&self, job_id: &str) -> Result<Value> {
        require(job_id, "Job ID")?;

        let path = format!("/v1/web/crawl/{}", urlencoding::encode(job_id));
        self.execute(self.get(&path)).await
    }
}
