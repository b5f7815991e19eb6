use reqwest::Client;
use serde::Serialize;

use crate::{
    extract::ScrapeResponse,
    scrape::{PageScraper, ScrapeFormat},
};

#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FirecrawlError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: &'a [ScrapeFormat],
}

impl FirecrawlClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.firecrawl.dev".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn scrape_endpoint(&self) -> String {
        format!("{}/v1/scrape", self.base_url.trim_end_matches('/'))
    }
}

impl PageScraper for FirecrawlClient {
    type Error = FirecrawlError;

    async fn scrape(
        &self,
        url: &str,
        formats: &[ScrapeFormat],
    ) -> Result<ScrapeResponse, Self::Error> {
        let resp = self
            .client
            .post(self.scrape_endpoint())
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest { url, formats })
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api { status, message });
        }

        let body = resp.json::<serde_json::Value>().await?;

        Ok(ScrapeResponse::new(body))
    }
}
