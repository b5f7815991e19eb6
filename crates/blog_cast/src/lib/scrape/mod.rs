pub mod firecrawl;

use std::{fmt::Debug, future::Future};

use serde::Serialize;

use crate::extract::ScrapeResponse;

/// Output formats a scraping service can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrapeFormat {
    Markdown,
    Html,
    RawHtml,
}

pub trait PageScraper {
    type Error: Debug;

    fn scrape(
        &self,
        url: &str,
        formats: &[ScrapeFormat],
    ) -> impl Future<Output = Result<ScrapeResponse, Self::Error>> + Send;
}
