use std::sync::{Arc, Mutex};

use blog_cast::{
    extract::ScrapeResponse,
    scrape::{PageScraper, ScrapeFormat},
};
use serde_json::Value;

use super::CallLog;

#[derive(Clone)]
pub struct MockScraper {
    pub response: Value,
    pub calls: Arc<Mutex<Vec<(String, Vec<ScrapeFormat>)>>>,
    pub fail_with: Option<String>,
    pub log: CallLog,
}

impl MockScraper {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            log: CallLog::default(),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(Value::Null)
        }
    }

    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = log.clone();
        self
    }
}

impl PageScraper for MockScraper {
    type Error = anyhow::Error;

    async fn scrape(&self, url: &str, formats: &[ScrapeFormat]) -> anyhow::Result<ScrapeResponse> {
        self.log.record("scrape");
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), formats.to_vec()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(ScrapeResponse::new(self.response.clone()))
    }
}
