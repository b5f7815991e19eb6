use std::{fmt::Debug, future::Future};

use serde::Deserialize;

/// A language model that turns a single prompt into a single block of text.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;
    const TEMPERATURE: f32 = 0.3;

    type Error: Debug;

    fn summarize(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
