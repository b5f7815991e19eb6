pub mod config;
mod error;
pub mod extract;
mod llm;
pub mod outcome;
mod pipeline;
pub mod scrape;
pub mod tracing;
pub mod tts;

pub use config::Credentials;
pub use error::Error;
pub use llm::{openai, prompt};
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use outcome::{Podcast, PodcastOutcome, UserReport};
pub use pipeline::{builder::PodcastPipelineBuilder, state, PodcastPipeline};
