#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is not set")]
    MissingCredential(&'static str),
    #[error("Please enter a blog URL")]
    BlankUrl,
    #[error("Failed to scrape blog: {0}")]
    Scrape(String),
    #[error("Failed to summarize blog content: {0}")]
    Summarize(String),
    #[error("Failed to synthesize audio: {0}")]
    Synthesize(String),
}
