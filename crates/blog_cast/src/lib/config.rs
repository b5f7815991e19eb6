use std::fmt;

use crate::error::Error;

/// API keys for the three external services, supplied by the caller per run.
#[derive(Clone)]
pub struct Credentials {
    openai_api_key: String,
    elevenlabs_api_key: String,
    firecrawl_api_key: String,
}

impl Credentials {
    pub const OPENAI_API_KEY: &'static str = "OPENAI_API_KEY";
    pub const ELEVENLABS_API_KEY: &'static str = "ELEVENLABS_API_KEY";
    pub const FIRECRAWL_API_KEY: &'static str = "FIRECRAWL_API_KEY";

    /// Fails with [`Error::MissingCredential`] on the first absent or blank key.
    pub fn new(
        openai_api_key: Option<String>,
        elevenlabs_api_key: Option<String>,
        firecrawl_api_key: Option<String>,
    ) -> Result<Self, Error> {
        Ok(Credentials {
            openai_api_key: required(openai_api_key, Self::OPENAI_API_KEY)?,
            elevenlabs_api_key: required(elevenlabs_api_key, Self::ELEVENLABS_API_KEY)?,
            firecrawl_api_key: required(firecrawl_api_key, Self::FIRECRAWL_API_KEY)?,
        })
    }

    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    pub fn elevenlabs_api_key(&self) -> &str {
        &self.elevenlabs_api_key
    }

    pub fn firecrawl_api_key(&self) -> &str {
        &self.firecrawl_api_key
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingCredential(name))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"<redacted>")
            .field("elevenlabs_api_key", &"<redacted>")
            .field("firecrawl_api_key", &"<redacted>")
            .finish()
    }
}
