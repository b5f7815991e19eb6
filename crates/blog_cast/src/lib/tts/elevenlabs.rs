use futures::{stream::BoxStream, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::Serialize;

use crate::tts::SpeechSynthesizer;

#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsClient {
    const OUTPUT_FORMAT: &'static str = "mp3_44100_128";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.elevenlabs.io/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn speech_endpoint(&self, voice_id: &str) -> String {
        format!(
            "{}/text-to-speech/{voice_id}?output_format={}",
            self.base_url.trim_end_matches('/'),
            Self::OUTPUT_FORMAT
        )
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    const VOICE_ID: &'static str = "JBFqnCBsd6RMkjVDRZzb";
    const TTS_MODEL: &'static str = "eleven_multilingual_v2";

    type Error = ElevenLabsError;
    type AudioStream = BoxStream<'static, Result<Option<Vec<u8>>, ElevenLabsError>>;

    async fn synthesize(&self, text: &str) -> Result<Self::AudioStream, Self::Error> {
        let resp = self
            .client
            .post(self.speech_endpoint(Self::VOICE_ID))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&SpeechRequest {
                text,
                model_id: Self::TTS_MODEL,
            })
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        let chunks = resp
            .bytes_stream()
            .map_ok(|bytes| Some(bytes.to_vec()))
            .map_err(ElevenLabsError::from)
            .boxed();

        Ok(chunks)
    }
}
