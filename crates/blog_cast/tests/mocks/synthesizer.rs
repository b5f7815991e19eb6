use std::sync::{Arc, Mutex};

use blog_cast::tts::SpeechSynthesizer;
use futures::stream;

use super::CallLog;

type Chunk = anyhow::Result<Option<Vec<u8>>>;

pub struct MockSynthesizer {
    pub chunks: Mutex<Vec<Chunk>>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub log: CallLog,
}

impl MockSynthesizer {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks: Mutex::new(chunks),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            log: CallLog::default(),
        }
    }

    pub fn from_bytes(chunks: &[&[u8]]) -> Self {
        Self::new(chunks.iter().map(|c| Ok(Some(c.to_vec()))).collect())
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(Vec::new())
        }
    }

    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = log.clone();
        self
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    const VOICE_ID: &'static str = "mock-voice";
    const TTS_MODEL: &'static str = "mock-tts";

    type Error = anyhow::Error;
    type AudioStream = stream::Iter<std::vec::IntoIter<Chunk>>;

    async fn synthesize(&self, text: &str) -> anyhow::Result<Self::AudioStream> {
        self.log.record("synthesize");
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        // a synthesis stream can only be consumed once
        let chunks = std::mem::take(&mut *self.chunks.lock().unwrap());
        Ok(stream::iter(chunks))
    }
}
