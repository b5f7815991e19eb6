//! Text-to-speech dispatch and audio assembly.

pub mod elevenlabs;

use std::{fmt::Debug, future::Future, ops::Deref};

use futures::{Stream, TryStreamExt};

/// A text-to-speech service that streams back encoded audio.
pub trait SpeechSynthesizer {
    const VOICE_ID: &'static str;
    const TTS_MODEL: &'static str;

    type Error: Debug;

    /// Finite, order-preserving chunk stream. `None` and empty chunks carry no
    /// audio and are skipped on assembly.
    type AudioStream: Stream<Item = Result<Option<Vec<u8>>, Self::Error>> + Send + Unpin;

    fn synthesize(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Self::AudioStream, Self::Error>> + Send;
}

/// Folds a chunk stream into one buffer, in arrival order.
///
/// The stream is consumed; the first chunk error aborts assembly and no partial
/// audio is returned.
pub async fn assemble_audio<S, E>(chunks: S) -> Result<AudioPayload, E>
where
    S: Stream<Item = Result<Option<Vec<u8>>, E>>,
{
    let bytes = chunks
        .try_fold(Vec::new(), |mut buf, chunk| async move {
            if let Some(chunk) = chunk.filter(|c| !c.is_empty()) {
                buf.extend_from_slice(&chunk);
            }
            Ok::<_, E>(buf)
        })
        .await?;

    Ok(AudioPayload(bytes))
}

/// Complete synthesized audio for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload(Vec<u8>);

impl AudioPayload {
    pub const MIME_TYPE: &'static str = "audio/mpeg";
    pub const FILE_NAME: &'static str = "podcast.mp3";

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for AudioPayload {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_assembly_skips_null_and_empty_chunks() {
        let chunks = stream::iter(vec![
            Ok::<_, String>(Some(b"AB".to_vec())),
            Ok(None),
            Ok(Some(b"CD".to_vec())),
            Ok(Some(Vec::new())),
        ]);

        let payload = assemble_audio(chunks).await.unwrap();
        assert_eq!(&*payload, b"ABCD");
    }

    #[tokio::test]
    async fn test_assembly_preserves_arrival_order() {
        let chunks = stream::iter(
            ["ID3", "frame-1", "frame-2", "frame-3"]
                .map(|c| Ok::<_, String>(Some(c.as_bytes().to_vec()))),
        );

        let payload = assemble_audio(chunks).await.unwrap();
        assert_eq!(payload.into_bytes(), b"ID3frame-1frame-2frame-3".to_vec());
    }

    #[tokio::test]
    async fn test_assembly_of_empty_stream() {
        let chunks = stream::iter(Vec::<Result<Option<Vec<u8>>, String>>::new());
        let payload = assemble_audio(chunks).await.unwrap();
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn test_chunk_error_aborts_assembly() {
        let chunks = stream::iter(vec![
            Ok(Some(b"AB".to_vec())),
            Err("connection reset".to_string()),
            Ok(Some(b"CD".to_vec())),
        ]);

        let result = assemble_audio(chunks).await;
        assert_eq!(result, Err("connection reset".to_string()));
    }
}
