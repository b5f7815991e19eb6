//! Run results as seen by the caller.

use std::fmt;

use crate::{error::Error, pipeline::state::Summarized, tts::AudioPayload};

/// A finished podcast: the script and its audio.
#[derive(Debug, Clone)]
pub struct Podcast {
    pub(crate) state: Summarized,
    pub(crate) audio: AudioPayload,
}

impl Podcast {
    pub fn summary(&self) -> &str {
        self.state.summary()
    }

    pub fn audio(&self) -> &AudioPayload {
        &self.audio
    }

    pub fn state(&self) -> &Summarized {
        &self.state
    }

    /// True when the script was written from a stringified scrape response
    /// rather than extracted page text.
    pub fn is_degraded(&self) -> bool {
        self.state.blog_content().is_degraded()
    }

    pub fn into_parts(self) -> (Summarized, AudioPayload) {
        (self.state, self.audio)
    }
}

#[derive(Debug, Clone)]
pub enum PodcastOutcome {
    Generated(Podcast),
    /// The model produced an empty script; synthesis was skipped.
    SummaryFailed(Summarized),
}

impl PodcastOutcome {
    pub fn state(&self) -> &Summarized {
        match self {
            PodcastOutcome::Generated(podcast) => podcast.state(),
            PodcastOutcome::SummaryFailed(state) => state,
        }
    }
}

/// The single user-facing result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserReport {
    Success {
        summary: String,
        audio: AudioPayload,
        degraded: bool,
    },
    SummaryFailed,
    Error(String),
}

impl From<Result<PodcastOutcome, Error>> for UserReport {
    fn from(result: Result<PodcastOutcome, Error>) -> Self {
        match result {
            Ok(PodcastOutcome::Generated(podcast)) => {
                let degraded = podcast.is_degraded();
                let (state, audio) = podcast.into_parts();
                UserReport::Success {
                    summary: state.summary().to_string(),
                    audio,
                    degraded,
                }
            }
            Ok(PodcastOutcome::SummaryFailed(_)) => UserReport::SummaryFailed,
            Err(e) => UserReport::Error(e.to_string()),
        }
    }
}

impl fmt::Display for UserReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserReport::Success { .. } => write!(f, "Podcast generated!"),
            UserReport::SummaryFailed => write!(f, "Failed to generate summary"),
            UserReport::Error(message) => write!(f, "Error: {message}"),
        }
    }
}
