pub mod builder;
pub mod state;

use crate::{
    error::Error,
    extract::ContentSource,
    llm::prompt::podcast_script_prompt,
    outcome::{Podcast, PodcastOutcome},
    scrape::{PageScraper, ScrapeFormat},
    tts::{assemble_audio, AudioPayload, SpeechSynthesizer},
    Summarizer,
};

use state::{Requested, Scraped, Summarized};

// Blog-to-podcast pipeline: scrape -> summarize, then speech synthesis
pub struct PodcastPipeline<P, S, T>
where
    P: PageScraper + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    T: SpeechSynthesizer + Send + Sync + 'static,
{
    scraper: P,
    summarizer: S,
    synthesizer: T,
}

impl<P, S, T> PodcastPipeline<P, S, T>
where
    P: PageScraper + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    T: SpeechSynthesizer + Send + Sync + 'static,
{
    const SCRAPE_FORMATS: &'static [ScrapeFormat] = &[ScrapeFormat::Markdown];

    pub fn new(scraper: P, summarizer: S, synthesizer: T) -> Self {
        PodcastPipeline {
            scraper,
            summarizer,
            synthesizer,
        }
    }

    /// Scrapes the page at the state's URL and adds its text as blog content
    #[tracing::instrument(skip_all, fields(url = %state.url()))]
    async fn scrape(&self, state: Requested) -> Result<Scraped, Error> {
        let response = self
            .scraper
            .scrape(state.url(), Self::SCRAPE_FORMATS)
            .await
            .map_err(|e| Error::Scrape(format!("{e:?}")))?;

        let blog_content = response.into_blog_content();
        match blog_content.source() {
            ContentSource::Extracted(rule) => {
                tracing::info!(%rule, chars = blog_content.len(), "Extracted blog content")
            }
            ContentSource::RawFallback => tracing::warn!(
                chars = blog_content.len(),
                "No text found in scrape response, falling back to raw response"
            ),
        }

        Ok(state.with_blog_content(blog_content))
    }

    /// Asks the language model for a podcast script of the blog content
    #[tracing::instrument(skip_all, fields(url = %state.url()))]
    async fn summarize(&self, state: Scraped) -> Result<Summarized, Error> {
        let prompt = podcast_script_prompt(state.blog_content());

        let summary_resp = self
            .summarizer
            .summarize(&prompt)
            .await
            .map_err(|e| Error::Summarize(format!("{e:?}")))?;

        tracing::info!(
            model = S::SUMMARIZER_MODEL,
            chars = summary_resp.summary.chars().count(),
            "Generated podcast script"
        );

        Ok(state.with_summary(summary_resp.summary))
    }

    /// Streams speech for `summary` and assembles it into a single payload
    #[tracing::instrument(skip_all)]
    async fn synthesize(&self, summary: &str) -> Result<AudioPayload, Error> {
        let chunks = self
            .synthesizer
            .synthesize(summary)
            .await
            .map_err(|e| Error::Synthesize(format!("{e:?}")))?;

        let audio = assemble_audio(chunks)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Audio stream failed"))
            .map_err(|e| Error::Synthesize(format!("{e:?}")))?;

        tracing::info!(
            voice = T::VOICE_ID,
            model = T::TTS_MODEL,
            bytes = audio.len(),
            "Synthesized podcast audio"
        );

        Ok(audio)
    }

    /// Runs the scrape and summarize stages, in that order, for `url`
    pub async fn run_stages(&self, url: &str) -> Result<Summarized, Error> {
        if url.trim().is_empty() {
            return Err(Error::BlankUrl);
        }

        let state = self.scrape(Requested::new(url)).await?;
        self.summarize(state).await
    }

    /// Produces a podcast for `url`. Speech is only synthesized for a
    /// non-empty summary; otherwise the outcome is [`PodcastOutcome::SummaryFailed`].
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, url: &str) -> Result<PodcastOutcome, Error> {
        let state = self.run_stages(url).await?;

        if !state.has_summary() {
            tracing::warn!("Language model returned an empty summary, skipping synthesis");
            return Ok(PodcastOutcome::SummaryFailed(state));
        }

        let audio = self.synthesize(state.summary()).await?;

        Ok(PodcastOutcome::Generated(Podcast { state, audio }))
    }
}
