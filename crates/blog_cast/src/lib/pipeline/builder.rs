use crate::{
    config::Credentials,
    openai::OpenAIClient,
    scrape::{firecrawl::FirecrawlClient, PageScraper},
    tts::{elevenlabs::ElevenLabsClient, SpeechSynthesizer},
    PodcastPipeline, Summarizer,
};

pub struct PodcastPipelineBuilder<P = (), S = (), T = ()> {
    scraper: P,
    summarizer: S,
    synthesizer: T,
}

impl PodcastPipelineBuilder {
    pub fn new() -> Self {
        Self {
            scraper: (),
            summarizer: (),
            synthesizer: (),
        }
    }

    /// Wires the hosted Firecrawl, OpenAI and ElevenLabs clients with `credentials`.
    pub fn from_credentials(
        credentials: &Credentials,
    ) -> PodcastPipelineBuilder<FirecrawlClient, OpenAIClient, ElevenLabsClient> {
        Self::new()
            .scraper(FirecrawlClient::new(credentials.firecrawl_api_key()))
            .summarizer(OpenAIClient::new(credentials.openai_api_key()))
            .synthesizer(ElevenLabsClient::new(credentials.elevenlabs_api_key()))
    }
}

impl Default for PodcastPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, T> PodcastPipelineBuilder<P, S, T> {
    pub fn scraper<P2: PageScraper + Send + Sync + 'static>(
        self,
        scraper: P2,
    ) -> PodcastPipelineBuilder<P2, S, T> {
        PodcastPipelineBuilder {
            scraper,
            summarizer: self.summarizer,
            synthesizer: self.synthesizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> PodcastPipelineBuilder<P, S2, T> {
        PodcastPipelineBuilder {
            scraper: self.scraper,
            summarizer,
            synthesizer: self.synthesizer,
        }
    }

    pub fn synthesizer<T2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        synthesizer: T2,
    ) -> PodcastPipelineBuilder<P, S, T2> {
        PodcastPipelineBuilder {
            scraper: self.scraper,
            summarizer: self.summarizer,
            synthesizer,
        }
    }
}

impl<P, S, T> PodcastPipelineBuilder<P, S, T>
where
    P: PageScraper + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    T: SpeechSynthesizer + Send + Sync + 'static,
{
    pub fn build(self) -> PodcastPipeline<P, S, T> {
        PodcastPipeline::new(self.scraper, self.summarizer, self.synthesizer)
    }
}
