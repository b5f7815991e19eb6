use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use blog_cast::{
    state::PipelineState, tracing::init_tracing_subscriber, tts::AudioPayload, Credentials,
    PodcastPipelineBuilder, UserReport,
};

#[derive(Parser)]
#[command(name = "blog-cast", about = "Turn a blog post into a short podcast")]
struct Cli {
    /// Blog post URL
    #[arg(long)]
    url: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// ElevenLabs API key
    #[arg(long, env = "ELEVENLABS_API_KEY", hide_env_values = true)]
    elevenlabs_key: Option<String>,

    /// Firecrawl API key
    #[arg(long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
    firecrawl_key: Option<String>,

    /// Where to write the generated audio
    #[arg(long, short, default_value = AudioPayload::FILE_NAME)]
    output: PathBuf,

    /// Print the final pipeline state as JSON
    #[arg(long)]
    print_state: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let result = match Credentials::new(cli.openai_key, cli.elevenlabs_key, cli.firecrawl_key) {
        Ok(credentials) => {
            let pipeline = PodcastPipelineBuilder::from_credentials(&credentials).build();
            let result = pipeline.run(&cli.url).await;

            if cli.print_state {
                if let Ok(outcome) = &result {
                    let state = PipelineState::from(outcome.state());
                    println!("{}", serde_json::to_string_pretty(&state)?);
                }
            }
            result
        }
        Err(e) => Err(e),
    };

    let report = UserReport::from(result);
    match &report {
        UserReport::Success {
            summary,
            audio,
            degraded,
        } => {
            tokio::fs::write(&cli.output, &**audio)
                .await
                .with_context(|| format!("Failed to write {}", cli.output.display()))?;

            println!("{report}");
            println!(
                "Saved {} audio to {}",
                AudioPayload::MIME_TYPE,
                cli.output.display()
            );
            if *degraded {
                println!("Warning: article text not found, script was written from raw page data");
            }
            println!("\n{summary}");
        }
        UserReport::SummaryFailed | UserReport::Error(_) => {
            eprintln!("{report}");
            drop(guard);
            std::process::exit(1);
        }
    }

    Ok(())
}
