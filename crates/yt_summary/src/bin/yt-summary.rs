use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use yt_summary::{
    batch::{require_api_key, resolve_api_key, run_batch},
    config::{DEFAULT_BIND_ADDR, DEFAULT_MODEL, DEFAULT_OUTPUT_PATH, SAMPLE_VIDEO_URL},
    gemini::GeminiClient,
    server,
    tracing::init_tracing_subscriber,
    yt::scraper::Scraper,
    JsonFileStore, SummaryPipeline, SummaryPipelineBuilder,
};

#[derive(Parser)]
#[command(name = "yt-summary", about = "YouTube video topic summarizer")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model used for summarization
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Transcript languages to try, in order of preference
    #[arg(long = "language", env = "TRANSCRIPT_LANGUAGES", value_delimiter = ',')]
    languages: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize one video and write the summary to a JSON file
    Run {
        /// YouTube watch URL or youtu.be short link
        #[arg(long, default_value = SAMPLE_VIDEO_URL)]
        url: String,

        /// Output file, overwritten on success
        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// Serve `GET /summarize?url=...`
    Serve {
        /// Address to listen on
        #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
        addr: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Run {
            url: SAMPLE_VIDEO_URL.into(),
            output: DEFAULT_OUTPUT_PATH.into(),
        }
    }
}

fn build_pipeline(
    api_key: String,
    model: String,
    languages: Vec<String>,
) -> SummaryPipeline<Scraper, GeminiClient> {
    SummaryPipelineBuilder::new()
        .transcript_fetcher(Scraper::default().with_languages(languages))
        .summarizer(GeminiClient::new(api_key).with_model(model))
        .build()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let Cli {
        gemini_api_key,
        model,
        languages,
        command,
    } = Cli::parse();
    init_tracing_subscriber()?;

    match command.unwrap_or_default() {
        Command::Run { url, output } => {
            let Some(api_key) = require_api_key(gemini_api_key, &mut io::stderr()) else {
                return Ok(());
            };
            let pipeline = build_pipeline(api_key, model, languages);
            let store = JsonFileStore::new(output);

            tracing::info!(%url, "Running pipeline once...");
            if run_batch(&pipeline, &url, &store, &mut io::stdout())
                .await?
                .is_some()
            {
                tracing::info!(path = %store.path().display(), "Summary saved");
            }
        }
        Command::Serve { addr } => {
            let api_key = resolve_api_key(gemini_api_key).unwrap_or_else(|| {
                tracing::warn!("GEMINI_API_KEY is not set, summaries will fail");
                String::new()
            });
            let pipeline = build_pipeline(api_key, model, languages);

            let listener = TcpListener::bind(&addr).await?;
            server::serve(listener, pipeline).await?;
        }
    }

    Ok(())
}
