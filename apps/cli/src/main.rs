use anyhow::Result;
use clap::Parser;
use console::style;
use videolens_core::{Config, GeminiClient, Session, VideoDbClient};

use crate::app::App;

mod app;
mod ui;

#[derive(Parser)]
#[command(name = "videolens")]
#[command(
    about = "Chat with your video library: ingest videos into an external index and ask questions answered from their transcripts"
)]
struct Cli {
    /// Collection name to create on the indexing service
    #[arg(short, long)]
    collection: Option<String>,

    /// Video URL to add to the library before the session starts (repeatable)
    #[arg(short, long = "url")]
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    // Both API keys are required before anything else runs
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("videolens").cyan().bold(),
        style("Video Insight Bot").dim()
    );

    let index = VideoDbClient::new(&config.videodb_base_url, &config.videodb_api_key);
    let model = GeminiClient::new(&config.gemini_api_key);
    let session = Session::new();
    log::info!("Session {} starting", session.id());

    App::new(index, model, session, cli.collection, cli.urls)
        .run()
        .await
}
