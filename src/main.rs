use std::sync::Arc;

use clap::{Parser, Subcommand};

use cdiapi_core::Settings;
use cdiapi_http::AppState;
use cdiapi_stores::{MeiliIndex, MongoEntries, MongoRegistry};

#[derive(Parser)]
#[command(name = "cdiapi", about = "Common Data Index API server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server and serve requests.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Command::Serve => serve().await,
    }
}

/// Connect the long-lived store clients once, wire them into the router
/// state by explicit injection, and serve until stopped.
async fn serve() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    let mongo = mongodb::Client::with_uri_str(&settings.mongo_url).await?;
    let registry = MongoRegistry::new(&mongo, &settings.registry_db, &settings.registry_collection);
    let entries = MongoEntries::new(&mongo, &settings.entries_db, &settings.entries_collection);
    let index = MeiliIndex::new(
        &settings.meili_url,
        settings.meili_key.clone(),
        &settings.meili_index,
    );

    tracing::info!(
        registry = %settings.registry_db,
        entries = %settings.entries_db,
        index = %settings.meili_index,
        "store clients initialized"
    );

    let state = AppState {
        registry: Arc::new(registry),
        entries: Arc::new(entries),
        index: Arc::new(index),
        settings: Arc::new(settings),
    };

    cdiapi_http::serve(state).await
}
