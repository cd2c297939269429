mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::monthly_summary,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error ({:?}): {}", e.kind(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Starting missed attack bot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = init_bot(&config).await?;

    monthly_summary::start_scheduler(
        discord_http,
        config.summary_channel_id,
        &config.summary_schedule,
        config.max_messages,
    )
    .await?;

    // Blocks until the gateway connection ends
    start_bot(bot_client).await
}
