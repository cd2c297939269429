use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord bot client without connecting it.
///
/// The returned HTTP client can be used to send messages before the gateway
/// connection is up, which lets the scheduler be started first.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The bot client and its shared HTTP client
/// - `Err(AppError)` - The client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.command_guild_id, config.max_messages);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This function blocks until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if connecting or authenticating fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
