//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the bot's slash commands, in one guild or globally

use serenity::all::{Command, Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Guild registration takes effect immediately; global registration can take up to
/// an hour to show up in clients. Registration failures are logged and leave the bot
/// running, since the scheduled summary doesn't depend on commands.
///
/// # Arguments
/// - `ctx` - Discord context used for registration requests
/// - `ready` - Ready event data containing bot user information
/// - `command_guild_id` - Guild to register commands in, or `None` for global
pub async fn handle_ready(ctx: Context, ready: Ready, command_guild_id: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let definitions = command::definitions();
    let result = match command_guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, definitions).await,
        None => Command::set_global_commands(&ctx.http, definitions).await,
    };

    match result {
        Ok(commands) => tracing::info!(
            "Registered {} command(s) {}",
            commands.len(),
            command_guild_id
                .map(|id| format!("in guild {}", id))
                .unwrap_or_else(|| "globally".to_string())
        ),
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}
