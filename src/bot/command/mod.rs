//! Slash commands offered by the bot.

use serenity::all::CreateCommand;

pub mod shame;

/// Definitions of every command, registered once the bot is ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![shame::register()]
}
