use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;
use std::num::NonZeroUsize;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Guild to register commands in; global when `None`.
    pub command_guild_id: Option<GuildId>,
    /// Cap on messages read per summary.
    pub max_messages: Option<NonZeroUsize>,
}

impl Handler {
    pub fn new(command_guild_id: Option<GuildId>, max_messages: Option<NonZeroUsize>) -> Self {
        Self {
            command_guild_id,
            max_messages,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.command_guild_id).await;
    }

    /// Called for every slash command, button or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction, self.max_messages).await;
    }
}
