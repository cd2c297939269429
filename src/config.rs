use serenity::all::{ChannelId, GuildId};
use std::num::NonZeroUsize;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::parse_u64_from_env,
};

/// Default schedule for the summary post: 10:00 UTC on the 1st of every month.
const DEFAULT_SUMMARY_SCHEDULE: &str = "0 0 10 1 * *";

pub struct Config {
    pub discord_bot_token: String,

    /// Scoreboard channel scanned and posted to by the scheduled run.
    pub summary_channel_id: ChannelId,
    /// Guild to register the slash command in; global registration when unset.
    pub command_guild_id: Option<GuildId>,
    /// Six-field cron expression (seconds first) for the scheduled run.
    pub summary_schedule: String,
    /// Optional cap on messages read per summary.
    pub max_messages: Option<NonZeroUsize>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let summary_channel_id = parse_u64_from_env("CHANNEL_ID", require_env("CHANNEL_ID")?)?;

        let command_guild_id = match std::env::var("GUILD_ID") {
            Ok(value) => Some(GuildId::new(parse_u64_from_env("GUILD_ID", value)?)),
            Err(_) => None,
        };

        let max_messages = match std::env::var("SUMMARY_MAX_MESSAGES") {
            Ok(value) => usize::try_from(parse_u64_from_env("SUMMARY_MAX_MESSAGES", value)?)
                .ok()
                .and_then(NonZeroUsize::new),
            Err(_) => None,
        };

        Ok(Self {
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            summary_channel_id: ChannelId::new(summary_channel_id),
            command_guild_id,
            summary_schedule: std::env::var("SUMMARY_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_SCHEDULE.to_string()),
            max_messages,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
