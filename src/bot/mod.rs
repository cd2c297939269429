//! Discord bot integration.
//!
//! This module owns the bot's Discord connection: login, slash command
//! registration, and routing of command interactions to the missed attack service.
//! The bot's HTTP client is shared with the scheduler so the monthly summary can be
//! posted without a second connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel availability
//! - `GUILD_MESSAGES` - Read message history in guild channels
//! - `MESSAGE_CONTENT` - Read embed contents of messages not sent by the bot
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
