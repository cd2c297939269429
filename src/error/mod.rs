//! Error types and user-facing error text.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level error type that wraps domain-specific errors. Every variant belongs to
//! exactly one `ErrorKind`, which is what the bot shell uses to decide how to report
//! a failure back to the person who ran the command.

pub mod config;
pub mod discord;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while building or posting
/// a missed attack summary. Most variants use `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup. When raised by a scheduled run only that run aborts.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid period or magnitude supplied to the summary command.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Discord API error from Serenity while reading channel history.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Discord API error from Serenity while posting or editing a reply.
    ///
    /// Built with `AppError::send` at the call sites that deliver the summary.
    #[error("Failed to send summary: {0}")]
    SendErr(Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Internal error with custom message.
    ///
    /// Indicates unexpected behavior such as a malformed message id coming back
    /// from Discord.
    #[error("{0}")]
    InternalError(String),
}

/// Closed classification of failures used by the bot shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input, reported back as-is.
    Validation,
    /// Channel history could not be read.
    Fetch,
    /// The summary or reply could not be delivered.
    Send,
    /// Missing or invalid startup configuration.
    Config,
    /// Anything else.
    Internal,
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Wraps a Serenity error raised while delivering a summary.
    pub fn send(err: serenity::Error) -> Self {
        AppError::SendErr(Box::new(err))
    }

    /// Classifies the error into its `ErrorKind`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigErr(_) => ErrorKind::Config,
            Self::ValidationErr(_) => ErrorKind::Validation,
            Self::DiscordErr(_) => ErrorKind::Fetch,
            Self::SendErr(_) => ErrorKind::Send,
            Self::SchedulerErr(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Builds the text shown to the user who invoked the command.
    ///
    /// Validation errors are echoed verbatim since they describe the user's own
    /// input. Discord errors are described by their API error code. Everything else
    /// gets a generic message so configuration details never leak into a channel.
    ///
    /// # Returns
    /// - `String` - Message suitable for an ephemeral or edited interaction reply
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationErr(err) => err.to_string(),
            Self::DiscordErr(err) => {
                format!("Couldn't read the channel: {}", discord::describe(err))
            }
            Self::SendErr(err) => {
                format!("Couldn't send the summary: {}", discord::describe(err))
            }
            Self::ConfigErr(_) => {
                "The bot is misconfigured, please contact an administrator.".to_string()
            }
            Self::SchedulerErr(_) | Self::InternalError(_) => {
                "Oops, something went wrong.".to_string()
            }
        }
    }
}
