//! Human-readable descriptions of Discord API failures.
//!
//! Discord reports failures as a numeric JSON error code plus a message. The codes
//! that are likely when reading a channel's history or replying to a command get a
//! fixed phrase; anything else falls back to the message Discord sent.

use serenity::http::{DiscordJsonError, HttpError};

const UNKNOWN_CHANNEL: isize = 10003;
const RATE_LIMITED: isize = 40062;
const MISSING_ACCESS: isize = 50001;
const MISSING_PERMISSIONS: isize = 50013;
const INVALID_FORM_BODY: isize = 50035;

/// Describes a Serenity error for display in a Discord reply.
///
/// # Arguments
/// - `err` - The error returned by a Serenity HTTP call
///
/// # Returns
/// - `String` - Short description, never empty
pub fn describe(err: &serenity::Error) -> String {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            describe_json_error(&response.error)
        }
        serenity::Error::Http(HttpError::Request(e)) => format!("HTTP error: {}", e),
        _ => "Unknown Discord API error".to_string(),
    }
}

/// Describes a decoded Discord JSON error body.
pub fn describe_json_error(error: &DiscordJsonError) -> String {
    match error.code {
        UNKNOWN_CHANNEL => "the channel no longer exists".to_string(),
        MISSING_ACCESS => "the bot can't see this channel".to_string(),
        MISSING_PERMISSIONS => {
            "the bot is missing the Read Message History permission".to_string()
        }
        RATE_LIMITED => "Discord is rate limiting the bot, try again shortly".to_string(),
        INVALID_FORM_BODY => {
            let field_errors = error
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.path, e.message))
                .collect::<Vec<_>>()
                .join(", ");

            if field_errors.is_empty() {
                format!("Invalid request: {}", error.message)
            } else {
                format!("Invalid request: {}", field_errors)
            }
        }
        code if error.message.is_empty() => format!("Discord API error (code: {})", code),
        _ => error.message.clone(),
    }
}
