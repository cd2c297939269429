use crate::error::{config::ConfigError, AppError};

/// Parses a u64 value from an environment variable's String value
///
/// A zero is rejected as well since Discord snowflakes are never zero and
/// `ChannelId::new` panics on it.
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to a non-zero `u64`
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Failed to parse
///   the string as a non-zero u64
pub fn parse_u64_from_env(name: &str, value: String) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<std::num::NonZeroU64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            source: e,
        })?;

    Ok(result.get())
}

/// Parses a Discord message id carried as a String
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed id
/// - `Err(AppError::InternalError)` - The id is not a non-zero u64
pub fn parse_message_id(value: &str) -> Result<u64, AppError> {
    value
        .parse::<std::num::NonZeroU64>()
        .map(|id| id.get())
        .map_err(|e| AppError::InternalError(format!("Failed to parse message ID '{}': {}", value, e)))
}
