//! Test factory for creating Serenity Message objects.
//!
//! Messages are built by deserializing JSON shaped like a channel history response.
//! The author is always the same scoreboard bot user.

use serenity::all::{Embed, Message};

/// Channel every test message is posted in.
pub const TEST_CHANNEL_ID: u64 = 900_000_000_000_000_001;

/// Creates a test Serenity Message posted by a bot, carrying the given embeds.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `timestamp` - RFC 3339 creation time, e.g. `"2024-06-01T12:00:00Z"`
/// - `embeds` - Embeds attached to the message, in order
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(1001, "2024-06-01T12:00:00Z", vec![]);
/// assert_eq!(message.id.get(), 1001);
/// assert!(message.embeds.is_empty());
/// ```
pub fn create_test_message(message_id: u64, timestamp: &str, embeds: Vec<Embed>) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": TEST_CHANNEL_ID.to_string(),
        "author": {
            "id": "900000000000000002",
            "username": "scoreboard",
            "discriminator": "0000",
            "global_name": null,
            "avatar": null,
            "bot": true,
        },
        "content": "",
        "timestamp": timestamp,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": embeds,
        "reactions": [],
        "components": [],
        "sticker_items": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
