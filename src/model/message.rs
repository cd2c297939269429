//! Plain message records read from a channel's history.
//!
//! Only the parts of a Discord message the missed attack pipeline actually reads are
//! kept: the id used as a pagination cursor, the creation time compared against the
//! cutoff, and each embed's field names and values.

use chrono::{DateTime, Utc};

/// A message retrieved from channel history.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedMessage {
    /// Discord message ID (stored as String), used as the `before` cursor.
    pub id: String,
    /// When the message was posted.
    pub created_at: DateTime<Utc>,
    /// Embeds in the order Discord returned them.
    pub embeds: Vec<RetrievedEmbed>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RetrievedEmbed {
    pub fields: Vec<RetrievedField>,
}

/// A single embed field.
///
/// Scoreboard fields carry the miss count at the start of `name` and one player per
/// line in `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedField {
    pub name: String,
    pub value: String,
}

impl RetrievedMessage {
    /// The embed consulted for scoreboard fields, if the message has any.
    pub fn scoreboard_embed(&self) -> Option<&RetrievedEmbed> {
        self.embeds.first()
    }
}

impl From<&serenity::all::Message> for RetrievedMessage {
    fn from(message: &serenity::all::Message) -> Self {
        Self {
            id: message.id.to_string(),
            created_at: message.timestamp.to_utc(),
            embeds: message.embeds.iter().map(RetrievedEmbed::from).collect(),
        }
    }
}

impl From<&serenity::all::Embed> for RetrievedEmbed {
    fn from(embed: &serenity::all::Embed) -> Self {
        Self {
            fields: embed
                .fields
                .iter()
                .map(|field| RetrievedField {
                    name: field.name.clone(),
                    value: field.value.clone(),
                })
                .collect(),
        }
    }
}
