//! Backward walk over a channel's message history.
//!
//! History is read newest-first in pages of up to `PAGE_SIZE` messages, each page
//! requested with the oldest id of the previous page as its exclusive `before`
//! cursor. Reading stops at the first message older than the window's cutoff, once
//! the window's maximum is reached, or when history runs out. A page whose oldest
//! message has no id is still read, but no further page is requested after it.
//!
//! Stopping at the first too-old message assumes every page comes back in strictly
//! descending creation order, which Discord guarantees for `GET /messages`. A source
//! without that guarantee needs the whole page scanned instead.

use serenity::{
    all::{ChannelId, GetMessages, MessageId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::{message::RetrievedMessage, window::FetchWindow},
    util::parse::parse_message_id,
};

/// Largest page Discord returns for a single history request.
pub const PAGE_SIZE: u8 = 100;

/// Something that can return one page of a channel's history.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetches up to `limit` messages older than `before`, newest first.
    ///
    /// # Arguments
    /// - `before` - Exclusive upper bound message id, or `None` for the newest page
    /// - `limit` - Maximum number of messages to return, at most `PAGE_SIZE`
    ///
    /// # Returns
    /// - `Ok(Vec<RetrievedMessage>)` - The page, empty once history is exhausted
    /// - `Err(AppError)` - The channel could not be read
    async fn fetch_page(
        &self,
        before: Option<&str>,
        limit: u8,
    ) -> Result<Vec<RetrievedMessage>, AppError>;
}

/// Collects every message inside `window`, newest first.
///
/// A failed page fetch fails the whole collection; nothing read so far is returned.
/// An empty result is not an error.
///
/// # Arguments
/// - `source` - Channel history to read from
/// - `window` - Cutoff and maximum count to respect
///
/// # Returns
/// - `Ok(Vec<RetrievedMessage>)` - Accepted messages in the order they were read
/// - `Err(AppError)` - A page fetch failed
pub async fn collect_messages<S>(
    source: &S,
    window: &FetchWindow,
) -> Result<Vec<RetrievedMessage>, AppError>
where
    S: MessageSource + ?Sized,
{
    let mut accepted = Vec::new();
    let mut before: Option<String> = None;

    loop {
        let page = source.fetch_page(before.as_deref(), PAGE_SIZE).await?;

        tracing::debug!(
            "Fetched {} messages before {:?} ({} accepted so far)",
            page.len(),
            before,
            accepted.len()
        );

        let oldest_id = page
            .last()
            .map(|message| message.id.clone())
            .filter(|id| !id.is_empty());

        for message in page {
            if window.is_before_cutoff(message.created_at) {
                return Ok(accepted);
            }

            accepted.push(message);

            if window.is_full(accepted.len()) {
                return Ok(accepted);
            }
        }

        // Empty page, or no cursor to continue from
        match oldest_id {
            Some(id) => before = Some(id),
            None => break,
        }
    }

    Ok(accepted)
}

/// History of a single Discord channel read through the bot's HTTP client.
pub struct ChannelMessageSource {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelMessageSource {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl MessageSource for ChannelMessageSource {
    async fn fetch_page(
        &self,
        before: Option<&str>,
        limit: u8,
    ) -> Result<Vec<RetrievedMessage>, AppError> {
        let mut builder = GetMessages::new().limit(limit.min(PAGE_SIZE));
        if let Some(before) = before {
            builder = builder.before(MessageId::new(parse_message_id(before)?));
        }

        let messages = self
            .channel_id
            .messages(self.http.as_ref(), builder)
            .await?;

        Ok(messages.iter().map(RetrievedMessage::from).collect())
    }
}
