use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::async_trait;
use std::sync::Mutex;

use crate::{
    error::AppError,
    model::message::{RetrievedEmbed, RetrievedField, RetrievedMessage},
    service::paginator::MessageSource,
};

mod extractor;
mod missed_attacks;

/// Fixed "now" used across service tests.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Builds a message with a single scoreboard embed.
///
/// # Arguments
/// - `id` - Message id; higher ids are newer
/// - `created_at` - Creation timestamp
/// - `fields` - (name, value) pairs of the embed's fields
fn scoreboard(id: u64, created_at: DateTime<Utc>, fields: &[(&str, &str)]) -> RetrievedMessage {
    RetrievedMessage {
        id: id.to_string(),
        created_at,
        embeds: vec![RetrievedEmbed {
            fields: fields
                .iter()
                .map(|(name, value)| RetrievedField {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }],
    }
}

/// Builds `count` plain messages, newest first, one hour apart starting at `now()`.
///
/// Ids count down from `count`, so the last message has id 1.
fn hourly_history(count: u64) -> Vec<RetrievedMessage> {
    (0..count)
        .map(|i| RetrievedMessage {
            id: (count - i).to_string(),
            created_at: now() - Duration::hours(i as i64),
            embeds: vec![],
        })
        .collect()
}

/// In-memory channel history served newest-first like Discord does.
struct MockMessageSource {
    /// Full history, newest first.
    history: Vec<RetrievedMessage>,
    /// Zero-based page index that returns an error instead of messages.
    fail_on_page: Option<usize>,
    /// `before` cursor of every request made, in order.
    requests: Mutex<Vec<Option<String>>>,
}

impl MockMessageSource {
    fn new(history: Vec<RetrievedMessage>) -> Self {
        Self {
            history,
            fail_on_page: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing_on_page(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    fn requests(&self) -> Vec<Option<String>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSource for MockMessageSource {
    async fn fetch_page(
        &self,
        before: Option<&str>,
        limit: u8,
    ) -> Result<Vec<RetrievedMessage>, AppError> {
        let page_index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(before.map(str::to_string));
            requests.len() - 1
        };

        if self.fail_on_page == Some(page_index) {
            return Err(AppError::InternalError("history unavailable".to_string()));
        }

        let start = match before {
            Some(id) => self
                .history
                .iter()
                .position(|m| m.id == id)
                .map(|pos| pos + 1)
                .unwrap_or(self.history.len()),
            None => 0,
        };

        Ok(self
            .history
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
