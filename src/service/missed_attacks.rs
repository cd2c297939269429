use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;

use crate::{
    error::AppError,
    model::{period::Period, report::MissedAttackReport, window::FetchWindow},
    service::{
        extractor::extract_tally,
        paginator::{collect_messages, MessageSource},
        period,
        summary::{render_chunks, SUMMARY_CHUNK_LIMIT},
    },
};

/// Builds missed attack summaries from one channel's history.
///
/// Every call reads history again and builds a fresh tally; nothing is shared
/// between calls.
pub struct MissedAttackService<'a, S: MessageSource + ?Sized> {
    source: &'a S,
    /// Cap on messages read per summary, applied to windows that have none.
    max_messages: Option<NonZeroUsize>,
}

impl<'a, S: MessageSource + ?Sized> MissedAttackService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            max_messages: None,
        }
    }

    pub fn with_max_messages(mut self, max_messages: Option<NonZeroUsize>) -> Self {
        self.max_messages = max_messages;
        self
    }

    /// Builds the summary for a user-chosen period.
    ///
    /// # Arguments
    /// - `period` - Validated look-back period
    /// - `now` - Instant the look-back is measured from
    ///
    /// # Returns
    /// - `Ok(MissedAttackReport)` - Title and chunks ready to post
    /// - `Err(AppError::ValidationErr)` - The period's cutoff is out of range
    /// - `Err(AppError::DiscordErr)` - Reading channel history failed
    pub async fn report(
        &self,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<MissedAttackReport, AppError> {
        let resolved = period::resolve(period, now)?;

        self.report_window(resolved.window(), &resolved.label).await
    }

    /// Builds the summary for an explicit window.
    ///
    /// A failed page fetch discards everything read so far; no partial summary is
    /// produced.
    ///
    /// # Arguments
    /// - `window` - Cutoff and maximum message count
    /// - `label` - Period text shown in the title
    pub async fn report_window(
        &self,
        window: FetchWindow,
        label: &str,
    ) -> Result<MissedAttackReport, AppError> {
        let window = match (window.max, self.max_messages) {
            (None, Some(max)) => window.with_max(max),
            _ => window,
        };

        let messages = collect_messages(self.source, &window).await?;
        let tally = extract_tally(&messages);

        tracing::info!(
            "Tallied {} players from {} messages ({})",
            tally.len(),
            messages.len(),
            label
        );

        Ok(MissedAttackReport {
            title: summary_title(label),
            chunks: render_chunks(&tally, SUMMARY_CHUNK_LIMIT),
        })
    }
}

pub fn summary_title(label: &str) -> String {
    format!("🔔 Missed Attacks Summary - {}", label)
}
