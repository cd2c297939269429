use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;

/// Bounds on how far back channel history is read.
///
/// Built once per request and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchWindow {
    /// Messages posted before this instant are not read. `None` reads all history.
    pub cutoff: Option<DateTime<Utc>>,
    /// Stop after accepting this many messages.
    pub max: Option<NonZeroUsize>,
}

impl FetchWindow {
    /// Window over the whole channel history.
    pub fn all_time() -> Self {
        Self::default()
    }

    pub fn since(cutoff: DateTime<Utc>) -> Self {
        Self {
            cutoff: Some(cutoff),
            max: None,
        }
    }

    pub fn with_max(mut self, max: NonZeroUsize) -> Self {
        self.max = Some(max);
        self
    }

    /// Whether a message posted at `created_at` is too old for this window.
    pub fn is_before_cutoff(&self, created_at: DateTime<Utc>) -> bool {
        self.cutoff.is_some_and(|cutoff| created_at < cutoff)
    }

    /// Whether `accepted` messages already fill the window.
    pub fn is_full(&self, accepted: usize) -> bool {
        self.max.is_some_and(|max| accepted >= max.get())
    }
}
