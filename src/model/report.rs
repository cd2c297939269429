/// A rendered summary ready to post.
///
/// `chunks` is never empty. The first chunk is the primary payload and the rest are
/// follow-ups, sent in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedAttackReport {
    /// Panel title, e.g. "🔔 Missed Attacks Summary - Last 2 Weeks".
    pub title: String,
    pub chunks: Vec<String>,
}

impl MissedAttackReport {
    pub fn primary(&self) -> &str {
        self.chunks.first().map(String::as_str).unwrap_or_default()
    }

    pub fn follow_ups(&self) -> &[String] {
        self.chunks.get(1..).unwrap_or_default()
    }
}
