use std::collections::HashMap;

/// Shortest username kept in a tally, in characters.
pub const MIN_USERNAME_CHARS: usize = 2;

/// Accumulated missed attacks per username.
///
/// Built fresh for every summary. Usernames shorter than `MIN_USERNAME_CHARS` are
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyMap {
    counts: HashMap<String, u64>,
}

impl TallyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` missed attacks to `username`.
    ///
    /// # Returns
    /// - `true` - The count was recorded
    /// - `false` - The username is too short and was dropped
    pub fn record(&mut self, username: &str, count: u64) -> bool {
        if username.chars().count() < MIN_USERNAME_CHARS {
            return false;
        }

        let entry = self.counts.entry(username.to_string()).or_insert(0);
        *entry = entry.saturating_add(count);
        true
    }

    #[cfg(test)]
    pub fn get(&self, username: &str) -> Option<u64> {
        self.counts.get(username).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered by count, highest first.
    ///
    /// Equal counts keep map iteration order, which is unspecified.
    pub fn sorted_desc(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        entries
    }
}
