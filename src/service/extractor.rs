//! Scoreboard embed parsing.
//!
//! Scoreboard posts carry one embed whose fields group players by how many attacks
//! they missed: the field name starts with the count ("3 missed") and the value has
//! one player per line, usually prefixed with a custom emoji such as
//! `<:th14:123456>`. Markdown escapes (`\_`) inserted by the posting bot are not
//! part of the name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    message::{RetrievedField, RetrievedMessage},
    tally::TallyMap,
};

/// Leading inline tag such as a custom emoji reference, plus trailing whitespace.
static LEADING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<[^>]+>\s*").expect("leading tag pattern is valid"));

/// Builds the per-player tally for a set of messages.
///
/// Only the first embed of each message is read. Fields without a leading count and
/// lines without a usable username are skipped. The order of `messages` does not
/// affect the result.
///
/// # Arguments
/// - `messages` - Messages accepted by the paginator
///
/// # Returns
/// - `TallyMap` - Summed counts per username
pub fn extract_tally(messages: &[RetrievedMessage]) -> TallyMap {
    let mut tally = TallyMap::new();

    for embed in messages.iter().filter_map(RetrievedMessage::scoreboard_embed) {
        for field in &embed.fields {
            tally_field(&mut tally, field);
        }
    }

    tally
}

fn tally_field(tally: &mut TallyMap, field: &RetrievedField) {
    let Some(count) = parse_leading_count(&field.name) else {
        return;
    };

    for line in field.value.split('\n') {
        tally.record(&clean_username(line), count);
    }
}

/// Parses the run of ASCII digits at the very start of a field name.
///
/// # Returns
/// - `Some(u64)` - The leading number
/// - `None` - The name doesn't start with a digit, or the number overflows
pub fn parse_leading_count(name: &str) -> Option<u64> {
    let end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());

    name[..end].parse().ok()
}

/// Reduces one line of a field value to the bare username.
///
/// Strips a leading `<...>` tag and the whitespace after it, removes every
/// backslash, then trims. May return a string too short to be recorded.
pub fn clean_username(line: &str) -> String {
    let untagged = LEADING_TAG.replace(line.trim_start(), "");

    untagged.replace('\\', "").trim().to_string()
}
