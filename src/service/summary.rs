//! Rendering a tally into postable text.

use crate::model::tally::TallyMap;

/// Content limit used for each posted chunk.
///
/// Discord caps embed descriptions at 4096 characters; the margin leaves room for
/// the surrounding panel.
pub const SUMMARY_CHUNK_LIMIT: usize = 4000;

/// Posted instead of a summary when nobody missed an attack.
pub const NO_MISSED_ATTACKS: &str = "No missed attacks found. 🎉";

/// Lists every player as `"{username}: {count} missed attacks"`, highest count first.
///
/// Returns an empty string for an empty tally.
pub fn build_summary(tally: &TallyMap) -> String {
    tally
        .sorted_desc()
        .into_iter()
        .map(|(user, count)| format!("{}: {} missed attacks", user, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a tally into chunks no longer than `limit` characters.
///
/// # Returns
/// - `Vec<String>` - At least one chunk; the placeholder when the tally is empty
pub fn render_chunks(tally: &TallyMap, limit: usize) -> Vec<String> {
    if tally.is_empty() {
        return vec![NO_MISSED_ATTACKS.to_string()];
    }

    chunk_lines(&build_summary(tally), limit)
}

/// Splits text into chunks of whole lines, each at most `limit` characters.
///
/// Lines are packed greedily: a chunk is closed as soon as appending the next line
/// and its separating newline would go over the limit. When every line fits within
/// `limit`, joining the chunks with `'\n'` gives back the input. A single line
/// longer than `limit` can't be kept whole and is cut at character boundaries into
/// consecutive chunks, so the rejoined text gains a newline at each cut.
///
/// # Arguments
/// - `text` - Newline-separated text
/// - `limit` - Maximum characters per chunk, at least 1
///
/// # Returns
/// - `Vec<String>` - Chunks in order; empty for empty input
pub fn chunk_lines(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();

    if text.is_empty() {
        return chunks;
    }

    // (chunk text, its length in chars)
    let mut current: Option<(String, usize)> = None;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if let Some((chunk, len)) = current.as_mut() {
            if *len + 1 + line_len <= limit {
                chunk.push('\n');
                chunk.push_str(line);
                *len += 1 + line_len;
                continue;
            }
        }

        if let Some((chunk, _)) = current.take() {
            chunks.push(chunk);
        }

        if line_len <= limit {
            current = Some((line.to_string(), line_len));
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut pieces: Vec<String> = chars
            .chunks(limit)
            .map(|piece| piece.iter().collect())
            .collect();
        let tail = pieces.pop().map(|piece| {
            let len = piece.chars().count();
            (piece, len)
        });
        chunks.extend(pieces);
        current = tail;
    }

    if let Some((chunk, _)) = current {
        chunks.push(chunk);
    }

    chunks
}
