//! Posting rendered summaries to Discord.
//!
//! The first chunk of a report is posted as a titled panel; remaining chunks follow
//! as untitled panels in order, so a long summary reads as one continuous list.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::{error::AppError, model::report::MissedAttackReport};

/// Embed color for summary panels.
pub const SUMMARY_COLOR: u32 = 0xe74c3c;

/// Builds the titled panel carrying the primary chunk.
pub fn primary_embed(report: &MissedAttackReport) -> CreateEmbed {
    CreateEmbed::new()
        .title(&report.title)
        .description(report.primary())
        .color(SUMMARY_COLOR)
}

/// Builds an untitled panel carrying a follow-up chunk.
pub fn follow_up_embed(chunk: &str) -> CreateEmbed {
    CreateEmbed::new().description(chunk).color(SUMMARY_COLOR)
}

/// Posts a report to a channel as one message per chunk.
///
/// Stops at the first failed send; chunks already posted stay posted.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `channel_id` - Channel to post in
/// - `report` - Rendered summary
///
/// # Returns
/// - `Ok(())` - Every chunk was posted
/// - `Err(AppError::SendErr)` - A send failed
pub async fn post_report(
    http: &Http,
    channel_id: ChannelId,
    report: &MissedAttackReport,
) -> Result<(), AppError> {
    channel_id
        .send_message(http, CreateMessage::new().embed(primary_embed(report)))
        .await
        .map_err(AppError::send)?;

    for chunk in report.follow_ups() {
        channel_id
            .send_message(http, CreateMessage::new().embed(follow_up_embed(chunk)))
            .await
            .map_err(AppError::send)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(chunks: &[&str]) -> MissedAttackReport {
        MissedAttackReport {
            title: "🔔 Missed Attacks Summary - Last 2 Weeks".to_string(),
            chunks: chunks.iter().map(|chunk| chunk.to_string()).collect(),
        }
    }

    /// Tests the panel carrying the first chunk.
    ///
    /// Expected: report title, first chunk as description, summary colour
    #[test]
    fn primary_embed_carries_title_and_first_chunk() {
        let report = report(&["alice: 3 missed attacks", "bob: 1 missed attacks"]);

        let embed = serde_json::to_value(primary_embed(&report)).unwrap();

        assert_eq!(
            embed["title"],
            "🔔 Missed Attacks Summary - Last 2 Weeks"
        );
        assert_eq!(embed["description"], "alice: 3 missed attacks");
        assert_eq!(embed["color"], SUMMARY_COLOR);
    }

    /// Tests the panels carrying the remaining chunks.
    ///
    /// Expected: no title, chunk as description, same colour as the primary panel
    #[test]
    fn follow_up_embed_is_untitled_with_shared_colour() {
        let report = report(&["alice: 3 missed attacks", "bob: 1 missed attacks"]);

        let embeds: Vec<serde_json::Value> = report
            .follow_ups()
            .iter()
            .map(|chunk| serde_json::to_value(follow_up_embed(chunk)).unwrap())
            .collect();

        assert_eq!(embeds.len(), 1);
        assert!(embeds[0]["title"].as_str().is_none());
        assert_eq!(embeds[0]["description"], "bob: 1 missed attacks");
        assert_eq!(embeds[0]["color"], SUMMARY_COLOR);
    }
}
