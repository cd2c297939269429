use super::*;
use crate::{
    model::{
        period::{Period, PeriodUnit},
        window::FetchWindow,
    },
    service::{missed_attacks::MissedAttackService, summary::NO_MISSED_ATTACKS},
};
use std::num::NonZeroU32;

fn channel() -> MockMessageSource {
    MockMessageSource::new(vec![
        scoreboard(
            4,
            now() - Duration::days(1),
            &[("2 missed", "<:th:1> alice\n<:th:1> bob")],
        ),
        scoreboard(3, now() - Duration::days(3), &[("1 missed", "<:th:1> bob")]),
        scoreboard(2, now() - Duration::days(20), &[("3 missed", "carol")]),
        scoreboard(1, now() - Duration::days(400), &[("9 missed", "dave")]),
    ])
}

/// Tests a summary over the last week.
///
/// Verifies that only scoreboards inside the window are counted and that the title
/// carries the period label.
///
/// Expected: bob 3, alice 2; carol and dave excluded
#[tokio::test]
async fn reports_last_week() -> Result<(), AppError> {
    let source = channel();
    let period = Period::Last {
        unit: PeriodUnit::Weeks,
        magnitude: NonZeroU32::new(1).unwrap(),
    };

    let report = MissedAttackService::new(&source).report(period, now()).await?;

    assert_eq!(report.title, "🔔 Missed Attacks Summary - Last 1 Weeks");
    assert_eq!(
        report.primary(),
        "bob: 3 missed attacks\nalice: 2 missed attacks"
    );
    assert!(report.follow_ups().is_empty());

    Ok(())
}

/// Tests an all time summary.
///
/// Expected: every scoreboard counted, dave first
#[tokio::test]
async fn reports_all_time() -> Result<(), AppError> {
    let source = channel();

    let report = MissedAttackService::new(&source)
        .report(Period::AllTime, now())
        .await?;

    assert_eq!(report.title, "🔔 Missed Attacks Summary - All Time");
    assert!(report.primary().starts_with("dave: 9 missed attacks\n"));
    assert_eq!(report.primary().lines().count(), 4);

    Ok(())
}

/// Tests a window with no scoreboards in it.
///
/// Expected: placeholder chunk
#[tokio::test]
async fn reports_placeholder_for_empty_window() -> Result<(), AppError> {
    let source = channel();
    let window = FetchWindow::since(now() - Duration::hours(1));

    let report = MissedAttackService::new(&source)
        .report_window(window, "Last Hour")
        .await?;

    assert_eq!(report.chunks, vec![NO_MISSED_ATTACKS.to_string()]);

    Ok(())
}

/// Tests that a history failure produces no summary at all.
///
/// Expected: Err from the first page
#[tokio::test]
async fn history_failure_aborts_report() {
    let source = channel().failing_on_page(0);

    let result = MissedAttackService::new(&source)
        .report(Period::AllTime, now())
        .await;

    assert!(result.is_err());
}

/// Tests that a long summary is split into a primary chunk and follow-ups.
///
/// Expected: more than one chunk, all within the Discord limit
#[tokio::test]
async fn long_summary_has_follow_ups() -> Result<(), AppError> {
    let players: Vec<String> = (0..400)
        .map(|i| format!("<:th:1> player_with_a_long_name_{:03}", i))
        .collect();
    let value = players.join("\n");
    let source = MockMessageSource::new(vec![scoreboard(
        1,
        now(),
        &[("1 missed", value.as_str())],
    )]);

    let report = MissedAttackService::new(&source)
        .report(Period::AllTime, now())
        .await?;

    assert!(!report.follow_ups().is_empty());
    assert!(report
        .chunks
        .iter()
        .all(|chunk| chunk.chars().count() <= crate::service::summary::SUMMARY_CHUNK_LIMIT));
    assert_eq!(
        report.chunks.iter().map(|c| c.lines().count()).sum::<usize>(),
        400
    );

    Ok(())
}

/// Tests that the service-wide message cap applies to uncapped windows.
///
/// Expected: only the newest scoreboard is read, so only alice and bob appear
#[tokio::test]
async fn service_cap_limits_messages_read() -> Result<(), AppError> {
    let source = channel();

    let report = MissedAttackService::new(&source)
        .with_max_messages(std::num::NonZeroUsize::new(1))
        .report(Period::AllTime, now())
        .await?;

    assert_eq!(report.primary().lines().count(), 2);
    assert!(report.primary().contains("alice: 2 missed attacks"));
    assert!(report.primary().contains("bob: 2 missed attacks"));

    Ok(())
}
