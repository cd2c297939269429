use chrono::Utc;
use serenity::{all::ChannelId, http::Http};
use std::num::{NonZeroU32, NonZeroUsize};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::period::{Period, PeriodUnit},
    service::{
        missed_attacks::MissedAttackService, paginator::ChannelMessageSource,
        posting::post_report,
    },
};

/// Look-back of the scheduled summary: the last 30 days.
pub const SCHEDULED_PERIOD: Period = Period::Last {
    unit: PeriodUnit::Days,
    magnitude: match NonZeroU32::new(30) {
        Some(days) => days,
        None => unreachable!(),
    },
};

/// Starts the monthly summary scheduler
///
/// Each run reads the last 30 days of the scoreboard channel and posts the summary
/// back into it. A failed run is logged and does not affect later runs.
///
/// # Arguments
/// - `discord_http`: Discord HTTP client for reading history and posting
/// - `channel_id`: Scoreboard channel to read and post in
/// - `schedule`: Six-field cron expression, evaluated in UTC
/// - `max_messages`: Optional cap on messages read per run
pub async fn start_scheduler(
    discord_http: Arc<Http>,
    channel_id: ChannelId,
    schedule: &str,
    max_messages: Option<NonZeroUsize>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_http = discord_http.clone();

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = post_monthly_summary(http, channel_id, max_messages).await {
                tracing::error!(
                    "Error posting scheduled summary to channel {} ({:?}): {}",
                    channel_id,
                    e.kind(),
                    e
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Missed attack summary scheduler started ({}) for channel {}",
        schedule,
        channel_id
    );

    Ok(())
}

/// Builds and posts the summary for `SCHEDULED_PERIOD`.
pub async fn post_monthly_summary(
    discord_http: Arc<Http>,
    channel_id: ChannelId,
    max_messages: Option<NonZeroUsize>,
) -> Result<(), AppError> {
    tracing::info!("Posting scheduled summary to channel {}", channel_id);

    let source = ChannelMessageSource::new(discord_http.clone(), channel_id);
    let report = MissedAttackService::new(&source)
        .with_max_messages(max_messages)
        .report(SCHEDULED_PERIOD, Utc::now())
        .await?;

    post_report(&discord_http, channel_id, &report).await
}
