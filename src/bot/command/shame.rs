//! `/shame` slash command.
//!
//! Reads the invoking channel's scoreboard posts over the chosen period and replies
//! with the missed attack summary. The reply is deferred first since reading a long
//! history can take longer than Discord's three second response window.

use chrono::{DateTime, Utc};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup, EditInteractionResponse, ResolvedValue,
};
use std::num::NonZeroUsize;

use crate::{
    error::{validation::ValidationError, AppError},
    model::period::PeriodKind,
    service::{
        missed_attacks::MissedAttackService,
        paginator::ChannelMessageSource,
        period::{resolve_input, ResolvedPeriod},
        posting::{follow_up_embed, primary_embed},
    },
};

pub const NAME: &str = "shame";

/// Builds the command definition sent to Discord on registration.
pub fn register() -> CreateCommand {
    let period = PeriodKind::CHOICES.iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "period",
            "How far back to count missed attacks",
        )
        .required(true),
        |option, (name, value)| option.add_string_choice(*name, *value),
    );

    let number = CreateCommandOption::new(
        CommandOptionType::Integer,
        "number",
        "How many days, weeks, months or years (not needed for All Time)",
    )
    .min_int_value(1)
    .required(false);

    CreateCommand::new(NAME)
        .description("List everyone's missed attacks over a period")
        .add_option(period)
        .add_option(number)
}

/// Raw option values supplied with the command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShameOptions {
    pub period: Option<String>,
    pub number: Option<i64>,
}

impl ShameOptions {
    pub fn from_command(command: &CommandInteraction) -> Self {
        let mut options = Self::default();

        for option in command.data.options() {
            match (option.name, option.value) {
                ("period", ResolvedValue::String(value)) => {
                    options.period = Some(value.to_string())
                }
                ("number", ResolvedValue::Integer(value)) => options.number = Some(value),
                _ => {}
            }
        }

        options
    }

    /// Validates the options and resolves them against `now`.
    ///
    /// # Returns
    /// - `Ok(ResolvedPeriod)` - Cutoff and label for the summary
    /// - `Err(ValidationError)` - Period missing or unknown, or number invalid
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<ResolvedPeriod, ValidationError> {
        let period = self
            .period
            .as_deref()
            .ok_or(ValidationError::MissingPeriod)?;

        resolve_input(period, self.number, now)
    }
}

/// Handles one `/shame` invocation.
///
/// Failures are logged and reported back in the deferred reply; they never affect
/// other invocations.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `command` - The command interaction
/// - `max_messages` - Optional cap on messages read
pub async fn run(ctx: &Context, command: &CommandInteraction, max_messages: Option<NonZeroUsize>) {
    if let Err(e) = command.defer(&ctx.http).await {
        tracing::error!("Failed to defer /{} reply: {}", NAME, e);
        return;
    }

    if let Err(e) = respond(ctx, command, max_messages).await {
        tracing::error!(
            "/{} failed in channel {} ({:?}): {}",
            NAME,
            command.channel_id,
            e.kind(),
            e
        );

        let reply = EditInteractionResponse::new().content(e.user_message());
        if let Err(e) = command.edit_response(&ctx.http, reply).await {
            tracing::error!("Failed to send /{} error reply: {}", NAME, e);
        }
    }
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    max_messages: Option<NonZeroUsize>,
) -> Result<(), AppError> {
    let resolved = ShameOptions::from_command(command).resolve(Utc::now())?;

    tracing::info!(
        "/{} requested by {} in channel {} ({})",
        NAME,
        command.user.name,
        command.channel_id,
        resolved.label
    );

    let source = ChannelMessageSource::new(ctx.http.clone(), command.channel_id);
    let report = MissedAttackService::new(&source)
        .with_max_messages(max_messages)
        .report_window(resolved.window(), &resolved.label)
        .await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().embed(primary_embed(&report)),
        )
        .await
        .map_err(AppError::send)?;

    for chunk in report.follow_ups() {
        command
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new().embed(follow_up_embed(chunk)),
            )
            .await
            .map_err(AppError::send)?;
    }

    Ok(())
}
