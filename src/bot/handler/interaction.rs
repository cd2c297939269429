use serenity::all::{Context, Interaction};
use std::num::NonZeroUsize;

use crate::bot::command::shame;

/// Routes slash command interactions to their command.
///
/// Each invocation runs independently; other interaction types and unknown command
/// names are ignored.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Interaction,
    max_messages: Option<NonZeroUsize>,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    match command.data.name.as_str() {
        shame::NAME => shame::run(&ctx, &command, max_messages).await,
        other => tracing::debug!("Ignoring unknown command /{}", other),
    }
}
