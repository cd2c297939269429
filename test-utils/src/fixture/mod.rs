//! Test fixtures providing reusable scoreboard data.
//!
//! Fixtures are plain in-memory values shaped like the embeds the clan scoreboard
//! bot posts. Pair them with the factories in `serenity` to build full messages.

pub mod scoreboard;
