//! Missboard Test Utils
//!
//! Provides shared testing utilities for the missboard bot. The bot reads scoreboard
//! embeds out of Discord channel history, so most tests need realistic Serenity
//! `Message` and `Embed` values without talking to Discord.
//!
//! # Overview
//!
//! The test utilities consist of two parts:
//! - **serenity**: Factories building real Serenity model structs from JSON
//! - **fixture**: Canned scoreboard field data shaped like real posts
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture, serenity::create_test_message};
//!
//! #[test]
//! fn converts_scoreboard_message() {
//!     let embed = test_utils::serenity::create_test_embed(&fixture::scoreboard::fields());
//!     let message = create_test_message(42, "2024-06-01T12:00:00Z", vec![embed]);
//!     // Convert and assert...
//! }
//! ```

pub mod fixture;
pub mod serenity;
