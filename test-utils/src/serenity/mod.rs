//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, Embed) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return from
//! `GET /channels/{id}/messages`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_embed, create_test_message};
//!
//! #[test]
//! fn test_history_conversion() {
//!     let embed = create_test_embed(&[("3 missed", "<:th:1> alice")]);
//!     let message = create_test_message(1001, "2024-06-01T12:00:00Z", vec![embed]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `embed::create_test_embed` - Create Serenity Embed objects with fields
//! - `message::create_test_message` - Create Serenity Message objects with embeds

pub mod embed;
pub mod message;

// Re-export commonly used functions for convenience
pub use embed::create_test_embed;
pub use message::create_test_message;
