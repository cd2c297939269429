//! Domain models and parameter types.
//!
//! Plain data structures used by the missed attack pipeline. Discord objects are
//! converted into these at the adapter boundary so the pipeline can be exercised
//! with synthetic fixtures and no network access.

pub mod message;
pub mod period;
pub mod report;
pub mod tally;
pub mod window;
