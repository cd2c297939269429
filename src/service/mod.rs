//! Service layer for the missed attack summary.
//!
//! The pipeline runs leaves first: `paginator` walks channel history back to the
//! cutoff, `extractor` turns scoreboard embeds into per-player tallies, `summary`
//! sorts and chunks the result for posting, and `period` turns the user's choice
//! into a cutoff and a title. `missed_attacks` strings these together and is what
//! the bot shell and the scheduler call.

pub mod extractor;
pub mod missed_attacks;
pub mod paginator;
pub mod period;
pub mod posting;
pub mod summary;

#[cfg(test)]
mod test;
