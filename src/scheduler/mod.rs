//! Cron jobs for automated summaries.

pub mod monthly_summary;
