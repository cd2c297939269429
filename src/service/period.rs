//! Turning a look-back period into a history cutoff and a display label.

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::validation::ValidationError,
    model::{
        period::{Period, PeriodKind},
        window::FetchWindow,
    },
};

/// Cutoff and title text for a period, relative to a fixed "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    /// Earliest creation time still counted; `None` for all time.
    pub cutoff: Option<DateTime<Utc>>,
    /// "All Time" or "Last {n} {Unit}".
    pub label: String,
}

impl ResolvedPeriod {
    pub fn window(&self) -> FetchWindow {
        match self.cutoff {
            Some(cutoff) => FetchWindow::since(cutoff),
            None => FetchWindow::all_time(),
        }
    }
}

/// Resolves a validated period against `now`.
///
/// Units are fixed lengths (a month is 30 days, a year 365), not calendar-aware.
///
/// # Arguments
/// - `period` - The validated period
/// - `now` - Instant the look-back is measured from
///
/// # Returns
/// - `Ok(ResolvedPeriod)` - Cutoff and label
/// - `Err(ValidationError::MagnitudeTooLarge)` - The cutoff falls outside the
///   representable date range
pub fn resolve(period: Period, now: DateTime<Utc>) -> Result<ResolvedPeriod, ValidationError> {
    match period {
        Period::AllTime => Ok(ResolvedPeriod {
            cutoff: None,
            label: "All Time".to_string(),
        }),
        Period::Last { unit, magnitude } => {
            let too_large = ValidationError::MagnitudeTooLarge {
                unit,
                magnitude: i64::from(magnitude.get()),
            };

            let cutoff = unit
                .days()
                .checked_mul(i64::from(magnitude.get()))
                .and_then(Duration::try_days)
                .and_then(|span| now.checked_sub_signed(span))
                .ok_or(too_large)?;

            Ok(ResolvedPeriod {
                cutoff: Some(cutoff),
                label: format!("Last {} {}", magnitude, unit.title()),
            })
        }
    }
}

/// Parses, validates and resolves raw command input in one step.
///
/// # Arguments
/// - `period` - Period choice value such as `"weeks"`
/// - `magnitude` - Optional number supplied with it
/// - `now` - Instant the look-back is measured from
pub fn resolve_input(
    period: &str,
    magnitude: Option<i64>,
    now: DateTime<Utc>,
) -> Result<ResolvedPeriod, ValidationError> {
    let kind: PeriodKind = period.parse()?;

    resolve(Period::from_input(kind, magnitude)?, now)
}
