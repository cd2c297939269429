//! Look-back periods for the missed attack summary.
//!
//! `Period` keeps the rule "all time takes no number, every other period requires
//! one" in its shape: `AllTime` has no magnitude and `Last` always carries a
//! validated one. Raw command input goes through `Period::from_input`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::validation::ValidationError;

/// Unit of a relative look-back period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// Period name as chosen in the slash command, before its number is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    AllTime,
    Relative(PeriodUnit),
}

/// A validated look-back period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    AllTime,
    Last {
        unit: PeriodUnit,
        magnitude: NonZeroU32,
    },
}

impl PeriodUnit {
    /// Fixed length of one unit in days; months and years are not calendar-aware.
    pub fn days(self) -> i64 {
        match self {
            Self::Days => 1,
            Self::Weeks => 7,
            Self::Months => 30,
            Self::Years => 365,
        }
    }

    /// Command choice value, also used in validation messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Capitalized name used in summary titles, e.g. "Weeks".
    pub fn title(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PeriodKind {
    pub const CHOICES: [(&'static str, &'static str); 5] = [
        ("All Time", "alltime"),
        ("Days", "days"),
        ("Weeks", "weeks"),
        ("Months", "months"),
        ("Years", "years"),
    ];
}

impl FromStr for PeriodKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alltime" => Ok(Self::AllTime),
            "days" => Ok(Self::Relative(PeriodUnit::Days)),
            "weeks" => Ok(Self::Relative(PeriodUnit::Weeks)),
            "months" => Ok(Self::Relative(PeriodUnit::Months)),
            "years" => Ok(Self::Relative(PeriodUnit::Years)),
            other => Err(ValidationError::UnknownPeriod(other.to_string())),
        }
    }
}

impl Period {
    /// Builds a period from a chosen kind and an optional number.
    ///
    /// All time ignores any supplied number. Relative periods require a number of at
    /// least 1.
    ///
    /// # Arguments
    /// - `kind` - The period chosen by the user
    /// - `magnitude` - The optional `number` command option
    ///
    /// # Returns
    /// - `Ok(Period)` - A validated period
    /// - `Err(ValidationError::MissingMagnitude)` - Relative period without a number
    /// - `Err(ValidationError::NonPositiveMagnitude)` - Number is zero or negative
    /// - `Err(ValidationError::MagnitudeTooLarge)` - Number doesn't fit in a `u32`
    pub fn from_input(kind: PeriodKind, magnitude: Option<i64>) -> Result<Self, ValidationError> {
        let unit = match kind {
            PeriodKind::AllTime => return Ok(Self::AllTime),
            PeriodKind::Relative(unit) => unit,
        };

        let magnitude = magnitude.ok_or(ValidationError::MissingMagnitude { unit })?;
        if magnitude <= 0 {
            return Err(ValidationError::NonPositiveMagnitude { unit, magnitude });
        }

        let magnitude = u32::try_from(magnitude)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ValidationError::MagnitudeTooLarge { unit, magnitude })?;

        Ok(Self::Last { unit, magnitude })
    }
}
