use thiserror::Error;

use crate::model::period::PeriodUnit;

/// Invalid input to the summary command.
///
/// Displayed verbatim to the user, so messages are phrased for a Discord reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The command was invoked without a period.
    #[error("Please choose a period.")]
    MissingPeriod,

    /// Period name is not one of the supported choices.
    #[error("Unknown period '{0}'. Use one of: alltime, days, weeks, months, years.")]
    UnknownPeriod(String),

    /// A relative period was requested without a number.
    #[error("Please provide a number of {unit} to look back over.")]
    MissingMagnitude { unit: PeriodUnit },

    /// A relative period was requested with zero or a negative number.
    #[error("The number of {unit} must be at least 1, got {magnitude}.")]
    NonPositiveMagnitude { unit: PeriodUnit, magnitude: i64 },

    /// The look-back is so long the cutoff can't be represented.
    #[error("{magnitude} {unit} is too far back to search.")]
    MagnitudeTooLarge { unit: PeriodUnit, magnitude: i64 },
}
