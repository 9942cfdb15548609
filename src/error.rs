use crate::prelude::*;
use crate::types::{CalendarKind, Era};
use crate::CalendarDate;

/// Date field named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "Year")]
    Year,
    #[display(fmt = "YearOfEra")]
    YearOfEra,
    #[display(fmt = "MonthOfYear")]
    Month,
    #[display(fmt = "DayOfMonth")]
    Day,
    #[display(fmt = "DayOfYear")]
    DayOfYear,
    #[display(fmt = "EpochDay")]
    EpochDay,
    #[display(fmt = "ProlepticMonth")]
    ProlepticMonth,
    #[display(fmt = "Era")]
    Era,
    #[display(fmt = "ElapsedWeeks")]
    ElapsedWeeks,
}

/// Broad category of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A year, month, day or epoch day outside the valid range.
    #[display(fmt = "range")]
    Range,
    /// An accounting calendar builder with missing or contradictory settings.
    #[display(fmt = "configuration")]
    Configuration,
    /// An era, or a date, belonging to another calendar.
    #[display(fmt = "era mismatch")]
    EraMismatch,
}

/// Error type for every calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Field value outside its valid range.
    #[error("Invalid value for {field} (valid values {min} - {max}): {value}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Field values that are individually valid but do not form a date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Arithmetic left the representable range.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(Field),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// Accounting calendar configuration could not be frozen.
    #[error("Accounting calendar cannot be built: {0}")]
    Configuration(String),

    /// Era of another calendar.
    #[error("Era {era} is not an era of the {calendar} calendar")]
    EraMismatch { era: Era, calendar: CalendarKind },

    /// Dates of two different calendars.
    #[error("Dates belong to different calendars: {left} and {right}")]
    CalendarMismatch {
        left: CalendarKind,
        right: CalendarKind,
    },
}

impl CalendarError {
    pub(crate) fn out_of_range(
        field: Field,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Returns the broad category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. }
            | Self::InvalidDate(_)
            | Self::Overflow(_)
            | Self::InvalidRange { .. } => ErrorKind::Range,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::EraMismatch { .. } | Self::CalendarMismatch { .. } => ErrorKind::EraMismatch,
        }
    }
}
