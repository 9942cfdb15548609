use crate::error::{CalendarError, Field};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Identity of a calendar system, without any accounting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum CalendarKind {
    #[display(fmt = "Coptic")]
    Coptic,
    #[display(fmt = "Ethiopic")]
    Ethiopic,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Pax")]
    Pax,
    #[display(fmt = "Discordian")]
    Discordian,
    #[display(fmt = "FrenchRepublic")]
    FrenchRepublic,
    #[display(fmt = "Symmetry010")]
    Symmetry010,
    #[display(fmt = "InternationalFixed")]
    InternationalFixed,
    #[display(fmt = "Accounting")]
    Accounting,
}

impl CalendarKind {
    /// Whether the calendar counts years backwards before its epoch in a
    /// separate era.
    pub const fn has_before_era(self) -> bool {
        !matches!(self, Self::Discordian | Self::InternationalFixed)
    }

    /// Names of the (before-epoch, current) eras.
    const fn era_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Coptic => ("BEFORE_AM", "AM"),
            Self::Ethiopic => ("BEFORE_INCARNATION", "INCARNATION"),
            Self::Julian => ("BC", "AD"),
            Self::FrenchRepublic => ("BEFORE_REPUBLIC", "REPUBLIC"),
            Self::Discordian => ("", "YOLD"),
            Self::Pax | Self::Symmetry010 | Self::InternationalFixed | Self::Accounting => {
                ("BCE", "CE")
            }
        }
    }
}

/// An era of one calendar.
///
/// Ordinal 0 is the era before the calendar's epoch, ordinal 1 the current
/// era. Single-era calendars only have ordinal 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EraFields", into = "EraFields")]
pub struct Era {
    calendar: CalendarKind,
    ordinal: u8,
}

#[derive(Serialize, Deserialize)]
struct EraFields {
    calendar: CalendarKind,
    ordinal: u8,
}

impl Era {
    /// Creates the era with the given ordinal, validating it for the calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the calendar has no such era.
    pub fn new(calendar: CalendarKind, ordinal: u8) -> Result<Self, CalendarError> {
        let min = u8::from(!calendar.has_before_era());
        if ordinal < min || ordinal > 1 {
            return Err(CalendarError::out_of_range(Field::Era, ordinal, min, 1));
        }
        Ok(Self { calendar, ordinal })
    }

    /// The era starting at year 1 of the calendar.
    pub const fn current(calendar: CalendarKind) -> Self {
        Self {
            calendar,
            ordinal: 1,
        }
    }

    /// The era before year 1, if the calendar has one.
    pub const fn before_epoch(calendar: CalendarKind) -> Option<Self> {
        if calendar.has_before_era() {
            Some(Self {
                calendar,
                ordinal: 0,
            })
        } else {
            None
        }
    }

    pub const fn calendar(self) -> CalendarKind {
        self.calendar
    }

    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }

    pub const fn is_before_epoch(self) -> bool {
        self.ordinal == 0
    }

    pub const fn name(self) -> &'static str {
        let (before, current) = self.calendar.era_names();
        if self.is_before_epoch() {
            before
        } else {
            current
        }
    }
}

impl TryFrom<EraFields> for Era {
    type Error = CalendarError;

    fn try_from(value: EraFields) -> Result<Self, Self::Error> {
        Self::new(value.calendar, value.ordinal)
    }
}

impl From<Era> for EraFields {
    fn from(era: Era) -> Self {
        Self {
            calendar: era.calendar,
            ordinal: era.ordinal,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Units accepted by date arithmetic and `until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Unit {
    #[display(fmt = "Days")]
    Days,
    #[display(fmt = "Weeks")]
    Weeks,
    #[display(fmt = "Months")]
    Months,
    #[display(fmt = "Years")]
    Years,
    #[display(fmt = "Decades")]
    Decades,
    #[display(fmt = "Centuries")]
    Centuries,
    #[display(fmt = "Millennia")]
    Millennia,
}

impl Unit {
    /// Number of years in one unit, for the year based units.
    pub(crate) const fn years(self) -> Option<i64> {
        match self {
            Self::Years => Some(1),
            Self::Decades => Some(10),
            Self::Centuries => Some(100),
            Self::Millennia => Some(1000),
            Self::Days | Self::Weeks | Self::Months => None,
        }
    }
}

/// Amount of time between two dates of one calendar, in calendar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "P{years}Y{months}M{days}D")]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}
