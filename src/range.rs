use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CalendarError, prelude::*};

/// Represents a range between two dates of one calendar (inclusive).
/// The start date must be on or before the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RangeFields", into = "RangeFields")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

#[derive(Serialize, Deserialize)]
struct RangeFields {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::CalendarMismatch` if the dates belong to
    /// different calendars and `CalendarError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if start.calendar() != end.calendar() {
            return Err(CalendarError::CalendarMismatch {
                left: start.calendar().kind(),
                right: end.calendar().kind(),
            });
        }
        if start.is_after(&end) {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains the day named by `date`, in any calendar.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        let day = date.to_epoch_day();
        self.start.to_epoch_day() <= day && day <= self.end.to_epoch_day()
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.to_epoch_day() <= other.end.to_epoch_day()
            && other.start.to_epoch_day() <= self.end.to_epoch_day()
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start.to_epoch_day() <= self.start.to_epoch_day()
            && self.end.to_epoch_day() <= other.end.to_epoch_day()
    }

    /// Number of days in the range, counting both ends.
    pub fn length_in_days(&self) -> i64 {
        self.end.to_epoch_day() - self.start.to_epoch_day() + 1
    }

    /// Iterates over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let calendar = self.start.calendar();
        (self.start.to_epoch_day()..=self.end.to_epoch_day())
            .filter_map(move |epoch_day| CalendarDate::from_epoch_day(calendar, epoch_day).ok())
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Compare start dates first, then end dates
        match self.start.partial_cmp(&other.start)? {
            Ordering::Equal => self.end.partial_cmp(&other.end),
            ord => Some(ord),
        }
    }
}

impl TryFrom<RangeFields> for DateRange {
    type Error = CalendarError;

    fn try_from(value: RangeFields) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl From<DateRange> for RangeFields {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
