//! Calendar-generic dates and their arithmetic.

use crate::cal::{Calendar, CalendarSystem};
use crate::consts::{PACKED_MONTH_SCALE, PACKED_YEAR_SCALE};
use crate::error::{CalendarError, Field};
use crate::iso;
use crate::prelude::*;
use crate::types::{Era, Period, Unit};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::trace;

/// A date in one of the supported calendars.
///
/// The fields always form a valid date of the calendar. Ordering is only
/// defined between dates of the same calendar; use
/// [`CalendarDate::is_before`] to compare across calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{calendar} {year}-{month:02}-{day:02}")]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct CalendarDate {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Serialize, Deserialize)]
struct DateFields {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, validating the year, then the month, then the day.
    ///
    /// # Errors
    /// Returns a range error naming the first invalid field.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = calendar.checked_year(i64::from(year))?;
        calendar.system().check_date(i64::from(year), month, day)?;
        Ok(Self::new_unchecked(calendar, year, month, day))
    }

    pub(crate) const fn new_unchecked(calendar: Calendar, year: i32, month: u8, day: u8) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Creates a date from a year and 1-based day of year.
    ///
    /// # Errors
    /// Returns a range error if the year or the day of year is invalid.
    pub fn of_year_day(
        calendar: Calendar,
        year: i32,
        day_of_year: u16,
    ) -> Result<Self, CalendarError> {
        let year = calendar.checked_year(i64::from(year))?;
        let length = calendar.days_in_year(i64::from(year));
        if !(1..=length).contains(&day_of_year) {
            return Err(CalendarError::out_of_range(
                Field::DayOfYear,
                day_of_year,
                1,
                length,
            ));
        }
        let (month, day) = calendar
            .system()
            .month_day_from_day_of_year(i64::from(year), day_of_year);
        Ok(Self::new_unchecked(calendar, year, month, day))
    }

    /// Converts an epoch day (days since 1970-01-01) to a date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the calendar's year range.
    pub fn from_epoch_day(calendar: Calendar, epoch_day: i64) -> Result<Self, CalendarError> {
        let range = calendar.epoch_day_range();
        if !range.contains(&epoch_day) {
            return Err(CalendarError::out_of_range(
                Field::EpochDay,
                epoch_day,
                *range.start(),
                *range.end(),
            ));
        }
        let (year, month, day) = calendar.system().from_epoch_day(epoch_day);
        let year = calendar.checked_year(year)?;
        Ok(Self::new_unchecked(calendar, year, month, day))
    }

    pub fn to_epoch_day(&self) -> i64 {
        self.system()
            .to_epoch_day(i64::from(self.year), self.month, self.day)
    }

    fn system(&self) -> &dyn CalendarSystem {
        self.calendar.system()
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Proleptic year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn day_of_year(&self) -> u16 {
        self.system()
            .day_of_year(i64::from(self.year), self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        self.calendar.is_leap_year(i64::from(self.year))
    }

    pub fn length_of_month(&self) -> u8 {
        self.system().days_in_month(i64::from(self.year), self.month)
    }

    pub fn length_of_year(&self) -> u16 {
        self.calendar.days_in_year(i64::from(self.year))
    }

    pub fn months_in_year(&self) -> u8 {
        self.calendar.months_in_year(i64::from(self.year))
    }

    pub const fn era(&self) -> Era {
        self.calendar.era_of(self.year)
    }

    pub const fn year_of_era(&self) -> i32 {
        self.calendar.year_of_era(self.year)
    }

    /// Months elapsed since the first month of year 0.
    pub fn proleptic_month(&self) -> i64 {
        let year = i64::from(self.year);
        let (month, _) = self
            .system()
            .arithmetic_month_day(year, self.month, self.day);
        self.system().months_before_year(year) + i64::from(month) - 1
    }

    /// ISO day of the week of this date.
    pub fn iso_weekday(&self) -> Weekday {
        iso::weekday(self.to_epoch_day())
    }

    fn week_length(&self) -> u8 {
        self.system().week_length()
    }

    /// Week of the month, counting from the first day of the month. 0 for a
    /// day outside the month structure such as St. Tib's Day.
    pub fn aligned_week_of_month(&self) -> u8 {
        if self.day == 0 {
            return 0;
        }
        (self.day - 1) / self.week_length() + 1
    }

    /// Day of the aligned week of the month, starting at 1.
    pub fn aligned_day_of_week_in_month(&self) -> u8 {
        if self.day == 0 {
            return 0;
        }
        (self.day - 1) % self.week_length() + 1
    }

    /// Week of the year, counting from the first day of the year. Days that
    /// belong to no week are skipped and report 0.
    pub fn aligned_week_of_year(&self) -> u16 {
        self.system()
            .week_day_of_year(i64::from(self.year), self.month, self.day)
            .map_or(0, |day| (day - 1) / u16::from(self.week_length()) + 1)
    }

    /// Number of aligned weeks in the month.
    pub fn weeks_in_month(&self) -> u8 {
        if self.day == 0 {
            return 0;
        }
        self.length_of_month().div_ceil(self.week_length())
    }

    /// Adds days through the epoch day.
    ///
    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(CalendarError::Overflow(Field::EpochDay))?;
        Self::from_epoch_day(self.calendar, epoch_day)
    }

    /// Adds weeks of the calendar's own week length.
    ///
    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        let days = weeks
            .checked_mul(i64::from(self.week_length()))
            .ok_or(CalendarError::Overflow(Field::EpochDay))?;
        self.plus_days(days)
    }

    /// Adds months, keeping the day of month where the target month allows.
    ///
    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        if months == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.year);
        let (_, day) = self
            .system()
            .arithmetic_month_day(year, self.month, self.day);
        let proleptic_month = self
            .proleptic_month()
            .checked_add(months)
            .ok_or(CalendarError::Overflow(Field::ProlepticMonth))?;
        let (target_year, month) = self
            .system()
            .year_month_from_proleptic_month(proleptic_month);
        let target_year = self.calendar.checked_year(target_year)?;
        let resolved = self
            .system()
            .resolve_previous_valid(i64::from(target_year), month, day);
        Ok(self.resolved(target_year, (month, day), resolved))
    }

    /// Adds years, keeping month and day where the target year allows.
    ///
    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        if years == 0 {
            return Ok(*self);
        }
        let target_year = i64::from(self.year)
            .checked_add(years)
            .ok_or(CalendarError::Overflow(Field::Year))?;
        self.with_year_unchecked(self.calendar.checked_year(target_year)?)
    }

    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn minus_days(&self, days: i64) -> Result<Self, CalendarError> {
        self.plus_days(negate(days, Field::EpochDay)?)
    }

    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_weeks(negate(weeks, Field::EpochDay)?)
    }

    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn minus_months(&self, months: i64) -> Result<Self, CalendarError> {
        self.plus_months(negate(months, Field::ProlepticMonth)?)
    }

    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn minus_years(&self, years: i64) -> Result<Self, CalendarError> {
        self.plus_years(negate(years, Field::Year)?)
    }

    /// Adds an amount of the given unit.
    ///
    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn plus(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            Unit::Months => self.plus_months(amount),
            Unit::Years | Unit::Decades | Unit::Centuries | Unit::Millennia => {
                let years = unit
                    .years()
                    .and_then(|scale| amount.checked_mul(scale))
                    .ok_or(CalendarError::Overflow(Field::Year))?;
                self.plus_years(years)
            }
        }
    }

    /// # Errors
    /// Returns a range error if the result is not representable.
    pub fn minus(&self, amount: i64, unit: Unit) -> Result<Self, CalendarError> {
        let field = if unit == Unit::Months {
            Field::ProlepticMonth
        } else {
            Field::Year
        };
        self.plus(negate(amount, field)?, unit)
    }

    /// Moves the date to another year of the same calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year is not supported.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        let year = self.calendar.checked_year(i64::from(year))?;
        self.with_year_unchecked(year)
    }

    fn with_year_unchecked(&self, year: i32) -> Result<Self, CalendarError> {
        let resolved = self.system().resolve_year_change(
            i64::from(self.year),
            i64::from(year),
            self.month,
            self.day,
        );
        Ok(self.resolved(year, (self.month, self.day), resolved))
    }

    /// Changes the month, clamping the day to the length of the new month.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for a month outside the year.
    pub fn with_month(&self, month: u8) -> Result<Self, CalendarError> {
        let months = self.months_in_year();
        if !(1..=months).contains(&month) {
            return Err(CalendarError::out_of_range(Field::Month, month, 1, months));
        }
        let year = i64::from(self.year);
        let (_, day) = self
            .system()
            .arithmetic_month_day(year, self.month, self.day);
        let resolved = self.system().resolve_previous_valid(year, month, day);
        Ok(self.resolved(self.year, (month, day), resolved))
    }

    /// # Errors
    /// Returns a range error if the day does not exist in the month.
    pub fn with_day(&self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.calendar, self.year, self.month, day)
    }

    /// # Errors
    /// Returns a range error if the day of year does not exist in the year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self, CalendarError> {
        Self::of_year_day(self.calendar, self.year, day_of_year)
    }

    /// The same day in another calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the day is outside the year
    /// range of the target calendar.
    pub fn with_calendar(&self, calendar: Calendar) -> Result<Self, CalendarError> {
        Self::from_epoch_day(calendar, self.to_epoch_day())
    }

    fn resolved(&self, year: i32, requested: (u8, u8), resolved: (u8, u8)) -> Self {
        if requested != resolved {
            trace!(
                calendar = %self.calendar,
                year,
                month = requested.0,
                day = requested.1,
                resolved_month = resolved.0,
                resolved_day = resolved.1,
                "resolved to previous valid date"
            );
        }
        Self::new_unchecked(self.calendar, year, resolved.0, resolved.1)
    }

    fn check_same_calendar(&self, other: &Self) -> Result<(), CalendarError> {
        if self.calendar == other.calendar {
            Ok(())
        } else {
            Err(CalendarError::CalendarMismatch {
                left: self.calendar.kind(),
                right: other.calendar.kind(),
            })
        }
    }

    /// Month position packed with the doubled day of month.
    fn packed_month(&self) -> i64 {
        let (_, doubled_day) =
            self.system()
                .packed_month_day(i64::from(self.year), self.month, self.day);
        self.proleptic_month() * PACKED_MONTH_SCALE + i64::from(doubled_day)
    }

    /// Year packed with the aligned month and the doubled day of month.
    fn packed_year(&self) -> i64 {
        let (month, doubled_day) =
            self.system()
                .packed_month_day(i64::from(self.year), self.month, self.day);
        i64::from(self.year) * PACKED_YEAR_SCALE
            + i64::from(month) * PACKED_MONTH_SCALE
            + i64::from(doubled_day)
    }

    /// Whole units from this date to `end`, negative if `end` is earlier.
    ///
    /// # Errors
    /// Returns `CalendarError::CalendarMismatch` if `end` belongs to another
    /// calendar.
    pub fn until(&self, end: &Self, unit: Unit) -> Result<i64, CalendarError> {
        self.check_same_calendar(end)?;
        let amount = match unit {
            Unit::Days => end.to_epoch_day() - self.to_epoch_day(),
            Unit::Weeks => {
                (end.to_epoch_day() - self.to_epoch_day()) / i64::from(self.week_length())
            }
            Unit::Months => (end.packed_month() - self.packed_month()) / PACKED_MONTH_SCALE,
            Unit::Years | Unit::Decades | Unit::Centuries | Unit::Millennia => {
                let years = (end.packed_year() - self.packed_year()) / PACKED_YEAR_SCALE;
                years / unit.years().unwrap_or(1)
            }
        };
        Ok(amount)
    }

    /// Years, months and days from this date to `end`.
    ///
    /// # Errors
    /// Returns `CalendarError::CalendarMismatch` if `end` belongs to another
    /// calendar, or a range error if an intermediate date is not
    /// representable.
    pub fn until_period(&self, end: &Self) -> Result<Period, CalendarError> {
        let years = self.until(end, Unit::Years)?;
        let after_years = self.plus_years(years)?;
        let months = after_years.until(end, Unit::Months)?;
        let after_months = after_years.plus_months(months)?;
        let days = end.to_epoch_day() - after_months.to_epoch_day();

        let narrow = |value: i64, field| i32::try_from(value).map_err(|_| CalendarError::Overflow(field));
        Ok(Period::new(
            narrow(years, Field::Year)?,
            narrow(months, Field::ProlepticMonth)?,
            narrow(days, Field::EpochDay)?,
        ))
    }

    /// True if this date is earlier on the timeline, in any calendar.
    pub fn is_before(&self, other: &Self) -> bool {
        self.to_epoch_day() < other.to_epoch_day()
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.to_epoch_day() > other.to_epoch_day()
    }

    /// True if both dates name the same day, in any calendar.
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.to_epoch_day() == other.to_epoch_day()
    }
}

fn negate(amount: i64, field: Field) -> Result<i64, CalendarError> {
    amount.checked_neg().ok_or(CalendarError::Overflow(field))
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.calendar == other.calendar {
            Some(self.to_epoch_day().cmp(&other.to_epoch_day()))
        } else {
            None
        }
    }
}

impl TryFrom<DateFields> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: DateFields) -> Result<Self, Self::Error> {
        Self::new(value.calendar, value.year, value.month, value.day)
    }
}

impl From<CalendarDate> for DateFields {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}
