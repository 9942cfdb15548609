//! The calendar systems and the capability trait they share.
//!
//! Every calendar implements [`CalendarSystem`]: a leap rule, a month table and
//! an epoch-day converter. [`Calendar`] is the tagged union handed around by
//! dates; it dispatches to the built-in singletons or to a frozen
//! [`AccountingChronology`].

pub mod accounting;
mod coptic;
mod discordian;
mod ethiopic;
mod french_republic;
mod international_fixed;
mod julian;
mod nile;
mod pax;
mod symmetry010;

pub use accounting::{
    AccountingChronology, AccountingChronologyBuilder, AccountingConfig, AccountingYearDivision,
};
pub use coptic::Coptic;
pub use discordian::Discordian;
pub use ethiopic::Ethiopic;
pub use french_republic::FrenchRepublic;
pub use international_fixed::InternationalFixed;
pub use julian::Julian;
pub use pax::Pax;
pub use symmetry010::Symmetry010;

use crate::consts::{DAYS_IN_WEEK, MAX_YEAR, MIN_YEAR};
use crate::error::{CalendarError, Field};
use crate::types::{CalendarKind, Era};
use crate::CalendarDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Leap rule, month table and epoch-day conversion of one calendar.
///
/// Years are `i64` so intermediate arithmetic cannot overflow; dates store
/// them as `i32` once validated. Months and days passed to the month table
/// are assumed to be valid for the year.
pub trait CalendarSystem {
    fn kind(&self) -> CalendarKind;

    fn is_leap_year(&self, year: i64) -> bool;

    /// Count of leap years in `[1, year)`, negative for years before 1.
    fn leap_years_before(&self, year: i64) -> i64;

    fn months_in_year(&self, year: i64) -> u8;

    fn days_in_month(&self, year: i64, month: u8) -> u8;

    fn days_in_year(&self, year: i64) -> u16;

    /// Days of the year preceding the first day of `month`.
    fn days_before_month(&self, year: i64, month: u8) -> u16;

    /// Maps a 1-based day of year to (month, day).
    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8);

    /// Days from the first day of year 1 to the first day of `year`.
    fn days_before_year(&self, year: i64) -> i64;

    /// Days from the first day of year 1 to epoch day 0.
    fn epoch_offset(&self) -> i64;

    /// Splits a day count from the first day of year 1 into a year and a
    /// zero-based day of year.
    fn locate_year(&self, day: i64) -> (i64, i64);

    fn week_length(&self) -> u8 {
        DAYS_IN_WEEK
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        MIN_YEAR..=MAX_YEAR
    }

    fn day_of_year(&self, year: i64, month: u8, day: u8) -> u16 {
        self.days_before_month(year, month) + u16::from(day)
    }

    fn to_epoch_day(&self, year: i64, month: u8, day: u8) -> i64 {
        self.days_before_year(year) + i64::from(self.day_of_year(year, month, day))
            - 1
            - self.epoch_offset()
    }

    fn from_epoch_day(&self, epoch_day: i64) -> (i64, u8, u8) {
        let (year, day_of_year) = self.locate_year(epoch_day + self.epoch_offset());
        let day_of_year = u16::try_from(day_of_year + 1).unwrap_or(u16::MAX);
        let (month, day) = self.month_day_from_day_of_year(year, day_of_year);
        (year, month, day)
    }

    /// Validates month and day for an already validated year.
    fn check_date(&self, year: i64, month: u8, day: u8) -> Result<(), CalendarError> {
        let months = self.months_in_year(year);
        if !(1..=months).contains(&month) {
            return Err(CalendarError::out_of_range(Field::Month, month, 1, months));
        }
        let days = self.days_in_month(year, month);
        if !(1..=days).contains(&day) {
            return Err(CalendarError::out_of_range(Field::Day, day, 1, days));
        }
        Ok(())
    }

    /// Clamps month, then day, down to the nearest valid value for `year`.
    fn resolve_previous_valid(&self, year: i64, month: u8, day: u8) -> (u8, u8) {
        let month = month.clamp(1, self.months_in_year(year));
        let day = day.clamp(1, self.days_in_month(year, month));
        (month, day)
    }

    /// Month and day after moving a date from `from_year` to `to_year`.
    fn resolve_year_change(&self, _from_year: i64, to_year: i64, month: u8, day: u8) -> (u8, u8) {
        self.resolve_previous_valid(to_year, month, day)
    }

    /// Day of year counted over the days that belong to a week, `None` for
    /// an intercalary day outside the week.
    fn week_day_of_year(&self, year: i64, month: u8, day: u8) -> Option<u16> {
        Some(self.day_of_year(year, month, day))
    }

    /// Month and day used when counting or adding months.
    fn arithmetic_month_day(&self, _year: i64, month: u8, day: u8) -> (u8, u8) {
        (month, day)
    }

    /// Month aligned across leap and common years, and the doubled day of
    /// month, used to compare positions within a year.
    fn packed_month_day(&self, _year: i64, month: u8, day: u8) -> (u8, u16) {
        (month, u16::from(day) * 2)
    }

    /// Months from the first month of year 0 to the first month of `year`.
    fn months_before_year(&self, year: i64) -> i64 {
        i64::from(self.months_in_year(year)) * year
    }

    /// Inverse of [`CalendarSystem::months_before_year`] plus month index.
    fn year_month_from_proleptic_month(&self, proleptic_month: i64) -> (i64, u8) {
        let months = i64::from(self.months_in_year(0));
        let month = proleptic_month.rem_euclid(months) + 1;
        (
            proleptic_month.div_euclid(months),
            u8::try_from(month).unwrap_or(u8::MAX),
        )
    }
}

/// A calendar definition: one of the built-in systems or a configured
/// accounting calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calendar {
    Coptic,
    Ethiopic,
    Julian,
    Pax,
    Discordian,
    FrenchRepublic,
    Symmetry010,
    InternationalFixed,
    Accounting(AccountingChronology),
}

impl Calendar {
    /// The capability implementation behind this calendar.
    pub fn system(&self) -> &dyn CalendarSystem {
        match self {
            Self::Coptic => &Coptic,
            Self::Ethiopic => &Ethiopic,
            Self::Julian => &Julian,
            Self::Pax => &Pax,
            Self::Discordian => &Discordian,
            Self::FrenchRepublic => &FrenchRepublic,
            Self::Symmetry010 => &Symmetry010,
            Self::InternationalFixed => &InternationalFixed,
            Self::Accounting(chronology) => chronology,
        }
    }

    pub const fn kind(&self) -> CalendarKind {
        match self {
            Self::Coptic => CalendarKind::Coptic,
            Self::Ethiopic => CalendarKind::Ethiopic,
            Self::Julian => CalendarKind::Julian,
            Self::Pax => CalendarKind::Pax,
            Self::Discordian => CalendarKind::Discordian,
            Self::FrenchRepublic => CalendarKind::FrenchRepublic,
            Self::Symmetry010 => CalendarKind::Symmetry010,
            Self::InternationalFixed => CalendarKind::InternationalFixed,
            Self::Accounting(_) => CalendarKind::Accounting,
        }
    }

    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.system().year_range()
    }

    /// Validates a proleptic year and narrows it to `i32`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year is not supported.
    pub fn checked_year(&self, year: i64) -> Result<i32, CalendarError> {
        let range = self.year_range();
        i32::try_from(year)
            .ok()
            .filter(|year| range.contains(year))
            .ok_or_else(|| {
                CalendarError::out_of_range(Field::Year, year, *range.start(), *range.end())
            })
    }

    /// First and last epoch day representable in this calendar.
    pub fn epoch_day_range(&self) -> RangeInclusive<i64> {
        let system = self.system();
        let range = system.year_range();
        let first = system.to_epoch_day(i64::from(*range.start()), 1, 1);
        let after_last = system.days_before_year(i64::from(*range.end()) + 1)
            - system.epoch_offset();
        first..=after_last - 1
    }

    pub fn is_leap_year(&self, year: i64) -> bool {
        self.system().is_leap_year(year)
    }

    pub fn leap_years_before(&self, year: i64) -> i64 {
        self.system().leap_years_before(year)
    }

    pub fn months_in_year(&self, year: i64) -> u8 {
        self.system().months_in_year(year)
    }

    /// Length of `month` in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year or month is invalid.
    pub fn days_in_month(&self, year: i64, month: u8) -> Result<u8, CalendarError> {
        self.checked_year(year)?;
        let months = self.months_in_year(year);
        if !(1..=months).contains(&month) {
            return Err(CalendarError::out_of_range(Field::Month, month, 1, months));
        }
        Ok(self.system().days_in_month(year, month))
    }

    pub fn days_in_year(&self, year: i64) -> u16 {
        self.system().days_in_year(year)
    }

    pub fn week_length(&self) -> u8 {
        self.system().week_length()
    }

    /// Creates a validated date in this calendar.
    ///
    /// # Errors
    /// Returns a range error if the year, month or day is invalid.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate, CalendarError> {
        CalendarDate::new(*self, year, month, day)
    }

    /// Creates a date from a year and 1-based day of year.
    ///
    /// # Errors
    /// Returns a range error if the year or day of year is invalid.
    pub fn date_year_day(&self, year: i32, day_of_year: u16) -> Result<CalendarDate, CalendarError> {
        CalendarDate::of_year_day(*self, year, day_of_year)
    }

    /// Creates a date from an epoch day.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside [`Calendar::epoch_day_range`].
    pub fn date_from_epoch_day(&self, epoch_day: i64) -> Result<CalendarDate, CalendarError> {
        CalendarDate::from_epoch_day(*self, epoch_day)
    }

    /// Creates a date, clamping month and day down to the nearest valid value.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year is not supported.
    pub fn resolve_previous_valid(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<CalendarDate, CalendarError> {
        let year = self.checked_year(i64::from(year))?;
        let (month, day) = self.system().resolve_previous_valid(i64::from(year), month, day);
        Ok(CalendarDate::new_unchecked(*self, year, month, day))
    }

    /// Proleptic year from an era and year of era.
    ///
    /// # Errors
    /// Returns `CalendarError::EraMismatch` if the era belongs to another
    /// calendar and `CalendarError::OutOfRange` for an invalid year of era.
    pub fn proleptic_year(&self, era: Era, year_of_era: i32) -> Result<i32, CalendarError> {
        let kind = self.kind();
        if era.calendar() != kind {
            return Err(CalendarError::EraMismatch {
                era,
                calendar: kind,
            });
        }
        if kind.has_before_era() && year_of_era < 1 {
            return Err(CalendarError::out_of_range(
                Field::YearOfEra,
                year_of_era,
                1,
                i64::from(MAX_YEAR) + 1,
            ));
        }
        let year = if era.is_before_epoch() {
            1 - i64::from(year_of_era)
        } else {
            i64::from(year_of_era)
        };
        self.checked_year(year)
    }

    /// Era containing the proleptic year.
    pub const fn era_of(&self, year: i32) -> Era {
        let kind = self.kind();
        match Era::before_epoch(kind) {
            Some(before) if year < 1 => before,
            _ => Era::current(kind),
        }
    }

    /// Year of era of the proleptic year; `1 - year` before the epoch.
    pub const fn year_of_era(&self, year: i32) -> i32 {
        if year < 1 && self.kind().has_before_era() {
            1 - year
        } else {
            year
        }
    }
}

impl From<AccountingChronology> for Calendar {
    fn from(chronology: AccountingChronology) -> Self {
        Self::Accounting(chronology)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const BUILT_INS: [Calendar; 8] = [
        Calendar::Coptic,
        Calendar::Ethiopic,
        Calendar::Julian,
        Calendar::Pax,
        Calendar::Discordian,
        Calendar::FrenchRepublic,
        Calendar::Symmetry010,
        Calendar::InternationalFixed,
    ];

    #[test]
    fn test_kind_matches_system() {
        for calendar in BUILT_INS {
            assert_eq!(calendar.kind(), calendar.system().kind());
        }
    }

    #[test]
    fn test_week_lengths() {
        let sevens = BUILT_INS.iter().filter(|c| c.week_length() == 7).count();
        assert_eq!(sevens, 6);
        assert_eq!(Calendar::FrenchRepublic.week_length(), 10);
        assert_eq!(Calendar::Discordian.week_length(), 5);
    }

    #[test]
    fn test_checked_year() {
        assert_eq!(Calendar::Julian.checked_year(2024), Ok(2024));
        assert_eq!(Calendar::Julian.checked_year(-5), Ok(-5));
        assert!(Calendar::Julian.checked_year(1_000_000).is_err());
        assert!(Calendar::Julian.checked_year(i64::MAX).is_err());
        assert!(Calendar::InternationalFixed.checked_year(0).is_err());
        assert!(Calendar::Discordian.checked_year(0).is_err());
    }

    #[test]
    fn test_epoch_day_range_edges_convert() {
        for calendar in BUILT_INS {
            let range = calendar.epoch_day_range();
            let first = calendar.date_from_epoch_day(*range.start()).unwrap();
            assert_eq!(first.year(), *calendar.year_range().start(), "{calendar}");
            assert_eq!((first.month(), first.day()), (1, 1), "{calendar}");

            let last = calendar.date_from_epoch_day(*range.end()).unwrap();
            assert_eq!(last.year(), *calendar.year_range().end(), "{calendar}");
            assert_eq!(last.day_of_year(), last.length_of_year(), "{calendar}");

            assert!(calendar.date_from_epoch_day(range.start() - 1).is_err());
            assert!(calendar.date_from_epoch_day(range.end() + 1).is_err());
        }
    }

    #[test]
    fn test_days_in_month_validates() {
        assert_eq!(Calendar::Coptic.days_in_month(3, 13), Ok(6));
        assert_eq!(Calendar::Coptic.days_in_month(4, 13), Ok(5));
        assert!(Calendar::Coptic.days_in_month(4, 14).is_err());
        assert!(Calendar::Coptic.days_in_month(4, 0).is_err());
    }

    #[test]
    fn test_proleptic_year_eras() {
        let calendar = Calendar::Coptic;
        let before = Era::before_epoch(CalendarKind::Coptic).unwrap();
        let current = Era::current(CalendarKind::Coptic);
        assert_eq!(calendar.proleptic_year(current, 1740), Ok(1740));
        assert_eq!(calendar.proleptic_year(before, 1), Ok(0));
        assert_eq!(calendar.proleptic_year(before, 5), Ok(-4));
        assert!(calendar.proleptic_year(current, 0).is_err());

        assert_eq!(calendar.era_of(0), before);
        assert_eq!(calendar.era_of(1), current);
        assert_eq!(calendar.year_of_era(0), 1);
        assert_eq!(calendar.year_of_era(-4), 5);
        assert_eq!(calendar.year_of_era(12), 12);
    }

    #[test]
    fn test_proleptic_year_era_mismatch() {
        let result = Calendar::Coptic.proleptic_year(Era::current(CalendarKind::Ethiopic), 10);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EraMismatch);
        assert!(matches!(
            err,
            CalendarError::EraMismatch {
                calendar: CalendarKind::Coptic,
                ..
            }
        ));
    }

    #[test]
    fn test_single_era_calendars() {
        let calendar = Calendar::InternationalFixed;
        let ce = Era::current(CalendarKind::InternationalFixed);
        assert_eq!(calendar.era_of(2017), ce);
        assert_eq!(calendar.year_of_era(2017), 2017);
        assert_eq!(calendar.proleptic_year(ce, 2017), Ok(2017));
        assert!(calendar.proleptic_year(ce, 0).is_err());
    }

    #[test]
    fn test_resolve_previous_valid() {
        let date = Calendar::Coptic.resolve_previous_valid(4, 13, 6).unwrap();
        assert_eq!((date.month(), date.day()), (13, 5));
        let date = Calendar::Coptic.resolve_previous_valid(3, 13, 6).unwrap();
        assert_eq!((date.month(), date.day()), (13, 6));
        let date = Calendar::Julian.resolve_previous_valid(1900, 14, 31).unwrap();
        assert_eq!((date.month(), date.day()), (12, 31));
        assert!(Calendar::Julian.resolve_previous_valid(1_000_000, 1, 1).is_err());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Calendar::FrenchRepublic.to_string(), "FrenchRepublic");
        let json = serde_json::to_string(&Calendar::Pax).unwrap();
        assert_eq!(json, r#""Pax""#);
        let parsed: Calendar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Calendar::Pax);
    }
}
