//! Configurable accounting (fiscal) calendars.
//!
//! An accounting year always ends on the same weekday, either the last one of
//! a given ISO month or the one nearest to that month's last day. Years are
//! therefore 52 or 53 weeks long, and the weeks are split into months by an
//! [`AccountingYearDivision`]. The 53rd week goes to one designated month.

mod builder;
mod division;

pub use builder::{AccountingChronologyBuilder, AccountingConfig};
pub use division::{AccountingYearDivision, WEEKS_IN_YEAR};

use super::CalendarSystem;
use crate::consts::{DAYS_IN_WEEK, DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE};
use crate::cycle::locate_year;
use crate::error::CalendarError;
use crate::iso;
use crate::prelude::*;
use crate::types::CalendarKind;
use serde::{Deserialize, Serialize};

const DAYS_IN_COMMON_YEAR: i64 = WEEKS_IN_YEAR as i64 * DAYS_IN_WEEK as i64;
/// Days the nearest weekday can fall after the end of the month
const NEAREST_LOOKAHEAD: i64 = 3;

/// A frozen accounting calendar, built by [`AccountingChronologyBuilder`].
///
/// Serializes as its [`AccountingConfig`]; deserializing validates the
/// configuration again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AccountingConfig", into = "AccountingConfig")]
pub struct AccountingChronology {
    ends_on: Weekday,
    end: IsoMonth,
    in_last_week: bool,
    division: AccountingYearDivision,
    leap_week_in_month: u8,
    year_offset: i32,
    /// Epoch day of the last day of accounting year 0
    year_zero_end: i64,
}

impl AccountingChronology {
    /// Assumes the parts were validated by the builder.
    pub(crate) fn from_parts(
        ends_on: Weekday,
        end: IsoMonth,
        in_last_week: bool,
        division: AccountingYearDivision,
        leap_week_in_month: u8,
        year_offset: i32,
    ) -> Self {
        let mut chronology = Self {
            ends_on,
            end,
            in_last_week,
            division,
            leap_week_in_month,
            year_offset,
            year_zero_end: 0,
        };
        chronology.year_zero_end = chronology.year_end(0);
        chronology
    }

    pub const fn ends_on(&self) -> Weekday {
        self.ends_on
    }

    pub const fn end(&self) -> IsoMonth {
        self.end
    }

    /// True when the year ends on the last `ends_on` of the month rather than
    /// the one nearest to the month's last day.
    pub const fn in_last_week(&self) -> bool {
        self.in_last_week
    }

    pub const fn division(&self) -> AccountingYearDivision {
        self.division
    }

    pub const fn leap_week_in_month(&self) -> u8 {
        self.leap_week_in_month
    }

    /// 0 when year `y` ends in ISO year `y`, 1 when it starts in ISO year `y`.
    pub const fn year_offset(&self) -> i32 {
        self.year_offset
    }

    /// Epoch day of the last day of accounting year `year`.
    pub fn year_end(&self, year: i64) -> i64 {
        let month = u8::try_from(self.end.number_from_month()).unwrap_or(12);
        let last_day = iso::last_day_of_month(year + i64::from(self.year_offset), month);
        let reference = if self.in_last_week {
            last_day
        } else {
            last_day + NEAREST_LOOKAHEAD
        };
        iso::previous_or_same(reference, self.ends_on)
    }

    /// Leap week month of `year`, 0 in a 52-week year.
    fn leap_month_of(&self, year: i64) -> u8 {
        if self.is_leap_year(year) {
            self.leap_week_in_month
        } else {
            0
        }
    }
}

impl CalendarSystem for AccountingChronology {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Accounting
    }

    fn is_leap_year(&self, year: i64) -> bool {
        self.year_end(year) - self.year_end(year - 1) > DAYS_IN_COMMON_YEAR
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        (self.days_before_year(year) - DAYS_IN_COMMON_YEAR * (year - 1)) / i64::from(DAYS_IN_WEEK)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        self.division.months_in_year()
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        let leap = self.leap_month_of(year);
        let weeks = self.division.start_week(month + 1, leap) - self.division.start_week(month, leap);
        weeks * DAYS_IN_WEEK
    }

    fn days_in_year(&self, year: i64) -> u16 {
        let days = self.year_end(year) - self.year_end(year - 1);
        u16::try_from(days).unwrap_or(u16::MAX)
    }

    fn days_before_month(&self, year: i64, month: u8) -> u16 {
        let weeks = self.division.start_week(month, self.leap_month_of(year));
        u16::from(weeks) * u16::from(DAYS_IN_WEEK)
    }

    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8) {
        let zero_based = day_of_year - 1;
        let weeks = u8::try_from(zero_based / u16::from(DAYS_IN_WEEK)).unwrap_or(u8::MAX);
        let month = self.division.month_of_week(weeks, self.leap_month_of(year));
        let day = zero_based - self.days_before_month(year, month) + 1;
        (month, u8::try_from(day).unwrap_or(u8::MAX))
    }

    fn days_before_year(&self, year: i64) -> i64 {
        self.year_end(year - 1) - self.year_zero_end
    }

    fn epoch_offset(&self) -> i64 {
        -(self.year_zero_end + 1)
    }

    /// Month ends repeat every 400 ISO years, which is also a whole number
    /// of weeks, so accounting years share the Gregorian cycle.
    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, GREGORIAN_CYCLE, DAYS_PER_GREGORIAN_CYCLE, |year| {
            self.days_before_year(year)
        })
    }
}

impl TryFrom<AccountingConfig> for AccountingChronology {
    type Error = CalendarError;

    fn try_from(config: AccountingConfig) -> Result<Self, Self::Error> {
        AccountingChronologyBuilder::from(config).to_chronology()
    }
}
