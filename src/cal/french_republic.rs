use super::CalendarSystem;
use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE};
use crate::cycle::locate_year;
use crate::iso;
use crate::types::CalendarKind;

/// Days from Republican 0001-01-01 (ISO 1792-09-22) to 1970-01-01
pub const FRENCH_REPUBLIC_EPOCH_OFFSET: i64 = 64_748;

const MONTHS_IN_YEAR: u8 = 13;
const DAYS_IN_MONTH: u8 = 30;
const COMPLEMENTARY_DAYS: u8 = 5;
const DAYS_IN_DECADE: u8 = 10;

/// The French Republican calendar, proleptic in both directions.
///
/// Twelve months of three ten-day decades followed by the complementary days
/// (sansculottides), counted as month 13. Year `y` is leap when ISO year
/// `y + 1` is, which makes years 3, 7 and 11 leap as historically observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrenchRepublic;

impl FrenchRepublic {
    const fn leap(year: i64) -> bool {
        iso::is_leap_year(year + 1)
    }
}

impl CalendarSystem for FrenchRepublic {
    fn kind(&self) -> CalendarKind {
        CalendarKind::FrenchRepublic
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::leap(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        // ISO year 1 is common, so shifting the count by one is exact
        iso::leap_years_before(year + 1)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == MONTHS_IN_YEAR {
            COMPLEMENTARY_DAYS + u8::from(Self::leap(year))
        } else {
            DAYS_IN_MONTH
        }
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if Self::leap(year) { 366 } else { 365 }
    }

    fn days_before_month(&self, _year: i64, month: u8) -> u16 {
        (u16::from(month) - 1) * u16::from(DAYS_IN_MONTH)
    }

    fn month_day_from_day_of_year(&self, _year: i64, day_of_year: u16) -> (u8, u8) {
        let zero_based = day_of_year - 1;
        let month_length = u16::from(DAYS_IN_MONTH);
        (
            u8::try_from(zero_based / month_length + 1).unwrap_or(MONTHS_IN_YEAR),
            u8::try_from(zero_based % month_length + 1).unwrap_or(DAYS_IN_MONTH),
        )
    }

    fn days_before_year(&self, year: i64) -> i64 {
        (year - 1) * DAYS_IN_COMMON_YEAR + self.leap_years_before(year)
    }

    fn epoch_offset(&self) -> i64 {
        FRENCH_REPUBLIC_EPOCH_OFFSET
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, GREGORIAN_CYCLE, DAYS_PER_GREGORIAN_CYCLE, |year| {
            self.days_before_year(year)
        })
    }

    fn week_length(&self) -> u8 {
        DAYS_IN_DECADE
    }
}
