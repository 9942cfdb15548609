//! The International Fixed calendar.
//!
//! Thirteen months of four weeks, with Sol between June and July. Year Day is
//! the 29th day of the last month and Leap Day the 29th day of June, so the
//! Gregorian leap rule is kept while every other day falls on the same
//! weekday every year.

use super::CalendarSystem;
use crate::consts::{
    DAYS_0001_TO_1970, DAYS_IN_COMMON_YEAR, DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE, MAX_YEAR,
    MIN_SINGLE_ERA_YEAR,
};
use crate::cycle::locate_year;
use crate::iso;
use crate::types::CalendarKind;
use std::ops::RangeInclusive;

/// Days from International Fixed 0001-01-01 (ISO 0001-01-01) to 1970-01-01
pub const INTERNATIONAL_FIXED_EPOCH_OFFSET: i64 = DAYS_0001_TO_1970;

const MONTHS_IN_YEAR: u8 = 13;
const DAYS_IN_MONTH: u8 = 28;
const DAYS_IN_LONG_MONTH: u8 = 29;
const LEAP_DAY_MONTH: u8 = 6;
/// Zero-based day of year of Leap Day (June 29)
const LEAP_DAY_INDEX: u16 = LEAP_DAY_MONTH as u16 * DAYS_IN_MONTH as u16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InternationalFixed;

impl CalendarSystem for InternationalFixed {
    fn kind(&self) -> CalendarKind {
        CalendarKind::InternationalFixed
    }

    fn is_leap_year(&self, year: i64) -> bool {
        iso::is_leap_year(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        iso::leap_years_before(year)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == MONTHS_IN_YEAR || (month == LEAP_DAY_MONTH && iso::is_leap_year(year)) {
            DAYS_IN_LONG_MONTH
        } else {
            DAYS_IN_MONTH
        }
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if iso::is_leap_year(year) { 366 } else { 365 }
    }

    fn days_before_month(&self, year: i64, month: u8) -> u16 {
        let days = (u16::from(month) - 1) * u16::from(DAYS_IN_MONTH);
        if month > LEAP_DAY_MONTH && iso::is_leap_year(year) {
            days + 1
        } else {
            days
        }
    }

    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8) {
        let mut zero_based = day_of_year - 1;
        if iso::is_leap_year(year) {
            if zero_based == LEAP_DAY_INDEX {
                return (LEAP_DAY_MONTH, DAYS_IN_LONG_MONTH);
            }
            if zero_based > LEAP_DAY_INDEX {
                zero_based -= 1;
            }
        }
        // Year Day spills one past the twelfth multiple of 28
        let index = (zero_based / u16::from(DAYS_IN_MONTH)).min(u16::from(MONTHS_IN_YEAR) - 1);
        let day = zero_based - index * u16::from(DAYS_IN_MONTH) + 1;
        (
            u8::try_from(index + 1).unwrap_or(MONTHS_IN_YEAR),
            u8::try_from(day).unwrap_or(DAYS_IN_LONG_MONTH),
        )
    }

    fn days_before_year(&self, year: i64) -> i64 {
        (year - 1) * DAYS_IN_COMMON_YEAR + iso::leap_years_before(year)
    }

    fn epoch_offset(&self) -> i64 {
        INTERNATIONAL_FIXED_EPOCH_OFFSET
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, GREGORIAN_CYCLE, DAYS_PER_GREGORIAN_CYCLE, iso::days_before_year)
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        MIN_SINGLE_ERA_YEAR..=MAX_YEAR
    }
}
