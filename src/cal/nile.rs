//! Year structure shared by the Coptic and Ethiopic calendars.
//!
//! Twelve months of 30 days followed by an epagomenal month of 5 days, 6 in
//! leap years. Leap years are those with `year mod 4 == 3`, so the leap day
//! falls just before a year divisible by 4 begins.

use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_PER_JULIAN_CYCLE};

pub(crate) const MONTHS_IN_YEAR: u8 = 13;
const DAYS_IN_MONTH: u8 = 30;
const EPAGOMENAL_DAYS: u8 = 5;

pub(crate) const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 3
}

pub(crate) const fn leap_years_before(year: i64) -> i64 {
    year.div_euclid(4)
}

pub(crate) const fn days_before_year(year: i64) -> i64 {
    (year - 1) * DAYS_IN_COMMON_YEAR + leap_years_before(year)
}

pub(crate) const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub(crate) const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == MONTHS_IN_YEAR {
        EPAGOMENAL_DAYS + is_leap_year(year) as u8
    } else {
        DAYS_IN_MONTH
    }
}

pub(crate) const fn days_before_month(month: u8) -> u16 {
    (month as u16 - 1) * DAYS_IN_MONTH as u16
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn month_day_from_day_of_year(day_of_year: u16) -> (u8, u8) {
    let zero_based = day_of_year - 1;
    let month_length = DAYS_IN_MONTH as u16;
    (
        (zero_based / month_length + 1) as u8,
        (zero_based % month_length + 1) as u8,
    )
}

/// Year and zero-based day of year, `day` counting from the first day of
/// year 1. The leap year closes each 4-year cycle at position 3, which the
/// `+ 1463` bias accounts for.
pub(crate) const fn locate_year(day: i64) -> (i64, i64) {
    let year = (day * 4 + 1463).div_euclid(DAYS_PER_JULIAN_CYCLE);
    (year, day - days_before_year(year))
}
