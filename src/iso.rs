//! Proleptic Gregorian (ISO) helpers.
//!
//! Several calendars borrow the Gregorian leap rule or are anchored on ISO
//! month ends; these helpers work for any `i64` year.

use crate::consts::{
    CENTURY_CYCLE, DAYS_0001_TO_1970, DAYS_BEFORE_MONTH, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_ISO_MONTH,
};
use chrono::Weekday;

pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_ISO_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Count of leap years in `[1, year)`, negative for years before 1.
pub const fn leap_years_before(year: i64) -> i64 {
    let previous = year - 1;
    previous.div_euclid(LEAP_YEAR_CYCLE) - previous.div_euclid(CENTURY_CYCLE)
        + previous.div_euclid(GREGORIAN_CYCLE)
}

/// Days from 0001-01-01 to the first day of `year`.
pub const fn days_before_year(year: i64) -> i64 {
    (year - 1) * DAYS_IN_COMMON_YEAR + leap_years_before(year)
}

/// Days in the year before the first day of `month`.
pub const fn days_before_month(leap: bool, month: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_ISO_MONTH);

    let days = DAYS_BEFORE_MONTH[month as usize];
    if leap && month > FEBRUARY { days + 1 } else { days }
}

/// Maps a 1-based day of year of a Gregorian or Julian year to (month, day).
pub fn month_day_from_day_of_year(leap: bool, day_of_year: u16) -> (u8, u8) {
    let mut month = MAX_ISO_MONTH;
    while month > 1 && days_before_month(leap, month) >= day_of_year {
        month -= 1;
    }
    let day = day_of_year - days_before_month(leap, month);
    (month, u8::try_from(day).unwrap_or(u8::MAX))
}

/// Epoch day of an ISO date.
pub const fn to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    days_before_year(year) + days_before_month(is_leap_year(year), month) as i64 + day as i64
        - 1
        - DAYS_0001_TO_1970
}

/// Epoch day of the last day of an ISO month.
pub const fn last_day_of_month(year: i64, month: u8) -> i64 {
    to_epoch_day(year, month, days_in_month(year, month))
}

/// ISO weekday of an epoch day; 1970-01-01 was a Thursday.
pub fn weekday(epoch_day: i64) -> Weekday {
    // the index is always below 7
    Weekday::try_from(days_from_monday(epoch_day)).unwrap_or(Weekday::Mon)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn days_from_monday(epoch_day: i64) -> u8 {
    (epoch_day + 3).rem_euclid(7) as u8
}

/// Latest epoch day on or before `epoch_day` falling on `weekday`.
pub fn previous_or_same(epoch_day: i64, weekday: Weekday) -> i64 {
    let current = i64::from(days_from_monday(epoch_day));
    let target = i64::from(weekday.num_days_from_monday());
    epoch_day - (current - target).rem_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn chrono_epoch_day(year: i32, month: u32, day: u32) -> i64 {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        date.signed_duration_since(epoch).num_days()
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "negative odd",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years_before() {
        assert_eq!(leap_years_before(1), 0);
        assert_eq!(leap_years_before(5), 1);
        assert_eq!(leap_years_before(401), 97);
        assert_eq!(leap_years_before(0), -1);
        for year in -1000..1000 {
            let step = leap_years_before(year + 1) - leap_years_before(year);
            assert_eq!(step == 1, is_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn test_to_epoch_day_known() {
        assert_eq!(to_epoch_day(1970, 1, 1), 0);
        assert_eq!(to_epoch_day(1, 1, 1), -DAYS_0001_TO_1970);
        assert_eq!(to_epoch_day(284, 8, 29), -615_558);
        assert_eq!(to_epoch_day(1792, 9, 22), -64_748);
        assert_eq!(to_epoch_day(2024, 2, 29), chrono_epoch_day(2024, 2, 29));
        assert_eq!(to_epoch_day(-1165, 1, 1), chrono_epoch_day(-1165, 1, 1));
    }

    #[test]
    fn test_gregorian_cycle_matches_chrono() {
        use crate::consts::DAYS_PER_GREGORIAN_CYCLE;
        use crate::cycle::locate_year;

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        for epoch_day in (-800_000..800_000).step_by(997) {
            let date = epoch + chrono::Duration::days(epoch_day);
            let (year, day_of_year) = locate_year(
                epoch_day + DAYS_0001_TO_1970,
                GREGORIAN_CYCLE,
                DAYS_PER_GREGORIAN_CYCLE,
                days_before_year,
            );
            assert_eq!(year, i64::from(date.year()), "epoch day {epoch_day}");
            assert_eq!(day_of_year + 1, i64::from(date.ordinal()), "epoch day {epoch_day}");
        }
    }

    #[test]
    fn test_month_day_from_day_of_year() {
        assert_eq!(month_day_from_day_of_year(false, 1), (1, 1));
        assert_eq!(month_day_from_day_of_year(false, 59), (2, 28));
        assert_eq!(month_day_from_day_of_year(false, 60), (3, 1));
        assert_eq!(month_day_from_day_of_year(true, 60), (2, 29));
        assert_eq!(month_day_from_day_of_year(true, 366), (12, 31));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(0), Weekday::Thu);
        assert_eq!(weekday(-1), Weekday::Wed);
        assert_eq!(weekday(chrono_epoch_day(2011, 8, 28)), Weekday::Sun);
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        for epoch_day in -20..20 {
            let date = epoch + chrono::Duration::days(epoch_day);
            assert_eq!(weekday(epoch_day), date.weekday(), "epoch day {epoch_day}");
        }
    }

    #[test]
    fn test_previous_or_same() {
        let wednesday = chrono_epoch_day(2011, 8, 31);
        assert_eq!(previous_or_same(wednesday, Weekday::Wed), wednesday);
        assert_eq!(previous_or_same(wednesday, Weekday::Sun), wednesday - 3);
        assert_eq!(previous_or_same(wednesday, Weekday::Thu), wednesday - 6);
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), chrono_epoch_day(2024, 2, 29));
        assert_eq!(last_day_of_month(2023, 12), chrono_epoch_day(2023, 12, 31));
    }
}
