//! The Pax calendar.
//!
//! Thirteen months of 28 days. Leap years insert a 7-day month called Pax
//! before December, so a leap year has 14 months and December moves from
//! month 13 to month 14. Every year and every month starts on a Sunday.

use super::CalendarSystem;
use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE};
use crate::cycle::locate_year;
use crate::types::CalendarKind;

/// Days from Pax 0001-01-01 (ISO 0000-12-31) to 1970-01-01
pub const PAX_EPOCH_OFFSET: i64 = 719_163;

const MONTHS_IN_YEAR: u8 = 13;
const DAYS_IN_MONTH: u8 = 28;
const DAYS_IN_LEAP_WEEK: u8 = 7;
const DAYS_IN_COMMON_YEAR: i64 = 364;
/// Leap years in one 400-year cycle
const LEAP_YEARS_PER_CYCLE: i64 = 71;
/// Zero-based day of year on which the Pax week starts
const PAX_WEEK_START: u16 = 12 * DAYS_IN_MONTH as u16;
/// Zero-based day of year on which December starts in a leap year
const LEAP_DECEMBER_START: u16 = PAX_WEEK_START + DAYS_IN_LEAP_WEEK as u16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pax;

/// Leap years in `[0, year)`.
///
/// Per century: the years whose last two digits are divisible by 6 (17 of
/// them, including 00) plus the 99 year; the 00 year is dropped again when
/// divisible by 400.
const fn leap_years_from_zero(year: i64) -> i64 {
    let centuries = year.div_euclid(100);
    let rest = year.rem_euclid(100);
    18 * centuries + (rest + 5) / 6 - (year + 399).div_euclid(400)
}

impl Pax {
    const fn leap(year: i64) -> bool {
        let last_two = year.rem_euclid(100);
        last_two == 99 || (last_two % 6 == 0 && year.rem_euclid(400) != 0)
    }
}

impl CalendarSystem for Pax {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Pax
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::leap(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        // year 0 is divisible by 400 and never leap, so [0, 1) is empty
        leap_years_from_zero(year)
    }

    fn months_in_year(&self, year: i64) -> u8 {
        MONTHS_IN_YEAR + u8::from(Self::leap(year))
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == MONTHS_IN_YEAR && Self::leap(year) {
            DAYS_IN_LEAP_WEEK
        } else {
            DAYS_IN_MONTH
        }
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if Self::leap(year) { 371 } else { 364 }
    }

    fn days_before_month(&self, _year: i64, month: u8) -> u16 {
        if month > MONTHS_IN_YEAR {
            LEAP_DECEMBER_START
        } else {
            (u16::from(month) - 1) * u16::from(DAYS_IN_MONTH)
        }
    }

    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8) {
        let zero_based = day_of_year - 1;
        let (month, start) = if Self::leap(year) && zero_based >= PAX_WEEK_START {
            if zero_based < LEAP_DECEMBER_START {
                (MONTHS_IN_YEAR, PAX_WEEK_START)
            } else {
                (MONTHS_IN_YEAR + 1, LEAP_DECEMBER_START)
            }
        } else {
            let index = zero_based / u16::from(DAYS_IN_MONTH);
            (
                u8::try_from(index + 1).unwrap_or(MONTHS_IN_YEAR),
                index * u16::from(DAYS_IN_MONTH),
            )
        };
        (month, u8::try_from(zero_based - start + 1).unwrap_or(DAYS_IN_MONTH))
    }

    fn days_before_year(&self, year: i64) -> i64 {
        (year - 1) * DAYS_IN_COMMON_YEAR + i64::from(DAYS_IN_LEAP_WEEK) * leap_years_from_zero(year)
    }

    fn epoch_offset(&self) -> i64 {
        PAX_EPOCH_OFFSET
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, GREGORIAN_CYCLE, DAYS_PER_GREGORIAN_CYCLE, |year| {
            self.days_before_year(year)
        })
    }

    /// December keeps its identity when the leap week appears or disappears.
    fn resolve_year_change(&self, from_year: i64, to_year: i64, month: u8, day: u8) -> (u8, u8) {
        let month = match (Self::leap(from_year), Self::leap(to_year)) {
            (false, true) if month == MONTHS_IN_YEAR => MONTHS_IN_YEAR + 1,
            (true, false) if month == MONTHS_IN_YEAR + 1 => MONTHS_IN_YEAR,
            _ => month,
        };
        self.resolve_previous_valid(to_year, month, day)
    }

    fn packed_month_day(&self, year: i64, month: u8, day: u8) -> (u8, u16) {
        let aligned = if month == MONTHS_IN_YEAR && !Self::leap(year) {
            MONTHS_IN_YEAR + 1
        } else {
            month
        };
        (aligned, u16::from(day) * 2)
    }

    fn months_before_year(&self, year: i64) -> i64 {
        year * i64::from(MONTHS_IN_YEAR) + leap_years_from_zero(year)
    }

    fn year_month_from_proleptic_month(&self, proleptic_month: i64) -> (i64, u8) {
        let months_per_cycle = GREGORIAN_CYCLE * i64::from(MONTHS_IN_YEAR) + LEAP_YEARS_PER_CYCLE;
        let mut year = (proleptic_month * GREGORIAN_CYCLE).div_euclid(months_per_cycle);
        while self.months_before_year(year) > proleptic_month {
            year -= 1;
        }
        while self.months_before_year(year + 1) <= proleptic_month {
            year += 1;
        }
        let month = proleptic_month - self.months_before_year(year) + 1;
        (year, u8::try_from(month).unwrap_or(MONTHS_IN_YEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso;
    use chrono::Weekday;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2012,
                is_leap: true,
                description: "last two digits divisible by 6",
            },
            TestCase {
                year: 1900,
                is_leap: true,
                description: "00 not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: false,
                description: "divisible by 400",
            },
            TestCase {
                year: 1999,
                is_leap: true,
                description: "99 special case",
            },
            TestCase {
                year: 2013,
                is_leap: false,
                description: "not divisible by 6",
            },
            TestCase {
                year: 2098,
                is_leap: false,
                description: "98 not divisible by 6",
            },
        ];

        for case in &cases {
            assert_eq!(
                Pax.is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years_before_matches_rule() {
        for year in -1000..1000 {
            let step = Pax.leap_years_before(year + 1) - Pax.leap_years_before(year);
            assert_eq!(step == 1, Pax.is_leap_year(year), "year {year}");
        }
        assert_eq!(Pax.leap_years_before(1), 0);
        assert_eq!(Pax.leap_years_before(401), LEAP_YEARS_PER_CYCLE);
    }

    #[test]
    fn test_epoch_and_sunday_starts() {
        assert_eq!(Pax.to_epoch_day(1, 1, 1), iso::to_epoch_day(0, 12, 31));
        for year in 1900..2100 {
            let start = Pax.to_epoch_day(year, 1, 1);
            assert_eq!(iso::weekday(start), Weekday::Sun, "year {year}");
        }
    }

    #[test]
    fn test_leap_year_month_table() {
        assert_eq!(Pax.months_in_year(2012), 14);
        assert_eq!(Pax.months_in_year(2013), 13);
        assert_eq!(Pax.days_in_month(2012, 13), 7);
        assert_eq!(Pax.days_in_month(2012, 14), 28);
        assert_eq!(Pax.days_in_month(2013, 13), 28);
        assert_eq!(Pax.month_day_from_day_of_year(2012, 337), (13, 1));
        assert_eq!(Pax.month_day_from_day_of_year(2012, 343), (13, 7));
        assert_eq!(Pax.month_day_from_day_of_year(2012, 344), (14, 1));
        assert_eq!(Pax.month_day_from_day_of_year(2012, 371), (14, 28));
        assert_eq!(Pax.month_day_from_day_of_year(2013, 364), (13, 28));
    }

    #[test]
    fn test_resolve_year_change_keeps_december() {
        assert_eq!(Pax.resolve_year_change(2013, 2012, 13, 20), (14, 20));
        assert_eq!(Pax.resolve_year_change(2012, 2013, 14, 20), (13, 20));
        // the Pax week itself becomes December
        assert_eq!(Pax.resolve_year_change(2012, 2013, 13, 5), (13, 5));
        assert_eq!(Pax.resolve_year_change(2012, 2018, 13, 5), (13, 5));
    }

    #[test]
    fn test_proleptic_month_inverse() {
        for year in -450..450 {
            for month in 1..=Pax.months_in_year(year) {
                let proleptic = Pax.months_before_year(year) + i64::from(month) - 1;
                assert_eq!(Pax.year_month_from_proleptic_month(proleptic), (year, month));
            }
        }
    }

    #[test]
    fn test_round_trip_epoch_days() {
        for epoch_day in (-900_000..900_000).step_by(17) {
            let (year, month, day) = Pax.from_epoch_day(epoch_day);
            assert_eq!(Pax.to_epoch_day(year, month, day), epoch_day);
        }
    }
}
