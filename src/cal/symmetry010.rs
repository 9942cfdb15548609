//! The Symmetry010 calendar.
//!
//! Each quarter has months of 30, 31 and 30 days, so every quarter is exactly
//! 13 weeks long and every year starts on a Monday. A leap week is appended
//! to December in 52 out of every 293 years.

use super::CalendarSystem;
use crate::consts::DAYS_0001_TO_1970;
use crate::cycle::locate_year;
use crate::types::CalendarKind;

/// Days from Symmetry010 0001-01-01 (ISO 0001-01-01) to 1970-01-01
pub const SYMMETRY010_EPOCH_OFFSET: i64 = DAYS_0001_TO_1970;

const MONTHS_IN_YEAR: u8 = 12;
const DAYS_IN_QUARTER: u16 = 91;
/// Days before each month of a quarter
const DAYS_BEFORE_MONTH_OF_QUARTER: [u16; 3] = [0, 30, 61];
const DAYS_IN_MONTH_OF_QUARTER: [u8; 3] = [30, 31, 30];
const DAYS_IN_LEAP_DECEMBER: u8 = 37;
const DAYS_IN_COMMON_YEAR: i64 = 364;
const DAYS_IN_LEAP_WEEK: i64 = 7;
/// Zero-based day of year on which December starts
const DECEMBER_START: u16 = 3 * DAYS_IN_QUARTER + 30 + 31;

const CYCLE_YEARS: i64 = 293;
const LEAP_YEARS_PER_CYCLE: i64 = 52;
const LEAP_RULE_BIAS: i64 = 146;
const DAYS_PER_CYCLE: i64 =
    CYCLE_YEARS * DAYS_IN_COMMON_YEAR + LEAP_YEARS_PER_CYCLE * DAYS_IN_LEAP_WEEK;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Symmetry010;

impl Symmetry010 {
    const fn leap(year: i64) -> bool {
        (LEAP_YEARS_PER_CYCLE * year + LEAP_RULE_BIAS).rem_euclid(CYCLE_YEARS)
            < LEAP_YEARS_PER_CYCLE
    }

    const fn quarter_position(month: u8) -> (u16, usize) {
        let index = month as u16 - 1;
        (index / 3, (index % 3) as usize)
    }
}

impl CalendarSystem for Symmetry010 {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Symmetry010
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::leap(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        (LEAP_YEARS_PER_CYCLE * (year - 1) + LEAP_RULE_BIAS).div_euclid(CYCLE_YEARS)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == MONTHS_IN_YEAR && Self::leap(year) {
            return DAYS_IN_LEAP_DECEMBER;
        }
        let (_, position) = Self::quarter_position(month);
        DAYS_IN_MONTH_OF_QUARTER[position]
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if Self::leap(year) { 371 } else { 364 }
    }

    fn days_before_month(&self, _year: i64, month: u8) -> u16 {
        let (quarter, position) = Self::quarter_position(month);
        quarter * DAYS_IN_QUARTER + DAYS_BEFORE_MONTH_OF_QUARTER[position]
    }

    fn month_day_from_day_of_year(&self, _year: i64, day_of_year: u16) -> (u8, u8) {
        let zero_based = day_of_year - 1;
        // the leap week extends December past the end of the fourth quarter
        let (month, start) = if zero_based >= DECEMBER_START {
            (MONTHS_IN_YEAR, DECEMBER_START)
        } else {
            let quarter = zero_based / DAYS_IN_QUARTER;
            let offset = zero_based % DAYS_IN_QUARTER;
            let position = DAYS_BEFORE_MONTH_OF_QUARTER
                .partition_point(|&start| start <= offset)
                - 1;
            let month = quarter * 3 + u16::try_from(position).unwrap_or(0) + 1;
            (
                u8::try_from(month).unwrap_or(MONTHS_IN_YEAR),
                quarter * DAYS_IN_QUARTER + DAYS_BEFORE_MONTH_OF_QUARTER[position],
            )
        };
        (month, u8::try_from(zero_based - start + 1).unwrap_or(DAYS_IN_LEAP_DECEMBER))
    }

    fn days_before_year(&self, year: i64) -> i64 {
        (year - 1) * DAYS_IN_COMMON_YEAR + DAYS_IN_LEAP_WEEK * self.leap_years_before(year)
    }

    fn epoch_offset(&self) -> i64 {
        SYMMETRY010_EPOCH_OFFSET
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, CYCLE_YEARS, DAYS_PER_CYCLE, |year| self.days_before_year(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso;
    use chrono::Weekday;

    #[test]
    fn test_leap_years() {
        assert!(Symmetry010.is_leap_year(2015));
        assert!(!Symmetry010.is_leap_year(2016));
        assert!(!Symmetry010.is_leap_year(2020));
        assert!(Symmetry010.is_leap_year(2021));
        assert_eq!(Symmetry010.days_in_month(2015, 12), 37);
        assert_eq!(Symmetry010.days_in_month(2016, 12), 30);
        let leap_years = (1..=CYCLE_YEARS).filter(|&y| Symmetry010.is_leap_year(y)).count();
        assert_eq!(leap_years, 52);
    }

    #[test]
    fn test_leap_years_before_matches_rule() {
        for year in -600..600 {
            let step = Symmetry010.leap_years_before(year + 1) - Symmetry010.leap_years_before(year);
            assert_eq!(step == 1, Symmetry010.is_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn test_month_table() {
        struct TestCase {
            month: u8,
            days_before: u16,
            length: u8,
        }

        let cases = [
            TestCase {
                month: 1,
                days_before: 0,
                length: 30,
            },
            TestCase {
                month: 2,
                days_before: 30,
                length: 31,
            },
            TestCase {
                month: 3,
                days_before: 61,
                length: 30,
            },
            TestCase {
                month: 4,
                days_before: 91,
                length: 30,
            },
            TestCase {
                month: 8,
                days_before: 212,
                length: 31,
            },
            TestCase {
                month: 12,
                days_before: 334,
                length: 30,
            },
        ];

        for case in &cases {
            assert_eq!(Symmetry010.days_before_month(2016, case.month), case.days_before);
            assert_eq!(Symmetry010.days_in_month(2016, case.month), case.length);
            let start = Symmetry010.month_day_from_day_of_year(2016, case.days_before + 1);
            assert_eq!(start, (case.month, 1));
            let end = Symmetry010
                .month_day_from_day_of_year(2016, case.days_before + u16::from(case.length));
            assert_eq!(end, (case.month, case.length));
        }
    }

    #[test]
    fn test_leap_week_transition() {
        let last_ordinary = Symmetry010.to_epoch_day(2015, 12, 30);
        assert_eq!(Symmetry010.from_epoch_day(last_ordinary + 1), (2015, 12, 31));
        assert_eq!(Symmetry010.from_epoch_day(last_ordinary + 7), (2015, 12, 37));
        assert_eq!(Symmetry010.from_epoch_day(last_ordinary + 8), (2016, 1, 1));
        assert_eq!(Symmetry010.to_epoch_day(2016, 1, 1), iso::to_epoch_day(2016, 1, 4));
    }

    #[test]
    fn test_years_start_on_monday() {
        assert_eq!(Symmetry010.to_epoch_day(1, 1, 1), iso::to_epoch_day(1, 1, 1));
        for year in (-2000..2500).step_by(13) {
            let start = Symmetry010.to_epoch_day(year, 1, 1);
            assert_eq!(iso::weekday(start), Weekday::Mon, "year {year}");
        }
    }

    #[test]
    fn test_round_trip_epoch_days() {
        for epoch_day in (-800_000..800_000).step_by(11) {
            let (year, month, day) = Symmetry010.from_epoch_day(epoch_day);
            assert_eq!(Symmetry010.to_epoch_day(year, month, day), epoch_day);
        }
    }
}
