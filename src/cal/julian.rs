use super::CalendarSystem;
use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_PER_JULIAN_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP};
use crate::consts::{DAYS_IN_MONTH, MAX_ISO_MONTH};
use crate::iso;
use crate::types::CalendarKind;

/// Days from Julian 0001-01-01 (ISO 0000-12-30) to 1970-01-01
pub const JULIAN_EPOCH_OFFSET: i64 = 719_164;

/// The proleptic Julian calendar: Gregorian months, a leap year every 4 years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Julian;

impl CalendarSystem for Julian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Julian
    }

    fn is_leap_year(&self, year: i64) -> bool {
        year.rem_euclid(4) == 0
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        (year - 1).div_euclid(4)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        MAX_ISO_MONTH
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[usize::from(month)]
        }
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if self.is_leap_year(year) { 366 } else { 365 }
    }

    fn days_before_month(&self, year: i64, month: u8) -> u16 {
        iso::days_before_month(self.is_leap_year(year), month)
    }

    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8) {
        iso::month_day_from_day_of_year(self.is_leap_year(year), day_of_year)
    }

    fn days_before_year(&self, year: i64) -> i64 {
        (year - 1) * DAYS_IN_COMMON_YEAR + self.leap_years_before(year)
    }

    fn epoch_offset(&self) -> i64 {
        JULIAN_EPOCH_OFFSET
    }

    /// Three common years then a leap year per 4-year cycle; the last day of
    /// the cycle is the 366th day of its fourth year.
    fn locate_year(&self, day: i64) -> (i64, i64) {
        let cycle = day.div_euclid(DAYS_PER_JULIAN_CYCLE);
        let day_of_cycle = day.rem_euclid(DAYS_PER_JULIAN_CYCLE);
        let year_of_cycle = (day_of_cycle / DAYS_IN_COMMON_YEAR).min(3);
        (
            cycle * 4 + year_of_cycle + 1,
            day_of_cycle - year_of_cycle * DAYS_IN_COMMON_YEAR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(Julian.to_epoch_day(1, 1, 1), iso::to_epoch_day(0, 12, 30));
        assert_eq!(Julian.to_epoch_day(1969, 12, 19), 0);
        assert_eq!(Julian.from_epoch_day(0), (1969, 12, 19));
    }

    #[test]
    fn test_gregorian_reform() {
        assert_eq!(Julian.to_epoch_day(1582, 10, 5), iso::to_epoch_day(1582, 10, 15));
        assert_eq!(Julian.from_epoch_day(iso::to_epoch_day(1582, 10, 14)), (1582, 10, 4));
    }

    #[test]
    fn test_century_leap_day() {
        assert!(Julian.is_leap_year(1900));
        assert_eq!(Julian.days_in_month(1900, 2), 29);
        assert_eq!(Julian.to_epoch_day(1900, 2, 29), iso::to_epoch_day(1900, 3, 13));
    }

    #[test]
    fn test_locate_year_cycle_end() {
        assert_eq!(Julian.locate_year(1460), (4, 365));
        assert_eq!(Julian.locate_year(1461), (5, 0));
        assert_eq!(Julian.locate_year(-1), (0, 365));
    }

    #[test]
    fn test_round_trip_epoch_days() {
        for epoch_day in -730_000..-710_000 {
            let (year, month, day) = Julian.from_epoch_day(epoch_day);
            assert_eq!(Julian.to_epoch_day(year, month, day), epoch_day);
        }
    }
}
