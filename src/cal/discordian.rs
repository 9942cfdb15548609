//! The Discordian calendar.
//!
//! Five seasons of 73 days (Chaos, Discord, Confusion, Bureaucracy and The
//! Aftermath) and a five-day week. Years of Our Lady of Discord are ISO years
//! plus 1166 and follow the Gregorian leap rule. In leap years St. Tib's Day
//! is inserted after Chaos 59; it belongs to no season and no week and is
//! represented as month 0, day 0.

use super::CalendarSystem;
use crate::consts::{
    DAYS_0001_TO_1970, DAYS_PER_GREGORIAN_CYCLE, GREGORIAN_CYCLE, MAX_YEAR, MIN_SINGLE_ERA_YEAR,
};
use crate::cycle::locate_year;
use crate::error::{CalendarError, Field};
use crate::iso;
use crate::types::CalendarKind;
use std::ops::RangeInclusive;

/// Difference between a Discordian year and the ISO year it overlaps
pub const DISCORDIAN_YEAR_OFFSET: i64 = 1166;

const MONTHS_IN_YEAR: u8 = 5;
const DAYS_IN_MONTH: u8 = 73;
const DAYS_IN_WEEK: u8 = 5;
/// Day of year of St. Tib's Day in a leap year
const ST_TIBS_DAY_OF_YEAR: u16 = 60;
/// Month and day representing St. Tib's Day
const ST_TIBS: (u8, u8) = (0, 0);
const LAST_CHAOS_BEFORE_ST_TIBS: (u8, u8) = (1, 59);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discordian;

impl Discordian {
    const fn leap(year: i64) -> bool {
        iso::is_leap_year(year - DISCORDIAN_YEAR_OFFSET)
    }

    /// True for the month 0 day 0 pair naming St. Tib's Day.
    pub const fn is_st_tibs_day(month: u8, day: u8) -> bool {
        month == ST_TIBS.0 && day == ST_TIBS.1
    }
}

impl CalendarSystem for Discordian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Discordian
    }

    fn is_leap_year(&self, year: i64) -> bool {
        Self::leap(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        iso::leap_years_before(year - DISCORDIAN_YEAR_OFFSET)
            - iso::leap_years_before(1 - DISCORDIAN_YEAR_OFFSET)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        if month == ST_TIBS.0 {
            u8::from(Self::leap(year))
        } else {
            DAYS_IN_MONTH
        }
    }

    fn days_in_year(&self, year: i64) -> u16 {
        if Self::leap(year) { 366 } else { 365 }
    }

    fn days_before_month(&self, year: i64, month: u8) -> u16 {
        if month == ST_TIBS.0 {
            return ST_TIBS_DAY_OF_YEAR - 1;
        }
        let days = (u16::from(month) - 1) * u16::from(DAYS_IN_MONTH);
        if month > 1 && Self::leap(year) {
            days + 1
        } else {
            days
        }
    }

    fn month_day_from_day_of_year(&self, year: i64, day_of_year: u16) -> (u8, u8) {
        let mut day_of_year = day_of_year;
        if Self::leap(year) {
            if day_of_year == ST_TIBS_DAY_OF_YEAR {
                return ST_TIBS;
            }
            if day_of_year > ST_TIBS_DAY_OF_YEAR {
                day_of_year -= 1;
            }
        }
        let zero_based = day_of_year - 1;
        let month_length = u16::from(DAYS_IN_MONTH);
        (
            u8::try_from(zero_based / month_length + 1).unwrap_or(MONTHS_IN_YEAR),
            u8::try_from(zero_based % month_length + 1).unwrap_or(DAYS_IN_MONTH),
        )
    }

    fn days_before_year(&self, year: i64) -> i64 {
        iso::days_before_year(year - DISCORDIAN_YEAR_OFFSET)
            - iso::days_before_year(1 - DISCORDIAN_YEAR_OFFSET)
    }

    fn epoch_offset(&self) -> i64 {
        DAYS_0001_TO_1970 - iso::days_before_year(1 - DISCORDIAN_YEAR_OFFSET)
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        locate_year(day, GREGORIAN_CYCLE, DAYS_PER_GREGORIAN_CYCLE, |year| {
            self.days_before_year(year)
        })
    }

    fn week_length(&self) -> u8 {
        DAYS_IN_WEEK
    }

    fn year_range(&self) -> RangeInclusive<i32> {
        MIN_SINGLE_ERA_YEAR..=MAX_YEAR
    }

    fn day_of_year(&self, year: i64, month: u8, day: u8) -> u16 {
        if Self::is_st_tibs_day(month, day) {
            ST_TIBS_DAY_OF_YEAR
        } else {
            let day_of_year = self.days_before_month(year, month) + u16::from(day);
            if month == 1 && day_of_year >= ST_TIBS_DAY_OF_YEAR && Self::leap(year) {
                day_of_year + 1
            } else {
                day_of_year
            }
        }
    }

    fn check_date(&self, year: i64, month: u8, day: u8) -> Result<(), CalendarError> {
        if month == ST_TIBS.0 || day == ST_TIBS.1 {
            return if Self::is_st_tibs_day(month, day) && Self::leap(year) {
                Ok(())
            } else if Self::is_st_tibs_day(month, day) {
                Err(CalendarError::InvalidDate(format!(
                    "St. Tib's Day does not exist in {year}, which is not a leap year"
                )))
            } else if month == ST_TIBS.0 {
                Err(CalendarError::InvalidDate(format!(
                    "month 0 is only valid with day 0 (St. Tib's Day), got day {day}"
                )))
            } else {
                Err(CalendarError::out_of_range(Field::Day, day, 1, DAYS_IN_MONTH))
            };
        }
        if month > MONTHS_IN_YEAR {
            return Err(CalendarError::out_of_range(Field::Month, month, 0, MONTHS_IN_YEAR));
        }
        if day > DAYS_IN_MONTH {
            return Err(CalendarError::out_of_range(Field::Day, day, 0, DAYS_IN_MONTH));
        }
        Ok(())
    }

    /// St. Tib's Day survives only in leap years and otherwise falls back to
    /// Chaos 59.
    fn resolve_previous_valid(&self, year: i64, month: u8, day: u8) -> (u8, u8) {
        if Self::is_st_tibs_day(month, day) {
            return if Self::leap(year) {
                ST_TIBS
            } else {
                LAST_CHAOS_BEFORE_ST_TIBS
            };
        }
        let month = month.clamp(1, MONTHS_IN_YEAR);
        (month, day.clamp(1, DAYS_IN_MONTH))
    }

    fn week_day_of_year(&self, year: i64, month: u8, day: u8) -> Option<u16> {
        if Self::is_st_tibs_day(month, day) {
            return None;
        }
        let day_of_year = self.day_of_year(year, month, day);
        if Self::leap(year) && day_of_year > ST_TIBS_DAY_OF_YEAR {
            Some(day_of_year - 1)
        } else {
            Some(day_of_year)
        }
    }

    fn arithmetic_month_day(&self, _year: i64, month: u8, day: u8) -> (u8, u8) {
        if Self::is_st_tibs_day(month, day) {
            LAST_CHAOS_BEFORE_ST_TIBS
        } else {
            (month, day)
        }
    }

    /// St. Tib's Day sits half a day after Chaos 59.
    fn packed_month_day(&self, _year: i64, month: u8, day: u8) -> (u8, u16) {
        if Self::is_st_tibs_day(month, day) {
            (1, u16::from(LAST_CHAOS_BEFORE_ST_TIBS.1) * 2 + 1)
        } else {
            (month, u16::from(day) * 2)
        }
    }
}
