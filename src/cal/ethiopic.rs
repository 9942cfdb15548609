use super::{nile, CalendarSystem};
use crate::types::CalendarKind;

/// Days from Ethiopic 0001-01-01 (ISO 0008-08-27) to 1970-01-01
pub const ETHIOPIC_EPOCH_OFFSET: i64 = 716_367;

/// The Ethiopic calendar, counting years of the Incarnation.
///
/// Same year structure as the Coptic calendar, 276 years earlier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ethiopic;

impl CalendarSystem for Ethiopic {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Ethiopic
    }

    fn is_leap_year(&self, year: i64) -> bool {
        nile::is_leap_year(year)
    }

    fn leap_years_before(&self, year: i64) -> i64 {
        nile::leap_years_before(year)
    }

    fn months_in_year(&self, _year: i64) -> u8 {
        nile::MONTHS_IN_YEAR
    }

    fn days_in_month(&self, year: i64, month: u8) -> u8 {
        nile::days_in_month(year, month)
    }

    fn days_in_year(&self, year: i64) -> u16 {
        nile::days_in_year(year)
    }

    fn days_before_month(&self, _year: i64, month: u8) -> u16 {
        nile::days_before_month(month)
    }

    fn month_day_from_day_of_year(&self, _year: i64, day_of_year: u16) -> (u8, u8) {
        nile::month_day_from_day_of_year(day_of_year)
    }

    fn days_before_year(&self, year: i64) -> i64 {
        nile::days_before_year(year)
    }

    fn epoch_offset(&self) -> i64 {
        ETHIOPIC_EPOCH_OFFSET
    }

    fn locate_year(&self, day: i64) -> (i64, i64) {
        nile::locate_year(day)
    }
}
