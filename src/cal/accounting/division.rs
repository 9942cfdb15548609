use crate::error::{CalendarError, Field};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Weeks in an accounting year without the leap week
pub const WEEKS_IN_YEAR: u8 = 52;

const PATTERN_445: [u8; 12] = [0, 4, 8, 13, 17, 21, 26, 30, 34, 39, 43, 47];
const PATTERN_454: [u8; 12] = [0, 4, 9, 13, 17, 22, 26, 30, 35, 39, 43, 48];
const PATTERN_544: [u8; 12] = [0, 5, 9, 13, 18, 22, 26, 31, 35, 39, 44, 48];
const THIRTEEN_BY_FOUR: [u8; 13] = [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48];

/// How the 52 weeks of an accounting year are split into months.
///
/// The tables hold the weeks elapsed before each month. A leap week, when the
/// year has one, is added to the designated month and shifts the start of
/// every later month by one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum AccountingYearDivision {
    /// Quarters of two 4-week months followed by a 5-week month.
    #[display(fmt = "QUARTERS_OF_PATTERN_4_4_5_WEEKS")]
    #[serde(rename = "QUARTERS_OF_PATTERN_4_4_5_WEEKS")]
    QuartersOfPattern445Weeks,
    /// Quarters of a 4-week, a 5-week and a 4-week month.
    #[display(fmt = "QUARTERS_OF_PATTERN_4_5_4_WEEKS")]
    #[serde(rename = "QUARTERS_OF_PATTERN_4_5_4_WEEKS")]
    QuartersOfPattern454Weeks,
    /// Quarters of a 5-week month followed by two 4-week months.
    #[display(fmt = "QUARTERS_OF_PATTERN_5_4_4_WEEKS")]
    #[serde(rename = "QUARTERS_OF_PATTERN_5_4_4_WEEKS")]
    QuartersOfPattern544Weeks,
    /// Thirteen months of 4 weeks.
    #[display(fmt = "THIRTEEN_EVEN_MONTHS_OF_4_WEEKS")]
    #[serde(rename = "THIRTEEN_EVEN_MONTHS_OF_4_WEEKS")]
    ThirteenEvenMonthsOf4Weeks,
}

impl AccountingYearDivision {
    pub const ALL: [Self; 4] = [
        Self::QuartersOfPattern445Weeks,
        Self::QuartersOfPattern454Weeks,
        Self::QuartersOfPattern544Weeks,
        Self::ThirteenEvenMonthsOf4Weeks,
    ];

    const fn elapsed_weeks(self) -> &'static [u8] {
        match self {
            Self::QuartersOfPattern445Weeks => &PATTERN_445,
            Self::QuartersOfPattern454Weeks => &PATTERN_454,
            Self::QuartersOfPattern544Weeks => &PATTERN_544,
            Self::ThirteenEvenMonthsOf4Weeks => &THIRTEEN_BY_FOUR,
        }
    }

    pub const fn months_in_year(self) -> u8 {
        match self {
            Self::ThirteenEvenMonthsOf4Weeks => 13,
            _ => 12,
        }
    }

    /// Weeks before `month`, where `months_in_year + 1` is the end of the
    /// year. No validation.
    pub(crate) fn start_week(self, month: u8, leap_week_in_month: u8) -> u8 {
        let table = self.elapsed_weeks();
        let base = table
            .get(usize::from(month) - 1)
            .copied()
            .unwrap_or(WEEKS_IN_YEAR);
        base + u8::from(leap_week_in_month != 0 && month > leap_week_in_month)
    }

    /// Month containing the zero-based week of the year. No validation.
    pub(crate) fn month_of_week(self, weeks: u8, leap_week_in_month: u8) -> u8 {
        let table = self.elapsed_weeks();
        let candidate = table.partition_point(|&start| start <= weeks);
        let month = u8::try_from(candidate).unwrap_or(self.months_in_year());
        // the leap week pushes the candidate month one week later
        if leap_week_in_month != 0 && month > leap_week_in_month && weeks == table[candidate - 1] {
            month - 1
        } else {
            month
        }
    }

    fn check_month(self, month: u8) -> Result<(), CalendarError> {
        let months = self.months_in_year();
        if (1..=months).contains(&month) {
            Ok(())
        } else {
            Err(CalendarError::out_of_range(Field::Month, month, 1, months))
        }
    }

    fn check_leap_week_month(self, leap_week_in_month: u8) -> Result<(), CalendarError> {
        let months = self.months_in_year();
        if leap_week_in_month <= months {
            Ok(())
        } else {
            Err(CalendarError::out_of_range(
                Field::Month,
                leap_week_in_month,
                0,
                months,
            ))
        }
    }

    /// Weeks in `month`, including the leap week if it falls in that month.
    /// A `leap_week_in_month` of 0 means the year has no leap week.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for an invalid month.
    pub fn weeks_in_month(self, month: u8, leap_week_in_month: u8) -> Result<u8, CalendarError> {
        self.check_month(month)?;
        self.check_leap_week_month(leap_week_in_month)?;
        Ok(self.start_week(month + 1, leap_week_in_month)
            - self.start_week(month, leap_week_in_month))
    }

    /// Weeks elapsed before the first week of `month`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for an invalid month.
    pub fn weeks_at_start_of_month(
        self,
        month: u8,
        leap_week_in_month: u8,
    ) -> Result<u8, CalendarError> {
        self.check_month(month)?;
        self.check_leap_week_month(leap_week_in_month)?;
        Ok(self.start_week(month, leap_week_in_month))
    }

    /// Month containing the week that follows `weeks` elapsed weeks.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if `weeks` is not within the year.
    pub fn month_from_elapsed_weeks(
        self,
        weeks: u8,
        leap_week_in_month: u8,
    ) -> Result<u8, CalendarError> {
        self.check_leap_week_month(leap_week_in_month)?;
        let weeks_in_year = WEEKS_IN_YEAR + u8::from(leap_week_in_month != 0);
        if weeks >= weeks_in_year {
            return Err(CalendarError::out_of_range(
                Field::ElapsedWeeks,
                weeks,
                0,
                weeks_in_year - 1,
            ));
        }
        Ok(self.month_of_week(weeks, leap_week_in_month))
    }
}
