use super::{AccountingChronology, AccountingYearDivision};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The settings of an accounting calendar, as read from configuration.
///
/// Every field mirrors a builder setter; `in_last_week`,
/// `leap_week_in_month` and `year_offset` default to 0/false when absent.
///
/// ```json
/// {
///   "ends_on": "Sun",
///   "end": "August",
///   "division": "QUARTERS_OF_PATTERN_4_4_5_WEEKS",
///   "leap_week_in_month": 12
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountingConfig {
    pub ends_on: Option<Weekday>,
    pub end: Option<IsoMonth>,
    #[serde(default)]
    pub in_last_week: bool,
    pub division: Option<AccountingYearDivision>,
    #[serde(default)]
    pub leap_week_in_month: u8,
    #[serde(default)]
    pub year_offset: i32,
}

impl From<AccountingChronology> for AccountingConfig {
    fn from(chronology: AccountingChronology) -> Self {
        Self {
            ends_on: Some(chronology.ends_on),
            end: Some(chronology.end),
            in_last_week: chronology.in_last_week,
            division: Some(chronology.division),
            leap_week_in_month: chronology.leap_week_in_month,
            year_offset: chronology.year_offset,
        }
    }
}

/// Collects the settings of an accounting calendar and freezes them into an
/// [`AccountingChronology`].
///
/// `nearest_end_of` and `in_last_week_of` set the same two fields; whichever
/// is called last wins. The same goes for the two year offset setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountingChronologyBuilder {
    config: AccountingConfig,
}

impl AccountingChronologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weekday on which every accounting year ends.
    #[must_use]
    pub const fn ends_on(mut self, weekday: Weekday) -> Self {
        self.config.ends_on = Some(weekday);
        self
    }

    /// Ends the year on the `ends_on` weekday nearest to the last day of
    /// `month`, which may fall early in the following month.
    #[must_use]
    pub const fn nearest_end_of(mut self, month: IsoMonth) -> Self {
        self.config.end = Some(month);
        self.config.in_last_week = false;
        self
    }

    /// Ends the year on the last `ends_on` weekday of `month`.
    #[must_use]
    pub const fn in_last_week_of(mut self, month: IsoMonth) -> Self {
        self.config.end = Some(month);
        self.config.in_last_week = true;
        self
    }

    #[must_use]
    pub const fn with_division(mut self, division: AccountingYearDivision) -> Self {
        self.config.division = Some(division);
        self
    }

    /// Month that receives the extra week of a 53-week year.
    #[must_use]
    pub const fn leap_week_in_month(mut self, month: u8) -> Self {
        self.config.leap_week_in_month = month;
        self
    }

    /// Accounting year `y` ends in ISO year `y`. The default.
    #[must_use]
    pub const fn accounting_year_ends_in_iso_year(mut self) -> Self {
        self.config.year_offset = 0;
        self
    }

    /// Accounting year `y` starts in ISO year `y` and ends in `y + 1`.
    #[must_use]
    pub const fn accounting_year_starts_in_iso_year(mut self) -> Self {
        self.config.year_offset = 1;
        self
    }

    pub const fn config(&self) -> &AccountingConfig {
        &self.config
    }

    /// Validates the settings and builds the calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::Configuration` if the weekday, month, division
    /// or leap week month was never set, or if the leap week month is not a
    /// month of the division.
    pub fn to_chronology(&self) -> Result<AccountingChronology, CalendarError> {
        let config = self.config;
        let mut missing = Vec::new();
        if config.ends_on.is_none() {
            missing.push("ends_on");
        }
        if config.end.is_none() {
            missing.push("end month");
        }
        if config.division.is_none() {
            missing.push("division");
        }
        if config.leap_week_in_month == 0 {
            missing.push("leap_week_in_month");
        }

        let (Some(ends_on), Some(end), Some(division), true) = (
            config.ends_on,
            config.end,
            config.division,
            missing.is_empty(),
        ) else {
            return Err(reject(&format!("missing {}", missing.join(", "))));
        };

        let months = division.months_in_year();
        if config.leap_week_in_month > months {
            return Err(reject(&format!(
                "leap week month {} is not within 1 - {months} for {division}",
                config.leap_week_in_month
            )));
        }
        if !(0..=1).contains(&config.year_offset) {
            return Err(reject(&format!(
                "year offset {} must be 0 or 1",
                config.year_offset
            )));
        }

        let chronology = AccountingChronology::from_parts(
            ends_on,
            end,
            config.in_last_week,
            division,
            config.leap_week_in_month,
            config.year_offset,
        );
        debug!(
            ends_on = %ends_on,
            end = ?end,
            in_last_week = config.in_last_week,
            division = %division,
            leap_week_in_month = config.leap_week_in_month,
            year_offset = config.year_offset,
            "accounting chronology built"
        );
        Ok(chronology)
    }
}

impl From<AccountingConfig> for AccountingChronologyBuilder {
    fn from(config: AccountingConfig) -> Self {
        Self { config }
    }
}

fn reject(reason: &str) -> CalendarError {
    debug!(reason, "accounting chronology rejected");
    CalendarError::Configuration(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cal::CalendarSystem;
    use crate::error::ErrorKind;

    fn complete() -> AccountingChronologyBuilder {
        AccountingChronologyBuilder::new()
            .ends_on(Weekday::Sun)
            .nearest_end_of(IsoMonth::August)
            .with_division(AccountingYearDivision::QuartersOfPattern445Weeks)
            .leap_week_in_month(12)
    }

    #[test]
    fn test_missing_settings() {
        struct TestCase {
            builder: AccountingChronologyBuilder,
            mentions: &'static str,
        }

        let cases = [
            TestCase {
                builder: AccountingChronologyBuilder::new()
                    .ends_on(Weekday::Sun)
                    .nearest_end_of(IsoMonth::August)
                    .leap_week_in_month(12),
                mentions: "division",
            },
            TestCase {
                builder: AccountingChronologyBuilder::new()
                    .nearest_end_of(IsoMonth::August)
                    .with_division(AccountingYearDivision::QuartersOfPattern445Weeks)
                    .leap_week_in_month(12),
                mentions: "ends_on",
            },
            TestCase {
                builder: AccountingChronologyBuilder::new()
                    .ends_on(Weekday::Sun)
                    .with_division(AccountingYearDivision::QuartersOfPattern445Weeks)
                    .leap_week_in_month(12),
                mentions: "end month",
            },
            TestCase {
                builder: AccountingChronologyBuilder::new()
                    .ends_on(Weekday::Sun)
                    .nearest_end_of(IsoMonth::August)
                    .with_division(AccountingYearDivision::QuartersOfPattern445Weeks),
                mentions: "leap_week_in_month",
            },
        ];

        for case in &cases {
            let err = case.builder.to_chronology().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert!(err.to_string().contains(case.mentions), "{err}");
        }
    }

    #[test]
    fn test_empty_builder_lists_every_missing_setting() {
        let err = AccountingChronologyBuilder::new().to_chronology().unwrap_err();
        assert_eq!(
            err,
            CalendarError::Configuration(
                "missing ends_on, end month, division, leap_week_in_month".to_owned()
            )
        );
    }

    #[test]
    fn test_leap_week_month_outside_division() {
        let err = complete().leap_week_in_month(13).to_chronology().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let thirteen = complete()
            .with_division(AccountingYearDivision::ThirteenEvenMonthsOf4Weeks)
            .leap_week_in_month(13)
            .to_chronology();
        assert!(thirteen.is_ok());
    }

    #[test]
    fn test_last_write_wins() {
        let nearest_last = complete()
            .in_last_week_of(IsoMonth::March)
            .nearest_end_of(IsoMonth::August)
            .to_chronology()
            .unwrap();
        assert!(!nearest_last.in_last_week());
        assert_eq!(nearest_last.end(), IsoMonth::August);

        let last_week_last = complete()
            .nearest_end_of(IsoMonth::August)
            .in_last_week_of(IsoMonth::August)
            .to_chronology()
            .unwrap();
        assert!(last_week_last.in_last_week());
        assert_eq!(last_week_last.end(), IsoMonth::August);
        assert_ne!(nearest_last, last_week_last);
    }

    #[test]
    fn test_year_offset() {
        let ends = complete().to_chronology().unwrap();
        let starts = complete()
            .accounting_year_starts_in_iso_year()
            .to_chronology()
            .unwrap();
        assert_eq!(ends.year_offset(), 0);
        assert_eq!(starts.year_offset(), 1);
        assert_eq!(starts.year_end(2011), ends.year_end(2012));
        assert_eq!(starts.to_epoch_day(2011, 1, 1), ends.to_epoch_day(2012, 1, 1));

        let back = complete()
            .accounting_year_starts_in_iso_year()
            .accounting_year_ends_in_iso_year()
            .to_chronology()
            .unwrap();
        assert_eq!(back, ends);
    }

    #[test]
    fn test_config_round_trip() {
        let json = r#"{
            "ends_on": "Sun",
            "end": "August",
            "division": "QUARTERS_OF_PATTERN_4_4_5_WEEKS",
            "leap_week_in_month": 12
        }"#;
        let config: AccountingConfig = serde_json::from_str(json).unwrap();
        assert!(!config.in_last_week);
        assert_eq!(config.year_offset, 0);
        let chronology = AccountingChronologyBuilder::from(config).to_chronology().unwrap();
        assert_eq!(chronology, complete().to_chronology().unwrap());

        let serialized = serde_json::to_string(&chronology).unwrap();
        let parsed: AccountingChronology = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, chronology);
    }

    #[test]
    fn test_invalid_config_rejected_on_deserialize() {
        let json = r#"{
            "ends_on": "Sun",
            "end": "August",
            "division": "QUARTERS_OF_PATTERN_4_4_5_WEEKS",
            "leap_week_in_month": 12,
            "year_offset": 5
        }"#;
        assert!(serde_json::from_str::<AccountingChronology>(json).is_err());
    }
}
