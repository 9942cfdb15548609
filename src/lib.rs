//! Alternative proleptic calendar systems over a shared epoch-day timeline.
//!
//! Every calendar converts its dates to and from an epoch day, the signed
//! count of days since 1970-01-01, so dates of different calendars can be
//! compared and converted through it.
//!
//! ```
//! use altcal::{Calendar, CalendarDate, Unit};
//!
//! let coptic = CalendarDate::new(Calendar::Coptic, 1732, 4, 22).unwrap();
//! let julian = coptic.with_calendar(Calendar::Julian).unwrap();
//! assert_eq!(julian.to_epoch_day(), coptic.to_epoch_day());
//!
//! let later = coptic.plus(13, Unit::Months).unwrap();
//! assert_eq!(coptic.until(&later, Unit::Months), Ok(13));
//! ```

pub mod cal;
mod consts;
mod cycle;
mod date;
mod error;
pub mod iso;
mod prelude;
mod range;
mod types;

pub use cal::accounting::{
    AccountingChronology, AccountingChronologyBuilder, AccountingConfig, AccountingYearDivision,
    WEEKS_IN_YEAR,
};
pub use cal::{
    Calendar, CalendarSystem, Coptic, Discordian, Ethiopic, FrenchRepublic, InternationalFixed,
    Julian, Pax, Symmetry010,
};
pub use consts::*;
pub use date::CalendarDate;
pub use error::{CalendarError, ErrorKind, Field};
pub use range::DateRange;
pub use types::{CalendarKind, Era, Period, Unit};
