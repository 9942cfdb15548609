/// Days from ISO 0001-01-01 to 1970-01-01 (epoch day 0)
pub const DAYS_0001_TO_1970: i64 = 719_162;

/// Smallest proleptic year supported by the two-era calendars
pub const MIN_YEAR: i32 = -999_999;
/// Largest proleptic year supported by every calendar
pub const MAX_YEAR: i32 = 999_999;
/// First year of calendars that only have a single era
pub const MIN_SINGLE_ERA_YEAR: i32 = 1;

/// Length of the seven-day week shared by most calendars
pub const DAYS_IN_WEEK: u8 = 7;

/// Maximum valid ISO month (December)
pub const MAX_ISO_MONTH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each ISO/Julian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by leap year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before each ISO/Julian month in a common year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Days in one 400-year Gregorian cycle, also a whole number of weeks
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Days in a 365-day year
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 365;
/// Days in a 4-year Julian style cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = DAYS_IN_COMMON_YEAR * 4 + 1;

/// Scale used to pack a doubled day-of-month under a month number; the
/// longest month (a 73-day Discordian season) doubles to 146
pub(crate) const PACKED_MONTH_SCALE: i64 = 256;
/// Scale used to pack a month and doubled day under a year number; fits 15
/// month slots
pub(crate) const PACKED_YEAR_SCALE: i64 = 4096;
