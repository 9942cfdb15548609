//! Cycle decomposition shared by the epoch-day converters.

/// Splits a day count into a proleptic year and a zero-based day of that year.
///
/// `day` counts from the first day of year 1. `days_before_year(y)` returns
/// the days from the start of year 1 to the start of year `y` and must grow by
/// exactly `cycle_days` every `cycle_years` years.
///
/// The year inside the cycle is estimated from the mean year length and then
/// corrected against the exact start of year, which moves it by at most a
/// couple of steps.
pub(crate) fn locate_year(
    day: i64,
    cycle_years: i64,
    cycle_days: i64,
    days_before_year: impl Fn(i64) -> i64,
) -> (i64, i64) {
    let cycle = day.div_euclid(cycle_days);
    let day_of_cycle = day.rem_euclid(cycle_days);

    let mut year = day_of_cycle * cycle_years / cycle_days + 1;
    while days_before_year(year) > day_of_cycle {
        year -= 1;
    }
    while days_before_year(year + 1) <= day_of_cycle {
        year += 1;
    }

    (
        cycle * cycle_years + year,
        day_of_cycle - days_before_year(year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 short years of 10 days then a long year of 11 days.
    fn toy_days_before_year(year: i64) -> i64 {
        (year - 1) * 10 + (year - 1).div_euclid(4)
    }

    #[test]
    fn test_locate_year_first_cycle() {
        assert_eq!(locate_year(0, 4, 41, toy_days_before_year), (1, 0));
        assert_eq!(locate_year(9, 4, 41, toy_days_before_year), (1, 9));
        assert_eq!(locate_year(10, 4, 41, toy_days_before_year), (2, 0));
        assert_eq!(locate_year(40, 4, 41, toy_days_before_year), (4, 10));
        assert_eq!(locate_year(41, 4, 41, toy_days_before_year), (5, 0));
    }

    #[test]
    fn test_locate_year_negative() {
        assert_eq!(locate_year(-1, 4, 41, toy_days_before_year), (0, 10));
        assert_eq!(locate_year(-11, 4, 41, toy_days_before_year), (0, 0));
        assert_eq!(locate_year(-12, 4, 41, toy_days_before_year), (-1, 9));
    }

    #[test]
    fn test_locate_year_matches_days_before_year() {
        for day in -500..500 {
            let (year, day_of_year) = locate_year(day, 4, 41, toy_days_before_year);
            assert_eq!(toy_days_before_year(year) + day_of_year, day, "day {day}");
            assert!(day_of_year >= 0);
            assert!(day < toy_days_before_year(year + 1));
        }
    }
}
