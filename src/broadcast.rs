//! Broadcast calendar week arithmetic.
//!
//! A broadcast month starts on the Monday on or before the 1st of the
//! month and runs for 4 or 5 whole Monday-start weeks. It has 5 weeks when
//! the last day of the 5th week still falls in the month, otherwise 4.

use crate::consts::{BROADCAST_LONG_MONTH_WEEKS, BROADCAST_SHORT_MONTH_WEEKS, DAYS_PER_WEEK};
use crate::date_lib::DateLib;
use chrono::{Datelike, NaiveDate};

/// First day (a Monday) of the broadcast month holding `date`'s calendar month
pub fn start_of_broadcast_week(date: NaiveDate, lib: &DateLib) -> NaiveDate {
    let first = lib.start_of_month(date);
    let back = first.weekday().num_days_from_monday();
    lib.add_days(first, -i64::from(back))
}

/// Number of weeks (4 or 5) in the broadcast month of `date`
pub fn broadcast_weeks_in_month(date: NaiveDate, lib: &DateLib) -> u8 {
    let start = start_of_broadcast_week(date, lib);
    let days = i64::from(BROADCAST_LONG_MONTH_WEEKS * DAYS_PER_WEEK);
    let last_of_fifth = lib.add_days(start, days - 1);
    if lib.is_same_month(last_of_fifth, date) {
        BROADCAST_LONG_MONTH_WEEKS
    } else {
        BROADCAST_SHORT_MONTH_WEEKS
    }
}

/// Last day (a Sunday) of the broadcast month holding `date`'s calendar month
pub fn end_of_broadcast_week(date: NaiveDate, lib: &DateLib) -> NaiveDate {
    let start = start_of_broadcast_week(date, lib);
    let weeks = broadcast_weeks_in_month(date, lib);
    lib.add_days(start, i64::from(weeks * DAYS_PER_WEEK) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use chrono::Weekday;

    #[test]
    fn test_start_is_monday_on_or_before_first() {
        let lib = DateLib::default();
        // 2024-01-01 is a Monday
        assert_eq!(start_of_broadcast_week(date(2024, 1, 17), &lib), date(2024, 1, 1));
        // 2024-09-01 is a Sunday
        assert_eq!(start_of_broadcast_week(date(2024, 9, 10), &lib), date(2024, 8, 26));
        // 2024-05-01 is a Wednesday
        assert_eq!(start_of_broadcast_week(date(2024, 5, 31), &lib), date(2024, 4, 29));
    }

    #[test]
    fn test_weeks_in_month() {
        let lib = DateLib::default();
        // Jan 2024: Jan 1 + 34 days = Feb 4, so 4 weeks
        assert_eq!(broadcast_weeks_in_month(date(2024, 1, 1), &lib), 4);
        // Mar 2024: starts Feb 26, + 34 days = Mar 31, so 5 weeks
        assert_eq!(broadcast_weeks_in_month(date(2024, 3, 1), &lib), 5);
        // Sep 2024: starts Aug 26, + 34 days = Sep 29, so 5 weeks
        assert_eq!(broadcast_weeks_in_month(date(2024, 9, 1), &lib), 5);
    }

    #[test]
    fn test_end_is_sunday() {
        let lib = DateLib::default();
        assert_eq!(end_of_broadcast_week(date(2024, 1, 1), &lib), date(2024, 1, 28));
        assert_eq!(end_of_broadcast_week(date(2024, 3, 15), &lib), date(2024, 3, 31));
        for month in 1..=12 {
            let end = end_of_broadcast_week(date(2025, month, 1), &lib);
            assert_eq!(end.weekday(), Weekday::Sun, "end of broadcast month {month}");
        }
    }

    #[test]
    fn test_consecutive_months_tile() {
        let lib = DateLib::default();
        for month in 1..12 {
            let end = end_of_broadcast_week(date(2025, month, 1), &lib);
            let next = start_of_broadcast_week(date(2025, month + 1, 1), &lib);
            assert_eq!(lib.add_days(end, 1), next, "gap after broadcast month {month}");
        }
    }
}
