//! Shorthand constructors for tests.

use chrono::NaiveDate;

use crate::range::DateRange;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(from.0, from.1, from.2), date(to.0, to.1, to.2)).unwrap()
}
