//! Date arithmetic for the picker, in one place.
//!
//! Every other module goes through [`DateLib`] for week starts, month math
//! and formatting, so locale and week rules are applied consistently.
//! Arithmetic saturates at the ends of `NaiveDate`'s range instead of
//! panicking.

use crate::format::{Numerals, format_pattern};
use crate::locale::{Locale, default_locale};
use crate::types::{FirstWeekContainsDate, WeekStartsOn};
use chrono::{Datelike, Months, NaiveDate, TimeDelta, Weekday};

/// Locale-aware date helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLib {
    locale:                   &'static Locale,
    week_starts_on:           WeekStartsOn,
    first_week_contains_date: FirstWeekContainsDate,
    numerals:                 Numerals,
}

impl Default for DateLib {
    fn default() -> Self {
        Self::new(default_locale())
    }
}

impl DateLib {
    /// Creates a date library using the locale's week rules
    pub const fn new(locale: &'static Locale) -> Self {
        Self {
            locale,
            week_starts_on: locale.week_starts_on(),
            first_week_contains_date: locale.first_week_contains_date(),
            numerals: Numerals::Latn,
        }
    }

    /// Overrides the locale's first day of the week
    #[must_use]
    pub const fn with_week_starts_on(mut self, week_starts_on: WeekStartsOn) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    /// Overrides the locale's first-week rule
    #[must_use]
    pub const fn with_first_week_contains_date(mut self, rule: FirstWeekContainsDate) -> Self {
        self.first_week_contains_date = rule;
        self
    }

    #[must_use]
    pub const fn with_numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }

    pub const fn locale(&self) -> &'static Locale {
        self.locale
    }

    pub const fn week_starts_on(&self) -> WeekStartsOn {
        self.week_starts_on
    }

    pub const fn first_week_contains_date(&self) -> FirstWeekContainsDate {
        self.first_week_contains_date
    }

    pub const fn numerals(&self) -> Numerals {
        self.numerals
    }

    /// Today's date in the local time zone
    pub fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    pub fn add_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        TimeDelta::try_days(days)
            .and_then(|delta| date.checked_add_signed(delta))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    }

    pub fn add_weeks(&self, date: NaiveDate, weeks: i64) -> NaiveDate {
        self.add_days(date, weeks.saturating_mul(7))
    }

    /// Adds calendar months, clamping the day to the target month's length
    /// (Jan 31 + 1 month is Feb 28 or 29).
    pub fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        let delta = Months::new(months.unsigned_abs());
        let moved = if months < 0 {
            date.checked_sub_months(delta)
        } else {
            date.checked_add_months(delta)
        };
        moved.unwrap_or(if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    }

    pub fn add_years(&self, date: NaiveDate, years: i32) -> NaiveDate {
        self.add_months(date, years.saturating_mul(12))
    }

    /// Whole days from `right` to `left` (`left - right`)
    pub fn difference_in_calendar_days(&self, left: NaiveDate, right: NaiveDate) -> i64 {
        left.signed_duration_since(right).num_days()
    }

    /// Calendar months from `right` to `left`, ignoring the day of month
    pub fn difference_in_calendar_months(&self, left: NaiveDate, right: NaiveDate) -> i32 {
        let month0 = |date: NaiveDate| i32::try_from(date.month0()).unwrap_or_default();
        (left.year() - right.year()) * 12 + (month0(left) - month0(right))
    }

    pub fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(date)
    }

    pub fn end_of_month(&self, date: NaiveDate) -> NaiveDate {
        let next = self.add_months(self.start_of_month(date), 1);
        if next == NaiveDate::MAX {
            return next;
        }
        self.add_days(next, -1)
    }

    pub fn start_of_year(&self, date: NaiveDate) -> NaiveDate {
        date.with_ordinal(1).unwrap_or(date)
    }

    pub fn end_of_year(&self, date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
    }

    /// Sets the month, clamping the day to the month's length
    pub fn set_month(&self, date: NaiveDate, month: u32) -> NaiveDate {
        let target = i32::try_from(month.clamp(1, 12)).unwrap_or(1);
        let offset = target - i32::try_from(date.month()).unwrap_or(1);
        self.add_months(date, offset)
    }

    fn start_of_week_on(&self, date: NaiveDate, first: Weekday) -> NaiveDate {
        let back = (date.weekday().num_days_from_sunday() + 7 - first.num_days_from_sunday()) % 7;
        self.add_days(date, -i64::from(back))
    }

    /// First day of the week holding `date`, per `week_starts_on`
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        self.start_of_week_on(date, self.week_starts_on.weekday())
    }

    pub fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        self.add_days(self.start_of_week(date), 6)
    }

    /// Monday of the ISO week holding `date`
    pub fn start_of_iso_week(&self, date: NaiveDate) -> NaiveDate {
        self.start_of_week_on(date, Weekday::Mon)
    }

    pub fn end_of_iso_week(&self, date: NaiveDate) -> NaiveDate {
        self.add_days(self.start_of_iso_week(date), 6)
    }

    fn first_week_anchor(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, 1, u32::from(self.first_week_contains_date.get()))
    }

    /// Week-numbering year of `date` under the local week rules
    pub fn week_year(&self, date: NaiveDate) -> i32 {
        let year = date.year();
        let starts = |y: i32| self.first_week_anchor(y).map(|anchor| self.start_of_week(anchor));
        if starts(year + 1).is_some_and(|next| date >= next) {
            year + 1
        } else if starts(year).is_some_and(|this| date >= this) {
            year
        } else {
            year - 1
        }
    }

    /// Local week number (1-based) under `week_starts_on` and
    /// `first_week_contains_date`
    pub fn week(&self, date: NaiveDate) -> u32 {
        let Some(anchor) = self.first_week_anchor(self.week_year(date)) else {
            return 1;
        };
        let first = self.start_of_week(anchor);
        let days = self.difference_in_calendar_days(self.start_of_week(date), first);
        u32::try_from(days / 7 + 1).unwrap_or(1)
    }

    /// ISO 8601 week number
    pub fn iso_week(&self, date: NaiveDate) -> u32 {
        date.iso_week().week()
    }

    pub fn is_same_day(&self, left: NaiveDate, right: NaiveDate) -> bool {
        left == right
    }

    pub fn is_same_month(&self, left: NaiveDate, right: NaiveDate) -> bool {
        left.year() == right.year() && left.month() == right.month()
    }

    pub fn is_same_year(&self, left: NaiveDate, right: NaiveDate) -> bool {
        left.year() == right.year()
    }

    /// Formats `date` with a pattern, then applies the configured numerals
    pub fn format(&self, date: NaiveDate, pattern: &str) -> String {
        self.numerals.replace_digits(&format_pattern(date, pattern, self))
    }

    /// Writes a bare number with the configured numerals
    pub fn format_number(&self, n: impl std::fmt::Display) -> String {
        self.numerals.replace_digits(&n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{DE, EN_GB};
    use crate::test_utils::date;

    #[test]
    fn test_add_months_clamps_day() {
        let lib = DateLib::default();
        assert_eq!(lib.add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(lib.add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(lib.add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(lib.add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
    }

    #[test]
    fn test_add_days_saturates() {
        let lib = DateLib::default();
        assert_eq!(lib.add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(lib.add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(lib.add_days(date(2024, 2, 28), 2), date(2024, 3, 1));
    }

    #[test]
    fn test_differences() {
        let lib = DateLib::default();
        assert_eq!(lib.difference_in_calendar_days(date(2024, 1, 10), date(2024, 1, 5)), 5);
        assert_eq!(lib.difference_in_calendar_days(date(2024, 1, 5), date(2024, 1, 10)), -5);
        assert_eq!(lib.difference_in_calendar_months(date(2024, 3, 1), date(2023, 12, 31)), 3);
        assert_eq!(lib.difference_in_calendar_months(date(2023, 12, 1), date(2024, 3, 31)), -3);
    }

    #[test]
    fn test_month_and_year_bounds() {
        let lib = DateLib::default();
        assert_eq!(lib.start_of_month(date(2023, 2, 17)), date(2023, 2, 1));
        assert_eq!(lib.end_of_month(date(2023, 2, 17)), date(2023, 2, 28));
        assert_eq!(lib.end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(lib.start_of_year(date(2023, 7, 4)), date(2023, 1, 1));
        assert_eq!(lib.end_of_year(date(2023, 7, 4)), date(2023, 12, 31));
        assert_eq!(lib.set_month(date(2023, 1, 31), 2), date(2023, 2, 28));
    }

    #[test]
    fn test_week_start_follows_locale() {
        // 2022-11-23 is a Wednesday
        let wednesday = date(2022, 11, 23);
        let us = DateLib::default();
        assert_eq!(us.start_of_week(wednesday), date(2022, 11, 20));
        assert_eq!(us.end_of_week(wednesday), date(2022, 11, 26));

        let gb = DateLib::new(&EN_GB);
        assert_eq!(gb.start_of_week(wednesday), date(2022, 11, 21));
        assert_eq!(gb.end_of_week(wednesday), date(2022, 11, 27));
    }

    #[test]
    fn test_week_start_override() {
        let lib = DateLib::default().with_week_starts_on(WeekStartsOn::new(3).unwrap());
        // Wednesday start
        assert_eq!(lib.start_of_week(date(2022, 11, 22)), date(2022, 11, 16));
        assert_eq!(lib.start_of_week(date(2022, 11, 23)), date(2022, 11, 23));
    }

    #[test]
    fn test_iso_week_bounds() {
        let lib = DateLib::default();
        let sunday = date(2022, 11, 27);
        assert_eq!(lib.start_of_iso_week(sunday), date(2022, 11, 21));
        assert_eq!(lib.end_of_iso_week(sunday), date(2022, 11, 27));
    }

    #[test]
    fn test_local_week_numbers_us() {
        let lib = DateLib::default();
        assert_eq!(lib.week(date(2022, 1, 1)), 1);
        assert_eq!(lib.week(date(2022, 1, 2)), 2);
        // Dec 25..31 2022 is a full Sunday-start week of its own
        assert_eq!(lib.week(date(2022, 12, 31)), 53);
        assert_eq!(lib.week(date(2023, 1, 1)), 1);
        // Dec 31 2023 is a Sunday, its week holds Jan 1 2024
        assert_eq!(lib.week(date(2023, 12, 31)), 1);
        assert_eq!(lib.week_year(date(2023, 12, 31)), 2024);
    }

    #[test]
    fn test_local_week_numbers_match_iso_for_european_rules() {
        let lib = DateLib::new(&DE);
        for day in [date(2021, 1, 3), date(2022, 6, 15), date(2020, 12, 31), date(2026, 1, 1)] {
            assert_eq!(lib.week(day), lib.iso_week(day), "week of {day}");
        }
    }

    #[test]
    fn test_format_applies_numerals() {
        let lib = DateLib::default().with_numerals(Numerals::Arab);
        assert_eq!(lib.format(date(2024, 1, 5), "d"), "٥");
        assert_eq!(lib.format_number(12), "١٢");
    }
}
