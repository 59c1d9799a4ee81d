use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{RANGE_SEPARATOR, date_lib::DateLib};

/// Marker for the open end of a partial range in text form
const OPEN_END: &str = "..";

/// A range of days, inclusive at both ends.
///
/// `to` is `None` while a range selection is half done. When both ends are
/// set, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateRange {
    from: NaiveDate,
    to:   Option<NaiveDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: from ({from}) is after to ({to})")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] chrono::ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Span limits for a range selection, in days between `from` and `to`.
/// Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanLimits {
    pub min: u32,
    pub max: u32,
}

impl DateRange {
    /// Creates a complete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if from > to.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::InvalidRange { from, to });
        }
        Ok(Self { from, to: Some(to) })
    }

    /// Range between two days in either order
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: a.min(b),
            to:   Some(a.max(b)),
        }
    }

    /// A complete range covering one day
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            from: day,
            to:   Some(day),
        }
    }

    /// A partial range with only a start
    pub const fn starting_at(day: NaiveDate) -> Self {
        Self { from: day, to: None }
    }

    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    pub const fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// True when both ends are set
    pub const fn is_complete(&self) -> bool {
        self.to.is_some()
    }

    /// Last day covered; `from` for a partial range
    pub fn end(&self) -> NaiveDate {
        self.to.unwrap_or(self.from)
    }

    /// Days from `from` to `to`. Zero for a partial or single-day range.
    pub fn span_days(&self) -> i64 {
        self.end().signed_duration_since(self.from).num_days()
    }

    /// Checks if the range covers `date`, ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.end()
    }

    /// Checks if `date` lies strictly between the ends
    pub fn contains_strictly(&self, date: NaiveDate) -> bool {
        self.from < date && date < self.end()
    }

    /// Checks if this range shares any day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.end() && other.from <= self.end()
    }

    /// Every day in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end();
        self.from.iter_days().take_while(move |d| *d <= end)
    }

    /// Checks if any day in the range falls on one of `weekdays`
    pub fn contains_weekday(&self, weekdays: &[Weekday]) -> bool {
        self.days()
            .take(7)
            .any(|day| weekdays.contains(&day.weekday()))
    }

    /// Applies a click on `date` to the current range selection.
    ///
    /// Returns the new range, or `None` when the click clears the selection.
    /// A complete range whose span breaks `limits` restarts at `date`.
    pub fn add_date(
        date: NaiveDate,
        current: Option<Self>,
        limits: SpanLimits,
        required: bool,
        lib: &DateLib,
    ) -> Option<Self> {
        let fresh = |day: NaiveDate| {
            if limits.min > 0 { Self::starting_at(day) } else { Self::single(day) }
        };
        let next = match current {
            None => Some(fresh(date)),
            Some(Self { from, to: None }) => {
                if lib.is_same_day(from, date) {
                    required.then(|| Self::starting_at(from))
                } else {
                    Some(Self::between(from, date))
                }
            }
            Some(range @ Self { from, to: Some(to) }) => {
                if lib.is_same_day(from, date) && lib.is_same_day(to, date) {
                    required.then_some(range)
                } else if lib.is_same_day(from, date) {
                    Some(if limits.min > 0 { Self::starting_at(from) } else { Self::single(from) })
                } else if lib.is_same_day(to, date) {
                    Some(fresh(date))
                } else if date < from {
                    Some(Self { from: date, to: Some(to) })
                } else {
                    Some(Self { from, to: Some(date) })
                }
            }
        };

        next.map(|range| {
            if !range.is_complete() {
                return range;
            }
            let span = range.span_days();
            let too_long = limits.max > 0 && span > i64::from(limits.max);
            let too_short = limits.min > 1 && span < i64::from(limits.min);
            if too_long || too_short {
                tracing::trace!(%date, span, ?limits, "range span out of limits, restarting");
                Self::starting_at(date)
            } else {
                range
            }
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}{RANGE_SEPARATOR}{to}", self.from),
            None => write!(f, "{}{RANGE_SEPARATOR}{OPEN_END}", self.from),
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval format: use RANGE_SEPARATOR to separate from/to
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (from_str, to_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let from = from_str.trim().parse::<NaiveDate>()?;
                let to_str = to_str.trim();
                if to_str == OPEN_END {
                    return Ok(Self::starting_at(from));
                }
                let to = to_str.parse::<NaiveDate>()?;
                Self::new(from, to)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    fn click(day: NaiveDate, current: Option<DateRange>) -> Option<DateRange> {
        DateRange::add_date(day, current, SpanLimits::default(), false, &DateLib::default())
    }

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            from:           NaiveDate,
            to:             NaiveDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                from:           date(2024, 1, 5),
                to:             date(2024, 1, 10),
                should_succeed: true,
                description:    "valid range (from < to)",
            },
            TestCase {
                from:           date(2024, 1, 10),
                to:             date(2024, 1, 5),
                should_succeed: false,
                description:    "invalid range (from > to)",
            },
            TestCase {
                from:           date(2024, 1, 5),
                to:             date(2024, 1, 5),
                should_succeed: true,
                description:    "equal dates (from == to)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.from, case.to);
            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_between_normalizes() {
        let r = DateRange::between(date(2024, 1, 10), date(2024, 1, 5));
        assert_eq!(r.from(), date(2024, 1, 5));
        assert_eq!(r.to(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_contains() {
        let r = range((2024, 1, 5), (2024, 1, 10));
        assert!(r.contains(date(2024, 1, 5)));
        assert!(r.contains(date(2024, 1, 7)));
        assert!(r.contains(date(2024, 1, 10)));
        assert!(!r.contains(date(2024, 1, 4)));
        assert!(!r.contains(date(2024, 1, 11)));

        assert!(r.contains_strictly(date(2024, 1, 7)));
        assert!(!r.contains_strictly(date(2024, 1, 5)));
        assert!(!r.contains_strictly(date(2024, 1, 10)));
    }

    #[test]
    fn test_partial_contains_only_start() {
        let r = DateRange::starting_at(date(2024, 1, 5));
        assert!(r.contains(date(2024, 1, 5)));
        assert!(!r.contains(date(2024, 1, 6)));
        assert_eq!(r.end(), date(2024, 1, 5));
        assert_eq!(r.span_days(), 0);
    }

    #[test]
    fn test_overlaps() {
        let outer = range((2024, 1, 1), (2024, 1, 31));
        let inner = range((2024, 1, 10), (2024, 1, 12));
        let later = range((2024, 1, 31), (2024, 2, 3));
        let apart = range((2024, 3, 1), (2024, 3, 3));

        assert!(outer.overlaps(&inner));
        assert!(outer.overlaps(&later));
        assert!(later.overlaps(&outer));
        assert!(!outer.overlaps(&apart));
    }

    #[test]
    fn test_contains_weekday() {
        // Mon 2024-01-08 .. Wed 2024-01-10
        let r = range((2024, 1, 8), (2024, 1, 10));
        assert!(r.contains_weekday(&[Weekday::Tue]));
        assert!(!r.contains_weekday(&[Weekday::Sat, Weekday::Sun]));
        let long = range((2024, 1, 1), (2024, 3, 1));
        assert!(long.contains_weekday(&[Weekday::Sun]));
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let r = range((2024, 2, 27), (2024, 3, 1));
        let days: Vec<_> = r.days().collect();
        assert_eq!(
            days,
            vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_add_date_first_click_is_single_day() {
        let r = click(date(2024, 1, 10), None).unwrap();
        assert_eq!(r, DateRange::single(date(2024, 1, 10)));
    }

    #[test]
    fn test_add_date_earlier_second_click_swaps() {
        let first = click(date(2024, 1, 10), None);
        let second = click(date(2024, 1, 5), first).unwrap();
        assert_eq!(second.from(), date(2024, 1, 5));
        assert_eq!(second.to(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_add_date_later_click_extends() {
        let r = click(date(2024, 1, 12), Some(range((2024, 1, 5), (2024, 1, 10)))).unwrap();
        assert_eq!(r, range((2024, 1, 5), (2024, 1, 12)));

        let r = click(date(2024, 1, 7), Some(range((2024, 1, 5), (2024, 1, 10)))).unwrap();
        assert_eq!(r, range((2024, 1, 5), (2024, 1, 7)));
    }

    #[test]
    fn test_add_date_same_day_clears_unless_required() {
        let lib = DateLib::default();
        let single = DateRange::single(date(2024, 1, 5));
        assert_eq!(click(date(2024, 1, 5), Some(single)), None);

        let kept = DateRange::add_date(
            date(2024, 1, 5),
            Some(single),
            SpanLimits::default(),
            true,
            &lib,
        );
        assert_eq!(kept, Some(single));

        let partial = DateRange::starting_at(date(2024, 1, 5));
        assert_eq!(click(date(2024, 1, 5), Some(partial)), None);
    }

    #[test]
    fn test_add_date_click_on_end_restarts() {
        let r = click(date(2024, 1, 10), Some(range((2024, 1, 5), (2024, 1, 10)))).unwrap();
        assert_eq!(r, DateRange::single(date(2024, 1, 10)));

        let r = click(date(2024, 1, 5), Some(range((2024, 1, 5), (2024, 1, 10)))).unwrap();
        assert_eq!(r, DateRange::single(date(2024, 1, 5)));
    }

    #[test]
    fn test_add_date_respects_limits() {
        let lib = DateLib::default();
        let limits = SpanLimits { min: 3, max: 5 };
        let start = DateRange::add_date(date(2024, 1, 10), None, limits, false, &lib);
        assert_eq!(start, Some(DateRange::starting_at(date(2024, 1, 10))));

        // span of 1 is below min: restart at the clicked day
        let short = DateRange::add_date(date(2024, 1, 11), start, limits, false, &lib);
        assert_eq!(short, Some(DateRange::starting_at(date(2024, 1, 11))));

        // span of 8 is above max
        let long = DateRange::add_date(date(2024, 1, 18), start, limits, false, &lib);
        assert_eq!(long, Some(DateRange::starting_at(date(2024, 1, 18))));

        let ok = DateRange::add_date(date(2024, 1, 14), start, limits, false, &lib);
        assert_eq!(ok, Some(range((2024, 1, 10), (2024, 1, 14))));
    }

    #[test]
    fn test_display() {
        assert_eq!(range((2024, 1, 5), (2024, 1, 10)).to_string(), "2024-01-05/2024-01-10");
        assert_eq!(DateRange::starting_at(date(2024, 1, 5)).to_string(), "2024-01-05/..");
    }

    #[test]
    fn test_from_str() {
        let r: DateRange = "2024-01-05/2024-01-10".parse().unwrap();
        assert_eq!(r, range((2024, 1, 5), (2024, 1, 10)));
        let r: DateRange = " 2024-01-05 / .. ".parse().unwrap();
        assert_eq!(r, DateRange::starting_at(date(2024, 1, 5)));
    }

    #[test]
    fn test_from_str_invalid_order() {
        let result = "2024-01-10/2024-01-05".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_from_str_bad_input() {
        assert!(matches!("2024-01-05".parse::<DateRange>(), Err(RangeError::InvalidFormat(_))));
        assert!(matches!(
            "2024-01-05/2024-01-06/2024-01-07".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!("2024-13-05/..".parse::<DateRange>(), Err(RangeError::ParseError(_))));
    }

    #[test]
    fn test_serde_string_format() {
        let r = range((2024, 1, 5), (2024, 1, 10));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2024-01-05/2024-01-10""#);
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);

        let invalid: Result<DateRange, _> = serde_json::from_str(r#""2024-01-10/2024-01-05""#);
        assert!(invalid.is_err());
    }
}
