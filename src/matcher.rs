//! Day matchers: rules that decide whether a day belongs to a modifier
//! such as `disabled` or `hidden`.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// Predicate over a single day
pub type DayPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// A rule matching days.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Matcher {
    /// Matches every day (`true`) or none (`false`)
    Bool(bool),
    /// One day
    Date(NaiveDate),
    /// Any of several days
    Dates(Vec<NaiveDate>),
    /// Days in an inclusive range
    Range(DateRange),
    /// Days strictly before a date
    Before(NaiveDate),
    /// Days strictly after a date
    After(NaiveDate),
    /// With `before > after`, days strictly between `after` and `before`.
    /// Otherwise days strictly before `before` or strictly after `after`.
    Interval { before: NaiveDate, after: NaiveDate },
    /// Days falling on any of these weekdays
    DayOfWeek(Vec<Weekday>),
    /// Arbitrary rule; not serializable
    #[serde(skip)]
    Predicate(DayPredicate),
}

impl Matcher {
    /// Wraps a closure as a matcher
    pub fn predicate(f: impl Fn(NaiveDate) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Checks if `date` matches this rule
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Date(day) => *day == date,
            Self::Dates(days) => days.contains(&date),
            Self::Range(range) => range.contains(date),
            Self::Before(before) => date < *before,
            Self::After(after) => date > *after,
            Self::Interval { before, after } => {
                if before > after {
                    *after < date && date < *before
                } else {
                    date < *before || date > *after
                }
            }
            Self::DayOfWeek(weekdays) => weekdays.contains(&date.weekday()),
            Self::Predicate(f) => f(date),
        }
    }

    /// Checks if any day of `range` matches this rule.
    ///
    /// Structural rules are answered directly; predicates walk the range.
    pub fn matches_any_in(&self, range: &DateRange) -> bool {
        let (from, to) = (range.from(), range.end());
        match self {
            Self::Bool(b) => *b,
            Self::Date(day) => range.contains(*day),
            Self::Dates(days) => days.iter().any(|day| range.contains(*day)),
            Self::Range(other) => range.overlaps(other),
            Self::Before(before) => from < *before,
            Self::After(after) => to > *after,
            Self::Interval { before, after } => {
                if before > after {
                    // open interval (after, before) as inclusive days
                    match (after.succ_opt(), before.pred_opt()) {
                        (Some(first), Some(last)) if first <= last => {
                            DateRange::between(first, last).overlaps(range)
                        }
                        _ => false,
                    }
                } else {
                    from < *before || to > *after
                }
            }
            Self::DayOfWeek(weekdays) => range.contains_weekday(weekdays),
            Self::Predicate(f) => range.days().any(|day| f(day)),
        }
    }
}

/// Checks if `date` matches any of `matchers`
pub fn any_match(date: NaiveDate, matchers: &[Matcher]) -> bool {
    matchers.iter().any(|m| m.matches(date))
}

/// Checks if any day of `range` matches any of `matchers`
pub fn range_contains_matchers(range: &DateRange, matchers: &[Matcher]) -> bool {
    matchers.iter().any(|m| m.matches_any_in(range))
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Self::Dates(d) => f.debug_tuple("Dates").field(d).finish(),
            Self::Range(r) => f.debug_tuple("Range").field(r).finish(),
            Self::Before(d) => f.debug_tuple("Before").field(d).finish(),
            Self::After(d) => f.debug_tuple("After").field(d).finish(),
            Self::Interval { before, after } => f
                .debug_struct("Interval")
                .field("before", before)
                .field("after", after)
                .finish(),
            Self::DayOfWeek(w) => f.debug_tuple("DayOfWeek").field(w).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for Matcher {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for Matcher {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Vec<NaiveDate>> for Matcher {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::Dates(dates)
    }
}

impl From<DateRange> for Matcher {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

impl From<Weekday> for Matcher {
    fn from(weekday: Weekday) -> Self {
        Self::DayOfWeek(vec![weekday])
    }
}
