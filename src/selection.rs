//! Selection state for the three picker modes.
//!
//! Every transition is pure: [`Selection::select`] returns the next state and
//! leaves the current one untouched. A click that breaks a constraint returns
//! the current state unchanged.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{DayPickerConfig, Mode};
use crate::date_lib::DateLib;
use crate::matcher::{Matcher, any_match, range_contains_matchers};
use crate::modifiers::{DayFlag, DayModifiers};
use crate::range::{DateRange, SpanLimits};

/// Single mode: at most one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SingleSelection {
    required: bool,
    selected: Option<NaiveDate>,
}

/// Multiple mode: a set of days, kept in date order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MultipleSelection {
    required: bool,
    min:      u32,
    max:      u32,
    selected: Vec<NaiveDate>,
}

/// Range mode: a possibly partial range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RangeSelection {
    required:         bool,
    limits:           SpanLimits,
    exclude_disabled: bool,
    selected:         Option<DateRange>,
}

impl SingleSelection {
    pub const fn new(required: bool) -> Self {
        Self {
            required,
            selected: None,
        }
    }

    #[must_use]
    pub const fn with_selected(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self
    }

    pub const fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    fn select(&self, date: NaiveDate, lib: &DateLib) -> Self {
        let same = self.selected.is_some_and(|s| lib.is_same_day(s, date));
        if same && self.required {
            tracing::trace!(%date, "single selection is required, keeping it");
            return self.clone();
        }
        Self {
            required: self.required,
            selected: (!same).then_some(date),
        }
    }
}

impl MultipleSelection {
    pub const fn new(required: bool, min: u32, max: u32) -> Self {
        Self {
            required,
            min,
            max,
            selected: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_selected(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.selected = dates.into_iter().collect();
        self.selected.sort_unstable();
        self.selected.dedup();
        self
    }

    pub fn selected(&self) -> &[NaiveDate] {
        &self.selected
    }

    fn select(&self, date: NaiveDate) -> Self {
        let count = self.selected.len();
        let min = usize::try_from(self.min).unwrap_or(usize::MAX);
        let max = usize::try_from(self.max).unwrap_or(usize::MAX);
        let position = self.selected.binary_search(&date);

        let mut next = self.clone();
        match position {
            Ok(_) if self.required && count == 1 => {
                tracing::trace!(%date, "multiple selection is required, keeping last day");
            }
            Ok(_) if min > 0 && count <= min => {
                tracing::trace!(%date, min, "removing would drop below min");
            }
            Ok(index) => {
                next.selected.remove(index);
            }
            Err(_) if max > 0 && count >= max => {
                tracing::trace!(%date, max, "adding would exceed max");
            }
            Err(index) => next.selected.insert(index, date),
        }
        next
    }
}

impl RangeSelection {
    pub const fn new(required: bool, limits: SpanLimits, exclude_disabled: bool) -> Self {
        Self {
            required,
            limits,
            exclude_disabled,
            selected: None,
        }
    }

    #[must_use]
    pub const fn with_selected(mut self, range: DateRange) -> Self {
        self.selected = Some(range);
        self
    }

    pub const fn selected(&self) -> Option<DateRange> {
        self.selected
    }

    fn collapse_to(&self, date: NaiveDate) -> DateRange {
        if self.limits.min > 0 { DateRange::starting_at(date) } else { DateRange::single(date) }
    }

    fn select(&self, date: NaiveDate, disabled: &[Matcher], lib: &DateLib) -> Self {
        let mut next = DateRange::add_date(date, self.selected, self.limits, self.required, lib);
        if let Some(range) = next {
            if self.exclude_disabled
                && range.is_complete()
                && range_contains_matchers(&range, disabled)
            {
                tracing::trace!(%date, %range, "range spans a disabled day, collapsing");
                next = Some(self.collapse_to(date));
            }
        }
        Self {
            selected: next,
            ..self.clone()
        }
    }
}

/// The selection of one picker, tagged by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Selection {
    Single(SingleSelection),
    Multiple(MultipleSelection),
    Range(RangeSelection),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(SingleSelection::default())
    }
}

impl Selection {
    /// Empty selection for the configured mode and constraints
    pub fn from_config(config: &DayPickerConfig) -> Self {
        match config.mode {
            Mode::Single => Self::Single(SingleSelection::new(config.required)),
            Mode::Multiple => {
                Self::Multiple(MultipleSelection::new(config.required, config.min, config.max))
            }
            Mode::Range => Self::Range(RangeSelection::new(
                config.required,
                config.span_limits(),
                config.exclude_disabled,
            )),
        }
    }

    pub const fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Multiple(_) => Mode::Multiple,
            Self::Range(_) => Mode::Range,
        }
    }

    /// Applies a click on `date`, returning the next selection.
    ///
    /// Disabled days never change the selection.
    #[must_use]
    pub fn select(&self, date: NaiveDate, disabled: &[Matcher], lib: &DateLib) -> Self {
        if any_match(date, disabled) {
            tracing::trace!(%date, mode = %self.mode(), "ignoring click on disabled day");
            return self.clone();
        }
        match self {
            Self::Single(single) => Self::Single(single.select(date, lib)),
            Self::Multiple(multiple) => Self::Multiple(multiple.select(date)),
            Self::Range(range) => Self::Range(range.select(date, disabled, lib)),
        }
    }

    /// Checks if `date` is selected; range ends count
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            Self::Single(single) => single.selected == Some(date),
            Self::Multiple(multiple) => multiple.selected.binary_search(&date).is_ok(),
            Self::Range(range) => range.selected.is_some_and(|r| r.contains(date)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(single) => single.selected.is_none(),
            Self::Multiple(multiple) => multiple.selected.is_empty(),
            Self::Range(range) => range.selected.is_none(),
        }
    }

    /// Selected days; a range yields every day it covers
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            Self::Single(single) => single.selected.into_iter().collect(),
            Self::Multiple(multiple) => multiple.selected.clone(),
            Self::Range(range) => range.selected.iter().flat_map(DateRange::days).collect(),
        }
    }

    /// Sets the selection flags of `date` on `modifiers`
    pub fn apply_flags(&self, date: NaiveDate, modifiers: &mut DayModifiers) {
        modifiers.set(DayFlag::Selected, self.is_selected(date));
        if let Self::Range(RangeSelection {
            selected: Some(range),
            ..
        }) = self
        {
            modifiers.set(DayFlag::RangeStart, range.from() == date);
            modifiers.set(DayFlag::RangeEnd, range.to() == Some(date));
            modifiers.set(DayFlag::RangeMiddle, range.contains_strictly(date));
        }
    }
}
