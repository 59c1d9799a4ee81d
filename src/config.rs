//! Picker configuration.
//!
//! [`DayPickerConfig`] mirrors the props of a day picker component. It
//! deserializes from camelCase keys with every field optional, e.g.
//!
//! ```json
//! { "mode": "range", "numberOfMonths": 2, "excludeDisabled": true,
//!   "disabled": [{ "dayOfWeek": ["Sat", "Sun"] }] }
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_lib::DateLib;
use crate::format::Numerals;
use crate::locale::{Locale, default_locale};
use crate::matcher::Matcher;
use crate::prelude::*;
use crate::range::SpanLimits;
use crate::types::{FirstWeekContainsDate, NumberOfMonths, WeekStartsOn};

/// Error type for invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid number of months: {0} (must be at least 1)")]
    InvalidNumberOfMonths(u8),

    #[error("Invalid first week day: {0} (must be 1-7)")]
    InvalidFirstWeekContainsDate(u8),

    #[error("Invalid week start: {0} (must be 0-6, Sunday is 0)")]
    InvalidWeekStart(u8),

    #[error("Start month ({start}) is after end month ({end})")]
    InvertedMonths { start: NaiveDate, end: NaiveDate },

    #[error("From year ({from}) is after to year ({to})")]
    InvertedYears { from: i32, to: i32 },

    #[error("Invalid selection bounds: min ({min}) is greater than max ({max})")]
    InvalidSelectionBounds { min: u32, max: u32 },
}

/// Selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// One day at a time
    #[default]
    Single,
    /// Any set of days
    Multiple,
    /// A from/to range
    Range,
}

/// How the caption is rendered. Dropdown layouts widen the navigation
/// bounds when none are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaptionLayout {
    #[default]
    Label,
    Dropdown,
    DropdownMonths,
    DropdownYears,
}

impl CaptionLayout {
    /// True when a year dropdown is shown
    pub const fn has_year_dropdown(self) -> bool {
        matches!(self, Self::Dropdown | Self::DropdownYears)
    }
}

/// Everything that shapes the grid, the selection and the labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPickerConfig {
    pub mode:                     Mode,
    /// Selection cannot become empty
    pub required:                 bool,
    /// Multiple mode: fewest selected days. Range mode: shortest span.
    pub min:                      u32,
    /// Multiple mode: most selected days. Range mode: longest span. 0 is unlimited.
    pub max:                      u32,
    /// Range mode: a range over a disabled day collapses to the clicked day
    pub exclude_disabled:         bool,

    pub number_of_months:         NumberOfMonths,
    /// Controlled displayed month
    pub month:                    Option<NaiveDate>,
    /// Month shown first when `month` is not set
    pub default_month:            Option<NaiveDate>,
    /// Earliest month navigation can reach
    pub start_month:              Option<NaiveDate>,
    /// Latest month navigation can reach
    pub end_month:                Option<NaiveDate>,
    pub from_year:                Option<i32>,
    pub to_year:                  Option<i32>,
    /// Overrides the clock's today
    pub today:                    Option<NaiveDate>,

    pub fixed_weeks:              bool,
    pub show_outside_days:        bool,
    pub iso_week:                 bool,
    pub broadcast_calendar:       bool,
    pub week_starts_on:           Option<WeekStartsOn>,
    pub first_week_contains_date: Option<FirstWeekContainsDate>,
    pub reverse_months:           bool,

    pub paged_navigation:         bool,
    pub disable_navigation:       bool,
    pub caption_layout:           CaptionLayout,
    pub reverse_years:            bool,

    #[serde(with = "crate::locale::serde_code")]
    pub locale:                   &'static Locale,
    pub numerals:                 Numerals,

    pub disabled:                 Vec<Matcher>,
    pub hidden:                   Vec<Matcher>,
    /// Named custom modifiers
    pub modifiers:                BTreeMap<String, Vec<Matcher>>,
}

impl Default for DayPickerConfig {
    fn default() -> Self {
        Self {
            mode:                     Mode::default(),
            required:                 false,
            min:                      0,
            max:                      0,
            exclude_disabled:         false,
            number_of_months:         NumberOfMonths::default(),
            month:                    None,
            default_month:            None,
            start_month:              None,
            end_month:                None,
            from_year:                None,
            to_year:                  None,
            today:                    None,
            fixed_weeks:              false,
            show_outside_days:        false,
            iso_week:                 false,
            broadcast_calendar:       false,
            week_starts_on:           None,
            first_week_contains_date: None,
            reverse_months:           false,
            paged_navigation:         false,
            disable_navigation:       false,
            caption_layout:           CaptionLayout::default(),
            reverse_years:            false,
            locale:                   default_locale(),
            numerals:                 Numerals::default(),
            disabled:                 Vec::new(),
            hidden:                   Vec::new(),
            modifiers:                BTreeMap::new(),
        }
    }
}

impl DayPickerConfig {
    /// Checks cross-field constraints that single fields cannot express
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(start), Some(end)) = (self.start_month, self.end_month) {
            let lib = self.date_lib();
            if lib.start_of_month(start) > lib.start_of_month(end) {
                return Err(ConfigError::InvertedMonths { start, end });
            }
        }
        if let (Some(from), Some(to)) = (self.from_year, self.to_year) {
            if from > to {
                return Err(ConfigError::InvertedYears { from, to });
            }
        }
        if self.mode != Mode::Single && self.max > 0 && self.min > self.max {
            return Err(ConfigError::InvalidSelectionBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Date library for this configuration's locale and week rules
    pub fn date_lib(&self) -> DateLib {
        let mut lib = DateLib::new(self.locale).with_numerals(self.numerals);
        if let Some(start) = self.week_starts_on {
            lib = lib.with_week_starts_on(start);
        }
        if let Some(rule) = self.first_week_contains_date {
            lib = lib.with_first_week_contains_date(rule);
        }
        lib
    }

    /// Configured today, or the clock's
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(DateLib::today)
    }

    /// Span limits for range mode
    pub const fn span_limits(&self) -> SpanLimits {
        SpanLimits {
            min: self.min,
            max: self.max,
        }
    }
}
