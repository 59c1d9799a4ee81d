//! Month navigation, caption dropdowns and keyboard focus movement.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::broadcast::{end_of_broadcast_week, start_of_broadcast_week};
use crate::config::DayPickerConfig;
use crate::consts::{DROPDOWN_YEARS_BACK, MAX_FOCUS_ATTEMPTS, MONTHS_PER_YEAR};
use crate::date_lib::DateLib;
use crate::formatters::Formatters;
use crate::matcher::any_match;
use crate::prelude::*;

/// How far navigation can go. `start` is the first day of the earliest
/// month, `end` the last day of the latest month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavBounds {
    pub start: Option<NaiveDate>,
    pub end:   Option<NaiveDate>,
}

impl NavBounds {
    /// Bounds from the config.
    ///
    /// `start_month`, else January of `from_year`, else 100 years before
    /// today when a year dropdown is shown. `end_month`, else December of
    /// `to_year`, else the end of today's year with a year dropdown.
    pub fn from_config(config: &DayPickerConfig, today: NaiveDate, lib: &DateLib) -> Self {
        let dropdown = config.caption_layout.has_year_dropdown();
        let earliest = || lib.start_of_year(lib.add_years(today, -DROPDOWN_YEARS_BACK));
        let start = config
            .start_month
            .or_else(|| config.from_year.and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)))
            .map(|month| lib.start_of_month(month))
            .or_else(|| dropdown.then(earliest));
        let end = config
            .end_month
            .or_else(|| config.to_year.and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31)))
            .map(|month| lib.end_of_month(month))
            .or_else(|| dropdown.then(|| lib.end_of_year(today)));
        Self { start, end }
    }

    /// Checks if `date` lies within the bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }

    /// Moves `month` into the bounds, keeping `number_of_months` visible
    /// before the end when possible
    pub fn clamp_month(&self, month: NaiveDate, number_of_months: i32, lib: &DateLib) -> NaiveDate {
        let mut month = lib.start_of_month(month);
        if let Some(end) = self.end {
            let last_first = lib.add_months(lib.start_of_month(end), -(number_of_months - 1));
            if month > last_first {
                month = last_first;
            }
        }
        if let Some(start) = self.start {
            if month < start {
                month = start;
            }
        }
        month
    }
}

/// Month the "next" button goes to, or `None` when it is disabled
pub fn next_month(
    first_displayed: NaiveDate,
    bounds: NavBounds,
    config: &DayPickerConfig,
    lib: &DateLib,
) -> Option<NaiveDate> {
    if config.disable_navigation {
        return None;
    }
    let count = config.number_of_months.as_i32();
    let offset = if config.paged_navigation { count } else { 1 };
    let month = lib.start_of_month(first_displayed);
    if let Some(end) = bounds.end {
        if lib.difference_in_calendar_months(end, first_displayed) < count {
            return None;
        }
    }
    Some(lib.add_months(month, offset))
}

/// Month the "previous" button goes to, or `None` when it is disabled
pub fn previous_month(
    first_displayed: NaiveDate,
    bounds: NavBounds,
    config: &DayPickerConfig,
    lib: &DateLib,
) -> Option<NaiveDate> {
    if config.disable_navigation {
        return None;
    }
    let offset = if config.paged_navigation { config.number_of_months.as_i32() } else { 1 };
    let month = lib.start_of_month(first_displayed);
    if let Some(start) = bounds.start {
        if lib.difference_in_calendar_months(month, start) <= 0 {
            return None;
        }
    }
    Some(lib.add_months(month, -offset))
}

/// One entry of a caption dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption<T> {
    pub value:    T,
    pub label:    String,
    pub disabled: bool,
}

/// The 12 months of `display_month`'s year; months outside the bounds are
/// disabled. `None` unless both bounds are set.
pub fn month_options(
    display_month: NaiveDate,
    bounds: NavBounds,
    formatters: &Formatters,
    lib: &DateLib,
) -> Option<Vec<DropdownOption<u32>>> {
    let (start, end) = (bounds.start?, bounds.end?);
    let (start, end) = (lib.start_of_month(start), lib.start_of_month(end));
    let january = lib.start_of_year(display_month);
    let options = (1..=u32::from(MONTHS_PER_YEAR))
        .map(|value| {
            let month = lib.set_month(january, value);
            DropdownOption {
                value,
                label: formatters.month_dropdown(month, lib),
                disabled: month < start || month > end,
            }
        })
        .collect();
    Some(options)
}

/// One option per year in the bounds, newest first when `reverse`.
/// `None` unless both bounds are set.
pub fn year_options(
    bounds: NavBounds,
    formatters: &Formatters,
    reverse: bool,
    lib: &DateLib,
) -> Option<Vec<DropdownOption<i32>>> {
    let (start, end) = (bounds.start?, bounds.end?);
    let mut options: Vec<_> = (start.year()..=end.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(|january| DropdownOption {
            value:    january.year(),
            label:    formatters.year_dropdown(january, lib),
            disabled: false,
        })
        .collect();
    if reverse {
        options.reverse();
    }
    Some(options)
}

/// Unit of a keyboard focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveBy {
    Day,
    Week,
    Month,
    Year,
    StartOfWeek,
    EndOfWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveDirection {
    Before,
    After,
}

/// One focus step from `from`, clamped to the bounds
fn focus_step(
    move_by: MoveBy,
    direction: MoveDirection,
    from: NaiveDate,
    bounds: NavBounds,
    config: &DayPickerConfig,
    lib: &DateLib,
) -> NaiveDate {
    let sign = match direction {
        MoveDirection::Before => -1,
        MoveDirection::After => 1,
    };
    let moved = match move_by {
        MoveBy::Day => lib.add_days(from, sign.into()),
        MoveBy::Week => lib.add_weeks(from, sign.into()),
        MoveBy::Month => lib.add_months(from, sign),
        MoveBy::Year => lib.add_years(from, sign),
        MoveBy::StartOfWeek if config.broadcast_calendar => start_of_broadcast_week(from, lib),
        MoveBy::StartOfWeek if config.iso_week => lib.start_of_iso_week(from),
        MoveBy::StartOfWeek => lib.start_of_week(from),
        MoveBy::EndOfWeek if config.broadcast_calendar => end_of_broadcast_week(from, lib),
        MoveBy::EndOfWeek if config.iso_week => lib.end_of_iso_week(from),
        MoveBy::EndOfWeek => lib.end_of_week(from),
    };
    match (direction, bounds.start, bounds.end) {
        (MoveDirection::Before, Some(start), _) => moved.max(start),
        (MoveDirection::After, _, Some(end)) => moved.min(end),
        _ => moved,
    }
}

/// Next focusable day when moving from `from`.
///
/// Disabled and hidden days are skipped. Gives up with `None` after
/// [`MAX_FOCUS_ATTEMPTS`] skipped days.
pub fn next_focus(
    move_by: MoveBy,
    direction: MoveDirection,
    from: NaiveDate,
    bounds: NavBounds,
    config: &DayPickerConfig,
    lib: &DateLib,
) -> Option<NaiveDate> {
    let mut candidate = from;
    for _ in 0..=MAX_FOCUS_ATTEMPTS {
        candidate = focus_step(move_by, direction, candidate, bounds, config, lib);
        if !any_match(candidate, &config.disabled) && !any_match(candidate, &config.hidden) {
            return Some(candidate);
        }
    }
    tracing::debug!(%from, %move_by, %direction, "no focusable day found");
    None
}
