//! Calendar grid: the displayed months, split into weeks of days.
//!
//! The grid is rebuilt from scratch whenever its inputs change. Nothing here
//! holds state between builds.

use chrono::NaiveDate;
use serde::Serialize;

use crate::broadcast::{end_of_broadcast_week, start_of_broadcast_week};
use crate::config::DayPickerConfig;
use crate::consts::{DAYS_PER_WEEK, FIXED_DAYS_PER_BROADCAST_MONTH, FIXED_DAYS_PER_MONTH};
use crate::date_lib::DateLib;
use crate::navigation::NavBounds;
use crate::types::{FirstWeekContainsDate, WeekStartsOn};

/// One day cell, tied to the month it is displayed under.
///
/// The same date can appear twice in a multi-month grid: once in its own
/// month and once as an outside day of a neighbouring month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    date:          NaiveDate,
    display_month: NaiveDate,
    outside:       bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, display_month: NaiveDate, lib: &DateLib) -> Self {
        Self {
            date,
            display_month: lib.start_of_month(display_month),
            outside: !lib.is_same_month(date, display_month),
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// First day of the month this cell is displayed under
    pub const fn display_month(&self) -> NaiveDate {
        self.display_month
    }

    /// True when the date belongs to a neighbouring month
    pub const fn is_outside(&self) -> bool {
        self.outside
    }
}

/// One grid row of 7 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    week_number: u32,
    days:        Vec<CalendarDay>,
}

impl CalendarWeek {
    pub const fn week_number(&self) -> u32 {
        self.week_number
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }
}

/// One displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    date:  NaiveDate,
    weeks: Vec<CalendarWeek>,
}

impl CalendarMonth {
    /// First day of the month
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}

/// The full grid for the displayed months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    months: Vec<CalendarMonth>,
    dates:  Vec<NaiveDate>,
}

impl Calendar {
    /// Builds the grid starting at `first_month`, clipped at `bounds.end`
    pub fn build(
        first_month: NaiveDate,
        bounds: NavBounds,
        config: &DayPickerConfig,
        lib: &DateLib,
    ) -> Self {
        let displayed = display_months(first_month, bounds, config, lib);
        let dates = grid_dates(&displayed, config, lib);
        let months = build_months(&displayed, &dates, config, lib);
        tracing::debug!(
            first_month = %lib.start_of_month(first_month),
            months = months.len(),
            dates = dates.len(),
            "built calendar"
        );
        Self { months, dates }
    }

    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// Every date in the grid, in order, without month duplicates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Every day cell, month by month
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.months.iter().flat_map(CalendarMonth::days)
    }

    /// Every week row, month by month
    pub fn weeks(&self) -> impl Iterator<Item = &CalendarWeek> {
        self.months.iter().flat_map(|month| month.weeks.iter())
    }

    /// First displayed month, in chronological order
    pub fn first_month(&self) -> Option<NaiveDate> {
        self.months.iter().map(CalendarMonth::date).min()
    }

    /// Last displayed month, in chronological order
    pub fn last_month(&self) -> Option<NaiveDate> {
        self.months.iter().map(CalendarMonth::date).max()
    }

    /// Checks if `date` is shown as a day of its own month
    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.days().any(|day| !day.is_outside() && day.date() == date)
    }

    /// The cell showing `date` in its own month
    pub fn find_day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| !day.is_outside() && day.date() == date)
    }
}

/// Start of the first grid row for `month`
fn first_grid_day(month: NaiveDate, config: &DayPickerConfig, lib: &DateLib) -> NaiveDate {
    let first = lib.start_of_month(month);
    if config.broadcast_calendar {
        start_of_broadcast_week(first, lib)
    } else if config.iso_week {
        lib.start_of_iso_week(first)
    } else {
        lib.start_of_week(first)
    }
}

/// End of the last grid row for `month`
fn last_grid_day(month: NaiveDate, config: &DayPickerConfig, lib: &DateLib) -> NaiveDate {
    if config.broadcast_calendar {
        end_of_broadcast_week(month, lib)
    } else if config.iso_week {
        lib.end_of_iso_week(lib.end_of_month(month))
    } else {
        lib.end_of_week(lib.end_of_month(month))
    }
}

const fn fixed_days_per_month(config: &DayPickerConfig) -> usize {
    if config.broadcast_calendar {
        FIXED_DAYS_PER_BROADCAST_MONTH as usize
    } else {
        FIXED_DAYS_PER_MONTH as usize
    }
}

/// Month the picker opens on.
///
/// `month`, else `default_month`, else `today`. Shifted back so the last
/// displayed month does not pass `bounds.end`, then forward to `bounds.start`.
pub fn initial_month(
    config: &DayPickerConfig,
    today: NaiveDate,
    bounds: NavBounds,
    lib: &DateLib,
) -> NaiveDate {
    let mut initial = config.month.or(config.default_month).unwrap_or(today);
    let count = config.number_of_months.as_i32();
    if let Some(end) = bounds.end {
        if lib.difference_in_calendar_months(end, initial) < count {
            initial = lib.add_months(end, -(count - 1));
        }
    }
    if let Some(start) = bounds.start {
        if lib.difference_in_calendar_months(initial, start) < 0 {
            initial = start;
        }
    }
    lib.start_of_month(initial)
}

/// First days of the displayed months, stopping after the month of `bounds.end`
pub fn display_months(
    first: NaiveDate,
    bounds: NavBounds,
    config: &DayPickerConfig,
    lib: &DateLib,
) -> Vec<NaiveDate> {
    let first = lib.start_of_month(first);
    let end = bounds.end.map(|end| lib.start_of_month(end));
    (0..config.number_of_months.as_i32())
        .map(|offset| lib.add_months(first, offset))
        .take_while(|month| end.is_none_or(|end| *month <= end))
        .collect()
}

/// Every date shown across the displayed months.
///
/// Runs from the first row of the first month to the last row of the last
/// month. With `fixed_weeks`, padded so each month can take 6 rows
/// (5 in broadcast mode).
pub fn grid_dates(months: &[NaiveDate], config: &DayPickerConfig, lib: &DateLib) -> Vec<NaiveDate> {
    let (Some(&first), Some(&last)) = (months.first(), months.last()) else {
        return Vec::new();
    };
    let start = first_grid_day(first, config, lib);
    let end = last_grid_day(last, config, lib);
    let mut dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();

    if config.fixed_weeks {
        let wanted = fixed_days_per_month(config) * months.len();
        let mut next = end;
        while dates.len() < wanted {
            next = lib.add_days(next, 1);
            dates.push(next);
        }
    }
    dates
}

/// Week number shown for a row starting at `first_day`
fn week_number(first_day: NaiveDate, config: &DayPickerConfig, lib: &DateLib) -> u32 {
    if config.iso_week {
        lib.iso_week(first_day)
    } else if config.broadcast_calendar {
        // broadcast week 1 is the Monday-start week holding January 1st
        lib.with_week_starts_on(WeekStartsOn::MONDAY)
            .with_first_week_contains_date(FirstWeekContainsDate::JANUARY_FIRST)
            .week(first_day)
    } else {
        lib.week(first_day)
    }
}

/// Splits the grid dates into months of 7-day weeks
pub fn build_months(
    months: &[NaiveDate],
    dates: &[NaiveDate],
    config: &DayPickerConfig,
    lib: &DateLib,
) -> Vec<CalendarMonth> {
    let mut built: Vec<CalendarMonth> = months
        .iter()
        .map(|&month| {
            let first = first_grid_day(month, config, lib);
            let last = last_grid_day(month, config, lib);
            let mut month_dates: Vec<NaiveDate> =
                dates.iter().copied().filter(|d| first <= *d && *d <= last).collect();

            let fixed = fixed_days_per_month(config);
            if config.fixed_weeks && month_dates.len() < fixed {
                let extra = fixed - month_dates.len();
                month_dates.extend(dates.iter().copied().filter(|d| *d > last).take(extra));
            }

            let weeks = month_dates
                .chunks(DAYS_PER_WEEK as usize)
                .filter_map(|chunk| {
                    let first_day = *chunk.first()?;
                    let days = chunk.iter().map(|&d| CalendarDay::new(d, month, lib)).collect();
                    Some(CalendarWeek {
                        week_number: week_number(first_day, config, lib),
                        days,
                    })
                })
                .collect();

            CalendarMonth {
                date: lib.start_of_month(month),
                weeks,
            }
        })
        .collect();

    if config.reverse_months {
        built.reverse();
    }
    built
}

/// Dates of one week, in header order, for weekday headers
pub fn weekdays(today: NaiveDate, config: &DayPickerConfig, lib: &DateLib) -> Vec<NaiveDate> {
    let start = if config.broadcast_calendar || config.iso_week {
        lib.start_of_iso_week(today)
    } else {
        lib.start_of_week(today)
    };
    (0..i64::from(DAYS_PER_WEEK)).map(|i| lib.add_days(start, i)).collect()
}
