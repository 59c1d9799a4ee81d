//! Headless core of a calendar day picker.
//!
//! Builds the month/week/day grid, applies single, multiple and range
//! selection rules, computes per-day modifiers and produces captions and
//! accessibility labels. Rendering is left to the caller.
//!
//! ```
//! use day_grid::{DayPicker, DayPickerConfig, Mode};
//! use chrono::NaiveDate;
//!
//! let config = DayPickerConfig {
//!     mode: Mode::Range,
//!     today: NaiveDate::from_ymd_opt(2024, 3, 15),
//!     ..DayPickerConfig::default()
//! };
//! let mut picker = DayPicker::new(config)?;
//! assert_eq!(picker.caption(), ["March 2024"]);
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).ok_or("bad date");
//! picker.select(day(10)?);
//! picker.select(day(5)?);
//! assert!(picker.selection().is_selected(day(7)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod broadcast;
mod calendar;
mod config;
mod consts;
mod date_lib;
mod format;
mod formatters;
mod labels;
mod locale;
mod matcher;
mod modifiers;
mod navigation;
mod picker;
mod prelude;
mod range;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use broadcast::{broadcast_weeks_in_month, end_of_broadcast_week, start_of_broadcast_week};
pub use calendar::{
    Calendar, CalendarDay, CalendarMonth, CalendarWeek, build_months, display_months, grid_dates,
    initial_month, weekdays,
};
pub use config::{CaptionLayout, ConfigError, DayPickerConfig, Mode};
pub use consts::*;
pub use date_lib::DateLib;
pub use format::{Numerals, format_pattern};
pub use formatters::{
    DateFormatter, Formatters, TextFormatter, WeekNumberFormatter, format_caption, format_day,
    format_month_dropdown, format_week_number, format_week_number_header, format_weekday_name,
    format_year_dropdown,
};
pub use labels::{
    DateLabel, DayLabel, Labels, NavLabel, TextLabel, WeekNumberLabel, label_day_button,
    label_grid, label_grid_cell, label_month_dropdown, label_nav, label_next, label_previous,
    label_week_number, label_week_number_header, label_weekday, label_year_dropdown,
};
pub use locale::{
    ALL as LOCALES, DE, DatePatterns, EN_GB, EN_US, ES, FR, Locale, NameWidth, default_locale,
};
pub use matcher::{DayPredicate, Matcher, any_match, range_contains_matchers};
pub use modifiers::{DayFlag, DayModifiers, ModifierRules, compute_modifiers};
pub use navigation::{
    DropdownOption, MoveBy, MoveDirection, NavBounds, month_options, next_focus, next_month,
    previous_month, year_options,
};
pub use picker::{DayPicker, WeekdayHeader};
pub use range::{DateRange, RangeError, SpanLimits};
pub use selection::{MultipleSelection, RangeSelection, Selection, SingleSelection};
pub use types::{FirstWeekContainsDate, NumberOfMonths, WeekStartsOn};
