//! Display strings for captions, day cells, headers and dropdowns.
//!
//! Each string has a default formatter. [`Formatters`] holds the set used by
//! a picker; any entry can be swapped for a closure.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::consts::{
    CAPTION_FORMAT, DAY_FORMAT, MONTH_DROPDOWN_FORMAT, WEEKDAY_FORMAT, YEAR_DROPDOWN_FORMAT,
};
use crate::date_lib::DateLib;

/// Formats a date
pub type DateFormatter = Arc<dyn Fn(NaiveDate, &DateLib) -> String + Send + Sync>;
/// Formats a week number
pub type WeekNumberFormatter = Arc<dyn Fn(u32, &DateLib) -> String + Send + Sync>;
/// Produces a fixed string
pub type TextFormatter = Arc<dyn Fn(&DateLib) -> String + Send + Sync>;

/// Month caption, e.g. "November 2022"
pub fn format_caption(month: NaiveDate, lib: &DateLib) -> String {
    lib.format(month, CAPTION_FORMAT)
}

/// Day cell text, e.g. "21"
pub fn format_day(date: NaiveDate, lib: &DateLib) -> String {
    lib.format(date, DAY_FORMAT)
}

/// Weekday header, e.g. "Mo"
pub fn format_weekday_name(weekday: NaiveDate, lib: &DateLib) -> String {
    lib.format(weekday, WEEKDAY_FORMAT)
}

/// Week number padded to two digits
pub fn format_week_number(week_number: u32, lib: &DateLib) -> String {
    lib.format_number(format_args!("{week_number:02}"))
}

pub fn format_week_number_header(_lib: &DateLib) -> String {
    String::new()
}

/// Month dropdown entry, e.g. "November"
pub fn format_month_dropdown(month: NaiveDate, lib: &DateLib) -> String {
    lib.format(month, MONTH_DROPDOWN_FORMAT)
}

/// Year dropdown entry, e.g. "2022"
pub fn format_year_dropdown(year: NaiveDate, lib: &DateLib) -> String {
    lib.format(year, YEAR_DROPDOWN_FORMAT)
}

/// The formatters used by one picker.
#[derive(Clone)]
pub struct Formatters {
    caption:            DateFormatter,
    day:                DateFormatter,
    weekday_name:       DateFormatter,
    week_number:        WeekNumberFormatter,
    week_number_header: TextFormatter,
    month_dropdown:     DateFormatter,
    year_dropdown:      DateFormatter,
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            caption:            Arc::new(format_caption),
            day:                Arc::new(format_day),
            weekday_name:       Arc::new(format_weekday_name),
            week_number:        Arc::new(format_week_number),
            week_number_header: Arc::new(format_week_number_header),
            month_dropdown:     Arc::new(format_month_dropdown),
            year_dropdown:      Arc::new(format_year_dropdown),
        }
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters").finish_non_exhaustive()
    }
}

impl Formatters {
    pub fn caption(&self, month: NaiveDate, lib: &DateLib) -> String {
        (self.caption)(month, lib)
    }

    pub fn day(&self, date: NaiveDate, lib: &DateLib) -> String {
        (self.day)(date, lib)
    }

    pub fn weekday_name(&self, weekday: NaiveDate, lib: &DateLib) -> String {
        (self.weekday_name)(weekday, lib)
    }

    pub fn week_number(&self, week_number: u32, lib: &DateLib) -> String {
        (self.week_number)(week_number, lib)
    }

    pub fn week_number_header(&self, lib: &DateLib) -> String {
        (self.week_number_header)(lib)
    }

    pub fn month_dropdown(&self, month: NaiveDate, lib: &DateLib) -> String {
        (self.month_dropdown)(month, lib)
    }

    pub fn year_dropdown(&self, year: NaiveDate, lib: &DateLib) -> String {
        (self.year_dropdown)(year, lib)
    }

    #[must_use]
    pub fn with_caption(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.caption = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_day(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.day = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_weekday_name(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.weekday_name = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_week_number(
        mut self,
        f: impl Fn(u32, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.week_number = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_week_number_header(
        mut self,
        f: impl Fn(&DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.week_number_header = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_month_dropdown(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.month_dropdown = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_year_dropdown(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.year_dropdown = Arc::new(f);
        self
    }
}
