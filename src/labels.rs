//! Accessibility labels (ARIA strings) for the grid and its controls.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::consts::{CAPTION_FORMAT, GRID_CELL_FORMAT, WEEKDAY_LABEL_FORMAT};
use crate::date_lib::DateLib;
use crate::modifiers::DayModifiers;

/// Labels a day given its modifiers
pub type DayLabel = Arc<dyn Fn(NaiveDate, &DayModifiers, &DateLib) -> String + Send + Sync>;
/// Labels a month or weekday
pub type DateLabel = Arc<dyn Fn(NaiveDate, &DateLib) -> String + Send + Sync>;
/// Labels a navigation button; the month is `None` when there is nowhere to go
pub type NavLabel = Arc<dyn Fn(Option<NaiveDate>, &DateLib) -> String + Send + Sync>;
pub type WeekNumberLabel = Arc<dyn Fn(u32, &DateLib) -> String + Send + Sync>;
pub type TextLabel = Arc<dyn Fn(&DateLib) -> String + Send + Sync>;

/// Long date, e.g. "Monday, November 21st, 2022", prefixed with "Today, "
/// on today
pub fn label_grid_cell(date: NaiveDate, modifiers: &DayModifiers, lib: &DateLib) -> String {
    let label = lib.format(date, GRID_CELL_FORMAT);
    if modifiers.is_today() { format!("Today, {label}") } else { label }
}

/// Grid cell label, with ", selected" appended on selected days
pub fn label_day_button(date: NaiveDate, modifiers: &DayModifiers, lib: &DateLib) -> String {
    let label = label_grid_cell(date, modifiers, lib);
    if modifiers.is_selected() { format!("{label}, selected") } else { label }
}

pub fn label_grid(month: NaiveDate, lib: &DateLib) -> String {
    lib.format(month, CAPTION_FORMAT)
}

pub fn label_weekday(weekday: NaiveDate, lib: &DateLib) -> String {
    lib.format(weekday, WEEKDAY_LABEL_FORMAT)
}

pub fn label_week_number(week_number: u32, _lib: &DateLib) -> String {
    format!("Week {week_number}")
}

pub fn label_week_number_header(_lib: &DateLib) -> String {
    "Week Number".to_owned()
}

pub fn label_next(_month: Option<NaiveDate>, _lib: &DateLib) -> String {
    "Go to the Next Month".to_owned()
}

pub fn label_previous(_month: Option<NaiveDate>, _lib: &DateLib) -> String {
    "Go to the Previous Month".to_owned()
}

pub fn label_nav(_lib: &DateLib) -> String {
    String::new()
}

pub fn label_month_dropdown(_lib: &DateLib) -> String {
    "Choose the Month".to_owned()
}

pub fn label_year_dropdown(_lib: &DateLib) -> String {
    "Choose the Year".to_owned()
}

/// The labels used by one picker.
#[derive(Clone)]
pub struct Labels {
    grid_cell:          DayLabel,
    day_button:         DayLabel,
    grid:               DateLabel,
    weekday:            DateLabel,
    week_number:        WeekNumberLabel,
    week_number_header: TextLabel,
    next:               NavLabel,
    previous:           NavLabel,
    nav:                TextLabel,
    month_dropdown:     TextLabel,
    year_dropdown:      TextLabel,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            grid_cell:          Arc::new(label_grid_cell),
            day_button:         Arc::new(label_day_button),
            grid:               Arc::new(label_grid),
            weekday:            Arc::new(label_weekday),
            week_number:        Arc::new(label_week_number),
            week_number_header: Arc::new(label_week_number_header),
            next:               Arc::new(label_next),
            previous:           Arc::new(label_previous),
            nav:                Arc::new(label_nav),
            month_dropdown:     Arc::new(label_month_dropdown),
            year_dropdown:      Arc::new(label_year_dropdown),
        }
    }
}

impl fmt::Debug for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labels").finish_non_exhaustive()
    }
}

impl Labels {
    pub fn grid_cell(&self, date: NaiveDate, modifiers: &DayModifiers, lib: &DateLib) -> String {
        (self.grid_cell)(date, modifiers, lib)
    }

    pub fn day_button(&self, date: NaiveDate, modifiers: &DayModifiers, lib: &DateLib) -> String {
        (self.day_button)(date, modifiers, lib)
    }

    pub fn grid(&self, month: NaiveDate, lib: &DateLib) -> String {
        (self.grid)(month, lib)
    }

    pub fn weekday(&self, weekday: NaiveDate, lib: &DateLib) -> String {
        (self.weekday)(weekday, lib)
    }

    pub fn week_number(&self, week_number: u32, lib: &DateLib) -> String {
        (self.week_number)(week_number, lib)
    }

    pub fn week_number_header(&self, lib: &DateLib) -> String {
        (self.week_number_header)(lib)
    }

    pub fn next(&self, month: Option<NaiveDate>, lib: &DateLib) -> String {
        (self.next)(month, lib)
    }

    pub fn previous(&self, month: Option<NaiveDate>, lib: &DateLib) -> String {
        (self.previous)(month, lib)
    }

    pub fn nav(&self, lib: &DateLib) -> String {
        (self.nav)(lib)
    }

    pub fn month_dropdown(&self, lib: &DateLib) -> String {
        (self.month_dropdown)(lib)
    }

    pub fn year_dropdown(&self, lib: &DateLib) -> String {
        (self.year_dropdown)(lib)
    }

    #[must_use]
    pub fn with_grid_cell(
        mut self,
        f: impl Fn(NaiveDate, &DayModifiers, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.grid_cell = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_day_button(
        mut self,
        f: impl Fn(NaiveDate, &DayModifiers, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.day_button = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_grid(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.grid = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_weekday(
        mut self,
        f: impl Fn(NaiveDate, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.weekday = Arc::new(f);
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
    pub fn with_next(
        mut self,
        f: impl Fn(Option<NaiveDate>, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.next = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_previous(
        mut self,
        f: impl Fn(Option<NaiveDate>, &DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.previous = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_nav(mut self, f: impl Fn(&DateLib) -> String + Send + Sync + 'static) -> Self {
        self.nav = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_month_dropdown(
        mut self,
        f: impl Fn(&DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.month_dropdown = Arc::new(f);
        self
    }

    #[must_use]
    pub fn with_year_dropdown(
        mut self,
        f: impl Fn(&DateLib) -> String + Send + Sync + 'static,
    ) -> Self {
        self.year_dropdown = Arc::new(f);
        self
    }
}
