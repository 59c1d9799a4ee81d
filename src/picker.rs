//! The day picker controller.
//!
//! [`DayPicker`] owns the config, the displayed month, the selection and the
//! focused day. A UI layer calls its operations in response to input and
//! draws the [`Calendar`] it exposes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{Calendar, CalendarDay, initial_month, weekdays};
use crate::config::{ConfigError, DayPickerConfig};
use crate::date_lib::DateLib;
use crate::formatters::Formatters;
use crate::labels::Labels;
use crate::modifiers::{DayFlag, DayModifiers, ModifierRules};
use crate::navigation::{
    DropdownOption, MoveBy, MoveDirection, NavBounds, month_options, next_focus, year_options,
};
use crate::selection::Selection;

/// One weekday column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHeader {
    pub date:  NaiveDate,
    /// Short name shown in the header, e.g. "Mo"
    pub name:  String,
    /// Full name for assistive tech, e.g. "Monday"
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct DayPicker {
    config:     DayPickerConfig,
    lib:        DateLib,
    today:      NaiveDate,
    bounds:     NavBounds,
    month:      NaiveDate,
    calendar:   Calendar,
    selection:  Selection,
    focused:    Option<NaiveDate>,
    formatters: Formatters,
    labels:     Labels,
}

impl DayPicker {
    /// Creates a picker showing the initial month with an empty selection.
    ///
    /// # Errors
    /// Returns the `ConfigError` from [`DayPickerConfig::validate`].
    pub fn new(config: DayPickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lib = config.date_lib();
        let today = config.today();
        let bounds = NavBounds::from_config(&config, today, &lib);
        let month = initial_month(&config, today, bounds, &lib);
        let calendar = Calendar::build(month, bounds, &config, &lib);
        let selection = Selection::from_config(&config);
        Ok(Self {
            config,
            lib,
            today,
            bounds,
            month,
            calendar,
            selection,
            focused: None,
            formatters: Formatters::default(),
            labels: Labels::default(),
        })
    }

    #[must_use]
    pub fn with_formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = formatters;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Replaces the selection; ignored when its mode differs from the config's
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        if selection.mode() == self.config.mode {
            self.selection = selection;
        } else {
            tracing::warn!(
                expected = %self.config.mode,
                got = %selection.mode(),
                "selection mode does not match picker mode"
            );
        }
        self
    }

    pub const fn config(&self) -> &DayPickerConfig {
        &self.config
    }

    pub const fn date_lib(&self) -> &DateLib {
        &self.lib
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    pub const fn nav_bounds(&self) -> NavBounds {
        self.bounds
    }

    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// First displayed month
    pub const fn month(&self) -> NaiveDate {
        self.month
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn focused(&self) -> Option<NaiveDate> {
        self.focused
    }

    pub const fn formatters(&self) -> &Formatters {
        &self.formatters
    }

    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    fn rules(&self) -> ModifierRules<'_> {
        ModifierRules::new(&self.config, self.today, self.bounds)
    }

    /// Shows `month` first, clamped into the navigation bounds
    pub fn go_to_month(&mut self, month: NaiveDate) {
        if self.config.disable_navigation {
            tracing::trace!(%month, "navigation is disabled");
            return;
        }
        let count = self.config.number_of_months.as_i32();
        let month = self.bounds.clamp_month(month, count, &self.lib);
        if month != self.month {
            self.month = month;
            self.calendar = Calendar::build(month, self.bounds, &self.config, &self.lib);
        }
    }

    /// Shows the month of `date` unless the day is already displayed
    pub fn go_to_day(&mut self, date: NaiveDate) {
        if !self.calendar.has_day(date) {
            self.go_to_month(date);
        }
    }

    /// Month the "next" button leads to
    pub fn next_month_target(&self) -> Option<NaiveDate> {
        crate::navigation::next_month(self.month, self.bounds, &self.config, &self.lib)
    }

    /// Month the "previous" button leads to
    pub fn previous_month_target(&self) -> Option<NaiveDate> {
        crate::navigation::previous_month(self.month, self.bounds, &self.config, &self.lib)
    }

    /// Moves forward; returns the new first month, or `None` at the end
    pub fn next_month(&mut self) -> Option<NaiveDate> {
        let target = self.next_month_target()?;
        self.go_to_month(target);
        Some(self.month)
    }

    /// Moves back; returns the new first month, or `None` at the start
    pub fn previous_month(&mut self) -> Option<NaiveDate> {
        let target = self.previous_month_target()?;
        self.go_to_month(target);
        Some(self.month)
    }

    /// Handles a click on `date`. Hidden and disabled days are ignored.
    pub fn select(&mut self, date: NaiveDate) -> &Selection {
        let rules = self.rules();
        if rules.is_hidden_date(date) {
            tracing::trace!(%date, "ignoring click on hidden day");
            return &self.selection;
        }
        if !rules.is_disabled(date) {
            self.focused = Some(date);
        }
        self.selection = self.selection.select(date, &self.config.disabled, &self.lib);
        &self.selection
    }

    /// Focuses `date` if it can take focus; returns whether it did
    pub fn focus(&mut self, date: NaiveDate) -> bool {
        let rules = self.rules();
        if rules.is_disabled(date) || rules.is_hidden_date(date) {
            return false;
        }
        self.focused = Some(date);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Moves focus from the focused day, bringing the new day into view.
    ///
    /// Returns the newly focused day, or `None` when nothing is focused or no
    /// focusable day was found.
    pub fn move_focus(&mut self, move_by: MoveBy, direction: MoveDirection) -> Option<NaiveDate> {
        let from = self.focused?;
        let next = next_focus(move_by, direction, from, self.bounds, &self.config, &self.lib)?;
        self.go_to_day(next);
        self.focused = Some(next);
        Some(next)
    }

    /// Day that takes focus when the grid is entered: the focused day, else
    /// the first selected day, else today, else the first focusable day
    pub fn focus_target(&self) -> Option<NaiveDate> {
        let candidates: Vec<(NaiveDate, DayModifiers)> = self
            .calendar
            .days()
            .filter(|day| !day.is_outside())
            .map(|day| (day.date(), self.modifiers_for(day)))
            .filter(|(_, modifiers)| modifiers.is_interactive())
            .collect();
        let find = |flag: DayFlag| {
            candidates
                .iter()
                .find(|(_, modifiers)| modifiers.has(flag))
                .map(|(date, _)| *date)
        };
        find(DayFlag::Focused)
            .or_else(|| find(DayFlag::Selected))
            .or_else(|| find(DayFlag::Today))
            .or_else(|| candidates.first().map(|(date, _)| *date))
    }

    /// Every modifier of `day`, selection and focus included
    pub fn modifiers_for(&self, day: &CalendarDay) -> DayModifiers {
        let mut modifiers = self.rules().for_day(day);
        self.selection.apply_flags(day.date(), &mut modifiers);
        modifiers.set(
            DayFlag::Focused,
            !day.is_outside() && self.focused == Some(day.date()),
        );
        modifiers
    }

    /// Accessible label of the day's button
    pub fn day_label(&self, day: &CalendarDay) -> String {
        let modifiers = self.modifiers_for(day);
        self.labels.day_button(day.date(), &modifiers, &self.lib)
    }

    /// Text shown in the day's cell
    pub fn day_text(&self, day: &CalendarDay) -> String {
        self.formatters.day(day.date(), &self.lib)
    }

    /// Caption of each displayed month, in display order
    pub fn caption(&self) -> Vec<String> {
        self.calendar
            .months()
            .iter()
            .map(|month| self.formatters.caption(month.date(), &self.lib))
            .collect()
    }

    /// Column headers for one week, in display order
    pub fn weekday_headers(&self) -> Vec<WeekdayHeader> {
        weekdays(self.today, &self.config, &self.lib)
            .into_iter()
            .map(|date| WeekdayHeader {
                date,
                name: self.formatters.weekday_name(date, &self.lib),
                label: self.labels.weekday(date, &self.lib),
            })
            .collect()
    }

    /// Label of the "next" button
    pub fn next_label(&self) -> String {
        self.labels.next(self.next_month_target(), &self.lib)
    }

    /// Label of the "previous" button
    pub fn previous_label(&self) -> String {
        self.labels.previous(self.previous_month_target(), &self.lib)
    }

    /// Month dropdown options for the first displayed month
    pub fn month_options(&self) -> Option<Vec<DropdownOption<u32>>> {
        month_options(self.month, self.bounds, &self.formatters, &self.lib)
    }

    pub fn year_options(&self) -> Option<Vec<DropdownOption<i32>>> {
        year_options(self.bounds, &self.formatters, self.config.reverse_years, &self.lib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CaptionLayout, Mode};
    use crate::matcher::Matcher;
    use crate::range::DateRange;
    use crate::test_utils::{date, range};
    use crate::types::{NumberOfMonths, WeekStartsOn};
    use chrono::Weekday;

    fn picker(config: DayPickerConfig) -> DayPicker {
        DayPicker::new(DayPickerConfig {
            today: config.today.or(Some(date(2024, 3, 15))),
            ..config
        })
        .unwrap()
    }

    fn range_of(picker: &DayPicker) -> Option<DateRange> {
        match picker.selection() {
            Selection::Range(r) => r.selected(),
            _ => None,
        }
    }

    #[test]
    fn test_new_opens_on_today() {
        let p = picker(DayPickerConfig::default());
        assert_eq!(p.month(), date(2024, 3, 1));
        assert_eq!(p.calendar().months().len(), 1);
        assert_eq!(p.caption(), vec!["March 2024".to_owned()]);
        assert!(p.selection().is_empty());
        assert_eq!(p.focused(), None);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DayPickerConfig {
            start_month: Some(date(2024, 5, 1)),
            end_month: Some(date(2024, 1, 1)),
            ..DayPickerConfig::default()
        };
        assert!(matches!(DayPicker::new(config), Err(ConfigError::InvertedMonths { .. })));
    }

    #[test]
    fn test_navigation_within_bounds() {
        let mut p = picker(DayPickerConfig {
            start_month: Some(date(2024, 2, 1)),
            end_month: Some(date(2024, 4, 1)),
            ..DayPickerConfig::default()
        });
        assert_eq!(p.next_month(), Some(date(2024, 4, 1)));
        assert_eq!(p.next_month(), None);
        assert_eq!(p.previous_month(), Some(date(2024, 3, 1)));
        assert_eq!(p.previous_month(), Some(date(2024, 2, 1)));
        assert_eq!(p.previous_month(), None);

        p.go_to_month(date(2030, 1, 1));
        assert_eq!(p.month(), date(2024, 4, 1));
        p.go_to_month(date(2000, 1, 1));
        assert_eq!(p.month(), date(2024, 2, 1));
        assert_eq!(p.caption(), vec!["February 2024".to_owned()]);
    }

    #[test]
    fn test_opens_inside_year_bounds() {
        let mut p = picker(DayPickerConfig {
            to_year: Some(2022),
            ..DayPickerConfig::default()
        });
        assert_eq!(p.month(), date(2022, 12, 1));
        assert_eq!(p.caption(), vec!["December 2022".to_owned()]);
        let visible = p.calendar().days().filter(|d| !p.modifiers_for(d).is_hidden()).count();
        assert_eq!(visible, 31);
        assert_eq!(p.next_month(), None);

        let p = picker(DayPickerConfig {
            from_year: Some(2025),
            ..DayPickerConfig::default()
        });
        assert_eq!(p.month(), date(2025, 1, 1));
    }

    #[test]
    fn test_year_dropdown_stops_at_year_end() {
        let p = picker(DayPickerConfig {
            caption_layout: CaptionLayout::Dropdown,
            number_of_months: NumberOfMonths::new(2).unwrap(),
            today: Some(date(2024, 12, 10)),
            ..DayPickerConfig::default()
        });
        assert_eq!(p.nav_bounds().end, Some(date(2024, 12, 31)));
        assert_eq!(p.caption(), vec!["November 2024".to_owned(), "December 2024".to_owned()]);
        assert!(p.calendar().days().all(|d| d.date() <= date(2025, 1, 4)));
        assert!(!p.calendar().has_day(date(2025, 1, 1)));
    }

    #[test]
    fn test_go_to_day_only_moves_when_hidden_from_view() {
        let mut p = picker(DayPickerConfig {
            number_of_months: NumberOfMonths::new(2).unwrap(),
            ..DayPickerConfig::default()
        });
        p.go_to_day(date(2024, 4, 20));
        assert_eq!(p.month(), date(2024, 3, 1));
        p.go_to_day(date(2024, 7, 4));
        assert_eq!(p.month(), date(2024, 7, 1));
        assert_eq!(p.caption(), vec!["July 2024".to_owned(), "August 2024".to_owned()]);
    }

    #[test]
    fn test_disabled_navigation() {
        let mut p = picker(DayPickerConfig {
            disable_navigation: true,
            ..DayPickerConfig::default()
        });
        assert_eq!(p.next_month(), None);
        p.go_to_month(date(2024, 8, 1));
        assert_eq!(p.month(), date(2024, 3, 1));
    }

    #[test]
    fn test_range_selection_flow() {
        let mut p = picker(DayPickerConfig {
            mode: Mode::Range,
            ..DayPickerConfig::default()
        });
        p.select(date(2024, 3, 10));
        p.select(date(2024, 3, 5));
        assert_eq!(range_of(&p), Some(range((2024, 3, 5), (2024, 3, 10))));
        assert_eq!(p.focused(), Some(date(2024, 3, 5)));

        let cal = p.calendar().clone();
        let start = cal.find_day(date(2024, 3, 5)).unwrap();
        let middle = cal.find_day(date(2024, 3, 7)).unwrap();
        let end = cal.find_day(date(2024, 3, 10)).unwrap();
        assert!(p.modifiers_for(start).has(DayFlag::RangeStart));
        assert!(p.modifiers_for(start).has(DayFlag::Focused));
        assert!(p.modifiers_for(middle).has(DayFlag::RangeMiddle));
        assert!(p.modifiers_for(end).has(DayFlag::RangeEnd));
        assert_eq!(p.day_label(end), "Sunday, March 10th, 2024, selected");
    }

    #[test]
    fn test_select_ignores_disabled_and_hidden() {
        let mut p = picker(DayPickerConfig {
            disabled: vec![Matcher::DayOfWeek(vec![Weekday::Sun])],
            hidden: vec![Matcher::Date(date(2024, 3, 12))],
            ..DayPickerConfig::default()
        });
        p.select(date(2024, 3, 10));
        p.select(date(2024, 3, 12));
        assert!(p.selection().is_empty());
        assert_eq!(p.focused(), None);
        assert!(!p.focus(date(2024, 3, 10)));
        assert!(p.focus(date(2024, 3, 11)));
    }

    #[test]
    fn test_today_label() {
        let p = picker(DayPickerConfig::default());
        let today = p.calendar().find_day(date(2024, 3, 15)).unwrap();
        assert_eq!(p.day_label(today), "Today, Friday, March 15th, 2024");
        assert_eq!(p.day_text(today), "15");
    }

    #[test]
    fn test_move_focus_changes_month() {
        let mut p = picker(DayPickerConfig::default());
        assert_eq!(p.move_focus(MoveBy::Day, MoveDirection::After), None);

        assert!(p.focus(date(2024, 3, 31)));
        assert_eq!(p.move_focus(MoveBy::Day, MoveDirection::After), Some(date(2024, 4, 1)));
        assert_eq!(p.month(), date(2024, 4, 1));

        assert_eq!(p.move_focus(MoveBy::Week, MoveDirection::After), Some(date(2024, 4, 8)));
        assert_eq!(p.month(), date(2024, 4, 1));

        p.blur();
        assert_eq!(p.focused(), None);
    }

    #[test]
    fn test_focus_target_order() {
        let mut p = picker(DayPickerConfig::default());
        assert_eq!(p.focus_target(), Some(date(2024, 3, 15)));

        p.select(date(2024, 3, 20));
        p.blur();
        assert_eq!(p.focus_target(), Some(date(2024, 3, 20)));

        p.focus(date(2024, 3, 2));
        assert_eq!(p.focus_target(), Some(date(2024, 3, 2)));

        let mut away = picker(DayPickerConfig::default());
        away.go_to_month(date(2024, 6, 1));
        assert_eq!(away.focus_target(), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_weekday_headers() {
        let p = picker(DayPickerConfig::default());
        let headers = p.weekday_headers();
        assert_eq!(headers.len(), 7);
        assert_eq!(headers[0].name, "Su");
        assert_eq!(headers[0].label, "Sunday");

        let monday_first = picker(DayPickerConfig {
            week_starts_on: Some(WeekStartsOn::MONDAY),
            ..DayPickerConfig::default()
        });
        assert_eq!(monday_first.weekday_headers()[0].name, "Mo");
    }

    #[test]
    fn test_dropdowns_and_nav_labels() {
        let p = picker(DayPickerConfig {
            caption_layout: CaptionLayout::Dropdown,
            from_year: Some(2020),
            end_month: Some(date(2024, 3, 1)),
            reverse_years: true,
            ..DayPickerConfig::default()
        });
        let years = p.year_options().unwrap();
        assert_eq!(years.first().map(|o| o.value), Some(2024));
        assert_eq!(years.last().map(|o| o.value), Some(2020));
        let months = p.month_options().unwrap();
        assert!(!months[2].disabled);
        assert!(months[3].disabled);
        assert_eq!(p.next_label(), "Go to the Next Month");
        assert_eq!(p.previous_label(), "Go to the Previous Month");
    }

    #[test]
    fn test_with_selection_checks_mode() {
        let single = Selection::from_config(&DayPickerConfig::default());
        let p = picker(DayPickerConfig {
            mode: Mode::Multiple,
            ..DayPickerConfig::default()
        })
        .with_selection(single);
        assert_eq!(p.selection().mode(), Mode::Multiple);
    }
}
