//! Per-day modifiers: the flags that drive styling and accessibility labels.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{Calendar, CalendarDay};
use crate::config::DayPickerConfig;
use crate::matcher::any_match;
use crate::navigation::NavBounds;
use crate::prelude::*;

/// Built-in day flags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DayFlag {
    #[display(fmt = "focused")]
    Focused,
    #[display(fmt = "disabled")]
    Disabled,
    #[display(fmt = "hidden")]
    Hidden,
    #[display(fmt = "outside")]
    Outside,
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "selected")]
    Selected,
    #[display(fmt = "range_start")]
    RangeStart,
    #[display(fmt = "range_middle")]
    RangeMiddle,
    #[display(fmt = "range_end")]
    RangeEnd,
}

/// Flags and custom modifier names active on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayModifiers {
    flags:  BTreeSet<DayFlag>,
    custom: BTreeSet<String>,
}

impl DayModifiers {
    pub fn has(&self, flag: DayFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn set(&mut self, flag: DayFlag, on: bool) {
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    /// Builder form of [`DayModifiers::set`]
    #[must_use]
    pub fn with(mut self, flag: DayFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn has_custom(&self, name: &str) -> bool {
        self.custom.contains(name)
    }

    pub fn flags(&self) -> impl Iterator<Item = DayFlag> + '_ {
        self.flags.iter().copied()
    }

    pub fn custom(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }

    pub fn is_disabled(&self) -> bool {
        self.has(DayFlag::Disabled)
    }

    pub fn is_hidden(&self) -> bool {
        self.has(DayFlag::Hidden)
    }

    pub fn is_today(&self) -> bool {
        self.has(DayFlag::Today)
    }

    pub fn is_selected(&self) -> bool {
        self.has(DayFlag::Selected)
    }

    /// True when the day can be clicked or focused
    pub fn is_interactive(&self) -> bool {
        !self.is_disabled() && !self.is_hidden()
    }

    /// Every active name, built-ins first
    pub fn names(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(ToString::to_string)
            .chain(self.custom.iter().cloned())
            .collect()
    }
}

/// Inputs for computing the calendar-derived modifiers of a day.
///
/// Selection and focus flags are added on top by the picker.
#[derive(Debug, Clone, Copy)]
pub struct ModifierRules<'a> {
    config: &'a DayPickerConfig,
    today:  NaiveDate,
    bounds: NavBounds,
}

impl<'a> ModifierRules<'a> {
    pub const fn new(config: &'a DayPickerConfig, today: NaiveDate, bounds: NavBounds) -> Self {
        Self { config, today, bounds }
    }

    /// Checks if `date` matches the `disabled` matchers
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        any_match(date, &self.config.disabled)
    }

    /// Checks if `date` is hidden regardless of the month it is shown under
    pub fn is_hidden_date(&self, date: NaiveDate) -> bool {
        let before_start = self.bounds.start.is_some_and(|start| date < start);
        let after_end = self.bounds.end.is_some_and(|end| date > end);
        any_match(date, &self.config.hidden) || before_start || after_end
    }

    /// Outside days are hidden unless shown; broadcast months always show them
    const fn hides_outside_days(&self) -> bool {
        !self.config.show_outside_days && !self.config.broadcast_calendar
    }

    pub fn for_day(&self, day: &CalendarDay) -> DayModifiers {
        let date = day.date();
        let mut modifiers = DayModifiers::default();
        modifiers.set(DayFlag::Outside, day.is_outside());
        modifiers.set(DayFlag::Disabled, self.is_disabled(date));
        modifiers.set(
            DayFlag::Hidden,
            self.is_hidden_date(date) || (self.hides_outside_days() && day.is_outside()),
        );
        modifiers.set(DayFlag::Today, date == self.today);
        modifiers.custom = self
            .config
            .modifiers
            .iter()
            .filter(|(_, matchers)| any_match(date, matchers))
            .map(|(name, _)| name.clone())
            .collect();
        modifiers
    }
}

/// Calendar-derived modifiers for every day of `calendar`, in grid order
pub fn compute_modifiers<'c>(
    calendar: &'c Calendar,
    rules: &ModifierRules<'_>,
) -> Vec<(&'c CalendarDay, DayModifiers)> {
    calendar.days().map(|day| (day, rules.for_day(day))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_lib::DateLib;
    use crate::matcher::Matcher;
    use crate::test_utils::date;
    use chrono::Weekday;

    fn day(d: NaiveDate, month: NaiveDate) -> CalendarDay {
        CalendarDay::new(d, month, &DateLib::default())
    }

    #[test]
    fn test_flags_set_and_clear() {
        let mut m = DayModifiers::default();
        assert!(!m.has(DayFlag::Selected));
        m.set(DayFlag::Selected, true);
        assert!(m.is_selected());
        m.set(DayFlag::Selected, false);
        assert!(!m.is_selected());
        let m = DayModifiers::default().with(DayFlag::Today).with(DayFlag::Disabled);
        assert_eq!(m.names(), vec!["disabled".to_owned(), "today".to_owned()]);
    }

    #[test]
    fn test_today_and_outside() {
        let config = DayPickerConfig {
            show_outside_days: true,
            ..DayPickerConfig::default()
        };
        let rules = ModifierRules::new(&config, date(2024, 3, 15), NavBounds::default());
        let today = rules.for_day(&day(date(2024, 3, 15), date(2024, 3, 1)));
        assert!(today.is_today());
        assert!(!today.has(DayFlag::Outside));

        let outside = rules.for_day(&day(date(2024, 2, 29), date(2024, 3, 1)));
        assert!(outside.has(DayFlag::Outside));
        assert!(!outside.is_hidden());
    }

    #[test]
    fn test_outside_days_hidden_by_default() {
        let config = DayPickerConfig::default();
        let rules = ModifierRules::new(&config, date(2024, 3, 15), NavBounds::default());
        let outside = rules.for_day(&day(date(2024, 2, 29), date(2024, 3, 1)));
        assert!(outside.is_hidden());

        let broadcast = DayPickerConfig {
            broadcast_calendar: true,
            ..DayPickerConfig::default()
        };
        let rules = ModifierRules::new(&broadcast, date(2024, 3, 15), NavBounds::default());
        assert!(!rules.for_day(&day(date(2024, 2, 29), date(2024, 3, 1))).is_hidden());
    }

    #[test]
    fn test_disabled_hidden_and_custom() {
        let mut config = DayPickerConfig {
            disabled: vec![Matcher::DayOfWeek(vec![Weekday::Sat, Weekday::Sun])],
            hidden: vec![Matcher::Date(date(2024, 3, 12))],
            ..DayPickerConfig::default()
        };
        config
            .modifiers
            .insert("booked".to_owned(), vec![Matcher::Date(date(2024, 3, 20))]);
        let rules = ModifierRules::new(&config, date(2024, 3, 1), NavBounds::default());
        let month = date(2024, 3, 1);

        let saturday = rules.for_day(&day(date(2024, 3, 16), month));
        assert!(saturday.is_disabled());
        assert!(!saturday.is_interactive());

        assert!(rules.for_day(&day(date(2024, 3, 12), month)).is_hidden());

        let booked = rules.for_day(&day(date(2024, 3, 20), month));
        assert!(booked.has_custom("booked"));
        assert_eq!(booked.custom().collect::<Vec<_>>(), vec!["booked"]);
        assert!(booked.is_interactive());
    }

    #[test]
    fn test_days_outside_nav_bounds_are_hidden() {
        let config = DayPickerConfig::default();
        let bounds = NavBounds {
            start: Some(date(2024, 3, 1)),
            end:   Some(date(2024, 4, 30)),
        };
        let rules = ModifierRules::new(&config, date(2024, 3, 1), bounds);
        assert!(rules.is_hidden_date(date(2024, 2, 29)));
        assert!(rules.is_hidden_date(date(2024, 5, 1)));
        assert!(!rules.is_hidden_date(date(2024, 4, 30)));
    }

    #[test]
    fn test_compute_modifiers_covers_grid() {
        let config = DayPickerConfig {
            today: Some(date(2024, 3, 15)),
            ..DayPickerConfig::default()
        };
        let lib = config.date_lib();
        let calendar = Calendar::build(date(2024, 3, 1), NavBounds::default(), &config, &lib);
        let rules = ModifierRules::new(&config, date(2024, 3, 15), NavBounds::default());
        let all = compute_modifiers(&calendar, &rules);
        assert_eq!(all.len(), calendar.days().count());
        let todays: Vec<_> = all.iter().filter(|(_, m)| m.is_today()).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].0.date(), date(2024, 3, 15));
        // Feb 25 - Feb 29 lead the first row and are hidden
        assert_eq!(all.iter().filter(|(_, m)| m.is_hidden()).count(), 5 + 6);
    }
}
