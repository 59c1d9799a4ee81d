use crate::config::ConfigError;
use crate::consts::DAYS_PER_WEEK;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Number of months shown side by side, at least 1.
/// Uses `NonZeroU8` internally, so 0 is not a valid count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NumberOfMonths(NonZeroU8);

impl NumberOfMonths {
    /// A single month
    pub const ONE: Self = Self(NonZeroU8::MIN);

    /// Creates a new count, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidNumberOfMonths` if the value is 0.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        NonZeroU8::new(value).map(Self).ok_or(ConfigError::InvalidNumberOfMonths(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Count as a signed month offset
    #[inline]
    pub fn as_i32(self) -> i32 {
        i32::from(self.0.get())
    }
}

impl Default for NumberOfMonths {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for NumberOfMonths {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumberOfMonths> for u8 {
    fn from(n: NumberOfMonths) -> Self {
        n.0.get()
    }
}

impl fmt::Display for NumberOfMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of January that must fall in week 1 (`1..=7`).
///
/// 1 is the US rule (the week holding Jan 1st), 4 is the ISO-like
/// European rule (the first week with four days in the new year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FirstWeekContainsDate(NonZeroU8);

impl FirstWeekContainsDate {
    /// Week 1 is the week holding January 1st
    pub const JANUARY_FIRST: Self = Self(NonZeroU8::MIN);
    /// Week 1 is the first week with at least four days in the new year
    pub const JANUARY_FOURTH: Self = match NonZeroU8::new(4) {
        Some(n) => Self(n),
        None => Self(NonZeroU8::MIN),
    };

    /// Creates a new rule, validating the value is in `1..=7`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidFirstWeekContainsDate` otherwise.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(ConfigError::InvalidFirstWeekContainsDate(value))?;
        if value > DAYS_PER_WEEK {
            return Err(ConfigError::InvalidFirstWeekContainsDate(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for FirstWeekContainsDate {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FirstWeekContainsDate> for u8 {
    fn from(rule: FirstWeekContainsDate) -> Self {
        rule.0.get()
    }
}

/// First day of the week, serialized as `0..=6` with Sunday as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStartsOn(Weekday);

impl WeekStartsOn {
    pub const SUNDAY: Self = Self(Weekday::Sun);
    pub const MONDAY: Self = Self(Weekday::Mon);

    /// Creates a week start from a Sunday-based index
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeekStart` if the index is above 6.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        let weekday = match value {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => return Err(ConfigError::InvalidWeekStart(value)),
        };
        Ok(Self(weekday))
    }

    #[inline]
    pub const fn weekday(self) -> Weekday {
        self.0
    }
}

impl From<Weekday> for WeekStartsOn {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl TryFrom<u8> for WeekStartsOn {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekStartsOn> for u8 {
    // Sunday-based index is always below 7
    #[allow(clippy::cast_possible_truncation)]
    fn from(start: WeekStartsOn) -> Self {
        start.0.num_days_from_sunday() as u8
    }
}

impl fmt::Display for WeekStartsOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
