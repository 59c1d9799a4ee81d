/// Days in one grid row
pub const DAYS_PER_WEEK: u8 = 7;

/// Rows per month when `fixed_weeks` is set
pub const FIXED_WEEKS_PER_MONTH: u8 = 6;

/// Cells per month when `fixed_weeks` is set
pub const FIXED_DAYS_PER_MONTH: u8 = DAYS_PER_WEEK * FIXED_WEEKS_PER_MONTH;

/// Cells per month when `fixed_weeks` is set in broadcast mode (5 rows)
pub const FIXED_DAYS_PER_BROADCAST_MONTH: u8 = DAYS_PER_WEEK * BROADCAST_LONG_MONTH_WEEKS;

/// Weeks in a long broadcast month
pub const BROADCAST_LONG_MONTH_WEEKS: u8 = 5;
/// Weeks in a short broadcast month
pub const BROADCAST_SHORT_MONTH_WEEKS: u8 = 4;

/// Months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Focus search stops after this many skipped days
pub const MAX_FOCUS_ATTEMPTS: u16 = 365;

/// Years shown before today when a year dropdown has no explicit start
pub const DROPDOWN_YEARS_BACK: i32 = 100;

/// Default caption pattern
pub const CAPTION_FORMAT: &str = "LLLL y";
/// Default day cell pattern
pub const DAY_FORMAT: &str = "d";
/// Default weekday header pattern
pub const WEEKDAY_FORMAT: &str = "cccccc";
/// Default weekday label pattern
pub const WEEKDAY_LABEL_FORMAT: &str = "cccc";
/// Default month dropdown pattern
pub const MONTH_DROPDOWN_FORMAT: &str = "LLLL";
/// Default year dropdown pattern
pub const YEAR_DROPDOWN_FORMAT: &str = "yyyy";
/// Default grid cell label pattern (long localized date)
pub const GRID_CELL_FORMAT: &str = "PPPP";

/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
