//! Locale data used by the format engine.
//!
//! Each locale carries month and weekday names, an ordinal rule, the
//! localized long date patterns (`P`..`PPPP`) and its default week rules.

use crate::types::{FirstWeekContainsDate, WeekStartsOn};
use chrono::Weekday;
use std::fmt;

/// Name tables and week rules for one locale.
#[derive(Clone, Copy)]
pub struct Locale {
    code:                     &'static str,
    months_wide:              [&'static str; 12],
    months_abbreviated:       [&'static str; 12],
    months_narrow:            [&'static str; 12],
    // weekday tables are Sunday first
    weekdays_wide:            [&'static str; 7],
    weekdays_abbreviated:     [&'static str; 7],
    weekdays_short:           [&'static str; 7],
    weekdays_narrow:          [&'static str; 7],
    ordinal:                  fn(u32) -> String,
    date_patterns:            DatePatterns,
    week_starts_on:           WeekStartsOn,
    first_week_contains_date: FirstWeekContainsDate,
}

/// Localized long date patterns, from `P` to `PPPP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePatterns {
    pub short:  &'static str,
    pub medium: &'static str,
    pub long:   &'static str,
    pub full:   &'static str,
}

/// Width of a month or weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWidth {
    Wide,
    Abbreviated,
    /// Two-letter weekday form. Months fall back to abbreviated.
    Short,
    Narrow,
}

impl Locale {
    /// Locale code such as `en-US`
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Name of a month, 1-indexed
    pub fn month_name(&self, month: u32, width: NameWidth) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match width {
            NameWidth::Wide => self.months_wide[index],
            NameWidth::Abbreviated | NameWidth::Short => self.months_abbreviated[index],
            NameWidth::Narrow => self.months_narrow[index],
        }
    }

    /// Name of a weekday
    pub fn weekday_name(&self, weekday: Weekday, width: NameWidth) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match width {
            NameWidth::Wide => self.weekdays_wide[index],
            NameWidth::Abbreviated => self.weekdays_abbreviated[index],
            NameWidth::Short => self.weekdays_short[index],
            NameWidth::Narrow => self.weekdays_narrow[index],
        }
    }

    /// Ordinal form of a number (`21st`, `21.`, `1er`)
    pub fn ordinal(&self, n: u32) -> String {
        (self.ordinal)(n)
    }

    pub const fn date_patterns(&self) -> DatePatterns {
        self.date_patterns
    }

    /// Default first day of the week
    pub const fn week_starts_on(&self) -> WeekStartsOn {
        self.week_starts_on
    }

    /// Default first-week rule
    pub const fn first_week_contains_date(&self) -> FirstWeekContainsDate {
        self.first_week_contains_date
    }

    /// Looks up a built-in locale by code (case-insensitive, `_` or `-`)
    pub fn from_code(code: &str) -> Option<&'static Self> {
        let wanted = code.trim().replace('_', "-");
        ALL.iter()
            .copied()
            .find(|locale| locale.code.eq_ignore_ascii_case(&wanted))
            .or_else(|| {
                // bare language falls back to its first regional variant
                let language = wanted.split('-').next().unwrap_or_default();
                ALL.iter().copied().find(|locale| {
                    locale
                        .code
                        .split('-')
                        .next()
                        .is_some_and(|l| l.eq_ignore_ascii_case(language))
                })
            })
    }

    /// Looks up a locale, falling back to `en-US` when it is unknown
    pub fn resolve(code: &str) -> &'static Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(code, fallback = EN_US.code, "unknown locale, using default");
            &EN_US
        })
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("code", &self.code)
            .field("week_starts_on", &self.week_starts_on)
            .field("first_week_contains_date", &self.first_week_contains_date)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Locale {}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Serializes a locale as its code.
pub(crate) mod serde_code {
    use super::Locale;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(locale: &&'static Locale, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(locale.code())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<&'static Locale, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Locale::resolve(&code))
    }
}

fn ordinal_en(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn ordinal_de(n: u32) -> String {
    format!("{n}.")
}

fn ordinal_fr(n: u32) -> String {
    if n == 1 { "1er".to_owned() } else { n.to_string() }
}

fn ordinal_es(n: u32) -> String {
    format!("{n}º")
}

const EN_MONTHS_WIDE: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const EN_MONTHS_ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const LATIN_MONTHS_NARROW: [&str; 12] =
    ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
const EN_WEEKDAYS_WIDE: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const EN_WEEKDAYS_ABBREVIATED: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EN_WEEKDAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const EN_WEEKDAYS_NARROW: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// English (United States). The default locale.
pub static EN_US: Locale = Locale {
    code:                     "en-US",
    months_wide:              EN_MONTHS_WIDE,
    months_abbreviated:       EN_MONTHS_ABBREVIATED,
    months_narrow:            LATIN_MONTHS_NARROW,
    weekdays_wide:            EN_WEEKDAYS_WIDE,
    weekdays_abbreviated:     EN_WEEKDAYS_ABBREVIATED,
    weekdays_short:           EN_WEEKDAYS_SHORT,
    weekdays_narrow:          EN_WEEKDAYS_NARROW,
    ordinal:                  ordinal_en,
    date_patterns:            DatePatterns {
        short:  "MM/dd/yyyy",
        medium: "MMM d, y",
        long:   "MMMM do, y",
        full:   "EEEE, MMMM do, y",
    },
    week_starts_on:           WeekStartsOn::SUNDAY,
    first_week_contains_date: FirstWeekContainsDate::JANUARY_FIRST,
};

/// English (United Kingdom)
pub static EN_GB: Locale = Locale {
    code:                     "en-GB",
    months_wide:              EN_MONTHS_WIDE,
    months_abbreviated:       EN_MONTHS_ABBREVIATED,
    months_narrow:            LATIN_MONTHS_NARROW,
    weekdays_wide:            EN_WEEKDAYS_WIDE,
    weekdays_abbreviated:     EN_WEEKDAYS_ABBREVIATED,
    weekdays_short:           EN_WEEKDAYS_SHORT,
    weekdays_narrow:          EN_WEEKDAYS_NARROW,
    ordinal:                  ordinal_en,
    date_patterns:            DatePatterns {
        short:  "dd/MM/yyyy",
        medium: "d MMM yyyy",
        long:   "do MMMM yyyy",
        full:   "EEEE, d MMMM yyyy",
    },
    week_starts_on:           WeekStartsOn::MONDAY,
    first_week_contains_date: FirstWeekContainsDate::JANUARY_FOURTH,
};

/// German
pub static DE: Locale = Locale {
    code:                     "de-DE",
    months_wide:              [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_abbreviated:       [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ],
    months_narrow:            LATIN_MONTHS_NARROW,
    weekdays_wide:            [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    weekdays_abbreviated:     ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    weekdays_short:           ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    weekdays_narrow:          ["S", "M", "D", "M", "D", "F", "S"],
    ordinal:                  ordinal_de,
    date_patterns:            DatePatterns {
        short:  "dd.MM.y",
        medium: "do MMM y",
        long:   "do MMMM y",
        full:   "EEEE, do MMMM y",
    },
    week_starts_on:           WeekStartsOn::MONDAY,
    first_week_contains_date: FirstWeekContainsDate::JANUARY_FOURTH,
};

/// French
pub static FR: Locale = Locale {
    code:                     "fr-FR",
    months_wide:              [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_abbreviated:       [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    months_narrow:            LATIN_MONTHS_NARROW,
    weekdays_wide:            [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    weekdays_abbreviated:     ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    weekdays_short:           ["di", "lu", "ma", "me", "je", "ve", "sa"],
    weekdays_narrow:          ["D", "L", "M", "M", "J", "V", "S"],
    ordinal:                  ordinal_fr,
    date_patterns:            DatePatterns {
        short:  "dd/MM/y",
        medium: "d MMM y",
        long:   "d MMMM y",
        full:   "EEEE d MMMM y",
    },
    week_starts_on:           WeekStartsOn::MONDAY,
    first_week_contains_date: FirstWeekContainsDate::JANUARY_FOURTH,
};

/// Spanish
pub static ES: Locale = Locale {
    code:                     "es-ES",
    months_wide:              [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_abbreviated:       [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    months_narrow:            ["E", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    weekdays_wide:            [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    weekdays_abbreviated:     ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    weekdays_short:           ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
    weekdays_narrow:          ["D", "L", "M", "M", "J", "V", "S"],
    ordinal:                  ordinal_es,
    date_patterns:            DatePatterns {
        short:  "dd/MM/y",
        medium: "d MMM y",
        long:   "d 'de' MMMM 'de' y",
        full:   "EEEE, d 'de' MMMM 'de' y",
    },
    week_starts_on:           WeekStartsOn::MONDAY,
    first_week_contains_date: FirstWeekContainsDate::JANUARY_FIRST,
};

/// The default locale
pub fn default_locale() -> &'static Locale {
    &EN_US
}

/// Every built-in locale, default first
pub static ALL: [&Locale; 5] = [&EN_US, &EN_GB, &DE, &FR, &ES];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_exact_and_case_insensitive() {
        assert_eq!(Locale::from_code("en-US").unwrap().code(), "en-US");
        assert_eq!(Locale::from_code("EN-gb").unwrap().code(), "en-GB");
        assert_eq!(Locale::from_code("de_DE").unwrap().code(), "de-DE");
    }

    #[test]
    fn test_from_code_bare_language() {
        assert_eq!(Locale::from_code("fr").unwrap().code(), "fr-FR");
        assert_eq!(Locale::from_code("en").unwrap().code(), "en-US");
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        assert!(Locale::from_code("xx-YY").is_none());
        assert_eq!(Locale::resolve("xx-YY").code(), "en-US");
    }

    #[test]
    fn test_ordinal_en() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (31, "31st"),
        ];
        for (n, expected) in cases {
            assert_eq!(EN_US.ordinal(n), expected, "ordinal of {n}");
        }
    }

    #[test]
    fn test_ordinal_other_locales() {
        assert_eq!(DE.ordinal(21), "21.");
        assert_eq!(FR.ordinal(1), "1er");
        assert_eq!(FR.ordinal(2), "2");
        assert_eq!(ES.ordinal(5), "5º");
    }

    #[test]
    fn test_names() {
        assert_eq!(EN_US.month_name(11, NameWidth::Wide), "November");
        assert_eq!(EN_US.month_name(1, NameWidth::Abbreviated), "Jan");
        assert_eq!(EN_US.weekday_name(Weekday::Mon, NameWidth::Short), "Mo");
        assert_eq!(EN_US.weekday_name(Weekday::Sun, NameWidth::Wide), "Sunday");
        assert_eq!(DE.weekday_name(Weekday::Wed, NameWidth::Wide), "Mittwoch");
        assert_eq!(FR.month_name(8, NameWidth::Wide), "août");
    }

    #[test]
    fn test_week_rules() {
        assert_eq!(EN_US.week_starts_on(), WeekStartsOn::SUNDAY);
        assert_eq!(EN_US.first_week_contains_date().get(), 1);
        assert_eq!(EN_GB.week_starts_on(), WeekStartsOn::MONDAY);
        assert_eq!(EN_GB.first_week_contains_date().get(), 4);
    }
}
