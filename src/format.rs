//! Pattern based date formatting.
//!
//! Patterns use Unicode-style letter tokens, compatible with the subset of
//! date-fns tokens a day picker needs:
//!
//! | Token    | Meaning                       | Example (`2022-11-21`) |
//! |----------|-------------------------------|------------------------|
//! | `y`      | year                          | `2022`                 |
//! | `yy`     | two digit year                | `22`                   |
//! | `yyyy`   | padded year                   | `2022`                 |
//! | `M` `L`  | month number                  | `11`                   |
//! | `MM`     | padded month                  | `11`                   |
//! | `MMM`    | abbreviated month             | `Nov`                  |
//! | `MMMM`   | month name                    | `November`             |
//! | `MMMMM`  | narrow month                  | `N`                    |
//! | `d` `dd` | day of month                  | `21`                   |
//! | `do`     | ordinal day                   | `21st`                 |
//! | `E`-`EEE`| abbreviated weekday           | `Mon`                  |
//! | `EEEE`   | weekday name                  | `Monday`               |
//! | `EEEEE`  | narrow weekday                | `M`                    |
//! | `EEEEEE` | short weekday                 | `Mo`                   |
//! | `c` `cc` | local day of week number      | `2`                    |
//! | `ccc`-`cccccc` | as `EEE`-`EEEEEE`       |                        |
//! | `w` `ww` `wo` | local week number        | `48`                   |
//! | `I` `II` `Io` | ISO week number          | `47`                   |
//! | `P`-`PPPP` | localized date              | `Monday, November 21st, 2022` |
//!
//! Text between single quotes is literal; `''` is a quote. Letters without a
//! meaning are copied through.

use crate::date_lib::DateLib;
use crate::locale::NameWidth;
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Digit system used for numbers in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numerals {
    /// Latin digits `0123456789`
    #[default]
    Latn,
    /// Arabic-Indic
    Arab,
    /// Eastern Arabic-Indic (Persian)
    Arabext,
    /// Devanagari
    Deva,
    /// Bengali
    Beng,
    /// Gurmukhi
    Guru,
    /// Gujarati
    Gujr,
    /// Oriya
    Orya,
    /// Tamil decimal
    Tamldec,
    /// Telugu
    Telu,
    /// Kannada
    Knda,
    /// Malayalam
    Mlym,
}

impl Numerals {
    /// Code point of this system's zero digit
    const fn zero(self) -> u32 {
        match self {
            Self::Latn => 0x0030,
            Self::Arab => 0x0660,
            Self::Arabext => 0x06F0,
            Self::Deva => 0x0966,
            Self::Beng => 0x09E6,
            Self::Guru => 0x0A66,
            Self::Gujr => 0x0AE6,
            Self::Orya => 0x0B66,
            Self::Tamldec => 0x0BE6,
            Self::Telu => 0x0C66,
            Self::Knda => 0x0CE6,
            Self::Mlym => 0x0D66,
        }
    }

    /// Replaces ASCII digits with this system's digits
    pub fn replace_digits(self, text: &str) -> String {
        if self == Self::Latn {
            return text.to_owned();
        }
        let zero = self.zero();
        text.chars()
            .map(|c| {
                c.to_digit(10)
                    .filter(|_| c.is_ascii_digit())
                    .and_then(|d| char::from_u32(zero + d))
                    .unwrap_or(c)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Field { letter: char, count: usize, ordinal: bool },
    Literal(&'a str),
    Quote,
}

/// Letters whose token may take an `o` ordinal suffix
const ORDINAL_LETTERS: [char; 5] = ['d', 'M', 'L', 'w', 'I'];

fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while let Some(first) = rest.chars().next() {
        if first == '\'' {
            let body = &rest[1..];
            if let Some(stripped) = body.strip_prefix('\'') {
                tokens.push(Token::Quote);
                rest = stripped;
                continue;
            }
            let end = body.find('\'').unwrap_or(body.len());
            tokens.push(Token::Literal(&body[..end]));
            rest = body.get(end + 1..).unwrap_or_default();
        } else if first.is_ascii_alphabetic() {
            let count = rest.chars().take_while(|&c| c == first).count();
            let mut consumed = count;
            let ordinal =
                ORDINAL_LETTERS.contains(&first) && rest[count..].starts_with('o');
            if ordinal {
                consumed += 1;
            }
            tokens.push(Token::Field { letter: first, count, ordinal });
            rest = &rest[consumed..];
        } else {
            let end = rest
                .find(|c: char| c == '\'' || c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            tokens.push(Token::Literal(&rest[..end]));
            rest = &rest[end..];
        }
    }
    tokens
}

const fn name_width(count: usize) -> NameWidth {
    match count {
        4 => NameWidth::Wide,
        5 => NameWidth::Narrow,
        6 => NameWidth::Short,
        _ => NameWidth::Abbreviated,
    }
}

fn number(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        let _ = write!(out, "-{:0width$}", value.unsigned_abs());
    } else {
        let _ = write!(out, "{value:0width$}");
    }
}

/// Formats a date with a pattern. Digits stay ASCII; see
/// [`DateLib::format`] for numeral substitution.
pub fn format_pattern(date: NaiveDate, pattern: &str, lib: &DateLib) -> String {
    let locale = lib.locale();
    let mut out = String::with_capacity(pattern.len() * 2);
    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Quote => out.push('\''),
            Token::Field { letter, count, ordinal } => match letter {
                'y' => match count {
                    2 => number(&mut out, i64::from(date.year().rem_euclid(100)), 2),
                    _ => number(&mut out, i64::from(date.year()), count),
                },
                'M' | 'L' if ordinal => out.push_str(&locale.ordinal(date.month())),
                'M' | 'L' => match count {
                    1 | 2 => number(&mut out, i64::from(date.month()), count),
                    _ => out.push_str(locale.month_name(date.month(), name_width(count))),
                },
                'd' if ordinal => out.push_str(&locale.ordinal(date.day())),
                'd' => number(&mut out, i64::from(date.day()), count.min(2)),
                'E' => out.push_str(locale.weekday_name(date.weekday(), name_width(count))),
                'c' => match count {
                    1 | 2 => {
                        let start = lib.week_starts_on().weekday().num_days_from_sunday();
                        let local = (date.weekday().num_days_from_sunday() + 7 - start) % 7 + 1;
                        number(&mut out, i64::from(local), count);
                    }
                    _ => out.push_str(locale.weekday_name(date.weekday(), name_width(count))),
                },
                'w' if ordinal => out.push_str(&locale.ordinal(lib.week(date))),
                'w' => number(&mut out, i64::from(lib.week(date)), count.min(2)),
                'I' if ordinal => out.push_str(&locale.ordinal(lib.iso_week(date))),
                'I' => number(&mut out, i64::from(lib.iso_week(date)), count.min(2)),
                'P' => {
                    let patterns = locale.date_patterns();
                    let nested = match count {
                        1 => patterns.short,
                        2 => patterns.medium,
                        3 => patterns.long,
                        _ => patterns.full,
                    };
                    out.push_str(&format_pattern(date, nested, lib));
                }
                other => {
                    for _ in 0..count {
                        out.push(other);
                    }
                    if ordinal {
                        out.push('o');
                    }
                }
            },
        }
    }
    out
}
