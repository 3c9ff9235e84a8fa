//! Remaining-time formatting with pluggable numeral rendering.
//!
//! The formatting policy shows only the two coarsest units: days with hours
//! (hours omitted when zero), else hours alone, else minutes alone, else a
//! sub-minute marker. Closed windows always format as `expired`.

use crate::models::Remaining;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Numeral rendering policy, so locales with non-ASCII digit sets can plug
/// into the formatter.
pub trait DigitTransform {
    fn render(&self, value: u64) -> String;
}

/// Built-in digit styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitStyle {
    /// ASCII digits 0-9.
    #[default]
    Western,
    /// Arabic-Indic digits U+0660..U+0669.
    EasternArabic,
}

impl DigitStyle {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitStyle::Western => "western",
            DigitStyle::EasternArabic => "eastern-arabic",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "western" | "latin" => Some(DigitStyle::Western),
            "eastern-arabic" | "arabic-indic" => Some(DigitStyle::EasternArabic),
            _ => None,
        }
    }
}

impl std::fmt::Display for DigitStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DigitStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitStyle::from_label(s).ok_or_else(|| format!("unknown digit style '{s}'"))
    }
}

impl DigitTransform for DigitStyle {
    fn render(&self, value: u64) -> String {
        match self {
            DigitStyle::Western => value.to_string(),
            DigitStyle::EasternArabic => value
                .to_string()
                .chars()
                .map(|c| match c {
                    '0' => '\u{0660}',
                    '1' => '\u{0661}',
                    '2' => '\u{0662}',
                    '3' => '\u{0663}',
                    '4' => '\u{0664}',
                    '5' => '\u{0665}',
                    '6' => '\u{0666}',
                    '7' => '\u{0667}',
                    '8' => '\u{0668}',
                    '9' => '\u{0669}',
                    other => other,
                })
                .collect(),
        }
    }
}

/// Format a remaining duration for display.
#[must_use]
pub fn format_remaining(remaining: Remaining, digits: &dyn DigitTransform) -> String {
    let seconds = match remaining {
        Remaining::Expired => return "expired".to_string(),
        Remaining::Unavailable => return "unavailable".to_string(),
        Remaining::Left(seconds) => seconds,
    };

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if days >= 1 {
        let mut text = count_with_label(days, "day", "days", digits);
        if hours > 0 {
            text.push_str(", ");
            text.push_str(&count_with_label(hours, "hour", "hours", digits));
        }
        text
    } else if hours >= 1 {
        count_with_label(hours, "hour", "hours", digits)
    } else if minutes >= 1 {
        count_with_label(minutes, "minute", "minutes", digits)
    } else {
        "less than a minute".to_string()
    }
}

fn count_with_label(value: u64, singular: &str, plural: &str, digits: &dyn DigitTransform) -> String {
    let label = if value == 1 { singular } else { plural };
    format!("{} {label}", digits.render(value))
}
