//! Date sub-tokens for slug templates

use chrono::{Datelike, Local, Timelike};

/// Names of the tokens a date expands into
pub const DATE_TOKENS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// Zero-padded calendar fields of a reference instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl DateParts {
    /// Decompose any date-time; pass a local time to get local fields
    pub fn from_datetime<T: Datelike + Timelike>(date: &T) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
            hour: format!("{:02}", date.hour()),
            minute: format!("{:02}", date.minute()),
            second: format!("{:02}", date.second()),
        }
    }

    /// Decompose the current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Look up a sub-token by name
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "year" => &self.year,
            "month" => &self.month,
            "day" => &self.day,
            "hour" => &self.hour,
            "minute" => &self.minute,
            "second" => &self.second,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Expand a reference instant into its date sub-tokens
pub fn decompose<T: Datelike + Timelike>(date: &T) -> DateParts {
    DateParts::from_datetime(date)
}
