//! Translation table lookup.
//!
//! Messages use `%d` placeholders for numbers, filled left to right by
//! [`fill_numbers`].

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{ConfigError, Result};

/// Maps a message key to display text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// The built-in English table.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Translator for English {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        let text = match key {
            "selected" => "Selected:",
            "day" => "Day",
            "days" => "Days",
            "apply" => "Close",
            "week-1" => "mo",
            "week-2" => "tu",
            "week-3" => "we",
            "week-4" => "th",
            "week-5" => "fr",
            "week-6" => "sa",
            "week-7" => "su",
            "week-number" => "W",
            "shortcuts" => "Shortcuts",
            "custom-values" => "Custom Values",
            "past" => "Past",
            "following" => "Following",
            "previous" => "Previous",
            "prev-week" => "Week",
            "prev-month" => "Month",
            "prev-year" => "Year",
            "next" => "Next",
            "next-week" => "Week",
            "next-month" => "Month",
            "next-year" => "Year",
            "less-than" => "Date range should not be more than %d days",
            "more-than" => "Date range should not be less than %d days",
            "default-more" => "Please select a date range longer than %d days",
            "default-single" => "Please select a date",
            "default-less" => "Please select a date range less than %d days",
            "default-range" => "Please select a date range between %d and %d days",
            "default-default" => "Please select a date range",
            "time" => "Time",
            "hour" => "Hour",
            "minute" => "Minute",
            _ => return None,
        };
        Some(Cow::Borrowed(text))
    }
}

/// A table loaded from JSON, falling back to English for missing keys.
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    entries: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a flat `{"key": "text"}` object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not such an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })?;
        Ok(Self { entries })
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.entries.get(key) {
            Some(text) => Some(Cow::Borrowed(text.as_str())),
            None => English.translate(key),
        }
    }
}

/// Translate `key`, or return the key itself when no table knows it.
pub fn translate_or_key(translator: &dyn Translator, key: &str) -> String {
    translator
        .translate(key)
        .map_or_else(|| key.to_string(), Cow::into_owned)
}

/// Replace each `%d` in `template` with the next number.
pub fn fill_numbers(template: &str, numbers: &[u32]) -> String {
    let mut result = template.to_string();
    for number in numbers {
        result = result.replacen("%d", &number.to_string(), 1);
    }
    result
}
