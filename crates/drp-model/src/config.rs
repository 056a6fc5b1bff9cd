//! Picker configuration.
//!
//! Mirrors the widget's recognized-options table with typed fields. Keys are
//! camelCase on the wire so an existing options object can be loaded as-is:
//!
//! ```
//! use drp_model::{BatchMode, PickerConfig, StartOfWeek};
//!
//! let config = PickerConfig::from_json(
//!     r#"{ "batchMode": "week", "startOfWeek": "monday", "startDate": false }"#,
//! )
//! .unwrap();
//! assert_eq!(config.batch_mode, BatchMode::Week);
//! assert_eq!(config.start_of_week, StartOfWeek::Monday);
//! assert_eq!(config.start_date, None);
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bounds::Bounds;
use crate::enums::{BatchMode, SingleMonth, StartOfWeek};
use crate::error::{ConfigError, Result};

/// Default display format (chrono strftime).
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Default text between the two dates of a range.
pub const DEFAULT_SEPARATOR: &str = " to ";

/// Options controlling picker behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Pick one date instead of a range.
    pub single_date: bool,

    /// Period selection mode.
    pub batch_mode: BatchMode,

    /// Earliest selectable date (`false` on the wire for none).
    #[serde(with = "optional_date")]
    pub start_date: Option<NaiveDate>,

    /// Latest selectable date (`false` on the wire for none).
    #[serde(with = "optional_date")]
    pub end_date: Option<NaiveDate>,

    /// Minimum inclusive span in days, 0 = unset.
    pub min_days: u32,

    /// Maximum inclusive span in days, 0 = unset.
    pub max_days: u32,

    pub start_of_week: StartOfWeek,

    /// Both panes move together.
    pub sticky_months: bool,

    /// Derive the earlier pane from the later one when placing panes.
    pub look_behind: bool,

    pub single_month: SingleMonth,

    /// Display format for dates (chrono strftime).
    pub format: String,

    /// Text between start and end in the display value.
    pub separator: String,

    /// Close as soon as a selection completes.
    pub auto_close: bool,

    /// Ignore close requests.
    pub always_open: bool,

    /// Only allow ends on or after the start.
    pub select_forward: bool,

    /// Only allow ends on or before the start.
    pub select_backward: bool,

    pub show_week_numbers: bool,

    pub show_shortcuts: bool,

    pub shortcuts: ShortcutsConfig,

    /// Time-of-day selectors for start and end.
    pub time: TimeConfig,

    /// Re-apply the selector times after start and end are swapped.
    pub swap_time: bool,

    /// Show the "N days" tooltip while hovering in a pending range.
    pub hovering_tooltip: bool,

    /// Month to open on instead of today.
    #[serde(with = "optional_date")]
    pub default_time: Option<NaiveDate>,

    /// Delay before typed input is re-parsed.
    pub input_debounce_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            single_date: false,
            batch_mode: BatchMode::None,
            start_date: None,
            end_date: None,
            min_days: 0,
            max_days: 0,
            start_of_week: StartOfWeek::Sunday,
            sticky_months: false,
            look_behind: false,
            single_month: SingleMonth::Auto,
            format: DEFAULT_FORMAT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            auto_close: false,
            always_open: false,
            select_forward: false,
            select_backward: false,
            show_week_numbers: false,
            show_shortcuts: false,
            shortcuts: ShortcutsConfig::default(),
            time: TimeConfig::default(),
            swap_time: false,
            hovering_tooltip: true,
            default_time: None,
            input_debounce_ms: 300,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON options object. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown option
    /// values, and any error from [`PickerConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency once, at construction.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        if self.min_days > 0 && self.max_days > 0 && self.min_days > self.max_days {
            return Err(ConfigError::SpanBoundsInverted {
                min: self.min_days,
                max: self.max_days,
            });
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(ConfigError::DateBoundsInverted {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        if self.select_forward && self.select_backward {
            return Err(ConfigError::ConflictingDirection);
        }
        if self.format.trim().is_empty() {
            return Err(ConfigError::Empty { field: "format" });
        }
        if self.separator.is_empty() {
            return Err(ConfigError::Empty { field: "separator" });
        }
        self.time.start_time.validate("time.startTime")?;
        self.time.end_time.validate("time.endTime")?;
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new()
            .with_dates(self.start_date, self.end_date)
            .with_span(self.min_days, self.max_days)
    }

    pub fn with_single_date(mut self, enable: bool) -> Self {
        self.single_date = enable;
        self
    }

    pub fn with_batch_mode(mut self, mode: BatchMode) -> Self {
        self.batch_mode = mode;
        self
    }

    pub fn with_date_bounds(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_span(mut self, min_days: u32, max_days: u32) -> Self {
        self.min_days = min_days;
        self.max_days = max_days;
        self
    }

    pub fn with_start_of_week(mut self, start: StartOfWeek) -> Self {
        self.start_of_week = start;
        self
    }

    pub fn with_sticky_months(mut self, enable: bool) -> Self {
        self.sticky_months = enable;
        self
    }

    pub fn with_look_behind(mut self, enable: bool) -> Self {
        self.look_behind = enable;
        self
    }

    pub fn with_single_month(mut self, single_month: SingleMonth) -> Self {
        self.single_month = single_month;
        self
    }

    pub fn with_default_time(mut self, date: NaiveDate) -> Self {
        self.default_time = Some(date);
        self
    }

    pub fn with_auto_close(mut self, enable: bool) -> Self {
        self.auto_close = enable;
        self
    }

    pub fn with_time(mut self, time: TimeConfig) -> Self {
        self.time = time;
        self
    }
}

/// Time-of-day selectors applied to picked days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeConfig {
    pub enabled: bool,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl TimeConfig {
    pub fn enabled(start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            enabled: true,
            start_time,
            end_time,
        }
    }
}

/// Hour and minute picked in a time selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    fn validate(self, field: &'static str) -> Result<()> {
        if self.to_naive_time().is_none() {
            return Err(ConfigError::InvalidTime {
                field,
                hour: self.hour,
                minute: self.minute,
            });
        }
        Ok(())
    }
}

/// Relative period used by the built-in shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Week,
    Month,
    Year,
}

/// Which built-in shortcuts are offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShortcutsConfig {
    /// "Last N days" entries.
    pub prev_days: Vec<u32>,
    /// "Previous week/month/year" entries.
    pub prev: Vec<PeriodKind>,
    /// "Next N days" entries.
    pub next_days: Vec<u32>,
    /// "Next week/month/year" entries.
    pub next: Vec<PeriodKind>,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            prev_days: vec![3, 5, 7],
            prev: vec![PeriodKind::Week, PeriodKind::Month, PeriodKind::Year],
            next_days: Vec::new(),
            next: Vec::new(),
        }
    }
}

/// `false` or `"YYYY-MM-DD"` on the wire.
mod optional_date {
    use super::{Deserialize, Deserializer, NaiveDate, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Date(NaiveDate),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None | Some(Repr::Flag(false)) => Ok(None),
            Some(Repr::Flag(true)) => Err(serde::de::Error::custom(
                "expected a date or false, got true",
            )),
            Some(Repr::Date(date)) => Ok(Some(date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.format, "%Y-%m-%d");
        assert_eq!(config.separator, " to ");
        assert!(config.bounds().min_days.is_none());
    }

    #[test]
    fn inverted_span_is_rejected() {
        let config = PickerConfig::new().with_span(6, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpanBoundsInverted { min: 6, max: 3 })
        ));
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let config = PickerConfig::new().with_date_bounds(
            NaiveDate::from_ymd_opt(2024, 2, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DateBoundsInverted { .. })
        ));
    }

    #[test]
    fn invalid_time_is_rejected() {
        let time = TimeConfig::enabled(TimeOfDay::new(24, 0), TimeOfDay::default());
        let config = PickerConfig::new().with_time(time);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTime { hour: 24, .. })
        ));
    }

    #[test]
    fn json_accepts_false_for_dates_and_batch_mode() {
        let config = PickerConfig::from_json(
            r#"{"startDate": false, "endDate": "2024-12-31", "batchMode": false, "minDays": 2}"#,
        )
        .unwrap();
        assert_eq!(config.start_date, None);
        assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(config.batch_mode, BatchMode::None);
        assert_eq!(config.bounds().min_days, Some(2));
    }

    #[test]
    fn json_round_trip_keeps_options() {
        let config = PickerConfig::new()
            .with_batch_mode(BatchMode::MonthRange)
            .with_single_month(SingleMonth::Yes);
        let json = serde_json::to_string(&config).unwrap();
        let round = PickerConfig::from_json(&json).unwrap();
        assert_eq!(round, config);
    }

    #[test]
    fn unknown_batch_mode_is_a_parse_error() {
        let result = PickerConfig::from_json(r#"{"batchMode": "fortnight"}"#);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
