//! Time-of-day handling for the optional time selector.

use chrono::{NaiveTime, Timelike};
use tracing::debug;

use drp_model::{DateValue, TimeConfig, TimeOfDay};

/// Which end of the selection a time applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        }
    }
}

/// Replace the time of day, keeping the date. Invalid times leave `value` untouched.
pub fn with_time(value: DateValue, time: TimeOfDay) -> DateValue {
    match time.to_naive_time() {
        Some(time) => value.date().and_time(time),
        None => value,
    }
}

/// Apply the configured time for `endpoint` when the selector is enabled.
pub fn apply_configured(value: DateValue, endpoint: Endpoint, config: &TimeConfig) -> DateValue {
    if !config.enabled {
        return value;
    }
    let time = match endpoint {
        Endpoint::Start => config.start_time,
        Endpoint::End => config.end_time,
    };
    with_time(value, time)
}

/// Change one end's configured time and return the updated value, if any.
///
/// Mirrors moving the hour/minute sliders: the configuration remembers the
/// choice for future picks and a present selection value is updated in place.
pub fn change_time(
    config: &mut TimeConfig,
    endpoint: Endpoint,
    time: TimeOfDay,
    current: Option<DateValue>,
) -> Option<DateValue> {
    match endpoint {
        Endpoint::Start => config.start_time = time,
        Endpoint::End => config.end_time = time,
    }
    debug!(
        endpoint = endpoint.as_str(),
        hour = time.hour,
        minute = time.minute,
        "time changed"
    );
    current.map(|value| with_time(value, time))
}

/// Time of day as the selector shows it.
pub fn of(value: &DateValue) -> TimeOfDay {
    TimeOfDay::new(value.hour(), value.minute())
}

/// `HH:MM` for display next to the selected dates.
pub fn display(value: &DateValue) -> String {
    let time: NaiveTime = value.time();
    time.format("%H:%M").to_string()
}
