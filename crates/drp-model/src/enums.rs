//! Type-safe enumerations for picker options.
//!
//! The widget's option table carries these as strings or booleans
//! (`batchMode: 'week' | false`, `singleMonth: true | 'auto'`). They are parsed
//! once into enums so nothing downstream has to probe strings.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// First column of every calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StartOfWeek {
    #[default]
    Sunday,
    Monday,
}

impl StartOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartOfWeek::Sunday => "sunday",
            StartOfWeek::Monday => "monday",
        }
    }

    /// The `chrono` weekday that opens a row.
    pub fn weekday(&self) -> Weekday {
        match self {
            StartOfWeek::Sunday => Weekday::Sun,
            StartOfWeek::Monday => Weekday::Mon,
        }
    }
}

impl fmt::Display for StartOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StartOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(StartOfWeek::Sunday),
            "monday" | "mon" => Ok(StartOfWeek::Monday),
            other => Err(format!("unknown start of week: {other}")),
        }
    }
}

/// One-click selection of a whole period, or two-click period ranges.
///
/// `None` is the plain two-click day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BatchMode {
    #[default]
    None,
    Week,
    Workweek,
    Weekend,
    Month,
    WeekRange,
    MonthRange,
}

impl BatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchMode::None => "none",
            BatchMode::Week => "week",
            BatchMode::Workweek => "workweek",
            BatchMode::Weekend => "weekend",
            BatchMode::Month => "month",
            BatchMode::WeekRange => "week-range",
            BatchMode::MonthRange => "month-range",
        }
    }

    /// True for the modes where a single click completes the selection.
    pub fn is_one_click(&self) -> bool {
        matches!(
            self,
            BatchMode::Week | BatchMode::Workweek | BatchMode::Weekend | BatchMode::Month
        )
    }
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "false" => Ok(BatchMode::None),
            "week" => Ok(BatchMode::Week),
            "workweek" => Ok(BatchMode::Workweek),
            "weekend" => Ok(BatchMode::Weekend),
            "month" => Ok(BatchMode::Month),
            "week-range" => Ok(BatchMode::WeekRange),
            "month-range" => Ok(BatchMode::MonthRange),
            other => Err(format!("unknown batch mode: {other}")),
        }
    }
}

/// Accepts `false` or one of the mode names.
impl<'de> Deserialize<'de> for BatchMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FlagOrName::deserialize(deserializer)? {
            FlagOrName::Flag(false) => Ok(BatchMode::None),
            FlagOrName::Flag(true) => Err(serde::de::Error::custom(
                "batchMode must be false or a mode name",
            )),
            FlagOrName::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for BatchMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BatchMode::None => serializer.serialize_bool(false),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

/// Whether only one month pane is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SingleMonth {
    Yes,
    No,
    /// Decided by the host's viewport width.
    #[default]
    Auto,
}

impl SingleMonth {
    /// Viewports narrower than this show one pane in `Auto` mode.
    pub const AUTO_WIDTH_THRESHOLD: u32 = 480;

    /// Resolve `Auto` against the host viewport. Unknown width means two panes.
    pub fn resolve(&self, viewport_width: Option<u32>) -> bool {
        match self {
            SingleMonth::Yes => true,
            SingleMonth::No => false,
            SingleMonth::Auto => {
                viewport_width.is_some_and(|width| width < Self::AUTO_WIDTH_THRESHOLD)
            }
        }
    }
}

impl<'de> Deserialize<'de> for SingleMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FlagOrName::deserialize(deserializer)? {
            FlagOrName::Flag(true) => Ok(SingleMonth::Yes),
            FlagOrName::Flag(false) => Ok(SingleMonth::No),
            FlagOrName::Name(name) if name.eq_ignore_ascii_case("auto") => Ok(SingleMonth::Auto),
            FlagOrName::Name(name) => Err(serde::de::Error::custom(format!(
                "singleMonth must be a boolean or \"auto\", got {name}"
            ))),
        }
    }
}

impl Serialize for SingleMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SingleMonth::Yes => serializer.serialize_bool(true),
            SingleMonth::No => serializer.serialize_bool(false),
            SingleMonth::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for StartOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for StartOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOrName {
    Flag(bool),
    Name(String),
}

/// Which month a calendar cell belongs to, relative to the pane's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Membership {
    PreviousMonth,
    CurrentMonth,
    NextMonth,
}

/// One of the (up to two) visible month calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneId {
    First,
    Second,
}

impl PaneId {
    pub fn other(&self) -> PaneId {
        match self {
            PaneId::First => PaneId::Second,
            PaneId::Second => PaneId::First,
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneId::First => write!(f, "month1"),
            PaneId::Second => write!(f, "month2"),
        }
    }
}

impl FromStr for PaneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "first" | "month1" => Ok(PaneId::First),
            "2" | "second" | "month2" => Ok(PaneId::Second),
            other => Err(format!("unknown pane: {other}")),
        }
    }
}
