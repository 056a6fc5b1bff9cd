//! Pointer and keyboard input delivered by the host.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use drp_model::PaneId;

use crate::shortcuts::Shortcut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
}

/// One user interaction, as reported by whatever renders the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Click(NaiveDate),
    Hover(NaiveDate),
    /// The pointer left the day grid.
    Leave,
    Key(Key),
    /// Click on a week-number cell; carries the row's first displayed day.
    WeekNumber(NaiveDate),
    Shortcut(Shortcut),
    Next(PaneId),
    Prev(PaneId),
}

impl fmt::Display for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInput::Click(date) => write!(f, "click {date}"),
            UserInput::Hover(date) => write!(f, "hover {date}"),
            UserInput::Leave => f.write_str("leave"),
            UserInput::Key(Key::Escape) => f.write_str("key escape"),
            UserInput::Key(Key::Enter) => f.write_str("key enter"),
            UserInput::WeekNumber(date) => write!(f, "week {date}"),
            UserInput::Shortcut(shortcut) => write!(f, "shortcut {shortcut}"),
            UserInput::Next(pane) => write!(f, "next {pane}"),
            UserInput::Prev(pane) => write!(f, "prev {pane}"),
        }
    }
}

/// Parses the `Display` form, one input per line of a replay script.
impl FromStr for UserInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or_else(|| "empty input".to_string())?;
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(format!("unexpected trailing {extra:?}"));
        }
        let date = |arg: Option<&str>| -> Result<NaiveDate, String> {
            let arg = arg.ok_or_else(|| format!("{verb} needs a date"))?;
            NaiveDate::parse_from_str(arg, "%Y-%m-%d").map_err(|e| format!("bad date {arg:?}: {e}"))
        };
        let pane = |arg: Option<&str>| -> Result<PaneId, String> {
            arg.unwrap_or("month1").parse::<PaneId>()
        };
        match verb {
            "click" => date(arg).map(UserInput::Click),
            "hover" => date(arg).map(UserInput::Hover),
            "leave" => Ok(UserInput::Leave),
            "week" => date(arg).map(UserInput::WeekNumber),
            "key" => match arg {
                Some("escape") => Ok(UserInput::Key(Key::Escape)),
                Some("enter") => Ok(UserInput::Key(Key::Enter)),
                other => Err(format!("unknown key {other:?}")),
            },
            "shortcut" => arg
                .ok_or_else(|| "shortcut needs a name".to_string())?
                .parse::<Shortcut>()
                .map(UserInput::Shortcut),
            "next" => pane(arg).map(UserInput::Next),
            "prev" => pane(arg).map(UserInput::Prev),
            other => Err(format!("unknown input {other:?}")),
        }
    }
}
