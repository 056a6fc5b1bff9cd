//! Notifications emitted to the host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::enums::PaneId;

/// Something the host may want to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum PickerEvent {
    /// The first date of a range was picked.
    SelectionFirstPicked { date: DateValue },

    /// The selection (and display value) changed.
    SelectionChanged {
        value: String,
        date1: DateValue,
        date2: Option<DateValue>,
    },

    /// The user confirmed the selection.
    SelectionApplied {
        value: String,
        date1: DateValue,
        date2: Option<DateValue>,
    },

    Opened,

    Closed,

    /// A pane now shows a different month.
    MonthChanged { pane: PaneId, month: NaiveDate },
}

impl PickerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PickerEvent::SelectionFirstPicked { .. } => "selection-first-picked",
            PickerEvent::SelectionChanged { .. } => "selection-changed",
            PickerEvent::SelectionApplied { .. } => "selection-applied",
            PickerEvent::Opened => "opened",
            PickerEvent::Closed => "closed",
            PickerEvent::MonthChanged { .. } => "month-changed",
        }
    }
}
