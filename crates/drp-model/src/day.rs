//! Calendar cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Membership;

/// Result of the host's per-day callback: validity plus display extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAnnotation {
    pub valid: bool,
    pub extra_class: String,
    pub tooltip: String,
}

impl Default for DayAnnotation {
    fn default() -> Self {
        Self::valid()
    }
}

impl DayAnnotation {
    pub fn valid() -> Self {
        Self {
            valid: true,
            extra_class: String::new(),
            tooltip: String::new(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::valid()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = class.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

/// Selection highlighting for a cell, derived from the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHighlight {
    /// Inside the committed selection.
    pub checked: bool,
    /// The selection's first day.
    pub first_selected: bool,
    /// The selection's last day.
    pub last_selected: bool,
    /// Inside the hover preview of a pending range.
    pub hovering: bool,
}

/// One cell of a month grid. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub display_number: u32,
    pub membership: Membership,
    pub valid: bool,
    pub extra_class: String,
    pub tooltip: String,
    pub is_today: bool,
    pub highlight: DayHighlight,
}

impl Day {
    pub fn in_current_month(&self) -> bool {
        self.membership == Membership::CurrentMonth
    }

    /// Space-separated classes in the widget's vocabulary.
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["day"];
        classes.push(match self.membership {
            Membership::PreviousMonth => "lastMonth",
            Membership::CurrentMonth => "toMonth",
            Membership::NextMonth => "nextMonth",
        });
        classes.push(if self.valid { "valid" } else { "invalid" });
        if self.is_today {
            classes.push("real-today");
        }
        if self.highlight.checked {
            classes.push("checked");
        }
        if self.highlight.first_selected {
            classes.push("first-date-selected");
        }
        if self.highlight.last_selected {
            classes.push("last-date-selected");
        }
        if self.highlight.hovering {
            classes.push("hovering");
        }
        if !self.tooltip.is_empty() {
            classes.push("has-tooltip");
        }
        let trimmed = self.extra_class.trim();
        if !trimmed.is_empty() {
            classes.push(trimmed);
        }
        classes.join(" ")
    }
}

/// A displayed row of seven days with its week number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub number: u32,
    pub days: Vec<Day>,
}

impl Week {
    /// First displayed day, used as the week-number click target.
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }
}
