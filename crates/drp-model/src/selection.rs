//! Selection and pane state.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{DateValue, compare_month_date, count_days, first_of_month};
use crate::enums::{BatchMode, PaneId};

/// How clicks are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    Single,
    Range,
    Week,
    Workweek,
    Weekend,
    Month,
    WeekRange,
    MonthRange,
}

impl SelectionMode {
    /// Single-date picking wins over any batch mode.
    pub fn from_options(single_date: bool, batch_mode: BatchMode) -> Self {
        if single_date {
            return SelectionMode::Single;
        }
        match batch_mode {
            BatchMode::None => SelectionMode::Range,
            BatchMode::Week => SelectionMode::Week,
            BatchMode::Workweek => SelectionMode::Workweek,
            BatchMode::Weekend => SelectionMode::Weekend,
            BatchMode::Month => SelectionMode::Month,
            BatchMode::WeekRange => SelectionMode::WeekRange,
            BatchMode::MonthRange => SelectionMode::MonthRange,
        }
    }
}

/// Where the selection state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Empty,
    PendingEnd,
    Complete,
}

/// The picked dates. `end` is always `None` in single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
    pub mode: SelectionMode,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            start: None,
            end: None,
            mode,
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.start, self.end) {
            (None, _) => Phase::Empty,
            (Some(_), None) if self.mode == SelectionMode::Single => Phase::Complete,
            (Some(_), None) => Phase::PendingEnd,
            (Some(_), Some(_)) => Phase::Complete,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::PendingEnd
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Inclusive day count of a complete range, 1 for a single date.
    pub fn span_days(&self) -> Option<u32> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(count_days(&start, &end)),
            (Some(_), None) if self.mode == SelectionMode::Single => Some(1),
            _ => None,
        }
    }

    /// True when `date` falls inside the committed selection.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.date() <= date && date <= end.date(),
            (Some(start), None) => start.date() == date,
            _ => false,
        }
    }
}

/// The months shown by the two panes, each anchored on the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneState {
    pub month1: NaiveDate,
    pub month2: NaiveDate,
}

impl PaneState {
    pub fn new(month1: NaiveDate, month2: NaiveDate) -> Self {
        Self {
            month1: first_of_month(month1),
            month2: first_of_month(month2),
        }
    }

    pub fn get(&self, pane: PaneId) -> NaiveDate {
        match pane {
            PaneId::First => self.month1,
            PaneId::Second => self.month2,
        }
    }

    pub fn set(&mut self, pane: PaneId, month: NaiveDate) {
        let month = first_of_month(month);
        match pane {
            PaneId::First => self.month1 = month,
            PaneId::Second => self.month2 = month,
        }
    }

    /// True while the second pane is chronologically after the first.
    pub fn is_ordered(&self) -> bool {
        compare_month_date(self.month1, self.month2) == Ordering::Less
    }
}
