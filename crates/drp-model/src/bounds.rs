//! Absolute and relative limits on a selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Absolute date bounds plus inclusive span bounds.
///
/// A committed selection must satisfy `min_date <= start`, `end <= max_date`
/// and `min_days <= span <= max_days` for whichever limits are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub min_days: Option<u32>,
    pub max_days: Option<u32>,
}

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dates(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    /// Span limits where `0` means unset, as in the option table.
    pub fn with_span(mut self, min_days: u32, max_days: u32) -> Self {
        self.min_days = (min_days > 0).then_some(min_days);
        self.max_days = (max_days > 0).then_some(max_days);
        self
    }

    /// True when `date` lies within the absolute bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(min) = self.min_date
            && date < min
        {
            return false;
        }
        if let Some(max) = self.max_date
            && date > max
        {
            return false;
        }
        true
    }

    pub fn has_span_limits(&self) -> bool {
        self.min_days.is_some() || self.max_days.is_some()
    }
}
