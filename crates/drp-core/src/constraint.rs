//! Constraint validation for committed selections and candidate end days.

use tracing::trace;

use chrono::NaiveDate;
use drp_model::date::{
    add_days, count_days, count_days_between, first_of_month, last_of_month,
};
use drp_model::{Bounds, DateValue, PickerConfig, SelectionMode, StartOfWeek, Violation};

use crate::hooks::PickerHooks;
use crate::selection::week_start;

/// The unit range ends snap to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePeriod {
    #[default]
    Day,
    Week(StartOfWeek),
    Month,
}

impl RangePeriod {
    pub fn for_mode(mode: SelectionMode, start_of_week: StartOfWeek) -> Self {
        match mode {
            SelectionMode::WeekRange => RangePeriod::Week(start_of_week),
            SelectionMode::MonthRange => RangePeriod::Month,
            _ => RangePeriod::Day,
        }
    }

    /// First day of the period containing `date`.
    pub fn first(self, date: NaiveDate) -> NaiveDate {
        match self {
            RangePeriod::Day => date,
            RangePeriod::Week(start_of_week) => week_start(date, start_of_week),
            RangePeriod::Month => first_of_month(date),
        }
    }

    /// Last day of the period containing `date`.
    pub fn last(self, date: NaiveDate) -> NaiveDate {
        match self {
            RangePeriod::Day => date,
            RangePeriod::Week(start_of_week) => add_days(week_start(date, start_of_week), 6),
            RangePeriod::Month => last_of_month(date),
        }
    }
}

/// Everything that decides whether a day may be picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeRules {
    pub bounds: Bounds,
    /// Ends must not precede the start.
    pub select_forward: bool,
    /// Ends must not follow the start.
    pub select_backward: bool,
    /// Span rules do not apply to single dates.
    pub single_date: bool,
    pub period: RangePeriod,
}

impl RangeRules {
    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            bounds: config.bounds(),
            select_forward: config.select_forward,
            select_backward: config.select_backward,
            single_date: config.single_date,
            period: RangePeriod::for_mode(
                SelectionMode::from_options(config.single_date, config.batch_mode),
                config.start_of_week,
            ),
        }
    }

    /// The ordered pair a click on `candidate` would commit against a
    /// pending `start`, after snapping both ends to the range period.
    pub fn committed_span(
        &self,
        start: NaiveDate,
        candidate: NaiveDate,
    ) -> (NaiveDate, NaiveDate) {
        if candidate < start {
            (self.period.first(candidate), self.period.last(start))
        } else {
            (start, self.period.last(candidate))
        }
    }
}

/// Check a committed selection against the bounds.
///
/// # Errors
///
/// Returns the first [`Violation`]: absolute bounds, then too long, then too
/// short. Spans are inclusive day counts.
pub fn validate(start: &DateValue, end: &DateValue, bounds: &Bounds) -> Result<(), Violation> {
    if !bounds.contains(start.date()) || !bounds.contains(end.date()) {
        return Err(Violation::OutOfBounds);
    }
    let span = count_days(start, end);
    if let Some(max) = bounds.max_days
        && span > max
    {
        return Err(Violation::TooLong { max });
    }
    if let Some(min) = bounds.min_days
        && span < min
    {
        return Err(Violation::TooShort { min });
    }
    Ok(())
}

/// Whether `candidate` may be clicked given the current pending start.
///
/// With no pending start only the absolute bounds apply. While a range is
/// waiting for its end, the range the click would commit (snapped to whole
/// weeks or months in those modes) must stay within the span bounds. The
/// candidate must also respect the forward/backward restriction and not
/// enclose a day the host marked invalid.
pub fn is_selectable(
    candidate: NaiveDate,
    pending_start: Option<NaiveDate>,
    rules: &RangeRules,
    hooks: &PickerHooks,
) -> bool {
    if !rules.bounds.contains(candidate) {
        return false;
    }
    let Some(start) = pending_start else {
        return true;
    };
    if rules.single_date {
        return true;
    }
    let (first, last) = rules.committed_span(start, candidate);
    let days = count_days_between(first, last);
    if let Some(max) = rules.bounds.max_days
        && days > max
    {
        return false;
    }
    if let Some(min) = rules.bounds.min_days
        && days < min
    {
        return false;
    }
    if rules.select_forward && candidate < start {
        return false;
    }
    if rules.select_backward && candidate > start {
        return false;
    }
    if hooks.before_show_day.is_some() && encloses_disabled_day(candidate, start, hooks) {
        trace!(%candidate, %start, "range would enclose a disabled day");
        return false;
    }
    true
}

/// Walk from `candidate` toward `start`, stopping before `start` itself.
fn encloses_disabled_day(candidate: NaiveDate, start: NaiveDate, hooks: &PickerHooks) -> bool {
    let step = if candidate > start { -1 } else { 1 };
    let mut current = candidate;
    while count_days_between(current, start) > 1 {
        if !hooks.annotate(current).valid {
            return true;
        }
        current = add_days(current, step);
    }
    false
}
