//! The click-driven selection state machine.
//!
//! A click runs through a fixed sequence: validity check, mode dispatch,
//! swap into order, constraint validation. Week-number clicks and shortcuts
//! enter the same sequence after mode dispatch with a synthesized pair.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use drp_model::date::{
    add_days, count_days_between, day_end, day_start, first_of_month, last_of_month,
    weekday_offset,
};
use drp_model::{
    DateValue, SelectionMode, SelectionState, StartOfWeek, TimeConfig, TimeOfDay, Violation,
};

use crate::constraint::{RangePeriod, RangeRules, is_selectable, validate};
use crate::hooks::PickerHooks;
use crate::time::{Endpoint, apply_configured, with_time};

/// What a click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Invalid day; nothing changed.
    Ignored,
    /// A range start was picked and the end is pending.
    FirstPicked(DateValue),
    /// The selection is complete.
    Completed,
    /// The pick broke a constraint and the selection was cleared.
    Rejected(Violation),
}

impl ClickOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

/// First day of the displayed week containing `date`.
pub fn week_start(date: NaiveDate, start_of_week: StartOfWeek) -> NaiveDate {
    let offset = weekday_offset(date.weekday(), start_of_week.weekday());
    add_days(date, -i64::from(offset))
}

/// The period a one-click batch mode selects around `date`.
///
/// Workweek is Monday to Friday of the displayed row. Weekend is the
/// Saturday and Sunday following the row's start, so with a Sunday start it
/// reaches into the next row.
pub fn batch_period(
    mode: SelectionMode,
    date: NaiveDate,
    start_of_week: StartOfWeek,
) -> Option<(NaiveDate, NaiveDate)> {
    let row = week_start(date, start_of_week);
    let sunday_start = start_of_week == StartOfWeek::Sunday;
    match mode {
        SelectionMode::Week => Some((row, add_days(row, 6))),
        SelectionMode::Workweek => {
            let monday = if sunday_start { add_days(row, 1) } else { row };
            Some((monday, add_days(monday, 4)))
        }
        SelectionMode::Weekend => {
            let saturday = add_days(row, if sunday_start { 6 } else { 5 });
            Some((saturday, add_days(saturday, 1)))
        }
        SelectionMode::Month => Some((first_of_month(date), last_of_month(date))),
        _ => None,
    }
}

/// Selection state plus everything needed to advance it.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    state: SelectionState,
    rules: RangeRules,
    start_of_week: StartOfWeek,
    time: TimeConfig,
    swap_time: bool,
    hovered: Option<NaiveDate>,
    violation: Option<Violation>,
    start_week: Option<NaiveDate>,
}

impl SelectionMachine {
    /// The rules' range period is taken from `mode` and `start_of_week`.
    pub fn new(mode: SelectionMode, rules: RangeRules, start_of_week: StartOfWeek) -> Self {
        Self {
            state: SelectionState::new(mode),
            rules: RangeRules {
                period: RangePeriod::for_mode(mode, start_of_week),
                ..rules
            },
            start_of_week,
            time: TimeConfig::default(),
            swap_time: false,
            hovered: None,
            violation: None,
            start_week: None,
        }
    }

    pub fn with_time(mut self, time: TimeConfig, swap_time: bool) -> Self {
        self.time = time;
        self.swap_time = swap_time;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn rules(&self) -> &RangeRules {
        &self.rules
    }

    pub fn time_config(&self) -> &TimeConfig {
        &self.time
    }

    /// The last constraint violation, cleared by the next successful pick.
    pub fn violation(&self) -> Option<Violation> {
        self.violation
    }

    pub fn hovered(&self) -> Option<NaiveDate> {
        self.hovered
    }

    fn pending_start(&self) -> Option<NaiveDate> {
        if self.state.is_pending() {
            self.state.start.map(|start| start.date())
        } else {
            None
        }
    }

    /// Whether a click on `date` would be accepted right now.
    pub fn is_clickable(&self, date: NaiveDate, hooks: &PickerHooks) -> bool {
        hooks.annotate(date).valid && is_selectable(date, self.pending_start(), &self.rules, hooks)
    }

    fn handle_start(&self, date: NaiveDate) -> DateValue {
        let date = self.rules.period.first(date);
        apply_configured(day_start(date), Endpoint::Start, &self.time)
    }

    fn handle_end(&self, date: NaiveDate) -> DateValue {
        let date = self.rules.period.last(date);
        apply_configured(day_end(date), Endpoint::End, &self.time)
    }

    /// Process a day click.
    pub fn click(&mut self, date: NaiveDate, hooks: &PickerHooks) -> ClickOutcome {
        if !self.is_clickable(date, hooks) {
            trace!(%date, "ignored click on invalid day");
            return ClickOutcome::Ignored;
        }
        self.start_week = None;
        let mode = self.state.mode;
        match mode {
            SelectionMode::Single => {
                self.state.start = Some(self.handle_start(date));
                self.state.end = None;
                self.hovered = None;
                self.violation = None;
                debug!(%date, "single date picked");
                ClickOutcome::Completed
            }
            SelectionMode::Week
            | SelectionMode::Workweek
            | SelectionMode::Weekend
            | SelectionMode::Month => {
                let Some((first, last)) = batch_period(mode, date, self.start_of_week) else {
                    return ClickOutcome::Ignored;
                };
                debug!(?mode, %first, %last, "batch period picked");
                self.commit(
                    apply_configured(day_start(first), Endpoint::Start, &self.time),
                    apply_configured(day_end(last), Endpoint::End, &self.time),
                )
            }
            SelectionMode::Range | SelectionMode::WeekRange | SelectionMode::MonthRange => {
                if self.state.is_pending() {
                    let start = self.state.start.unwrap_or_else(|| self.handle_start(date));
                    self.commit(start, self.handle_end(date))
                } else {
                    let start = self.handle_start(date);
                    self.state.start = Some(start);
                    self.state.end = None;
                    self.violation = None;
                    debug!(%start, "range start picked");
                    ClickOutcome::FirstPicked(start)
                }
            }
        }
    }

    /// Click on a week-number cell; `row_start` is the row's first displayed day.
    ///
    /// The first click selects that week, a second click extends the
    /// selection to cover both weeks.
    pub fn click_week_number(&mut self, row_start: NaiveDate) -> ClickOutcome {
        if self.state.mode == SelectionMode::Single {
            return ClickOutcome::Ignored;
        }
        let (first, last) = match self.start_week.take() {
            Some(previous) => (previous.min(row_start), previous.max(row_start)),
            None => {
                self.start_week = Some(row_start);
                (row_start, row_start)
            }
        };
        debug!(%first, %last, "week number picked");
        let outcome = self.commit(
            apply_configured(day_start(first), Endpoint::Start, &self.time),
            apply_configured(day_end(add_days(last, 6)), Endpoint::End, &self.time),
        );
        if matches!(outcome, ClickOutcome::Rejected(_)) {
            self.start_week = None;
        }
        outcome
    }

    /// Commit a programmatic or shortcut range: swap, then validate.
    ///
    /// Week and month ranges snap to whole periods whatever the argument
    /// order; plain ranges keep the given values.
    pub fn set_range(&mut self, start: DateValue, end: DateValue) -> ClickOutcome {
        self.start_week = None;
        if self.state.mode == SelectionMode::Single {
            return self.set_single(start);
        }
        if self.rules.period != RangePeriod::Day {
            let (low, high) = if start.date() > end.date() {
                (end, start)
            } else {
                (start, end)
            };
            return self.commit(self.handle_start(low.date()), self.handle_end(high.date()));
        }
        self.commit(start, end)
    }

    /// Set only the start. Ranges become pending; single mode completes.
    pub fn set_start(&mut self, start: DateValue) -> ClickOutcome {
        self.start_week = None;
        self.state.start = Some(start);
        self.state.end = None;
        self.violation = None;
        if self.state.mode == SelectionMode::Single {
            ClickOutcome::Completed
        } else {
            ClickOutcome::FirstPicked(start)
        }
    }

    /// Set one date. Completes single mode; leaves a range pending.
    pub fn set_single(&mut self, date: DateValue) -> ClickOutcome {
        if !self.rules.bounds.contains(date.date()) {
            return self.reject(Violation::OutOfBounds);
        }
        self.set_start(date)
    }

    /// Move one end's time of day, remembering it for later picks.
    pub fn set_time(&mut self, endpoint: Endpoint, time: TimeOfDay) {
        let current = match endpoint {
            Endpoint::Start => self.state.start,
            Endpoint::End => self.state.end,
        };
        let updated = crate::time::change_time(&mut self.time, endpoint, time, current);
        match endpoint {
            Endpoint::Start => self.state.start = updated,
            Endpoint::End => self.state.end = updated,
        }
    }

    /// Swap into order, store, and validate.
    fn commit(&mut self, start: DateValue, end: DateValue) -> ClickOutcome {
        let (start, end) = if start.date() > end.date() {
            self.swap(start, end)
        } else {
            (start, end)
        };
        self.state.start = Some(start);
        self.state.end = Some(end);
        self.hovered = None;
        match validate(&start, &end, &self.rules.bounds) {
            Ok(()) => {
                self.violation = None;
                debug!(%start, %end, "selection complete");
                ClickOutcome::Completed
            }
            Err(violation) => self.reject(violation),
        }
    }

    /// Exchange an inverted pair. Dates re-take start/end semantics; times
    /// follow their dates unless `swap_time` is set.
    fn swap(&self, start: DateValue, end: DateValue) -> (DateValue, DateValue) {
        trace!(%start, %end, "swapping inverted selection");
        let new_start = self.handle_start(end.date());
        let new_end = self.handle_end(start.date());
        if !self.time.enabled || self.swap_time {
            return (new_start, new_end);
        }
        (
            with_time(new_start, crate::time::of(&end)),
            with_time(new_end, crate::time::of(&start)),
        )
    }

    fn reject(&mut self, violation: Violation) -> ClickOutcome {
        debug!(%violation, "selection rejected");
        self.state.clear();
        self.hovered = None;
        self.violation = Some(violation);
        ClickOutcome::Rejected(violation)
    }

    /// Track the pointer. Only meaningful while the end is pending.
    pub fn hover(&mut self, date: NaiveDate) {
        if self.state.is_pending() {
            trace!(%date, "hover");
            self.hovered = Some(date);
        } else {
            self.hovered = None;
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Inclusive day count of the range a click on the hovered day would commit.
    pub fn hover_days(&self) -> Option<u32> {
        let start = self.pending_start()?;
        self.hovered.map(|hovered| {
            let (first, last) = self.rules.committed_span(start, hovered);
            count_days_between(first, last)
        })
    }

    /// Tooltip for the hover preview, shown from two days on.
    pub fn hover_tooltip(&self, hooks: &PickerHooks) -> Option<String> {
        let days = self.hover_days()?;
        if days <= 1 {
            return None;
        }
        let start = self.pending_start()?;
        let hovered = self.hovered?;
        let text = match &hooks.hovering_tooltip {
            Some(tooltip) => tooltip(days, start, hovered),
            None => format!(
                "{days} {}",
                drp_model::locale::translate_or_key(hooks.translator.as_ref(), "days")
            ),
        };
        (!text.is_empty()).then_some(text)
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.hovered = None;
        self.violation = None;
        self.start_week = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drp_model::Bounds;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn machine(mode: SelectionMode) -> SelectionMachine {
        SelectionMachine::new(mode, RangeRules::default(), StartOfWeek::Sunday)
    }

    #[test]
    fn range_click_sequence() {
        let hooks = PickerHooks::new();
        let mut m = machine(SelectionMode::Range);
        assert_eq!(
            m.click(date(2024, 3, 10), &hooks),
            ClickOutcome::FirstPicked(day_start(date(2024, 3, 10)))
        );
        assert_eq!(m.click(date(2024, 3, 12), &hooks), ClickOutcome::Completed);
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 10))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 3, 12))));

        // A third click starts over.
        assert!(matches!(m.click(date(2024, 3, 20), &hooks), ClickOutcome::FirstPicked(_)));
        assert_eq!(m.state().end, None);
    }

    #[test]
    fn reversed_clicks_are_swapped() {
        let hooks = PickerHooks::new();
        let mut m = machine(SelectionMode::Range);
        m.click(date(2024, 3, 20), &hooks);
        m.click(date(2024, 3, 15), &hooks);
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 15))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 3, 20))));
    }

    #[test]
    fn swap_keeps_times_with_dates_unless_swap_time() {
        let hooks = PickerHooks::new();
        let time = TimeConfig::enabled(TimeOfDay::new(8, 0), TimeOfDay::new(18, 0));

        let mut m = machine(SelectionMode::Range).with_time(time, false);
        m.click(date(2024, 3, 20), &hooks);
        m.click(date(2024, 3, 15), &hooks);
        assert_eq!(crate::time::display(&m.state().start.unwrap()), "18:00");
        assert_eq!(crate::time::display(&m.state().end.unwrap()), "08:00");

        let mut m = machine(SelectionMode::Range).with_time(time, true);
        m.click(date(2024, 3, 20), &hooks);
        m.click(date(2024, 3, 15), &hooks);
        assert_eq!(crate::time::display(&m.state().start.unwrap()), "08:00");
        assert_eq!(crate::time::display(&m.state().end.unwrap()), "18:00");
    }

    #[test]
    fn single_mode_never_sets_end() {
        let hooks = PickerHooks::new();
        let mut m = machine(SelectionMode::Single);
        assert_eq!(m.click(date(2024, 3, 10), &hooks), ClickOutcome::Completed);
        assert_eq!(m.click(date(2024, 3, 12), &hooks), ClickOutcome::Completed);
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 12))));
        assert_eq!(m.state().end, None);
    }

    #[test]
    fn batch_periods() {
        let thursday = date(2024, 3, 14);
        assert_eq!(
            batch_period(SelectionMode::Week, thursday, StartOfWeek::Monday),
            Some((date(2024, 3, 11), date(2024, 3, 17)))
        );
        assert_eq!(
            batch_period(SelectionMode::Week, thursday, StartOfWeek::Sunday),
            Some((date(2024, 3, 10), date(2024, 3, 16)))
        );
        assert_eq!(
            batch_period(SelectionMode::Workweek, thursday, StartOfWeek::Sunday),
            Some((date(2024, 3, 11), date(2024, 3, 15)))
        );
        assert_eq!(
            batch_period(SelectionMode::Weekend, thursday, StartOfWeek::Monday),
            Some((date(2024, 3, 16), date(2024, 3, 17)))
        );
        assert_eq!(
            batch_period(SelectionMode::Weekend, thursday, StartOfWeek::Sunday),
            Some((date(2024, 3, 16), date(2024, 3, 17)))
        );
        assert_eq!(
            batch_period(SelectionMode::Month, thursday, StartOfWeek::Sunday),
            Some((date(2024, 3, 1), date(2024, 3, 31)))
        );
        assert_eq!(batch_period(SelectionMode::Range, thursday, StartOfWeek::Sunday), None);
    }

    #[test]
    fn month_range_snaps_to_month_edges() {
        let hooks = PickerHooks::new();
        let mut m = machine(SelectionMode::MonthRange);
        m.click(date(2024, 5, 20), &hooks);
        m.click(date(2024, 3, 9), &hooks);
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 1))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 5, 31))));
    }

    #[test]
    fn span_violation_clears_and_records() {
        let hooks = PickerHooks::new();
        let rules = RangeRules {
            bounds: Bounds::new().with_span(0, 5),
            ..RangeRules::default()
        };
        let mut m = SelectionMachine::new(SelectionMode::Month, rules, StartOfWeek::Sunday);
        assert_eq!(
            m.click(date(2024, 3, 14), &hooks),
            ClickOutcome::Rejected(Violation::TooLong { max: 5 })
        );
        assert_eq!(m.state().start, None);
        assert_eq!(m.violation(), Some(Violation::TooLong { max: 5 }));
    }

    #[test]
    fn week_number_clicks_extend() {
        let mut m = machine(SelectionMode::Range);
        m.click_week_number(date(2024, 3, 17));
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 17))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 3, 23))));
        m.click_week_number(date(2024, 3, 3));
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 3))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 3, 23))));
        // Third click starts a new week selection.
        m.click_week_number(date(2024, 3, 10));
        assert_eq!(m.state().start, Some(day_start(date(2024, 3, 10))));
        assert_eq!(m.state().end, Some(day_end(date(2024, 3, 16))));
    }

    #[test]
    fn hover_preview_and_tooltip() {
        let hooks = PickerHooks::new();
        let mut m = machine(SelectionMode::Range);
        m.hover(date(2024, 3, 12));
        assert_eq!(m.hovered(), None);

        m.click(date(2024, 3, 10), &hooks);
        m.hover(date(2024, 3, 10));
        assert_eq!(m.hover_tooltip(&hooks), None);
        m.hover(date(2024, 3, 7));
        assert_eq!(m.hover_days(), Some(4));
        assert_eq!(m.hover_tooltip(&hooks).as_deref(), Some("4 Days"));
        m.leave();
        assert_eq!(m.hover_days(), None);
    }

    #[test]
    fn set_time_moves_existing_end() {
        let hooks = PickerHooks::new();
        let time = TimeConfig::enabled(TimeOfDay::new(8, 0), TimeOfDay::new(18, 0));
        let mut m = machine(SelectionMode::Range).with_time(time, false);
        m.click(date(2024, 3, 10), &hooks);
        m.set_time(Endpoint::End, TimeOfDay::new(12, 15));
        assert_eq!(m.state().end, None);
        m.click(date(2024, 3, 12), &hooks);
        assert_eq!(crate::time::display(&m.state().end.unwrap()), "12:15");
        m.set_time(Endpoint::Start, TimeOfDay::new(6, 0));
        assert_eq!(crate::time::display(&m.state().start.unwrap()), "06:00");
    }

    #[test]
    fn custom_tooltip_hook() {
        let hooks = PickerHooks::new().with_hovering_tooltip(|days, _, _| format!("{days} nights"));
        let mut m = machine(SelectionMode::Range);
        m.click(date(2024, 3, 10), &hooks);
        m.hover(date(2024, 3, 12));
        assert_eq!(m.hover_tooltip(&hooks).as_deref(), Some("3 nights"));
    }
}
