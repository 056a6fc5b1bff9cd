//! The picker instance: selection, panes and events behind one API.
//!
//! A [`DateRangePicker`] owns all of its state. Hosts feed it
//! [`UserInput`]s and programmatic calls, render [`MonthView`]s from
//! [`redraw`](DateRangePicker::redraw), and drain [`PickerEvent`]s with
//! [`take_events`](DateRangePicker::take_events).
//!
//! ```
//! use chrono::NaiveDate;
//! use drp_core::{DateRangePicker, FixedClock, PickerHooks, UserInput};
//! use drp_model::PickerConfig;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let hooks = PickerHooks::new().with_clock(FixedClock::at(today));
//! let mut picker = DateRangePicker::new(PickerConfig::default(), hooks).unwrap();
//! picker.handle(UserInput::Click(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()));
//! picker.handle(UserInput::Click(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()));
//! assert_eq!(picker.value(), "2024-03-04 to 2024-03-08");
//! ```

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, debug_span};

use drp_model::date::day_start;
use drp_model::{
    ConfigError, DateValue, PaneId, PaneState, PickerConfig, PickerEvent, SelectionMode,
    SelectionState, TimeOfDay,
};

use crate::calendar::{CalendarContext, MonthView, month_view, weekday_labels};
use crate::constraint::RangeRules;
use crate::debounce::InputDebouncer;
use crate::format::{format_value, parse_or_now, split_value};
use crate::hooks::PickerHooks;
use crate::input::{Key, UserInput};
use crate::messages::{hint_message, selected_days_message, violation_message};
use crate::navigation::{NavRules, Navigator};
use crate::selection::{ClickOutcome, SelectionMachine};
use crate::shortcuts::{Shortcut, available};
use crate::time::Endpoint;

/// A date given either as a value or as text in the display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg<'a> {
    Value(DateValue),
    Text(&'a str),
}

impl From<DateValue> for DateArg<'_> {
    fn from(value: DateValue) -> Self {
        DateArg::Value(value)
    }
}

impl From<NaiveDate> for DateArg<'_> {
    fn from(date: NaiveDate) -> Self {
        DateArg::Value(day_start(date))
    }
}

impl<'a> From<&'a str> for DateArg<'a> {
    fn from(text: &'a str) -> Self {
        DateArg::Text(text)
    }
}

pub struct DateRangePicker {
    config: PickerConfig,
    hooks: PickerHooks,
    selection: SelectionMachine,
    navigator: Navigator,
    debouncer: InputDebouncer,
    events: Vec<PickerEvent>,
    open: bool,
    destroyed: bool,
}

impl std::fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("selection", self.selection.state())
            .field("panes", &self.navigator.panes())
            .field("open", &self.open)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl DateRangePicker {
    /// Build a picker.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is inconsistent.
    pub fn new(config: PickerConfig, hooks: PickerHooks) -> Result<Self, ConfigError> {
        config.validate()?;
        let mode = SelectionMode::from_options(config.single_date, config.batch_mode);
        let selection =
            SelectionMachine::new(mode, RangeRules::from_config(&config), config.start_of_week)
                .with_time(config.time, config.swap_time);
        let default_month = config
            .default_time
            .unwrap_or_else(|| hooks.clock.today());
        let navigator = Navigator::new(
            NavRules::from_config(&config, hooks.viewport_width),
            default_month,
        );
        let debouncer = InputDebouncer::from_millis(config.input_debounce_ms);
        let open = config.always_open;
        debug!(?mode, panes = ?navigator.panes(), "picker created");
        Ok(Self {
            config,
            hooks,
            selection,
            navigator,
            debouncer,
            events: Vec::new(),
            open,
            destroyed: false,
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn hooks(&self) -> &PickerHooks {
        &self.hooks
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn panes(&self) -> PaneState {
        self.navigator.panes()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Only the first pane is displayed.
    pub fn is_single_month(&self) -> bool {
        self.navigator.rules().single_month
    }

    pub fn gap_visible(&self) -> bool {
        self.navigator.gap_visible()
    }

    /// The input-box text for the current selection.
    pub fn value(&self) -> String {
        let state = self.selection.state();
        if state.is_pending() {
            return String::new();
        }
        format_value(
            state.start.as_ref(),
            state.end.as_ref(),
            &self.config.format,
            &self.config.separator,
        )
    }

    /// Message for the last rejected pick.
    pub fn error_message(&self) -> Option<String> {
        self.selection
            .violation()
            .and_then(|violation| violation_message(violation, self.hooks.translator.as_ref()))
    }

    pub fn hint_message(&self) -> String {
        hint_message(
            self.config.single_date,
            &self.config.bounds(),
            self.hooks.translator.as_ref(),
        )
    }

    /// Inclusive length of a complete range.
    pub fn selected_days(&self) -> Option<u32> {
        let state = self.selection.state();
        if state.mode == SelectionMode::Single {
            return None;
        }
        state.span_days()
    }

    pub fn selected_days_message(&self) -> Option<String> {
        self.selected_days()
            .map(|days| selected_days_message(days, self.hooks.translator.as_ref()))
    }

    pub fn hover_tooltip(&self) -> Option<String> {
        if !self.config.hovering_tooltip {
            return None;
        }
        self.selection.hover_tooltip(&self.hooks)
    }

    /// Shortcuts to offer, empty unless enabled.
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        if !self.config.show_shortcuts {
            return Vec::new();
        }
        available(&self.config.shortcuts, &self.hooks)
    }

    pub fn weekday_labels(&self) -> Vec<String> {
        weekday_labels(self.config.start_of_week, &self.hooks)
    }

    /// Drain pending notifications.
    pub fn take_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    /// The grids for every displayed pane.
    pub fn redraw(&self) -> Vec<MonthView> {
        let panes = self.navigator.panes();
        let ctx = CalendarContext::new(
            self.config.start_of_week,
            self.selection.rules(),
            &self.hooks,
        )
        .with_selection(self.selection.state())
        .with_hovered(self.selection.hovered())
        .with_today(self.hooks.clock.today());
        let mut views = vec![month_view(panes.month1, PaneId::First, &ctx)];
        if !self.is_single_month() {
            views.push(month_view(panes.month2, PaneId::Second, &ctx));
        }
        views
    }

    fn resolve(&self, date: DateArg<'_>) -> DateValue {
        match date {
            DateArg::Value(value) => value,
            DateArg::Text(text) => {
                parse_or_now(text, &self.config.format, self.hooks.clock.as_ref())
            }
        }
    }

    fn emit(&mut self, event: PickerEvent) {
        if self.destroyed {
            return;
        }
        debug!(event = event.name(), "picker event");
        self.events.push(event);
    }

    fn emit_changed(&mut self) {
        let state = *self.selection.state();
        let Some(date1) = state.start else {
            return;
        };
        let value = self.value();
        self.emit(PickerEvent::SelectionChanged {
            value,
            date1,
            date2: state.end,
        });
    }

    fn settle(&mut self, outcome: ClickOutcome, silent: bool) {
        match outcome {
            ClickOutcome::Ignored | ClickOutcome::Rejected(_) => {}
            ClickOutcome::FirstPicked(date) => {
                if !silent {
                    self.emit(PickerEvent::SelectionFirstPicked { date });
                }
            }
            ClickOutcome::Completed => {
                if !silent {
                    self.emit_changed();
                }
                if self.config.auto_close {
                    self.close();
                }
            }
        }
    }

    /// Run a navigation step and report panes that changed, including
    /// fallbacks taken by refused placements.
    fn navigate(&mut self, step: impl FnOnce(&mut Navigator) -> bool) -> bool {
        let before = self.navigator.panes();
        let accepted = step(&mut self.navigator);
        let after = self.navigator.panes();
        for pane in [PaneId::First, PaneId::Second] {
            if pane == PaneId::Second && self.is_single_month() {
                continue;
            }
            if before.get(pane) != after.get(pane) {
                self.emit(PickerEvent::MonthChanged {
                    pane,
                    month: after.get(pane),
                });
            }
        }
        accepted
    }

    /// Set only the start. A range then waits for its end.
    pub fn set_start<'a>(&mut self, date: impl Into<DateArg<'a>>) {
        if self.destroyed {
            return;
        }
        let value = self.resolve(date.into());
        if !self.navigate(|nav| nav.place_single(value.date())) {
            debug!(%value, "start outside bounds ignored");
            return;
        }
        let outcome = self.selection.set_start(value);
        self.settle(outcome, false);
    }

    /// Complete a range whose start is already set.
    pub fn set_end<'a>(&mut self, date: impl Into<DateArg<'a>>, silent: bool) {
        if self.destroyed {
            return;
        }
        let Some(start) = self.selection.state().start else {
            debug!("end set without a start, ignored");
            return;
        };
        let end = self.resolve(date.into());
        self.set_date_range(start, end, silent);
    }

    /// Select a whole range and bring it into view.
    pub fn set_date_range<'a, 'b>(
        &mut self,
        d1: impl Into<DateArg<'a>>,
        d2: impl Into<DateArg<'b>>,
        silent: bool,
    ) {
        if self.destroyed {
            return;
        }
        let start = self.resolve(d1.into());
        let end = self.resolve(d2.into());
        if self.selection.state().mode == SelectionMode::Single {
            self.set_single_date(start);
            return;
        }
        self.navigate(|nav| nav.place_range(start.date(), end.date()));
        let outcome = self.selection.set_range(start, end);
        self.settle(outcome, silent);
    }

    pub fn set_single_date<'a>(&mut self, date: impl Into<DateArg<'a>>) {
        if self.destroyed {
            return;
        }
        let value = self.resolve(date.into());
        self.navigate(|nav| nav.place_single(value.date()));
        let outcome = self.selection.set_single(value);
        self.settle(outcome, false);
    }

    /// Change the start or end time from the time selector.
    pub fn set_time(&mut self, endpoint: Endpoint, hour: u32, minute: u32) {
        if self.destroyed || !self.config.time.enabled {
            return;
        }
        let time = TimeOfDay::new(hour, minute);
        if time.to_naive_time().is_none() {
            debug!(hour, minute, "invalid time ignored");
            return;
        }
        self.selection.set_time(endpoint, time);
        match endpoint {
            Endpoint::Start => self.config.time.start_time = time,
            Endpoint::End => self.config.time.end_time = time,
        }
        if self.selection.state().is_complete() {
            self.emit_changed();
        }
    }

    /// Drop the selection. No event is emitted.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.debouncer.cancel();
        debug!("selection cleared");
    }

    pub fn open(&mut self) {
        if self.destroyed || self.open {
            return;
        }
        self.open = true;
        self.emit(PickerEvent::Opened);
    }

    /// Close the picker. Ignored when it is always open.
    pub fn close(&mut self) {
        if self.config.always_open || !self.open {
            return;
        }
        self.open = false;
        self.selection.leave();
        self.emit(PickerEvent::Closed);
    }

    /// Confirm a complete selection and close.
    pub fn apply(&mut self) {
        let state = *self.selection.state();
        if !state.is_complete() {
            debug!("apply without a complete selection ignored");
            return;
        }
        if let Some(date1) = state.start {
            let value = self.value();
            self.emit(PickerEvent::SelectionApplied {
                value,
                date1,
                date2: state.end,
            });
        }
        self.close();
    }

    /// Tear down. Later calls are ignored and no more events are produced.
    pub fn destroy(&mut self) {
        self.selection.clear();
        self.debouncer.cancel();
        self.events.clear();
        self.open = false;
        self.destroyed = true;
        debug!("picker destroyed");
    }

    pub fn go_next(&mut self, pane: PaneId) -> bool {
        !self.destroyed && self.navigate(|nav| nav.go_next(pane))
    }

    pub fn go_prev(&mut self, pane: PaneId) -> bool {
        !self.destroyed && self.navigate(|nav| nav.go_prev(pane))
    }

    pub fn jump_to(&mut self, pane: PaneId, month: NaiveDate) -> bool {
        !self.destroyed && self.navigate(|nav| nav.jump_to(pane, month))
    }

    /// Apply one user interaction.
    pub fn handle(&mut self, input: UserInput) {
        if self.destroyed {
            return;
        }
        let _span = debug_span!("picker.handle", %input).entered();
        match input {
            UserInput::Click(date) => {
                let outcome = self.selection.click(date, &self.hooks);
                self.settle(outcome, false);
            }
            UserInput::Hover(date) => self.selection.hover(date),
            UserInput::Leave => self.selection.leave(),
            UserInput::Key(Key::Escape) => self.close(),
            UserInput::Key(Key::Enter) => self.apply(),
            UserInput::WeekNumber(row_start) => {
                let outcome = self.selection.click_week_number(row_start);
                self.settle(outcome, false);
            }
            UserInput::Shortcut(shortcut) => {
                let today = self.hooks.clock.today();
                match shortcut.resolve(today, self.config.start_of_week, &self.hooks) {
                    Some((start, end)) => self.set_date_range(start, end, false),
                    None => debug!(%shortcut, "unknown shortcut ignored"),
                }
            }
            UserInput::Next(pane) => {
                self.go_next(pane);
            }
            UserInput::Prev(pane) => {
                self.go_prev(pane);
            }
        }
    }

    /// Record typed text; it is parsed once typing pauses.
    pub fn set_input_text(&mut self, text: impl Into<String>, now: Instant) {
        if !self.destroyed {
            self.debouncer.schedule(text, now);
        }
    }

    /// Parse debounced text if it is due. Returns true when text was applied.
    pub fn poll_input(&mut self, now: Instant) -> bool {
        let Some(text) = self.debouncer.poll(now) else {
            return false;
        };
        self.apply_text(&text);
        true
    }

    fn apply_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.clear();
            return;
        }
        match split_value(text, &self.config.separator) {
            (start, Some(end)) => self.set_date_range(start, end, false),
            (start, None) if self.config.single_date => self.set_single_date(start),
            (start, None) => debug!(start, "range text without separator ignored"),
        }
    }
}
