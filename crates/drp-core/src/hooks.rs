//! Host-supplied callbacks and collaborators.
//!
//! These cannot live in [`PickerConfig`](drp_model::PickerConfig) because they
//! are code, not data. Every hook is optional and has the widget's default
//! behavior when absent.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use drp_model::{DateValue, DayAnnotation, English, StartOfWeek, Translator};

/// Per-day validity, extra class and tooltip.
pub type BeforeShowDay = Arc<dyn Fn(NaiveDate) -> DayAnnotation + Send + Sync>;

/// Tooltip while hovering a pending range: `(days, start, hovered) -> text`.
pub type HoveringTooltip = Arc<dyn Fn(u32, NaiveDate, NaiveDate) -> String + Send + Sync>;

/// Week number for the first displayed day of a row.
pub type WeekNumber = Arc<dyn Fn(NaiveDate, StartOfWeek) -> u32 + Send + Sync>;

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight on `date`.
    pub fn at(date: NaiveDate) -> Self {
        Self(drp_model::date::day_start(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A named shortcut whose dates are computed by the host.
#[derive(Clone)]
pub struct CustomShortcut {
    pub name: String,
    pub dates: Arc<dyn Fn(NaiveDate) -> (DateValue, DateValue) + Send + Sync>,
}

impl CustomShortcut {
    pub fn new<F>(name: impl Into<String>, dates: F) -> Self
    where
        F: Fn(NaiveDate) -> (DateValue, DateValue) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dates: Arc::new(dates),
        }
    }
}

impl fmt::Debug for CustomShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomShortcut")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Callbacks and collaborators owned by one picker instance.
#[derive(Clone)]
pub struct PickerHooks {
    pub before_show_day: Option<BeforeShowDay>,
    pub hovering_tooltip: Option<HoveringTooltip>,
    pub week_number: Option<WeekNumber>,
    pub custom_shortcuts: Vec<CustomShortcut>,
    pub translator: Arc<dyn Translator>,
    pub clock: Arc<dyn Clock>,
    /// Host viewport width, used to resolve `singleMonth: "auto"`.
    pub viewport_width: Option<u32>,
}

impl Default for PickerHooks {
    fn default() -> Self {
        Self {
            before_show_day: None,
            hovering_tooltip: None,
            week_number: None,
            custom_shortcuts: Vec::new(),
            translator: Arc::new(English),
            clock: Arc::new(SystemClock),
            viewport_width: None,
        }
    }
}

impl fmt::Debug for PickerHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerHooks")
            .field("before_show_day", &self.before_show_day.is_some())
            .field("hovering_tooltip", &self.hovering_tooltip.is_some())
            .field("week_number", &self.week_number.is_some())
            .field("custom_shortcuts", &self.custom_shortcuts)
            .field("viewport_width", &self.viewport_width)
            .finish_non_exhaustive()
    }
}

impl PickerHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before_show_day<F>(mut self, f: F) -> Self
    where
        F: Fn(NaiveDate) -> DayAnnotation + Send + Sync + 'static,
    {
        self.before_show_day = Some(Arc::new(f));
        self
    }

    pub fn with_hovering_tooltip<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, NaiveDate, NaiveDate) -> String + Send + Sync + 'static,
    {
        self.hovering_tooltip = Some(Arc::new(f));
        self
    }

    pub fn with_week_number<F>(mut self, f: F) -> Self
    where
        F: Fn(NaiveDate, StartOfWeek) -> u32 + Send + Sync + 'static,
    {
        self.week_number = Some(Arc::new(f));
        self
    }

    pub fn with_custom_shortcut(mut self, shortcut: CustomShortcut) -> Self {
        self.custom_shortcuts.push(shortcut);
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// The host's annotation for `date`, or a plain valid day.
    pub fn annotate(&self, date: NaiveDate) -> DayAnnotation {
        self.before_show_day
            .as_ref()
            .map_or_else(DayAnnotation::valid, |f| f(date))
    }

    pub fn week_number_for(&self, date: NaiveDate, start_of_week: StartOfWeek) -> u32 {
        match &self.week_number {
            Some(f) => f(date, start_of_week),
            None => default_week_number(date, start_of_week),
        }
    }
}

/// ISO week for Monday rows; Sunday rows take the week of their Monday.
pub fn default_week_number(date: NaiveDate, start_of_week: StartOfWeek) -> u32 {
    match start_of_week {
        StartOfWeek::Monday => date.iso_week().week(),
        StartOfWeek::Sunday => drp_model::date::add_days(date, 1).iso_week().week(),
    }
}
