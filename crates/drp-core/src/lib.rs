//! Range selection engine for an inline date and date-range picker.
//!
//! The engine is rendering-agnostic: it computes month grids, advances the
//! selection on clicks, validates spans against bounds and moves the month
//! panes. Hosts own drawing and deliver input through
//! [`DateRangePicker::handle`].

pub mod calendar;
pub mod constraint;
pub mod debounce;
pub mod format;
pub mod hooks;
pub mod input;
pub mod messages;
pub mod navigation;
pub mod picker;
pub mod selection;
pub mod shortcuts;
pub mod time;

pub use calendar::{
    CalendarContext, MonthView, build_month, is_month_out_of_bounds, month_view, weekday_labels,
    weeks,
};
pub use constraint::{RangePeriod, RangeRules, is_selectable, validate};
pub use debounce::InputDebouncer;
pub use format::{format_date, format_value, parse_date, parse_or_now, split_value};
pub use hooks::{Clock, CustomShortcut, FixedClock, PickerHooks, SystemClock};
pub use input::{Key, UserInput};
pub use navigation::{NavRules, Navigator, initial_panes};
pub use picker::{DateArg, DateRangePicker};
pub use selection::{ClickOutcome, SelectionMachine, batch_period, week_start};
pub use shortcuts::Shortcut;
pub use time::Endpoint;
