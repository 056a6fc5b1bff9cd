//! Data model for the date range picker engine.
//!
//! Everything here is plain data: typed options, calendar cells, selection and
//! pane state, events for the host, and the locale table. The behavior lives in
//! `drp-core`.

pub mod bounds;
pub mod config;
pub mod date;
pub mod day;
pub mod enums;
pub mod error;
pub mod event;
pub mod locale;
pub mod selection;

pub use bounds::Bounds;
pub use config::{
    DEFAULT_FORMAT, DEFAULT_SEPARATOR, PeriodKind, PickerConfig, ShortcutsConfig, TimeConfig,
    TimeOfDay,
};
pub use date::DateValue;
pub use day::{Day, DayAnnotation, DayHighlight, Week};
pub use enums::{BatchMode, Membership, PaneId, SingleMonth, StartOfWeek};
pub use error::{ConfigError, DateParseError, Result, Violation};
pub use event::PickerEvent;
pub use locale::{English, MapTranslator, Translator};
pub use selection::{PaneState, Phase, SelectionMode, SelectionState};
