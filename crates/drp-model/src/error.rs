//! Error types for picker configuration and selection constraints.

use thiserror::Error;

/// Problems found while validating a [`PickerConfig`](crate::PickerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `minDays` larger than `maxDays`.
    #[error("minDays ({min}) must not exceed maxDays ({max})")]
    SpanBoundsInverted { min: u32, max: u32 },

    /// `startDate` after `endDate`.
    #[error("startDate {start} is after endDate {end}")]
    DateBoundsInverted { start: String, end: String },

    /// Both forward-only and backward-only picking requested.
    #[error("selectForward and selectBackward cannot both be enabled")]
    ConflictingDirection,

    /// Empty display format or separator.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Time selector value outside 00:00..23:59.
    #[error("invalid {field}: {hour:02}:{minute:02}")]
    InvalidTime {
        field: &'static str,
        hour: u32,
        minute: u32,
    },

    /// The configuration document could not be parsed.
    #[error("failed to parse picker configuration")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// A committed selection that breaks the configured bounds.
///
/// The engine never returns these to the host. They are absorbed into the
/// picker state, which is cleared, and surfaced as a message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Violation {
    /// Fewer days than `minDays`.
    #[error("selection shorter than {min} days")]
    TooShort { min: u32 },

    /// More days than `maxDays`.
    #[error("selection longer than {max} days")]
    TooLong { max: u32 },

    /// Start before `startDate` or end after `endDate`.
    #[error("selection outside the allowed dates")]
    OutOfBounds,
}

impl Violation {
    /// Out-of-bounds picks are rejected silently; span violations show a message.
    pub fn has_message(&self) -> bool {
        !matches!(self, Violation::OutOfBounds)
    }
}

/// Text that could not be parsed with the configured display format.
#[derive(Debug, Error)]
#[error("cannot parse {input:?} with format {format:?}")]
pub struct DateParseError {
    pub input: String,
    pub format: String,
    #[source]
    pub source: chrono::ParseError,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
