//! CLI argument definitions for the `drp` harness.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "drp",
    version,
    about = "Date range picker engine harness - render panes and replay input",
    long_about = "Host the date range picker engine from the terminal.\n\n\
                  Renders the calendar panes for a configuration and replays\n\
                  scripted clicks, hovers, keys and navigation against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the calendar panes.
    Month(MonthArgs),

    /// Apply a script of user input and report the events.
    Replay(ReplayArgs),
}

/// Options shared by every command that builds a picker.
#[derive(Args)]
pub struct PickerArgs {
    /// Picker options as a JSON object (camelCase keys).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Translation table as a flat JSON object.
    #[arg(long = "locale", value_name = "FILE")]
    pub locale: Option<PathBuf>,

    /// Pin "today" instead of reading the system clock.
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Host viewport width, used when singleMonth is "auto".
    #[arg(long = "viewport-width", value_name = "PX")]
    pub viewport_width: Option<u32>,
}

#[derive(Parser)]
pub struct MonthArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Select a range (or a single date) before rendering, in the configured format.
    #[arg(long = "select", value_name = "DATE", num_args = 1..=2)]
    pub select: Vec<String>,

    /// Plain text grid instead of a table.
    #[arg(long = "plain")]
    pub plain: bool,
}

#[derive(Parser)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Script with one input per line; `#` starts a comment.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print events as JSON lines instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Render the panes after the last input.
    #[arg(long = "show-panes")]
    pub show_panes: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
