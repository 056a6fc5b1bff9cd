//! Terminal harness for the date range picker engine.

pub mod logging;
pub mod render;
pub mod script;
