//! Replay scripts: one [`UserInput`] per line.
//!
//! ```text
//! # pick the second week of March
//! click 2024-03-10
//! hover 2024-03-14
//! click 2024-03-16
//! key enter
//! ```

use anyhow::{Result, anyhow};

use drp_core::UserInput;

/// A parsed script line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub input: UserInput,
}

/// Parse a script, skipping blank lines and `#` comments.
///
/// # Errors
///
/// Fails on the first line that is not a valid input, naming the line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if line.is_empty() {
            continue;
        }
        let input = line
            .parse::<UserInput>()
            .map_err(|message| anyhow!("line {}: {message}", index + 1))?;
        steps.push(ScriptStep {
            line: index + 1,
            input,
        });
    }
    Ok(steps)
}
