use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use drp_cli::render::{events_table, month_table, month_text};
use drp_cli::script::parse_script;
use drp_core::{DateRangePicker, FixedClock, PickerHooks};
use drp_model::{MapTranslator, PickerConfig, PickerEvent};

use crate::cli::{MonthArgs, PickerArgs, ReplayArgs};

/// Build a picker from the shared command-line options.
fn build_picker(args: &PickerArgs) -> Result<DateRangePicker> {
    let config = match &args.config {
        Some(path) => PickerConfig::from_json(&read_file(path)?)
            .with_context(|| format!("parse config {}", path.display()))?,
        None => PickerConfig::default(),
    };
    let mut hooks = PickerHooks::new();
    if let Some(path) = &args.locale {
        let translator = MapTranslator::from_json(&read_file(path)?)
            .with_context(|| format!("parse locale {}", path.display()))?;
        hooks = hooks.with_translator(translator);
    }
    if let Some(today) = args.today {
        hooks = hooks.with_clock(FixedClock::at(today));
    }
    if let Some(width) = args.viewport_width {
        hooks = hooks.with_viewport_width(width);
    }
    DateRangePicker::new(config, hooks).context("invalid picker options")
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn render_panes(picker: &DateRangePicker, plain: bool, out: &mut String) -> Result<()> {
    let labels = picker.weekday_labels();
    for view in picker.redraw() {
        if plain {
            writeln!(out, "{}", month_text(&view, &labels))?;
        } else {
            writeln!(out, "{}", view.month.format("%B %Y"))?;
            let table = month_table(&view, &labels, picker.config().show_week_numbers);
            writeln!(out, "{table}")?;
        }
        writeln!(out)?;
    }
    if picker.gap_visible() {
        writeln!(out, "(months between panes hidden)")?;
    }
    Ok(())
}

fn render_status(picker: &DateRangePicker, out: &mut String) -> Result<()> {
    let value = picker.value();
    writeln!(
        out,
        "Value: {}",
        if value.is_empty() { "-" } else { value.as_str() }
    )?;
    if let Some(message) = picker.selected_days_message() {
        writeln!(out, "{message}")?;
    }
    if let Some(message) = picker.error_message() {
        writeln!(out, "Error: {message}")?;
    }
    let hint = picker.hint_message();
    if !hint.is_empty() {
        writeln!(out, "Hint: {hint}")?;
    }
    Ok(())
}

pub fn run_month(args: &MonthArgs) -> Result<String> {
    let span = info_span!("month");
    let _guard = span.enter();
    let mut picker = build_picker(&args.picker)?;
    match args.select.as_slice() {
        [] => {}
        [single] if picker.config().single_date => picker.set_single_date(single.as_str()),
        [single] => picker.set_start(single.as_str()),
        [first, second, ..] => picker.set_date_range(first.as_str(), second.as_str(), true),
    }
    let mut out = String::new();
    render_panes(&picker, args.plain, &mut out)?;
    render_status(&picker, &mut out)?;
    let panes = picker.panes();
    info!(month1 = %panes.month1, month2 = %panes.month2, "rendered");
    Ok(out)
}

pub fn run_replay(args: &ReplayArgs) -> Result<String> {
    let span = info_span!("replay", script = %args.script.display());
    let _guard = span.enter();
    let steps = parse_script(&read_file(&args.script)?)
        .with_context(|| format!("parse script {}", args.script.display()))?;
    info!(steps = steps.len(), "script loaded");

    let mut picker = build_picker(&args.picker)?;
    picker.open();
    let mut rows: Vec<(usize, String, PickerEvent)> = picker
        .take_events()
        .into_iter()
        .map(|event| (0, "open".to_string(), event))
        .collect();
    for step in steps {
        let label = step.input.to_string();
        picker.handle(step.input);
        let events = picker.take_events();
        debug!(line = step.line, input = %label, events = events.len(), "replayed");
        rows.extend(
            events
                .into_iter()
                .map(|event| (step.line, label.clone(), event)),
        );
    }

    let mut out = String::new();
    if args.json {
        for (_, _, event) in &rows {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
        }
        return Ok(out);
    }
    writeln!(out, "{}", events_table(&rows))?;
    writeln!(out)?;
    if args.show_panes {
        render_panes(&picker, true, &mut out)?;
    }
    render_status(&picker, &mut out)?;
    Ok(out)
}
