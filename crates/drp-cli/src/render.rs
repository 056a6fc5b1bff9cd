//! Terminal rendering of month panes and event logs.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use drp_core::MonthView;
use drp_model::{Day, PickerEvent};

/// One-character state marker for the plain grid.
///
/// Other-month days win over everything, then invalid, selected, hovered.
pub fn day_marker(day: &Day) -> char {
    if !day.in_current_month() {
        '.'
    } else if !day.valid {
        'x'
    } else if day.highlight.checked {
        '*'
    } else if day.highlight.hovering {
        '~'
    } else {
        ' '
    }
}

/// A plain text grid: title, header, then one line per week.
pub fn month_text(view: &MonthView, labels: &[String]) -> String {
    let mut lines = vec![view.month.format("%B %Y").to_string()];
    let header: Vec<String> = labels.iter().map(|label| format!("{label:>3}")).collect();
    lines.push(format!("Wk  | {}", header.join(" ")));
    for week in &view.weeks {
        let cells: Vec<String> = week
            .days
            .iter()
            .map(|day| format!("{}{:>2}", day_marker(day), day.display_number))
            .collect();
        lines.push(format!("W{:02} | {}", week.number, cells.join(" ")));
    }
    lines.join("\n")
}

/// A styled table for one pane.
pub fn month_table(view: &MonthView, labels: &[String], show_week_numbers: bool) -> Table {
    let mut table = Table::new();
    let mut header = Vec::with_capacity(8);
    if show_week_numbers {
        header.push(header_cell("W"));
    }
    header.extend(labels.iter().map(|label| header_cell(label)));
    table.set_header(header);
    apply_table_style(&mut table);
    for week in &view.weeks {
        let mut row = Vec::with_capacity(8);
        if show_week_numbers {
            row.push(dim_cell(week.number));
        }
        row.extend(week.days.iter().map(day_cell));
        table.add_row(row);
    }
    for index in 0..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn day_cell(day: &Day) -> Cell {
    let cell = Cell::new(day.display_number);
    if !day.in_current_month() {
        return cell.fg(Color::DarkGrey);
    }
    if !day.valid {
        return cell.fg(Color::Red).add_attribute(Attribute::CrossedOut);
    }
    let cell = if day.is_today {
        cell.add_attribute(Attribute::Underlined)
    } else {
        cell
    };
    if day.highlight.first_selected || day.highlight.last_selected {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else if day.highlight.checked {
        cell.fg(Color::Cyan)
    } else if day.highlight.hovering {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

/// Event log from a replay: input index, input, event and details.
pub fn events_table(rows: &[(usize, String, PickerEvent)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Input"),
        header_cell("Event"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for (index, input, event) in rows {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(input),
            Cell::new(event.name()).fg(Color::Blue),
            Cell::new(event_detail(event)),
        ]);
    }
    table
}

/// Short human description of an event's payload.
pub fn event_detail(event: &PickerEvent) -> String {
    match event {
        PickerEvent::SelectionFirstPicked { date } => {
            date.format("%Y-%m-%d %H:%M").to_string()
        }
        PickerEvent::SelectionChanged { value, .. }
        | PickerEvent::SelectionApplied { value, .. } => value.clone(),
        PickerEvent::MonthChanged { pane, month } => {
            format!("{pane} -> {}", month.format("%Y-%m"))
        }
        PickerEvent::Opened | PickerEvent::Closed => "-".to_string(),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
