//! Rendering of panes and event logs.

use chrono::NaiveDate;

use drp_cli::render::{day_marker, event_detail, events_table, month_table, month_text};
use drp_core::{DateRangePicker, FixedClock, PickerHooks, UserInput};
use drp_model::{PaneId, PickerConfig, PickerEvent};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn picker(config: PickerConfig) -> DateRangePicker {
    let hooks = PickerHooks::new().with_clock(FixedClock::at(date(2024, 3, 1)));
    DateRangePicker::new(config, hooks).unwrap()
}

// ============================================================================
// Plain grid
// ============================================================================

#[test]
fn test_plain_grid_marks_selection_and_other_month() {
    let mut picker = picker(PickerConfig::default());
    picker.set_date_range(date(2024, 3, 4), date(2024, 3, 8), true);
    let views = picker.redraw();
    let text = month_text(&views[0], &picker.weekday_labels());

    insta::assert_snapshot!(text, @r"
    March 2024
    Wk  |  su  mo  tu  we  th  fr  sa
    W09 | .25 .26 .27 .28 .29   1   2
    W10 |   3 * 4 * 5 * 6 * 7 * 8   9
    W11 |  10  11  12  13  14  15  16
    W12 |  17  18  19  20  21  22  23
    W13 |  24  25  26  27  28  29  30
    W14 |  31 . 1 . 2 . 3 . 4 . 5 . 6
    ");
}

#[test]
fn test_plain_grid_marks_invalid_days() {
    let config = PickerConfig::default().with_date_bounds(Some(date(2024, 3, 10)), None);
    let picker = picker(config);
    let views = picker.redraw();
    let march = &views[0];
    let ninth = march.days().find(|day| day.date == date(2024, 3, 9)).unwrap();
    let tenth = march.days().find(|day| day.date == date(2024, 3, 10)).unwrap();
    assert_eq!(day_marker(ninth), 'x');
    assert_eq!(day_marker(tenth), ' ');
}

#[test]
fn test_plain_grid_marks_hover_span() {
    let mut picker = picker(PickerConfig::default());
    picker.handle(UserInput::Click(date(2024, 3, 12)));
    picker.handle(UserInput::Hover(date(2024, 3, 14)));
    let views = picker.redraw();
    let march = &views[0];
    let markers: Vec<char> = (11..=15)
        .map(|d| {
            let day = march.days().find(|day| day.date == date(2024, 3, d)).unwrap();
            day_marker(day)
        })
        .collect();
    assert_eq!(markers, vec![' ', '*', '~', '~', ' ']);
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_month_table_has_week_number_column() {
    let picker = picker(PickerConfig::default());
    let views = picker.redraw();
    let labels = picker.weekday_labels();
    let mut with_numbers = month_table(&views[0], &labels, true);
    let mut without = month_table(&views[0], &labels, false);
    assert_eq!(with_numbers.column_count(), 8);
    assert_eq!(without.column_count(), 7);
}

#[test]
fn test_events_table_lists_event_names() {
    let rows = vec![
        (0, "open".to_string(), PickerEvent::Opened),
        (
            2,
            "next".to_string(),
            PickerEvent::MonthChanged {
                pane: PaneId::First,
                month: date(2024, 4, 1),
            },
        ),
    ];
    let rendered = events_table(&rows).to_string();
    assert!(rendered.contains("opened"));
    assert!(rendered.contains("month-changed"));
    assert!(rendered.contains("month1 -> 2024-04"));
}

#[test]
fn test_event_detail_uses_value() {
    let event = PickerEvent::SelectionChanged {
        value: "2024-03-04 to 2024-03-08".to_string(),
        date1: date(2024, 3, 4).and_hms_opt(0, 0, 0).unwrap(),
        date2: None,
    };
    assert_eq!(event_detail(&event), "2024-03-04 to 2024-03-08");
    assert_eq!(event_detail(&PickerEvent::Closed), "-");
}
