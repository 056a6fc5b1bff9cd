//! Replay script parsing.

use chrono::NaiveDate;

use drp_cli::script::parse_script;
use drp_core::{Key, UserInput};
use drp_model::PaneId;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_script_skips_comments_and_blanks() {
    let script = "\
# pick a week
click 2024-03-10

hover 2024-03-14   # trailing comment
click 2024-03-16
key enter
";
    let steps = parse_script(script).unwrap();
    let inputs: Vec<UserInput> = steps.iter().map(|step| step.input.clone()).collect();
    assert_eq!(
        inputs,
        vec![
            UserInput::Click(date(2024, 3, 10)),
            UserInput::Hover(date(2024, 3, 14)),
            UserInput::Click(date(2024, 3, 16)),
            UserInput::Key(Key::Enter),
        ]
    );
    let lines: Vec<usize> = steps.iter().map(|step| step.line).collect();
    assert_eq!(lines, vec![2, 4, 5, 6]);
}

#[test]
fn test_parse_script_navigation() {
    let steps = parse_script("next\nprev month2\n").unwrap();
    assert_eq!(steps[0].input, UserInput::Next(PaneId::First));
    assert_eq!(steps[1].input, UserInput::Prev(PaneId::Second));
}

#[test]
fn test_parse_script_reports_line() {
    let error = parse_script("click 2024-03-10\nfrobnicate\n").unwrap_err();
    assert!(error.to_string().starts_with("line 2:"));
}

#[test]
fn test_parse_empty_script() {
    assert!(parse_script("# nothing\n\n").unwrap().is_empty());
}
