//! Month grid computation.
//!
//! A grid starts on the configured week start, carries the trailing days of
//! the previous month, every day of the month, and just enough days of the
//! next month to finish the last row. A row made only of next-month days is
//! never started, so grids have four to six rows.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use drp_model::date::{add_days, first_of_month, last_of_month, weekday_offset};
use drp_model::locale::translate_or_key;
use drp_model::{
    Bounds, Day, DayHighlight, Membership, PaneId, SelectionState, StartOfWeek, Week,
};

use crate::constraint::{RangeRules, is_selectable};
use crate::hooks::PickerHooks;

/// Inputs that determine a rendered month besides its anchor.
#[derive(Debug, Clone, Copy)]
pub struct CalendarContext<'a> {
    pub start_of_week: StartOfWeek,
    pub rules: &'a RangeRules,
    pub hooks: &'a PickerHooks,
    pub selection: Option<&'a SelectionState>,
    pub hovered: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
}

impl<'a> CalendarContext<'a> {
    pub fn new(start_of_week: StartOfWeek, rules: &'a RangeRules, hooks: &'a PickerHooks) -> Self {
        Self {
            start_of_week,
            rules,
            hooks,
            selection: None,
            hovered: None,
            today: None,
        }
    }

    pub fn with_selection(mut self, selection: &'a SelectionState) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_hovered(mut self, hovered: Option<NaiveDate>) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Start of a range still waiting for its end.
    fn pending_start(&self) -> Option<NaiveDate> {
        self.selection
            .filter(|selection| selection.is_pending())
            .and_then(|selection| selection.start)
            .map(|start| start.date())
    }

    fn highlight(&self, date: NaiveDate) -> DayHighlight {
        let Some(selection) = self.selection else {
            return DayHighlight::default();
        };
        let hovering = match (self.pending_start(), self.hovered) {
            (Some(start), Some(hovered)) => {
                let (low, high) = self.rules.committed_span(start, hovered);
                low <= date && date <= high
            }
            _ => false,
        };
        DayHighlight {
            checked: selection.contains(date),
            first_selected: selection.start.is_some_and(|start| start.date() == date),
            last_selected: selection.end.is_some_and(|end| end.date() == date),
            hovering,
        }
    }

    fn day(&self, date: NaiveDate, membership: Membership) -> Day {
        let annotation = self.hooks.annotate(date);
        let valid = annotation.valid
            && is_selectable(date, self.pending_start(), self.rules, self.hooks);
        Day {
            date,
            display_number: date.day(),
            membership,
            valid,
            extra_class: annotation.extra_class,
            tooltip: annotation.tooltip,
            is_today: self.today == Some(date),
            highlight: self.highlight(date),
        }
    }
}

/// Build the cells for the month containing `anchor`.
pub fn build_month(anchor: NaiveDate, pane: PaneId, ctx: &CalendarContext<'_>) -> Vec<Day> {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);
    let leading = weekday_offset(first.weekday(), ctx.start_of_week.weekday());

    let mut days = Vec::with_capacity(42);
    for back in (1..=i64::from(leading)).rev() {
        days.push(ctx.day(add_days(first, -back), Membership::PreviousMonth));
    }
    let mut current = first;
    while current <= last {
        days.push(ctx.day(current, Membership::CurrentMonth));
        current = add_days(current, 1);
    }
    let remainder = days.len() % 7;
    if remainder != 0 {
        for offset in 0..(7 - remainder) {
            let offset = i64::try_from(offset).unwrap_or_default();
            days.push(ctx.day(add_days(last, offset + 1), Membership::NextMonth));
        }
    }
    trace!(%pane, month = %first, cells = days.len(), "built month grid");
    days
}

/// Split a month grid into rows with week numbers.
pub fn weeks(days: &[Day], start_of_week: StartOfWeek, hooks: &PickerHooks) -> Vec<Week> {
    days.chunks(7)
        .map(|row| Week {
            number: row
                .first()
                .map_or(0, |day| hooks.week_number_for(day.date, start_of_week)),
            days: row.to_vec(),
        })
        .collect()
}

/// A rendered pane: its month and the grid split into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub pane: PaneId,
    pub month: NaiveDate,
    pub weeks: Vec<Week>,
}

impl MonthView {
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}

pub fn month_view(anchor: NaiveDate, pane: PaneId, ctx: &CalendarContext<'_>) -> MonthView {
    let days = build_month(anchor, pane, ctx);
    MonthView {
        pane,
        month: first_of_month(anchor),
        weeks: weeks(&days, ctx.start_of_week, ctx.hooks),
    }
}

/// True when no day of `month` lies within the absolute bounds.
pub fn is_month_out_of_bounds(month: NaiveDate, bounds: &Bounds) -> bool {
    if let Some(min) = bounds.min_date
        && last_of_month(month) < min
    {
        return true;
    }
    if let Some(max) = bounds.max_date
        && first_of_month(month) > max
    {
        return true;
    }
    false
}

/// Column headers in display order, translated.
pub fn weekday_labels(start_of_week: StartOfWeek, hooks: &PickerHooks) -> Vec<String> {
    // Keys run week-1 (Monday) through week-7 (Sunday).
    let order: [u32; 7] = match start_of_week {
        StartOfWeek::Monday => [1, 2, 3, 4, 5, 6, 7],
        StartOfWeek::Sunday => [7, 1, 2, 3, 4, 5, 6],
    };
    order
        .iter()
        .map(|index| translate_or_key(hooks.translator.as_ref(), &format!("week-{index}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use drp_model::date::{day_end, day_start};
    use drp_model::{DayAnnotation, SelectionMode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn numbers(days: &[Day], membership: Membership) -> Vec<u32> {
        days.iter()
            .filter(|day| day.membership == membership)
            .map(|day| day.display_number)
            .collect()
    }

    #[test]
    fn march_2024_monday_start() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let ctx = CalendarContext::new(StartOfWeek::Monday, &rules, &hooks);
        let days = build_month(date(2024, 3, 14), PaneId::First, &ctx);

        // March 1st 2024 is a Friday.
        assert_eq!(numbers(&days, Membership::PreviousMonth), vec![26, 27, 28, 29]);
        assert_eq!(numbers(&days, Membership::CurrentMonth), (1..=31).collect::<Vec<_>>());
        assert_eq!(numbers(&days, Membership::NextMonth), Vec::<u32>::new());
        assert_eq!(days.len(), 35);
        assert_eq!(days[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_days() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let ctx = CalendarContext::new(StartOfWeek::Sunday, &rules, &hooks);
        // September 1st 2024 is a Sunday.
        let days = build_month(date(2024, 9, 1), PaneId::First, &ctx);
        assert_eq!(days[0].date, date(2024, 9, 1));
        assert_eq!(numbers(&days, Membership::NextMonth), vec![1, 2, 3, 4, 5]);
        assert_eq!(days.len() % 7, 0);
    }

    #[test]
    fn february_2015_fits_four_rows() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let ctx = CalendarContext::new(StartOfWeek::Sunday, &rules, &hooks);
        // February 2015 starts on a Sunday and has 28 days.
        let days = build_month(date(2015, 2, 10), PaneId::Second, &ctx);
        assert_eq!(days.len(), 28);
        assert!(days.iter().all(Day::in_current_month));
    }

    #[test]
    fn bounds_and_callback_mark_invalid_days() {
        let rules = RangeRules {
            bounds: Bounds::new().with_dates(Some(date(2024, 1, 10)), Some(date(2024, 1, 20))),
            ..RangeRules::default()
        };
        let hooks = PickerHooks::new().with_before_show_day(|d| {
            if d == NaiveDate::from_ymd_opt(2024, 1, 15).unwrap() {
                DayAnnotation::invalid().with_class("holiday").with_tooltip("Closed")
            } else {
                DayAnnotation::valid()
            }
        });
        let ctx = CalendarContext::new(StartOfWeek::Sunday, &rules, &hooks);
        let days = build_month(date(2024, 1, 1), PaneId::First, &ctx);
        let find = |d: NaiveDate| days.iter().find(|day| day.date == d).unwrap();

        assert!(!find(date(2024, 1, 5)).valid);
        assert!(find(date(2024, 1, 10)).valid);
        let holiday = find(date(2024, 1, 15));
        assert!(!holiday.valid);
        assert_eq!(holiday.extra_class, "holiday");
        assert_eq!(holiday.tooltip, "Closed");
        assert!(!find(date(2024, 1, 21)).valid);
    }

    #[test]
    fn pending_selection_marks_hover_preview_backwards() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let mut selection = SelectionState::new(SelectionMode::Range);
        selection.start = Some(day_start(date(2024, 3, 14)));
        let ctx = CalendarContext::new(StartOfWeek::Monday, &rules, &hooks)
            .with_selection(&selection)
            .with_hovered(Some(date(2024, 3, 11)));
        let days = build_month(date(2024, 3, 1), PaneId::First, &ctx);
        let hovering: Vec<u32> = days
            .iter()
            .filter(|day| day.highlight.hovering)
            .map(|day| day.display_number)
            .collect();
        assert_eq!(hovering, vec![11, 12, 13, 14]);
    }

    #[test]
    fn complete_selection_is_checked() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let mut selection = SelectionState::new(SelectionMode::Range);
        selection.start = Some(day_start(date(2024, 3, 30)));
        selection.end = Some(day_end(date(2024, 4, 2)));
        let ctx = CalendarContext::new(StartOfWeek::Monday, &rules, &hooks)
            .with_selection(&selection)
            .with_hovered(Some(date(2024, 4, 20)));
        let days = build_month(date(2024, 4, 1), PaneId::Second, &ctx);
        let checked: Vec<NaiveDate> = days
            .iter()
            .filter(|day| day.highlight.checked)
            .map(|day| day.date)
            .collect();
        // April 2024 starts on Monday, so March days are not shown.
        assert_eq!(checked, vec![date(2024, 4, 1), date(2024, 4, 2)]);
        assert!(days[1].highlight.last_selected);
        assert!(days.iter().all(|day| !day.highlight.hovering));
    }

    #[test]
    fn week_rows_carry_numbers() {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let ctx = CalendarContext::new(StartOfWeek::Monday, &rules, &hooks);
        let days = build_month(date(2024, 3, 1), PaneId::First, &ctx);
        let rows = weeks(&days, StartOfWeek::Monday, &hooks);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].number, 9);
        assert_eq!(rows[0].start(), Some(date(2024, 2, 26)));
    }

    #[test]
    fn month_bounds_check() {
        let bounds = Bounds::new().with_dates(Some(date(2024, 1, 10)), Some(date(2024, 3, 5)));
        assert!(is_month_out_of_bounds(date(2023, 12, 1), &bounds));
        assert!(!is_month_out_of_bounds(date(2024, 1, 1), &bounds));
        assert!(!is_month_out_of_bounds(date(2024, 3, 31), &bounds));
        assert!(is_month_out_of_bounds(date(2024, 4, 1), &bounds));
    }

    #[test]
    fn labels_follow_week_start() {
        let hooks = PickerHooks::new();
        assert_eq!(weekday_labels(StartOfWeek::Sunday, &hooks)[0], "su");
        assert_eq!(weekday_labels(StartOfWeek::Monday, &hooks)[6], "su");
    }
}
