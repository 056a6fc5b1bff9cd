//! Property tests for grid shape, selection ordering and validation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use drp_core::{
    CalendarContext, DateRangePicker, FixedClock, PickerHooks, RangePeriod, RangeRules,
    SelectionMachine, UserInput, build_month, validate,
};
use drp_model::date::{add_days, day_end, day_start, days_in_month};
use drp_model::{
    BatchMode, Bounds, Membership, PaneId, PickerConfig, PickerEvent, SelectionMode, StartOfWeek,
    Violation,
};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..30_000).prop_map(|offset| add_days(base(), offset))
}

fn any_week_start() -> impl Strategy<Value = StartOfWeek> {
    prop_oneof![Just(StartOfWeek::Sunday), Just(StartOfWeek::Monday)]
}

fn any_range_mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::Range),
        Just(SelectionMode::WeekRange),
        Just(SelectionMode::MonthRange),
    ]
}

proptest! {
    #[test]
    fn grid_starts_on_week_start_and_covers_month(anchor in any_date(), start in any_week_start()) {
        let rules = RangeRules::default();
        let hooks = PickerHooks::new();
        let ctx = CalendarContext::new(start, &rules, &hooks);
        let days = build_month(anchor, PaneId::First, &ctx);

        prop_assert_eq!(days[0].date.weekday(), start.weekday());
        prop_assert_eq!(days.len() % 7, 0);
        prop_assert!((4..=6).contains(&(days.len() / 7)));

        let current: Vec<u32> = days
            .iter()
            .filter(|day| day.membership == Membership::CurrentMonth)
            .map(|day| day.display_number)
            .collect();
        let expected: Vec<u32> = (1..=days_in_month(anchor)).collect();
        prop_assert_eq!(current, expected);

        for row in days.chunks(7) {
            prop_assert!(row.iter().any(|day| day.membership != Membership::NextMonth));
        }
        for pair in days.windows(2) {
            prop_assert_eq!(add_days(pair[0].date, 1), pair[1].date);
        }
    }

    #[test]
    fn two_clicks_always_commit_in_order(
        first in any_date(),
        second in any_date(),
        mode in any_range_mode(),
        start in any_week_start(),
    ) {
        let hooks = PickerHooks::new();
        let mut machine = SelectionMachine::new(mode, RangeRules::default(), start);
        machine.click(first, &hooks);
        machine.click(second, &hooks);
        let state = machine.state();
        prop_assert!(state.is_complete());
        let (Some(s), Some(e)) = (state.start, state.end) else {
            return Err(TestCaseError::fail("selection incomplete"));
        };
        prop_assert!(s <= e);
        prop_assert!(s.date() <= first.min(second));
        prop_assert!(e.date() >= first.max(second));
    }

    #[test]
    fn set_date_range_round_trips_at_day_resolution(d1 in any_date(), d2 in any_date()) {
        let hooks = PickerHooks::new().with_clock(FixedClock::at(base()));
        let mut picker = DateRangePicker::new(PickerConfig::default(), hooks).unwrap();
        picker.set_date_range(d1, d2, false);
        let changed = picker.take_events().into_iter().find_map(|event| match event {
            PickerEvent::SelectionChanged { date1, date2, .. } => Some((date1, date2)),
            _ => None,
        });
        let Some((date1, date2)) = changed else {
            return Err(TestCaseError::fail("no selection-changed event"));
        };
        prop_assert_eq!(date1.date(), d1.min(d2));
        prop_assert_eq!(date2.map(|d| d.date()), Some(d1.max(d2)));
    }

    #[test]
    fn period_ranges_ignore_argument_order(
        d1 in any_date(),
        d2 in any_date(),
        batch in prop_oneof![Just(BatchMode::WeekRange), Just(BatchMode::MonthRange)],
        start in any_week_start(),
    ) {
        let config = PickerConfig::default()
            .with_batch_mode(batch)
            .with_start_of_week(start);
        let pick = |a: NaiveDate, b: NaiveDate| {
            let hooks = PickerHooks::new().with_clock(FixedClock::at(base()));
            let mut picker = DateRangePicker::new(config.clone(), hooks).unwrap();
            picker.set_date_range(a, b, false);
            *picker.selection()
        };
        let forward = pick(d1, d2);
        let backward = pick(d2, d1);
        prop_assert_eq!(forward, backward);

        let period = RangePeriod::for_mode(SelectionMode::from_options(false, batch), start);
        let (low, high) = (d1.min(d2), d1.max(d2));
        prop_assert_eq!(forward.start.map(|d| d.date()), Some(period.first(low)));
        prop_assert_eq!(forward.end.map(|d| d.date()), Some(period.last(high)));
    }

    #[test]
    fn redraw_is_pure(clicked in any_date(), hovered in any_date()) {
        let hooks = PickerHooks::new().with_clock(FixedClock::at(clicked));
        let config = PickerConfig::default().with_span(2, 40);
        let mut picker = DateRangePicker::new(config, hooks).unwrap();
        picker.handle(UserInput::Click(clicked));
        picker.handle(UserInput::Hover(hovered));
        prop_assert_eq!(picker.redraw(), picker.redraw());
    }

    #[test]
    fn validation_matches_inclusive_span(
        start in any_date(),
        length in 1u32..60,
        min in 0u32..30,
        extra in 0u32..30,
    ) {
        let max = if min == 0 { extra } else { min + extra };
        let bounds = Bounds::new().with_span(min, max);
        let end = add_days(start, i64::from(length) - 1);
        let result = validate(&day_start(start), &day_end(end), &bounds);
        let expected = if max > 0 && length > max {
            Err(Violation::TooLong { max })
        } else if min > 0 && length < min {
            Err(Violation::TooShort { min })
        } else {
            Ok(())
        };
        prop_assert_eq!(result, expected);
    }
}
