//! Preset ranges relative to today.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use drp_model::date::{
    add_days, day_end, day_start, first_of_month, last_of_month, next_month, prev_month,
};
use drp_model::locale::translate_or_key;
use drp_model::{DateValue, PeriodKind, ShortcutsConfig, StartOfWeek, Translator};

use crate::hooks::PickerHooks;
use crate::selection::week_start;

/// A preset the host can offer next to the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// The `n` days before today.
    PrevDays(u32),
    /// The `n` days after today.
    NextDays(u32),
    /// The whole previous week, month or year.
    Prev(PeriodKind),
    /// The whole next week, month or year.
    Next(PeriodKind),
    /// A host-defined shortcut, looked up by name in [`PickerHooks`].
    Custom(String),
}

impl Shortcut {
    /// The range this shortcut selects, or `None` for an unknown custom name.
    pub fn resolve(
        &self,
        today: NaiveDate,
        start_of_week: StartOfWeek,
        hooks: &PickerHooks,
    ) -> Option<(DateValue, DateValue)> {
        let (first, last) = match self {
            Shortcut::PrevDays(days) => (add_days(today, -i64::from(*days)), add_days(today, -1)),
            Shortcut::NextDays(days) => (add_days(today, 1), add_days(today, i64::from(*days))),
            Shortcut::Prev(period) => previous_period(*period, today, start_of_week),
            Shortcut::Next(period) => following_period(*period, today, start_of_week),
            Shortcut::Custom(name) => {
                let custom = hooks.custom_shortcuts.iter().find(|c| &c.name == name)?;
                return Some((custom.dates)(today));
            }
        };
        Some((day_start(first), day_end(last)))
    }

    /// Button text in the current language.
    pub fn label(&self, translator: &dyn Translator) -> String {
        match self {
            Shortcut::PrevDays(days) => format!(
                "{} {days} {}",
                translate_or_key(translator, "past"),
                translate_or_key(translator, "days")
            ),
            Shortcut::NextDays(days) => format!(
                "{} {days} {}",
                translate_or_key(translator, "following"),
                translate_or_key(translator, "days")
            ),
            Shortcut::Prev(period) => format!(
                "{} {}",
                translate_or_key(translator, "previous"),
                translate_or_key(translator, &format!("prev-{}", period_name(*period)))
            ),
            Shortcut::Next(period) => format!(
                "{} {}",
                translate_or_key(translator, "next"),
                translate_or_key(translator, &format!("next-{}", period_name(*period)))
            ),
            Shortcut::Custom(name) => name.clone(),
        }
    }
}

fn period_name(period: PeriodKind) -> &'static str {
    match period {
        PeriodKind::Week => "week",
        PeriodKind::Month => "month",
        PeriodKind::Year => "year",
    }
}

fn year_bounds(year: i32, fallback: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(fallback),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(fallback),
    )
}

fn previous_period(
    period: PeriodKind,
    today: NaiveDate,
    start_of_week: StartOfWeek,
) -> (NaiveDate, NaiveDate) {
    match period {
        PeriodKind::Week => {
            let this_week = week_start(today, start_of_week);
            (add_days(this_week, -7), add_days(this_week, -1))
        }
        PeriodKind::Month => {
            let month = prev_month(today);
            (month, last_of_month(month))
        }
        PeriodKind::Year => year_bounds(today.year() - 1, today),
    }
}

fn following_period(
    period: PeriodKind,
    today: NaiveDate,
    start_of_week: StartOfWeek,
) -> (NaiveDate, NaiveDate) {
    match period {
        PeriodKind::Week => {
            let this_week = week_start(today, start_of_week);
            (add_days(this_week, 7), add_days(this_week, 13))
        }
        PeriodKind::Month => {
            let month = next_month(first_of_month(today));
            (month, last_of_month(month))
        }
        PeriodKind::Year => year_bounds(today.year() + 1, today),
    }
}

/// Every shortcut enabled by the configuration plus the host's custom ones.
pub fn available(config: &ShortcutsConfig, hooks: &PickerHooks) -> Vec<Shortcut> {
    config
        .prev_days
        .iter()
        .map(|days| Shortcut::PrevDays(*days))
        .chain(config.prev.iter().map(|period| Shortcut::Prev(*period)))
        .chain(config.next_days.iter().map(|days| Shortcut::NextDays(*days)))
        .chain(config.next.iter().map(|period| Shortcut::Next(*period)))
        .chain(
            hooks
                .custom_shortcuts
                .iter()
                .map(|custom| Shortcut::Custom(custom.name.clone())),
        )
        .collect()
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::PrevDays(days) => write!(f, "prev-days:{days}"),
            Shortcut::NextDays(days) => write!(f, "next-days:{days}"),
            Shortcut::Prev(period) => write!(f, "prev:{}", period_name(*period)),
            Shortcut::Next(period) => write!(f, "next:{}", period_name(*period)),
            Shortcut::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

impl FromStr for Shortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("expected kind:value, got {s:?}"))?;
        let period = |arg: &str| match arg {
            "week" => Ok(PeriodKind::Week),
            "month" => Ok(PeriodKind::Month),
            "year" => Ok(PeriodKind::Year),
            other => Err(format!("unknown period {other:?}")),
        };
        let days = |arg: &str| {
            arg.parse::<u32>()
                .map_err(|e| format!("invalid day count {arg:?}: {e}"))
        };
        match kind {
            "prev-days" => days(arg).map(Shortcut::PrevDays),
            "next-days" => days(arg).map(Shortcut::NextDays),
            "prev" => period(arg).map(Shortcut::Prev),
            "next" => period(arg).map(Shortcut::Next),
            "custom" => Ok(Shortcut::Custom(arg.to_string())),
            other => Err(format!("unknown shortcut kind {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::CustomShortcut;
    use drp_model::English;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_of(range: Option<(DateValue, DateValue)>) -> Option<(NaiveDate, NaiveDate)> {
        range.map(|(start, end)| (start.date(), end.date()))
    }

    #[test]
    fn relative_day_counts_exclude_today() {
        let hooks = PickerHooks::new();
        let today = date(2024, 3, 14);
        assert_eq!(
            days_of(Shortcut::PrevDays(7).resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((date(2024, 3, 7), date(2024, 3, 13)))
        );
        assert_eq!(
            days_of(Shortcut::NextDays(3).resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((date(2024, 3, 15), date(2024, 3, 17)))
        );
    }

    #[test]
    fn periods_follow_week_start_and_calendar() {
        let hooks = PickerHooks::new();
        let today = date(2024, 3, 14);
        assert_eq!(
            days_of(Shortcut::Prev(PeriodKind::Week).resolve(today, StartOfWeek::Monday, &hooks)),
            Some((date(2024, 3, 4), date(2024, 3, 10)))
        );
        assert_eq!(
            days_of(Shortcut::Next(PeriodKind::Week).resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((date(2024, 3, 17), date(2024, 3, 23)))
        );
        assert_eq!(
            days_of(Shortcut::Prev(PeriodKind::Month).resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            days_of(Shortcut::Next(PeriodKind::Year).resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((date(2025, 1, 1), date(2025, 12, 31)))
        );
    }

    #[test]
    fn custom_shortcuts_come_from_hooks() {
        let hooks = PickerHooks::new().with_custom_shortcut(CustomShortcut::new("today", |today| {
            (day_start(today), day_end(today))
        }));
        let today = date(2024, 3, 14);
        let custom = Shortcut::Custom("today".to_string());
        assert_eq!(
            days_of(custom.resolve(today, StartOfWeek::Sunday, &hooks)),
            Some((today, today))
        );
        assert_eq!(
            Shortcut::Custom("missing".into()).resolve(today, StartOfWeek::Sunday, &hooks),
            None
        );
        let listed = available(&ShortcutsConfig::default(), &hooks);
        assert_eq!(listed.len(), 7);
        assert_eq!(listed.last(), Some(&custom));
    }

    #[test]
    fn labels_and_text_form() {
        assert_eq!(Shortcut::PrevDays(3).label(&English), "Past 3 Days");
        assert_eq!(Shortcut::Prev(PeriodKind::Month).label(&English), "Previous Month");
        assert_eq!("next:year".parse::<Shortcut>(), Ok(Shortcut::Next(PeriodKind::Year)));
        assert_eq!(Shortcut::NextDays(5).to_string(), "next-days:5");
        assert!("sideways:week".parse::<Shortcut>().is_err());
    }
}
