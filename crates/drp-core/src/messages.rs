//! User-facing messages built from the translation table.

use drp_model::locale::{fill_numbers, translate_or_key};
use drp_model::{Bounds, Translator, Violation};

/// Message for a rejected selection. Out-of-bounds picks have none.
pub fn violation_message(violation: Violation, translator: &dyn Translator) -> Option<String> {
    match violation {
        Violation::TooLong { max } => Some(fill_numbers(
            &translate_or_key(translator, "less-than"),
            &[max],
        )),
        Violation::TooShort { min } => Some(fill_numbers(
            &translate_or_key(translator, "more-than"),
            &[min],
        )),
        Violation::OutOfBounds => None,
    }
}

/// The prompt shown while nothing is selected.
pub fn hint_message(single_date: bool, bounds: &Bounds, translator: &dyn Translator) -> String {
    if single_date {
        return translate_or_key(translator, "default-single");
    }
    match (bounds.min_days, bounds.max_days) {
        (Some(min), Some(max)) => {
            fill_numbers(&translate_or_key(translator, "default-range"), &[min, max])
        }
        (Some(min), None) => fill_numbers(&translate_or_key(translator, "default-more"), &[min]),
        (None, Some(max)) => fill_numbers(&translate_or_key(translator, "default-less"), &[max]),
        (None, None) => translate_or_key(translator, "default-default"),
    }
}

/// "Selected: N Days" style summary.
pub fn selected_days_message(days: u32, translator: &dyn Translator) -> String {
    let unit = if days == 1 { "day" } else { "days" };
    format!(
        "{} {days} {}",
        translate_or_key(translator, "selected"),
        translate_or_key(translator, unit)
    )
}
