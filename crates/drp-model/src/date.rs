//! Day and month arithmetic over `chrono` naive date-times.
//!
//! Selection values are instants, but every comparison the engine makes is
//! at day or month resolution. Comparing raw instants would let a start at
//! 00:00 and an end at 23:59:59.999 on the same day disagree, so all callers
//! go through [`compare_day`] and [`compare_month`].

use std::cmp::Ordering;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// An instant truncated to day or second precision.
pub type DateValue = NaiveDateTime;

/// Compare two instants at day resolution.
pub fn compare_day(a: &DateValue, b: &DateValue) -> Ordering {
    a.date().cmp(&b.date())
}

/// Compare two instants at month resolution.
pub fn compare_month(a: &DateValue, b: &DateValue) -> Ordering {
    (a.year(), a.month()).cmp(&(b.year(), b.month()))
}

/// Compare two calendar dates at month resolution.
pub fn compare_month_date(a: NaiveDate, b: NaiveDate) -> Ordering {
    (a.year(), a.month()).cmp(&(b.year(), b.month()))
}

/// Midnight at the start of `date`.
pub fn day_start(date: NaiveDate) -> DateValue {
    date.and_time(NaiveTime::MIN)
}

/// The last millisecond of `date` (23:59:59.999).
pub fn day_end(date: NaiveDate) -> DateValue {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(end)
}

/// Inclusive number of days covered by two instants, in either order.
///
/// The same day counts as 1.
pub fn count_days(a: &DateValue, b: &DateValue) -> u32 {
    count_days_between(a.date(), b.date())
}

/// Inclusive number of days between two dates, in either order.
pub fn count_days_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let distance = (a - b).num_days().unsigned_abs();
    u32::try_from(distance).unwrap_or(u32::MAX - 1) + 1
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the month following `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// First day of the month preceding `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// `YYYYMM` as an integer, e.g. `202403` for March 2024.
pub fn month_key(date: NaiveDate) -> i32 {
    date.year() * 100 + i32::try_from(date.month()).unwrap_or(1)
}

/// Absolute `YYYYMM` distance between the months of two dates.
///
/// This is the integer distance, not a month count: December 2023 to
/// January 2024 is 89.
pub fn month_distance(a: NaiveDate, b: NaiveDate) -> u32 {
    (month_key(a) - month_key(b)).unsigned_abs()
}

/// Shift `date` by a signed number of days, saturating at the calendar edges.
pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let magnitude = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

/// Days since `week_start`, in `0..7`.
pub fn weekday_offset(weekday: Weekday, week_start: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}
