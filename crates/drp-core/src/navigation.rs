//! Two-pane month navigation.
//!
//! Panes normally move one at a time and may not cross each other. With
//! sticky months they move together. Any move that would show a month with
//! no selectable day is refused and leaves the panes untouched.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use drp_model::date::{compare_month_date, month_distance, next_month, prev_month};
use drp_model::{Bounds, PaneId, PaneState, PickerConfig};

use crate::calendar::is_month_out_of_bounds;

/// `YYYYMM` distance of adjacent months across a year boundary (e.g. 202401 - 202312).
const YEAR_WRAP_DISTANCE: u32 = 89;

/// Options that shape pane movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavRules {
    pub sticky: bool,
    pub look_behind: bool,
    pub single_date: bool,
    /// Only the first pane is displayed.
    pub single_month: bool,
    pub bounds: Bounds,
}

impl NavRules {
    /// Resolve `singleMonth: auto` against the host's viewport width.
    pub fn from_config(config: &PickerConfig, viewport_width: Option<u32>) -> Self {
        Self {
            sticky: config.sticky_months,
            look_behind: config.look_behind,
            single_date: config.single_date,
            single_month: config.single_month.resolve(viewport_width),
            bounds: config.bounds(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    panes: PaneState,
    rules: NavRules,
}

impl Navigator {
    pub fn new(rules: NavRules, default_month: NaiveDate) -> Self {
        Self {
            panes: initial_panes(&rules, default_month),
            rules,
        }
    }

    pub fn panes(&self) -> PaneState {
        self.panes
    }

    pub fn rules(&self) -> &NavRules {
        &self.rules
    }

    fn out_of_bounds(&self, month: NaiveDate) -> bool {
        is_month_out_of_bounds(month, &self.rules.bounds)
    }

    fn show(&mut self, month1: NaiveDate, month2: NaiveDate) {
        let month2 = if self.rules.single_month {
            next_month(month1)
        } else {
            month2
        };
        self.panes = PaneState::new(month1, month2);
    }

    /// Advance `pane` (or both panes when sticky) by one month.
    ///
    /// Returns false when the move was refused.
    pub fn go_next(&mut self, pane: PaneId) -> bool {
        if self.rules.sticky {
            return self.sticky_next();
        }
        let target = next_month(self.panes.get(pane));
        let crosses = !self.rules.single_month
            && !self.rules.single_date
            && pane == PaneId::First
            && compare_month_date(target, self.panes.month2) != Ordering::Less;
        if crosses || self.out_of_bounds(target) {
            debug!(%pane, %target, crosses, "refused next month");
            return false;
        }
        self.move_pane(pane, target);
        true
    }

    /// Move `pane` (or both panes when sticky) back by one month.
    pub fn go_prev(&mut self, pane: PaneId) -> bool {
        if self.rules.sticky {
            return self.sticky_prev();
        }
        let target = prev_month(self.panes.get(pane));
        let crosses = pane == PaneId::Second
            && compare_month_date(target, self.panes.month1) != Ordering::Greater;
        if crosses || self.out_of_bounds(target) {
            debug!(%pane, %target, crosses, "refused previous month");
            return false;
        }
        self.move_pane(pane, target);
        true
    }

    fn move_pane(&mut self, pane: PaneId, target: NaiveDate) {
        self.panes.set(pane, target);
        if self.rules.single_month && pane == PaneId::First {
            self.panes.month2 = next_month(target);
        }
    }

    fn sticky_next(&mut self) -> bool {
        let next1 = next_month(self.panes.month1);
        let next2 = next_month(self.panes.month2);
        let collapsed =
            !self.rules.single_date && compare_month_date(next1, next2) != Ordering::Less;
        if self.out_of_bounds(next2) || collapsed {
            debug!(month2 = %next2, "refused sticky next month");
            return false;
        }
        self.show(next1, next2);
        true
    }

    fn sticky_prev(&mut self) -> bool {
        let prev1 = prev_month(self.panes.month1);
        let prev2 = prev_month(self.panes.month2);
        let collapsed =
            !self.rules.single_date && compare_month_date(prev2, prev1) != Ordering::Greater;
        if self.out_of_bounds(prev1) || collapsed {
            debug!(month1 = %prev1, "refused sticky previous month");
            return false;
        }
        self.show(prev1, prev2);
        true
    }

    /// Show `month` in `pane`, as from the month or year selector.
    ///
    /// Sticky panes shift together by the same number of months. Refused
    /// under the same rules as single steps.
    pub fn jump_to(&mut self, pane: PaneId, month: NaiveDate) -> bool {
        if self.out_of_bounds(month) {
            debug!(%pane, %month, "refused jump out of bounds");
            return false;
        }
        if self.rules.sticky {
            let (month1, month2) = match pane {
                PaneId::First => (month, next_month(month)),
                PaneId::Second => (prev_month(month), month),
            };
            // As with single sticky steps, the pane leading the move is the one checked.
            let leading = if compare_month_date(month1, self.panes.month1) == Ordering::Greater {
                month2
            } else {
                month1
            };
            if self.out_of_bounds(leading) {
                debug!(%pane, %month, %leading, "refused sticky jump");
                return false;
            }
            self.show(month1, month2);
            return true;
        }
        let crosses = match pane {
            PaneId::First => {
                !self.rules.single_month
                    && !self.rules.single_date
                    && compare_month_date(month, self.panes.month2) != Ordering::Less
            }
            PaneId::Second => {
                compare_month_date(month, self.panes.month1) != Ordering::Greater
            }
        };
        if crosses {
            debug!(%pane, %month, "refused jump across the other pane");
            return false;
        }
        self.move_pane(pane, month);
        true
    }

    /// Bring a selected range into view.
    ///
    /// Returns false when the range lies outside the bounds and the panes
    /// fell back to the bounds' first month instead.
    pub fn place_range(&mut self, d1: NaiveDate, d2: NaiveDate) -> bool {
        let (d1, d2) = if d1 > d2 { (d2, d1) } else { (d1, d2) };
        if !self.rules.bounds.contains(d1) || !self.rules.bounds.contains(d2) {
            self.show_fallback(d1);
            return false;
        }
        let (month1, month2) = if self.rules.single_month {
            let shown = if self.rules.look_behind { d2 } else { d1 };
            (shown, next_month(shown))
        } else if self.rules.sticky {
            let (mut month1, mut month2) = if self.rules.look_behind {
                (prev_month(d2), d2)
            } else {
                (d1, next_month(d1))
            };
            if let Some(end) = self.rules.bounds.max_date
                && compare_month_date(month2, end) == Ordering::Greater
            {
                month1 = prev_month(month1);
                month2 = prev_month(month2);
            }
            (month1, month2)
        } else if compare_month_date(d1, d2) == Ordering::Equal {
            if self.rules.look_behind {
                (prev_month(d2), d2)
            } else {
                (d1, next_month(d1))
            }
        } else {
            (d1, d2)
        };
        self.show(month1, month2);
        debug!(month1 = %self.panes.month1, month2 = %self.panes.month2, "panes placed on range");
        true
    }

    /// Bring a single date into view.
    pub fn place_single(&mut self, date: NaiveDate) -> bool {
        if !self.rules.bounds.contains(date) {
            self.show_fallback(date);
            return false;
        }
        self.show(date, next_month(date));
        true
    }

    fn show_fallback(&mut self, requested: NaiveDate) {
        let fallback = self
            .rules
            .bounds
            .min_date
            .or(self.rules.bounds.max_date)
            .unwrap_or(requested);
        debug!(%requested, %fallback, "requested dates out of bounds");
        self.show(fallback, next_month(fallback));
    }

    /// Whether the "months skipped" marker between panes is shown.
    pub fn gap_visible(&self) -> bool {
        if self.rules.single_month {
            return false;
        }
        let distance = month_distance(self.panes.month1, self.panes.month2);
        distance > 1 && distance != YEAR_WRAP_DISTANCE
    }
}

/// Opening months: around `default_month`, clamped so the shown months
/// overlap the bounds.
pub fn initial_panes(rules: &NavRules, default_month: NaiveDate) -> PaneState {
    let bounds = &rules.bounds;
    let before_start = |month: NaiveDate| {
        bounds
            .min_date
            .is_some_and(|start| compare_month_date(month, start) == Ordering::Less)
    };
    let after_end = |month: NaiveDate| {
        bounds
            .max_date
            .is_some_and(|end| compare_month_date(month, end) == Ordering::Greater)
    };

    let mut default = default_month;
    if rules.single_date || rules.single_month {
        if let Some(start) = bounds.min_date
            && default < start
        {
            default = start;
        }
        if let Some(end) = bounds.max_date
            && default > end
        {
            default = end;
        }
        return PaneState::new(default, next_month(default));
    }
    if rules.look_behind {
        if before_start(default)
            && let Some(start) = bounds.min_date
        {
            default = next_month(start);
        }
        if after_end(default)
            && let Some(end) = bounds.max_date
        {
            default = end;
        }
        return PaneState::new(prev_month(default), default);
    }
    if before_start(default)
        && let Some(start) = bounds.min_date
    {
        default = start;
    }
    if after_end(next_month(default))
        && let Some(end) = bounds.max_date
    {
        default = prev_month(end);
    }
    PaneState::new(default, next_month(default))
}
