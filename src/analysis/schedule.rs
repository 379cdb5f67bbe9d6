//! Expansion of weekly work schedules into concrete workdays.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Expands a weekly recurrence over a closed date range.
///
/// Returns every date in `[date_from, date_to]` whose weekday is active,
/// ascending. Both endpoints are candidates, so a one-day range can yield
/// one workday. A schedule with no active weekdays cannot be expanded and
/// fails with [`EngineError::NoSchedule`].
pub fn expand_workdays(
    schedule_id: &str,
    weekdays: &HashSet<Weekday>,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> EngineResult<Vec<NaiveDate>> {
    if weekdays.is_empty() {
        return Err(EngineError::NoSchedule {
            schedule_id: schedule_id.to_string(),
        });
    }

    Ok(date_from
        .iter_days()
        .take_while(|day| *day <= date_to)
        .filter(|day| weekdays.contains(&day.weekday()))
        .collect())
}
