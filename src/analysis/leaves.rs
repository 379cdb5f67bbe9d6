//! Gathering of leave spans and public holidays for an analysis range.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::{LeaveInterval, LeaveTypeFilter, TimeInterval};
use crate::store::{LeaveStore, PublicHolidayStore};

/// Returns the public holidays within the closed date range as full-day
/// leave spans.
///
/// The store is asked once per calendar year touched by the range. Each
/// matching holiday becomes an untyped leave over `[00:00:00, 23:59:59]`
/// of its own date.
pub fn public_holiday_intervals(
    holiday_store: &dyn PublicHolidayStore,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Vec<LeaveInterval> {
    let mut intervals = Vec::new();

    for year in date_from.year()..=date_to.year() {
        for holiday in holiday_store.holidays_in_year(year) {
            if holiday.date >= date_from && holiday.date <= date_to {
                let start = holiday
                    .date
                    .and_hms_opt(0, 0, 0)
                    .expect("valid start-of-day time");
                let end = holiday
                    .date
                    .and_hms_opt(23, 59, 59)
                    .expect("valid end-of-day time");
                intervals.push(LeaveInterval {
                    interval: TimeInterval { start, end },
                    leave_type: None,
                });
            }
        }
    }

    intervals
}

/// Collects every leave span relevant to a resource over a date range.
///
/// Ordinary leaves come first, restricted by the leave-type filter, followed
/// by public holidays. The order matters downstream: when several leaves
/// cover the same gap, the first collected one is attached to it.
pub fn collect_leave_intervals(
    leave_store: &dyn LeaveStore,
    holiday_store: &dyn PublicHolidayStore,
    resource_id: &str,
    date_from: NaiveDate,
    date_to: NaiveDate,
    filter: &LeaveTypeFilter,
) -> EngineResult<Vec<LeaveInterval>> {
    let mut leaves = leave_store.query(resource_id, date_from, date_to, filter)?;
    leaves.extend(public_holiday_intervals(holiday_store, date_from, date_to));
    Ok(leaves)
}
