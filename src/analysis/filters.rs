//! Projections over classified intervals: absence filters and hour totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AnalyzedInterval, IntervalState, LeaveInterval};

/// Keeps the missing intervals no leave accounts for.
pub fn uncovered_missing(analyzed: &[AnalyzedInterval]) -> Vec<AnalyzedInterval> {
    analyzed
        .iter()
        .filter(|found| matches!(found.state, IntervalState::Missing))
        .cloned()
        .collect()
}

/// Keeps the missing intervals excused by leave.
pub fn covered_missing(analyzed: &[AnalyzedInterval]) -> Vec<AnalyzedInterval> {
    analyzed
        .iter()
        .filter(|found| matches!(found.state, IntervalState::LeaveCovered { .. }))
        .cloned()
        .collect()
}

/// Keeps the absent workdays on which some uncovered missing interval falls.
pub fn uncovered_absent_workdays(
    uncovered: &[AnalyzedInterval],
    absent_workdays: &[NaiveDate],
) -> Vec<NaiveDate> {
    absent_workdays
        .iter()
        .copied()
        .filter(|day| uncovered.iter().any(|found| found.day == *day))
        .collect()
}

/// Keeps the uncovered missing intervals of days the employee attended,
/// dropping those that fall on wholly absent days.
pub fn uncovered_missing_of_attended_workday(
    uncovered: &[AnalyzedInterval],
    uncovered_absent_workdays: &[NaiveDate],
) -> Vec<AnalyzedInterval> {
    uncovered
        .iter()
        .filter(|found| !uncovered_absent_workdays.contains(&found.day))
        .cloned()
        .collect()
}

/// Splits absent workdays that leave accounts for into two parallel lists:
/// the days themselves and, per day, the covering leave of the first
/// matching interval.
pub fn covered_absent_workdays(
    covered: &[AnalyzedInterval],
    absent_workdays: &[NaiveDate],
) -> (Vec<NaiveDate>, Vec<LeaveInterval>) {
    let mut days = Vec::new();
    let mut covering_leaves = Vec::new();

    for day in absent_workdays {
        let covering = covered
            .iter()
            .find(|found| found.day == *day)
            .and_then(|found| found.covering_leave());
        if let Some(leave) = covering {
            days.push(*day);
            covering_leaves.push(leave.clone());
        }
    }

    (days, covering_leaves)
}

/// Keeps the covered missing intervals of days the employee attended.
pub fn covered_missing_of_attended_workday(
    covered: &[AnalyzedInterval],
    covered_absent_workdays: &[NaiveDate],
) -> Vec<AnalyzedInterval> {
    covered
        .iter()
        .filter(|found| !covered_absent_workdays.contains(&found.day))
        .cloned()
        .collect()
}

/// Sums interval durations into hours, rounded to two decimal places.
///
/// Seconds are accumulated first and divided once, so rounding happens a
/// single time at the end.
pub fn total_hours(intervals: &[AnalyzedInterval]) -> Decimal {
    let total_seconds: i64 = intervals
        .iter()
        .map(|found| found.interval.duration_seconds())
        .sum();
    (Decimal::from(total_seconds) / Decimal::from(3600)).round_dp(2)
}
