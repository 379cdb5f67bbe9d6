//! Interval differencing between actual, scheduled and leave time.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{
    AnalyzedInterval, IntervalState, LeaveInterval, TimeInterval, nesting_intervals,
};

/// Compares actual attendance against the schedule and classifies every
/// difference.
///
/// All interval boundaries are pooled into one multiset and sorted,
/// duplicates included. Each pair of consecutive boundaries forms an atomic
/// sub-interval that lies entirely inside or outside any input interval, so
/// classification reduces to three containment tests:
///
/// * inside actual only: extra work,
/// * inside scheduled only: missing work,
/// * inside scheduled and a leave but not actual: missing work covered by
///   leave, attached to the first covering leave in supply order.
///
/// Every other combination is unremarkable and dropped. Because boundaries
/// are sorted, the result is chronological, and running the function on its
/// own equally-shaped output reproduces it.
pub fn diff_intervals(
    actual: &[TimeInterval],
    scheduled: &[TimeInterval],
    leaves: &[LeaveInterval],
) -> Vec<AnalyzedInterval> {
    let mut boundaries: Vec<NaiveDateTime> =
        Vec::with_capacity(2 * (actual.len() + scheduled.len() + leaves.len()));
    for interval in actual.iter().chain(scheduled.iter()) {
        boundaries.push(interval.start);
        boundaries.push(interval.end);
    }
    for leave in leaves {
        boundaries.push(leave.interval.start);
        boundaries.push(leave.interval.end);
    }
    boundaries.sort();

    let mut classified = Vec::new();
    for pair in boundaries.windows(2) {
        let sub = TimeInterval {
            start: pair[0],
            end: pair[1],
        };

        let worked = !nesting_intervals(&sub, actual).is_empty();
        let expected = !nesting_intervals(&sub, scheduled).is_empty();
        let covering = leaves.iter().find(|leave| leave.interval.contains(&sub));

        let state = if worked && !expected && covering.is_none() {
            Some(IntervalState::Extra)
        } else if !worked && expected {
            match covering {
                None => Some(IntervalState::Missing),
                Some(leave) => Some(IntervalState::LeaveCovered {
                    leave: leave.clone(),
                }),
            }
        } else {
            None
        };

        if let Some(state) = state {
            classified.push(AnalyzedInterval::new(state, sub));
        }
    }

    debug!(
        boundaries = boundaries.len(),
        classified = classified.len(),
        "Classified attendance sub-intervals"
    );
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn interval(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval {
            start: make_datetime(2015, 7, 16, start_h, start_m, 0),
            end: make_datetime(2015, 7, 16, end_h, end_m, 0),
        }
    }

    fn leave(span: TimeInterval, leave_type: Option<&str>) -> LeaveInterval {
        LeaveInterval {
            interval: span,
            leave_type: leave_type.map(|value| value.to_string()),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ========================================================================
    // DI-001: Attendance exactly matching the schedule
    // Expected: no discrepancies
    // ========================================================================
    #[test]
    fn test_exact_match_produces_nothing() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let actual = vec![interval(9, 0, 17, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert!(diff.is_empty());
    }

    // ========================================================================
    // DI-002: Worked 09:00-13:00 of a 09:00-17:00 schedule
    // Expected: missing 13:00-17:00, 240 minutes
    // ========================================================================
    #[test]
    fn test_missing_afternoon() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let actual = vec![interval(9, 0, 13, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].state, IntervalState::Missing);
        assert_eq!(diff[0].interval, interval(13, 0, 17, 0));
        assert_eq!(diff[0].day, NaiveDate::from_ymd_opt(2015, 7, 16).unwrap());
        assert_eq!(diff[0].duration_minutes, dec("240"));
    }

    // ========================================================================
    // DI-003: Worked 09:00-18:00 of a 09:00-17:00 schedule
    // Expected: extra 17:00-18:00
    // ========================================================================
    #[test]
    fn test_extra_evening() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let actual = vec![interval(9, 0, 18, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].state, IntervalState::Extra);
        assert_eq!(diff[0].interval, interval(17, 0, 18, 0));
    }

    // ========================================================================
    // DI-004: Full-day leave over an unworked scheduled day
    // Expected: leave-covered 09:00-17:00 carrying the leave
    // ========================================================================
    #[test]
    fn test_leave_covered_day() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let full_day = leave(
            TimeInterval {
                start: make_datetime(2015, 7, 16, 0, 0, 0),
                end: make_datetime(2015, 7, 16, 23, 59, 59),
            },
            Some("annual"),
        );

        let diff = diff_intervals(&[], &scheduled, &[full_day.clone()]);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].interval, interval(9, 0, 17, 0));
        assert_eq!(diff[0].covering_leave(), Some(&full_day));
    }

    // ========================================================================
    // DI-005: Two leaves cover the same gap
    // Expected: the first supplied leave is attached
    // ========================================================================
    #[test]
    fn test_first_covering_leave_wins() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let first = leave(
            TimeInterval {
                start: make_datetime(2015, 7, 16, 0, 0, 0),
                end: make_datetime(2015, 7, 16, 23, 59, 59),
            },
            Some("annual"),
        );
        let second = leave(
            TimeInterval {
                start: make_datetime(2015, 7, 16, 8, 0, 0),
                end: make_datetime(2015, 7, 16, 18, 0, 0),
            },
            Some("sick"),
        );

        let diff = diff_intervals(&[], &scheduled, &[first.clone(), second]);
        let covered: Vec<_> = diff
            .iter()
            .filter(|found| found.covering_leave().is_some())
            .collect();
        assert!(!covered.is_empty());
        for found in covered {
            assert_eq!(found.covering_leave(), Some(&first));
        }
    }

    // ========================================================================
    // DI-006: Work during leave outside the schedule is unremarkable
    // ========================================================================
    #[test]
    fn test_worked_leave_outside_schedule_dropped() {
        let full_day = leave(
            TimeInterval {
                start: make_datetime(2015, 7, 16, 0, 0, 0),
                end: make_datetime(2015, 7, 16, 23, 59, 59),
            },
            Some("annual"),
        );
        let actual = vec![interval(10, 0, 12, 0)];

        let diff = diff_intervals(&actual, &[], &[full_day]);
        assert!(diff.is_empty());
    }

    // ========================================================================
    // DI-007: Split schedule with a short afternoon
    // Scheduled 09:00-13:00 and 14:00-18:00, worked 09:00-13:00 and
    // 14:00-16:00
    // Expected: only missing 16:00-18:00; the lunch gap stays silent
    // ========================================================================
    #[test]
    fn test_split_schedule_day() {
        let scheduled = vec![interval(9, 0, 13, 0), interval(14, 0, 18, 0)];
        let actual = vec![interval(9, 0, 13, 0), interval(14, 0, 16, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].state, IntervalState::Missing);
        assert_eq!(diff[0].interval, interval(16, 0, 18, 0));
    }

    // ========================================================================
    // DI-008: Findings come out in chronological order
    // Worked 11:00-15:00 of a 09:00-17:00 schedule with extra work 18:00-19:00
    // Expected: missing 09:00-11:00, missing 15:00-17:00, extra 18:00-19:00
    // ========================================================================
    #[test]
    fn test_output_is_chronological() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let actual = vec![interval(11, 0, 15, 0), interval(18, 0, 19, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff[0].state, IntervalState::Missing);
        assert_eq!(diff[0].interval, interval(9, 0, 11, 0));
        assert_eq!(diff[1].state, IntervalState::Missing);
        assert_eq!(diff[1].interval, interval(15, 0, 17, 0));
        assert_eq!(diff[2].state, IntervalState::Extra);
        assert_eq!(diff[2].interval, interval(18, 0, 19, 0));
    }

    // ========================================================================
    // DI-009: Zero-length actual interval classifies with zero duration
    // ========================================================================
    #[test]
    fn test_zero_length_interval_is_harmless() {
        let scheduled = vec![interval(14, 0, 16, 0)];
        let actual = vec![interval(10, 0, 10, 0)];

        let diff = diff_intervals(&actual, &scheduled, &[]);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0].state, IntervalState::Extra);
        assert_eq!(diff[0].duration_minutes, Decimal::ZERO);
        assert_eq!(diff[1].state, IntervalState::Missing);
        assert_eq!(diff[1].duration_minutes, dec("120"));
    }

    // ========================================================================
    // DI-010: Running the diff twice with the same inputs is stable
    // ========================================================================
    #[test]
    fn test_diff_is_deterministic() {
        let scheduled = vec![interval(9, 0, 17, 0)];
        let actual = vec![interval(9, 0, 13, 0)];
        let full_day = leave(
            TimeInterval {
                start: make_datetime(2015, 7, 16, 0, 0, 0),
                end: make_datetime(2015, 7, 16, 23, 59, 59),
            },
            Some("annual"),
        );

        let first = diff_intervals(&actual, &scheduled, &[full_day.clone()]);
        let second = diff_intervals(&actual, &scheduled, &[full_day]);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
