//! Classified output of the interval differencing engine.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::interval::TimeInterval;
use super::leave::LeaveInterval;

/// How a sub-interval of a workday compares against the schedule.
///
/// A gap covered by leave carries the covering leave with it, so a
/// leave-covered interval can never exist without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalState {
    /// Worked but not scheduled and not on leave.
    Extra,
    /// Scheduled but not worked and not on leave.
    Missing,
    /// Scheduled, not worked, and excused by a leave span.
    LeaveCovered {
        /// The first supplied leave that fully contains the interval.
        leave: LeaveInterval,
    },
}

impl fmt::Display for IntervalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalState::Extra => write!(f, "extra"),
            IntervalState::Missing => write!(f, "missing"),
            IntervalState::LeaveCovered { .. } => write!(f, "leave_covered"),
        }
    }
}

/// One classified sub-interval of a workday.
///
/// Equality compares only the interval boundaries: two analyzed intervals
/// covering the same span are the same finding, whatever their state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedInterval {
    /// The span this finding covers.
    pub interval: TimeInterval,
    /// The calendar day of the finding, taken from the interval start.
    pub day: NaiveDate,
    /// Interval length in minutes, rounded to two decimal places.
    pub duration_minutes: Decimal,
    /// The classification of the span.
    pub state: IntervalState,
}

impl AnalyzedInterval {
    /// Classifies an interval, deriving its day and duration.
    pub fn new(state: IntervalState, interval: TimeInterval) -> Self {
        Self {
            interval,
            day: interval.start.date(),
            duration_minutes: interval.duration_minutes(),
            state,
        }
    }

    /// The leave excusing this interval, present only for leave-covered ones.
    pub fn covering_leave(&self) -> Option<&LeaveInterval> {
        match &self.state {
            IntervalState::LeaveCovered { leave } => Some(leave),
            _ => None,
        }
    }
}

impl PartialEq for AnalyzedInterval {
    fn eq(&self, other: &Self) -> bool {
        self.interval.start == other.interval.start && self.interval.end == other.interval.end
    }
}

impl Eq for AnalyzedInterval {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn make_datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn afternoon_gap() -> TimeInterval {
        TimeInterval {
            start: make_datetime(2015, 7, 16, 13, 0, 0),
            end: make_datetime(2015, 7, 16, 17, 0, 0),
        }
    }

    fn full_day_leave() -> LeaveInterval {
        LeaveInterval {
            interval: TimeInterval {
                start: make_datetime(2015, 7, 16, 0, 0, 0),
                end: make_datetime(2015, 7, 16, 23, 59, 59),
            },
            leave_type: Some("annual".to_string()),
        }
    }

    /// AI-001: Day and duration are derived from the interval boundaries.
    #[test]
    fn test_new_derives_day_and_duration() {
        let analyzed = AnalyzedInterval::new(IntervalState::Missing, afternoon_gap());
        assert_eq!(analyzed.day, NaiveDate::from_ymd_opt(2015, 7, 16).unwrap());
        assert_eq!(
            analyzed.duration_minutes,
            Decimal::from_str("240").unwrap()
        );
    }

    /// AI-002: Equality is decided by boundaries alone, ignoring the state.
    #[test]
    fn test_equality_ignores_state() {
        let missing = AnalyzedInterval::new(IntervalState::Missing, afternoon_gap());
        let extra = AnalyzedInterval::new(IntervalState::Extra, afternoon_gap());
        assert_eq!(missing, extra);

        let shifted = AnalyzedInterval::new(
            IntervalState::Missing,
            TimeInterval {
                start: make_datetime(2015, 7, 16, 13, 0, 0),
                end: make_datetime(2015, 7, 16, 18, 0, 0),
            },
        );
        assert_ne!(missing, shifted);
    }

    /// AI-003: A leave-covered interval always exposes its covering leave.
    #[test]
    fn test_covering_leave_accessor() {
        let leave = full_day_leave();
        let covered = AnalyzedInterval::new(
            IntervalState::LeaveCovered {
                leave: leave.clone(),
            },
            afternoon_gap(),
        );
        assert_eq!(covered.covering_leave(), Some(&leave));

        let missing = AnalyzedInterval::new(IntervalState::Missing, afternoon_gap());
        assert_eq!(missing.covering_leave(), None);
    }

    #[test]
    fn test_interval_state_display() {
        assert_eq!(IntervalState::Extra.to_string(), "extra");
        assert_eq!(IntervalState::Missing.to_string(), "missing");
        assert_eq!(
            IntervalState::LeaveCovered {
                leave: full_day_leave()
            }
            .to_string(),
            "leave_covered"
        );
    }

    #[test]
    fn test_state_serialization() {
        let missing = serde_json::to_string(&IntervalState::Missing).unwrap();
        assert_eq!(missing, "\"missing\"");

        let covered = serde_json::to_string(&IntervalState::LeaveCovered {
            leave: full_day_leave(),
        })
        .unwrap();
        assert!(covered.starts_with("{\"leave_covered\":"));
        assert!(covered.contains("\"leave_type\":\"annual\""));
    }

    #[test]
    fn test_analyzed_interval_serialization() {
        let analyzed = AnalyzedInterval::new(IntervalState::Missing, afternoon_gap());
        let json = serde_json::to_string(&analyzed).unwrap();
        assert!(json.contains("\"day\":\"2015-07-16\""));
        assert!(json.contains("\"duration_minutes\":\"240\""));
        assert!(json.contains("\"state\":\"missing\""));

        let back: AnalyzedInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analyzed);
    }
}
