//! Closed time intervals and containment tests.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A closed interval of wall-clock time.
///
/// Both boundaries are inclusive, so an interval that starts exactly where
/// another ends is considered contained at that shared boundary. Boundaries
/// carry no timezone; all analysis happens in the employee's local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Inclusive start of the interval.
    pub start: NaiveDateTime,
    /// Inclusive end of the interval.
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Creates an interval after checking that its boundaries are ordered.
    ///
    /// A zero-length interval (start equal to end) is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::TimeInterval;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2015, 7, 16).unwrap();
    /// let interval = TimeInterval::new(
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(17, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(interval.duration_seconds(), 8 * 3600);
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the interval length in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Returns the interval length in hours, rounded to two decimal places.
    pub fn duration_hours(&self) -> Decimal {
        (Decimal::from(self.duration_seconds()) / Decimal::from(3600)).round_dp(2)
    }

    /// Returns the interval length in minutes, rounded to two decimal places.
    pub fn duration_minutes(&self) -> Decimal {
        (Decimal::from(self.duration_seconds()) / Decimal::from(60)).round_dp(2)
    }

    /// Checks whether `inner` lies entirely within this interval.
    ///
    /// Containment is closed on both sides: an interval contains itself, and
    /// touching a boundary still counts as inside.
    pub fn contains(&self, inner: &TimeInterval) -> bool {
        inner.start >= self.start && inner.end <= self.end
    }
}

/// Returns every candidate interval that fully contains `inner`.
///
/// Candidate order is preserved and duplicates are kept, so the first element
/// of the result is the first supplied interval that covers `inner`.
pub fn nesting_intervals<'a>(
    inner: &TimeInterval,
    candidates: &'a [TimeInterval],
) -> Vec<&'a TimeInterval> {
    candidates
        .iter()
        .filter(|candidate| candidate.contains(inner))
        .collect()
}
