//! Attendance analysis pipeline.
//!
//! This module implements discrepancy analysis end to end: extracting worked
//! periods from raw check-in/check-out records, expanding weekly schedules
//! into concrete workdays, gathering leave spans and public holidays,
//! classifying every difference between actual and scheduled time, and
//! projecting the classified intervals into absence views and hour totals.

mod analyzer;
mod diff;
mod extractor;
mod filters;
mod leaves;
mod schedule;

pub use analyzer::AttendanceAnalyzer;
pub use diff::diff_intervals;
pub use extractor::worked_periods;
pub use filters::{
    covered_absent_workdays, covered_missing, covered_missing_of_attended_workday, total_hours,
    uncovered_absent_workdays, uncovered_missing, uncovered_missing_of_attended_workday,
};
pub use leaves::{collect_leave_intervals, public_holiday_intervals};
pub use schedule::expand_workdays;
