//! The analysis report envelope returned to callers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::analyzed::AnalyzedInterval;

/// Aggregated hours per discrepancy class, each rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Hours worked outside the schedule.
    pub extra_hours: Decimal,
    /// Scheduled hours not worked, whether or not leave covers them.
    pub missing_hours: Decimal,
    /// Scheduled hours not worked but excused by leave.
    pub leave_covered_hours: Decimal,
    /// Missing hours on days the employee attended, with absent days and
    /// leave-covered spans excluded. This is the headline figure.
    pub uncovered_missing_attended_hours: Decimal,
}

/// The complete result of one attendance analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Unique identifier for this analysis run.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The employee the report is about.
    pub employee_id: String,
    /// First day of the analyzed range.
    pub date_from: NaiveDate,
    /// Last day of the analyzed range.
    pub date_to: NaiveDate,
    /// Every classified discrepancy, in chronological order.
    pub intervals: Vec<AnalyzedInterval>,
    /// Scheduled days with no attendance record at all.
    pub absent_workdays: Vec<NaiveDate>,
    /// Hour totals per discrepancy class.
    pub totals: AttendanceTotals,
}
