//! Raw attendance records and the worked periods extracted from them.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::interval::TimeInterval;

/// A single check-in/check-out pair as captured at the clock.
///
/// The check-out is optional because an employee may still be on site, or a
/// punch may simply be missing. Records without a check-out carry no usable
/// duration and are skipped during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// When the employee checked in.
    pub check_in: NaiveDateTime,
    /// When the employee checked out, if they have.
    pub check_out: Option<NaiveDateTime>,
}

/// A span of time actually worked on one calendar day.
///
/// Records that straddle midnight are split into one period per day, so a
/// period never crosses a date boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedPeriod {
    /// The calendar day the period belongs to.
    pub date: NaiveDate,
    /// Hours worked in this period, rounded to two decimal places.
    pub hours: Decimal,
    /// The exact span worked.
    pub interval: TimeInterval,
}
