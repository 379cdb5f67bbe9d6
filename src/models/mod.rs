//! Core data models for the Attendance Discrepancy Analysis Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analyzed;
mod attendance;
mod employee;
mod interval;
mod leave;
mod report;

pub use analyzed::{AnalyzedInterval, IntervalState};
pub use attendance::{AttendanceRecord, WorkedPeriod};
pub use employee::Employee;
pub use interval::{TimeInterval, nesting_intervals};
pub use leave::{LeaveInterval, LeaveTypeFilter, PublicHoliday};
pub use report::{AttendanceReport, AttendanceTotals};
