//! Data-access traits the analyzer depends on, plus in-memory implementations.
//!
//! The engine never talks to a database directly. It reads attendance
//! records, work schedules, leave spans and public holidays through these
//! traits, so callers can back them with whatever storage they have. The
//! in-memory implementations serve tests and embedded use.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, LeaveInterval, LeaveTypeFilter, PublicHoliday, TimeInterval};

mod memory;

pub use memory::{
    InMemoryAttendanceStore, InMemoryLeaveStore, InMemoryPublicHolidayStore,
    InMemoryScheduleProvider, WeeklySchedule,
};

/// Source of raw check-in/check-out records.
pub trait AttendanceStore {
    /// Returns the records whose check-in falls on a date within the closed
    /// range, ordered by check-in ascending.
    fn query(
        &self,
        employee_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}

/// Source of work schedules.
pub trait ScheduleProvider {
    /// Returns the weekdays on which the schedule expects work.
    fn active_weekdays(&self, schedule_id: &str) -> EngineResult<HashSet<Weekday>>;

    /// Returns the scheduled work intervals for one calendar day.
    ///
    /// The result is empty when the schedule defines no work for that day.
    fn day_intervals(&self, schedule_id: &str, date: NaiveDate) -> EngineResult<Vec<TimeInterval>>;
}

/// Source of approved leave spans.
pub trait LeaveStore {
    /// Returns the leaves of a resource overlapping the closed date range,
    /// restricted by the leave-type filter.
    ///
    /// A leave overlaps the range when it fully contains it or when either
    /// of its endpoints falls inside it.
    fn query(
        &self,
        resource_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<Vec<LeaveInterval>>;
}

/// Source of public holidays.
pub trait PublicHolidayStore {
    /// Returns all holidays of one calendar year, in no particular order.
    fn holidays_in_year(&self, year: i32) -> Vec<PublicHoliday>;
}
