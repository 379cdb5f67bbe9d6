//! Hash-map backed stores for tests and embedded use.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::{AttendanceStore, LeaveStore, PublicHolidayStore, ScheduleProvider};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, LeaveInterval, LeaveTypeFilter, PublicHoliday, TimeInterval};

/// Attendance records grouped per employee.
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: HashMap<String, Vec<AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record for an employee.
    pub fn insert(&mut self, employee_id: &str, record: AttendanceRecord) {
        self.records
            .entry(employee_id.to_string())
            .or_default()
            .push(record);
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn query(
        &self,
        employee_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut matches: Vec<AttendanceRecord> = self
            .records
            .get(employee_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| {
                        let day = record.check_in.date();
                        day >= date_from && day <= date_to
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        matches.sort_by_key(|record| record.check_in);
        Ok(matches)
    }
}

/// A weekly recurring work pattern: active weekdays plus the work intervals
/// applied to each active day.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    /// Weekdays on which work is expected.
    pub weekdays: HashSet<Weekday>,
    /// Start/end times of each work interval within an active day.
    pub day_intervals: Vec<(NaiveTime, NaiveTime)>,
}

/// Work schedules keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryScheduleProvider {
    schedules: HashMap<String, WeeklySchedule>,
}

impl InMemoryScheduleProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schedule under an identifier.
    pub fn insert(&mut self, schedule_id: &str, schedule: WeeklySchedule) {
        self.schedules.insert(schedule_id.to_string(), schedule);
    }

    fn get(&self, schedule_id: &str) -> EngineResult<&WeeklySchedule> {
        self.schedules
            .get(schedule_id)
            .ok_or_else(|| EngineError::ScheduleNotFound {
                schedule_id: schedule_id.to_string(),
            })
    }
}

impl ScheduleProvider for InMemoryScheduleProvider {
    fn active_weekdays(&self, schedule_id: &str) -> EngineResult<HashSet<Weekday>> {
        Ok(self.get(schedule_id)?.weekdays.clone())
    }

    fn day_intervals(&self, schedule_id: &str, date: NaiveDate) -> EngineResult<Vec<TimeInterval>> {
        let schedule = self.get(schedule_id)?;
        Ok(schedule
            .day_intervals
            .iter()
            .map(|(start, end)| TimeInterval {
                start: NaiveDateTime::new(date, *start),
                end: NaiveDateTime::new(date, *end),
            })
            .collect())
    }
}

/// Leave spans grouped per resource.
#[derive(Debug, Default)]
pub struct InMemoryLeaveStore {
    leaves: HashMap<String, Vec<LeaveInterval>>,
}

impl InMemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leave span for a resource.
    pub fn insert(&mut self, resource_id: &str, leave: LeaveInterval) {
        self.leaves
            .entry(resource_id.to_string())
            .or_default()
            .push(leave);
    }
}

impl LeaveStore for InMemoryLeaveStore {
    fn query(
        &self,
        resource_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<Vec<LeaveInterval>> {
        let range_start = date_from.and_hms_opt(0, 0, 0).expect("valid start-of-day time");
        let range_end = date_to.and_hms_opt(23, 59, 59).expect("valid end-of-day time");

        Ok(self
            .leaves
            .get(resource_id)
            .map(|leaves| {
                leaves
                    .iter()
                    .filter(|leave| filter.matches(leave.leave_type.as_deref()))
                    .filter(|leave| {
                        let covers_range =
                            leave.interval.start < range_start && leave.interval.end > range_end;
                        let starts_within = leave.interval.start >= range_start
                            && leave.interval.start <= range_end;
                        let ends_within =
                            leave.interval.end >= range_start && leave.interval.end <= range_end;
                        covers_range || starts_within || ends_within
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// A flat list of public holidays across all years.
#[derive(Debug, Default)]
pub struct InMemoryPublicHolidayStore {
    holidays: Vec<PublicHoliday>,
}

impl InMemoryPublicHolidayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday.
    pub fn insert(&mut self, holiday: PublicHoliday) {
        self.holidays.push(holiday);
    }
}

impl PublicHolidayStore for InMemoryPublicHolidayStore {
    fn holidays_in_year(&self, year: i32) -> Vec<PublicHoliday> {
        self.holidays
            .iter()
            .filter(|holiday| holiday.date.year() == year)
            .cloned()
            .collect()
    }
}
