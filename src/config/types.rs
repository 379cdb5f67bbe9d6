//! Configuration types for work calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::PublicHoliday;

/// A weekday as written in schedule configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl ScheduleDay {
    /// Converts to the chrono weekday used throughout the engine.
    pub fn weekday(self) -> Weekday {
        match self {
            ScheduleDay::Monday => Weekday::Mon,
            ScheduleDay::Tuesday => Weekday::Tue,
            ScheduleDay::Wednesday => Weekday::Wed,
            ScheduleDay::Thursday => Weekday::Thu,
            ScheduleDay::Friday => Weekday::Fri,
            ScheduleDay::Saturday => Weekday::Sat,
            ScheduleDay::Sunday => Weekday::Sun,
        }
    }
}

/// One work interval within an active day.
#[derive(Debug, Clone, Deserialize)]
pub struct DayInterval {
    /// When the interval starts, e.g. `09:00:00`.
    pub start: NaiveTime,
    /// When the interval ends, e.g. `17:00:00`.
    pub end: NaiveTime,
}

/// Work schedule configuration from schedule.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Identifier the schedule is requested by.
    pub id: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// Weekdays on which work is expected.
    pub workdays: Vec<ScheduleDay>,
    /// Work intervals applied to every active day.
    pub day_intervals: Vec<DayInterval>,
}

/// Public holiday calendar for one year, from holidays/&lt;year&gt;.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The calendar year the holidays belong to.
    pub year: i32,
    /// The holidays of that year.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete work calendar loaded from YAML files.
///
/// This struct aggregates the schedule and the public holiday calendars
/// found in a calendar configuration directory.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// The work schedule.
    schedule: ScheduleConfig,
    /// Public holidays by year (each year sorted by date).
    holidays: HashMap<i32, Vec<PublicHoliday>>,
}

impl CalendarConfig {
    /// Creates a new CalendarConfig from its component parts.
    pub fn new(schedule: ScheduleConfig, holidays: HashMap<i32, Vec<PublicHoliday>>) -> Self {
        let mut sorted_holidays = holidays;
        for year in sorted_holidays.values_mut() {
            year.sort_by(|a, b| a.date.cmp(&b.date));
        }
        Self {
            schedule,
            holidays: sorted_holidays,
        }
    }

    /// Returns the work schedule.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the public holidays of one year, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> &[PublicHoliday] {
        self.holidays
            .get(&year)
            .map(|holidays| holidays.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the years for which holiday calendars are loaded.
    pub fn holiday_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.holidays.keys().copied().collect();
        years.sort_unstable();
        years
    }
}
