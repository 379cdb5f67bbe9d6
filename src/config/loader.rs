//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading work calendar
//! configurations from YAML files.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{PublicHoliday, TimeInterval};
use crate::store::{PublicHolidayStore, ScheduleProvider};

use super::types::{CalendarConfig, HolidayCalendar, ScheduleConfig};

/// Loads and provides access to a work calendar configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// serves both the work schedule and the public holidays found there. It
/// implements [`ScheduleProvider`] and [`PublicHolidayStore`], so a loaded
/// calendar plugs straight into the analyzer.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── schedule.yaml        # Work schedule definition
/// └── holidays/
///     ├── 2015.yaml        # Public holidays of 2015
///     └── 2026.yaml        # Public holidays of 2026
/// ```
///
/// The holidays directory is optional; a calendar without it simply has no
/// public holidays.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Loaded schedule: {}", loader.schedule().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The schedule file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load schedule.yaml
        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;

        // Load all holiday calendars from the holidays directory
        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        Ok(Self {
            config: CalendarConfig::new(schedule, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday calendars from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HashMap<i32, Vec<PublicHoliday>>> {
        let holidays_dir_str = holidays_dir.display().to_string();
        let mut holidays = HashMap::new();

        if !holidays_dir.exists() {
            return Ok(holidays);
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
                holidays.insert(calendar.year, calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the loaded work schedule.
    pub fn schedule(&self) -> &ScheduleConfig {
        self.config.schedule()
    }

    /// Returns the schedule when the identifier matches the loaded one.
    fn schedule_by_id(&self, schedule_id: &str) -> EngineResult<&ScheduleConfig> {
        let schedule = self.config.schedule();
        if schedule.id != schedule_id {
            return Err(EngineError::ScheduleNotFound {
                schedule_id: schedule_id.to_string(),
            });
        }
        Ok(schedule)
    }
}

impl ScheduleProvider for ConfigLoader {
    fn active_weekdays(&self, schedule_id: &str) -> EngineResult<HashSet<chrono::Weekday>> {
        let schedule = self.schedule_by_id(schedule_id)?;
        Ok(schedule.workdays.iter().map(|day| day.weekday()).collect())
    }

    fn day_intervals(&self, schedule_id: &str, date: NaiveDate) -> EngineResult<Vec<TimeInterval>> {
        let schedule = self.schedule_by_id(schedule_id)?;
        Ok(schedule
            .day_intervals
            .iter()
            .map(|interval| TimeInterval {
                start: NaiveDateTime::new(date, interval.start),
                end: NaiveDateTime::new(date, interval.end),
            })
            .collect())
    }
}

impl PublicHolidayStore for ConfigLoader {
    fn holidays_in_year(&self, year: i32) -> Vec<PublicHoliday> {
        self.config.holidays_in_year(year).to_vec()
    }
}
