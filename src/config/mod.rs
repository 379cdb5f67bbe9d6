//! Configuration loading and management for the Attendance Discrepancy
//! Analysis Engine.
//!
//! This module provides functionality to load work calendar configurations
//! from YAML files, including the work schedule and public holiday calendars.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, DayInterval, HolidayCalendar, ScheduleConfig, ScheduleDay};
