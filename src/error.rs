//! Error types for the Attendance Discrepancy Analysis Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance analysis.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the Attendance Discrepancy Analysis Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An interval's end boundary preceded its start boundary.
    #[error("Invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        /// The start boundary of the rejected interval.
        start: NaiveDateTime,
        /// The end boundary of the rejected interval.
        end: NaiveDateTime,
    },

    /// An attendance record's check-out preceded its check-in.
    #[error("Check-out {check_out} precedes check-in {check_in}")]
    OutOfOrderCheck {
        /// The check-in timestamp of the rejected record.
        check_in: NaiveDateTime,
        /// The check-out timestamp of the rejected record.
        check_out: NaiveDateTime,
    },

    /// An attendance record spanned a full day or more, which means at
    /// least one intermediate check-in/out pair was never recorded.
    #[error(
        "Attendance from {check_in} to {check_out} spans 24 hours or more; \
         an intermediate check-in/out record is missing"
    )]
    OverlongShift {
        /// The check-in timestamp of the rejected record.
        check_in: NaiveDateTime,
        /// The check-out timestamp of the rejected record.
        check_out: NaiveDateTime,
    },

    /// A work schedule had no active weekdays to expand over a date range.
    #[error("No active weekdays configured for work schedule '{schedule_id}'")]
    NoSchedule {
        /// The identifier of the empty work schedule.
        schedule_id: String,
    },

    /// The requested work schedule does not exist.
    #[error("Work schedule not found: {schedule_id}")]
    ScheduleNotFound {
        /// The identifier that was requested.
        schedule_id: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
