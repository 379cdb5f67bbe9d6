//! Attendance Discrepancy Analysis Engine
//!
//! This crate compares the time an employee actually attended against the time
//! their work schedule expected, classifies every difference as extra work,
//! missing work or a gap covered by leave, and aggregates the results into
//! headline figures such as uncovered missing attendance hours.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
