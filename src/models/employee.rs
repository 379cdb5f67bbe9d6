//! Employee identity as seen by the analysis engine.

use serde::{Deserialize, Serialize};

/// An employee whose attendance is being analyzed.
///
/// The engine needs nothing beyond identity: `id` keys attendance records
/// while `resource_id` keys the leave calendar, mirroring systems that track
/// people and bookable resources separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Identifier of the employee's resource in the leave calendar.
    pub resource_id: String,
    /// Display name.
    pub name: String,
}
