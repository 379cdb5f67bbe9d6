//! Leave spans, public holidays and leave-type filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::interval::TimeInterval;

/// A span of approved leave for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The span the leave covers.
    pub interval: TimeInterval,
    /// The leave type code, e.g. `"annual"` or `"sick"`. Public holidays
    /// carry no type.
    pub leave_type: Option<String>,
}

/// A public holiday on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date the holiday falls on.
    pub date: NaiveDate,
    /// Human-readable holiday name.
    pub name: String,
}

/// Restricts which leave types a leave query returns.
///
/// When `include` is present it wins outright and `exclude` is ignored.
/// An untyped leave matches an exclude-only filter but never an include
/// filter, since it has no type to list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeFilter {
    /// Leave types to keep. When set, everything else is dropped.
    pub include: Option<Vec<String>>,
    /// Leave types to drop. Only consulted when `include` is unset.
    pub exclude: Option<Vec<String>>,
}

impl LeaveTypeFilter {
    /// A filter that matches every leave regardless of type.
    pub fn all() -> Self {
        Self::default()
    }

    /// Checks whether a leave with the given type passes this filter.
    pub fn matches(&self, leave_type: Option<&str>) -> bool {
        if let Some(include) = &self.include {
            return leave_type.is_some_and(|value| include.iter().any(|kept| kept == value));
        }
        if let Some(exclude) = &self.exclude {
            return !leave_type.is_some_and(|value| exclude.iter().any(|dropped| dropped == value));
        }
        true
    }
}
