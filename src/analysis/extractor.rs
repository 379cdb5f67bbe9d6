//! Turns raw check-in/check-out records into per-day worked periods.

use chrono::Duration;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, TimeInterval, WorkedPeriod};

/// Extracts the periods actually worked from a batch of attendance records.
///
/// Records without a check-out are skipped; they carry no usable duration.
/// A record that straddles midnight is split into exactly two periods, one
/// ending at 23:59:59 on the check-in day and one starting at 00:00:00 on
/// the check-out day, so every period belongs to a single calendar day.
///
/// Extraction is fail-fast: a check-out before its check-in or a record
/// spanning 24 hours or more aborts the whole batch, because such records
/// mean punches are missing or corrupted and any derived figures would be
/// wrong.
pub fn worked_periods(records: &[AttendanceRecord]) -> EngineResult<Vec<WorkedPeriod>> {
    let mut periods = Vec::new();

    for record in records {
        let Some(check_out) = record.check_out else {
            continue;
        };

        if check_out < record.check_in {
            return Err(EngineError::OutOfOrderCheck {
                check_in: record.check_in,
                check_out,
            });
        }
        if check_out - record.check_in >= Duration::hours(24) {
            return Err(EngineError::OverlongShift {
                check_in: record.check_in,
                check_out,
            });
        }

        if record.check_in.date() == check_out.date() {
            let interval = TimeInterval::new(record.check_in, check_out)?;
            periods.push(WorkedPeriod {
                date: record.check_in.date(),
                hours: interval.duration_hours(),
                interval,
            });
        } else {
            // Split at midnight: clip the first day at 23:59:59 and start
            // the second at 00:00:00.
            let end_of_day = record
                .check_in
                .date()
                .and_hms_opt(23, 59, 59)
                .expect("valid end-of-day time");
            let start_of_day = check_out
                .date()
                .and_hms_opt(0, 0, 0)
                .expect("valid start-of-day time");

            let first = TimeInterval::new(record.check_in, end_of_day)?;
            let second = TimeInterval::new(start_of_day, check_out)?;
            periods.push(WorkedPeriod {
                date: record.check_in.date(),
                hours: first.duration_hours(),
                interval: first,
            });
            periods.push(WorkedPeriod {
                date: check_out.date(),
                hours: second.duration_hours(),
                interval: second,
            });
        }
    }

    Ok(periods)
}
