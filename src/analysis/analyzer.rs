//! Orchestration of a full attendance analysis run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use super::diff::diff_intervals;
use super::extractor::worked_periods;
use super::filters;
use super::leaves::collect_leave_intervals;
use super::schedule::expand_workdays;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnalyzedInterval, AttendanceReport, AttendanceTotals, Employee, IntervalState, LeaveInterval,
    LeaveTypeFilter, TimeInterval,
};
use crate::store::{AttendanceStore, LeaveStore, PublicHolidayStore, ScheduleProvider};

/// Parses a `YYYY-MM-DD` date argument.
fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|parse_error| EngineError::InvalidDate {
        value: value.to_string(),
        message: parse_error.to_string(),
    })
}

/// Runs attendance discrepancy analysis against pluggable data stores.
///
/// The analyzer walks every scheduled workday in a date range. For each day
/// it gathers the scheduled intervals, the periods actually worked and any
/// leave, then feeds all three into the interval diff. Work pulls data one
/// day at a time, so a month's analysis issues one attendance query and one
/// leave query per scheduled day.
///
/// All date arguments are `YYYY-MM-DD` strings; anything else fails with
/// [`EngineError::InvalidDate`].
pub struct AttendanceAnalyzer<'a> {
    attendance: &'a dyn AttendanceStore,
    schedules: &'a dyn ScheduleProvider,
    leaves: &'a dyn LeaveStore,
    holidays: &'a dyn PublicHolidayStore,
}

impl<'a> AttendanceAnalyzer<'a> {
    /// Creates an analyzer over the given data stores.
    pub fn new(
        attendance: &'a dyn AttendanceStore,
        schedules: &'a dyn ScheduleProvider,
        leaves: &'a dyn LeaveStore,
        holidays: &'a dyn PublicHolidayStore,
    ) -> Self {
        Self {
            attendance,
            schedules,
            leaves,
            holidays,
        }
    }

    /// Classifies every discrepancy between actual and scheduled attendance
    /// over the closed date range, in chronological order.
    ///
    /// The leave-type filter restricts which leaves can excuse a gap; gaps
    /// excused by a filtered-out leave come back as plain missing work.
    pub fn analyze_attendance(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<Vec<AnalyzedInterval>> {
        let date_from = parse_date(date_from)?;
        let date_to = parse_date(date_to)?;
        self.analyze_range(employee, schedule_id, date_from, date_to, filter)
    }

    /// Returns the scheduled workdays with no attendance record at all.
    pub fn absent_workdays(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
    ) -> EngineResult<Vec<NaiveDate>> {
        let date_from = parse_date(date_from)?;
        let date_to = parse_date(date_to)?;
        self.absent_range(employee, schedule_id, date_from, date_to)
    }

    /// Returns the missing intervals that no leave of any type excuses.
    ///
    /// Leave-type filters deliberately play no part here: a gap only counts
    /// as uncovered when nothing at all accounts for it.
    pub fn filter_uncovered_missing_intervals(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
    ) -> EngineResult<Vec<AnalyzedInterval>> {
        let analyzed = self.analyze_attendance(
            employee,
            schedule_id,
            date_from,
            date_to,
            &LeaveTypeFilter::all(),
        )?;
        Ok(filters::uncovered_missing(&analyzed))
    }

    /// Returns the missing intervals excused by a leave passing the filter.
    pub fn filter_covered_missing_intervals(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<Vec<AnalyzedInterval>> {
        let analyzed =
            self.analyze_attendance(employee, schedule_id, date_from, date_to, filter)?;
        Ok(filters::covered_missing(&analyzed))
    }

    /// Computes the headline figure: hours of unexcused missing work on days
    /// the employee actually attended.
    ///
    /// Wholly absent days are excluded because they are a different problem
    /// from leaving early or arriving late on a day that was worked.
    pub fn count_uncovered_missing_attendance_hours(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
    ) -> EngineResult<Decimal> {
        let from = parse_date(date_from)?;
        let to = parse_date(date_to)?;

        let absent = self.absent_range(employee, schedule_id, from, to)?;
        let analyzed =
            self.analyze_range(employee, schedule_id, from, to, &LeaveTypeFilter::all())?;
        let uncovered = filters::uncovered_missing(&analyzed);
        let uncovered_absent = filters::uncovered_absent_workdays(&uncovered, &absent);
        let attended_missing =
            filters::uncovered_missing_of_attended_workday(&uncovered, &uncovered_absent);

        let hours = filters::total_hours(&attended_missing);
        debug!(
            employee_id = %employee.id,
            absent_workdays = absent.len(),
            uncovered_intervals = uncovered.len(),
            %hours,
            "Counted uncovered missing attendance hours"
        );
        Ok(hours)
    }

    /// Runs a full analysis and wraps it in a report envelope with per-class
    /// hour totals.
    pub fn report(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: &str,
        date_to: &str,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<AttendanceReport> {
        let from = parse_date(date_from)?;
        let to = parse_date(date_to)?;

        let intervals = self.analyze_range(employee, schedule_id, from, to, filter)?;
        let absent_workdays = self.absent_range(employee, schedule_id, from, to)?;

        let extra: Vec<AnalyzedInterval> = intervals
            .iter()
            .filter(|found| matches!(found.state, IntervalState::Extra))
            .cloned()
            .collect();
        let missing = filters::uncovered_missing(&intervals);
        let covered = filters::covered_missing(&intervals);
        let uncovered_absent = filters::uncovered_absent_workdays(&missing, &absent_workdays);
        let attended_missing =
            filters::uncovered_missing_of_attended_workday(&missing, &uncovered_absent);

        let totals = AttendanceTotals {
            extra_hours: filters::total_hours(&extra),
            missing_hours: filters::total_hours(&missing),
            leave_covered_hours: filters::total_hours(&covered),
            uncovered_missing_attended_hours: filters::total_hours(&attended_missing),
        };

        let analysis_id = Uuid::new_v4();
        info!(
            analysis_id = %analysis_id,
            employee_id = %employee.id,
            intervals = intervals.len(),
            absent_workdays = absent_workdays.len(),
            "Attendance analysis complete"
        );

        Ok(AttendanceReport {
            analysis_id,
            timestamp: chrono::Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: employee.id.clone(),
            date_from: from,
            date_to: to,
            intervals,
            absent_workdays,
            totals,
        })
    }

    fn analyze_range(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
        filter: &LeaveTypeFilter,
    ) -> EngineResult<Vec<AnalyzedInterval>> {
        let weekdays = self.schedules.active_weekdays(schedule_id)?;
        let workdays = expand_workdays(schedule_id, &weekdays, date_from, date_to)?;
        debug!(
            schedule_id,
            employee_id = %employee.id,
            workdays = workdays.len(),
            "Expanded scheduled workdays"
        );

        let mut analyzed = Vec::new();
        for day in workdays {
            let scheduled = self.schedules.day_intervals(schedule_id, day)?;
            let records = self.attendance.query(&employee.id, day, day)?;
            let actual: Vec<TimeInterval> = worked_periods(&records)?
                .into_iter()
                .map(|period| period.interval)
                .collect();
            let leaves: Vec<LeaveInterval> = collect_leave_intervals(
                self.leaves,
                self.holidays,
                &employee.resource_id,
                day,
                day,
                filter,
            )?;

            debug!(
                day = %day,
                scheduled = scheduled.len(),
                actual = actual.len(),
                leaves = leaves.len(),
                "Analyzing scheduled workday"
            );
            analyzed.extend(diff_intervals(&actual, &scheduled, &leaves));
        }

        debug!(
            employee_id = %employee.id,
            intervals = analyzed.len(),
            "Classified discrepancies over range"
        );
        Ok(analyzed)
    }

    fn absent_range(
        &self,
        employee: &Employee,
        schedule_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<NaiveDate>> {
        let weekdays = self.schedules.active_weekdays(schedule_id)?;
        let workdays = expand_workdays(schedule_id, &weekdays, date_from, date_to)?;

        let mut absent = Vec::new();
        for day in workdays {
            let records = self.attendance.query(&employee.id, day, day)?;
            if records.is_empty() {
                absent.push(day);
            }
        }

        debug!(
            employee_id = %employee.id,
            absent_workdays = absent.len(),
            "Collected absent workdays"
        );
        Ok(absent)
    }
}
