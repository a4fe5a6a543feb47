//! Attendance aggregation shared by the report screens.
//!
//! Records arrive already range-filtered from the database; everything here
//! is pure counting so it can be tested without a store.

use crate::db::attendance::{AttendanceRecord, AttendanceStatus};
use crate::db::employees::Employee;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        DateRange { start: date, end: date }
    }

    /// Number of calendar days, counting both endpoints.
    pub fn total_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }
}

/// Tally of status labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    /// Records with an unknown or empty status label.
    pub other: u32,
}

impl StatusCounts {
    pub fn add(&mut self, status: Option<&AttendanceStatus>) {
        match status {
            Some(AttendanceStatus::Present) => self.present += 1,
            Some(AttendanceStatus::Absent) => self.absent += 1,
            Some(AttendanceStatus::Late) => self.late += 1,
            Some(AttendanceStatus::Other(_)) | None => self.other += 1,
        }
    }

    pub fn from_records<'r, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'r AttendanceRecord>,
    {
        let mut counts = StatusCounts::default();
        for record in records {
            counts.add(record.status.as_ref());
        }
        counts
    }

    /// Records carrying one of the three known labels.
    pub fn known(&self) -> u32 {
        self.present + self.absent + self.late
    }

    /// `expected` minus the records with a known label.
    pub fn not_recorded(&self, expected: u32) -> u32 {
        expected.saturating_sub(self.known())
    }
}

/// One day's roster.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
    pub counts: StatusCounts,
    pub not_recorded: u32,
}

impl DailyReport {
    /// `expected` is the number of employees who could have a record that day.
    pub fn build(date: NaiveDate, records: Vec<AttendanceRecord>, expected: u32) -> Self {
        let counts = StatusCounts::from_records(&records);
        DailyReport {
            date,
            not_recorded: counts.not_recorded(expected),
            records,
            counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTally {
    pub employee_id: i64,
    pub employee_name: String,
    pub counts: StatusCounts,
}

/// Date-range roster grouped by employee.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub range: DateRange,
    pub tallies: Vec<EmployeeTally>,
}

impl RangeReport {
    pub fn build(range: DateRange, records: &[AttendanceRecord]) -> Self {
        let mut by_employee: BTreeMap<(String, i64), StatusCounts> = BTreeMap::new();
        for record in records {
            by_employee
                .entry((record.employee_name.clone(), record.employee_id))
                .or_default()
                .add(record.status.as_ref());
        }

        let tallies = by_employee
            .into_iter()
            .map(|((employee_name, employee_id), counts)| EmployeeTally {
                employee_id,
                employee_name,
                counts,
            })
            .collect();

        RangeReport { range, tallies }
    }
}

/// Single-employee summary over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSummary {
    pub employee: Employee,
    pub range: DateRange,
    pub records: Vec<AttendanceRecord>,
    pub counts: StatusCounts,
    pub total_days: u32,
    pub not_recorded: u32,
}

impl EmployeeSummary {
    pub fn build(employee: Employee, range: DateRange, records: Vec<AttendanceRecord>) -> Self {
        let counts = StatusCounts::from_records(&records);
        let total_days = range.total_days();
        EmployeeSummary {
            employee,
            range,
            records,
            counts,
            total_days,
            not_recorded: counts.not_recorded(total_days),
        }
    }

    /// Share of `total_days`, as a percentage.
    pub fn percent(&self, count: u32) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        count as f64 / self.total_days as f64 * 100.0
    }

    /// Days attended (present or late) as a percentage of the range.
    pub fn attendance_rate(&self) -> f64 {
        self.percent(self.counts.present + self.counts.late)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::employees::Employee;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn record(employee_id: i64, name: &str, day: u32, status: Option<AttendanceStatus>) -> AttendanceRecord {
        AttendanceRecord {
            id: day as i64 * 100 + employee_id,
            employee_id,
            employee_name: name.to_string(),
            date: date(day),
            time_in: None,
            time_out: None,
            status,
        }
    }

    #[test]
    fn range_rejects_inverted_dates() {
        assert!(DateRange::new(date(2), date(1)).is_err());
        assert_eq!(DateRange::new(date(1), date(1)).unwrap().total_days(), 1);
        assert_eq!(DateRange::new(date(1), date(31)).unwrap().total_days(), 31);
    }

    #[test]
    fn single_day_range() {
        let day = DateRange::single(date(7));
        assert_eq!(day, DateRange::new(date(7), date(7)).unwrap());
        assert_eq!(day.total_days(), 1);
    }

    #[test]
    fn total_days_crosses_month_and_leap_day() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        )
        .unwrap();
        assert_eq!(range.total_days(), 5);
    }

    #[test]
    fn daily_counts_and_residual() {
        let records = vec![
            record(1, "Ann", 1, Some(AttendanceStatus::Present)),
            record(2, "Bob", 1, Some(AttendanceStatus::Late)),
            record(3, "Cy", 1, Some(AttendanceStatus::Other("Sick".to_string()))),
        ];
        let report = DailyReport::build(date(1), records, 5);
        assert_eq!(report.counts.present, 1);
        assert_eq!(report.counts.late, 1);
        assert_eq!(report.counts.other, 1);
        assert_eq!(report.not_recorded, 3);
    }

    #[test]
    fn residual_never_underflows() {
        let records = vec![
            record(1, "Ann", 1, Some(AttendanceStatus::Present)),
            record(2, "Bob", 1, Some(AttendanceStatus::Present)),
        ];
        assert_eq!(DailyReport::build(date(1), records, 1).not_recorded, 0);
    }

    #[test]
    fn range_report_groups_by_employee_name() {
        let records = vec![
            record(2, "Bob", 1, Some(AttendanceStatus::Present)),
            record(1, "Ann", 1, Some(AttendanceStatus::Late)),
            record(2, "Bob", 2, Some(AttendanceStatus::Absent)),
            record(1, "Ann", 2, Some(AttendanceStatus::Present)),
            record(2, "Bob", 3, Some(AttendanceStatus::Present)),
        ];
        let report = RangeReport::build(DateRange::new(date(1), date(3)).unwrap(), &records);

        assert_eq!(report.tallies.len(), 2);
        assert_eq!(report.tallies[0].employee_name, "Ann");
        assert_eq!(report.tallies[0].counts, StatusCounts { present: 1, absent: 0, late: 1, other: 0 });
        assert_eq!(report.tallies[1].employee_name, "Bob");
        assert_eq!(report.tallies[1].counts, StatusCounts { present: 2, absent: 1, late: 0, other: 0 });
    }

    #[test]
    fn summary_counts_add_up_to_range_length() {
        let employee = Employee::new("Ann", "E100", "Ops", "Clerk", date(1));
        let records = vec![
            record(1, "Ann", 1, Some(AttendanceStatus::Present)),
            record(1, "Ann", 2, Some(AttendanceStatus::Late)),
            record(1, "Ann", 3, Some(AttendanceStatus::Absent)),
            record(1, "Ann", 6, None),
        ];
        let summary = EmployeeSummary::build(employee, DateRange::new(date(1), date(10)).unwrap(), records);

        assert_eq!(summary.total_days, 10);
        assert_eq!(
            summary.counts.present + summary.counts.absent + summary.counts.late + summary.not_recorded,
            summary.total_days
        );
        assert_eq!(summary.not_recorded, 7);
        assert!((summary.percent(summary.counts.present) - 10.0).abs() < f64::EPSILON);
        assert!((summary.attendance_rate() - 20.0).abs() < 1e-9);
    }
}
