//! Barcode scan handling.
//!
//! Each employee-day moves through three states driven only by scans:
//!
//! ```text
//! empty ──scan──▶ in-progress ──scan──▶ complete ──scan──▶ complete (no-op)
//! ```
//!
//! The manual entry screen bypasses this and may overwrite either time field.

use crate::db::attendance::{Attendance, AttendanceRecord, AttendanceStatus};
use crate::db::db::Db;
use crate::db::employees::{Employee, Employees};
use crate::libs::input::{required, truncate_seconds, InputError};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    TimeIn,
    TimeOut,
    AlreadyComplete,
}

impl ScanAction {
    /// Picks the transition for a scan given today's record, if any.
    pub fn decide(existing: Option<&AttendanceRecord>) -> ScanAction {
        match existing {
            Some(record) if record.time_in.is_some() && record.time_out.is_some() => ScanAction::AlreadyComplete,
            Some(record) if record.time_in.is_some() => ScanAction::TimeOut,
            _ => ScanAction::TimeIn,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    UnknownBarcode(String),
    TimedIn { employee: Employee, at: NaiveTime },
    TimedOut { employee: Employee, at: NaiveTime },
    AlreadyComplete { employee: Employee },
}

/// Applies one scan of `barcode` at `now`.
pub fn scan(db: &Db, barcode: &str, now: NaiveDateTime) -> Result<ScanOutcome> {
    let Some(employee) = Employees::new(db).get_by_barcode(barcode)? else {
        return Ok(ScanOutcome::UnknownBarcode(barcode.trim().to_string()));
    };
    let Some(employee_id) = employee.id else {
        return Ok(ScanOutcome::UnknownBarcode(barcode.trim().to_string()));
    };

    let attendance = Attendance::new(db);
    let date = now.date();
    let at = truncate_seconds(now.time());
    let existing = attendance.get(employee_id, date)?;

    let outcome = match ScanAction::decide(existing.as_ref()) {
        ScanAction::TimeIn => {
            attendance.record_attendance(employee_id, date, Some(at), None, Some(AttendanceStatus::Present))?;
            ScanOutcome::TimedIn { employee, at }
        }
        ScanAction::TimeOut => {
            attendance.record_attendance(employee_id, date, None, Some(at), Some(AttendanceStatus::Present))?;
            ScanOutcome::TimedOut { employee, at }
        }
        ScanAction::AlreadyComplete => ScanOutcome::AlreadyComplete { employee },
    };

    Ok(outcome)
}

/// Scanner input that ends a scanning session: blank or `0`.
pub fn is_end_of_scanning(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input == "0"
}

/// Status from an operator-typed label. Blank labels are rejected.
pub fn custom_status(label: &str) -> Result<AttendanceStatus, InputError> {
    Ok(AttendanceStatus::parse(&required(label, "Status")?))
}

/// Which fields the manual entry screen writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualMode {
    TimeIn,
    TimeOut,
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntry {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

impl ManualEntry {
    pub fn new(employee_id: i64, date: NaiveDate, mode: ManualMode, time_in: NaiveTime, time_out: NaiveTime) -> Self {
        let (time_in, time_out) = match mode {
            ManualMode::TimeIn => (Some(time_in), None),
            ManualMode::TimeOut => (None, Some(time_out)),
            ManualMode::Both => (Some(time_in), Some(time_out)),
        };
        ManualEntry {
            employee_id,
            date,
            time_in: time_in.map(truncate_seconds),
            time_out: time_out.map(truncate_seconds),
            status: AttendanceStatus::Present,
        }
    }

    pub fn with_status(self, status: AttendanceStatus) -> Self {
        ManualEntry { status, ..self }
    }

    /// Writes the entry. Returns `true` when a new record was created.
    pub fn apply(&self, db: &Db) -> Result<bool> {
        Attendance::new(db).record_attendance(self.employee_id, self.date, self.time_in, self.time_out, Some(self.status.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time_in: Option<(u32, u32)>, time_out: Option<(u32, u32)>) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            employee_id: 1,
            employee_name: "Ann".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time_in: time_in.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            time_out: time_out.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            status: Some(AttendanceStatus::Present),
        }
    }

    #[test]
    fn empty_day_times_in() {
        assert_eq!(ScanAction::decide(None), ScanAction::TimeIn);
    }

    #[test]
    fn open_day_times_out() {
        assert_eq!(ScanAction::decide(Some(&record(Some((9, 0)), None))), ScanAction::TimeOut);
    }

    #[test]
    fn closed_day_is_complete() {
        assert_eq!(
            ScanAction::decide(Some(&record(Some((9, 0)), Some((17, 30))))),
            ScanAction::AlreadyComplete
        );
    }

    #[test]
    fn record_without_time_in_times_in() {
        // e.g. a manual "time out only" entry or an Absent row
        assert_eq!(ScanAction::decide(Some(&record(None, Some((17, 0))))), ScanAction::TimeIn);
        assert_eq!(ScanAction::decide(Some(&record(None, None))), ScanAction::TimeIn);
    }

    #[test]
    fn blank_or_zero_ends_scanning() {
        assert!(is_end_of_scanning(""));
        assert!(is_end_of_scanning("  0 "));
        assert!(!is_end_of_scanning("E100"));
        assert!(!is_end_of_scanning("00"));
    }

    #[test]
    fn custom_status_requires_a_label() {
        assert!(custom_status("   ").is_err());
        assert_eq!(custom_status(" Sick leave ").unwrap(), AttendanceStatus::Other("Sick leave".to_string()));
        assert_eq!(custom_status("Late").unwrap(), AttendanceStatus::Late);
    }

    #[test]
    fn manual_entry_only_sets_requested_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

        let entry = ManualEntry::new(7, date, ManualMode::TimeOut, nine, five);
        assert_eq!(entry.time_in, None);
        assert_eq!(entry.time_out, Some(five));

        let entry = ManualEntry::new(7, date, ManualMode::Both, nine, five).with_status(AttendanceStatus::Late);
        assert_eq!(entry.time_in, Some(nine));
        assert_eq!(entry.status, AttendanceStatus::Late);
    }
}
