//! CSV export of attendance records.

use crate::db::attendance::AttendanceRecord;
use crate::libs::input::{DATE_FORMAT, TIME_FORMAT};
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One CSV row. Field order is the column order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportRecord {
    pub date: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub time_in: String,
    pub time_out: String,
    pub status: String,
}

impl From<&AttendanceRecord> for ExportRecord {
    fn from(record: &AttendanceRecord) -> Self {
        ExportRecord {
            date: record.date.format(DATE_FORMAT).to_string(),
            employee_id: record.employee_id,
            employee_name: record.employee_name.clone(),
            time_in: record.time_in.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default(),
            time_out: record.time_out.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default(),
            status: record.status.as_ref().map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    /// Uses `output_path`, or `punch_attendance_<timestamp>.csv` in the
    /// working directory.
    pub fn new(output_path: Option<PathBuf>, now: NaiveDateTime) -> Self {
        let output_path = output_path
            .unwrap_or_else(|| PathBuf::from(format!("punch_attendance_{}.csv", now.format("%Y%m%d_%H%M%S"))));

        Self { output_path }
    }

    /// Default file name offered by the export prompt.
    pub fn default_path(now: NaiveDateTime) -> PathBuf {
        Self::new(None, now).output_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the records with a header row. Returns the number of data rows.
    pub fn export_attendance(&self, records: &[AttendanceRecord]) -> Result<usize> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        for record in records {
            wtr.serialize(ExportRecord::from(record))?;
        }
        // An empty export still gets its header.
        if records.is_empty() {
            wtr.write_record(["date", "employee_id", "employee_name", "time_in", "time_out", "status"])?;
        }

        wtr.flush()?;
        tracing::debug!(path = %self.output_path.display(), rows = records.len(), "attendance exported");
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::attendance::AttendanceStatus;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![AttendanceRecord {
            id: 1,
            employee_id: 3,
            employee_name: "Ann Lee".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time_in: NaiveTime::from_hms_opt(9, 0, 0),
            time_out: None,
            status: Some(AttendanceStatus::Present),
        }];

        let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let rows = Exporter::new(Some(path.clone()), now).export_attendance(&records).unwrap();
        assert_eq!(rows, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("date,employee_id,employee_name,time_in,time_out,status"));
        assert_eq!(lines.next(), Some("2024-05-01,3,Ann Lee,09:00:00,,Present"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_export_has_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(8, 0, 0).unwrap();

        Exporter::new(Some(path.clone()), now).export_attendance(&[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "date,employee_id,employee_name,time_in,time_out,status");
    }

    #[test]
    fn default_name_uses_timestamp() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(8, 30, 15).unwrap();
        assert_eq!(Exporter::default_path(now), PathBuf::from("punch_attendance_20240502_083015.csv"));
    }
}
