//! Daily attendance records.
//!
//! One row per employee per calendar date. Writes go through
//! [`Attendance::record_attendance`], which inserts the row on first touch and
//! afterwards only updates the time fields it is given.

use super::db::Db;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

const SELECT_ID_BY_DAY: &str = "SELECT id FROM attendance WHERE employee_id = ?1 AND date = ?2";
const INSERT_RECORD: &str = "INSERT INTO attendance (employee_id, date, time_in, time_out, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_RECORD: &str = "UPDATE attendance
    SET time_in = COALESCE(?2, time_in), time_out = COALESCE(?3, time_out), status = ?4
    WHERE id = ?1";
const SELECT_RECORDS: &str = "
    SELECT a.id, a.employee_id, e.name, a.date, a.time_in, a.time_out, a.status
    FROM attendance a
    JOIN employees e ON a.employee_id = e.id
";

/// Status label of a day. Anything other than the three known labels is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Other(String),
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Other(label) => label,
        }
    }

    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Present" => AttendanceStatus::Present,
            "Absent" => AttendanceStatus::Absent,
            "Late" => AttendanceStatus::Late,
            other => AttendanceStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for AttendanceStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AttendanceStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(AttendanceStatus::parse(value.as_str()?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(AttendanceRecord {
            id: row.get(0)?,
            employee_id: row.get(1)?,
            employee_name: row.get(2)?,
            date: row.get(3)?,
            time_in: row.get(4)?,
            time_out: row.get(5)?,
            status: row.get(6)?,
        })
    }
}

pub struct Attendance<'a> {
    db: &'a Db,
}

impl<'a> Attendance<'a> {
    pub fn new(db: &'a Db) -> Self {
        Attendance { db }
    }

    /// Upserts the record for `(employee_id, date)`.
    ///
    /// A missing row is inserted with whatever fields are given. An existing
    /// row keeps any time field passed as `None`; `status` always overwrites.
    /// Returns `true` when a new row was created.
    pub fn record_attendance(
        &self,
        employee_id: i64,
        date: NaiveDate,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
        status: Option<AttendanceStatus>,
    ) -> Result<bool> {
        let tx = self.db.conn.unchecked_transaction()?;

        let existing: Option<i64> = tx
            .query_row(SELECT_ID_BY_DAY, params![employee_id, date], |row| row.get(0))
            .optional()?;

        let created = match existing {
            Some(id) => {
                tx.execute(UPDATE_RECORD, params![id, time_in, time_out, status])?;
                false
            }
            None => {
                tx.execute(INSERT_RECORD, params![employee_id, date, time_in, time_out, status])?;
                true
            }
        };

        tx.commit()?;
        tracing::debug!(employee_id, %date, created, "attendance recorded");
        Ok(created)
    }

    /// The record for one employee on one day, if any.
    pub fn get(&self, employee_id: i64, date: NaiveDate) -> Result<Option<AttendanceRecord>> {
        self.db
            .conn
            .query_row(
                &format!("{} WHERE a.employee_id = ?1 AND a.date = ?2", SELECT_RECORDS),
                params![employee_id, date],
                AttendanceRecord::from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Records between `start_date` and `end_date` inclusive, ordered by date
    /// then employee name, optionally limited to one employee.
    pub fn get_attendance_records(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Option<i64>,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.db.conn.prepare(&format!(
            "{} WHERE a.date BETWEEN ?1 AND ?2 AND (?3 IS NULL OR a.employee_id = ?3) ORDER BY a.date, e.name, a.employee_id",
            SELECT_RECORDS
        ))?;
        let record_iter = stmt.query_map(params![start_date, end_date, employee_id], AttendanceRecord::from_row)?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }
}
