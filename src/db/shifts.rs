//! Shift definitions and dated shift assignments.
//!
//! An assignment links an employee to a shift from its effective date onwards.
//! Assignments are never edited; reassigning adds a row, so the full history
//! stays queryable and [`Shifts::get_employee_shift`] can answer "which shift
//! applied on this date".

use super::db::Db;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const INSERT_SHIFT: &str = "INSERT INTO shifts (name, start_time, end_time, description) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SHIFTS: &str = "SELECT id, name, start_time, end_time, description FROM shifts";
const INSERT_ASSIGNMENT: &str = "INSERT INTO employee_shifts (employee_id, shift_id, effective_date) VALUES (?1, ?2, ?3)";
// Latest effective date not after the query date; the newest assignment wins a tie.
const SELECT_EMPLOYEE_SHIFT: &str = "
    SELECT s.id, s.name, s.start_time, s.end_time, s.description
    FROM shifts s
    JOIN employee_shifts es ON s.id = es.shift_id
    WHERE es.employee_id = ?1 AND es.effective_date <= ?2
    ORDER BY es.effective_date DESC, es.id DESC
    LIMIT 1
";
const SELECT_ASSIGNMENTS_FOR_EMPLOYEE: &str = "
    SELECT es.id, es.employee_id, es.shift_id, es.effective_date, s.name
    FROM employee_shifts es
    JOIN shifts s ON s.id = es.shift_id
    WHERE es.employee_id = ?1
    ORDER BY es.effective_date DESC, es.id DESC
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Option<i64>,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
}

impl Shift {
    pub fn new(name: &str, start_time: NaiveTime, end_time: NaiveTime, description: Option<String>) -> Self {
        Shift {
            id: None,
            name: name.to_string(),
            start_time,
            end_time,
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Shift {
            id: row.get(0)?,
            name: row.get(1)?,
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            description: row.get(4)?,
        })
    }
}

/// Links an employee to a shift from `effective_date` onwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub id: Option<i64>,
    pub employee_id: i64,
    pub shift_id: i64,
    pub effective_date: NaiveDate,
    pub shift_name: Option<String>,
}

pub struct Shifts<'a> {
    db: &'a Db,
}

impl<'a> Shifts<'a> {
    pub fn new(db: &'a Db) -> Self {
        Shifts { db }
    }

    pub fn insert(&self, shift: &Shift) -> Result<i64> {
        self.db
            .conn
            .execute(INSERT_SHIFT, params![shift.name, shift.start_time, shift.end_time, shift.description])?;
        let id = self.db.conn.last_insert_rowid();
        tracing::debug!(id, name = %shift.name, "shift added");
        Ok(id)
    }

    /// All shifts ordered by start time.
    pub fn list(&self) -> Result<Vec<Shift>> {
        let mut stmt = self.db.conn.prepare(&format!("{} ORDER BY start_time, id", SELECT_SHIFTS))?;
        let shift_iter = stmt.query_map([], Shift::from_row)?;

        let mut shifts = Vec::new();
        for shift in shift_iter {
            shifts.push(shift?);
        }
        Ok(shifts)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Shift>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_SHIFTS), params![id], Shift::from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn assign(&self, employee_id: i64, shift_id: i64, effective_date: NaiveDate) -> Result<i64> {
        self.db
            .conn
            .execute(INSERT_ASSIGNMENT, params![employee_id, shift_id, effective_date])?;
        let id = self.db.conn.last_insert_rowid();
        tracing::debug!(id, employee_id, shift_id, %effective_date, "shift assigned");
        Ok(id)
    }

    /// The shift in force for `employee_id` on `date`.
    pub fn get_employee_shift(&self, employee_id: i64, date: NaiveDate) -> Result<Option<Shift>> {
        self.db
            .conn
            .query_row(SELECT_EMPLOYEE_SHIFT, params![employee_id, date], Shift::from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Assignment history for one employee, newest first.
    pub fn assignments_for(&self, employee_id: i64) -> Result<Vec<ShiftAssignment>> {
        let mut stmt = self.db.conn.prepare(SELECT_ASSIGNMENTS_FOR_EMPLOYEE)?;
        let assignment_iter = stmt.query_map(params![employee_id], |row| {
            Ok(ShiftAssignment {
                id: row.get(0)?,
                employee_id: row.get(1)?,
                shift_id: row.get(2)?,
                effective_date: row.get(3)?,
                shift_name: row.get(4)?,
            })
        })?;

        let mut assignments = Vec::new();
        for assignment in assignment_iter {
            assignments.push(assignment?);
        }
        Ok(assignments)
    }
}
