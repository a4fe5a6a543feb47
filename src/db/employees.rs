//! Employee records keyed by a unique barcode.
//!
//! The barcode is the token a scanner sends, so lookups trim surrounding
//! whitespace and the column carries a UNIQUE constraint. A duplicate insert
//! is reported as `Ok(false)` rather than an error.
//!
//! ## Features
//!
//! - **CRUD**: insert, fetch by id or barcode, list ordered by name, update
//! - **Status**: `Active` / `Inactive`, the soft alternative to deletion
//! - **Guarded deletion**: [`Employees::delete`] refuses employees that have
//!   attendance or shift history and reports the counts instead
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::db::{db::Db, employees::{Employee, Employees}};
//! use chrono::NaiveDate;
//!
//! let db = Db::open("punch.db")?;
//! let employees = Employees::new(&db);
//! let hired = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! if !employees.insert(&Employee::new("Ann Lee", "E100", "Ops", "Clerk", hired))? {
//!     println!("barcode already in use");
//! }
//! let ann = employees.get_by_barcode(" E100 ")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::{is_constraint_violation, Db};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, barcode_id, department, position, hire_date, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET name = ?2, department = ?3, position = ?4, status = ?5 WHERE id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_EMPLOYEES: &str = "SELECT id, name, barcode_id, department, position, hire_date, status FROM employees";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";
const COUNT_ATTENDANCE: &str = "SELECT COUNT(*) FROM attendance WHERE employee_id = ?1";
const COUNT_ASSIGNMENTS: &str = "SELECT COUNT(*) FROM employee_shifts WHERE employee_id = ?1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(format!("unknown employee status '{}'", other)),
        }
    }
}

impl ToSql for EmployeeStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EmployeeStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub barcode_id: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn new(name: &str, barcode_id: &str, department: &str, position: &str, hire_date: NaiveDate) -> Self {
        Employee {
            id: None,
            name: name.to_string(),
            barcode_id: barcode_id.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            hire_date,
            status: EmployeeStatus::Active,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            barcode_id: row.get(2)?,
            department: row.get(3)?,
            position: row.get(4)?,
            hire_date: row.get(5)?,
            status: row.get(6)?,
        })
    }
}

/// Result of a delete request.
///
/// Employees with attendance or shift history are never removed; the
/// operator is expected to mark them `Inactive` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeDeletion {
    Deleted,
    NotFound,
    HasHistory { attendance: usize, assignments: usize },
}

pub struct Employees<'a> {
    db: &'a Db,
}

impl<'a> Employees<'a> {
    pub fn new(db: &'a Db) -> Self {
        Employees { db }
    }

    /// Inserts an employee. Returns `false` when the barcode is already taken.
    pub fn insert(&self, employee: &Employee) -> Result<bool> {
        let inserted = self.db.conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.name,
                employee.barcode_id,
                employee.department,
                employee.position,
                employee.hire_date,
                employee.status
            ],
        );
        match inserted {
            Ok(_) => {
                tracing::debug!(barcode = %employee.barcode_id, "employee added");
                Ok(true)
            }
            Err(e) if is_constraint_violation(&e) => {
                tracing::debug!(barcode = %employee.barcode_id, "duplicate barcode rejected");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_by_barcode(&self, barcode_id: &str) -> Result<Option<Employee>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE barcode_id = ?1", SELECT_EMPLOYEES), params![barcode_id.trim()], Employee::from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_EMPLOYEES), params![id], Employee::from_row)
            .optional()
            .map_err(Into::into)
    }

    /// All employees ordered by name.
    pub fn list(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.db.conn.prepare(&format!("{} ORDER BY name, id", SELECT_EMPLOYEES))?;
        let employee_iter = stmt.query_map([], Employee::from_row)?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.db.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Updates name, department, position and status. The barcode is immutable.
    pub fn update(&self, employee: &Employee) -> Result<bool> {
        let Some(id) = employee.id else {
            return Ok(false);
        };
        let affected = self.db.conn.execute(
            UPDATE_EMPLOYEE,
            params![id, employee.name, employee.department, employee.position, employee.status],
        )?;
        Ok(affected > 0)
    }

    /// Counts attendance rows and shift assignments that reference the employee.
    pub fn history_counts(&self, id: i64) -> Result<(usize, usize)> {
        let attendance: i64 = self.db.conn.query_row(COUNT_ATTENDANCE, params![id], |row| row.get(0))?;
        let assignments: i64 = self.db.conn.query_row(COUNT_ASSIGNMENTS, params![id], |row| row.get(0))?;
        Ok((attendance as usize, assignments as usize))
    }

    pub fn delete(&self, id: i64) -> Result<EmployeeDeletion> {
        if self.get_by_id(id)?.is_none() {
            return Ok(EmployeeDeletion::NotFound);
        }

        let (attendance, assignments) = self.history_counts(id)?;
        if attendance > 0 || assignments > 0 {
            return Ok(EmployeeDeletion::HasHistory { attendance, assignments });
        }

        self.db.conn.execute(DELETE_EMPLOYEE, params![id])?;
        tracing::debug!(id, "employee deleted");
        Ok(EmployeeDeletion::Deleted)
    }
}
