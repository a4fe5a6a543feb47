//! Database layer for punch.
//!
//! A single SQLite file holds five relations: employees, shifts,
//! employee_shifts, attendance and admin_users. [`db::Db`] owns the
//! connection; each repository borrows it for the duration of a call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::db::{db::Db, employees::{Employee, Employees}};
//! use chrono::NaiveDate;
//!
//! let db = Db::open("punch.db")?;
//! let hired = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! Employees::new(&db).insert(&Employee::new("Ann Lee", "E100", "Ops", "Clerk", hired))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and start-up migrations.
pub mod db;

/// Versioned schema changes and their history table.
pub mod migrations;

/// Administrator accounts and password verification.
pub mod admins;

/// Per-day attendance records and the upsert-by-day write path.
pub mod attendance;

/// Employee records keyed by barcode.
pub mod employees;

/// Shift definitions and dated assignments.
pub mod shifts;
