//! # Punch - barcode attendance tracking
//!
//! A terminal application for recording employee time-in and time-out from a
//! barcode scanner, backed by a local SQLite file.
//!
//! ## Features
//!
//! - **Attendance**: scan-driven time-in/time-out with one record per employee per day
//! - **Staff records**: employees, shifts and dated shift assignments
//! - **Reports**: daily roster, date-range tallies and per-employee summaries
//! - **Access control**: Argon2-hashed admin accounts with a Super Admin role
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
