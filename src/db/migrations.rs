//! Database schema migration management and versioning system.
//!
//! Every schema change is a numbered migration applied inside one transaction
//! and recorded in the `migrations` table, so opening an old database file
//! brings it forward without losing attendance history.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("punch.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracks which migrations have been applied.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all schema migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the five base relations
        self.add_migration(1, "create_base_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    barcode_id TEXT NOT NULL UNIQUE,
                    department TEXT NOT NULL DEFAULT '',
                    position TEXT NOT NULL DEFAULT '',
                    hire_date DATE NOT NULL,
                    status TEXT NOT NULL DEFAULT 'Active'
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS shifts (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    start_time TEXT NOT NULL,
                    end_time TEXT NOT NULL,
                    description TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS employee_shifts (
                    id INTEGER PRIMARY KEY,
                    employee_id INTEGER NOT NULL,
                    shift_id INTEGER NOT NULL,
                    effective_date DATE NOT NULL,
                    FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE RESTRICT,
                    FOREIGN KEY (shift_id) REFERENCES shifts(id) ON DELETE RESTRICT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS attendance (
                    id INTEGER PRIMARY KEY,
                    employee_id INTEGER NOT NULL,
                    date DATE NOT NULL,
                    time_in TEXT,
                    time_out TEXT,
                    status TEXT,
                    FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE RESTRICT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS admin_users (
                    id INTEGER PRIMARY KEY,
                    username TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    full_name TEXT NOT NULL,
                    role TEXT NOT NULL,
                    last_login TIMESTAMP
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: lookup indices and the one-record-per-day guard
        self.add_migration(2, "add_indices", |tx| {
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_employee_date ON attendance(employee_id, date)",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)", [])?;
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_employee_shifts_lookup ON employee_shifts(employee_id, effective_date)",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Applied migrations, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<AppliedMigration>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| {
                Ok(AppliedMigration {
                    version: row.get(0)?,
                    name: row.get(1)?,
                    applied_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Highest version this build knows how to apply.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

/// One row of the `migrations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    pub applied_at: String,
}

/// Recorded schema version against the newest one compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    pub current: u32,
    pub latest: u32,
}

impl SchemaStatus {
    pub fn pending(&self) -> u32 {
        self.latest.saturating_sub(self.current)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn schema_status(conn: &Connection) -> Result<SchemaStatus> {
    let manager = MigrationManager::new();
    Ok(SchemaStatus {
        current: manager.get_current_version(conn)?,
        latest: manager.latest_version(),
    })
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    Ok(schema_status(conn)?.pending() > 0)
}
