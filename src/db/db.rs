use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Owns the SQLite connection shared by every repository.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at `path` and runs pending migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Self::new_without_migrations(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without touching the schema.
    pub fn new_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        tracing::debug!(path = %path.display(), "database opened");

        Ok(conn)
    }
}

/// True when `err` is a UNIQUE/constraint violation reported by SQLite.
///
/// Repositories turn these into `Ok(false)` so callers can show a plain
/// message instead of failing the whole action.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
