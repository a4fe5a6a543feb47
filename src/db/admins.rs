//! Administrator accounts.
//!
//! Passwords are stored only as Argon2id PHC strings (see
//! [`crate::libs::password`]). Two roles exist: `Admin` may use every screen,
//! `Super Admin` may additionally create and delete administrators.
//!
//! ## Features
//!
//! - **Accounts**: insert with a unique username, list, delete
//! - **Credentials**: verify against the stored hash, change password
//! - **Bootstrap**: [`Admins::ensure_default`] creates `admin`/`admin` as a
//!   Super Admin when the table is empty
//! - **Audit**: `last_login` is stamped on every successful login

use super::db::{is_constraint_violation, Db};
use crate::libs::password::{hash_password, verify_password};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INSERT_ADMIN: &str = "INSERT INTO admin_users (username, password_hash, full_name, role) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ADMINS: &str = "SELECT id, username, password_hash, full_name, role, last_login FROM admin_users";
const UPDATE_LAST_LOGIN: &str = "UPDATE admin_users SET last_login = ?2 WHERE username = ?1";
const UPDATE_PASSWORD: &str = "UPDATE admin_users SET password_hash = ?2 WHERE username = ?1";
const DELETE_ADMIN: &str = "DELETE FROM admin_users WHERE id = ?1";
const COUNT_ADMINS: &str = "SELECT COUNT(*) FROM admin_users";

/// Credentials created on first run when no administrator exists.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
pub const DEFAULT_ADMIN_FULL_NAME: &str = "System Administrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub const ALL: [AdminRole; 2] = [AdminRole::Admin, AdminRole::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "Admin",
            AdminRole::SuperAdmin => "Super Admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(AdminRole::Admin),
            "super admin" | "superadmin" => Ok(AdminRole::SuperAdmin),
            other => Err(format!("unknown admin role '{}'", other)),
        }
    }
}

impl ToSql for AdminRole {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AdminRole {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub role: AdminRole,
    pub last_login: Option<NaiveDateTime>,
}

impl AdminUser {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(AdminUser {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
            full_name: row.get(3)?,
            role: row.get(4)?,
            last_login: row.get(5)?,
        })
    }
}

pub struct Admins<'a> {
    db: &'a Db,
}

impl<'a> Admins<'a> {
    pub fn new(db: &'a Db) -> Self {
        Admins { db }
    }

    /// Creates an administrator. Returns `false` when the username is taken.
    pub fn insert(&self, username: &str, password: &str, full_name: &str, role: AdminRole) -> Result<bool> {
        let password_hash = hash_password(password)?;
        match self
            .db
            .conn
            .execute(INSERT_ADMIN, params![username.trim(), password_hash, full_name.trim(), role])
        {
            Ok(_) => {
                tracing::debug!(username, %role, "admin added");
                Ok(true)
            }
            Err(e) if is_constraint_violation(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE username = ?1", SELECT_ADMINS), params![username.trim()], AdminUser::from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<AdminUser>> {
        self.db
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_ADMINS), params![id], AdminUser::from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Returns the admin when `password` matches the stored hash.
    pub fn verify(&self, username: &str, password: &str) -> Result<Option<AdminUser>> {
        let admin = self.get_by_username(username)?;
        Ok(admin.filter(|admin| verify_password(password, &admin.password_hash)))
    }

    pub fn update_last_login(&self, username: &str, at: NaiveDateTime) -> Result<()> {
        self.db.conn.execute(UPDATE_LAST_LOGIN, params![username, at])?;
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<AdminUser>> {
        let mut stmt = self.db.conn.prepare(&format!("{} ORDER BY id", SELECT_ADMINS))?;
        let admin_iter = stmt.query_map([], AdminUser::from_row)?;

        let mut admins = Vec::new();
        for admin in admin_iter {
            admins.push(admin?);
        }
        Ok(admins)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.db.conn.query_row(COUNT_ADMINS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn change_password(&self, username: &str, new_password: &str) -> Result<bool> {
        let password_hash = hash_password(new_password)?;
        let affected = self.db.conn.execute(UPDATE_PASSWORD, params![username, password_hash])?;
        Ok(affected > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.db.conn.execute(DELETE_ADMIN, params![id])?;
        Ok(affected > 0)
    }

    /// Creates the default Super Admin when the table is empty.
    ///
    /// Returns `true` when the account was created.
    pub fn ensure_default(&self) -> Result<bool> {
        if self.count()? > 0 {
            return Ok(false);
        }
        self.insert(
            DEFAULT_ADMIN_USERNAME,
            DEFAULT_ADMIN_PASSWORD,
            DEFAULT_ADMIN_FULL_NAME,
            AdminRole::SuperAdmin,
        )
    }
}
