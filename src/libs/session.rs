//! Authenticated operator session.
//!
//! A [`Session`] is created by a successful login and handed to every menu
//! handler; there is no process-wide "current user".

use crate::db::admins::{AdminRole, AdminUser, Admins, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use anyhow::Result;
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("only Super Admins can {action}")]
pub struct AccessDenied {
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub admin: AdminUser,
    /// Logged in with the bootstrap credentials.
    pub default_credentials: bool,
}

impl Session {
    pub fn new(admin: AdminUser) -> Self {
        Session {
            admin,
            default_credentials: false,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.admin.role == AdminRole::SuperAdmin
    }

    pub fn require_super_admin(&self, action: &'static str) -> Result<(), AccessDenied> {
        if self.is_super_admin() {
            Ok(())
        } else {
            Err(AccessDenied { action })
        }
    }
}

/// Verifies credentials and stamps `last_login` on success.
pub fn authenticate(admins: &Admins, username: &str, password: &str, now: NaiveDateTime) -> Result<Option<Session>> {
    let Some(admin) = admins.verify(username, password)? else {
        tracing::debug!(username, "login rejected");
        return Ok(None);
    };

    admins.update_last_login(&admin.username, now)?;
    let default_credentials = admin.username == DEFAULT_ADMIN_USERNAME && password == DEFAULT_ADMIN_PASSWORD;
    tracing::debug!(username = %admin.username, role = %admin.role, "login accepted");

    Ok(Some(Session {
        admin: AdminUser {
            last_login: Some(now),
            ..admin
        },
        default_credentials,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminDeletion {
    Deleted,
    Forbidden,
    SelfDeletion,
    LastAdmin,
    NotFound,
}

/// Deletes an administrator on behalf of `session`.
///
/// Only Super Admins may delete, nobody may delete themselves, and the last
/// remaining account is never removed.
pub fn delete_admin(admins: &Admins, session: &Session, target_id: i64) -> Result<AdminDeletion> {
    if !session.is_super_admin() {
        return Ok(AdminDeletion::Forbidden);
    }
    if admins.count()? <= 1 {
        return Ok(AdminDeletion::LastAdmin);
    }
    if target_id == session.admin.id {
        return Ok(AdminDeletion::SelfDeletion);
    }
    let Some(target) = admins.get_by_id(target_id)? else {
        return Ok(AdminDeletion::NotFound);
    };
    if !admins.delete(target.id)? {
        return Ok(AdminDeletion::NotFound);
    }

    tracing::debug!(username = %target.username, by = %session.admin.username, "admin deleted");
    Ok(AdminDeletion::Deleted)
}

/// Changes the session owner's password after re-checking the current one.
///
/// Returns `false` when `current_password` does not verify.
pub fn change_own_password(admins: &Admins, session: &Session, current_password: &str, new_password: &str) -> Result<bool> {
    if admins.verify(&session.admin.username, current_password)?.is_none() {
        return Ok(false);
    }
    admins.change_password(&session.admin.username, new_password)
}
