use super::prompt;
use crate::{
    db::{admins::Admins, db::Db},
    libs::{
        messages::Message,
        session::{authenticate, Session},
    },
    msg_error, msg_print,
};
use anyhow::Result;
use chrono::Local;

/// Prompts for credentials until one pair verifies or `max_attempts` is spent.
pub fn cmd(db: &Db, max_attempts: u32) -> Result<Option<Session>> {
    msg_print!(Message::LoginHeader);
    login_with(&Admins::new(db), max_attempts, || {
        let username = prompt::text(Message::PromptUsername)?;
        let password = prompt::password(Message::PromptPassword)?;
        Ok((username, password))
    })
}

/// Login loop with a pluggable credential source.
///
/// Returns `None` once the budget is exhausted; the caller decides how to
/// terminate.
pub fn login_with<F>(admins: &Admins, max_attempts: u32, mut credentials: F) -> Result<Option<Session>>
where
    F: FnMut() -> Result<(String, String)>,
{
    for attempt in 1..=max_attempts {
        let (username, password) = credentials()?;
        if let Some(session) = authenticate(admins, &username, &password, Local::now().naive_local())? {
            return Ok(Some(session));
        }

        let remaining = max_attempts - attempt;
        if remaining > 0 {
            msg_error!(Message::LoginFailed(remaining));
        }
    }

    Ok(None)
}
