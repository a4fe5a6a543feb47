//! Interactive session: bootstrap, login and the main menu loop.

use super::{admins, attendance, employees, login, prompt, reports, shifts};
use crate::{
    db::{
        admins::{Admins, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME},
        db::Db,
    },
    libs::{
        config::Config, input::InputError, messages::Message, report::RangeError, session::Session, view::View,
    },
    msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;

/// Everything a menu handler needs for the current run.
pub struct App {
    pub db: Db,
    pub session: Session,
    pub config: Config,
}

impl App {
    pub fn header(&self, title: Message) {
        View::header(&title.to_string(), Some(&self.session));
    }
}

pub fn cmd(db: Db, config: Config) -> Result<()> {
    bootstrap(&db)?;

    View::header(&Message::AppTitle.to_string(), None);
    let Some(session) = login::cmd(&db, config.max_login_attempts())? else {
        msg_error!(Message::LoginAttemptsExhausted, true);
        std::process::exit(1);
    };

    msg_success!(
        Message::LoginWelcome(session.admin.full_name.clone(), session.admin.role.to_string()),
        true
    );
    if session.default_credentials {
        msg_warning!(Message::DefaultCredentialsInUse);
    }

    let app = App { db, session, config };
    let items = [
        Message::MenuAttendance,
        Message::MenuEmployees,
        Message::MenuShifts,
        Message::MenuAdmins,
        Message::MenuReports,
        Message::MenuExit,
    ];

    loop {
        app.header(Message::AppTitle);
        match prompt::menu(&items)? {
            0 => attendance::cmd(&app)?,
            1 => employees::cmd(&app)?,
            2 => shifts::cmd(&app)?,
            3 => admins::cmd(&app)?,
            4 => reports::cmd(&app)?,
            _ => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

/// Creates the default Super Admin on an empty store and announces it.
pub fn bootstrap(db: &Db) -> Result<bool> {
    let created = Admins::new(db).ensure_default()?;
    if created {
        msg_warning!(
            Message::DefaultAdminCreated(DEFAULT_ADMIN_USERNAME.to_string(), DEFAULT_ADMIN_PASSWORD.to_string()),
            true
        );
    }
    Ok(created)
}

/// Keeps a failed action from ending the session.
///
/// Bad input and store errors are printed and the menu carries on. Terminal
/// errors from dialoguer are passed up since no further prompt can succeed.
pub fn recover(result: Result<()>) -> Result<()> {
    let Err(error) = result else {
        return Ok(());
    };

    if error.downcast_ref::<dialoguer::Error>().is_some() {
        return Err(error);
    }
    if error.downcast_ref::<InputError>().is_some() || error.downcast_ref::<RangeError>().is_some() {
        msg_error!(Message::InvalidInput(error.to_string()));
    } else {
        tracing::debug!(error = ?error, "menu action failed");
        msg_error!(Message::ActionFailed(error.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn recover_swallows_domain_errors() {
        assert!(recover(Ok(())).is_ok());
        assert!(recover(Err(InputError::Required("Name").into())).is_ok());
        assert!(recover(Err(anyhow!("disk full"))).is_ok());
    }

    #[test]
    fn recover_passes_terminal_errors_up() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let result = recover(Err(dialoguer::Error::IO(io).into()));
        assert!(result.is_err());
    }
}
