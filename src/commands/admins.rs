use super::{
    menu::{recover, App},
    prompt,
};
use crate::{
    db::admins::{AdminRole, Admins},
    libs::{
        input::required,
        messages::Message,
        session::{change_own_password, delete_admin, AccessDenied, AdminDeletion},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;

pub fn cmd(app: &App) -> Result<()> {
    let items = [
        Message::MenuAddAdmin,
        Message::MenuViewAdmins,
        Message::MenuChangePassword,
        Message::MenuDeleteAdmin,
        Message::MenuBack,
    ];

    loop {
        app.header(Message::MenuAdmins);
        match prompt::menu(&items)? {
            0 => recover(handle_add(app))?,
            1 => recover(handle_list(app))?,
            2 => recover(handle_change_password(app))?,
            3 => recover(handle_delete(app))?,
            _ => return Ok(()),
        }
    }
}

/// Asks for a new password twice. `None` when the two entries differ.
fn prompt_new_password() -> Result<Option<String>> {
    let password = prompt::password(Message::PromptNewPassword)?;
    let confirmation = prompt::password(Message::PromptConfirmPassword)?;

    if password != confirmation {
        msg_error!(Message::PasswordsDoNotMatch);
        return Ok(None);
    }
    Ok(Some(password))
}

fn handle_add(app: &App) -> Result<()> {
    if let Err(denied) = app.session.require_super_admin("add admin users") {
        msg_error!(Message::AccessDenied(denied.to_string()));
        return Ok(());
    }

    let username = required(&prompt::text(Message::PromptUsername)?, "Username")?;
    let full_name = required(&prompt::text(Message::PromptFullName)?, "Full name")?;
    let Some(password) = prompt_new_password()? else {
        return Ok(());
    };
    let Some(role) = prompt::select(Message::PromptAdminRole, &AdminRole::ALL)? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    if Admins::new(&app.db).insert(&username, &password, &full_name, AdminRole::ALL[role])? {
        msg_success!(Message::AdminAdded(username));
    } else {
        msg_error!(Message::AdminUsernameExists(username));
    }

    Ok(())
}

fn handle_list(app: &App) -> Result<()> {
    let admins = Admins::new(&app.db).list()?;

    if admins.is_empty() {
        msg_info!(Message::NoAdminsFound);
        return Ok(());
    }

    msg_print!(Message::AdminListHeader, true);
    View::admins(&admins)?;
    Ok(())
}

fn handle_change_password(app: &App) -> Result<()> {
    let current = prompt::password(Message::PromptCurrentPassword)?;
    let Some(new_password) = prompt_new_password()? else {
        return Ok(());
    };

    if change_own_password(&Admins::new(&app.db), &app.session, &current, &new_password)? {
        msg_success!(Message::PasswordChanged);
    } else {
        msg_error!(Message::IncorrectCurrentPassword);
    }

    Ok(())
}

fn handle_delete(app: &App) -> Result<()> {
    if let Err(denied) = app.session.require_super_admin("delete admin users") {
        msg_error!(Message::AccessDenied(denied.to_string()));
        return Ok(());
    }

    let admins = Admins::new(&app.db);
    let mut candidates: Vec<_> = admins
        .list()?
        .into_iter()
        .filter(|admin| admin.id != app.session.admin.id)
        .collect();
    if candidates.is_empty() {
        msg_error!(Message::CannotDeleteLastAdmin);
        return Ok(());
    }

    let items: Vec<String> = candidates
        .iter()
        .map(|admin| format!("{} ({}, {})", admin.username, admin.full_name, admin.role))
        .collect();
    let Some(index) = prompt::select(Message::PromptSelectAdmin, &items)? else {
        return Ok(());
    };
    let target = candidates.swap_remove(index);

    if !prompt::confirm(Message::ConfirmDeleteAdmin(target.username.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match delete_admin(&admins, &app.session, target.id)? {
        AdminDeletion::Deleted => msg_success!(Message::AdminDeleted(target.username)),
        AdminDeletion::Forbidden => {
            let denied = AccessDenied { action: "delete admin users" };
            msg_error!(Message::AccessDenied(denied.to_string()))
        }
        AdminDeletion::SelfDeletion => msg_error!(Message::CannotDeleteSelf),
        AdminDeletion::LastAdmin => msg_error!(Message::CannotDeleteLastAdmin),
        AdminDeletion::NotFound => msg_error!(Message::AdminNotFound),
    }

    Ok(())
}
