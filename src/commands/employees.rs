use super::{
    menu::{recover, App},
    prompt,
};
use crate::{
    db::employees::{Employee, EmployeeDeletion, EmployeeStatus, Employees},
    libs::{input::required, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Select};

pub fn cmd(app: &App) -> Result<()> {
    let items = [
        Message::MenuAddEmployee,
        Message::MenuViewEmployees,
        Message::MenuUpdateEmployee,
        Message::MenuDeleteEmployee,
        Message::MenuBack,
    ];

    loop {
        app.header(Message::MenuEmployees);
        match prompt::menu(&items)? {
            0 => recover(handle_add(app))?,
            1 => recover(handle_list(app))?,
            2 => recover(handle_update(app))?,
            3 => recover(handle_delete(app))?,
            _ => return Ok(()),
        }
    }
}

fn handle_add(app: &App) -> Result<()> {
    let name = required(&prompt::text(Message::PromptEmployeeName)?, "Name")?;
    let barcode_id = required(&prompt::text(Message::PromptBarcodeId)?, "Barcode ID")?;
    let department = required(&prompt::text(Message::PromptDepartment)?, "Department")?;
    let position = required(&prompt::text(Message::PromptPosition)?, "Position")?;
    let hire_date = prompt::date(Message::PromptHireDate, Local::now().date_naive())?;

    let employee = Employee::new(&name, &barcode_id, &department, &position, hire_date);
    if Employees::new(&app.db).insert(&employee)? {
        msg_success!(Message::EmployeeAdded(name));
    } else {
        msg_error!(Message::EmployeeBarcodeExists(barcode_id));
    }

    Ok(())
}

fn handle_list(app: &App) -> Result<()> {
    let employees = Employees::new(&app.db).list()?;

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeeListHeader, true);
    View::employees(&employees)?;
    Ok(())
}

fn handle_update(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };

    msg_print!(Message::UpdatingEmployee(employee.name.clone()), true);

    let name = required(&prompt::text_with_default(Message::PromptEmployeeName, &employee.name)?, "Name")?;
    let department = required(
        &prompt::text_with_default(Message::PromptDepartment, &employee.department)?,
        "Department",
    )?;
    let position = required(&prompt::text_with_default(Message::PromptPosition, &employee.position)?, "Position")?;

    let current = EmployeeStatus::ALL.iter().position(|s| *s == employee.status).unwrap_or(0);
    let status = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmployeeStatus.to_string())
        .items(&EmployeeStatus::ALL)
        .default(current)
        .interact()?;

    let updated = Employee {
        name,
        department,
        position,
        status: EmployeeStatus::ALL[status],
        ..employee
    };

    if Employees::new(&app.db).update(&updated)? {
        msg_success!(Message::EmployeeUpdated);
    } else {
        msg_error!(Message::EmployeeNotFound);
    }

    Ok(())
}

fn handle_delete(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };
    let Some(id) = employee.id else {
        msg_error!(Message::EmployeeNotFound);
        return Ok(());
    };

    if !prompt::confirm(Message::ConfirmDeleteEmployee(employee.name.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match Employees::new(&app.db).delete(id)? {
        EmployeeDeletion::Deleted => msg_success!(Message::EmployeeDeleted(employee.name)),
        EmployeeDeletion::NotFound => msg_error!(Message::EmployeeNotFound),
        EmployeeDeletion::HasHistory {
            attendance,
            assignments,
        } => msg_warning!(Message::EmployeeHasHistory(employee.name, attendance, assignments)),
    }

    Ok(())
}
