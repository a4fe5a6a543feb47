use super::{
    menu::{recover, App},
    prompt,
};
use crate::{
    db::shifts::{Shift, Shifts},
    libs::{
        input::{required, DATE_FORMAT},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd(app: &App) -> Result<()> {
    let items = [
        Message::MenuAddShift,
        Message::MenuViewShifts,
        Message::MenuAssignShift,
        Message::MenuViewAssignments,
        Message::MenuBack,
    ];

    loop {
        app.header(Message::MenuShifts);
        match prompt::menu(&items)? {
            0 => recover(handle_add(app))?,
            1 => recover(handle_list(app))?,
            2 => recover(handle_assign(app))?,
            3 => recover(handle_assignments(app))?,
            _ => return Ok(()),
        }
    }
}

fn handle_add(app: &App) -> Result<()> {
    let name = required(&prompt::text(Message::PromptShiftName)?, "Shift name")?;
    let start_time = prompt::required_time(Message::PromptShiftStart)?;
    let end_time = prompt::required_time(Message::PromptShiftEnd)?;
    let description = prompt::text(Message::PromptShiftDescription)?;

    let shift = Shift::new(&name, start_time, end_time, Some(description));
    let id = Shifts::new(&app.db).insert(&shift)?;

    msg_success!(Message::ShiftAdded(name, id));
    Ok(())
}

fn handle_list(app: &App) -> Result<()> {
    let shifts = Shifts::new(&app.db).list()?;

    if shifts.is_empty() {
        msg_info!(Message::NoShiftsFound);
        return Ok(());
    }

    msg_print!(Message::ShiftListHeader, true);
    View::shifts(&shifts)?;
    Ok(())
}

fn handle_assign(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };
    let Some(shift) = prompt::select_shift(&app.db)? else {
        return Ok(());
    };
    let (Some(employee_id), Some(shift_id)) = (employee.id, shift.id) else {
        msg_error!(Message::EmployeeNotFound);
        return Ok(());
    };

    let effective_date = prompt::date(Message::PromptEffectiveDate, Local::now().date_naive())?;
    Shifts::new(&app.db).assign(employee_id, shift_id, effective_date)?;

    msg_success!(Message::ShiftAssigned(
        shift.name,
        employee.name,
        effective_date.format(DATE_FORMAT).to_string()
    ));
    Ok(())
}

fn handle_assignments(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };
    let Some(employee_id) = employee.id else {
        msg_error!(Message::EmployeeNotFound);
        return Ok(());
    };

    let shifts = Shifts::new(&app.db);
    let assignments = shifts.assignments_for(employee_id)?;
    if assignments.is_empty() {
        msg_info!(Message::NoAssignments(employee.name));
        return Ok(());
    }

    msg_print!(Message::AssignmentsHeader(employee.name.clone()), true);
    View::assignments(&assignments)?;

    let today = Local::now().date_naive();
    if let Some(current) = shifts.get_employee_shift(employee_id, today)? {
        msg_info!(Message::CurrentShift(current.name, today.format(DATE_FORMAT).to_string()));
    }
    Ok(())
}
