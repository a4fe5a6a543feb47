//! dialoguer wrappers shared by the menu screens.
//!
//! Date and time prompts re-ask until the input parses; blank input takes the
//! offered default.

use crate::{
    db::{
        db::Db,
        employees::{Employee, Employees},
        shifts::{Shift, Shifts},
    },
    libs::{
        input::{parse_date_or, parse_time, parse_time_or, DATE_FORMAT, TIME_FORMAT},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

/// Menu of `items`; returns the chosen index.
pub fn menu(items: &[Message]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectOption.to_string())
        .items(items)
        .default(0)
        .interact()?)
}

/// Picker that can be dismissed with Esc.
pub fn select<T: ToString>(prompt: Message, items: &[T]) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(0)
        .interact_opt()?)
}

/// Free text; may be empty.
pub fn text(prompt: Message) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Free text pre-filled with the current value.
pub fn text_with_default(prompt: Message, default: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .interact_text()?)
}

pub fn date(prompt: Message, default: NaiveDate) -> Result<NaiveDate> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format(DATE_FORMAT).to_string())
        .validate_with(move |input: &String| parse_date_or(input, default).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(parse_date_or(&input, default)?)
}

pub fn time(prompt: Message, default: NaiveTime) -> Result<NaiveTime> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format(TIME_FORMAT).to_string())
        .validate_with(move |input: &String| parse_time_or(input, default).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(parse_time_or(&input, default)?)
}

/// Time without a default.
pub fn required_time(prompt: Message) -> Result<NaiveTime> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| parse_time(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(parse_time(&input)?)
}

pub fn password(prompt: Message) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact()?)
}

pub fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Lets the operator pick an employee. `None` when there are none or the
/// picker was dismissed.
pub fn select_employee(db: &Db) -> Result<Option<Employee>> {
    let mut employees = Employees::new(db).list()?;
    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(None);
    }

    let items: Vec<String> = employees
        .iter()
        .map(|e| format!("{} (ID: {}, Barcode: {})", e.name, e.id.unwrap_or(0), e.barcode_id))
        .collect();

    Ok(select(Message::PromptSelectEmployee, &items)?.map(|index| employees.swap_remove(index)))
}

pub fn select_shift(db: &Db) -> Result<Option<Shift>> {
    let mut shifts = Shifts::new(db).list()?;
    if shifts.is_empty() {
        msg_info!(Message::NoShiftsFound);
        return Ok(None);
    }

    let items: Vec<String> = shifts
        .iter()
        .map(|s| format!("{} ({} - {})", s.name, s.start_time.format("%H:%M"), s.end_time.format("%H:%M")))
        .collect();

    Ok(select(Message::PromptSelectShift, &items)?.map(|index| shifts.swap_remove(index)))
}
