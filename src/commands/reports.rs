use super::{
    menu::{recover, App},
    prompt,
};
use crate::{
    db::{attendance::Attendance, employees::Employees},
    libs::{
        export::Exporter,
        input::DATE_FORMAT,
        messages::Message,
        report::{DailyReport, DateRange, EmployeeSummary, RangeReport},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Datelike, Local};
use std::path::PathBuf;

pub fn cmd(app: &App) -> Result<()> {
    let items = [
        Message::MenuDailyReport,
        Message::MenuRangeReport,
        Message::MenuEmployeeSummary,
        Message::MenuExportCsv,
        Message::MenuBack,
    ];

    loop {
        app.header(Message::MenuReports);
        match prompt::menu(&items)? {
            0 => recover(handle_daily(app))?,
            1 => recover(handle_range(app))?,
            2 => recover(handle_employee_summary(app))?,
            3 => recover(handle_export(app))?,
            _ => return Ok(()),
        }
    }
}

/// Start and end date prompts; defaults to the current month so far.
fn prompt_range() -> Result<DateRange> {
    let today = Local::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let start = prompt::date(Message::PromptStartDate, month_start)?;
    let end = prompt::date(Message::PromptEndDate, today)?;
    Ok(DateRange::new(start, end)?)
}

fn handle_daily(app: &App) -> Result<()> {
    let date = prompt::date(Message::PromptDate, Local::now().date_naive())?;
    let day = DateRange::single(date);
    let records = Attendance::new(&app.db).get_attendance_records(day.start, day.end, None)?;

    msg_print!(Message::DailyReportHeader(date.format(DATE_FORMAT).to_string()), true);
    if records.is_empty() {
        msg_info!(Message::NoRecordsForDate);
        return Ok(());
    }

    let expected = Employees::new(&app.db).count()? as u32;
    View::daily_report(&DailyReport::build(date, records, expected))?;
    Ok(())
}

fn handle_range(app: &App) -> Result<()> {
    let range = prompt_range()?;
    let records = Attendance::new(&app.db).get_attendance_records(range.start, range.end, None)?;

    msg_print!(
        Message::RangeReportHeader(
            range.start.format(DATE_FORMAT).to_string(),
            range.end.format(DATE_FORMAT).to_string()
        ),
        true
    );
    if records.is_empty() {
        msg_info!(Message::NoRecordsForRange);
        return Ok(());
    }

    View::range_report(&RangeReport::build(range, &records))?;
    Ok(())
}

fn handle_employee_summary(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };
    let Some(employee_id) = employee.id else {
        msg_error!(Message::EmployeeNotFound);
        return Ok(());
    };

    let range = prompt_range()?;
    let records = Attendance::new(&app.db).get_attendance_records(range.start, range.end, Some(employee_id))?;

    msg_print!(
        Message::EmployeeSummaryHeader(
            employee.name.clone(),
            range.start.format(DATE_FORMAT).to_string(),
            range.end.format(DATE_FORMAT).to_string()
        ),
        true
    );
    if records.is_empty() {
        msg_info!(Message::NoRecordsForEmployee);
        return Ok(());
    }

    View::employee_summary(&EmployeeSummary::build(employee, range, records))?;
    Ok(())
}

fn handle_export(app: &App) -> Result<()> {
    let range = prompt_range()?;
    let now = Local::now().naive_local();
    let default_path = Exporter::default_path(now);
    let path = prompt::text_with_default(Message::PromptExportPath, &default_path.to_string_lossy())?;

    let records = Attendance::new(&app.db).get_attendance_records(range.start, range.end, None)?;
    let exporter = Exporter::new(Some(PathBuf::from(path)), now);
    let rows = exporter.export_attendance(&records)?;

    msg_success!(Message::ExportCompleted(rows, exporter.output_path().display().to_string()));
    Ok(())
}
