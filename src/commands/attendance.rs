use super::{
    menu::{recover, App},
    prompt,
};
use crate::{
    db::attendance::{Attendance, AttendanceStatus},
    libs::{
        attendance::{custom_status, is_end_of_scanning, scan, ManualEntry, ManualMode, ScanOutcome},
        input::{DATE_FORMAT, TIME_FORMAT},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd(app: &App) -> Result<()> {
    let items = [
        Message::MenuScan,
        Message::MenuManualEntry,
        Message::MenuTodayAttendance,
        Message::MenuBack,
    ];

    loop {
        app.header(Message::MenuAttendance);
        match prompt::menu(&items)? {
            0 => recover(handle_scan(app))?,
            1 => recover(handle_manual(app))?,
            2 => recover(handle_today(app))?,
            _ => return Ok(()),
        }
    }
}

fn handle_scan(app: &App) -> Result<()> {
    msg_info!(Message::ScanInstructions, true);

    loop {
        let barcode = prompt::text(Message::PromptBarcode)?;
        if is_end_of_scanning(&barcode) {
            return Ok(());
        }

        match scan(&app.db, &barcode, Local::now().naive_local())? {
            ScanOutcome::UnknownBarcode(barcode) => msg_error!(Message::BarcodeNotFound(barcode)),
            ScanOutcome::TimedIn { employee, at } => {
                msg_success!(Message::TimeInRecorded(employee.name, at.format(TIME_FORMAT).to_string()))
            }
            ScanOutcome::TimedOut { employee, at } => {
                msg_success!(Message::TimeOutRecorded(employee.name, at.format(TIME_FORMAT).to_string()))
            }
            ScanOutcome::AlreadyComplete { employee } => {
                msg_warning!(Message::AttendanceAlreadyComplete(employee.name))
            }
        }
    }
}

fn handle_manual(app: &App) -> Result<()> {
    let Some(employee) = prompt::select_employee(&app.db)? else {
        return Ok(());
    };
    let Some(employee_id) = employee.id else {
        msg_error!(Message::EmployeeNotFound);
        return Ok(());
    };

    let modes = [
        Message::ManualModeTimeIn,
        Message::ManualModeTimeOut,
        Message::ManualModeBoth,
        Message::ManualModeCancel,
    ];
    let mode = match prompt::select(Message::PromptManualMode, &modes)? {
        Some(0) => ManualMode::TimeIn,
        Some(1) => ManualMode::TimeOut,
        Some(2) => ManualMode::Both,
        _ => {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    };

    let now = Local::now().naive_local();
    let date = prompt::date(Message::PromptDate, now.date())?;
    let time_in = match mode {
        ManualMode::TimeOut => now.time(),
        _ => prompt::time(Message::PromptTimeIn, now.time())?,
    };
    let time_out = match mode {
        ManualMode::TimeIn => now.time(),
        _ => prompt::time(Message::PromptTimeOut, now.time())?,
    };
    let Some(status) = prompt_status()? else {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    };

    let entry = ManualEntry::new(employee_id, date, mode, time_in, time_out).with_status(status);
    let created = entry.apply(&app.db)?;

    let day = date.format(DATE_FORMAT).to_string();
    let show = |time: Option<chrono::NaiveTime>| time.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default();
    match mode {
        ManualMode::TimeIn => msg_success!(Message::ManualTimeInRecorded(employee.name, day, show(entry.time_in))),
        ManualMode::TimeOut => {
            msg_success!(Message::ManualTimeOutRecorded(employee.name, day, show(entry.time_out)))
        }
        ManualMode::Both => msg_success!(Message::ManualBothRecorded(
            employee.name,
            day,
            show(entry.time_in),
            show(entry.time_out)
        )),
    }
    if !created {
        msg_info!(Message::AttendanceRecordUpdated);
    }

    Ok(())
}

/// Present, Absent, Late or a custom label.
fn prompt_status() -> Result<Option<AttendanceStatus>> {
    let items = ["Present", "Absent", "Late", "Other..."];
    let status = match prompt::select(Message::PromptAttendanceStatus, &items)? {
        Some(0) => AttendanceStatus::Present,
        Some(1) => AttendanceStatus::Absent,
        Some(2) => AttendanceStatus::Late,
        Some(_) => custom_status(&prompt::text(Message::PromptCustomStatus)?)?,
        None => return Ok(None),
    };
    Ok(Some(status))
}

fn handle_today(app: &App) -> Result<()> {
    let today = Local::now().date_naive();
    let records = Attendance::new(&app.db).get_attendance_records(today, today, None)?;

    if records.is_empty() {
        msg_info!(Message::NoAttendanceToday);
        return Ok(());
    }

    msg_print!(Message::TodayAttendanceHeader(today.format(DATE_FORMAT).to_string()), true);
    View::attendance(&records)?;
    Ok(())
}
