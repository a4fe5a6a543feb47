use super::messages::Message;
use super::report::{DailyReport, EmployeeSummary, RangeReport, StatusCounts};
use super::session::Session;
use crate::db::admins::AdminUser;
use crate::db::attendance::AttendanceRecord;
use crate::db::employees::Employee;
use crate::db::migrations::AppliedMigration;
use crate::db::shifts::{Shift, ShiftAssignment};
use crate::libs::input::TIME_FORMAT;
use anyhow::Result;
use chrono::NaiveTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Screen banner with the logged-in operator, if any.
    pub fn header(title: &str, session: Option<&Session>) {
        let rule = "=".repeat(50);
        println!("\n{}", rule);
        println!("=== {:^42} ===", title);
        println!("{}", rule);
        if let Some(session) = session {
            println!(
                "{}",
                Message::LoggedInAs(session.admin.full_name.clone(), session.admin.role.to_string())
            );
        }
        println!();
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "BARCODE", "DEPARTMENT", "POSITION", "HIRED", "STATUS"]);
        for employee in employees {
            table.add_row(row![
                employee.id.unwrap_or(0),
                employee.name,
                employee.barcode_id,
                employee.department,
                employee.position,
                employee.hire_date,
                employee.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn shifts(shifts: &[Shift]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "START", "END", "DESCRIPTION"]);
        for shift in shifts {
            table.add_row(row![
                shift.id.unwrap_or(0),
                shift.name,
                shift.start_time.format("%H:%M"),
                shift.end_time.format("%H:%M"),
                shift.description.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn assignments(assignments: &[ShiftAssignment]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SHIFT", "EFFECTIVE FROM"]);
        for assignment in assignments {
            table.add_row(row![
                assignment.id.unwrap_or(0),
                assignment.shift_name.as_deref().unwrap_or("-"),
                assignment.effective_date
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn admins(admins: &[AdminUser]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USERNAME", "FULL NAME", "ROLE", "LAST LOGIN"]);
        for admin in admins {
            let last_login = admin
                .last_login
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string());
            table.add_row(row![admin.id, admin.username, admin.full_name, admin.role, last_login]);
        }
        table.printstd();

        Ok(())
    }

    /// Roster of one or more days.
    pub fn attendance(records: &[AttendanceRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "ID", "NAME", "TIME IN", "TIME OUT", "STATUS"]);
        for record in records {
            table.add_row(row![
                record.date,
                record.employee_id,
                record.employee_name,
                format_time(record.time_in),
                format_time(record.time_out),
                record.status.as_ref().map(|s| s.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_report(report: &DailyReport) -> Result<()> {
        Self::attendance(&report.records)?;
        Self::status_counts(&report.counts, report.not_recorded);

        Ok(())
    }

    pub fn range_report(report: &RangeReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PRESENT", "ABSENT", "LATE"]);
        for tally in &report.tallies {
            table.add_row(row![
                tally.employee_id,
                tally.employee_name,
                tally.counts.present,
                tally.counts.absent,
                tally.counts.late
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employee_summary(summary: &EmployeeSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME IN", "TIME OUT", "STATUS"]);
        for record in &summary.records {
            table.add_row(row![
                record.date,
                format_time(record.time_in),
                format_time(record.time_out),
                record.status.as_ref().map(|s| s.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        let counts = &summary.counts;
        println!("\n{}", Message::SummaryHeader);
        println!("Total Days: {}", summary.total_days);
        println!("Present: {} ({:.1}%)", counts.present, summary.percent(counts.present));
        println!("Absent: {} ({:.1}%)", counts.absent, summary.percent(counts.absent));
        println!("Late: {} ({:.1}%)", counts.late, summary.percent(counts.late));
        println!("Not Recorded: {}", summary.not_recorded);
        println!("Attendance Rate: {:.1}%", summary.attendance_rate());

        Ok(())
    }

    pub fn migrations(history: &[AppliedMigration]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for migration in history {
            table.add_row(row![migration.version, migration.name, migration.applied_at]);
        }
        table.printstd();

        Ok(())
    }

    fn status_counts(counts: &StatusCounts, not_recorded: u32) {
        println!("\n{}", Message::SummaryHeader);
        println!("Present: {}", counts.present);
        println!("Absent: {}", counts.absent);
        println!("Late: {}", counts.late);
        if counts.other > 0 {
            println!("Other: {}", counts.other);
        }
        println!("Not Recorded: {}", not_recorded);
    }
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_else(|| "-".to_string())
}
