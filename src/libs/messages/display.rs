//! Display implementation for punch messages.
//!
//! Every piece of user-facing text is produced here so that the wording of
//! prompts, menu entries and results stays in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION ===
            Message::AppTitle => format!("{} v{}", APP_METADATA_TITLE, APP_METADATA_VERSION),
            Message::LoggedInAs(name, role) => format!("Logged in as: {} ({})", name, role),
            Message::Goodbye => "Goodbye!".to_string(),
            Message::ActionFailed(error) => format!("Action failed: {}", error),
            Message::InvalidInput(error) => format!("Invalid input: {}", error),
            Message::PromptSelectOption => "Select an option".to_string(),

            // === MENU ENTRIES ===
            Message::MenuAttendance => "Attendance Operations (with barcode scanner)".to_string(),
            Message::MenuEmployees => "Employee Management".to_string(),
            Message::MenuShifts => "Shift Management".to_string(),
            Message::MenuAdmins => "Admin Security".to_string(),
            Message::MenuReports => "Reports".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuBack => "Back to Main Menu".to_string(),
            Message::MenuScan => "Record Time In/Out (Barcode Scanner)".to_string(),
            Message::MenuManualEntry => "Manual Attendance Entry".to_string(),
            Message::MenuTodayAttendance => "View Today's Attendance".to_string(),
            Message::MenuAddEmployee => "Add New Employee".to_string(),
            Message::MenuViewEmployees => "View All Employees".to_string(),
            Message::MenuUpdateEmployee => "Update Employee".to_string(),
            Message::MenuDeleteEmployee => "Delete Employee".to_string(),
            Message::MenuAddShift => "Add New Shift".to_string(),
            Message::MenuViewShifts => "View All Shifts".to_string(),
            Message::MenuAssignShift => "Assign Shift to Employee".to_string(),
            Message::MenuViewAssignments => "View Employee Shift Assignments".to_string(),
            Message::MenuAddAdmin => "Add New Admin".to_string(),
            Message::MenuViewAdmins => "View All Admins".to_string(),
            Message::MenuChangePassword => "Change Password".to_string(),
            Message::MenuDeleteAdmin => "Delete Admin".to_string(),
            Message::MenuDailyReport => "Daily Attendance Report".to_string(),
            Message::MenuRangeReport => "Date Range Attendance Report".to_string(),
            Message::MenuEmployeeSummary => "Employee Attendance Summary".to_string(),
            Message::MenuExportCsv => "Export Attendance to CSV".to_string(),

            // === LOGIN MESSAGES ===
            Message::LoginHeader => "Admin Login".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::LoginWelcome(name, role) => format!("Welcome, {} ({})!", name, role),
            Message::LoginFailed(remaining) => {
                format!("Invalid username or password. {} attempts remaining.", remaining)
            }
            Message::LoginAttemptsExhausted => "Maximum login attempts reached. System will exit.".to_string(),
            Message::DefaultAdminCreated(username, password) => format!(
                "No admin accounts found. Created default Super Admin '{}' with password '{}'",
                username, password
            ),
            Message::DefaultCredentialsInUse => {
                "You are using the default admin password. Change it under Admin Security.".to_string()
            }

            // === ATTENDANCE MESSAGES ===
            Message::ScanInstructions => "Scan employee barcode, or enter '0' (or nothing) to finish".to_string(),
            Message::PromptBarcode => "Barcode".to_string(),
            Message::BarcodeNotFound(barcode) => format!("No employee with barcode '{}'. Please try again.", barcode),
            Message::TimeInRecorded(name, time) => format!("Time In recorded for {} at {}", name, time),
            Message::TimeOutRecorded(name, time) => format!("Time Out recorded for {} at {}", name, time),
            Message::AttendanceAlreadyComplete(name) => {
                format!("{} has already completed attendance for today.", name)
            }
            Message::ManualModeTimeIn => "Record Time In".to_string(),
            Message::ManualModeTimeOut => "Record Time Out".to_string(),
            Message::ManualModeBoth => "Record Both".to_string(),
            Message::ManualModeCancel => "Cancel".to_string(),
            Message::PromptManualMode => "What to record".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTimeIn => "Time in (HH:MM[:SS])".to_string(),
            Message::PromptTimeOut => "Time out (HH:MM[:SS])".to_string(),
            Message::PromptAttendanceStatus => "Status".to_string(),
            Message::PromptCustomStatus => "Custom status label".to_string(),
            Message::ManualTimeInRecorded(name, date, time) => {
                format!("Recorded Time In for {} on {} at {}", name, date, time)
            }
            Message::ManualTimeOutRecorded(name, date, time) => {
                format!("Recorded Time Out for {} on {} at {}", name, date, time)
            }
            Message::ManualBothRecorded(name, date, time_in, time_out) => {
                format!("Recorded attendance for {} on {}: In {}, Out {}", name, date, time_in, time_out)
            }
            Message::AttendanceRecordUpdated => "Existing record updated.".to_string(),
            Message::TodayAttendanceHeader(date) => format!("Attendance for {}", date),
            Message::NoAttendanceToday => "No attendance records for today.".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::PromptEmployeeName => "Full name".to_string(),
            Message::PromptBarcodeId => "Barcode ID".to_string(),
            Message::PromptDepartment => "Department".to_string(),
            Message::PromptPosition => "Position".to_string(),
            Message::PromptHireDate => "Hire date (YYYY-MM-DD)".to_string(),
            Message::PromptEmployeeStatus => "Status".to_string(),
            Message::PromptSelectEmployee => "Select employee".to_string(),
            Message::EmployeeAdded(name) => format!("Employee {} added successfully.", name),
            Message::EmployeeBarcodeExists(barcode) => {
                format!("Error adding employee. Barcode ID '{}' already exists.", barcode)
            }
            Message::EmployeeListHeader => "Employees".to_string(),
            Message::NoEmployeesFound => "No employees found.".to_string(),
            Message::UpdatingEmployee(name) => format!("Updating {}:", name),
            Message::EmployeeUpdated => "Employee updated successfully.".to_string(),
            Message::EmployeeNotFound => "Employee not found.".to_string(),
            Message::ConfirmDeleteEmployee(name) => format!("Delete employee {}?", name),
            Message::EmployeeDeleted(name) => format!("Employee {} deleted successfully.", name),
            Message::EmployeeHasHistory(name, attendance, assignments) => format!(
                "{} has {} attendance record(s) and {} shift assignment(s) and cannot be deleted. Set the status to Inactive instead.",
                name, attendance, assignments
            ),
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === SHIFT MESSAGES ===
            Message::PromptShiftName => "Shift name".to_string(),
            Message::PromptShiftStart => "Start time (HH:MM)".to_string(),
            Message::PromptShiftEnd => "End time (HH:MM)".to_string(),
            Message::PromptShiftDescription => "Description (optional)".to_string(),
            Message::PromptSelectShift => "Select shift".to_string(),
            Message::PromptEffectiveDate => "Effective date (YYYY-MM-DD)".to_string(),
            Message::ShiftAdded(name, id) => format!("Shift '{}' added successfully with ID {}.", name, id),
            Message::ShiftListHeader => "Shifts".to_string(),
            Message::NoShiftsFound => "No shifts found. Please create shifts first.".to_string(),
            Message::ShiftAssigned(shift, employee, date) => {
                format!("Shift '{}' assigned to {} effective {}.", shift, employee, date)
            }
            Message::AssignmentsHeader(name) => format!("Shift assignments for {}", name),
            Message::NoAssignments(name) => format!("{} has no shift assignments.", name),
            Message::CurrentShift(shift, date) => format!("Shift in effect on {}: {}", date, shift),

            // === ADMIN MESSAGES ===
            Message::PromptFullName => "Full name".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PromptCurrentPassword => "Current password".to_string(),
            Message::PromptAdminRole => "Role".to_string(),
            Message::PromptSelectAdmin => "Select admin to delete (you cannot delete yourself)".to_string(),
            Message::PasswordsDoNotMatch => "Passwords do not match.".to_string(),
            Message::AdminAdded(username) => format!("Admin user '{}' added successfully.", username),
            Message::AdminUsernameExists(username) => {
                format!("Error adding admin. Username '{}' already exists.", username)
            }
            Message::AdminListHeader => "Admin users".to_string(),
            Message::NoAdminsFound => "No admin users found.".to_string(),
            Message::IncorrectCurrentPassword => "Incorrect current password.".to_string(),
            Message::PasswordChanged => "Password changed successfully.".to_string(),
            Message::AccessDenied(reason) => format!("Access denied: {}.", reason),
            Message::CannotDeleteLastAdmin => "Cannot delete the only admin user.".to_string(),
            Message::CannotDeleteSelf => "You cannot delete yourself.".to_string(),
            Message::ConfirmDeleteAdmin(username) => format!("Delete admin '{}'?", username),
            Message::AdminDeleted(username) => format!("Admin '{}' deleted successfully.", username),
            Message::AdminNotFound => "Admin user not found.".to_string(),

            // === REPORT MESSAGES ===
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptEndDate => "End date (YYYY-MM-DD)".to_string(),
            Message::PromptExportPath => "Output file".to_string(),
            Message::DailyReportHeader(date) => format!("Daily attendance report for {}", date),
            Message::RangeReportHeader(start, end) => format!("Attendance from {} to {}", start, end),
            Message::EmployeeSummaryHeader(name, start, end) => {
                format!("Attendance summary for {} from {} to {}", name, start, end)
            }
            Message::SummaryHeader => "Summary:".to_string(),
            Message::NoRecordsForDate => "No attendance records for this date.".to_string(),
            Message::NoRecordsForRange => "No attendance records for this date range.".to_string(),
            Message::NoRecordsForEmployee => {
                "No attendance records for this employee in the selected date range.".to_string()
            }
            Message::ExportCompleted(rows, path) => format!("Exported {} record(s) to {}", rows, path),

            // === CONFIGURATION MESSAGES ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleSecurity => "Security settings".to_string(),
            Message::PromptDbPath => "Database file".to_string(),
            Message::PromptMaxLoginAttempts => "Login attempts before exit".to_string(),
            Message::MaxLoginAttemptsRange => "Must be at least 1".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(current, latest) => format!("Schema version {} (latest known: {})", current, latest),
            Message::DatabaseNeedsUpdate(pending) => {
                format!("{} migration(s) pending; run `punch migrations apply` or start the menu", pending)
            }
            Message::MigrationHistory => "Applied migrations".to_string(),
            Message::NoMigrationsApplied => "No migrations have been applied to this file yet.".to_string(),
        };

        write!(f, "{}", text)
    }
}
