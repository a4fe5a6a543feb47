#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION ===
    AppTitle,
    LoggedInAs(String, String), // full name, role
    Goodbye,
    ActionFailed(String),
    InvalidInput(String),
    PromptSelectOption,

    // === MENU ENTRIES ===
    MenuAttendance,
    MenuEmployees,
    MenuShifts,
    MenuAdmins,
    MenuReports,
    MenuExit,
    MenuBack,
    MenuScan,
    MenuManualEntry,
    MenuTodayAttendance,
    MenuAddEmployee,
    MenuViewEmployees,
    MenuUpdateEmployee,
    MenuDeleteEmployee,
    MenuAddShift,
    MenuViewShifts,
    MenuAssignShift,
    MenuViewAssignments,
    MenuAddAdmin,
    MenuViewAdmins,
    MenuChangePassword,
    MenuDeleteAdmin,
    MenuDailyReport,
    MenuRangeReport,
    MenuEmployeeSummary,
    MenuExportCsv,

    // === LOGIN MESSAGES ===
    LoginHeader,
    PromptUsername,
    PromptPassword,
    LoginWelcome(String, String), // full name, role
    LoginFailed(u32),             // remaining attempts
    LoginAttemptsExhausted,
    DefaultAdminCreated(String, String), // username, password
    DefaultCredentialsInUse,

    // === ATTENDANCE MESSAGES ===
    ScanInstructions,
    PromptBarcode,
    BarcodeNotFound(String),
    TimeInRecorded(String, String),  // name, time
    TimeOutRecorded(String, String), // name, time
    AttendanceAlreadyComplete(String),
    ManualModeTimeIn,
    ManualModeTimeOut,
    ManualModeBoth,
    ManualModeCancel,
    PromptManualMode,
    PromptDate,
    PromptTimeIn,
    PromptTimeOut,
    PromptAttendanceStatus,
    PromptCustomStatus,
    ManualTimeInRecorded(String, String, String),          // name, date, time
    ManualTimeOutRecorded(String, String, String),         // name, date, time
    ManualBothRecorded(String, String, String, String),    // name, date, in, out
    AttendanceRecordUpdated,
    TodayAttendanceHeader(String), // date
    NoAttendanceToday,

    // === EMPLOYEE MESSAGES ===
    PromptEmployeeName,
    PromptBarcodeId,
    PromptDepartment,
    PromptPosition,
    PromptHireDate,
    PromptEmployeeStatus,
    PromptSelectEmployee,
    EmployeeAdded(String),
    EmployeeBarcodeExists(String),
    EmployeeListHeader,
    NoEmployeesFound,
    UpdatingEmployee(String),
    EmployeeUpdated,
    EmployeeNotFound,
    ConfirmDeleteEmployee(String),
    EmployeeDeleted(String),
    EmployeeHasHistory(String, usize, usize), // name, attendance, assignments
    OperationCancelled,

    // === SHIFT MESSAGES ===
    PromptShiftName,
    PromptShiftStart,
    PromptShiftEnd,
    PromptShiftDescription,
    PromptSelectShift,
    PromptEffectiveDate,
    ShiftAdded(String, i64), // name, id
    ShiftListHeader,
    NoShiftsFound,
    ShiftAssigned(String, String, String), // shift, employee, date
    AssignmentsHeader(String),             // employee
    NoAssignments(String),                 // employee
    CurrentShift(String, String),          // shift, date

    // === ADMIN MESSAGES ===
    PromptFullName,
    PromptNewPassword,
    PromptConfirmPassword,
    PromptCurrentPassword,
    PromptAdminRole,
    PromptSelectAdmin,
    PasswordsDoNotMatch,
    AdminAdded(String),
    AdminUsernameExists(String),
    AdminListHeader,
    NoAdminsFound,
    IncorrectCurrentPassword,
    PasswordChanged,
    AccessDenied(String),
    CannotDeleteLastAdmin,
    CannotDeleteSelf,
    ConfirmDeleteAdmin(String),
    AdminDeleted(String),
    AdminNotFound,

    // === REPORT MESSAGES ===
    PromptStartDate,
    PromptEndDate,
    PromptExportPath,
    DailyReportHeader(String),           // date
    RangeReportHeader(String, String),   // start, end
    EmployeeSummaryHeader(String, String, String), // name, start, end
    SummaryHeader,
    NoRecordsForDate,
    NoRecordsForRange,
    NoRecordsForEmployee,
    ExportCompleted(usize, String), // rows, path

    // === CONFIGURATION MESSAGES ===
    PromptSelectModules,
    ConfigModuleStorage,
    ConfigModuleSecurity,
    PromptDbPath,
    PromptMaxLoginAttempts,
    MaxLoginAttemptsRange,
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32, u32), // current, latest
    DatabaseNeedsUpdate(u32),  // pending
    MigrationHistory,
    NoMigrationsApplied,
}
