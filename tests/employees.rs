#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use punch::db::attendance::{Attendance, AttendanceStatus};
    use punch::db::db::Db;
    use punch::db::employees::{Employee, EmployeeDeletion, EmployeeStatus, Employees};
    use punch::db::shifts::{Shift, Shifts};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeeTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for EmployeeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("punch.db")).unwrap();
            EmployeeTestContext { db, _temp_dir: temp_dir }
        }
    }

    fn hired() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn add(employees: &Employees, name: &str, barcode: &str) -> i64 {
        assert!(employees.insert(&Employee::new(name, barcode, "Ops", "Clerk", hired())).unwrap());
        employees.get_by_barcode(barcode).unwrap().unwrap().id.unwrap()
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_duplicate_barcode_is_rejected(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);

        assert!(employees.insert(&Employee::new("Ann Lee", "E100", "Ops", "Clerk", hired())).unwrap());
        assert!(!employees.insert(&Employee::new("Bob Ray", "E100", "Sales", "Rep", hired())).unwrap());

        assert_eq!(employees.count().unwrap(), 1);
        assert_eq!(employees.get_by_barcode("E100").unwrap().unwrap().name, "Ann Lee");
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_employee_round_trip(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = add(&employees, "Ann Lee", "E100");

        let fetched = employees.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.barcode_id, "E100");
        assert_eq!(fetched.hire_date, hired());
        assert_eq!(fetched.status, EmployeeStatus::Active);

        // Scanners sometimes append whitespace
        assert!(employees.get_by_barcode(" E100 \n").unwrap().is_some());
        assert!(employees.get_by_barcode("E999").unwrap().is_none());
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_list_is_ordered_by_name(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        add(&employees, "Cy Moss", "E3");
        add(&employees, "Ann Lee", "E1");
        add(&employees, "Bob Ray", "E2");

        let names: Vec<String> = employees.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Ann Lee", "Bob Ray", "Cy Moss"]);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_keeps_barcode(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = add(&employees, "Ann Lee", "E100");

        let mut employee = employees.get_by_id(id).unwrap().unwrap();
        employee.name = "Ann Lee-Park".to_string();
        employee.department = "Finance".to_string();
        employee.status = EmployeeStatus::Inactive;
        assert!(employees.update(&employee).unwrap());

        let updated = employees.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.name, "Ann Lee-Park");
        assert_eq!(updated.department, "Finance");
        assert_eq!(updated.status, EmployeeStatus::Inactive);
        assert_eq!(updated.barcode_id, "E100");
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_delete_without_history(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = add(&employees, "Ann Lee", "E100");

        assert_eq!(employees.delete(id).unwrap(), EmployeeDeletion::Deleted);
        assert!(employees.get_by_id(id).unwrap().is_none());
        assert_eq!(employees.delete(id).unwrap(), EmployeeDeletion::NotFound);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_delete_with_history_is_rejected(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = add(&employees, "Ann Lee", "E100");

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        Attendance::new(&ctx.db)
            .record_attendance(id, day, NaiveTime::from_hms_opt(9, 0, 0), None, Some(AttendanceStatus::Present))
            .unwrap();
        let shifts = Shifts::new(&ctx.db);
        let shift_id = shifts
            .insert(&Shift::new(
                "Morning",
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                None,
            ))
            .unwrap();
        shifts.assign(id, shift_id, day).unwrap();

        assert_eq!(
            employees.delete(id).unwrap(),
            EmployeeDeletion::HasHistory {
                attendance: 1,
                assignments: 1
            }
        );
        assert!(employees.get_by_id(id).unwrap().is_some());
        assert_eq!(Attendance::new(&ctx.db).get(id, day).unwrap().unwrap().employee_id, id);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_store_refuses_orphaning_delete(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = add(&employees, "Ann Lee", "E100");
        Attendance::new(&ctx.db)
            .record_attendance(id, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), None, None, None)
            .unwrap();

        let result = ctx.db.conn.execute("DELETE FROM employees WHERE id = ?1", [id]);
        assert!(result.is_err());
    }
}
