#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use punch::db::db::Db;
    use punch::db::employees::{Employee, Employees};
    use punch::db::shifts::{Shift, Shifts};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ShiftTestContext {
        db: Db,
        employee_id: i64,
        _temp_dir: TempDir,
    }

    impl TestContext for ShiftTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("punch.db")).unwrap();

            let employees = Employees::new(&db);
            let hired = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
            employees.insert(&Employee::new("Ann Lee", "E100", "Ops", "Clerk", hired)).unwrap();
            let employee_id = employees.get_by_barcode("E100").unwrap().unwrap().id.unwrap();

            ShiftTestContext {
                db,
                employee_id,
                _temp_dir: temp_dir,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shift(name: &str, start: u32, end: u32) -> Shift {
        Shift::new(
            name,
            NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
            None,
        )
    }

    #[test_context(ShiftTestContext)]
    #[test]
    fn test_shift_crud(ctx: &mut ShiftTestContext) {
        let shifts = Shifts::new(&ctx.db);

        let late = shifts.insert(&shift("Late", 14, 22)).unwrap();
        let early = shifts
            .insert(&Shift::new(
                "Early",
                NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                Some("Opening crew".to_string()),
            ))
            .unwrap();

        let listed = shifts.list().unwrap();
        assert_eq!(listed.len(), 2);
        // Ordered by start time
        assert_eq!(listed[0].id, Some(early));
        assert_eq!(listed[1].id, Some(late));
        assert_eq!(listed[0].description.as_deref(), Some("Opening crew"));

        let fetched = shifts.get_by_id(late).unwrap().unwrap();
        assert_eq!(fetched.start_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(fetched.description, None);
    }

    #[test_context(ShiftTestContext)]
    #[test]
    fn test_latest_assignment_not_after_date_wins(ctx: &mut ShiftTestContext) {
        let shifts = Shifts::new(&ctx.db);
        let january = shifts.insert(&shift("January", 8, 16)).unwrap();
        let june = shifts.insert(&shift("June", 12, 20)).unwrap();

        // Inserted out of order on purpose
        shifts.assign(ctx.employee_id, june, date(2024, 6, 1)).unwrap();
        shifts.assign(ctx.employee_id, january, date(2024, 1, 1)).unwrap();

        let in_march = shifts.get_employee_shift(ctx.employee_id, date(2024, 3, 1)).unwrap().unwrap();
        assert_eq!(in_march.id, Some(january));

        let on_switch = shifts.get_employee_shift(ctx.employee_id, date(2024, 6, 1)).unwrap().unwrap();
        assert_eq!(on_switch.id, Some(june));

        assert!(shifts.get_employee_shift(ctx.employee_id, date(2023, 12, 31)).unwrap().is_none());
    }

    #[test_context(ShiftTestContext)]
    #[test]
    fn test_same_day_reassignment_uses_newest(ctx: &mut ShiftTestContext) {
        let shifts = Shifts::new(&ctx.db);
        let first = shifts.insert(&shift("First", 8, 16)).unwrap();
        let second = shifts.insert(&shift("Second", 9, 17)).unwrap();

        shifts.assign(ctx.employee_id, first, date(2024, 2, 1)).unwrap();
        shifts.assign(ctx.employee_id, second, date(2024, 2, 1)).unwrap();

        let current = shifts.get_employee_shift(ctx.employee_id, date(2024, 2, 10)).unwrap().unwrap();
        assert_eq!(current.id, Some(second));
    }

    #[test_context(ShiftTestContext)]
    #[test]
    fn test_assignment_history_newest_first(ctx: &mut ShiftTestContext) {
        let shifts = Shifts::new(&ctx.db);
        let day = shifts.insert(&shift("Day", 8, 16)).unwrap();
        let night = shifts.insert(&shift("Night", 20, 4)).unwrap();

        shifts.assign(ctx.employee_id, day, date(2024, 1, 1)).unwrap();
        shifts.assign(ctx.employee_id, night, date(2024, 6, 1)).unwrap();

        let history = shifts.assignments_for(ctx.employee_id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].effective_date, date(2024, 6, 1));
        assert_eq!(history[0].shift_name.as_deref(), Some("Night"));
        assert_eq!(history[1].shift_id, day);
    }
}
