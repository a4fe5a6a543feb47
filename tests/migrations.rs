#[cfg(test)]
mod tests {
    use punch::db::db::Db;
    use punch::db::migrations::{get_db_version, init_with_migrations, needs_migration, schema_status, MigrationManager};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        db_path: PathBuf,
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            MigrationTestContext {
                db_path: temp_dir.path().join("punch.db"),
                _temp_dir: temp_dir,
            }
        }
    }

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            > 0
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_migrated(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        for table in ["employees", "shifts", "employee_shifts", "attendance", "admin_users", "migrations"] {
            assert!(table_exists(&db.conn, table), "missing table {}", table);
        }
        assert!(get_db_version(&db.conn).unwrap() > 0);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_history_is_ordered(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();
        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();

        assert!(!history.is_empty());
        let versions: Vec<u32> = history.iter().map(|migration| migration.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        assert_eq!(versions, sorted);
        assert_eq!(*versions.last().unwrap(), get_db_version(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        let version = {
            let db = Db::open(&ctx.db_path).unwrap();
            get_db_version(&db.conn).unwrap()
        };

        let mut conn = Db::new_without_migrations(&ctx.db_path).unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), version);
        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied as u32, version);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unmigrated_connection_needs_migration(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.db_path).unwrap();
        conn.execute(
            "CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            [],
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        let status = schema_status(&conn).unwrap();
        assert_eq!(status.current, 0);
        assert_eq!(status.pending(), MigrationManager::new().latest_version());

        init_with_migrations(&mut conn).unwrap();
        assert!(!needs_migration(&conn).unwrap());
        let status = schema_status(&conn).unwrap();
        assert_eq!(status.current, status.latest);
        assert_eq!(status.pending(), 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_foreign_keys_enforced(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();
        let orphan = db
            .conn
            .execute("INSERT INTO attendance (employee_id, date) VALUES (42, '2024-05-01')", []);
        assert!(orphan.is_err());
    }
}
