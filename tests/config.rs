#[cfg(test)]
mod tests {
    use clap::Parser;
    use punch::commands::Cli;
    use punch::libs::config::{Config, SecurityConfig, StorageConfig, DB_FILE_NAME, DB_PATH_ENV, DEFAULT_MAX_LOGIN_ATTEMPTS};
    use punch::libs::data_storage::DATA_DIR_ENV;
    use std::env;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file mutate process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        data_dir: PathBuf,
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            let data_dir = temp_dir.path().join("data");

            env::set_var(DATA_DIR_ENV, &data_dir);
            env::remove_var(DB_PATH_ENV);

            ConfigTestContext {
                data_dir,
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }

        fn teardown(self) {
            env::remove_var(DATA_DIR_ENV);
            env::remove_var(DB_PATH_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.max_login_attempts(), DEFAULT_MAX_LOGIN_ATTEMPTS);
        assert_eq!(config.db_path().unwrap(), ctx.data_dir.join(DB_FILE_NAME));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                db_path: "/srv/punch/attendance.db".to_string(),
            }),
            security: Some(SecurityConfig { max_login_attempts: 5 }),
        };
        config.save().unwrap();

        assert!(ctx.data_dir.join("config.json").exists());
        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.max_login_attempts(), 5);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_attempts_falls_back_to_default(_ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: None,
            security: Some(SecurityConfig { max_login_attempts: 0 }),
        };
        assert_eq!(config.max_login_attempts(), DEFAULT_MAX_LOGIN_ATTEMPTS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_db_path_precedence(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                db_path: ctx.data_dir.join("configured.db").to_string_lossy().into_owned(),
            }),
            security: None,
        };
        assert_eq!(config.db_path().unwrap(), ctx.data_dir.join("configured.db"));

        env::set_var(DB_PATH_ENV, "/tmp/override.db");
        assert_eq!(config.db_path().unwrap(), PathBuf::from("/tmp/override.db"));

        env::set_var(DB_PATH_ENV, "   ");
        assert_eq!(config.db_path().unwrap(), ctx.data_dir.join("configured.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(ctx.data_dir.join("config.json").exists());

        assert!(Config::delete().unwrap());
        assert!(!ctx.data_dir.join("config.json").exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_falls_back_to_defaults(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(&ctx.data_dir).unwrap();
        std::fs::write(ctx.data_dir.join("config.json"), "{").unwrap();

        assert!(Config::read().is_err());
        assert_eq!(Config::read_or_default(), Config::default());

        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_init_delete_repairs_malformed_file(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(&ctx.data_dir).unwrap();
        let config_path = ctx.data_dir.join("config.json");
        std::fs::write(&config_path, "{").unwrap();

        Cli::try_parse_from(["punch", "init", "--delete"]).unwrap().run().unwrap();

        assert!(!config_path.exists());
    }
}
