//! Configuration management for the punch application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! resolved by [`DataStorage`]. Every module is optional, so a missing file or
//! a partially filled one still yields a working configuration.
//!
//! ## Modules
//!
//! - **Storage**: location of the SQLite database file
//! - **Security**: login retry budget
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{} login attempts allowed", config.max_login_attempts());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "punch.db";

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "PUNCH_DB";

/// Number of login attempts before the process exits.
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u32 = 3;

/// A module offered by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the attendance database lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Absolute or relative path to the SQLite file.
    pub db_path: String,
}

/// Authentication settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SecurityConfig {
    /// Failed logins tolerated before the process terminates.
    pub max_login_attempts: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        SecurityConfig {
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
        }
    }
}

/// Root configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but an unreadable or malformed file yields
    /// defaults so the setup wizard can overwrite it.
    pub fn read_or_default() -> Config {
        match Self::read() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if one exists.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn max_login_attempts(&self) -> u32 {
        self.security
            .as_ref()
            .map(|security| security.max_login_attempts)
            .filter(|attempts| *attempts > 0)
            .unwrap_or(DEFAULT_MAX_LOGIN_ATTEMPTS)
    }

    /// Resolves the database path.
    ///
    /// Precedence: `PUNCH_DB` environment variable, then the storage module,
    /// then `punch.db` in the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(storage) = &self.storage {
            if !storage.db_path.trim().is_empty() {
                return Ok(PathBuf::from(&storage.db_path));
            }
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }

    /// Interactive setup wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "security".to_string(),
                name: "Security".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = match &config.storage {
                        Some(storage) => storage.db_path.clone(),
                        None => DataStorage::new().get_path(DB_FILE_NAME)?.to_string_lossy().into_owned(),
                    };
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_path: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbPath.to_string())
                            .default(default)
                            .interact_text()?,
                    });
                }
                "security" => {
                    let default = config.security.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSecurity);
                    config.security = Some(SecurityConfig {
                        max_login_attempts: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxLoginAttempts.to_string())
                            .default(default.max_login_attempts)
                            .validate_with(|value: &u32| {
                                if *value > 0 {
                                    Ok(())
                                } else {
                                    Err(Message::MaxLoginAttemptsRange.to_string())
                                }
                            })
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
