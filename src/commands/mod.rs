//! Command-line entry point and the interactive menu screens.
//!
//! Without a subcommand the binary opens the database, logs an operator in
//! and runs the menu tree. Subcommands cover setup and maintenance.

pub mod admins;
pub mod attendance;
pub mod employees;
pub mod init;
pub mod login;
pub mod menu;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod prompt;
pub mod reports;
pub mod shifts;

use crate::{db::db::Db, libs::config::Config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Dispatches parsed arguments. `init` never reads the existing
    /// configuration, so it can repair a broken file.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(args)) => init::cmd(args),
            #[cfg(debug_assertions)]
            Some(Commands::Migrations(args)) => {
                let (_, db_path) = resolve(self.db)?;
                migrations::cmd(args, &db_path)
            }
            None => {
                let (config, db_path) = resolve(self.db)?;
                menu::cmd(Db::open(&db_path)?, config)
            }
        }
    }
}

/// Reads the configuration and picks the database file, `--db` first.
fn resolve(db: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let config = Config::read()?;
    let db_path = match db {
        Some(path) => path,
        None => config.db_path()?,
    };
    Ok((config, db_path))
}
