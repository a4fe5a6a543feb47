//! Schema maintenance for development builds.
//!
//! `status` and `history` only read the `migrations` table; `apply` brings the
//! file up to date without starting the interactive session.

use crate::{
    db::{
        db::Db,
        migrations::{init_with_migrations, schema_status, MigrationManager},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Compare the file's schema version with the latest known one
    Status,
    /// List applied migrations
    History,
    /// Apply pending migrations
    Apply,
}

pub fn cmd(args: MigrationsArgs, db_path: &Path) -> Result<()> {
    let mut conn = Db::new_without_migrations(db_path)?;

    match args.command {
        MigrationsCommand::Status => {
            let status = schema_status(&conn)?;
            msg_print!(Message::DatabaseVersion(status.current, status.latest));
            match status.pending() {
                0 => msg_info!(Message::DatabaseUpToDate),
                pending => msg_info!(Message::DatabaseNeedsUpdate(pending)),
            }
        }
        MigrationsCommand::History => {
            if schema_status(&conn)?.current == 0 {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }
            let history = MigrationManager::new().get_migration_history(&conn)?;
            msg_print!(Message::MigrationHistory, true);
            View::migrations(&history)?;
        }
        MigrationsCommand::Apply => {
            if schema_status(&conn)?.pending() == 0 {
                msg_info!(Message::DatabaseUpToDate);
                return Ok(());
            }
            init_with_migrations(&mut conn)?;
            let status = schema_status(&conn)?;
            msg_success!(Message::DatabaseVersion(status.current, status.latest));
        }
    }

    Ok(())
}
