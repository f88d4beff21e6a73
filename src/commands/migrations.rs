//! Schema inspection, available in debug builds only.

use crate::db::db::Db;
use crate::db::migrations::{get_db_version, MigrationManager};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Schema version and the migrations still to run
    Status,
    /// Applied migrations with their timestamps
    History,
    /// Run pending migrations now instead of on next open
    Apply,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    match args.command {
        MigrationsCommand::Status => status(),
        MigrationsCommand::History => history(),
        MigrationsCommand::Apply => {
            Db::new()?;
            msg_success!(Message::AllMigrationsCompleted);
            Ok(())
        }
    }
}

fn status() -> Result<()> {
    let conn = Db::new_without_migrations()?;
    msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));

    let pending = MigrationManager::new().pending(&conn)?;
    if pending.is_empty() {
        msg_info!(Message::DatabaseUpToDate);
        return Ok(());
    }

    msg_info!(Message::DatabaseNeedsUpdate);
    for (version, name) in pending {
        msg_print!(format!("  v{}: {}", version, name));
    }
    Ok(())
}

fn history() -> Result<()> {
    let conn = Db::new_without_migrations()?;
    if get_db_version(&conn)? == 0 {
        msg_info!(Message::DatabaseNeedsUpdate);
        return Ok(());
    }

    msg_print!(Message::MigrationHistory, true);
    let mut table = Table::new();
    table.add_row(row!["VERSION", "NAME", "APPLIED"]);
    for (version, name, applied_at) in MigrationManager::new().get_migration_history(&conn)? {
        table.add_row(row![version, name, applied_at]);
    }
    table.printstd();
    Ok(())
}
