//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function; [`Cli::menu`] parses the arguments and dispatches.

pub mod export;
pub mod import;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod search;
pub mod squad;
pub mod stats;
pub mod timetable;

use crate::db::db::Db;
use crate::db::snapshots::Snapshots;
use crate::libs::data_storage::{APP_NAME, APP_VERSION};
use crate::libs::snapshot::Snapshot;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Load a JSON snapshot into the local store", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Show the collision-free day or week timetable")]
    Timetable(timetable::TimetableArgs),
    #[command(about = "Attendance, punctuality and distance for a swimmer", arg_required_else_help = true)]
    Stats(stats::StatsArgs),
    #[command(about = "Attendance roll-up for a squad", arg_required_else_help = true)]
    Squad(squad::SquadArgs),
    #[command(about = "Search sessions by squad, coach, location, focus or content")]
    Search(search::SearchArgs),
    #[command(about = "Export statistics or a timetable to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Timetable(args) => timetable::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Squad(args) => squad::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// `today` or `YYYY-MM-DD`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}

/// Reference time for statistics: the current moment for `today`, the end
/// of the given day otherwise.
pub fn reference_time(date_str: &str) -> Result<NaiveDateTime> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().naive_local());
    }
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    Ok(parse_date(date_str)?.and_time(end_of_day))
}

/// Everything in the configured store.
pub(crate) fn load_snapshot() -> Result<Snapshot> {
    let mut db = Db::new()?;
    Snapshots::new(&mut db.conn).load()
}
