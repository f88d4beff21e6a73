//! Versioned schema migrations for the snapshot store.
//!
//! Each migration runs inside the same transaction as the others pending at
//! startup and is recorded in the `migrations` table, so a store is always
//! either fully at a version or untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use poolside::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("poolside.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every schema change, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: reference tables and sessions
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS squads (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    color TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS locations (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS coaches (
                    id INTEGER PRIMARY KEY,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS swimmers (
                    id INTEGER PRIMARY KEY,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    squad_id INTEGER NOT NULL,
                    date_of_birth DATE NOT NULL
                )",
                [],
            )?;

            // No foreign keys on squad_id or location_id; dangling ids render as "Unknown".
            tx.execute(
                "CREATE TABLE IF NOT EXISTS sessions (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    start_time TEXT NOT NULL,
                    end_time TEXT NOT NULL,
                    squad_id INTEGER NOT NULL,
                    location_id INTEGER NOT NULL,
                    focus TEXT NOT NULL,
                    content TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS session_coaches (
                    session_id INTEGER NOT NULL,
                    role TEXT NOT NULL,
                    coach_id INTEGER NOT NULL,
                    PRIMARY KEY (session_id, role),
                    FOREIGN KEY (session_id) REFERENCES sessions(id) ON DELETE CASCADE
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_location_date ON sessions(location_id, date)", [])?;
            Ok(())
        });

        // Version 2: attendance register
        self.add_migration(2, "create_attendance", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS attendance (
                    id INTEGER PRIMARY KEY,
                    session_id INTEGER NOT NULL,
                    swimmer_id INTEGER NOT NULL,
                    status TEXT NOT NULL,
                    notes TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_swimmer ON attendance(swimmer_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_session ON attendance(session_id)", [])?;
            Ok(())
        });

        // Version 3: per-stroke distance logged against a session
        self.add_migration(3, "add_session_distances", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS session_distances (
                    session_id INTEGER PRIMARY KEY,
                    freestyle INTEGER NOT NULL DEFAULT 0,
                    backstroke INTEGER NOT NULL DEFAULT 0,
                    breaststroke INTEGER NOT NULL DEFAULT 0,
                    butterfly INTEGER NOT NULL DEFAULT 0,
                    individual_medley INTEGER NOT NULL DEFAULT 0,
                    kick INTEGER NOT NULL DEFAULT 0,
                    drill INTEGER NOT NULL DEFAULT 0,
                    pull INTEGER NOT NULL DEFAULT 0,
                    total INTEGER NOT NULL DEFAULT 0,
                    FOREIGN KEY (session_id) REFERENCES sessions(id) ON DELETE CASCADE
                )",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        if crate::libs::messages::macros::is_debug_mode() {
            msg_success!(Message::AllMigrationsCompleted);
        }

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
            [],
            |row| row.get(0),
        )?;
        if !exists {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Version and name of every migration the store has not applied yet.
    pub fn pending(&self, conn: &Connection) -> Result<Vec<(u32, &'static str)>> {
        let current = self.get_current_version(conn)?;
        Ok(self
            .migrations
            .iter()
            .filter(|m| m.version > current)
            .map(|m| (m.version, m.name))
            .collect())
    }

    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}
