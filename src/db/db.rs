use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::Connection;
use std::path::Path;
use std::str::FromStr;

pub const DB_FILE_NAME: &str = "poolside.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured store and applies pending migrations.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_file_path = config.database_path(&DataStorage::new())?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// In-memory store with the full schema.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens the configured store as-is, for inspecting migration state.
    pub fn new_without_migrations() -> Result<Connection> {
        let config = Config::read()?;
        let db_file_path = config.database_path(&DataStorage::new())?;
        Ok(Connection::open(db_file_path)?)
    }
}

/// Parses a text column through `FromStr`, reporting failures as a column
/// conversion error.
pub(crate) fn parse_column<T>(index: usize, value: String) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, e.into()))
}
