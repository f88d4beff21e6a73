use crate::libs::session::Location;
use rusqlite::{params, Connection, Result};

const INSERT_LOCATION: &str = "INSERT OR REPLACE INTO locations (id, name) VALUES (?1, ?2)";
const SELECT_LOCATIONS: &str = "SELECT id, name FROM locations ORDER BY id";

pub struct Locations<'a> {
    conn: &'a Connection,
}

impl<'a> Locations<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Locations { conn }
    }

    pub fn insert(&self, location: &Location) -> Result<()> {
        self.conn.execute(INSERT_LOCATION, params![location.id, location.name])?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Location>> {
        let mut stmt = self.conn.prepare(SELECT_LOCATIONS)?;
        let locations = stmt
            .query_map([], |row| Ok(Location { id: row.get(0)?, name: row.get(1)? }))?
            .collect::<Result<Vec<_>>>()?;

        Ok(locations)
    }
}
