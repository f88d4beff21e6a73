use crate::libs::session::Squad;
use rusqlite::{params, Connection, Result};

const INSERT_SQUAD: &str = "INSERT OR REPLACE INTO squads (id, name, color) VALUES (?1, ?2, ?3)";
const SELECT_SQUADS: &str = "SELECT id, name, color FROM squads ORDER BY name";

pub struct Squads<'a> {
    conn: &'a Connection,
}

impl<'a> Squads<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Squads { conn }
    }

    pub fn insert(&self, squad: &Squad) -> Result<()> {
        self.conn.execute(INSERT_SQUAD, params![squad.id, squad.name, squad.color])?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Squad>> {
        let mut stmt = self.conn.prepare(SELECT_SQUADS)?;
        let squads = stmt
            .query_map([], |row| {
                Ok(Squad {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(squads)
    }
}
