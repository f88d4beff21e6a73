use crate::libs::session::Coach;
use rusqlite::{params, Connection, Result};

const INSERT_COACH: &str = "INSERT OR REPLACE INTO coaches (id, first_name, last_name) VALUES (?1, ?2, ?3)";
const SELECT_COACHES: &str = "SELECT id, first_name, last_name FROM coaches ORDER BY last_name, first_name";

pub struct Coaches<'a> {
    conn: &'a Connection,
}

impl<'a> Coaches<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Coaches { conn }
    }

    pub fn insert(&self, coach: &Coach) -> Result<()> {
        self.conn.execute(INSERT_COACH, params![coach.id, coach.first_name, coach.last_name])?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Coach>> {
        let mut stmt = self.conn.prepare(SELECT_COACHES)?;
        let coaches = stmt
            .query_map([], |row| {
                Ok(Coach {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(coaches)
    }
}
