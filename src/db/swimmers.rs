use crate::libs::session::{SquadId, Swimmer, SwimmerId};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_SWIMMER: &str =
    "INSERT OR REPLACE INTO swimmers (id, first_name, last_name, squad_id, date_of_birth) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_SWIMMERS: &str = "SELECT id, first_name, last_name, squad_id, date_of_birth FROM swimmers";

pub struct Swimmers<'a> {
    conn: &'a Connection,
}

impl<'a> Swimmers<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Swimmers { conn }
    }

    pub fn insert(&self, swimmer: &Swimmer) -> Result<()> {
        self.conn.execute(
            INSERT_SWIMMER,
            params![swimmer.id, swimmer.first_name, swimmer.last_name, swimmer.squad_id, swimmer.date_of_birth],
        )?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Swimmer>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY last_name, first_name", SELECT_SWIMMERS))?;
        let swimmers = stmt.query_map([], map_swimmer)?.collect::<Result<Vec<_>>>()?;
        Ok(swimmers)
    }

    pub fn fetch(&self, id: SwimmerId) -> Result<Option<Swimmer>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_SWIMMERS), [id], map_swimmer)
            .optional()
    }

    pub fn fetch_squad(&self, squad_id: SquadId) -> Result<Vec<Swimmer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE squad_id = ?1 ORDER BY last_name, first_name", SELECT_SWIMMERS))?;
        let swimmers = stmt.query_map([squad_id], map_swimmer)?.collect::<Result<Vec<_>>>()?;
        Ok(swimmers)
    }
}

fn map_swimmer(row: &Row<'_>) -> Result<Swimmer> {
    Ok(Swimmer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        squad_id: row.get(3)?,
        date_of_birth: row.get(4)?,
    })
}
