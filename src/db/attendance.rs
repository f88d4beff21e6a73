use super::db::parse_column;
use crate::libs::session::{Attendance, SwimmerId};
use rusqlite::{params, Connection, Result, Row};

const INSERT_ATTENDANCE: &str =
    "INSERT OR REPLACE INTO attendance (id, session_id, swimmer_id, status, notes) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ATTENDANCE: &str = "SELECT id, session_id, swimmer_id, status, notes FROM attendance";

pub struct AttendanceRecords<'a> {
    conn: &'a Connection,
}

impl<'a> AttendanceRecords<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        AttendanceRecords { conn }
    }

    pub fn insert(&self, record: &Attendance) -> Result<()> {
        self.conn.execute(
            INSERT_ATTENDANCE,
            params![record.id, record.session_id, record.swimmer_id, record.status.as_str(), record.notes],
        )?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Attendance>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_ATTENDANCE))?;
        let records = stmt.query_map([], map_attendance)?.collect::<Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn fetch_swimmer(&self, swimmer_id: SwimmerId) -> Result<Vec<Attendance>> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE swimmer_id = ?1 ORDER BY id", SELECT_ATTENDANCE))?;
        let records = stmt.query_map([swimmer_id], map_attendance)?.collect::<Result<Vec<_>>>()?;
        Ok(records)
    }
}

fn map_attendance(row: &Row<'_>) -> Result<Attendance> {
    Ok(Attendance {
        id: row.get(0)?,
        session_id: row.get(1)?,
        swimmer_id: row.get(2)?,
        status: parse_column(3, row.get(3)?)?,
        notes: row.get(4)?,
    })
}
