use super::db::parse_column;
use crate::libs::session::{CoachAssignment, DistanceBreakdown, LocationId, Session, SessionId};
use chrono::NaiveDate;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, Result, Row};
use std::collections::HashMap;

const INSERT_SESSION: &str = "INSERT OR REPLACE INTO sessions (id, date, start_time, end_time, squad_id, location_id, focus, content)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const DELETE_COACHES: &str = "DELETE FROM session_coaches WHERE session_id = ?1";
const INSERT_COACH: &str = "INSERT INTO session_coaches (session_id, role, coach_id) VALUES (?1, ?2, ?3)";
const DELETE_DISTANCE: &str = "DELETE FROM session_distances WHERE session_id = ?1";
const INSERT_DISTANCE: &str = "INSERT INTO session_distances
    (session_id, freestyle, backstroke, breaststroke, butterfly, individual_medley, kick, drill, pull, total)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_SESSIONS: &str = "SELECT s.id, s.date, s.start_time, s.end_time, s.squad_id, s.location_id, s.focus, s.content,
    d.session_id, d.freestyle, d.backstroke, d.breaststroke, d.butterfly, d.individual_medley, d.kick, d.drill, d.pull, d.total
    FROM sessions s LEFT JOIN session_distances d ON d.session_id = s.id";
const ORDER_SESSIONS: &str = "ORDER BY s.date, s.start_time, s.id";
const SELECT_COACHES: &str = "SELECT session_id, role, coach_id FROM session_coaches";

pub struct Sessions<'a> {
    conn: &'a Connection,
}

impl<'a> Sessions<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Sessions { conn }
    }

    /// Writes a session with its coaches and distance, replacing any
    /// previous version with the same id.
    pub fn insert(&self, session: &Session) -> Result<()> {
        self.conn.execute(
            INSERT_SESSION,
            params![
                session.id,
                session.date,
                session.start_time,
                session.end_time,
                session.squad_id,
                session.location_id,
                session.focus.label(),
                session.content
            ],
        )?;

        self.conn.execute(DELETE_COACHES, [session.id])?;
        for assignment in &session.coaches {
            self.conn.execute(INSERT_COACH, params![session.id, assignment.role.as_str(), assignment.coach_id])?;
        }

        self.conn.execute(DELETE_DISTANCE, [session.id])?;
        if let Some(d) = &session.distance {
            self.conn.execute(
                INSERT_DISTANCE,
                params![
                    session.id,
                    d.freestyle,
                    d.backstroke,
                    d.breaststroke,
                    d.butterfly,
                    d.individual_medley,
                    d.kick,
                    d.drill,
                    d.pull,
                    d.total
                ],
            )?;
        }

        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<Session>> {
        self.fetch_where("", params![])
    }

    pub fn fetch_date(&self, date: NaiveDate) -> Result<Vec<Session>> {
        self.fetch_where("WHERE s.date = ?1", params![date])
    }

    pub fn fetch_location_range(&self, location_id: LocationId, start: NaiveDate, end: NaiveDate) -> Result<Vec<Session>> {
        self.fetch_where(
            "WHERE s.location_id = ?1 AND s.date BETWEEN ?2 AND ?3",
            params![location_id, start, end],
        )
    }

    fn fetch_where(&self, clause: &str, params: &[&dyn ToSql]) -> Result<Vec<Session>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_SESSIONS, clause, ORDER_SESSIONS))?;
        let mut sessions = stmt.query_map(params, map_session)?.collect::<Result<Vec<_>>>()?;

        let mut coaches = self.fetch_coaches()?;
        for session in &mut sessions {
            if let Some(assignments) = coaches.remove(&session.id) {
                session.coaches = assignments;
            }
        }

        Ok(sessions)
    }

    fn fetch_coaches(&self) -> Result<HashMap<SessionId, Vec<CoachAssignment>>> {
        let mut stmt = self.conn.prepare(SELECT_COACHES)?;
        let rows = stmt.query_map([], |row| {
            let session_id: SessionId = row.get(0)?;
            Ok((
                session_id,
                CoachAssignment {
                    role: parse_column(1, row.get(1)?)?,
                    coach_id: row.get(2)?,
                },
            ))
        })?;

        let mut by_session: HashMap<SessionId, Vec<CoachAssignment>> = HashMap::new();
        for row in rows {
            let (session_id, assignment) = row?;
            by_session.entry(session_id).or_default().push(assignment);
        }
        for assignments in by_session.values_mut() {
            assignments.sort_by_key(|a| a.role);
        }

        Ok(by_session)
    }
}

fn map_session(row: &Row<'_>) -> Result<Session> {
    let distance_row: Option<SessionId> = row.get(8)?;
    let distance = match distance_row {
        Some(_) => Some(DistanceBreakdown {
            freestyle: row.get(9)?,
            backstroke: row.get(10)?,
            breaststroke: row.get(11)?,
            butterfly: row.get(12)?,
            individual_medley: row.get(13)?,
            kick: row.get(14)?,
            drill: row.get(15)?,
            pull: row.get(16)?,
            total: row.get(17)?,
        }),
        None => None,
    };

    Ok(Session {
        id: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        squad_id: row.get(4)?,
        location_id: row.get(5)?,
        focus: parse_column(6, row.get(6)?)?,
        content: row.get(7)?,
        distance,
        coaches: Vec::new(),
    })
}
