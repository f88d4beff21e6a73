//! Loading and importing whole [`Snapshot`]s.
//!
//! Imports run in one transaction: either every record lands or none do.
//! Records are upserted by id, so re-importing an export is idempotent.
//! An import merges into the store: records absent from the file are kept.
//!
//! Besides [`Snapshots::load`], narrower loaders fetch only what one command
//! reads (a swimmer's records, a squad's members, a day or week of sessions).

use super::attendance::AttendanceRecords;
use super::coaches::Coaches;
use super::locations::Locations;
use super::sessions::Sessions;
use super::squads::Squads;
use super::swimmers::Swimmers;
use crate::libs::period::{end_of_week, start_of_week};
use crate::libs::session::{LocationId, SquadId, SwimmerId};
use crate::libs::snapshot::Snapshot;
use chrono::NaiveDate;
use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub sessions: usize,
    pub attendance: usize,
    pub swimmers: usize,
}

pub struct Snapshots<'a> {
    conn: &'a mut Connection,
}

impl<'a> Snapshots<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Snapshots { conn }
    }

    pub fn load(&self) -> Result<Snapshot> {
        let conn: &Connection = &*self.conn;
        Ok(Snapshot {
            squads: Squads::new(conn).fetch_all()?,
            locations: Locations::new(conn).fetch_all()?,
            coaches: Coaches::new(conn).fetch_all()?,
            swimmers: Swimmers::new(conn).fetch_all()?,
            sessions: Sessions::new(conn).fetch_all()?,
            attendance: AttendanceRecords::new(conn).fetch_all()?,
        })
    }

    /// One swimmer with only their attendance records. `None` when the
    /// swimmer is not in the store.
    pub fn load_swimmer(&self, swimmer_id: SwimmerId) -> Result<Option<Snapshot>> {
        let conn: &Connection = &*self.conn;
        let Some(swimmer) = Swimmers::new(conn).fetch(swimmer_id)? else {
            return Ok(None);
        };
        Ok(Some(Snapshot {
            swimmers: vec![swimmer],
            sessions: Sessions::new(conn).fetch_all()?,
            attendance: AttendanceRecords::new(conn).fetch_swimmer(swimmer_id)?,
            ..Snapshot::default()
        }))
    }

    /// All squads, the members of `squad_id`, and every session and record.
    pub fn load_squad(&self, squad_id: SquadId) -> Result<Snapshot> {
        let conn: &Connection = &*self.conn;
        Ok(Snapshot {
            squads: Squads::new(conn).fetch_all()?,
            swimmers: Swimmers::new(conn).fetch_squad(squad_id)?,
            sessions: Sessions::new(conn).fetch_all()?,
            attendance: AttendanceRecords::new(conn).fetch_all()?,
            ..Snapshot::default()
        })
    }

    /// Reference tables plus the sessions a timetable shows: the week of
    /// `date` at `location` when `week` is set, otherwise the day `date`.
    pub fn load_timetable(&self, location: Option<LocationId>, week: bool, date: NaiveDate) -> Result<Snapshot> {
        let conn: &Connection = &*self.conn;
        let repo = Sessions::new(conn);
        let sessions = match location {
            Some(location_id) if week => {
                repo.fetch_location_range(location_id, start_of_week(date), end_of_week(date))?
            }
            _ => repo.fetch_date(date)?,
        };
        Ok(Snapshot {
            squads: Squads::new(conn).fetch_all()?,
            locations: Locations::new(conn).fetch_all()?,
            sessions,
            ..Snapshot::default()
        })
    }

    pub fn import(&mut self, snapshot: &Snapshot) -> Result<ImportSummary> {
        let tx = self.conn.transaction()?;

        {
            let squads = Squads::new(&tx);
            for squad in &snapshot.squads {
                squads.insert(squad)?;
            }
            let locations = Locations::new(&tx);
            for location in &snapshot.locations {
                locations.insert(location)?;
            }
            let coaches = Coaches::new(&tx);
            for coach in &snapshot.coaches {
                coaches.insert(coach)?;
            }
            let swimmers = Swimmers::new(&tx);
            for swimmer in &snapshot.swimmers {
                swimmers.insert(swimmer)?;
            }
            let sessions = Sessions::new(&tx);
            for session in &snapshot.sessions {
                sessions.insert(session)?;
            }
            let attendance = AttendanceRecords::new(&tx);
            for record in &snapshot.attendance {
                attendance.insert(record)?;
            }
        }

        tx.commit()?;
        debug!(
            squads = snapshot.squads.len(),
            sessions = snapshot.sessions.len(),
            attendance = snapshot.attendance.len(),
            "snapshot imported"
        );

        Ok(ImportSummary {
            sessions: snapshot.sessions.len(),
            attendance: snapshot.attendance.len(),
            swimmers: snapshot.swimmers.len(),
        })
    }
}
