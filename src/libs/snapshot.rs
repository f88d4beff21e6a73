//! The bundle of records every analytics call reads from.
//!
//! A snapshot is what the store hands the core: plain vectors, already
//! joined by id. It is also the on-disk format of import files:
//!
//! ```json
//! {
//!   "squads":    [{ "id": 1, "name": "Juniors", "color": "#2563eb" }],
//!   "locations": [{ "id": 1, "name": "Main Pool" }],
//!   "coaches":   [{ "id": 1, "first_name": "Ana", "last_name": "Silva" }],
//!   "swimmers":  [{ "id": 1, "first_name": "Tom", "last_name": "Reed", "squad_id": 1, "date_of_birth": "2011-04-02" }],
//!   "sessions":  [{ "id": 1, "date": "2026-10-19", "start_time": "06:00", "end_time": "07:30",
//!                   "squad_id": 1, "location_id": 1, "focus": "aerobic_capacity" }],
//!   "attendance":[{ "id": 1, "session_id": 1, "swimmer_id": 1, "status": "present", "notes": "" }]
//! }
//! ```

use crate::libs::interval::{Interval, TimeError};
use crate::libs::session::{Attendance, Coach, Location, Session, Squad, Swimmer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub squads: Vec<Squad>,
    pub locations: Vec<Location>,
    pub coaches: Vec<Coach>,
    pub swimmers: Vec<Swimmer>,
    pub sessions: Vec<Session>,
    pub attendance: Vec<Attendance>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sessions whose times do not form a positive interval, with the
    /// reason. The layout engine itself never checks this.
    pub fn invalid_sessions(&self) -> Vec<(&Session, TimeError)> {
        self.sessions
            .iter()
            .filter_map(|session| Interval::validate(session).err().map(|e| (session, e)))
            .collect()
    }

    /// Sets the stored total of every logged distance whose total is 0 but
    /// whose strokes are not. Returns how many sessions changed.
    pub fn fill_missing_totals(&mut self) -> usize {
        let mut filled = 0;
        for distance in self.sessions.iter_mut().filter_map(|s| s.distance.as_mut()) {
            let computed = distance.computed_total();
            if distance.total == 0 && computed > 0 {
                distance.total = computed;
                filled += 1;
            }
        }
        filled
    }

    pub fn squad(&self, id: i64) -> Option<&Squad> {
        self.squads.iter().find(|s| s.id == id)
    }

    pub fn location(&self, id: i64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn swimmer(&self, id: i64) -> Option<&Swimmer> {
        self.swimmers.iter().find(|s| s.id == id)
    }

    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }
}
