//! Domain records the analytics core reads.
//!
//! Every type here is a plain snapshot of a row owned by the store. The core
//! never mutates them; layout rectangles and statistics are derived on each
//! call and carry no identity of their own.
//!
//! ## Records
//!
//! - [`Session`]: one pool booking for a squad, with times as `HH:MM` strings
//! - [`Squad`], [`Location`], [`Coach`], [`Swimmer`]: join targets
//! - [`Attendance`]: one swimmer's status for one session
//! - [`Focus`]: the training emphasis tag attached to a session
//! - [`DistanceBreakdown`]: per-stroke metres with a stored total

use crate::libs::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type SessionId = i64;
pub type SquadId = i64;
pub type LocationId = i64;
pub type CoachId = i64;
pub type SwimmerId = i64;

/// Label used when a session references a squad missing from the snapshot.
pub const UNKNOWN_SQUAD: &str = "Unknown Squad";

/// Label used for any other missing lookup (location, coach).
pub const UNKNOWN: &str = "Unknown";

/// Palette squads fall back to when no color is stored.
const SQUAD_PALETTE: [&str; 8] = ["#2563eb", "#16a34a", "#dc2626", "#9333ea", "#ea580c", "#0891b2", "#ca8a04", "#db2777"];

/// Training emphasis of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    AerobicCapacity,
    AerobicMaintenance,
    AnaerobicThreshold,
    Vo2Max,
    LactateProduction,
    LactateTolerance,
    Speed,
    Technique,
    RacePace,
    Recovery,
    Mixed,
}

impl Focus {
    pub const ALL: [Focus; 11] = [
        Focus::AerobicCapacity,
        Focus::AerobicMaintenance,
        Focus::AnaerobicThreshold,
        Focus::Vo2Max,
        Focus::LactateProduction,
        Focus::LactateTolerance,
        Focus::Speed,
        Focus::Technique,
        Focus::RacePace,
        Focus::Recovery,
        Focus::Mixed,
    ];

    /// Human readable label, also what free-text search matches against.
    pub fn label(&self) -> &'static str {
        match self {
            Focus::AerobicCapacity => "Aerobic capacity",
            Focus::AerobicMaintenance => "Aerobic maintenance",
            Focus::AnaerobicThreshold => "Anaerobic threshold",
            Focus::Vo2Max => "VO2 max",
            Focus::LactateProduction => "Lactate production",
            Focus::LactateTolerance => "Lactate tolerance",
            Focus::Speed => "Speed",
            Focus::Technique => "Technique",
            Focus::RacePace => "Race pace",
            Focus::Recovery => "Recovery",
            Focus::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Focus {
    type Err = String;

    /// Accepts either the label ("Aerobic capacity") or the snake_case
    /// name ("aerobic_capacity"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        Focus::ALL
            .iter()
            .copied()
            .find(|focus| focus.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown focus '{}'", s))
    }
}

/// Metres swum per stroke or drill type, plus the total the store keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceBreakdown {
    pub freestyle: u32,
    pub backstroke: u32,
    pub breaststroke: u32,
    pub butterfly: u32,
    pub individual_medley: u32,
    pub kick: u32,
    pub drill: u32,
    pub pull: u32,
    pub total: u32,
}

impl DistanceBreakdown {
    /// Sum of the per-stroke fields. Aggregation reads the stored `total`;
    /// [`Snapshot::fill_missing_totals`](crate::libs::snapshot::Snapshot::fill_missing_totals)
    /// uses this when a file leaves it at 0.
    pub fn computed_total(&self) -> u32 {
        self.freestyle
            + self.backstroke
            + self.breaststroke
            + self.butterfly
            + self.individual_medley
            + self.kick
            + self.drill
            + self.pull
    }
}

/// Coach role on a session. A session carries at most one coach per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachRole {
    Lead,
    Second,
    Helper,
    Gym,
}

impl CoachRole {
    pub const ALL: [CoachRole; 4] = [CoachRole::Lead, CoachRole::Second, CoachRole::Helper, CoachRole::Gym];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoachRole::Lead => "lead",
            CoachRole::Second => "second",
            CoachRole::Helper => "helper",
            CoachRole::Gym => "gym",
        }
    }
}

impl FromStr for CoachRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoachRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown coach role '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachAssignment {
    pub role: CoachRole,
    pub coach_id: CoachId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub date: NaiveDate,
    /// Local wall-clock start, `HH:MM`.
    pub start_time: String,
    /// Local wall-clock end, `HH:MM`.
    pub end_time: String,
    pub squad_id: SquadId,
    pub location_id: LocationId,
    pub focus: Focus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<DistanceBreakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coaches: Vec<CoachAssignment>,
}

impl Session {
    /// Metres recorded for the session, 0 when nothing was logged.
    pub fn total_metres(&self) -> u32 {
        self.distance.as_ref().map(|d| d.total).unwrap_or(0)
    }

    pub fn coach_for(&self, role: CoachRole) -> Option<CoachId> {
        self.coaches.iter().find(|c| c.role == role).map(|c| c.coach_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: SquadId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Squad {
    /// Stored color, or a palette entry picked from the id so the same
    /// squad always renders the same way.
    pub fn display_color(&self) -> String {
        match &self.color {
            Some(color) => color.clone(),
            None => SQUAD_PALETTE[self.id.rem_euclid(SQUAD_PALETTE.len() as i64) as usize].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub first_name: String,
    pub last_name: String,
}

impl Coach {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimmer {
    pub id: SwimmerId,
    pub first_name: String,
    pub last_name: String,
    pub squad_id: SquadId,
    pub date_of_birth: NaiveDate,
}

impl Swimmer {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub session_id: SessionId,
    pub swimmer_id: SwimmerId,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: String,
}
