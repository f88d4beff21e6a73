//! Attendance status and punctuality classification.
//!
//! Stores hand over statuses as free strings in a handful of spellings
//! (`present`, `Present`, `very_late`, `very late`, ...). They are normalized
//! once into [`AttendanceStatus`] so every aggregator applies the same rule
//! for what counts as having attended a session.
//!
//! Punctuality is a separate derived classification. The structured
//! `late`/`very_late` statuses decide it directly; for `present` records the
//! coach's notes are the only signal, matched by substring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AttendanceStatus {
    Present,
    Late,
    VeryLate,
    FirstHalfOnly,
    SecondHalfOnly,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::VeryLate,
        AttendanceStatus::FirstHalfOnly,
        AttendanceStatus::SecondHalfOnly,
        AttendanceStatus::Absent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::VeryLate => "very_late",
            AttendanceStatus::FirstHalfOnly => "first_half_only",
            AttendanceStatus::SecondHalfOnly => "second_half_only",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// The single rule for "the swimmer was in the water for this session".
    ///
    /// Used by both the attendance-rate and the distance statistics. Partial
    /// sessions and absences do not count.
    pub fn counts_as_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::VeryLate)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        AttendanceStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("unknown attendance status '{}'", s))
    }
}

impl TryFrom<String> for AttendanceStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// How punctual an attended swimmer was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Punctuality {
    OnTime,
    Late,
    VeryLate,
}

impl Punctuality {
    /// Classifies an attended record. Returns `None` for statuses that do
    /// not count as attended, so every attended record lands in exactly one
    /// bucket.
    pub fn classify(status: AttendanceStatus, notes: &str) -> Option<Punctuality> {
        match status {
            AttendanceStatus::VeryLate => Some(Punctuality::VeryLate),
            AttendanceStatus::Late => Some(Punctuality::Late),
            AttendanceStatus::Present => Some(Self::from_notes(notes)),
            _ => None,
        }
    }

    /// "very late" wins over "late"; anything else is on time.
    pub fn from_notes(notes: &str) -> Punctuality {
        let notes = notes.to_lowercase();
        if notes.contains("very late") {
            Punctuality::VeryLate
        } else if notes.contains("late") {
            Punctuality::Late
        } else {
            Punctuality::OnTime
        }
    }
}
