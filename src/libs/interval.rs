//! Day-relative time arithmetic for sessions.
//!
//! All interval math works in *day-relative minutes*, the number of minutes
//! elapsed since local midnight. A session scheduled `09:15`-`10:45` becomes
//! the half-open interval `[555, 645)`.
//!
//! ## Day origin
//!
//! The timetable grid starts at a configurable origin (for example `06:00`).
//! [`Interval::offset_from`] measures a session's start against it and may
//! return a negative value for early sessions; clipping or rejecting those is
//! the caller's decision.
//!
//! ## Errors
//!
//! Parsing is the only fallible step. A string that is not `HH:MM` (an
//! optional `:SS` suffix is tolerated and ignored) yields
//! [`TimeError::Malformed`] and is propagated untouched. End times may also
//! be `24:00`, a session running until midnight; start times may not.

use crate::libs::session::Session;
use thiserror::Error;

pub const MINUTES_PER_HOUR: i32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("malformed time '{0}', expected HH:MM")]
    Malformed(String),
    #[error("session {session_id} ends at or before it starts ({start} - {end})")]
    EmptyInterval { session_id: i64, start: String, end: String },
}

/// Parses `HH:MM` (or `HH:MM:SS`) into minutes since midnight.
pub fn parse_minutes(value: &str) -> Result<i32, TimeError> {
    let malformed = || TimeError::Malformed(value.to_string());
    let mut parts = value.trim().split(':');

    let hour = parts.next().ok_or_else(malformed)?;
    let minute = parts.next().ok_or_else(malformed)?;
    let second = parts.next();
    if parts.next().is_some() {
        return Err(malformed());
    }

    let hour = parse_component(hour, 23).ok_or_else(malformed)?;
    let minute = parse_component(minute, 59).ok_or_else(malformed)?;
    if let Some(second) = second {
        parse_component(second, 59).ok_or_else(malformed)?;
    }

    Ok(hour * MINUTES_PER_HOUR + minute)
}

/// Parses a session end time: any valid `HH:MM`, plus `24:00` for midnight
/// at the end of the day.
pub fn parse_end_minutes(value: &str) -> Result<i32, TimeError> {
    let trimmed = value.trim();
    if trimmed == "24:00" || trimmed == "24:00:00" {
        return Ok(24 * MINUTES_PER_HOUR);
    }
    parse_minutes(value)
}

fn parse_component(part: &str, max: i32) -> Option<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<i32>().ok().filter(|v| *v <= max)
}

/// Formats minutes since midnight back into `HH:MM`.
pub fn format_minutes(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// A session's `[start, end)` in day-relative minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn of(session: &Session) -> Result<Self, TimeError> {
        Ok(Self {
            start: parse_minutes(&session.start_time)?,
            end: parse_end_minutes(&session.end_time)?,
        })
    }

    /// Like [`Interval::of`], additionally rejecting zero or negative
    /// durations. The layout engine does not call this.
    pub fn validate(session: &Session) -> Result<Self, TimeError> {
        let interval = Self::of(session)?;
        if interval.end <= interval.start {
            return Err(TimeError::EmptyInterval {
                session_id: session.id,
                start: session.start_time.clone(),
                end: session.end_time.clone(),
            });
        }
        Ok(interval)
    }

    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Minutes between `origin` and the start; negative before the origin.
    pub fn offset_from(&self, origin: i32) -> i32 {
        self.start - origin
    }

    /// Half-open overlap: back-to-back sessions do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The bounded set of hour rows a day view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourGrid {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for HourGrid {
    fn default() -> Self {
        Self { start_hour: 6, end_hour: 20 }
    }
}

impl HourGrid {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self { start_hour, end_hour }
    }

    /// Builds a grid from `HH:MM` bounds, rounding the start down and the
    /// end up to whole hours.
    pub fn from_bounds(start: &str, end: &str) -> Result<Self, TimeError> {
        let start = parse_minutes(start)?;
        let end = parse_end_minutes(end)?;
        let end_hour = (end + MINUTES_PER_HOUR - 1) / MINUTES_PER_HOUR;
        Ok(Self::new((start / MINUTES_PER_HOUR) as u32, end_hour as u32))
    }

    /// One label per row, `"06:00"` through the last hour before `end_hour`.
    pub fn labels(&self) -> Vec<String> {
        (self.start_hour..self.end_hour).map(|h| format!("{:02}:00", h)).collect()
    }

    pub fn rows(&self) -> usize {
        self.end_hour.saturating_sub(self.start_hour) as usize
    }

    pub fn origin_minutes(&self) -> i32 {
        self.start_hour as i32 * MINUTES_PER_HOUR
    }

    /// Whether the interval sits entirely inside the rendered window.
    pub fn contains(&self, interval: &Interval) -> bool {
        interval.start >= self.origin_minutes() && interval.end <= self.end_hour as i32 * MINUTES_PER_HOUR
    }
}
