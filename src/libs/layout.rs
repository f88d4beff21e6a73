//! Collision-free placement of sessions on a day timetable.
//!
//! Every session booked at one location on one day is turned into a
//! rectangle on a fixed per-hour grid. The vertical axis is time, the
//! horizontal axis is shared between sessions that run concurrently.
//!
//! ## Geometry
//!
//! ```text
//! top    = (start - day_origin) / 60 * hour_height      (pixels)
//! height = (end - start)        / 60 * hour_height      (pixels)
//! width  = 100 / columns                                (percent)
//! left   = column * width                               (percent)
//! ```
//!
//! ## Column strategies
//!
//! - [`LayoutStrategy::SameStart`] groups sessions that start at exactly the
//!   same minute and tiles each group left to right in input order. Sessions
//!   that overlap but start at different minutes keep the full width and
//!   render stacked.
//! - [`LayoutStrategy::Greedy`] is the interval-graph variant: sessions are
//!   swept by start time, each takes the lowest column that is free again,
//!   and every connected cluster of overlapping sessions shares its width
//!   evenly. For a group with equal starts and no other overlaps it produces
//!   the same rectangles as `SameStart`.
//!
//! Sessions outside the rendered hour window are neither clipped nor
//! reported; that is up to the view.

use crate::libs::interval::{Interval, TimeError, MINUTES_PER_HOUR};
use crate::libs::period::DateWindow;
use crate::libs::session::{LocationId, Session, SessionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("session {session_id}: {source}")]
    Time {
        session_id: SessionId,
        #[source]
        source: TimeError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    #[default]
    SameStart,
    Greedy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Minutes since midnight at which the grid's first row starts.
    pub day_origin_minutes: i32,
    /// Pixels one hour of the grid occupies.
    pub hour_height_px: f64,
    pub strategy: LayoutStrategy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            day_origin_minutes: 6 * MINUTES_PER_HOUR,
            hour_height_px: 60.0,
            strategy: LayoutStrategy::SameStart,
        }
    }
}

/// Position of one session: `top`/`height` in pixels, `left`/`width` in
/// percent of the location column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rectangles for one location on one day, keyed by session id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub location_id: LocationId,
    pub date: NaiveDate,
    pub rects: BTreeMap<SessionId, Rect>,
}

impl DayLayout {
    pub fn get(&self, session_id: SessionId) -> Option<&Rect> {
        self.rects.get(&session_id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Rectangles ordered top to bottom, then left to right.
    pub fn ordered(&self) -> Vec<(SessionId, Rect)> {
        let mut placed: Vec<(SessionId, Rect)> = self.rects.iter().map(|(id, rect)| (*id, *rect)).collect();
        placed.sort_by(|a, b| a.1.top.total_cmp(&b.1.top).then(a.1.left.total_cmp(&b.1.left)));
        placed
    }
}

/// Column index and column count assigned to one session.
#[derive(Debug, Clone, Copy)]
struct Slot {
    column: usize,
    columns: usize,
}

/// Lays out every session of `location_id` on `date`.
///
/// A malformed start or end time aborts the whole layout with the offending
/// session's id.
pub fn layout_day(
    sessions: &[Session],
    location_id: LocationId,
    date: NaiveDate,
    options: &LayoutOptions,
) -> Result<DayLayout, LayoutError> {
    let day = sessions
        .iter()
        .filter(|s| s.location_id == location_id && s.date == date)
        .map(|s| {
            Interval::of(s)
                .map(|interval| (s.id, interval))
                .map_err(|source| LayoutError::Time { session_id: s.id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let intervals: Vec<Interval> = day.iter().map(|(_, interval)| *interval).collect();
    let slots = match options.strategy {
        LayoutStrategy::SameStart => same_start_slots(&intervals),
        LayoutStrategy::Greedy => greedy_slots(&intervals),
    };

    let rects = day
        .iter()
        .zip(slots)
        .map(|((id, interval), slot)| (*id, place(interval, slot, options)))
        .collect::<BTreeMap<_, _>>();

    tracing::debug!(location_id, %date, sessions = rects.len(), strategy = ?options.strategy, "laid out day");

    Ok(DayLayout { location_id, date, rects })
}

/// Lays out Monday through Sunday of the week containing `date`.
pub fn layout_week(
    sessions: &[Session],
    location_id: LocationId,
    date: NaiveDate,
    options: &LayoutOptions,
) -> Result<Vec<DayLayout>, LayoutError> {
    DateWindow::week_of(date)
        .days()
        .map(|day| layout_day(sessions, location_id, day, options))
        .collect()
}

/// One layout per location that has at least one session on `date`.
pub fn layout_locations(
    sessions: &[Session],
    date: NaiveDate,
    options: &LayoutOptions,
) -> Result<BTreeMap<LocationId, DayLayout>, LayoutError> {
    let locations: BTreeSet<LocationId> = sessions.iter().filter(|s| s.date == date).map(|s| s.location_id).collect();

    locations
        .into_iter()
        .map(|location_id| layout_day(sessions, location_id, date, options).map(|layout| (location_id, layout)))
        .collect()
}

fn place(interval: &Interval, slot: Slot, options: &LayoutOptions) -> Rect {
    let per_minute = options.hour_height_px / MINUTES_PER_HOUR as f64;
    let width = 100.0 / slot.columns as f64;

    Rect {
        top: interval.offset_from(options.day_origin_minutes) as f64 * per_minute,
        height: interval.duration() as f64 * per_minute,
        left: slot.column as f64 * width,
        width,
    }
}

/// Groups by exact start minute; input order decides the column.
fn same_start_slots(intervals: &[Interval]) -> Vec<Slot> {
    let mut groups: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (index, interval) in intervals.iter().enumerate() {
        groups.entry(interval.start).or_default().push(index);
    }

    let mut slots = vec![Slot { column: 0, columns: 1 }; intervals.len()];
    for members in groups.values() {
        for (column, index) in members.iter().enumerate() {
            slots[*index] = Slot { column, columns: members.len() };
        }
    }
    slots
}

/// Sweep by start time, reuse the lowest column whose last session has
/// ended, and size every connected cluster by its column count.
fn greedy_slots(intervals: &[Interval]) -> Vec<Slot> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&index| (intervals[index].start, index));

    let mut slots = vec![Slot { column: 0, columns: 1 }; intervals.len()];
    let mut column_ends: Vec<i32> = Vec::new();
    let mut cluster: Vec<usize> = Vec::new();
    let mut cluster_end: Option<i32> = None;

    for index in order {
        let interval = intervals[index];

        if cluster_end.is_some_and(|end| interval.start >= end) {
            close_cluster(&mut slots, &cluster, column_ends.len());
            cluster.clear();
            column_ends.clear();
            cluster_end = None;
        }

        let column = match column_ends.iter().position(|end| *end <= interval.start) {
            Some(free) => {
                column_ends[free] = interval.end;
                free
            }
            None => {
                column_ends.push(interval.end);
                column_ends.len() - 1
            }
        };

        slots[index].column = column;
        cluster.push(index);
        cluster_end = Some(cluster_end.map_or(interval.end, |end| end.max(interval.end)));
    }
    close_cluster(&mut slots, &cluster, column_ends.len());

    slots
}

fn close_cluster(slots: &mut [Slot], cluster: &[usize], columns: usize) {
    for index in cluster {
        slots[*index].columns = columns.max(1);
    }
}
