//! Kilometres swum by one swimmer over calendar windows.
//!
//! A session contributes when the swimmer has an attendance record for it
//! whose status counts as attended (the same rule as the attendance rate).
//! Its stored breakdown total is used, 0 when no distance was logged.
//!
//! Windows are calendar windows of the reference date, each computed on its
//! own. Year always covers month, but a Monday-start week can reach back
//! into the previous month (or year): on 2026-10-01 a session swum on
//! 09-29 counts toward this week and not toward this month. Week is
//! therefore not bounded by month near a month boundary.

use crate::libs::period::DateWindow;
use crate::libs::session::{Attendance, Session, SessionId, SwimmerId};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

pub const METRES_PER_KM: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceStats {
    pub swimmer_id: SwimmerId,
    pub this_week_km: f64,
    pub this_month_km: f64,
    pub this_year_km: f64,
    pub total_km: f64,
    /// Attended sessions found in the snapshot, regardless of window.
    pub sessions_counted: usize,
}

pub fn distance_stats(
    swimmer_id: SwimmerId,
    sessions: &[Session],
    attendance: &[Attendance],
    now: NaiveDateTime,
) -> DistanceStats {
    let today = now.date();
    let attended: HashSet<SessionId> = attendance
        .iter()
        .filter(|a| a.swimmer_id == swimmer_id && a.status.counts_as_attended())
        .map(|a| a.session_id)
        .collect();

    let swum: Vec<&Session> = sessions.iter().filter(|s| attended.contains(&s.id)).collect();

    let km_in = |window: Option<DateWindow>| -> f64 {
        let metres: u64 = swum
            .iter()
            .filter(|s| window.map_or(true, |w| w.contains(s.date)))
            .map(|s| u64::from(s.total_metres()))
            .sum();
        metres as f64 / METRES_PER_KM
    };

    let stats = DistanceStats {
        swimmer_id,
        this_week_km: km_in(Some(DateWindow::week_of(today))),
        this_month_km: km_in(Some(DateWindow::month_of(today))),
        this_year_km: km_in(Some(DateWindow::year_of(today))),
        total_km: km_in(None),
        sessions_counted: swum.len(),
    };

    tracing::debug!(swimmer_id, year_km = stats.this_year_km, sessions = stats.sessions_counted, "computed distance stats");

    stats
}
