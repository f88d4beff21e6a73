//! Attendance-rate and punctuality statistics for one swimmer.
//!
//! ## Counting rules
//!
//! - `total` is every attendance record the swimmer has. Sessions where no
//!   register was taken have no record and are not treated as absences.
//! - `attended` is the subset whose status counts as attended, see
//!   [`AttendanceStatus::counts_as_attended`].
//! - Windowed figures (this week, this month, weekday, monthly trend) look up
//!   the date of each record's session. Records pointing at a session that
//!   is not in the snapshot only count toward the overall figure.
//!
//! ## Percentages
//!
//! ```text
//! percentage = round(part / whole * 100)
//! ```
//!
//! Rounded to the nearest integer with halves away from zero. An empty
//! denominator gives 0, except on-time punctuality which gives 100.

use crate::libs::period::{DateWindow, trailing_months};
use crate::libs::session::{Attendance, Session, SessionId, SquadId, Swimmer, SwimmerId};
use crate::libs::status::{AttendanceStatus, Punctuality};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use std::collections::HashMap;

/// Default number of calendar months in the attendance trend.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsOptions {
    pub trend_months: u32,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self { trend_months: DEFAULT_TREND_MONTHS }
    }
}

/// Rounded percentage of `part` in `whole`, or `empty` when `whole` is 0.
pub fn percentage(part: usize, whole: usize, empty: u32) -> u32 {
    if whole == 0 {
        return empty;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Ratio {
    pub attended: usize,
    pub total: usize,
    pub percentage: u32,
}

impl Ratio {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Attendance>,
    {
        let (attended, total) = records.into_iter().fold((0, 0), |(attended, total), record| {
            (attended + usize::from(record.status.counts_as_attended()), total + 1)
        });
        Self { attended, total, percentage: percentage(attended, total, 0) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PunctualityStats {
    pub on_time: usize,
    pub late: usize,
    pub very_late: usize,
    pub on_time_percentage: u32,
    pub late_percentage: u32,
    pub very_late_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayRatio {
    pub weekday: Weekday,
    pub ratio: Ratio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRatio {
    /// Short month label, e.g. `Oct 2026`.
    pub label: String,
    pub month_start: NaiveDate,
    pub ratio: Ratio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: AttendanceStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub swimmer_id: SwimmerId,
    pub attended: usize,
    pub total: usize,
    pub overall_percentage: u32,
    pub this_week: Ratio,
    pub this_month: Ratio,
    pub punctuality: PunctualityStats,
    /// Monday through Sunday.
    pub by_weekday: Vec<WeekdayRatio>,
    /// Oldest month first, ending with the month of `now`.
    pub trend: Vec<MonthRatio>,
    pub status_counts: Vec<StatusCount>,
}

/// A swimmer's attendance records joined with their session dates.
struct SwimmerRecords<'a> {
    records: Vec<&'a Attendance>,
    dates: HashMap<SessionId, NaiveDate>,
}

impl<'a> SwimmerRecords<'a> {
    fn new(swimmer_id: SwimmerId, sessions: &[Session], attendance: &'a [Attendance]) -> Self {
        Self {
            records: attendance.iter().filter(|a| a.swimmer_id == swimmer_id).collect(),
            dates: sessions.iter().map(|s| (s.id, s.date)).collect(),
        }
    }

    fn dated<F>(&self, keep: F) -> impl Iterator<Item = &'a Attendance> + '_
    where
        F: Fn(NaiveDate) -> bool + 'a,
    {
        self.records
            .iter()
            .copied()
            .filter(move |record| self.dates.get(&record.session_id).is_some_and(|date| keep(*date)))
    }

    fn ratio_in(&self, window: DateWindow) -> Ratio {
        Ratio::from_records(self.dated(move |date| window.contains(date)))
    }
}

/// Computes the full attendance picture for `swimmer_id` as of `now`.
pub fn attendance_stats(
    swimmer_id: SwimmerId,
    sessions: &[Session],
    attendance: &[Attendance],
    now: NaiveDateTime,
    options: &AnalyticsOptions,
) -> AttendanceStats {
    let today = now.date();
    let swimmer = SwimmerRecords::new(swimmer_id, sessions, attendance);
    let overall = Ratio::from_records(swimmer.records.iter().copied());

    let by_weekday = WEEK
        .iter()
        .map(|weekday| {
            let weekday = *weekday;
            WeekdayRatio {
                weekday,
                ratio: Ratio::from_records(swimmer.dated(move |date| date.weekday() == weekday)),
            }
        })
        .collect();

    let trend = trailing_months(today, options.trend_months)
        .into_iter()
        .map(|window| MonthRatio {
            label: window.start.format("%b %Y").to_string(),
            month_start: window.start,
            ratio: swimmer.ratio_in(window),
        })
        .collect();

    let stats = AttendanceStats {
        swimmer_id,
        attended: overall.attended,
        total: overall.total,
        overall_percentage: overall.percentage,
        this_week: swimmer.ratio_in(DateWindow::week_of(today)),
        this_month: swimmer.ratio_in(DateWindow::month_of(today)),
        punctuality: punctuality(&swimmer.records),
        by_weekday,
        trend,
        status_counts: status_counts(&swimmer.records),
    };

    tracing::debug!(
        swimmer_id,
        attended = stats.attended,
        total = stats.total,
        overall = stats.overall_percentage,
        "computed attendance stats"
    );

    stats
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn punctuality(records: &[&Attendance]) -> PunctualityStats {
    let (mut on_time, mut late, mut very_late) = (0, 0, 0);
    for record in records {
        match Punctuality::classify(record.status, &record.notes) {
            Some(Punctuality::OnTime) => on_time += 1,
            Some(Punctuality::Late) => late += 1,
            Some(Punctuality::VeryLate) => very_late += 1,
            None => {}
        }
    }
    let attended = on_time + late + very_late;

    PunctualityStats {
        on_time,
        late,
        very_late,
        on_time_percentage: percentage(on_time, attended, 100),
        late_percentage: percentage(late, attended, 0),
        very_late_percentage: percentage(very_late, attended, 0),
    }
}

fn status_counts(records: &[&Attendance]) -> Vec<StatusCount> {
    AttendanceStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: records.iter().filter(|r| r.status == *status).count(),
        })
        .collect()
}

/// One row of the squad roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwimmerSummary {
    pub swimmer_id: SwimmerId,
    pub name: String,
    pub attended: usize,
    pub total: usize,
    pub overall_percentage: u32,
    pub this_month_percentage: u32,
    pub on_time_percentage: u32,
}

/// Attendance summary for every swimmer of `squad_id`, best attenders first.
pub fn squad_attendance(
    squad_id: SquadId,
    swimmers: &[Swimmer],
    sessions: &[Session],
    attendance: &[Attendance],
    now: NaiveDateTime,
    options: &AnalyticsOptions,
) -> Vec<SwimmerSummary> {
    let mut summaries: Vec<SwimmerSummary> = swimmers
        .iter()
        .filter(|swimmer| swimmer.squad_id == squad_id)
        .map(|swimmer| {
            let stats = attendance_stats(swimmer.id, sessions, attendance, now, options);
            SwimmerSummary {
                swimmer_id: swimmer.id,
                name: swimmer.display_name(),
                attended: stats.attended,
                total: stats.total,
                overall_percentage: stats.overall_percentage,
                this_month_percentage: stats.this_month.percentage,
                on_time_percentage: stats.punctuality.on_time_percentage,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.overall_percentage.cmp(&a.overall_percentage).then_with(|| a.name.cmp(&b.name)));
    summaries
}
