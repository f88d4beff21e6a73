use super::attendance::{AttendanceStats, SwimmerSummary};
use super::distance::DistanceStats;
use super::formatter::{format_km, format_percentage, format_ratio, format_segments, FormattedPlacement, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use super::search::{SearchField, SearchHit};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn timetable(placements: &[FormattedPlacement]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "SQUAD", "FOCUS", "TOP", "HEIGHT", "LEFT", "WIDTH"]);
        for p in placements {
            table.add_row(row![p.session_id, p.time, p.squad, p.focus, r->p.top, r->p.height, r->p.left, r->p.width]);
        }
        table.printstd();

        Ok(())
    }

    pub fn hour_grid(labels: &[String], occupied: &[usize]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["HOUR", "SESSIONS"]);
        for (label, count) in labels.iter().zip(occupied) {
            table.add_row(row![label, "█".repeat(*count)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn attendance(stats: &AttendanceStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WINDOW", "ATTENDED", "TOTAL", "RATE"]);
        table.add_row(row!["Overall", stats.attended, stats.total, format_percentage(stats.overall_percentage)]);
        table.add_row(row![
            "This week",
            stats.this_week.attended,
            stats.this_week.total,
            format_percentage(stats.this_week.percentage)
        ]);
        table.add_row(row![
            "This month",
            stats.this_month.attended,
            stats.this_month.total,
            format_percentage(stats.this_month.percentage)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn punctuality(stats: &AttendanceStats) -> Result<()> {
        let p = &stats.punctuality;
        let mut table = Table::new();

        table.add_row(row!["ON TIME", "LATE", "VERY LATE"]);
        table.add_row(row![
            format!("{} ({})", p.on_time, format_percentage(p.on_time_percentage)),
            format!("{} ({})", p.late, format_percentage(p.late_percentage)),
            format!("{} ({})", p.very_late, format_percentage(p.very_late_percentage))
        ]);
        table.printstd();

        Ok(())
    }

    pub fn weekdays(stats: &AttendanceStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "ATTENDANCE"]);
        for day in &stats.by_weekday {
            table.add_row(row![day.weekday, format_ratio(&day.ratio)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn trend(stats: &AttendanceStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["MONTH", "ATTENDANCE"]);
        for month in &stats.trend {
            table.add_row(row![month.label, format_ratio(&month.ratio)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn distance(stats: &DistanceStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["THIS WEEK", "THIS MONTH", "THIS YEAR", "ALL TIME", "SESSIONS"]);
        table.add_row(row![
            format_km(stats.this_week_km),
            format_km(stats.this_month_km),
            format_km(stats.this_year_km),
            format_km(stats.total_km),
            stats.sessions_counted
        ]);
        table.printstd();

        Ok(())
    }

    pub fn squad(summaries: &[SwimmerSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SWIMMER", "ATTENDED", "TOTAL", "OVERALL", "THIS MONTH", "ON TIME"]);
        for s in summaries {
            table.add_row(row![
                s.swimmer_id,
                s.name,
                s.attended,
                s.total,
                format_percentage(s.overall_percentage),
                format_percentage(s.this_month_percentage),
                format_percentage(s.on_time_percentage)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Search hits as plain lines; tables would miscount the ANSI markers.
    pub fn search(hits: &[SearchHit<'_>]) -> Result<()> {
        for hit in hits {
            let session = hit.session;
            println!(
                "#{} {} {}-{}  {} @ {}",
                session.id, session.date, session.start_time, session.end_time, hit.squad_name, hit.location_name
            );
            for field in &hit.highlighted_fields {
                let label = match field.field {
                    SearchField::Squad => "squad".to_string(),
                    SearchField::Coach(role) => format!("{} coach", role.as_str()),
                    SearchField::Location => "location".to_string(),
                    SearchField::Focus => "focus".to_string(),
                    SearchField::Content => "content".to_string(),
                };
                println!("    {:<14} {}", label, format_segments(&field.segments, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE));
            }
        }

        Ok(())
    }
}
