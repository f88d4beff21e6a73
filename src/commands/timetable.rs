use super::parse_date;
use crate::{
    db::{db::Db, snapshots::Snapshots},
    libs::{
        config::Config,
        formatter::FormattedPlacement,
        interval::{HourGrid, Interval, MINUTES_PER_HOUR},
        layout::{layout_day, layout_locations, layout_week, DayLayout, LayoutOptions, LayoutStrategy},
        messages::Message,
        session::{LocationId, UNKNOWN, UNKNOWN_SQUAD},
        snapshot::Snapshot,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct TimetableArgs {
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Only this location; every location with sessions otherwise
    #[arg(short, long)]
    location: Option<LocationId>,

    /// Show Monday to Sunday of the week containing the date
    #[arg(short, long, requires = "location")]
    week: bool,

    /// Override the configured column strategy
    #[arg(short, long, value_enum)]
    strategy: Option<LayoutStrategy>,
}

pub fn cmd(args: TimetableArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let config = Config::read()?;
    let grid = config.hour_grid()?;
    let mut options = config.layout_options()?;
    if let Some(strategy) = args.strategy {
        options.strategy = strategy;
    }

    let mut db = Db::new()?;
    let snapshot = Snapshots::new(&mut db.conn).load_timetable(args.location, args.week, date)?;
    let layouts = collect_layouts(&snapshot, args.location, args.week, date, &options)?;

    if layouts.iter().all(DayLayout::is_empty) {
        match args.location {
            Some(_) => msg_info!(Message::NoSessionsForDay(date.to_string())),
            None => msg_info!(Message::NoSessionsAnywhere(date.to_string())),
        }
        return Ok(());
    }

    if args.week {
        let location = location_name(&snapshot, layouts[0].location_id);
        msg_print!(Message::TimetableWeekHeader(location, layouts[0].date.to_string()), true);
    }

    for layout in layouts.iter().filter(|l| !l.is_empty()) {
        msg_print!(
            Message::TimetableHeader(location_name(&snapshot, layout.location_id), layout.date.to_string()),
            true
        );
        render_day(&snapshot, layout, &grid)?;
    }

    Ok(())
}

/// Layouts for one location (a day or a week) or for every location with
/// sessions on `date`.
pub(crate) fn collect_layouts(
    snapshot: &Snapshot,
    location: Option<LocationId>,
    week: bool,
    date: NaiveDate,
    options: &LayoutOptions,
) -> Result<Vec<DayLayout>> {
    let layouts = match location {
        Some(location_id) => {
            let known = snapshot.location(location_id).is_some()
                || snapshot.sessions.iter().any(|s| s.location_id == location_id);
            if !known {
                msg_bail_anyhow!(Message::LocationNotFound(location_id));
            }
            if week {
                layout_week(&snapshot.sessions, location_id, date, options)?
            } else {
                vec![layout_day(&snapshot.sessions, location_id, date, options)?]
            }
        }
        None => layout_locations(&snapshot.sessions, date, options)?.into_values().collect(),
    };

    Ok(layouts)
}

pub(crate) fn location_name(snapshot: &Snapshot, location_id: LocationId) -> String {
    snapshot
        .location(location_id)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Pre-rendered rows for one laid-out day, top to bottom.
pub(crate) fn placements(snapshot: &Snapshot, layout: &DayLayout) -> Vec<FormattedPlacement> {
    layout
        .ordered()
        .iter()
        .filter_map(|(session_id, rect)| {
            let session = snapshot.session(*session_id)?;
            let squad = snapshot.squad(session.squad_id).map(|s| s.name.as_str()).unwrap_or(UNKNOWN_SQUAD);
            Some(FormattedPlacement::new(session, squad, rect))
        })
        .collect()
}

fn render_day(snapshot: &Snapshot, layout: &DayLayout, grid: &HourGrid) -> Result<()> {
    let intervals: Vec<Interval> = layout
        .rects
        .keys()
        .filter_map(|id| snapshot.session(*id))
        .filter_map(|session| Interval::of(session).ok())
        .collect();

    let outside = intervals.iter().filter(|interval| !grid.contains(interval)).count();
    if outside > 0 {
        msg_warning!(Message::SessionsOutsideGrid(outside));
    }

    let occupied: Vec<usize> = (grid.start_hour..grid.end_hour)
        .map(|hour| {
            let row = Interval::new(hour as i32 * MINUTES_PER_HOUR, (hour as i32 + 1) * MINUTES_PER_HOUR);
            intervals.iter().filter(|interval| interval.overlaps(&row)).count()
        })
        .collect();

    View::hour_grid(&grid.labels(), &occupied)?;
    View::timetable(&placements(snapshot, layout))
}
