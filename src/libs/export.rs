//! Writing statistics and timetables to files.
//!
//! An [`Exporter`] turns an [`ExportPayload`] into one of three formats:
//!
//! - **CSV**: every table one after another, separated by a blank row
//! - **JSON**: the payload itself, pretty-printed
//! - **Excel**: one worksheet per table with bold headers
//!
//! The payload is built by the caller from already computed statistics, so
//! exporting never touches the store.
//!
//! ```rust,no_run
//! use poolside::libs::export::{ExportFormat, ExportPayload, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(&ExportPayload::Squad { squad: "Juniors".into(), summaries: vec![] })?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::attendance::{AttendanceStats, SwimmerSummary};
use crate::libs::distance::DistanceStats;
use crate::libs::formatter::{format_km, format_percentage, FormattedPlacement};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// What the `export` command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// One swimmer's attendance, punctuality and distance.
    Stats,
    /// Attendance roll-up of a squad.
    Squad,
    /// Laid-out sessions of a location for a day or week.
    Timetable,
}

/// Computed data ready to be written.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportPayload {
    Stats {
        swimmer: String,
        attendance: AttendanceStats,
        distance: DistanceStats,
    },
    Squad {
        squad: String,
        summaries: Vec<SwimmerSummary>,
    },
    Timetable {
        location: String,
        placements: Vec<FormattedPlacement>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    fn number(value: impl Into<f64>) -> Self {
        Cell::Number(value.into())
    }

    fn render(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// A titled table, the unit written as a CSV block or an Excel worksheet.
struct Sheet {
    name: &'static str,
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Uses `output_path` when given, otherwise a timestamped file name in
    /// the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "poolside_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the payload and returns the path written to.
    pub fn export(&self, payload: &ExportPayload) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Json => self.write_json(payload)?,
            ExportFormat::Csv => self.write_csv(&sheets(payload))?,
            ExportFormat::Excel => self.write_excel(&sheets(payload))?,
        }
        tracing::debug!(path = %self.output_path.display(), "export written");

        Ok(self.output_path.clone())
    }

    fn write_json(&self, payload: &ExportPayload) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_csv(&self, sheets: &[Sheet]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        for (i, sheet) in sheets.iter().enumerate() {
            if i > 0 {
                wtr.write_record([""])?;
            }
            if sheets.len() > 1 {
                wtr.write_record([sheet.name.to_uppercase()])?;
            }
            wtr.write_record(&sheet.headers)?;
            for row in &sheet.rows {
                wtr.write_record(row.iter().map(Cell::render))?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_excel(&self, sheets: &[Sheet]) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(Color::Gray);

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name)?;

            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            }
            for (i, row) in sheet.rows.iter().enumerate() {
                let row_index = i as u32 + 1;
                for (col, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(text) => worksheet.write_string(row_index, col as u16, text)?,
                        Cell::Number(n) => worksheet.write_number(row_index, col as u16, *n)?,
                    };
                }
            }
            worksheet.autofit();
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn sheets(payload: &ExportPayload) -> Vec<Sheet> {
    match payload {
        ExportPayload::Stats { attendance, distance, .. } => stats_sheets(attendance, distance),
        ExportPayload::Squad { summaries, .. } => vec![squad_sheet(summaries)],
        ExportPayload::Timetable { placements, .. } => vec![timetable_sheet(placements)],
    }
}

fn stats_sheets(stats: &AttendanceStats, distance: &DistanceStats) -> Vec<Sheet> {
    let ratio_row = |label: &str, attended: usize, total: usize, pct: u32| {
        vec![
            Cell::text(label),
            Cell::number(attended as u32),
            Cell::number(total as u32),
            Cell::text(format_percentage(pct)),
        ]
    };

    let attendance = Sheet {
        name: "Attendance",
        headers: vec!["Window", "Attended", "Total", "Rate"],
        rows: vec![
            ratio_row("Overall", stats.attended, stats.total, stats.overall_percentage),
            ratio_row("This week", stats.this_week.attended, stats.this_week.total, stats.this_week.percentage),
            ratio_row("This month", stats.this_month.attended, stats.this_month.total, stats.this_month.percentage),
        ],
    };

    let p = &stats.punctuality;
    let punctuality = Sheet {
        name: "Punctuality",
        headers: vec!["Class", "Count", "Rate"],
        rows: vec![
            vec![Cell::text("On time"), Cell::number(p.on_time as u32), Cell::text(format_percentage(p.on_time_percentage))],
            vec![Cell::text("Late"), Cell::number(p.late as u32), Cell::text(format_percentage(p.late_percentage))],
            vec![Cell::text("Very late"), Cell::number(p.very_late as u32), Cell::text(format_percentage(p.very_late_percentage))],
        ],
    };

    let weekdays = Sheet {
        name: "Weekdays",
        headers: vec!["Day", "Attended", "Total", "Rate"],
        rows: stats
            .by_weekday
            .iter()
            .map(|d| ratio_row(&d.weekday.to_string(), d.ratio.attended, d.ratio.total, d.ratio.percentage))
            .collect(),
    };

    let trend = Sheet {
        name: "Trend",
        headers: vec!["Month", "Attended", "Total", "Rate"],
        rows: stats
            .trend
            .iter()
            .map(|m| ratio_row(&m.label, m.ratio.attended, m.ratio.total, m.ratio.percentage))
            .collect(),
    };

    let distance = Sheet {
        name: "Distance",
        headers: vec!["Window", "Distance"],
        rows: [
            ("This week", distance.this_week_km),
            ("This month", distance.this_month_km),
            ("This year", distance.this_year_km),
            ("All time", distance.total_km),
        ]
        .iter()
        .map(|(label, km)| vec![Cell::text(*label), Cell::text(format_km(*km))])
        .collect(),
    };

    vec![attendance, punctuality, weekdays, trend, distance]
}

fn squad_sheet(summaries: &[SwimmerSummary]) -> Sheet {
    Sheet {
        name: "Squad",
        headers: vec!["ID", "Swimmer", "Attended", "Total", "Overall", "This month", "On time"],
        rows: summaries
            .iter()
            .map(|s| {
                vec![
                    Cell::number(s.swimmer_id as f64),
                    Cell::text(s.name.as_str()),
                    Cell::number(s.attended as u32),
                    Cell::number(s.total as u32),
                    Cell::text(format_percentage(s.overall_percentage)),
                    Cell::text(format_percentage(s.this_month_percentage)),
                    Cell::text(format_percentage(s.on_time_percentage)),
                ]
            })
            .collect(),
    }
}

fn timetable_sheet(placements: &[FormattedPlacement]) -> Sheet {
    Sheet {
        name: "Timetable",
        headers: vec!["ID", "Date", "Time", "Squad", "Focus", "Top", "Height", "Left", "Width"],
        rows: placements
            .iter()
            .map(|p| {
                vec![
                    Cell::number(p.session_id as f64),
                    Cell::text(p.date.as_str()),
                    Cell::text(p.time.as_str()),
                    Cell::text(p.squad.as_str()),
                    Cell::text(p.focus.as_str()),
                    Cell::text(p.top.as_str()),
                    Cell::text(p.height.as_str()),
                    Cell::text(p.left.as_str()),
                    Cell::text(p.width.as_str()),
                ]
            })
            .collect(),
    }
}
