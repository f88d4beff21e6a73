//! Display text for every [`Message`] variant.
//!
//! Keeping all wording in one match makes it easy to review the tone of the
//! CLI and to spot messages that are no longer used.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigModuleTimetable => "Timetable settings".to_string(),
            Message::ConfigModuleAnalytics => "Analytics settings".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptSelectModules => "Select the sections to configure".to_string(),
            Message::PromptDayOrigin => "First hour of the day view (HH:MM)".to_string(),
            Message::PromptDayEnd => "End of the day view (HH:MM)".to_string(),
            Message::PromptHourHeight => "Pixels per hour".to_string(),
            Message::PromptLayoutStrategy => "How concurrent sessions share a column".to_string(),
            Message::PromptTrendMonths => "Months shown in the attendance trend".to_string(),
            Message::PromptExcerptRadius => "Characters kept around a search match".to_string(),
            Message::PromptDatabasePath => "Path of the SQLite database".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportingSnapshot(path) => format!("Importing snapshot from {}", path),
            Message::ImportCompleted { sessions, attendance, swimmers } => format!(
                "Imported {} session(s), {} attendance record(s) and {} swimmer(s)",
                sessions, attendance, swimmers
            ),
            Message::InvalidSessionTimes(id, reason) => format!("Session {} has invalid times: {}", id, reason),
            Message::SnapshotEmpty => "The snapshot contains no records".to_string(),
            Message::DistanceTotalsFilled(count) => format!("Filled in the distance total of {} session(s) from strokes", count),

            // === TIMETABLE MESSAGES ===
            Message::TimetableHeader(location, date) => format!("Timetable for {} on {}", location, date),
            Message::TimetableWeekHeader(location, week) => format!("Timetable for {}, week of {}", location, week),
            Message::NoSessionsForDay(date) => format!("No sessions on {}", date),
            Message::NoSessionsAnywhere(date) => format!("No sessions at any location on {}", date),
            Message::LocationNotFound(id) => format!("Location {} not found", id),
            Message::SessionsOutsideGrid(count) => format!("{} session(s) fall outside the day grid", count),

            // === STATISTICS MESSAGES ===
            Message::SwimmerNotFound(id) => format!("Swimmer {} not found", id),
            Message::StatsHeader(name, date) => format!("Statistics for {} as of {}", name, date),
            Message::AttendanceSection => "Attendance".to_string(),
            Message::PunctualitySection => "Punctuality".to_string(),
            Message::WeekdaySection => "By day of week".to_string(),
            Message::TrendSection => "Monthly trend".to_string(),
            Message::DistanceSection => "Distance".to_string(),
            Message::NoAttendanceRecords(name) => format!("No attendance has been recorded for {}", name),
            Message::SquadNotFound(id) => format!("Squad {} not found", id),
            Message::SquadHeader(name, date) => format!("Squad {} attendance as of {}", name, date),
            Message::NoSwimmersInSquad(name) => format!("Squad {} has no swimmers", name),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(query, hits) => format!("{} session(s) matching '{}'", hits, query),
            Message::NoSearchResults(query) => format!("No sessions match '{}'", query),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNeedsSwimmer => "Exporting stats requires --swimmer".to_string(),
            Message::ExportNeedsSquad => "Exporting a squad requires --squad".to_string(),
        };
        write!(f, "{}", text)
    }
}
