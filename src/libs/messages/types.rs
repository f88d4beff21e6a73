#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleTimetable,
    ConfigModuleAnalytics,
    ConfigModuleDatabase,
    PromptSelectModules,
    PromptDayOrigin,
    PromptDayEnd,
    PromptHourHeight,
    PromptLayoutStrategy,
    PromptTrendMonths,
    PromptExcerptRadius,
    PromptDatabasePath,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,

    // === IMPORT MESSAGES ===
    ImportingSnapshot(String), // path
    ImportCompleted {
        sessions: usize,
        attendance: usize,
        swimmers: usize,
    },
    InvalidSessionTimes(i64, String), // session id, reason
    SnapshotEmpty,
    DistanceTotalsFilled(usize),

    // === TIMETABLE MESSAGES ===
    TimetableHeader(String, String), // location, date
    TimetableWeekHeader(String, String), // location, week start
    NoSessionsForDay(String),             // date
    NoSessionsAnywhere(String),           // date
    LocationNotFound(i64),
    SessionsOutsideGrid(usize),

    // === STATISTICS MESSAGES ===
    SwimmerNotFound(i64),
    StatsHeader(String, String), // swimmer, date
    AttendanceSection,
    PunctualitySection,
    WeekdaySection,
    TrendSection,
    DistanceSection,
    NoAttendanceRecords(String), // swimmer
    SquadNotFound(i64),
    SquadHeader(String, String), // squad, date
    NoSwimmersInSquad(String),

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String, usize), // query, hits
    NoSearchResults(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path
    ExportNeedsSwimmer,
    ExportNeedsSquad,
}
