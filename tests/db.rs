#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use poolside::db::attendance::AttendanceRecords;
    use poolside::db::db::Db;
    use poolside::db::migrations::{get_db_version, MigrationManager};
    use poolside::db::sessions::Sessions;
    use poolside::db::snapshots::Snapshots;
    use poolside::db::swimmers::Swimmers;
    use poolside::libs::snapshot::Snapshot;
    use poolside::libs::status::AttendanceStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const SNAPSHOT: &str = r##"{
        "squads": [{ "id": 1, "name": "Juniors" }, { "id": 2, "name": "Masters", "color": "#0891b2" }],
        "locations": [{ "id": 1, "name": "Main Pool" }],
        "coaches": [{ "id": 1, "first_name": "Ana", "last_name": "Silva" }],
        "swimmers": [
            { "id": 1, "first_name": "Tom", "last_name": "Reed", "squad_id": 1, "date_of_birth": "2011-04-02" },
            { "id": 2, "first_name": "Mia", "last_name": "Cole", "squad_id": 1, "date_of_birth": "2012-09-14" }
        ],
        "sessions": [
            { "id": 10, "date": "2026-10-19", "start_time": "06:00", "end_time": "07:30", "squad_id": 1,
              "location_id": 1, "focus": "aerobic_capacity", "content": "<p>4x400 free</p>",
              "distance": { "freestyle": 1600, "kick": 400, "total": 2000 },
              "coaches": [{ "role": "lead", "coach_id": 1 }, { "role": "helper", "coach_id": 1 }] },
            { "id": 11, "date": "2026-10-20", "start_time": "17:00", "end_time": "18:00", "squad_id": 2,
              "location_id": 1, "focus": "vo2_max" }
        ],
        "attendance": [
            { "id": 1, "session_id": 10, "swimmer_id": 1, "status": "Present", "notes": "late arrival" },
            { "id": 2, "session_id": 10, "swimmer_id": 2, "status": "very late" },
            { "id": 3, "session_id": 11, "swimmer_id": 1, "status": "absent", "notes": "" }
        ]
    }"##;

    struct DbTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("poolside.db")).unwrap();
            DbTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_migrations_applied_on_open(ctx: &mut DbTestContext) {
        let manager = MigrationManager::new();
        assert_eq!(get_db_version(&ctx.db.conn).unwrap(), manager.latest_version());
        assert!(manager.pending(&ctx.db.conn).unwrap().is_empty());

        let history = manager.get_migration_history(&ctx.db.conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_core_tables", "create_attendance", "add_session_distances"]);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_running_migrations_twice_is_noop(ctx: &mut DbTestContext) {
        MigrationManager::new().run_migrations(&mut ctx.db.conn).unwrap();
        let history = MigrationManager::new().get_migration_history(&ctx.db.conn).unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_fresh_connection_has_every_migration_pending() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        let pending = MigrationManager::new().pending(&conn).unwrap();
        let versions: Vec<u32> = pending.iter().map(|(version, _)| *version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_migrated_store_has_nothing_pending(ctx: &mut DbTestContext) {
        assert!(MigrationManager::new().pending(&ctx.db.conn).unwrap().is_empty());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_import_and_load_round_trip(ctx: &mut DbTestContext) {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let summary = Snapshots::new(&mut ctx.db.conn).import(&snapshot).unwrap();
        assert_eq!((summary.sessions, summary.attendance, summary.swimmers), (2, 3, 2));

        let loaded = Snapshots::new(&mut ctx.db.conn).load().unwrap();
        assert_eq!(loaded.sessions, snapshot.sessions);
        assert_eq!(loaded.attendance, snapshot.attendance);
        assert_eq!(loaded.squads.len(), 2);
        assert_eq!(loaded.squad(2).and_then(|s| s.color.clone()).as_deref(), Some("#0891b2"));
        assert_eq!(loaded.session(10).map(|s| s.total_metres()), Some(2000));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_reimport_replaces_records(ctx: &mut DbTestContext) {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        Snapshots::new(&mut ctx.db.conn).import(&snapshot).unwrap();

        snapshot.sessions[0].coaches.truncate(1);
        snapshot.sessions[0].distance = None;
        snapshot.attendance[2].status = AttendanceStatus::Late;
        Snapshots::new(&mut ctx.db.conn).import(&snapshot).unwrap();

        let sessions = Sessions::new(&ctx.db.conn).fetch_all().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].coaches.len(), 1);
        assert!(sessions[0].distance.is_none());

        let records = AttendanceRecords::new(&ctx.db.conn).fetch_swimmer(1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, AttendanceStatus::Late);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_reimport_keeps_records_missing_from_file(ctx: &mut DbTestContext) {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        Snapshots::new(&mut ctx.db.conn).import(&snapshot).unwrap();

        let partial = Snapshot { sessions: snapshot.sessions[..1].to_vec(), ..Snapshot::default() };
        Snapshots::new(&mut ctx.db.conn).import(&partial).unwrap();

        let loaded = Snapshots::new(&mut ctx.db.conn).load().unwrap();
        assert_eq!(loaded.sessions.len(), 2);
        assert_eq!(loaded.attendance.len(), 3);
        assert_eq!(loaded.swimmers.len(), 2);
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_swimmer_loader(ctx: &mut DbTestContext) {
        Snapshots::new(&mut ctx.db.conn).import(&Snapshot::from_json(SNAPSHOT).unwrap()).unwrap();
        let snapshots = Snapshots::new(&mut ctx.db.conn);

        let swimmer = snapshots.load_swimmer(1).unwrap().unwrap();
        assert_eq!(swimmer.swimmers.len(), 1);
        assert_eq!(swimmer.swimmers[0].display_name(), "Tom Reed");
        assert_eq!(swimmer.attendance.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(swimmer.sessions.len(), 2);

        assert!(snapshots.load_swimmer(99).unwrap().is_none());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_squad_loader(ctx: &mut DbTestContext) {
        Snapshots::new(&mut ctx.db.conn).import(&Snapshot::from_json(SNAPSHOT).unwrap()).unwrap();
        let squad = Snapshots::new(&mut ctx.db.conn).load_squad(1).unwrap();

        assert_eq!(squad.squad(1).map(|s| s.name.as_str()), Some("Juniors"));
        assert_eq!(squad.swimmers.len(), 2);
        assert_eq!(squad.attendance.len(), 3);
        assert!(Snapshots::new(&mut ctx.db.conn).load_squad(2).unwrap().swimmers.is_empty());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_timetable_loader(ctx: &mut DbTestContext) {
        Snapshots::new(&mut ctx.db.conn).import(&Snapshot::from_json(SNAPSHOT).unwrap()).unwrap();
        let snapshots = Snapshots::new(&mut ctx.db.conn);
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();

        let week = snapshots.load_timetable(Some(1), true, wednesday).unwrap();
        assert_eq!(week.sessions.iter().map(|s| s.id).collect::<Vec<_>>(), vec![10, 11]);
        assert_eq!(week.locations.len(), 1);
        assert!(week.attendance.is_empty());

        let day = snapshots.load_timetable(Some(1), false, monday).unwrap();
        assert_eq!(day.sessions.iter().map(|s| s.id).collect::<Vec<_>>(), vec![10]);
        assert!(snapshots.load_timetable(None, false, wednesday).unwrap().sessions.is_empty());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_repository_filters(ctx: &mut DbTestContext) {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        Snapshots::new(&mut ctx.db.conn).import(&snapshot).unwrap();

        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let sessions = Sessions::new(&ctx.db.conn);
        assert_eq!(sessions.fetch_date(monday).unwrap().len(), 1);
        let week = sessions
            .fetch_location_range(1, monday, NaiveDate::from_ymd_opt(2026, 10, 25).unwrap())
            .unwrap();
        assert_eq!(week.iter().map(|s| s.id).collect::<Vec<_>>(), vec![10, 11]);

        let swimmers = Swimmers::new(&ctx.db.conn);
        assert_eq!(swimmers.fetch_squad(1).unwrap().len(), 2);
        assert_eq!(swimmers.fetch(2).unwrap().map(|s| s.display_name()).as_deref(), Some("Mia Cole"));
        assert!(swimmers.fetch(99).unwrap().is_none());
    }

    #[test]
    fn test_invalid_session_times_are_reported() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        snapshot.sessions[1].end_time = "16:00".to_string();
        let invalid = snapshot.invalid_sessions();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0.id, 11);
    }

    #[test]
    fn test_in_memory_store() {
        let mut db = Db::in_memory().unwrap();
        let loaded = Snapshots::new(&mut db.conn).load().unwrap();
        assert_eq!(loaded, Snapshot::default());
    }
}
