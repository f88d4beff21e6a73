#[cfg(test)]
mod tests {
    use poolside::libs::config::{AnalyticsConfig, Config, TimetableConfig, CONFIG_FILE_NAME};
    use poolside::libs::data_storage::DataStorage;
    use poolside::libs::layout::LayoutStrategy;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Scratch data directory standing in for the user's.
    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.storage.get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("poolside"));
            ConfigTestContext { temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());

        let options = config.layout_options().unwrap();
        assert_eq!(options.day_origin_minutes, 360);
        assert_eq!(options.hour_height_px, 60.0);
        assert_eq!(options.strategy, LayoutStrategy::SameStart);
        assert_eq!(config.analytics_options().trend_months, 6);
        assert_eq!(config.search_options().excerpt_radius, 50);

        let grid = config.hour_grid().unwrap();
        assert_eq!((grid.start_hour, grid.end_hour), (6, 20));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            timetable: Some(TimetableConfig {
                day_origin: "05:00".to_string(),
                day_end: "22:00".to_string(),
                hour_height: 48.0,
                strategy: LayoutStrategy::Greedy,
            }),
            analytics: Some(AnalyticsConfig { trend_months: 12, excerpt_radius: 30 }),
            database: Some(ctx.temp_dir.path().join("club.db")),
        };
        config.save_to(&ctx.config_path()).unwrap();

        let read = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.layout_options().unwrap().day_origin_minutes, 300);
        assert_eq!(read.database_path(&ctx.storage).unwrap(), ctx.temp_dir.path().join("club.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_sections(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "timetable": { "day_origin": "07:00", "day_end": "19:00", "hour_height": 90.0 } }"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.timetable().strategy, LayoutStrategy::SameStart);
        assert_eq!(config.analytics(), AnalyticsConfig::default());
        assert_eq!(config.database_path(&ctx.storage).unwrap(), ctx.temp_dir.path().join("poolside").join("poolside.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_fails(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_origin_fails(ctx: &mut ConfigTestContext) {
        let config = Config {
            timetable: Some(TimetableConfig { day_origin: "6 o'clock".to_string(), ..TimetableConfig::default() }),
            ..Config::default()
        };
        config.save_to(&ctx.config_path()).unwrap();

        let read = Config::read_from(&ctx.config_path()).unwrap();
        assert!(read.layout_options().is_err());
        assert!(read.hour_grid().is_err());
    }
}
