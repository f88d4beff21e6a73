//! Configuration management for poolside.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Every section is optional; a missing file or a
//! missing section falls back to the defaults below, so the tool works with
//! no setup at all.
//!
//! ## Sections
//!
//! - **timetable**: grid origin and end, pixels per hour, column strategy
//! - **analytics**: trailing trend length, search excerpt radius
//! - **database**: explicit path of the SQLite store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use poolside::libs::config::Config;
//!
//! let config = Config::read()?;
//! let options = config.layout_options()?;
//! println!("grid starts at minute {}", options.day_origin_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::attendance::{AnalyticsOptions, DEFAULT_TREND_MONTHS};
use crate::libs::highlight::DEFAULT_EXCERPT_RADIUS;
use crate::libs::interval::{parse_end_minutes, parse_minutes, HourGrid};
use crate::libs::layout::{LayoutOptions, LayoutStrategy};
use crate::libs::messages::Message;
use crate::libs::search::SearchOptions;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Day view settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimetableConfig {
    /// First rendered hour row and zero point of `top`, `HH:MM`.
    pub day_origin: String,
    /// End of the rendered window, `HH:MM`.
    pub day_end: String,
    /// Pixels per hour of the grid.
    pub hour_height: f64,
    #[serde(default)]
    pub strategy: LayoutStrategy,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            day_origin: "06:00".to_string(),
            day_end: "20:00".to_string(),
            hour_height: 60.0,
            strategy: LayoutStrategy::SameStart,
        }
    }
}

/// Statistics and search settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyticsConfig {
    /// Calendar months in the attendance trend, current month included.
    pub trend_months: u32,
    /// Characters kept either side of a content match.
    pub excerpt_radius: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            trend_months: DEFAULT_TREND_MONTHS,
            excerpt_radius: DEFAULT_EXCERPT_RADIUS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetable: Option<TimetableConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,

    /// Overrides the default `poolside.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Loads the user's configuration, or defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn timetable(&self) -> TimetableConfig {
        self.timetable.clone().unwrap_or_default()
    }

    pub fn analytics(&self) -> AnalyticsConfig {
        self.analytics.clone().unwrap_or_default()
    }

    /// Layout options from the timetable section; fails on a malformed
    /// `day_origin`.
    pub fn layout_options(&self) -> Result<LayoutOptions> {
        let timetable = self.timetable();
        Ok(LayoutOptions {
            day_origin_minutes: parse_minutes(&timetable.day_origin)?,
            hour_height_px: timetable.hour_height,
            strategy: timetable.strategy,
        })
    }

    pub fn hour_grid(&self) -> Result<HourGrid> {
        let timetable = self.timetable();
        Ok(HourGrid::from_bounds(&timetable.day_origin, &timetable.day_end)?)
    }

    pub fn analytics_options(&self) -> AnalyticsOptions {
        AnalyticsOptions { trend_months: self.analytics().trend_months }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions { excerpt_radius: self.analytics().excerpt_radius }
    }

    /// The configured store path, or `poolside.db` in the data directory.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => storage.get_path(crate::db::db::DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule { key: "timetable".to_string(), name: "Timetable".to_string() },
            ConfigModule { key: "analytics".to_string(), name: "Analytics".to_string() },
            ConfigModule { key: "database".to_string(), name: "Database".to_string() },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "timetable" => {
                    let default = config.timetable();
                    msg_print!(Message::ConfigModuleTimetable);

                    let strategies = [LayoutStrategy::SameStart, LayoutStrategy::Greedy];
                    let current = strategies.iter().position(|s| *s == default.strategy).unwrap_or(0);

                    config.timetable = Some(TimetableConfig {
                        day_origin: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDayOrigin.to_string())
                            .default(default.day_origin)
                            .validate_with(|v: &String| parse_minutes(v).map(|_| ()).map_err(|e| e.to_string()))
                            .interact_text()?,
                        day_end: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDayEnd.to_string())
                            .default(default.day_end)
                            .validate_with(|v: &String| parse_end_minutes(v).map(|_| ()).map_err(|e| e.to_string()))
                            .interact_text()?,
                        hour_height: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHourHeight.to_string())
                            .default(default.hour_height)
                            .interact_text()?,
                        strategy: strategies[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLayoutStrategy.to_string())
                            .items(&["Same start time", "Greedy columns"])
                            .default(current)
                            .interact()?],
                    });
                }
                "analytics" => {
                    let default = config.analytics();
                    msg_print!(Message::ConfigModuleAnalytics);
                    config.analytics = Some(AnalyticsConfig {
                        trend_months: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTrendMonths.to_string())
                            .default(default.trend_months)
                            .interact_text()?,
                        excerpt_radius: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptExcerptRadius.to_string())
                            .default(default.excerpt_radius)
                            .interact_text()?,
                    });
                }
                "database" => {
                    let default = config
                        .database_path(&DataStorage::new())
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default)
                        .interact_text()?;
                    config.database = Some(PathBuf::from(path));
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
