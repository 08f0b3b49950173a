use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::RankingThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub planner: PlannerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSettings {
    pub budget: f64,
    /// Free-form label attached to exported reports
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_long_stay_days")]
    pub long_stay_days: i64,
    #[serde(default = "default_family_min_seats")]
    pub family_min_seats: u32,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            long_stay_days: default_long_stay_days(),
            family_min_seats: default_family_min_seats(),
        }
    }
}

impl RankingSettings {
    pub fn thresholds(&self) -> RankingThresholds {
        RankingThresholds {
            long_stay_days: self.long_stay_days,
            family_min_seats: self.family_min_seats,
        }
    }
}

fn default_long_stay_days() -> i64 { 10 }
fn default_family_min_seats() -> u32 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub flights_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    pub export_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRIP_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRIP__PLANNER__BUDGET -> planner.budget
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TRIP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
