//! Configuration file support for the HIIT companion.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/hiit/config.toml`.

use crate::{Catalog, Error, Goal, Result, TargetArea, WorkoutConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub workout: WorkoutDefaults,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Setup-screen defaults used when the command line leaves an option out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDefaults {
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,

    #[serde(default = "default_target_area")]
    pub target_area: TargetArea,

    #[serde(default = "default_goal")]
    pub goal: Goal,

    #[serde(default = "default_exercise_duration_seconds")]
    pub exercise_duration_seconds: u32,
}

impl Default for WorkoutDefaults {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
            target_area: default_target_area(),
            goal: default_goal(),
            exercise_duration_seconds: default_exercise_duration_seconds(),
        }
    }
}

impl WorkoutDefaults {
    pub fn to_workout_config(&self) -> WorkoutConfig {
        WorkoutConfig {
            duration_minutes: self.duration_minutes,
            target_area: self.target_area,
            goal: self.goal,
            exercise_duration_seconds: self.exercise_duration_seconds,
        }
    }
}

/// Exercise catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in exercises
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Countdown and summary parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Beep on each of the last N seconds of a countdown
    #[serde(default = "default_countdown_beeps")]
    pub countdown_beeps: u32,

    #[serde(default = "default_calories_per_second")]
    pub calories_per_second: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            countdown_beeps: default_countdown_beeps(),
            calories_per_second: default_calories_per_second(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("hiit")
}

fn default_duration_minutes() -> u32 {
    10
}

fn default_target_area() -> TargetArea {
    TargetArea::Abs
}

fn default_goal() -> Goal {
    Goal::Endurance
}

fn default_exercise_duration_seconds() -> u32 {
    WorkoutConfig::DEFAULT_EXERCISE_DURATION_SECONDS
}

fn default_countdown_beeps() -> u32 {
    crate::Countdown::DEFAULT_BEEPS
}

fn default_calories_per_second() -> f64 {
    crate::DEFAULT_CALORIES_PER_SECOND
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.workout.to_workout_config().validate().map_err(|e| {
            Error::Config(format!("invalid [workout] defaults in {:?}: {}", path, e))
        })?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("hiit").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load_from(path),
            None => Ok(crate::get_default_catalog().clone()),
        }
    }
}
