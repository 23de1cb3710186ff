//! Settings file for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_hanoi::{AnimationSpeed, DEFAULT_DISKS, validate_disk_count};
use tracing::{debug, info, instrument};

/// Environment variable naming a settings file to load when `--config` is absent.
pub const CONFIG_ENV: &str = "STRICTLY_HANOI_CONFIG";

/// Front-end settings, loaded from TOML.
///
/// ```toml
/// disks = 5
/// speed = 3
/// pause_ms = 100
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Disk count for new games.
    #[serde(default = "default_disks")]
    disks: u8,

    /// Animation speed level (1-5).
    #[serde(default = "default_speed")]
    speed: u8,

    /// Pause between animated moves, in milliseconds.
    #[serde(default = "default_pause_ms")]
    pause_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_disks() -> u8 {
    DEFAULT_DISKS
}

fn default_speed() -> u8 {
    AnimationSpeed::default().level()
}

fn default_pause_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disks: default_disks(),
            speed: default_speed(),
            pause_ms: default_pause_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        info!(disks = settings.disks, speed = settings.speed, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path`, else from the file named by [`CONFIG_ENV`], else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Replaces disk count and speed with command-line values, when given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        disks: Option<u8>,
        speed: Option<u8>,
    ) -> Result<Self, SettingsError> {
        if let Some(disks) = disks {
            self.disks = disks;
        }
        if let Some(speed) = speed {
            self.speed = speed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks the disk count and speed level.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_disk_count(self.disks).map_err(|e| SettingsError::new(e.to_string()))?;
        self.animation_speed()?;
        Ok(())
    }

    /// Speed level as an [`AnimationSpeed`].
    pub fn animation_speed(&self) -> Result<AnimationSpeed, SettingsError> {
        AnimationSpeed::from_level(self.speed).ok_or_else(|| {
            SettingsError::new(format!("Speed {} is outside 1..=5", self.speed))
        })
    }

    /// Pause between animated moves.
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
