//! Configuration loading and typed config structures for the ritual engine.
//!
//! The canonical configuration lives in `ritual-config.yaml` at the
//! project root. Every field is optional; the defaults reproduce the
//! stock ritual constants (search radius 10, base stability 75, length
//! `40 + 5 * socles`, one activation every 5 ticks).

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level ritual engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RitualEngineConfig {
    /// Socle scan and stability scoring parameters.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Scheduler cadence.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Host loop settings for the engine binary.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RitualEngineConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.search_radius == 0 {
            return Err(ConfigError::Invalid {
                reason: "scan.search_radius must be at least 1".to_owned(),
            });
        }
        if self.schedule.activation_interval == 0 {
            return Err(ConfigError::Invalid {
                reason: "schedule.activation_interval must be at least 1".to_owned(),
            });
        }
        if self.scan.spread_scale_cap <= 0.0 || !self.scan.spread_scale_cap.is_finite() {
            return Err(ConfigError::Invalid {
                reason: "scan.spread_scale_cap must be a positive number".to_owned(),
            });
        }
        Ok(())
    }
}

/// Socle scan and stability scoring parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanConfig {
    /// Radius, in blocks, searched around the ritual center.
    #[serde(default = "default_search_radius")]
    pub search_radius: u32,

    /// Only consider socles on the center's elevation.
    #[serde(default = "default_true")]
    pub same_elevation_only: bool,

    /// Stability before any penalty or modifier.
    #[serde(default = "default_base_stability")]
    pub base_stability: f64,

    /// Mean pairwise distance above which the spread penalty applies.
    #[serde(default = "default_distance_penalty_threshold")]
    pub distance_penalty_threshold: f64,

    /// Stability lost per block of mean distance above the threshold.
    #[serde(default = "default_distance_penalty_factor")]
    pub distance_penalty_factor: f64,

    /// Divisor applied to the mean distance in the spread scale.
    #[serde(default = "default_mean_scale_divisor")]
    pub mean_scale_divisor: f64,

    /// Numerator divided by the standard deviation in the spread scale.
    #[serde(default = "default_spread_numerator")]
    pub spread_numerator: f64,

    /// Ceiling of the spread scale factor.
    #[serde(default = "default_spread_scale_cap")]
    pub spread_scale_cap: f64,

    /// Socles closer than this to the center halve stability.
    #[serde(default = "default_core_proximity_threshold")]
    pub core_proximity_threshold: f64,

    /// Multiplier applied for a socle too close to the center.
    #[serde(default = "default_core_proximity_factor")]
    pub core_proximity_factor: f64,

    /// Socles with a neighbour closer than this count as crowded.
    #[serde(default = "default_crowding_threshold")]
    pub crowding_threshold: f64,

    /// Multiplier applied for a crowded socle.
    #[serde(default = "default_crowding_factor")]
    pub crowding_factor: f64,

    /// Ritual length with no socles, in ticks.
    #[serde(default = "default_base_length")]
    pub base_length: u32,

    /// Additional ritual ticks per socle.
    #[serde(default = "default_ticks_per_socle")]
    pub ticks_per_socle: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_radius: default_search_radius(),
            same_elevation_only: true,
            base_stability: default_base_stability(),
            distance_penalty_threshold: default_distance_penalty_threshold(),
            distance_penalty_factor: default_distance_penalty_factor(),
            mean_scale_divisor: default_mean_scale_divisor(),
            spread_numerator: default_spread_numerator(),
            spread_scale_cap: default_spread_scale_cap(),
            core_proximity_threshold: default_core_proximity_threshold(),
            core_proximity_factor: default_core_proximity_factor(),
            crowding_threshold: default_crowding_threshold(),
            crowding_factor: default_crowding_factor(),
            base_length: default_base_length(),
            ticks_per_socle: default_ticks_per_socle(),
        }
    }
}

/// Scheduler cadence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// Ticks between two socle activations.
    #[serde(default = "default_activation_interval")]
    pub activation_interval: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            activation_interval: default_activation_interval(),
        }
    }
}

/// Host loop settings for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Seed for the random source used to shuffle socle order.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Real-time milliseconds per tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Hard stop for the host loop.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: default_max_ticks(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_search_radius() -> u32 {
    10
}

const fn default_base_stability() -> f64 {
    75.0
}

const fn default_distance_penalty_threshold() -> f64 {
    4.5
}

const fn default_distance_penalty_factor() -> f64 {
    15.0
}

const fn default_mean_scale_divisor() -> f64 {
    75.0
}

const fn default_spread_numerator() -> f64 {
    1.5
}

const fn default_spread_scale_cap() -> f64 {
    1.25
}

const fn default_core_proximity_threshold() -> f64 {
    1.5
}

const fn default_core_proximity_factor() -> f64 {
    0.5
}

const fn default_crowding_threshold() -> f64 {
    1.25
}

const fn default_crowding_factor() -> f64 {
    0.975
}

const fn default_base_length() -> u32 {
    40
}

const fn default_ticks_per_socle() -> u32 {
    5
}

const fn default_activation_interval() -> u32 {
    5
}

const fn default_seed() -> u64 {
    42
}

const fn default_tick_interval_ms() -> u64 {
    50
}

const fn default_max_ticks() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}
