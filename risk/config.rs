use crate::parameters::{FIRST_TABULATED_AGE, LAST_TABULATED_AGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_MIN_AGE: f64 = 25.0;
pub const DEFAULT_MAX_AGE: f64 = 80.0;
pub const DEFAULT_HORIZON_YEARS: f64 = 5.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML config file: {0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config to TOML format: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
    #[error(
        "Age limits [{min_age}, {max_age}) must be increasing and lie within the tabulated span 20-90."
    )]
    InvalidAgeLimits { min_age: f64, max_age: f64 },
    #[error("Projection horizon must be a positive number of years, got {0}.")]
    InvalidHorizon(f64),
}

/// Current ages accepted when building risk factors, as the half-open range
/// `[min_age, max_age)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeLimits {
    pub min_age: f64,
    pub max_age: f64,
}

impl AgeLimits {
    /// The range used by the published BCRAT package. Narrower than the tabulated
    /// 20-90 span.
    pub const REFERENCE: AgeLimits = AgeLimits {
        min_age: DEFAULT_MIN_AGE,
        max_age: DEFAULT_MAX_AGE,
    };

    #[inline]
    pub fn contains(&self, age: f64) -> bool {
        age >= self.min_age && age < self.max_age
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let lower = f64::from(FIRST_TABULATED_AGE);
        let upper = f64::from(LAST_TABULATED_AGE);
        let ordered = self.min_age < self.max_age;
        if !ordered || !(self.min_age >= lower) || !(self.max_age <= upper) {
            return Err(ConfigError::InvalidAgeLimits {
                min_age: self.min_age,
                max_age: self.max_age,
            });
        }
        Ok(())
    }
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Horizon used when the caller does not ask for one.
    pub horizon_years: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Engine settings, stored on disk as TOML.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ages: AgeLimits,
    pub projection: ProjectionConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ages.validate()?;
        let horizon = self.projection.horizon_years;
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(ConfigError::InvalidHorizon(horizon));
        }
        Ok(())
    }

    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml_string = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&toml_string)?;
        config.validate()?;
        log::debug!("Loaded engine config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut file = BufWriter::new(fs::File::create(path)?);
        file.write_all(toml_string.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
