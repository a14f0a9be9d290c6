//! Hours-policy configuration file support.
//!
//! This module provides utilities for reading the minute grid and the
//! correction fallback from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::domain::TimeOfDay;
use crate::policy::minute_grid::{GridError, MinuteGrid, QUARTER_HOUR_MINUTES};
use crate::policy::HoursPolicy;

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid minute grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("invalid correction fallback {value:?}: {reason}")]
    InvalidFallback { value: String, reason: String },

    #[error("no hours.toml found in standard locations")]
    NotFound,
}

/// Hours policy configuration from file.
///
/// ```toml
/// [grid]
/// allowed_minutes = [0, 15, 30]
///
/// [correction]
/// fallback = "09:00"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursConfig {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub correction: CorrectionSettings,
}

/// Minute grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_allowed_minutes")]
    pub allowed_minutes: Vec<u8>,
}

/// Minute correction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionSettings {
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_allowed_minutes() -> Vec<u8> {
    QUARTER_HOUR_MINUTES.to_vec()
}

fn default_fallback() -> String {
    "09:00".to_string()
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            allowed_minutes: default_allowed_minutes(),
        }
    }
}

impl Default for CorrectionSettings {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
        }
    }
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            correction: CorrectionSettings::default(),
        }
    }
}

impl HoursConfig {
    /// Load hours configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Load hours configuration from the default location.
    ///
    /// Searches for `hours.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("hours.toml"),
            PathBuf::from("config/hours.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Validate the settings and build the policy they describe.
    pub fn to_policy(&self) -> Result<HoursPolicy, ConfigError> {
        let grid = MinuteGrid::new(self.grid.allowed_minutes.clone())?;

        let fallback: TimeOfDay =
            self.correction
                .fallback
                .parse()
                .map_err(|err: crate::core::domain::TimeOfDayError| ConfigError::InvalidFallback {
                    value: self.correction.fallback.clone(),
                    reason: err.to_string(),
                })?;

        HoursPolicy::new(grid, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[grid]
allowed_minutes = [0, 15, 30, 45]

[correction]
fallback = "10:00"
"#;

        let config: HoursConfig = toml::from_str(toml).unwrap();
        let policy = config.to_policy().unwrap();

        assert_eq!(policy.grid().allowed_minutes(), &[0, 15, 30, 45]);
        assert_eq!(policy.fallback().to_string(), "10:00");
    }

    #[test]
    fn test_empty_config_yields_default_policy() {
        let config: HoursConfig = toml::from_str("").unwrap();
        let policy = config.to_policy().unwrap();

        assert_eq!(policy.grid().allowed_minutes(), &[0, 15, 30]);
        assert_eq!(policy.fallback().to_string(), "09:00");
    }

    #[test]
    fn test_rejects_grid_without_zero() {
        let toml = r#"
[grid]
allowed_minutes = [15, 30]
"#;

        let config: HoursConfig = toml::from_str(toml).unwrap();
        let result = config.to_policy();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidGrid(GridError::MissingZero))
        ));
    }

    #[test]
    fn test_rejects_malformed_fallback() {
        let toml = r#"
[correction]
fallback = "9:5"
"#;

        let config: HoursConfig = toml::from_str(toml).unwrap();
        let result = config.to_policy();

        assert!(matches!(result, Err(ConfigError::InvalidFallback { .. })));
    }

    #[test]
    fn test_rejects_off_grid_fallback() {
        let toml = r#"
[correction]
fallback = "09:45"
"#;

        let config: HoursConfig = toml::from_str(toml).unwrap();
        let result = config.to_policy();

        assert!(matches!(result, Err(ConfigError::InvalidFallback { .. })));
    }

    #[test]
    fn test_from_file_reads_a_real_file() {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[grid]\nallowed_minutes = [0, 30]\n\n[correction]\nfallback = \"08:30\"\n"
        )
        .unwrap();

        let config = HoursConfig::from_file(temp_file.path()).unwrap();
        let policy = config.to_policy().unwrap();

        assert_eq!(policy.grid().allowed_minutes(), &[0, 30]);
        assert_eq!(policy.fallback().to_string(), "08:30");
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let result = HoursConfig::from_file("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
