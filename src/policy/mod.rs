//! Business rules for legal reservation times.
//!
//! The policy layer owns the minute grid and the correction fallback. Both
//! are injectable (validation and correction take an [`HoursPolicy`]
//! rather than baking the rules in) and both can be loaded from a TOML
//! file through [`config::HoursConfig`].

pub mod config;
pub mod minute_grid;

use once_cell::sync::Lazy;

use crate::core::domain::TimeOfDay;
use crate::parsing::time_parser::{is_valid_time_format, parse_time};

pub use config::{ConfigError, HoursConfig};
pub use minute_grid::{GridError, MinuteGrid, SnappedMinute, QUARTER_HOUR_MINUTES};

static DEFAULT_POLICY: Lazy<HoursPolicy> = Lazy::new(HoursPolicy::default);

/// The rules a business-hours value must satisfy: the minute grid times
/// must sit on, and the fallback correction reaches for when input is
/// beyond repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursPolicy {
    grid: MinuteGrid,
    fallback: TimeOfDay,
}

impl HoursPolicy {
    /// Creates a policy, rejecting a fallback that does not itself sit on
    /// the grid: correction must always produce a legal value.
    pub fn new(grid: MinuteGrid, fallback: TimeOfDay) -> Result<Self, ConfigError> {
        if !grid.is_allowed(u32::from(fallback.minute())) {
            return Err(ConfigError::InvalidFallback {
                value: fallback.to_string(),
                reason: format!(
                    "minute {:02} is not on the minute grid",
                    fallback.minute()
                ),
            });
        }

        Ok(Self { grid, fallback })
    }

    pub fn grid(&self) -> &MinuteGrid {
        &self.grid
    }

    pub fn fallback(&self) -> TimeOfDay {
        self.fallback
    }

    /// The canonical single-string validity check: strict `HH:MM` shape
    /// and a minute on the grid. All higher-level validation composes this.
    pub fn is_valid_time(&self, input: &str) -> bool {
        is_valid_time_format(input) && self.grid.is_allowed(parse_time(input).minute)
    }
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            grid: MinuteGrid::default(),
            fallback: TimeOfDay::new(9, 0).expect("default fallback is a valid time"),
        }
    }
}

/// The process-wide default policy: quarter-hour grid, `09:00` fallback.
pub fn default_policy() -> &'static HoursPolicy {
    &DEFAULT_POLICY
}

/// Membership test against the default minute grid.
pub fn is_valid_minute(minute: u32) -> bool {
    default_policy().grid().is_allowed(minute)
}

/// The default grid's legal minute values, as a fresh copy on every call.
pub fn allowed_minutes() -> Vec<u8> {
    QUARTER_HOUR_MINUTES.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_time_requires_shape_and_grid() {
        let policy = HoursPolicy::default();

        assert!(policy.is_valid_time("09:00"));
        assert!(policy.is_valid_time("9:15"));
        assert!(policy.is_valid_time("23:30"));

        assert!(!policy.is_valid_time("09:45"), "off-grid minute");
        assert!(!policy.is_valid_time("09:07"), "off-grid minute");
        assert!(!policy.is_valid_time("9:5"), "loose shape");
        assert!(!policy.is_valid_time("24:00"), "hour out of range");
    }

    #[test]
    fn policy_rejects_off_grid_fallback() {
        let grid = MinuteGrid::default();
        let fallback = TimeOfDay::new(9, 45).unwrap();

        assert!(matches!(
            HoursPolicy::new(grid, fallback),
            Err(ConfigError::InvalidFallback { .. })
        ));
    }

    #[test]
    fn is_valid_minute_uses_the_default_grid() {
        assert!(is_valid_minute(0));
        assert!(is_valid_minute(15));
        assert!(is_valid_minute(30));
        assert!(!is_valid_minute(45));
        assert!(!is_valid_minute(60));
    }

    #[test]
    fn allowed_minutes_returns_a_fresh_copy() {
        let mut first = allowed_minutes();
        first.push(45);

        assert_eq!(allowed_minutes(), vec![0, 15, 30]);
    }
}
