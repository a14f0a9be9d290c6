//! Domain models for clock times and business-hours windows.
//!
//! This module provides the core value types shared across parsing, policy,
//! and validation: the lenient parse result, the validated time of day, and
//! the validated opening window.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::parsing::time_parser::{is_valid_time_format, parse_time};

/// The outcome of leniently parsing an `"HH:MM"` string.
///
/// Carries no range guarantees: components that were missing or failed to
/// parse are reported as `0`, and out-of-range components pass through
/// untouched. Strict checking happens separately, through
/// [`is_valid_time_format`] and the policy-level validity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTime {
    pub hour: u32,
    pub minute: u32,
}

impl RawTime {
    /// Total minutes since midnight, the linear ordering key for same-day
    /// time comparison.
    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Error raised when constructing a [`TimeOfDay`] from invalid components
/// or an invalid string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeOfDayError {
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u8),

    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u8),

    #[error("{0:?} is not a valid HH:MM time")]
    InvalidFormat(String),
}

/// A validated time of day on a 24-hour clock.
///
/// Renders (via `Display` and serde) as zero-padded `"HH:MM"`. Minute-grid
/// membership is deliberately *not* a type invariant: comparison and
/// correction must accept off-grid minutes such as `09:07`, so the grid is
/// enforced by [`HoursPolicy`](crate::policy::HoursPolicy) at validation
/// time instead.
///
/// # Examples
///
/// ```
/// use business_hours::core::domain::TimeOfDay;
///
/// let open: TimeOfDay = "09:00".parse().unwrap();
/// let close: TimeOfDay = "18:30".parse().unwrap();
///
/// assert!(open < close);
/// assert_eq!(close.to_string(), "18:30");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeOfDayError> {
        if hour > 23 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Total minutes since midnight, in `[0, 1439]`.
    pub fn total_minutes(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Converts from a [`chrono::NaiveTime`], truncating seconds and
    /// sub-second precision.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Converts to a [`chrono::NaiveTime`] at second zero.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .expect("TimeOfDay holds a valid clock time")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    /// Strict parsing: the input must already pass the `H:MM`/`HH:MM`
    /// format check, unlike the lenient [`parse_time`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_time_format(s) {
            return Err(TimeOfDayError::InvalidFormat(s.to_string()));
        }

        let raw = parse_time(s);
        Ok(Self {
            hour: raw.hour as u8,
            minute: raw.minute as u8,
        })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A validated business-hours window.
///
/// Both endpoints sit on the minute grid and the closing time is strictly
/// later than the opening time. Windows are only built through
/// [`validate_business_hours`](crate::services::validate_business_hours),
/// which is what upholds those guarantees.
///
/// # Examples
///
/// ```
/// use business_hours::services::validate_business_hours;
///
/// let window = validate_business_hours("09:00", "18:30").unwrap();
///
/// assert_eq!(window.duration_minutes(), 570);
/// assert!(window.contains(&"12:15".parse().unwrap()));
/// assert!(!window.contains(&"18:30".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessHours {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl BusinessHours {
    /// Builds a window from endpoints the validation service has already
    /// checked.
    pub(crate) fn from_validated(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    /// Window length in minutes. Strictly positive by construction.
    pub fn duration_minutes(&self) -> u16 {
        self.close.total_minutes() - self.open.total_minutes()
    }

    /// Half-open membership test: `open <= time < close`.
    pub fn contains(&self, time: &TimeOfDay) -> bool {
        *time >= self.open && *time < self.close
    }
}

impl fmt::Display for BusinessHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}
