//! Business-hours window validation.
//!
//! Checks run fail-fast, first violation wins: the start time is checked
//! before the end time, and both before the ordering constraint. Callers
//! that need every violation at once call the single-value checks
//! themselves.

use crate::core::domain::{BusinessHours, TimeOfDay};
use crate::policy::{default_policy, HoursPolicy};

/// Why a (start, end) pair does not form a legal business-hours window.
///
/// Variants carry the offending values so callers can render their own
/// message; `Display` provides the default English text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("start time {value:?} is not a valid time on the minute grid")]
    InvalidStartTime { value: String },

    #[error("end time {value:?} is not a valid time on the minute grid")]
    InvalidEndTime { value: String },

    #[error("end time {end} must be later than start time {start}")]
    EndNotAfterStart { start: String, end: String },
}

/// Single-string validity under the default policy: strict `HH:MM` shape
/// and a minute on the grid.
pub fn is_valid_time(input: &str) -> bool {
    default_policy().is_valid_time(input)
}

/// Validate a (start, end) pair as a business-hours window under the
/// default policy.
///
/// # Examples
///
/// ```
/// use business_hours::services::{validate_business_hours, WindowError};
///
/// assert!(validate_business_hours("09:00", "18:30").is_ok());
///
/// let err = validate_business_hours("09:00", "09:00").unwrap_err();
/// assert!(matches!(err, WindowError::EndNotAfterStart { .. }));
/// ```
pub fn validate_business_hours(start: &str, end: &str) -> Result<BusinessHours, WindowError> {
    validate_business_hours_with(default_policy(), start, end)
}

/// Validate a (start, end) pair against an explicit policy.
pub fn validate_business_hours_with(
    policy: &HoursPolicy,
    start: &str,
    end: &str,
) -> Result<BusinessHours, WindowError> {
    if !policy.is_valid_time(start) {
        return Err(WindowError::InvalidStartTime {
            value: start.to_string(),
        });
    }

    if !policy.is_valid_time(end) {
        return Err(WindowError::InvalidEndTime {
            value: end.to_string(),
        });
    }

    let open: TimeOfDay = start.parse().expect("grid-checked time parses");
    let close: TimeOfDay = end.parse().expect("grid-checked time parses");

    if close <= open {
        return Err(WindowError::EndNotAfterStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(BusinessHours::from_validated(open, close))
}
