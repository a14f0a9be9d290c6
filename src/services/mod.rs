//! Validation and correction services over `"HH:MM"` strings.
//!
//! - [`validation`]: business-hours window validation with typed error kinds
//! - [`correction`]: total snap-to-grid minute correction

pub mod correction;
pub mod validation;

pub use correction::{correct_time_minutes, correct_time_minutes_with};
pub use validation::{
    is_valid_time, validate_business_hours, validate_business_hours_with, WindowError,
};
