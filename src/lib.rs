//! Time-of-day parsing, validation, and business-hours window checking for
//! reservation scheduling.
//!
//! Times are `"HH:MM"` strings on a 24-hour clock, constrained to a
//! discrete minute grid (`{0, 15, 30}` by default). The crate validates
//! that a (start, end) pair forms a legal opening window, and snaps
//! off-grid minutes onto the nearest legal slot.
//!
//! # Example
//!
//! ```
//! use business_hours::services::{correct_time_minutes, validate_business_hours};
//!
//! let window = validate_business_hours("09:00", "18:30").unwrap();
//! assert_eq!(window.duration_minutes(), 570);
//!
//! // A reservation form suggesting the nearest legal slot:
//! assert_eq!(correct_time_minutes("09:08"), "09:15");
//! ```

pub mod core;
pub mod parsing;
pub mod policy;
pub mod services;
