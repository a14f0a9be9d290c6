//! Core domain types.

pub mod domain;

pub use domain::{BusinessHours, RawTime, TimeOfDay, TimeOfDayError};
