//! Parsers and formatters for `"HH:MM"` clock strings.
//!
//! Parsing here is deliberately lenient: [`parse_time`] is total and maps
//! malformed components to `0`. Strict shape checking lives in
//! [`is_valid_time_format`], and the grid-aware validity check on top of it
//! in [`crate::services`].

pub mod time_parser;


pub use time_parser::{compare_times, format_time, is_valid_time_format, parse_time};
