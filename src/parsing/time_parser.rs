//! Lenient parsing, formatting, and ordering of `"HH:MM"` strings.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::domain::RawTime;

/// One- or two-digit hour 0-23, exactly two-digit minute 00-59.
static TIME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time format pattern compiles")
});

fn parse_component(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Leniently parse a time string into its hour and minute components.
///
/// Splits on `:` and takes the first two components; a missing or
/// non-numeric component yields `0`. This never fails; malformed input is
/// not an error here, validation is a separate explicit step (see
/// [`is_valid_time_format`]).
///
/// # Examples
///
/// ```
/// use business_hours::core::domain::RawTime;
/// use business_hours::parsing::parse_time;
///
/// assert_eq!(parse_time("09:30"), RawTime { hour: 9, minute: 30 });
/// assert_eq!(parse_time("9"), RawTime { hour: 9, minute: 0 });
/// assert_eq!(parse_time("bad-input"), RawTime { hour: 0, minute: 0 });
/// ```
pub fn parse_time(input: &str) -> RawTime {
    let mut components = input.split(':');
    let hour = components.next().map(parse_component).unwrap_or(0);
    let minute = components.next().map(parse_component).unwrap_or(0);

    RawTime { hour, minute }
}

/// Render hour and minute as zero-padded `"HH:MM"`.
///
/// No range clamping is performed; callers are responsible for supplying
/// valid components.
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Strict shape check: `H:MM` or `HH:MM` with hour 0-23 and a two-digit
/// minute 00-59. Anything else is rejected outright.
pub fn is_valid_time_format(input: &str) -> bool {
    TIME_FORMAT.is_match(input)
}

/// Three-way comparison of two time strings by total minutes since
/// midnight.
///
/// Both sides go through the lenient [`parse_time`], so this is total over
/// arbitrary input. Purely a same-day linear ordering, with no timezone
/// and no day wraparound.
pub fn compare_times(a: &str, b: &str) -> Ordering {
    parse_time(a)
        .total_minutes()
        .cmp(&parse_time(b).total_minutes())
}
