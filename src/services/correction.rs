//! Snap-to-grid minute correction.
//!
//! Unlike validation, correction is total: whatever the input, it answers
//! with *some* legal time. Malformed input falls back to the policy
//! fallback instead of failing.

use crate::parsing::time_parser::{format_time, is_valid_time_format, parse_time};
use crate::policy::{default_policy, HoursPolicy};

/// Correct a time string onto the default minute grid.
///
/// Well-formed input has its minute snapped to the nearest legal grid
/// value, rolling over into the next hour (23 wraps to 0) when the minute
/// rounds up to 60. Malformed input yields the fallback, `"09:00"`.
///
/// # Examples
///
/// ```
/// use business_hours::services::correct_time_minutes;
///
/// assert_eq!(correct_time_minutes("09:07"), "09:00");
/// assert_eq!(correct_time_minutes("09:08"), "09:15");
/// assert_eq!(correct_time_minutes("23:53"), "00:00");
/// assert_eq!(correct_time_minutes("bad-input"), "09:00");
/// ```
pub fn correct_time_minutes(input: &str) -> String {
    correct_time_minutes_with(default_policy(), input)
}

/// Correct a time string onto an explicit policy's grid.
pub fn correct_time_minutes_with(policy: &HoursPolicy, input: &str) -> String {
    if !is_valid_time_format(input) {
        log::debug!(
            "cannot correct malformed time {:?}, falling back to {}",
            input,
            policy.fallback()
        );
        return policy.fallback().to_string();
    }

    let raw = parse_time(input);
    let snapped = policy.grid().snap_minute(raw.minute as u8);

    let hour = if snapped.carried_hour {
        (raw.hour + 1) % 24
    } else {
        raw.hour
    };

    format_time(hour, u32::from(snapped.minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::MinuteGrid;

    #[test]
    fn snaps_across_the_whole_boundary_table() {
        let cases = [
            ("09:00", "09:00"),
            ("09:07", "09:00"),
            ("09:08", "09:15"),
            ("09:15", "09:15"),
            ("09:22", "09:15"),
            ("09:23", "09:30"),
            ("09:30", "09:30"),
            ("09:37", "09:30"),
            ("09:38", "09:30"),
            ("09:45", "09:30"),
            ("09:52", "09:30"),
            ("09:53", "10:00"),
            ("09:59", "10:00"),
        ];

        for (input, expected) in cases {
            assert_eq!(correct_time_minutes(input), expected, "{input}");
        }
    }

    #[test]
    fn rollover_wraps_midnight() {
        assert_eq!(correct_time_minutes("23:53"), "00:00");
        assert_eq!(correct_time_minutes("23:59"), "00:00");
    }

    #[test]
    fn hour_passes_through_unchanged_otherwise() {
        assert_eq!(correct_time_minutes("0:07"), "00:00");
        assert_eq!(correct_time_minutes("17:38"), "17:30");
    }

    #[test]
    fn malformed_input_falls_back() {
        for input in ["bad-input", "9:5", "24:00", "12:60", "", "09:00:00"] {
            assert_eq!(correct_time_minutes(input), "09:00", "{input:?}");
        }
    }

    #[test]
    fn custom_policy_controls_grid_and_fallback() {
        let policy = HoursPolicy::new(
            MinuteGrid::new([0, 15, 30, 45]).unwrap(),
            "10:00".parse().unwrap(),
        )
        .unwrap();

        // 45 is legal under this grid, so the double round-down disappears.
        assert_eq!(correct_time_minutes_with(&policy, "09:44"), "09:45");
        assert_eq!(correct_time_minutes_with(&policy, "garbage"), "10:00");
    }
}
