//! The discrete minute grid reservation times are allowed to sit on.

/// Default grid: quarter-hour granularity with the `45` mark excluded.
/// Only three slots per hour are legal under this business rule.
pub const QUARTER_HOUR_MINUTES: [u8; 3] = [0, 15, 30];

/// Error raised when constructing a [`MinuteGrid`] from an illegal value set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("minute grid must not be empty")]
    Empty,

    #[error("minute grid must include 0")]
    MissingZero,

    #[error("minute grid value {0} is outside 0-59")]
    MinuteOutOfRange(u8),

    #[error("minute grid values must be strictly increasing, got {0} after {1}")]
    NotStrictlyIncreasing(u8, u8),
}

/// The outcome of snapping a single minute value onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedMinute {
    pub minute: u8,
    /// Set when the minute rolled over the top of the hour; the caller
    /// advances the hour component (wrapping 23 to 0).
    pub carried_hour: bool,
}

/// A named, ordered set of legal minute values.
///
/// The grid is injected into validation and correction rather than
/// hardcoded, so widening it never touches validation logic. A grid must be
/// non-empty, strictly increasing, contain `0`, and stay below 60; `0` is
/// required so [`snap_minute`](Self::snap_minute) always has a landing spot.
///
/// # Examples
///
/// ```
/// use business_hours::policy::MinuteGrid;
///
/// let grid = MinuteGrid::default();
/// assert!(grid.is_allowed(15));
/// assert!(!grid.is_allowed(45));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteGrid {
    allowed: Vec<u8>,
}

impl MinuteGrid {
    /// Creates a grid from an ordered list of minute values.
    pub fn new(allowed: impl Into<Vec<u8>>) -> Result<Self, GridError> {
        let allowed = allowed.into();

        if allowed.is_empty() {
            return Err(GridError::Empty);
        }
        for window in allowed.windows(2) {
            if window[1] <= window[0] {
                return Err(GridError::NotStrictlyIncreasing(window[1], window[0]));
            }
        }
        if let Some(&out_of_range) = allowed.iter().find(|&&minute| minute > 59) {
            return Err(GridError::MinuteOutOfRange(out_of_range));
        }
        if allowed[0] != 0 {
            return Err(GridError::MissingZero);
        }

        Ok(Self { allowed })
    }

    /// The standard quarter-hour grid, `{0, 15, 30}`.
    pub fn quarter_hour() -> Self {
        Self {
            allowed: QUARTER_HOUR_MINUTES.to_vec(),
        }
    }

    /// Membership test for a minute value.
    pub fn is_allowed(&self, minute: u32) -> bool {
        self.allowed.iter().any(|&legal| u32::from(legal) == minute)
    }

    /// The legal minute values, in increasing order.
    pub fn allowed_minutes(&self) -> &[u8] {
        &self.allowed
    }

    /// Snap a minute value in `[0, 59]` onto the grid.
    ///
    /// The minute is first rounded to the nearest quarter mark (0, 15, 30,
    /// 45, 60). A candidate of 60 rolls over into the next hour at `:00`.
    /// A candidate the grid does not contain settles down to the largest
    /// grid value below it; under the default grid that sends 45 to 30,
    /// the deliberate double round-down.
    pub fn snap_minute(&self, minute: u8) -> SnappedMinute {
        let candidate = ((u32::from(minute) + 7) / 15) * 15;

        if candidate >= 60 {
            return SnappedMinute {
                minute: 0,
                carried_hour: true,
            };
        }

        let minute = self
            .allowed
            .iter()
            .rev()
            .copied()
            .find(|&legal| u32::from(legal) <= candidate)
            .expect("grid contains 0");

        SnappedMinute {
            minute,
            carried_hour: false,
        }
    }
}

impl Default for MinuteGrid {
    fn default() -> Self {
        Self::quarter_hour()
    }
}
