//! Day/hour/minute/second projections of a total-seconds count.
//!
//! These are pure, read-only helpers for turning the single integer a
//! countdown tracks into the components a display wants. They perform no
//! bounds checking; callers are expected to hand them a count that already
//! went through [`crate::duration::validate`], which caps the derived day
//! value at 99.
//!
//! ```rust
//! use bubbletea_countdown::clock;
//!
//! let total = 90_061; // 1 day, 1 hour, 1 minute, 1 second
//! assert_eq!(clock::days(total), 1);
//! assert_eq!(clock::hours(total), 1);
//! assert_eq!(clock::minutes(total), 1);
//! assert_eq!(clock::seconds(total), 1);
//! ```

use crate::duration::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Whole days in `total_seconds`.
pub fn days(total_seconds: u64) -> u64 {
    total_seconds / SECONDS_PER_DAY
}

/// Whole hours in `total_seconds`, excluding full days. Always `0..=23`.
pub fn hours(total_seconds: u64) -> u64 {
    (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR
}

/// Whole minutes in `total_seconds`, excluding full hours. Always `0..=59`.
pub fn minutes(total_seconds: u64) -> u64 {
    (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
}

/// Leftover seconds in `total_seconds`. Always `0..=59`.
pub fn seconds(total_seconds: u64) -> u64 {
    total_seconds % SECONDS_PER_MINUTE
}

/// Formats `total_seconds` for display.
///
/// Wider units are dropped while they are zero, so short countdowns stay
/// compact:
///
/// ```rust
/// use bubbletea_countdown::clock::format;
///
/// assert_eq!(format(59), "00:59");
/// assert_eq!(format(3_661), "01:01:01");
/// assert_eq!(format(90_000), "1d 01:00:00");
/// ```
pub fn format(total_seconds: u64) -> String {
    let d = days(total_seconds);
    let h = hours(total_seconds);
    let m = minutes(total_seconds);
    let s = seconds(total_seconds);

    if d > 0 {
        format!("{}d {:02}:{:02}:{:02}", d, h, m, s)
    } else if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
