//! Duration validation for countdown components.
//!
//! A countdown is armed with a user-supplied number of seconds, and user
//! input is messy: fractional, negative, absurdly large, or not a number at
//! all. [`validate`] normalizes any `f64` into a whole-second count inside
//! the supported range instead of reporting an error, because a requested
//! duration is always a best-effort adjustable value rather than a
//! programming mistake.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::duration::{validate, MAX_SECONDS, MIN_SECONDS};
//!
//! assert_eq!(validate(60.15), 60);        // fractions truncate
//! assert_eq!(validate(0.0), MIN_SECONDS); // too small clamps up
//! assert_eq!(validate(f64::NAN), MIN_SECONDS);
//! assert_eq!(validate(1e9), MAX_SECONDS); // too large clamps down
//! ```

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Largest number of whole days a countdown can display.
pub const MAX_DAYS: u64 = 99;

/// Smallest duration a countdown can be armed with, in seconds.
pub const MIN_SECONDS: u64 = 1;

/// Largest duration a countdown can be armed with, in seconds (99 days).
pub const MAX_SECONDS: u64 = MAX_DAYS * SECONDS_PER_DAY;

/// Normalizes a requested duration into a valid whole-second count.
///
/// The result is always within `[MIN_SECONDS, MAX_SECONDS]`:
///
/// - `NaN` or anything below [`MIN_SECONDS`] becomes [`MIN_SECONDS`]
/// - anything above [`MAX_SECONDS`] becomes [`MAX_SECONDS`]
/// - everything else is truncated toward zero (not rounded)
///
/// This function never fails; out-of-range input is silently clamped.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::duration::validate;
///
/// assert_eq!(validate(90.0), 90);
/// assert_eq!(validate(90.99), 90);
/// assert_eq!(validate(-5.0), 1);
/// assert_eq!(validate(10_000_000.0), 8_553_600);
/// ```
pub fn validate(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds < MIN_SECONDS as f64 {
        return MIN_SECONDS;
    }
    if seconds > MAX_SECONDS as f64 {
        return MAX_SECONDS;
    }
    seconds.trunc() as u64
}
