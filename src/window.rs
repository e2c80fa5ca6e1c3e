//! Clock-skew tolerant TOTP verification over a window of time steps.

use crate::secure::timing_safe_eq;
use crate::{totp_at, Algorithm, Error};

/// Check a user-supplied code against every time step within `window` steps
/// of `timestamp`.
///
/// Offsets are scanned in increasing order from `-window` to `+window`, and
/// the first match wins, so of several matching steps the one closest to
/// `-window` is reported, not the one closest to the center. A negative
/// `window` is treated as its absolute value. Each comparison is
/// constant-time over equal lengths.
///
/// Returns `Ok(Some(delta))` for the first matching offset, `Ok(None)` when
/// no step in the window matches, and `Err` as soon as any recomputation
/// fails; a failed step aborts the scan rather than counting as a
/// non-match.
pub fn validate_totp_in_window (
    user_code: &str,
    secret: &str,
    timestamp: i64,
    digits: u32,
    period: u32,
    algorithm: Algorithm,
    window: i32,
) -> Result<Option<i32>, Error> {
    let window = window.checked_abs().unwrap_or(i32::MAX);
    for delta in -window..=window {
        let step_time = timestamp + i64::from(delta) * i64::from(period);
        let code = totp_at(secret, step_time, digits, period, algorithm)?;
        if timing_safe_eq(code.as_bytes(), user_code.as_bytes()) {
            return Ok(Some(delta));
        }
    }
    Ok(None)
}
