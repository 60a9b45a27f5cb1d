//! Fixed-point millisecond conversion used on the wire.
//!
//! Seconds are converted to milliseconds by truncating toward zero. Deltas are
//! always taken between two truncated absolute values, so a replica summing
//! them lands on exactly the host's truncated value.

/// Converts seconds to whole milliseconds, truncating toward zero.
/// Non-finite input maps to 0.
pub fn secs_to_millis(secs: f64) -> i64 {
    if !secs.is_finite() {
        return 0;
    }
    (secs * 1000.0).trunc() as i64
}

pub fn millis_to_secs(millis: i64) -> f64 {
    millis as f64 / 1000.0
}
