use crate::constants::{BREATH_MS, GENESIS_MS};
use crate::moment::{KairosMoment, decode_moment};

/// Pulse index containing the instant `now_ms` (Unix milliseconds).
///
/// Floors toward negative infinity: instants before genesis yield negative
/// pulses, and the breath just before genesis is pulse -1.
pub fn current_pulse(now_ms: f64) -> i64 {
    ((now_ms - GENESIS_MS) / BREATH_MS).floor() as i64
}

/// Unix milliseconds at which `pulse` begins.
pub fn pulse_start_ms(pulse: i64) -> f64 {
    GENESIS_MS + pulse as f64 * BREATH_MS
}

/// Decode the moment containing `now_ms`.
pub fn moment_at(now_ms: f64) -> KairosMoment {
    decode_moment(current_pulse(now_ms))
}

/// Floating modulo into `[0, m)`. `m` may be fractional.
pub fn wrap(x: f64, m: f64) -> f64 {
    let mut r = x % m;
    if r < 0.0 {
        r += m;
    }
    // r + m can round up to exactly m for tiny negative r
    if r >= m { 0.0 } else { r }
}
