//! Canon constants of the Kairos calendar.
//!
//! Compiled in on purpose: changing any of these changes the calendar itself.

/// Genesis instant: 2024-05-10T06:45:41.888Z, in Unix milliseconds.
pub const GENESIS_MS: f64 = 1_715_323_541_888.0;

/// Breath duration in milliseconds: (3 + √5) s
pub const BREATH_MS: f64 = 5_236.067_977_499_789_696;

/// Pulses (breaths) in one Kairos day. Fractional by definition.
pub const PULSES_PER_DAY: f64 = 17_491.270_421;

pub const BEATS_PER_DAY: u32 = 36;
pub const STEPS_PER_BEAT: u32 = 44;
pub const DAYS_PER_WEEK: u32 = 6;
pub const DAYS_PER_MONTH: u32 = 42;
pub const MONTHS_PER_YEAR: u32 = 8;

/// 42 × 8
pub const DAYS_PER_YEAR: u32 = DAYS_PER_MONTH * MONTHS_PER_YEAR;

/// Arcs group the beats of a day into six phases of six beats each.
pub const ARCS_PER_DAY: u32 = 6;
pub const BEATS_PER_ARC: u32 = BEATS_PER_DAY / ARCS_PER_DAY;

/// Coarse subdivision of a step used for `pulse_in_step_index`.
pub const STEP_SUBDIVISIONS: u32 = 11;

/// Exact quotient, never pre-rounded: the decoder floors against it.
pub const PULSES_PER_BEAT: f64 = PULSES_PER_DAY / BEATS_PER_DAY as f64;

/// Exact quotient, never pre-rounded: the decoder floors against it.
pub const PULSES_PER_STEP: f64 = PULSES_PER_BEAT / STEPS_PER_BEAT as f64;
