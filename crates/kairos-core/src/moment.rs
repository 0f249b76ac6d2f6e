use serde::Serialize;

use crate::constants::{
    BEATS_PER_ARC, BEATS_PER_DAY, DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR, PULSES_PER_BEAT,
    PULSES_PER_DAY, PULSES_PER_STEP, STEP_SUBDIVISIONS, STEPS_PER_BEAT,
};
use crate::pulse::wrap;

/// Calendar and clock coordinates of a single pulse.
///
/// Purely derived: two decodes of the same pulse are identical field for
/// field, which is what lets live display and exported artifacts agree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KairosMoment {
    pub pulse: i64,
    /// 0..36
    pub beat: u32,
    /// 0..44
    pub step: u32,
    /// Coarse 11-way subdivision of the step, 0..=10.
    pub pulse_in_step_index: u32,
    /// Weekday (chakra day), 0..6
    pub day_index: u32,
    /// `beat / 6`, 0..6
    pub arc_index: u32,
    /// 0..8
    pub month_index: u32,
    /// 1-based day of month, 1..=42
    pub month_day1: u32,
    /// Position within the day, in `[0, PULSES_PER_DAY)`.
    pub day_pulse: f64,
    pub pulses_into_beat: f64,
    pub pulses_into_step: f64,
    /// Progress through the current step, clamped to `[0, 1]`.
    pub step_fraction: f64,
}

impl KairosMoment {
    /// Whole Kairos days elapsed since genesis (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_since_epoch(self.pulse)
    }

    /// Clock-face label, `beat:step` with a two-digit step, e.g. `"35:07"`.
    pub fn beat_step_label(&self) -> String {
        format!("{}:{:02}", self.beat, self.step)
    }
}

fn days_since_epoch(pulse: i64) -> i64 {
    (pulse as f64 / PULSES_PER_DAY).floor() as i64
}

/// Decode a pulse into its moment. Total over all `i64` pulses.
pub fn decode_moment(pulse: i64) -> KairosMoment {
    let day_pulse = wrap(pulse as f64, PULSES_PER_DAY);

    // Outer mod guards the day boundary against float round-up.
    let beat = ((day_pulse / PULSES_PER_BEAT).floor() as i64).rem_euclid(BEATS_PER_DAY as i64);
    let pulses_into_beat = day_pulse - beat as f64 * PULSES_PER_BEAT;

    let step =
        ((pulses_into_beat / PULSES_PER_STEP).floor() as i64).rem_euclid(STEPS_PER_BEAT as i64);
    let pulses_into_step = pulses_into_beat - step as f64 * PULSES_PER_STEP;
    let step_fraction = (pulses_into_step / PULSES_PER_STEP).clamp(0.0, 1.0);

    let pulse_in_step_index = ((step_fraction * STEP_SUBDIVISIONS as f64).floor() as i64)
        .clamp(0, STEP_SUBDIVISIONS as i64 - 1);

    let days = days_since_epoch(pulse);
    let day_index = days.rem_euclid(DAYS_PER_WEEK as i64);
    let day_in_year0 = days.rem_euclid(DAYS_PER_YEAR as i64);

    KairosMoment {
        pulse,
        beat: beat as u32,
        step: step as u32,
        pulse_in_step_index: pulse_in_step_index as u32,
        day_index: day_index as u32,
        arc_index: beat as u32 / BEATS_PER_ARC,
        month_index: (day_in_year0 / DAYS_PER_MONTH as i64) as u32,
        month_day1: (day_in_year0 % DAYS_PER_MONTH as i64) as u32 + 1,
        day_pulse,
        pulses_into_beat,
        pulses_into_step,
        step_fraction,
    }
}
