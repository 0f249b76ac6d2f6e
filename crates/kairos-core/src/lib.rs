//! Kairos time engine.
//!
//! Decodes wall-clock instants into drift-free pulses on a fixed-epoch,
//! fractional-day calendar, and turns a moment's coordinates into a
//! reproducible sigil curve.
//!
//! Pure math: no I/O, no logging, no opinions about rendering or transport.

pub mod constants;
pub mod labels;
pub mod moment;
pub mod path;
pub mod pulse;
pub mod record;
pub mod sigil;
pub mod time;

pub use constants::{
    BEATS_PER_DAY, BREATH_MS, DAYS_PER_MONTH, DAYS_PER_WEEK, GENESIS_MS, MONTHS_PER_YEAR,
    PULSES_PER_BEAT, PULSES_PER_DAY, PULSES_PER_STEP, STEPS_PER_BEAT,
};
pub use labels::{ArcLabel, arc, day_name, month_name};
pub use moment::{KairosMoment, decode_moment};
pub use path::{PathCommand, closed_polyline, svg_path_data};
pub use pulse::{current_pulse, moment_at, pulse_start_ms, wrap};
pub use record::{Mismatch, SigilRecord, export_record, import_record};
pub use sigil::{
    CanvasSize, CurveParameters, DEFAULT_LINE_SCALE, DEFAULT_SAMPLE_COUNT, Point, SigilGeometry,
    SigilParams, derive_curve_parameters, sample_curve, sigil_geometry, stroke_width,
};
