//! Deterministic sigil geometry.
//!
//! A sigil is a Lissajous figure whose frequencies and phase come from a
//! moment's pulse, beat and step. Live drawing and vector export both go
//! through [`sigil_geometry`], so their point sequences are bit-identical.

use std::f64::consts::TAU;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::constants::STEPS_PER_BEAT;
use crate::moment::KairosMoment;

pub const DEFAULT_SAMPLE_COUNT: usize = 360;
pub const DEFAULT_LINE_SCALE: f64 = 1.0;

/// Floor for stroke width, in canvas units.
pub const MIN_STROKE_WIDTH: f64 = 1.6;

/// Stroke width as a fraction of the shorter canvas side.
pub const STROKE_RATIO: f64 = 0.009;

/// Inputs identifying one sigil. Equality is structural over every field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigilParams {
    pub pulse: i64,
    pub beat: u32,
    pub step_index: u32,
    pub chakra_day: u32,
    /// Reserved for caller-side stylistic jitter; never feeds the geometry.
    pub seed: u64,
    pub user_key: Option<String>,
    pub signature: Option<String>,
    /// Caller-supplied Unix milliseconds, independent of `pulse`.
    pub timestamp: i64,
}

impl SigilParams {
    pub fn new(pulse: i64, beat: u32, step_index: u32, chakra_day: u32) -> Self {
        Self {
            pulse,
            beat,
            step_index,
            chakra_day,
            seed: 0,
            user_key: None,
            signature: None,
            timestamp: 0,
        }
    }

    /// Params carrying a decoded moment's coordinates.
    pub fn from_moment(moment: &KairosMoment, timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Self::new(moment.pulse, moment.beat, moment.step, moment.day_index)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_user_key(mut self, user_key: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn curve(&self) -> CurveParameters {
        derive_curve_parameters(self.pulse, self.beat, self.step_index)
    }

    /// Reproducible RNG for stylistic jitter keyed by `seed`.
    pub fn jitter_rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed)
    }
}

/// Lissajous knot parameters: x frequency `a`, y frequency `b`, phase `delta`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CurveParameters {
    /// 1..=7
    pub a: u32,
    /// 2..=6
    pub b: u32,
    /// Radians in `[0, 2π)`
    pub delta: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Everything a renderer needs to stroke one sigil.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SigilGeometry {
    pub curve: CurveParameters,
    pub points: Vec<Point>,
    pub stroke_width: f64,
}

impl SigilGeometry {
    /// Nothing to draw: degenerate canvas or sample count.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn derive_curve_parameters(pulse: i64, beat: u32, step_index: u32) -> CurveParameters {
    let step = step_index.min(STEPS_PER_BEAT - 1);
    CurveParameters {
        a: pulse.rem_euclid(7) as u32 + 1,
        b: beat % 5 + 2,
        delta: step as f64 / STEPS_PER_BEAT as f64 * TAU,
    }
}

/// Sample `x = sin(a·t + δ)`, `y = sin(b·t)` over `t ∈ [0, 2π]`, scaled to the canvas.
///
/// Returns an empty sequence for `sample_count <= 1` or a non-positive canvas.
pub fn sample_curve(
    canvas: CanvasSize,
    a: u32,
    b: u32,
    delta: f64,
    sample_count: usize,
) -> Vec<Point> {
    if sample_count <= 1 || !canvas.is_drawable() {
        return Vec::new();
    }
    let last = (sample_count - 1) as f64;
    let (a, b) = (a as f64, b as f64);
    (0..sample_count)
        .map(|i| {
            let t = i as f64 / last * TAU;
            Point {
                x: ((a * t + delta).sin() + 1.0) / 2.0 * canvas.width,
                y: ((b * t).sin() + 1.0) / 2.0 * canvas.height,
            }
        })
        .collect()
}

pub fn stroke_width(canvas: CanvasSize, line_scale: f64) -> f64 {
    let side = canvas.width.max(1.0).min(canvas.height.max(1.0));
    MIN_STROKE_WIDTH.max(side * STROKE_RATIO) * line_scale
}

/// The single geometry entry point shared by live rendering and export.
pub fn sigil_geometry(
    params: &SigilParams,
    canvas: CanvasSize,
    sample_count: usize,
    line_scale: f64,
) -> SigilGeometry {
    let curve = params.curve();
    SigilGeometry {
        curve,
        points: sample_curve(canvas, curve.a, curve.b, curve.delta, sample_count),
        stroke_width: stroke_width(canvas, line_scale),
    }
}
