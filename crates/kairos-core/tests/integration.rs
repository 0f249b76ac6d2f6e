//! Integration tests exercising the full pipeline:
//! instant → pulse → moment → sigil params → geometry → path → record.

use kairos_core::{
    BREATH_MS, CanvasSize, DEFAULT_LINE_SCALE, DEFAULT_SAMPLE_COUNT, GENESIS_MS, PULSES_PER_DAY,
    SigilParams, SigilRecord, closed_polyline, current_pulse, day_name, decode_moment,
    export_record, import_record, moment_at, pulse_start_ms, sigil_geometry, svg_path_data,
};

/// Test 1: genesis decodes to the origin of every coordinate.
#[test]
fn genesis_instant_is_origin() {
    assert_eq!(current_pulse(GENESIS_MS), 0);
    let m = moment_at(GENESIS_MS);
    assert_eq!(
        (m.beat, m.step, m.day_index, m.month_index, m.month_day1),
        (0, 0, 0, 0, 1)
    );
    assert_eq!(day_name(m.day_index.into()), "Solhara");
}

/// Test 2: the last millisecond before genesis lands on the last step of the
/// last day of the previous year, not on negative indices.
#[test]
fn last_millisecond_before_genesis() {
    let pulse = current_pulse(GENESIS_MS - 1.0);
    assert_eq!(pulse, -1);
    let m = decode_moment(pulse);
    assert_eq!((m.beat, m.step), (35, 43));
    assert_eq!((m.day_index, m.month_index, m.month_day1), (5, 7, 42));
    assert_eq!(day_name(m.day_index.into()), "Kaelith");
}

/// Test 3: walking one breath at a time across a day boundary rolls every
/// coordinate exactly once.
#[test]
fn day_boundary_walk() {
    let first_of_day_two = PULSES_PER_DAY.ceil() as i64;
    let mut prev = decode_moment(first_of_day_two - 3);
    for p in (first_of_day_two - 2)..=(first_of_day_two + 2) {
        let m = decode_moment(p);
        if p == first_of_day_two {
            assert_eq!(m.day_index, (prev.day_index + 1) % 6);
            assert_eq!((m.beat, m.step), (0, 0));
            assert_eq!((prev.beat, prev.step), (35, 43));
        } else {
            assert_eq!(m.day_index, prev.day_index);
        }
        prev = m;
    }
}

/// Test 4: live and export paths fed the same moment agree bit for bit.
#[test]
fn live_and_export_geometry_agree() {
    let now = GENESIS_MS + 4_321_987.0 * BREATH_MS + 17.0;
    let moment = moment_at(now);
    let canvas = CanvasSize::square(320.0);

    let live = sigil_geometry(
        &SigilParams::from_moment(&moment, now as i64),
        canvas,
        DEFAULT_SAMPLE_COUNT,
        DEFAULT_LINE_SCALE,
    );

    // Export path: params travel through the JSON record and back.
    let record = SigilRecord::from(&SigilParams::from_moment(&moment, now as i64));
    let json = export_record(&record).unwrap();
    let restored = import_record(&json).unwrap().into_params(0);
    let exported = sigil_geometry(&restored, canvas, DEFAULT_SAMPLE_COUNT, DEFAULT_LINE_SCALE);

    assert_eq!(live, exported);
    assert_eq!(live.points.len(), DEFAULT_SAMPLE_COUNT);
    assert_eq!(
        svg_path_data(&closed_polyline(&live.points)),
        svg_path_data(&closed_polyline(&exported.points))
    );
}

/// Test 5: degenerate canvas means nothing to draw, never a failure.
#[test]
fn degenerate_canvas_is_empty_not_error() {
    let params = SigilParams::from_moment(&decode_moment(12345), 0);
    let g = sigil_geometry(&params, CanvasSize::new(0.0, 0.0), 360, 1.0);
    assert!(g.is_empty());
    assert!(closed_polyline(&g.points).is_empty());
    assert!(g.stroke_width > 0.0);
}

/// Test 6: a record built from a decoded moment verifies; one from a
/// different pulse does not.
#[test]
fn record_verification() {
    let m = decode_moment(1_000_000);
    let record = SigilRecord::from(&SigilParams::from_moment(&m, 0));
    assert!(record.mismatches().is_empty());

    let forged = SigilRecord {
        pulse: 1_000_000 + 486,
        ..record
    };
    assert!(
        forged.mismatches().iter().any(|mm| mm.field == "beat"),
        "one beat later must not verify"
    );
}

/// Test 7: pulse boundaries line up with decoded pulses far from genesis.
#[test]
fn pulse_boundaries_far_from_genesis() {
    for p in [-5_000_000_000_i64, -1, 0, 5_000_000_000] {
        let start = pulse_start_ms(p);
        assert_eq!(current_pulse(start + 1.0), p);
        assert_eq!(decode_moment(p), moment_at(start + 1.0));
    }
}
