//! Static SVG export of a sigil.
//!
//! Geometry comes from `sigil_geometry`, the same call the live display uses.
//! Only the stroke colour is stylistic, and it is drawn from the params' seed.

use std::fmt::Write;

use kairos_core::{
    CanvasSize, SigilParams, SigilRecord, closed_polyline, export_record, sigil_geometry,
    svg_path_data,
};
use rand::Rng;

/// Stroke colour as `hsl(h, s%, l%)`, reproducible from `params.seed`.
pub fn stroke_color(params: &SigilParams) -> String {
    let mut rng = params.jitter_rng();
    let hue: f64 = rng.random_range(0.0..360.0);
    let saturation: u32 = rng.random_range(70..=100);
    let lightness: u32 = rng.random_range(50..=65);
    format!("hsl({hue:.1}, {saturation}%, {lightness}%)")
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a standalone SVG document. The interchange record is embedded in
/// `<metadata>` so the file can be verified later.
pub fn render_svg(
    params: &SigilParams,
    canvas: CanvasSize,
    sample_count: usize,
    line_scale: f64,
) -> serde_json::Result<String> {
    let geometry = sigil_geometry(params, canvas, sample_count, line_scale);
    let record = export_record(&SigilRecord::from(params))?;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    let _ = writeln!(svg, "<metadata>{}</metadata>", escape_xml(&record));
    if geometry.is_empty() {
        tracing::warn!(
            "nothing to draw for canvas {}x{} with {sample_count} samples",
            canvas.width,
            canvas.height
        );
    } else {
        let _ = writeln!(
            svg,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            svg_path_data(&closed_polyline(&geometry.points)),
            stroke_color(params),
            geometry.stroke_width,
        );
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}
