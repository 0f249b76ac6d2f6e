//! Closed straight-segment polyline built from a sampled sigil.
//!
//! No smoothing or curve fitting: the path is exactly the sample points in
//! order, so every consumer strokes the same figure.

use std::fmt::Write;

use crate::sigil::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Move to the first point, line to each following point, then close.
/// Empty input yields an empty path.
pub fn closed_polyline(points: &[Point]) -> Vec<PathCommand> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(rest.iter().copied().map(PathCommand::LineTo));
    commands.push(PathCommand::Close);
    commands
}

/// SVG path data (`M x y L x y … Z`).
///
/// Coordinates use Rust's shortest round-trip float formatting, so parsing the
/// data back recovers every point bit for bit.
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 24);
    for (i, cmd) in commands.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        match cmd {
            PathCommand::MoveTo(p) => {
                let _ = write!(d, "M{} {}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(d, "L{} {}", p.x, p.y);
            }
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}
