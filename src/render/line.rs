//! Polyline path data from point sequences.

use std::fmt::Write;

use crate::svg::fmt_coord;

/// Build SVG path data connecting `points` in order with straight segments.
///
/// An empty sequence produces an empty path.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{command}{},{}", fmt_coord(*x), fmt_coord(*y));
    }
    d
}
