//! Pie layout and arc geometry.
//!
//! Angles follow the screen convention for pie charts: 0 at 12 o'clock,
//! increasing clockwise, so a point at radius `r` and angle `a` sits at
//! `(r·sin a, −r·cos a)` relative to the pie center.

use std::f64::consts::{PI, TAU};

use crate::svg::fmt_coord;

/// One slice of a pie layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    /// Position of the slice's value in the input sample.
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    /// The angle through the middle of the slice.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }
}

/// Lay out pie slices over the full circle.
///
/// Angles are allocated in descending-value order (ties keep input order),
/// while the returned slices stay in input order, so callers can zip them
/// back with their source records.
pub fn pie_layout(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();

    let mut slices: Vec<PieSlice> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| PieSlice {
            index,
            value,
            start_angle: 0.0,
            end_angle: 0.0,
        })
        .collect();

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut angle = 0.0;
    for &i in &order {
        let sweep = if total > 0.0 {
            values[i] / total * TAU
        } else {
            0.0
        };
        slices[i].start_angle = angle;
        slices[i].end_angle = angle + sweep;
        angle += sweep;
    }

    slices
}

/// An annulus-sector generator: fixed inner and outer radii, paths and
/// centroids per angle span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    inner_radius: f64,
    outer_radius: f64,
}

impl ArcShape {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// SVG path data for the sector between `start_angle` and `end_angle`.
    pub fn path(&self, start_angle: f64, end_angle: f64) -> String {
        let sweep = end_angle - start_angle;
        if sweep >= TAU - 1e-9 {
            return self.full_circle_path(start_angle);
        }

        let outer = self.outer_radius;
        let inner = self.inner_radius;
        let large = i32::from(sweep > PI);
        let (x0, y0) = point(outer, start_angle);
        let (x1, y1) = point(outer, end_angle);

        if inner > 0.0 {
            let (xi1, yi1) = point(inner, end_angle);
            let (xi0, yi0) = point(inner, start_angle);
            format!(
                "M{},{}A{},{} 0 {} 1 {},{}L{},{}A{},{} 0 {} 0 {},{}Z",
                fmt_coord(x0),
                fmt_coord(y0),
                fmt_coord(outer),
                fmt_coord(outer),
                large,
                fmt_coord(x1),
                fmt_coord(y1),
                fmt_coord(xi1),
                fmt_coord(yi1),
                fmt_coord(inner),
                fmt_coord(inner),
                large,
                fmt_coord(xi0),
                fmt_coord(yi0),
            )
        } else {
            format!(
                "M{},{}A{},{} 0 {} 1 {},{}L0,0Z",
                fmt_coord(x0),
                fmt_coord(y0),
                fmt_coord(outer),
                fmt_coord(outer),
                large,
                fmt_coord(x1),
                fmt_coord(y1),
            )
        }
    }

    // A single sweep cannot express a closed circle, so it is split into
    // two half-turns; the inner hole runs counter-clockwise.
    fn full_circle_path(&self, start_angle: f64) -> String {
        let ring = |radius: f64, clockwise: bool| {
            let (x0, y0) = point(radius, start_angle);
            let (xh, yh) = point(radius, start_angle + PI);
            let sweep = i32::from(clockwise);
            format!(
                "M{},{}A{},{} 0 1 {} {},{}A{},{} 0 1 {} {},{}Z",
                fmt_coord(x0),
                fmt_coord(y0),
                fmt_coord(radius),
                fmt_coord(radius),
                sweep,
                fmt_coord(xh),
                fmt_coord(yh),
                fmt_coord(radius),
                fmt_coord(radius),
                sweep,
                fmt_coord(x0),
                fmt_coord(y0),
            )
        };

        let mut path = ring(self.outer_radius, true);
        if self.inner_radius > 0.0 {
            path.push_str(&ring(self.inner_radius, false));
        }
        path
    }

    /// Midpoint of the sector: mid-angle at the mean of the two radii.
    pub fn centroid(&self, start_angle: f64, end_angle: f64) -> (f64, f64) {
        let angle = start_angle + (end_angle - start_angle) / 2.0;
        let radius = (self.inner_radius + self.outer_radius) / 2.0;
        point(radius, angle)
    }
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}
