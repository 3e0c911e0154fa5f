//! Image placement inside a clipped shape.
//!
//! Pie slices can be filled with an image instead of a flat color; the
//! options here position, scale, rotate and mirror that image within its
//! clip path.

use serde::{Deserialize, Serialize};

use crate::merge::MergeDefaults;
use crate::svg::fmt_coord;

/// Resolved image placement.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    /// Image location; `None` means no image (the slice keeps its fill).
    pub href: Option<String>,
    /// Offset of the image anchor, applied negatively so the anchor point
    /// lands on the placement position.
    pub x: f64,
    pub y: f64,
    /// Uniform scale, multiplied with the per-axis factors.
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Mirror horizontally.
    pub flip: bool,
}

impl ImageSpec {
    pub fn default_image() -> Self {
        Self {
            href: None,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            flip: false,
        }
    }

    /// Render the placement as an SVG transform string.
    pub fn to_transform(&self) -> String {
        let flip = if self.flip { -1.0 } else { 1.0 };
        let scale_x = self.scale * self.scale_x * flip;
        let scale_y = self.scale * self.scale_y;
        format!(
            "scale({}, {}) rotate({}) translate({}, {})",
            fmt_coord(scale_x),
            fmt_coord(scale_y),
            fmt_coord(self.rotation),
            fmt_coord(-self.x),
            fmt_coord(-self.y),
        )
    }
}

/// Partial image options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    pub href: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotation: Option<f64>,
    pub flip: Option<bool>,
}

impl MergeDefaults for ImageOptions {
    type Resolved = ImageSpec;

    fn merge_defaults(self, defaults: &ImageSpec) -> ImageSpec {
        ImageSpec {
            href: self.href.or_else(|| defaults.href.clone()),
            x: self.x.unwrap_or(defaults.x),
            y: self.y.unwrap_or(defaults.y),
            scale: self.scale.unwrap_or(defaults.scale),
            scale_x: self.scale_x.unwrap_or(defaults.scale_x),
            scale_y: self.scale_y.unwrap_or(defaults.scale_y),
            rotation: self.rotation.unwrap_or(defaults.rotation),
            flip: self.flip.unwrap_or(defaults.flip),
        }
    }
}
