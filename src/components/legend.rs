//! Legend rendering: one color swatch and label per series key.

use serde::{Deserialize, Serialize};

use crate::components::font::{Font, FontOptions};
use crate::merge::MergeDefaults;
use crate::render::OrdinalColors;
use crate::svg::{ChartDocument, Element};

/// Resolved legend layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub font: Font,
    /// Vertical gap between entries, and the gap between swatch and label.
    pub spacing: f64,
    /// Top-left corner of the legend block.
    pub x: f64,
    pub y: f64,
}

impl Legend {
    pub fn default_legend() -> Self {
        Self {
            font: Font::default_font(),
            spacing: 4.0,
            x: 150.0,
            y: 150.0,
        }
    }

    fn entry_y(&self, index: usize) -> f64 {
        self.y + index as f64 * (self.font.size + self.spacing)
    }

    /// Draw the legend into `doc`: a column of swatches, then the labels.
    ///
    /// Swatch colors come from the same ordinal scale the chart strokes
    /// with, so legend entries match their series.
    pub fn append_to(&self, doc: &mut ChartDocument, keys: &[String], colors: &mut OrdinalColors) {
        for (i, key) in keys.iter().enumerate() {
            doc.add(
                Element::new("rect")
                    .attr("width", self.font.size)
                    .attr("height", self.font.size)
                    .attr("transform", format!("translate({}, {})", self.x, self.entry_y(i)))
                    .attr("style", format!("fill: {}", colors.color(key))),
            );
        }

        for (i, key) in keys.iter().enumerate() {
            let x = self.x + self.font.size + self.spacing;
            // The transform origin is the text baseline; shift down half a
            // swatch and center on it.
            let y = self.entry_y(i) + self.font.size / 2.0;
            doc.add(
                Element::new("text")
                    .text(key)
                    .attr("transform", format!("translate({x}, {y})"))
                    .attr(
                        "style",
                        format!("dominant-baseline: middle;\n{}", self.font.to_css()),
                    ),
            );
        }
    }
}

/// Partial legend options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub font: FontOptions,
    pub spacing: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl MergeDefaults for LegendOptions {
    type Resolved = Legend;

    fn merge_defaults(self, defaults: &Legend) -> Legend {
        Legend {
            font: self.font.merge_defaults(&defaults.font),
            spacing: self.spacing.unwrap_or(defaults.spacing),
            x: self.x.unwrap_or(defaults.x),
            y: self.y.unwrap_or(defaults.y),
        }
    }
}
