//! # Chart Variants
//!
//! Each chart variant owns a default option set, merges caller options onto
//! it at construction, derives its layout values once, and draws data into
//! its own [`ChartDocument`](crate::svg::ChartDocument):
//!
//! ```no_run
//! use trazo::charts::{LineChart, SeriesPoint};
//!
//! let mut chart = LineChart::new();
//! chart
//!     .draw(&[
//!         SeriesPoint { key: Some("a".into()), x: 0.0, y: 1.0 },
//!         SeriesPoint { key: Some("a".into()), x: 1.0, y: 4.0 },
//!     ])?
//!     .save("/tmp/chart.svg")?;
//! # Ok::<(), trazo::ChartError>(())
//! ```

pub mod line;
pub mod pie;

pub use line::{LineChart, LineChartOptions, SeriesPoint};
pub use pie::{PieChart, PieChartOptions, Slice};

use serde::{Deserialize, Serialize};

use crate::components::font::{Font, FontOptions};
use crate::merge::MergeDefaults;

/// A resolved text block: title or axis label plus its font.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    /// `None` means the block is not drawn at all.
    pub text: Option<String>,
    pub font: Font,
}

impl LabelBlock {
    /// An empty block with the given default font.
    pub fn with_font(font: Font) -> Self {
        Self { text: None, font }
    }
}

/// Partial text block options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub text: Option<String>,
    pub font: FontOptions,
}

impl MergeDefaults for LabelOptions {
    type Resolved = LabelBlock;

    fn merge_defaults(self, defaults: &LabelBlock) -> LabelBlock {
        LabelBlock {
            text: self.text.or_else(|| defaults.text.clone()),
            font: self.font.merge_defaults(&defaults.font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_merge_keeps_text_and_nested_font() {
        let partial = LabelOptions {
            text: Some("Title".into()),
            font: FontOptions {
                size: Some(64.0),
                ..Default::default()
            },
        };
        let resolved = partial.merge_defaults(&LabelBlock::with_font(Font::default_large_font()));
        assert_eq!(resolved.text.as_deref(), Some("Title"));
        assert_eq!(resolved.font.size, 64.0);
        assert_eq!(resolved.font.color, "black");
    }

    #[test]
    fn test_unset_label_stays_empty() {
        let resolved =
            LabelOptions::default().merge_defaults(&LabelBlock::with_font(Font::default_font()));
        assert_eq!(resolved.text, None);
        assert_eq!(resolved.font, Font::default_font());
    }
}
