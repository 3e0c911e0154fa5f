//! Font styling: a resolved font maps to a CSS text block.
//!
//! Text is painted stroke-first so the border sits behind the fill, which
//! keeps labels readable over slice images and plot lines.

use serde::{Deserialize, Serialize};

use crate::merge::MergeDefaults;

/// Resolved font style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Size in CSS pixels.
    pub size: f64,
    /// Font family; `None` leaves the document default in place.
    pub family: Option<String>,
    pub color: String,
    /// Outline color painted behind the fill.
    pub border: String,
    pub border_size: f64,
}

impl Font {
    /// The base font: 24px black with a white outline.
    pub fn default_font() -> Self {
        Self {
            size: 24.0,
            family: None,
            color: "black".to_string(),
            border: "white".to_string(),
            border_size: 5.0,
        }
    }

    /// The base font at title size.
    pub fn default_large_font() -> Self {
        Self {
            size: 48.0,
            ..Self::default_font()
        }
    }

    /// The base font at annotation size, with a thinner outline.
    pub fn default_small_font() -> Self {
        Self {
            size: 12.0,
            border_size: 2.0,
            ..Self::default_font()
        }
    }

    /// Render the font as a CSS declaration block.
    pub fn to_css(&self) -> String {
        let family = match &self.family {
            Some(family) => format!("font-family: {family};\n"),
            None => String::new(),
        };
        format!(
            "font-size: {}px;\n{family}paint-order: stroke;\nstroke: {};\nfill: {};\nstroke-width: {}px;\n",
            self.size, self.border, self.color, self.border_size,
        )
    }
}

/// Partial font options; unset fields fall back to the defaults they are
/// merged with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    pub size: Option<f64>,
    pub family: Option<String>,
    pub color: Option<String>,
    pub border: Option<String>,
    pub border_size: Option<f64>,
}

impl MergeDefaults for FontOptions {
    type Resolved = Font;

    fn merge_defaults(self, defaults: &Font) -> Font {
        Font {
            size: self.size.unwrap_or(defaults.size),
            family: self.family.or_else(|| defaults.family.clone()),
            color: self.color.unwrap_or_else(|| defaults.color.clone()),
            border: self.border.unwrap_or_else(|| defaults.border.clone()),
            border_size: self.border_size.unwrap_or(defaults.border_size),
        }
    }
}

impl From<Font> for FontOptions {
    fn from(font: Font) -> Self {
        Self {
            size: Some(font.size),
            family: font.family,
            color: Some(font.color),
            border: Some(font.border),
            border_size: Some(font.border_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variants() {
        assert_eq!(Font::default_font().size, 24.0);
        assert_eq!(Font::default_large_font().size, 48.0);
        let small = Font::default_small_font();
        assert_eq!(small.size, 12.0);
        assert_eq!(small.border_size, 2.0);
        // Variants share everything else with the base font.
        assert_eq!(small.color, Font::default_font().color);
    }

    #[test]
    fn test_css_without_family() {
        let css = Font::default_font().to_css();
        assert!(css.contains("font-size: 24px;"));
        assert!(!css.contains("font-family"));
        assert!(css.contains("paint-order: stroke;"));
        assert!(css.contains("stroke: white;"));
        assert!(css.contains("fill: black;"));
        assert!(css.contains("stroke-width: 5px;"));
    }

    #[test]
    fn test_css_with_family() {
        let font = Font {
            family: Some("Inter".to_string()),
            ..Font::default_font()
        };
        assert!(font.to_css().contains("font-family: Inter;"));
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: FontOptions = serde_json::from_str(r#"{"size": 30}"#).unwrap();
        assert_eq!(options.size, Some(30.0));
        assert_eq!(options.color, None);
    }
}
