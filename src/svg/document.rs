//! Document root: the output SVG owned by every chart.
//!
//! The drawing surface is a fixed 0..1000 logical coordinate space. Clip
//! path definitions collect in `<defs>`, generated CSS in `<style>`, and
//! drawn elements after both, so references resolve regardless of drawing
//! order.

use std::fs;
use std::path::Path;

use crate::error::ChartError;
use crate::svg::Element;

/// Side length of the square logical coordinate space.
pub const SURFACE_SIZE: f64 = 1000.0;

const XMLNS: &str = "http://www.w3.org/2000/svg";

/// The output document: a `viewBox="0 0 1000 1000"` SVG with a definitions
/// section, a stylesheet, and drawn content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDocument {
    css: String,
    defs: Vec<Element>,
    content: Vec<Element>,
}

impl ChartDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document stylesheet.
    pub fn set_css(&mut self, css: impl Into<String>) {
        self.css = css.into();
    }

    /// Append an element to the `<defs>` section.
    pub fn add_def(&mut self, element: Element) {
        self.defs.push(element);
    }

    /// Append a drawn element after the defs and stylesheet.
    pub fn add(&mut self, element: Element) {
        self.content.push(element);
    }

    /// The `<defs>` children, in insertion order.
    pub fn defs(&self) -> &[Element] {
        &self.defs
    }

    /// The drawn content, in insertion order.
    pub fn content(&self) -> &[Element] {
        &self.content
    }

    /// Collect every drawn element matching `tag`, in document order.
    /// Does not search the `<defs>` section.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        for element in &self.content {
            element.find_all(tag, &mut out);
        }
        out
    }

    /// Serialize the whole document to SVG markup.
    pub fn to_svg(&self) -> String {
        let mut root = Element::new("svg")
            .attr("viewBox", format!("0 0 {SURFACE_SIZE} {SURFACE_SIZE}"))
            .attr("xmlns", XMLNS);

        let mut defs = Element::new("defs");
        for def in &self.defs {
            defs = defs.child(def.clone());
        }
        root = root.child(defs);
        root = root.child(Element::new("style").text(&self.css));
        for element in &self.content {
            root = root.child(element.clone());
        }

        let mut out = String::new();
        root.write_svg(&mut out);
        out
    }

    /// Write the serialized markup to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        fs::write(path, self.to_svg())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_structure() {
        let doc = ChartDocument::new();
        let svg = doc.to_svg();
        assert!(svg.starts_with(r#"<svg viewBox="0 0 1000 1000""#));
        assert!(svg.contains("<defs/>"));
        assert!(svg.contains("<style/>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_defs_precede_style_and_content() {
        let mut doc = ChartDocument::new();
        doc.set_css("text { fill: black; }");
        doc.add_def(Element::new("clipPath").attr("id", "a-clip"));
        doc.add(Element::new("g").attr("id", "pie"));

        let svg = doc.to_svg();
        let defs_at = svg.find("<defs>").unwrap();
        let style_at = svg.find("<style>").unwrap();
        let group_at = svg.find("<g ").unwrap();
        assert!(defs_at < style_at);
        assert!(style_at < group_at);
    }

    #[test]
    fn test_find_all_skips_defs() {
        let mut doc = ChartDocument::new();
        doc.add_def(Element::new("clipPath").child(Element::new("path")));
        doc.add(Element::new("path"));
        assert_eq!(doc.find_all("path").len(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        std::fs::write(&path, "stale").unwrap();

        let doc = ChartDocument::new();
        doc.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_save_unwritable_path_errors() {
        let doc = ChartDocument::new();
        let err = doc.save("/nonexistent-dir/chart.svg").unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }
}
