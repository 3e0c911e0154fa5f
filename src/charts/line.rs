//! Line chart: one stroked path per series key over a shared pair of axes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::charts::{LabelBlock, LabelOptions};
use crate::components::font::{Font, FontOptions};
use crate::components::legend::{Legend, LegendOptions};
use crate::components::scale::{ScaleOptions, ScaleSpec};
use crate::error::ChartError;
use crate::merge::MergeDefaults;
use crate::render::axis::{self, DEFAULT_TICK_COUNT};
use crate::render::color::palette_vec;
use crate::render::{CATEGORY10, OrdinalColors, line_path};
use crate::svg::document::SURFACE_SIZE;
use crate::svg::{ChartDocument, Element};

const BASE_MARGIN: f64 = 20.0;

/// One observation.
///
/// Points sharing a `key` belong to the same series. Points without a key
/// all group under the literal series name `"undefined"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(default)]
    pub key: Option<String>,
    pub x: f64,
    pub y: f64,
}

/// Resolved line chart options.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    /// Body font for axis tick labels and other untargeted text.
    pub font: Font,
    pub title: LabelBlock,
    pub x_label: LabelBlock,
    pub y_label: LabelBlock,
    /// Stroke palette, assigned to series in first-seen order.
    pub color: Vec<String>,
    pub legend: Legend,
    pub x_scale: ScaleSpec,
    pub y_scale: ScaleSpec,
}

impl LineOptions {
    pub fn default_options() -> Self {
        Self {
            font: Font::default_small_font(),
            title: LabelBlock::with_font(Font::default_large_font()),
            x_label: LabelBlock::with_font(Font::default_font()),
            y_label: LabelBlock::with_font(Font::default_font()),
            color: palette_vec(&CATEGORY10),
            legend: Legend::default_legend(),
            x_scale: ScaleSpec::of_kind("time"),
            y_scale: ScaleSpec::default_scale(),
        }
    }
}

/// Partial line chart options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartOptions {
    pub font: FontOptions,
    pub title: LabelOptions,
    pub x_label: LabelOptions,
    pub y_label: LabelOptions,
    /// Replaces the default palette wholesale when set.
    pub color: Option<Vec<String>>,
    pub legend: LegendOptions,
    pub x_scale: ScaleOptions,
    pub y_scale: ScaleOptions,
}

impl MergeDefaults for LineChartOptions {
    type Resolved = LineOptions;

    fn merge_defaults(self, defaults: &LineOptions) -> LineOptions {
        LineOptions {
            font: self.font.merge_defaults(&defaults.font),
            title: self.title.merge_defaults(&defaults.title),
            x_label: self.x_label.merge_defaults(&defaults.x_label),
            y_label: self.y_label.merge_defaults(&defaults.y_label),
            color: self.color.unwrap_or_else(|| defaults.color.clone()),
            legend: self.legend.merge_defaults(&defaults.legend),
            x_scale: self.x_scale.merge_defaults(&defaults.x_scale),
            y_scale: self.y_scale.merge_defaults(&defaults.y_scale),
        }
    }
}

/// Plot margins, derived from the resolved options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// A line chart over the 0..1000 drawing surface.
#[derive(Debug, Clone)]
pub struct LineChart {
    options: LineOptions,
    margins: Margins,
    width: f64,
    height: f64,
    doc: ChartDocument,
    colors: Option<OrdinalColors>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChart {
    /// A chart with all-default options.
    pub fn new() -> Self {
        Self::with_options(LineChartOptions::default())
    }

    /// Merge `options` onto the defaults and derive the plot layout.
    pub fn with_options(options: LineChartOptions) -> Self {
        let options = options.merge_defaults(&LineOptions::default_options());
        let margins = derive_margins(&options);
        let width = SURFACE_SIZE - margins.left - margins.right;
        let height = SURFACE_SIZE - margins.top - margins.bottom;

        let mut doc = ChartDocument::new();
        doc.set_css(chart_css(&options));

        Self {
            options,
            margins,
            width,
            height,
            doc,
            colors: None,
        }
    }

    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The document drawn so far.
    pub fn document(&self) -> &ChartDocument {
        &self.doc
    }

    pub fn to_svg(&self) -> String {
        self.doc.to_svg()
    }

    /// Write the serialized document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        self.doc.save(path)
    }

    /// Draw `data` into the document.
    ///
    /// Fails if either scale's domain is invalid for its kind.
    pub fn draw(&mut self, data: &[SeriesPoint]) -> Result<&mut Self, ChartError> {
        let groups = split_by_key(data);

        self.draw_plot(data, &groups)?;
        self.draw_title();
        self.draw_legend(&groups);
        self.draw_x_label();
        self.draw_y_label();

        Ok(self)
    }

    fn stroke_color(&mut self, key: &str) -> String {
        let palette = &self.options.color;
        self.colors
            .get_or_insert_with(|| OrdinalColors::new(palette.clone()))
            .color(key)
    }

    fn draw_plot(
        &mut self,
        data: &[SeriesPoint],
        groups: &IndexMap<String, Vec<&SeriesPoint>>,
    ) -> Result<(), ChartError> {
        let xs: Vec<f64> = data.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = data.iter().map(|p| p.y).collect();

        let x_scale = self
            .options
            .x_scale
            .resolve(&xs)?
            .range((self.margins.left, self.width));
        let y_scale = self
            .options
            .y_scale
            .resolve(&ys)?
            .range((self.height + self.margins.bottom, self.margins.bottom));

        for (key, points) in groups {
            let mapped: Vec<(f64, f64)> = points
                .iter()
                .map(|p| (x_scale.map(p.x), y_scale.map(p.y)))
                .collect();
            let stroke = self.stroke_color(key);
            self.doc.add(
                Element::new("path")
                    .attr("stroke", stroke)
                    .attr("d", line_path(&mapped)),
            );
        }

        self.doc.add(
            axis::axis_bottom(&x_scale, DEFAULT_TICK_COUNT).attr(
                "transform",
                format!("translate(0, {})", self.margins.top + self.height),
            ),
        );
        self.doc.add(
            axis::axis_left(&y_scale, DEFAULT_TICK_COUNT)
                .attr("transform", format!("translate({}, 0)", self.margins.left)),
        );

        Ok(())
    }

    fn draw_title(&mut self) {
        let Some(text) = self.options.title.text.clone() else {
            return;
        };
        self.doc.add(
            Element::new("text")
                .text(text)
                .attr("id", "title")
                .attr(
                    "transform",
                    format!("translate({}, {})", SURFACE_SIZE / 2.0, self.margins.top / 2.0),
                ),
        );
    }

    fn draw_legend(&mut self, groups: &IndexMap<String, Vec<&SeriesPoint>>) {
        if groups.len() < 2 {
            return;
        }
        let keys: Vec<String> = groups.keys().cloned().collect();
        let palette = &self.options.color;
        let colors = self
            .colors
            .get_or_insert_with(|| OrdinalColors::new(palette.clone()));
        self.options.legend.append_to(&mut self.doc, &keys, colors);
    }

    fn draw_x_label(&mut self) {
        let Some(text) = self.options.x_label.text.clone() else {
            return;
        };
        let x = self.margins.left + self.width / 2.0;
        let y = self.margins.top + self.height + self.margins.bottom / 2.0;
        self.doc.add(
            Element::new("text")
                .text(text)
                .attr("id", "x_label")
                .attr("transform", format!("translate({x}, {y})")),
        );
    }

    fn draw_y_label(&mut self) {
        let Some(text) = self.options.y_label.text.clone() else {
            return;
        };
        let x = self.margins.left / 2.0;
        let y = self.margins.top + self.height / 2.0;
        self.doc.add(
            Element::new("text")
                .text(text)
                .attr("id", "y_label")
                .attr("transform", format!("translate({x}, {y}) rotate(-90)")),
        );
    }
}

fn derive_margins(options: &LineOptions) -> Margins {
    let mut margins = Margins {
        top: BASE_MARGIN,
        right: BASE_MARGIN,
        bottom: BASE_MARGIN,
        left: BASE_MARGIN,
    };

    let max_size = options
        .title
        .font
        .size
        .max(options.x_label.font.size)
        .max(options.y_label.font.size);

    let has_label = options.title.text.is_some()
        || options.x_label.text.is_some()
        || options.y_label.text.is_some();

    if has_label {
        margins.top += max_size;
        margins.right += max_size;
        margins.bottom += max_size;
        margins.left += max_size;
    }

    margins
}

fn chart_css(options: &LineOptions) -> String {
    format!(
        "path {{\nfill: none;\nstroke-width: 1.5;\n}}\n\n\
         text {{\n{}}}\n\n\
         #x_label {{\ntext-anchor: middle;\ndominant-baseline: hanging;\n{}}}\n\n\
         #y_label {{\ntext-anchor: middle;\ndominant-baseline: auto;\n{}}}\n\n\
         #title {{\ntext-anchor: middle;\ndominant-baseline: middle;\n{}}}\n",
        options.font.to_css(),
        options.x_label.font.to_css(),
        options.y_label.font.to_css(),
        options.title.font.to_css(),
    )
}

/// Group points by stringified key, preserving each group's insertion order.
fn split_by_key(data: &[SeriesPoint]) -> IndexMap<String, Vec<&SeriesPoint>> {
    let mut groups: IndexMap<String, Vec<&SeriesPoint>> = IndexMap::new();
    for point in data {
        let key = point.key.clone().unwrap_or_else(|| "undefined".to_string());
        groups.entry(key).or_default().push(point);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(key: &str, x: f64, y: f64) -> SeriesPoint {
        SeriesPoint {
            key: Some(key.to_string()),
            x,
            y,
        }
    }

    #[test]
    fn test_margins_without_labels() {
        let chart = LineChart::new();
        assert_eq!(chart.margins().top, 20.0);
        assert_eq!(chart.margins().left, 20.0);
        assert_eq!(chart.width(), 960.0);
        assert_eq!(chart.height(), 960.0);
    }

    #[test]
    fn test_margins_grow_with_any_label() {
        let chart = LineChart::with_options(LineChartOptions {
            x_label: LabelOptions {
                text: Some("time".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        // Largest label font is the 48px title default.
        assert_eq!(chart.margins().top, 68.0);
        assert_eq!(chart.margins().right, 68.0);
        assert_eq!(chart.margins().bottom, 68.0);
        assert_eq!(chart.margins().left, 68.0);
        assert_eq!(chart.width(), 1000.0 - 136.0);
    }

    #[test]
    fn test_split_by_key_preserves_order() {
        let data = vec![
            point("a", 1.0, 1.0),
            point("b", 1.0, 2.0),
            point("a", 2.0, 3.0),
        ];
        let groups = split_by_key(&data);
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(groups["a"].len(), 2);
        assert_eq!(groups["a"][1].y, 3.0);
    }

    #[test]
    fn test_missing_key_groups_under_undefined() {
        let data = vec![SeriesPoint {
            key: None,
            x: 0.0,
            y: 0.0,
        }];
        let groups = split_by_key(&data);
        assert!(groups.contains_key("undefined"));
    }

    #[test]
    fn test_one_path_per_series() {
        let mut chart = LineChart::with_options(LineChartOptions {
            x_scale: ScaleOptions {
                kind: Some("linear".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        chart
            .draw(&[
                point("a", 1.0, 1.0),
                point("a", 2.0, 4.0),
                point("b", 1.0, 1.0),
            ])
            .unwrap();

        // Two series paths; axis domain paths carry a class attribute.
        let series_paths: Vec<_> = chart
            .document()
            .find_all("path")
            .into_iter()
            .filter(|p| p.get_attr("class").is_none())
            .collect();
        assert_eq!(series_paths.len(), 2);
    }

    #[test]
    fn test_series_path_spans_only_its_points() {
        let mut chart = LineChart::with_options(LineChartOptions {
            x_scale: ScaleOptions {
                kind: Some("linear".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        chart
            .draw(&[point("a", 1.0, 1.0), point("a", 2.0, 4.0), point("b", 1.5, 2.0)])
            .unwrap();

        let series_paths: Vec<_> = chart
            .document()
            .find_all("path")
            .into_iter()
            .filter(|p| p.get_attr("class").is_none())
            .collect();
        // First series has two points (one L command), second only one.
        assert_eq!(series_paths[0].get_attr("d").unwrap().matches('L').count(), 1);
        assert_eq!(series_paths[1].get_attr("d").unwrap().matches('L').count(), 0);
    }

    #[test]
    fn test_legend_suppressed_for_single_series() {
        let mut chart = LineChart::with_options(linear_options());
        chart.draw(&[point("a", 1.0, 1.0), point("a", 2.0, 2.0)]).unwrap();
        assert!(chart.document().find_all("rect").is_empty());
    }

    #[test]
    fn test_legend_drawn_for_two_series() {
        let mut chart = LineChart::with_options(linear_options());
        chart.draw(&[point("a", 1.0, 1.0), point("b", 2.0, 2.0)]).unwrap();
        assert_eq!(chart.document().find_all("rect").len(), 2);
    }

    #[test]
    fn test_legend_swatches_match_series_strokes() {
        let mut chart = LineChart::with_options(linear_options());
        chart.draw(&[point("a", 1.0, 1.0), point("b", 2.0, 2.0)]).unwrap();

        let doc = chart.document();
        let strokes: Vec<String> = doc
            .find_all("path")
            .into_iter()
            .filter_map(|p| p.get_attr("stroke"))
            .filter(|s| s.starts_with('#'))
            .map(str::to_string)
            .collect();
        let swatches: Vec<String> = doc
            .find_all("rect")
            .into_iter()
            .filter_map(|r| r.get_attr("style"))
            .map(str::to_string)
            .collect();
        assert_eq!(strokes.len(), 2);
        assert!(swatches[0].contains(&strokes[0]));
        assert!(swatches[1].contains(&strokes[1]));
    }

    #[test]
    fn test_title_only_when_set() {
        let mut untitled = LineChart::with_options(linear_options());
        untitled.draw(&[point("a", 1.0, 1.0)]).unwrap();
        assert!(
            untitled
                .document()
                .find_all("text")
                .iter()
                .all(|t| t.get_attr("id") != Some("title"))
        );

        let mut titled = LineChart::with_options(LineChartOptions {
            title: LabelOptions {
                text: Some("Growth".into()),
                ..Default::default()
            },
            ..linear_options()
        });
        titled.draw(&[point("a", 1.0, 1.0)]).unwrap();
        let titles: Vec<_> = titled
            .document()
            .find_all("text")
            .into_iter()
            .filter(|t| t.get_attr("id") == Some("title"))
            .collect();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].text_content(), "Growth");
    }

    #[test]
    fn test_invalid_scale_domain_propagates() {
        let mut chart = LineChart::with_options(LineChartOptions {
            y_scale: ScaleOptions {
                kind: Some("log".into()),
                ..Default::default()
            },
            ..linear_options()
        });
        let err = chart.draw(&[point("a", 1.0, -1.0)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDomain(_)));
    }

    fn linear_options() -> LineChartOptions {
        LineChartOptions {
            x_scale: ScaleOptions {
                kind: Some("linear".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
