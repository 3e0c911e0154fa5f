//! Pie chart: proportional slices with optional image fills and an
//! aggregated "Other" bucket for slices below a proportion threshold.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::charts::{LabelBlock, LabelOptions};
use crate::components::font::{Font, FontOptions};
use crate::components::image::{ImageOptions, ImageSpec};
use crate::error::ChartError;
use crate::math::{Rounding, percent, radians_to_degrees};
use crate::merge::MergeDefaults;
use crate::render::color::palette_vec;
use crate::render::{ArcShape, OrdinalColors, PieSlice, SET3, pie_layout};
use crate::svg::document::SURFACE_SIZE;
use crate::svg::{ChartDocument, Element, fmt_coord};

/// Transform moving pie-local coordinates to the surface center.
const CENTER_TRANSFORM: &str = "translate(500, 500)";

const PIE_MARGIN: f64 = 10.0;

/// The aggregated key for below-threshold slices.
const OTHER_KEY: &str = "Other";

/// One pie slice's input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub key: String,
    pub count: f64,
    /// Image fill for this slice; when set, it replaces the flat fill color.
    #[serde(default)]
    pub image: ImageOptions,
}

/// Resolved handling of below-threshold slices.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherSpec {
    /// `"graph"` draws the aggregate as a normal slice, `"center"` as a
    /// dedicated center circle/image, anything else drops it.
    pub draw: String,
    /// Slices with a proportion at or below this go into the aggregate.
    pub proportion_threshold: f64,
    /// Image for the aggregate entry.
    pub image: ImageSpec,
}

impl OtherSpec {
    pub fn default_other() -> Self {
        Self {
            draw: "graph".to_string(),
            proportion_threshold: 0.01,
            image: ImageSpec::default_image(),
        }
    }
}

/// Partial options for below-threshold handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherOptions {
    pub draw: Option<String>,
    pub proportion_threshold: Option<f64>,
    pub image: ImageOptions,
}

impl MergeDefaults for OtherOptions {
    type Resolved = OtherSpec;

    fn merge_defaults(self, defaults: &OtherSpec) -> OtherSpec {
        OtherSpec {
            draw: self.draw.unwrap_or_else(|| defaults.draw.clone()),
            proportion_threshold: self
                .proportion_threshold
                .unwrap_or(defaults.proportion_threshold),
            image: self.image.merge_defaults(&defaults.image),
        }
    }
}

/// Resolved pie chart options.
#[derive(Debug, Clone, PartialEq)]
pub struct PieOptions {
    /// Above 0 creates a doughnut.
    pub inner_radius: f64,
    /// How far labels sit from the center (0.5 = halfway to the rim).
    pub text_distance_scale: f64,
    pub rotate_labels: bool,
    /// Slice label font.
    pub font: Font,
    /// What to append to slice labels: `"percent"`, `"count"` or `"none"`.
    pub append_number: String,
    pub color: Vec<String>,
    pub other: OtherSpec,
    pub title: LabelBlock,
}

impl PieOptions {
    pub fn default_options() -> Self {
        Self {
            inner_radius: 0.0,
            text_distance_scale: 0.5,
            rotate_labels: false,
            font: Font::default_font(),
            append_number: "percent".to_string(),
            color: palette_vec(&SET3),
            other: OtherSpec::default_other(),
            title: LabelBlock::with_font(Font::default_large_font()),
        }
    }
}

/// Partial pie chart options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartOptions {
    pub inner_radius: Option<f64>,
    pub text_distance_scale: Option<f64>,
    pub rotate_labels: Option<bool>,
    pub font: FontOptions,
    pub append_number: Option<String>,
    /// Replaces the default palette wholesale when set.
    pub color: Option<Vec<String>>,
    pub other: OtherOptions,
    pub title: LabelOptions,
}

impl MergeDefaults for PieChartOptions {
    type Resolved = PieOptions;

    fn merge_defaults(self, defaults: &PieOptions) -> PieOptions {
        PieOptions {
            inner_radius: self.inner_radius.unwrap_or(defaults.inner_radius),
            text_distance_scale: self
                .text_distance_scale
                .unwrap_or(defaults.text_distance_scale),
            rotate_labels: self.rotate_labels.unwrap_or(defaults.rotate_labels),
            font: self.font.merge_defaults(&defaults.font),
            append_number: self
                .append_number
                .unwrap_or_else(|| defaults.append_number.clone()),
            color: self.color.unwrap_or_else(|| defaults.color.clone()),
            other: self.other.merge_defaults(&defaults.other),
            title: self.title.merge_defaults(&defaults.title),
        }
    }
}

/// A slice with its share of the total and its resolved image fill.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: String,
    count: f64,
    proportion: f64,
    image: ImageSpec,
}

/// The slice sets a draw call works with.
struct Partition {
    /// Slices drawn as arcs, in input order (plus the aggregate when it is
    /// drawn on the graph).
    bulk: Vec<Entry>,
    /// The aggregate entry when it is drawn at the center instead.
    center: Option<Entry>,
}

/// A pie chart over the 0..1000 drawing surface.
#[derive(Debug, Clone)]
pub struct PieChart {
    options: PieOptions,
    margin: f64,
    outer_radius: f64,
    border_arc: ArcShape,
    text_arc: ArcShape,
    doc: ChartDocument,
    colors: Option<OrdinalColors>,
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PieChart {
    /// A chart with all-default options.
    pub fn new() -> Self {
        Self::with_options(PieChartOptions::default())
    }

    /// Merge `options` onto the defaults and derive radii and arc shapes.
    pub fn with_options(options: PieChartOptions) -> Self {
        let options = options.merge_defaults(&PieOptions::default_options());

        let margin = PIE_MARGIN;
        let mut outer_radius = SURFACE_SIZE / 2.0 - margin;
        if options.title.text.is_some() {
            outer_radius -= options.title.font.size + margin;
        }

        let border_arc = ArcShape::new(options.inner_radius, outer_radius);
        let text_arc = ArcShape::new(outer_radius * options.text_distance_scale, outer_radius);

        let mut doc = ChartDocument::new();
        doc.set_css(chart_css(&options));

        Self {
            options,
            margin,
            outer_radius,
            border_arc,
            text_arc,
            doc,
            colors: None,
        }
    }

    pub fn options(&self) -> &PieOptions {
        &self.options
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
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
    pub fn draw(&mut self, data: &[Slice]) -> &mut Self {
        let partition = self.split_data(data);
        let counts: Vec<f64> = partition.bulk.iter().map(|e| e.count).collect();
        let arcs: Vec<(PieSlice, Entry)> =
            pie_layout(&counts).into_iter().zip(partition.bulk).collect();
        let center = partition.center;

        self.draw_title();
        self.draw_images_and_clips(&arcs, center.as_ref());

        let mut pie = Element::new("g")
            .attr("id", "pie")
            .attr("transform", CENTER_TRANSFORM);
        pie = self.draw_borders(pie, &arcs, center.as_ref());
        pie = self.draw_labels(pie, &arcs, center.as_ref());
        self.doc.add(pie);

        self
    }

    /// Split the input into drawn slices and the optional center aggregate.
    fn split_data(&self, data: &[Slice]) -> Partition {
        let total: f64 = data.iter().map(|s| s.count).sum();
        let proportion_of = |count: f64| if total > 0.0 { count / total } else { 0.0 };

        let entries: Vec<Entry> = data
            .iter()
            .map(|slice| Entry {
                key: slice.key.clone(),
                count: slice.count,
                proportion: proportion_of(slice.count),
                image: slice
                    .image
                    .clone()
                    .merge_defaults(&ImageSpec::default_image()),
            })
            .collect();

        let threshold = self.options.other.proportion_threshold;
        let (above, below): (Vec<Entry>, Vec<Entry>) =
            entries.into_iter().partition(|e| e.proportion > threshold);

        let other_count: f64 = below.iter().map(|e| e.count).sum();
        let other = Entry {
            key: OTHER_KEY.to_string(),
            count: other_count,
            proportion: proportion_of(other_count),
            image: self.options.other.image.clone(),
        };

        let mut bulk = above;
        match self.options.other.draw.as_str() {
            "graph" => {
                bulk.push(other);
                Partition { bulk, center: None }
            }
            "center" => Partition {
                bulk,
                center: Some(other),
            },
            _ => Partition { bulk, center: None },
        }
    }

    fn fill_color(&mut self, entry: &Entry) -> String {
        if entry.image.href.is_some() {
            return "none".to_string();
        }
        let palette = &self.options.color;
        self.colors
            .get_or_insert_with(|| OrdinalColors::new(palette.clone()))
            .color(&entry.key)
    }

    fn label_text(&self, entry: &Entry) -> String {
        match self.options.append_number.as_str() {
            "percent" => format!(
                "{} {}",
                entry.key,
                percent(entry.proportion, Rounding::Floor, 1)
            ),
            "count" => format!("{} {}", entry.key, entry.count),
            _ => entry.key.clone(),
        }
    }

    fn label_transform(&self, slice: &PieSlice) -> String {
        let (cx, cy) = self.text_arc.centroid(slice.start_angle, slice.end_angle);
        let translate = format!("translate({}, {})", fmt_coord(cx), fmt_coord(cy));
        if !self.options.rotate_labels {
            return translate;
        }

        let mut rotation = radians_to_degrees(slice.mid_angle());
        if rotation < 180.0 {
            rotation -= 90.0;
        } else {
            rotation += 90.0;
        }
        format!("{translate} rotate({})", fmt_coord(rotation))
    }

    fn draw_title(&mut self) {
        let Some(text) = self.options.title.text.clone() else {
            return;
        };
        // Offset above the rim, using the slice-label font size.
        let offset = self.outer_radius + self.margin + self.options.font.size;
        self.doc.add(
            Element::new("text").text(text).attr("id", "title").attr(
                "transform",
                format!("{CENTER_TRANSFORM} translate(0, {})", fmt_coord(-offset)),
            ),
        );
    }

    /// Clip paths go into defs; each image is wrapped in a group clipped to
    /// its slice's arc (or to the center circle for the aggregate).
    fn draw_images_and_clips(&mut self, arcs: &[(PieSlice, Entry)], center: Option<&Entry>) {
        let with_images = || arcs.iter().filter(|(_, e)| e.image.href.is_some());

        for (slice, entry) in with_images() {
            self.doc.add_def(
                Element::new("clipPath")
                    .attr("id", format!("{}-clip", entry.key))
                    .child(
                        Element::new("path")
                            .attr("d", self.border_arc.path(slice.start_angle, slice.end_angle))
                            .attr("transform", CENTER_TRANSFORM),
                    ),
            );
        }

        for (slice, entry) in with_images() {
            let (cx, cy) = self.text_arc.centroid(slice.start_angle, slice.end_angle);
            let mut image = Element::new("image").attr(
                "transform",
                format!(
                    "translate({}, {}) {CENTER_TRANSFORM} {}",
                    fmt_coord(cx),
                    fmt_coord(cy),
                    entry.image.to_transform()
                ),
            );
            if let Some(href) = &entry.image.href {
                image = image.attr("href", href);
            }
            self.doc.add(
                Element::new("g")
                    .attr("clip-path", format!("url(#{}-clip)", entry.key))
                    .child(image),
            );
        }

        if let Some(other) = center {
            self.doc.add_def(
                Element::new("clipPath").attr("id", "other-clip").child(
                    Element::new("circle")
                        .attr("r", self.options.inner_radius)
                        .attr("transform", CENTER_TRANSFORM),
                ),
            );
            let mut image = Element::new("image").attr(
                "transform",
                format!("{CENTER_TRANSFORM} {}", other.image.to_transform()),
            );
            if let Some(href) = &other.image.href {
                image = image.attr("href", href);
            }
            self.doc.add(
                Element::new("g")
                    .attr("clip-path", "url(#other-clip)")
                    .child(image),
            );
        }
    }

    fn draw_borders(
        &mut self,
        mut pie: Element,
        arcs: &[(PieSlice, Entry)],
        center: Option<&Entry>,
    ) -> Element {
        for (slice, entry) in arcs {
            let fill = self.fill_color(entry);
            pie = pie.child(
                Element::new("path")
                    .attr("d", self.border_arc.path(slice.start_angle, slice.end_angle))
                    .attr("fill", fill),
            );
        }

        if let Some(other) = center {
            let fill = self.fill_color(other);
            pie = pie.child(
                Element::new("circle")
                    .attr("r", self.options.inner_radius)
                    .attr("style", format!("fill: {fill}")),
            );
        }

        pie
    }

    fn draw_labels(
        &self,
        mut pie: Element,
        arcs: &[(PieSlice, Entry)],
        center: Option<&Entry>,
    ) -> Element {
        for (slice, entry) in arcs {
            pie = pie.child(
                Element::new("text")
                    .text(self.label_text(entry))
                    .attr("transform", self.label_transform(slice)),
            );
        }

        // The center label sits at the pie group's origin, untransformed.
        if let Some(other) = center {
            pie = pie.child(Element::new("text").text(self.label_text(other)));
        }

        pie
    }
}

fn chart_css(options: &PieOptions) -> String {
    format!(
        "text {{\ntext-anchor: middle;\ndominant-baseline: middle;\n}}\n\n\
         #title {{\n{}}}\n\n\
         #pie text {{\n{}}}\n\n\
         #pie path, #pie circle {{\nstroke: black;\nstroke-width: 2px;\nopacity: 1;\n}}\n",
        options.title.font.to_css(),
        options.font.to_css(),
    )
}
