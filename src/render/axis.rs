//! Axis rendering: a domain line plus tick marks and labels.
//!
//! An axis is produced as a `<g>` element positioned by the caller (charts
//! translate the group to the plot edge). Tick positions come from the
//! scale; time scales label ticks with the calendar year, everything else
//! with a compact numeric format.

use crate::render::scale::{Scale, ScaleKind, year_label};
use crate::svg::{Element, fmt_coord};

const TICK_LENGTH: f64 = 6.0;
const TICK_TEXT_OFFSET: f64 = 9.0;

/// Default number of ticks requested from the scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// A horizontal axis with ticks below the domain line.
pub fn axis_bottom(scale: &Scale, tick_count: usize) -> Element {
    let (r0, r1) = scale.output_range();
    let mut axis = axis_group("middle").child(domain_path(format!(
        "M{},{TICK_LENGTH}V0H{}V{TICK_LENGTH}",
        fmt_coord(r0),
        fmt_coord(r1)
    )));

    for tick in scale.ticks(tick_count) {
        let x = scale.map(tick);
        axis = axis.child(
            tick_group(format!("translate({},0)", fmt_coord(x)))
                .child(Element::new("line").attr("stroke", "currentColor").attr("y2", TICK_LENGTH))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", TICK_TEXT_OFFSET)
                        .attr("dy", "0.71em")
                        .text(tick_label(scale, tick)),
                ),
        );
    }
    axis
}

/// A vertical axis with ticks left of the domain line.
pub fn axis_left(scale: &Scale, tick_count: usize) -> Element {
    let (r0, r1) = scale.output_range();
    let mut axis = axis_group("end").child(domain_path(format!(
        "M-{TICK_LENGTH},{}H0V{}H-{TICK_LENGTH}",
        fmt_coord(r0),
        fmt_coord(r1)
    )));

    for tick in scale.ticks(tick_count) {
        let y = scale.map(tick);
        axis = axis.child(
            tick_group(format!("translate(0,{})", fmt_coord(y)))
                .child(Element::new("line").attr("stroke", "currentColor").attr("x2", -TICK_LENGTH))
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", -TICK_TEXT_OFFSET)
                        .attr("dy", "0.32em")
                        .text(tick_label(scale, tick)),
                ),
        );
    }
    axis
}

fn axis_group(anchor: &str) -> Element {
    Element::new("g")
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
}

fn domain_path(d: String) -> Element {
    Element::new("path")
        .attr("class", "domain")
        .attr("stroke", "currentColor")
        .attr("d", d)
}

fn tick_group(transform: String) -> Element {
    Element::new("g").attr("class", "tick").attr("transform", transform)
}

fn tick_label(scale: &Scale, tick: f64) -> String {
    if scale.kind() == ScaleKind::Time {
        year_label(tick)
    } else {
        format_number(tick)
    }
}

/// Compact tick-label format: integers bare, everything else with one
/// fractional digit.
pub(crate) fn format_number(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_texts(axis: &Element) -> Vec<String> {
        let mut texts = Vec::new();
        axis.find_all("text", &mut texts);
        texts.iter().map(|t| t.text_content()).collect()
    }

    #[test]
    fn test_bottom_axis_has_domain_and_ticks() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 100.0)).range((0.0, 500.0));
        let axis = axis_bottom(&scale, 5);

        let mut paths = Vec::new();
        axis.find_all("path", &mut paths);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].get_attr("class"), Some("domain"));

        let mut lines = Vec::new();
        axis.find_all("line", &mut lines);
        assert!(lines.len() >= 2);
    }

    #[test]
    fn test_tick_labels_are_numeric() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 10.0)).range((0.0, 100.0));
        let labels = tick_texts(&axis_bottom(&scale, 5));
        assert!(labels.contains(&"0".to_string()));
        assert!(labels.contains(&"10".to_string()));
    }

    #[test]
    fn test_left_axis_anchors_end() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 1.0)).range((100.0, 0.0));
        let axis = axis_left(&scale, 4);
        assert_eq!(axis.get_attr("text-anchor"), Some("end"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-16.0), "-16");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(100.0), "100");
    }
}
