//! Ordinal color palettes.
//!
//! An [`OrdinalColors`] scale hands out palette entries by key: the first
//! key seen gets the first color, the second key the second, and so on,
//! cycling when the palette runs out. Assignment is deterministic in
//! first-seen order.

use indexmap::IndexMap;

/// The ten-color categorical palette used by line charts.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// The twelve-color pastel palette used by pie charts.
pub const SET3: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// An ordinal scale from string keys onto a color palette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdinalColors {
    palette: Vec<String>,
    assigned: IndexMap<String, usize>,
}

impl OrdinalColors {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            assigned: IndexMap::new(),
        }
    }

    /// The color for `key`, assigning the next palette entry on first sight.
    pub fn color(&mut self, key: &str) -> String {
        if self.palette.is_empty() {
            return "black".to_string();
        }
        let next = self.assigned.len();
        let index = *self.assigned.entry(key.to_string()).or_insert(next);
        self.palette[index % self.palette.len()].clone()
    }
}

/// Convert a static palette to the owned form options carry.
pub fn palette_vec(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|c| (*c).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_assignment() {
        let mut colors = OrdinalColors::new(palette_vec(&CATEGORY10));
        assert_eq!(colors.color("a"), CATEGORY10[0]);
        assert_eq!(colors.color("b"), CATEGORY10[1]);
        assert_eq!(colors.color("a"), CATEGORY10[0]);
    }

    #[test]
    fn test_palette_cycles() {
        let mut colors = OrdinalColors::new(vec!["red".into(), "green".into()]);
        colors.color("a");
        colors.color("b");
        assert_eq!(colors.color("c"), "red");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut colors = OrdinalColors::new(Vec::new());
        assert_eq!(colors.color("a"), "black");
    }
}
