//! # Drawing Primitives
//!
//! The geometry layer the chart variants draw with: continuous scales with
//! domain→range mapping and tick generation, pie layout and arc paths,
//! polyline path data, ordinal color palettes, and axis rendering.
//!
//! Everything here is deterministic and side-effect-free; charts configure
//! these primitives from resolved options and assemble the results into the
//! document.

pub mod arc;
pub mod axis;
pub mod color;
pub mod line;
pub mod scale;

pub use arc::{ArcShape, PieSlice, pie_layout};
pub use color::{CATEGORY10, OrdinalColors, SET3};
pub use line::line_path;
pub use scale::{Scale, ScaleKind, extent};
