//! # Trazo - Statistical Charts as SVG
//!
//! Trazo is a Rust library for rendering statistical charts to SVG markup.
//! It provides:
//!
//! - **Chart variants**: line charts and pie charts
//! - **Declarative options**: partial option structs deep-merged onto
//!   defaults, usable from Rust or JSON
//! - **Drawing primitives**: continuous scales, axes, arcs, legends and
//!   ordinal color palettes
//! - **An inspectable document**: charts draw into an element tree that is
//!   serialized only on save
//!
//! ## Quick Start
//!
//! ```no_run
//! use trazo::charts::{PieChart, PieChartOptions, Slice};
//! use trazo::charts::pie::OtherOptions;
//!
//! let mut chart = PieChart::with_options(PieChartOptions {
//!     other: OtherOptions {
//!         proportion_threshold: Some(0.05),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//!
//! chart
//!     .draw(&[
//!         Slice { key: "a".into(), count: 50.0, image: Default::default() },
//!         Slice { key: "b".into(), count: 10.0, image: Default::default() },
//!         Slice { key: "c".into(), count: 3.33, image: Default::default() },
//!     ])
//!     .save("share.svg")?;
//!
//! # Ok::<(), trazo::ChartError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`charts`] | Line and pie chart variants |
//! | [`components`] | Fonts, images, legends and scale resolution |
//! | [`render`] | Scales, arcs, axes, paths and palettes |
//! | [`svg`] | Element tree and document root |
//! | [`merge`] | Option merging |
//! | [`math`] | Angle and percentage formatting |
//! | [`error`] | Error types |

pub mod charts;
pub mod components;
pub mod error;
pub mod math;
pub mod merge;
pub mod render;
pub mod svg;

// Re-exports for convenience
pub use charts::{LineChart, PieChart};
pub use error::ChartError;
