//! # Trazo CLI
//!
//! Command-line interface for rendering charts from JSON files.
//!
//! ## Usage
//!
//! ```bash
//! # Render a line chart
//! trazo line --data points.json --out chart.svg
//!
//! # Render a pie chart with custom options
//! trazo pie --data slices.json --options options.json --out share.svg
//! ```
//!
//! Data files hold an array of points (`[{"key": "a", "x": 1, "y": 2}, …]`)
//! or slices (`[{"key": "a", "count": 50}, …]`); the optional options file
//! holds the chart's partial options object.

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use trazo::ChartError;
use trazo::charts::{LineChart, LineChartOptions, PieChart, PieChartOptions, SeriesPoint, Slice};

/// Trazo - render statistical charts to SVG
#[derive(Parser, Debug)]
#[command(name = "trazo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a line chart from JSON data points
    Line {
        /// JSON file with an array of data points
        #[arg(long)]
        data: PathBuf,

        /// Output SVG file
        #[arg(long)]
        out: PathBuf,

        /// JSON file with partial chart options
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Render a pie chart from JSON slices
    Pie {
        /// JSON file with an array of slices
        #[arg(long)]
        data: PathBuf,

        /// Output SVG file
        #[arg(long)]
        out: PathBuf,

        /// JSON file with partial chart options
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChartError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Line { data, out, options } => {
            let points: Vec<SeriesPoint> = read_json(&data)?;
            let options: LineChartOptions = read_options(options.as_deref())?;
            LineChart::with_options(options).draw(&points)?.save(out)
        }
        Commands::Pie { data, out, options } => {
            let slices: Vec<Slice> = read_json(&data)?;
            let options: PieChartOptions = read_options(options.as_deref())?;
            PieChart::with_options(options).draw(&slices).save(out)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ChartError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| ChartError::Data(format!("{}: {e}", path.display())))
}

fn read_options<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, ChartError> {
    match path {
        Some(path) => read_json(path),
        None => Ok(T::default()),
    }
}
