//! # Numeric and Angle Formatting
//!
//! Pure conversions shared by the chart variants: radian/degree conversion
//! and ratio-to-percentage formatting with a configurable rounding mode.

use std::f64::consts::PI;

/// Convert radians to degrees.
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert degrees to radians.
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Rounding mode applied when formatting a ratio as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    Ceil,
    Floor,
    Round,
    /// Keep the value as-is.
    #[default]
    None,
}

/// Parse a rounding mode string.
///
/// Unrecognized strings yield `None`; callers fall back to `Rounding::None`,
/// which leaves the value untouched.
pub fn parse_rounding(s: &str) -> Option<Rounding> {
    match s {
        "ceil" => Some(Rounding::Ceil),
        "floor" => Some(Rounding::Floor),
        "round" => Some(Rounding::Round),
        "none" => Some(Rounding::None),
        _ => None,
    }
}

/// Format a ratio as a percentage string.
///
/// The ratio is scaled to a percentage, rounded at `decimals` fractional
/// digits according to `rounding`, and rendered with exactly `decimals`
/// fractional digits and a trailing `%`.
///
/// ```
/// use trazo::math::{percent, Rounding};
///
/// assert_eq!(percent(0.12345, Rounding::Floor, 1), "12.3%");
/// assert_eq!(percent(0.5, Rounding::Round, 0), "50%");
/// ```
pub fn percent(ratio: f64, rounding: Rounding, decimals: u32) -> String {
    let shift = 10f64.powi(decimals as i32);
    let mut number = ratio * 100.0 * shift;

    number = match rounding {
        Rounding::Ceil => number.ceil(),
        Rounding::Floor => number.floor(),
        Rounding::Round => number.round(),
        Rounding::None => number,
    };

    format!("{:.*}%", decimals as usize, number / shift)
}
