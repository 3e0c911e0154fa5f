//! Continuous scales: map a numeric domain onto an output range.
//!
//! Supports the linear, pow, sqrt, log, symlog, identity and time scale
//! families. A scale is a value type; `map` is pure and `ticks` produces
//! round values inside the domain for axis rendering.

use chrono::{Datelike, TimeZone, Utc};

/// The scale families a chart can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Pow,
    Sqrt,
    Log,
    Symlog,
    Identity,
    /// Linear over epoch milliseconds; ticks land on year boundaries.
    Time,
}

impl ScaleKind {
    /// Parse a scale kind string. Unrecognized strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(Self::Linear),
            "pow" => Some(Self::Pow),
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            "symlog" => Some(Self::Symlog),
            "identity" => Some(Self::Identity),
            "time" => Some(Self::Time),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Pow => "pow",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Symlog => "symlog",
            Self::Identity => "identity",
            Self::Time => "time",
        }
    }
}

/// A continuous scale over `[domain.0, domain.1]` mapping into
/// `[range.0, range.1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    /// Create a scale over `domain` with the unit range `[0, 1]`.
    pub fn new(kind: ScaleKind, domain: (f64, f64)) -> Self {
        Self {
            kind,
            domain,
            range: (0.0, 1.0),
        }
    }

    /// Set the output range.
    pub fn range(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn output_range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range.
    ///
    /// Identity scales return the value unchanged. A zero-span domain maps
    /// everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        if self.kind == ScaleKind::Identity {
            return value;
        }

        let t0 = transform(self.kind, self.domain.0);
        let t1 = transform(self.kind, self.domain.1);
        let span = t1 - t0;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            (transform(self.kind, value) - t0) / span
        };
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        match self.kind {
            ScaleKind::Time => year_ticks(min, max, count),
            ScaleKind::Log => decade_ticks(min, max).unwrap_or_else(|| linear_ticks(min, max, count)),
            _ => linear_ticks(min, max, count),
        }
    }
}

fn transform(kind: ScaleKind, value: f64) -> f64 {
    match kind {
        ScaleKind::Linear | ScaleKind::Identity | ScaleKind::Time => value,
        // Exponent 1: linear shape until an exponent option exists.
        ScaleKind::Pow => value,
        ScaleKind::Sqrt => value.signum() * value.abs().sqrt(),
        ScaleKind::Log => value.log10(),
        ScaleKind::Symlog => value.signum() * value.abs().ln_1p(),
    }
}

/// `[min, max]` over a numeric sample, ignoring NaN. Empty samples yield `None`.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    bounds
}

/// Round a rough step to 1, 2, 5 or 10 times a power of ten.
fn nice_step(rough: f64) -> f64 {
    let exponent = rough.abs().log10().floor();
    let fraction = rough / 10.0f64.powf(exponent);
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10.0f64.powf(exponent)
}

fn linear_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }

    let step = nice_step((max - min) / count.max(1) as f64);
    let first = (min / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut v = first;
    while v <= max + step * 0.01 {
        // Snap accumulated floating point error back onto the step grid.
        ticks.push((v / step).round() * step);
        v += step;
    }
    ticks
}

/// Powers of ten inside the domain. `None` when fewer than two fit.
fn decade_ticks(min: f64, max: f64) -> Option<Vec<f64>> {
    if min <= 0.0 || max <= min {
        return None;
    }
    let lo = min.log10().ceil() as i32;
    let hi = max.log10().floor() as i32;
    if hi - lo < 1 {
        return None;
    }
    Some((lo..=hi).map(|e| 10.0f64.powi(e)).collect())
}

/// Year-boundary ticks over an epoch-millisecond domain.
fn year_ticks(min_ms: f64, max_ms: f64, count: usize) -> Vec<f64> {
    let (Some(start), Some(end)) = (year_of(min_ms), year_of(max_ms)) else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }

    let span = (end - start) as f64;
    let step = (nice_step(span / count.max(1) as f64).round() as i32).max(1);
    let first = (start as f64 / step as f64).ceil() as i32 * step;

    (0..)
        .map(|i| first + i * step)
        .take_while(|&year| year <= end)
        .filter_map(year_start_ms)
        .collect()
}

fn year_of(ms: f64) -> Option<i32> {
    Utc.timestamp_millis_opt(ms as i64).single().map(|t| t.year())
}

fn year_start_ms(year: i32) -> Option<f64> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(|t| t.timestamp_millis() as f64)
}

/// Format an epoch-millisecond value as its calendar year.
pub(crate) fn year_label(ms: f64) -> String {
    year_of(ms).map_or_else(String::new, |year| year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 10.0)).range((0.0, 100.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(10.0), 100.0);
    }

    #[test]
    fn test_linear_map_inverted_range() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 10.0)).range((100.0, 0.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(10.0), 0.0);
    }

    #[test]
    fn test_sqrt_map() {
        let scale = Scale::new(ScaleKind::Sqrt, (0.0, 100.0)).range((0.0, 10.0));
        assert_eq!(scale.map(25.0), 5.0);
        assert_eq!(scale.map(100.0), 10.0);
    }

    #[test]
    fn test_log_map() {
        let scale = Scale::new(ScaleKind::Log, (1.0, 1000.0)).range((0.0, 3.0));
        assert!((scale.map(10.0) - 1.0).abs() < 1e-12);
        assert!((scale.map(100.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_symlog_map_handles_zero() {
        let scale = Scale::new(ScaleKind::Symlog, (0.0, 100.0)).range((0.0, 1.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert!(scale.map(50.0) > 0.5); // log-like compression
    }

    #[test]
    fn test_identity_ignores_range() {
        let scale = Scale::new(ScaleKind::Identity, (0.0, 10.0)).range((0.0, 1000.0));
        assert_eq!(scale.map(7.5), 7.5);
    }

    #[test]
    fn test_zero_span_domain_maps_to_middle() {
        let scale = Scale::new(ScaleKind::Linear, (5.0, 5.0)).range((0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(&[3.0, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent(&[2.0]), Some((2.0, 2.0)));
        assert_eq!(extent(&[]), None);
    }

    #[test]
    fn test_extent_ignores_nan() {
        assert_eq!(extent(&[f64::NAN, 1.0, 2.0]), Some((1.0, 2.0)));
    }

    #[test]
    fn test_linear_ticks_are_round() {
        let ticks = linear_ticks(0.0, 100.0, 5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_linear_ticks_stay_inside_domain() {
        let ticks = linear_ticks(-16.0, -11.0, 4);
        assert!(ticks.len() >= 2);
        assert!(*ticks.first().unwrap() >= -16.0);
        assert!(*ticks.last().unwrap() <= -11.0);
    }

    #[test]
    fn test_decade_ticks() {
        assert_eq!(decade_ticks(1.0, 1000.0), Some(vec![1.0, 10.0, 100.0, 1000.0]));
        assert_eq!(decade_ticks(2.0, 5.0), None);
    }

    #[test]
    fn test_year_ticks_land_on_january_first() {
        // 2020-06-01 .. 2024-06-01
        let min = year_start_ms(2020).unwrap() + 13_000_000_000.0;
        let max = year_start_ms(2024).unwrap() + 13_000_000_000.0;
        let ticks = year_ticks(min, max, 5);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            assert_eq!(*tick, year_start_ms(year_of(*tick).unwrap()).unwrap());
        }
    }

    #[test]
    fn test_year_label() {
        assert_eq!(year_label(year_start_ms(1999).unwrap()), "1999");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(ScaleKind::parse("linear"), Some(ScaleKind::Linear));
        assert_eq!(ScaleKind::parse("symlog"), Some(ScaleKind::Symlog));
        assert_eq!(ScaleKind::parse("bogus"), None);
    }
}
