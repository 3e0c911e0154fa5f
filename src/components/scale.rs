//! Scale resolution: turn scale options plus a data sample into a
//! validated continuous scale.
//!
//! The domain defaults to the extent of the sample; explicit `min`/`max`
//! options override either bound. Domain preconditions are checked here so
//! invalid configurations fail before anything is drawn.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::merge::MergeDefaults;
use crate::render::{Scale, ScaleKind, extent};

/// Resolved scale configuration.
///
/// The kind stays a string until [`resolve`](ScaleSpec::resolve) so that
/// unknown values surface as [`ChartError::UnknownScaleType`] rather than
/// failing at deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSpec {
    pub kind: String,
    /// Lower domain bound; `None` uses the data minimum.
    pub min: Option<f64>,
    /// Upper domain bound; `None` uses the data maximum.
    pub max: Option<f64>,
}

impl ScaleSpec {
    pub fn default_scale() -> Self {
        Self {
            kind: "linear".to_string(),
            min: None,
            max: None,
        }
    }

    /// A default scale of a different kind.
    pub fn of_kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default_scale()
        }
    }

    /// Compute the effective domain over `values`, validate it against the
    /// scale kind, and construct the scale.
    pub fn resolve(&self, values: &[f64]) -> Result<Scale, ChartError> {
        let (mut min, mut max) = extent(values).unwrap_or((0.0, 0.0));
        if let Some(bound) = self.min {
            min = bound;
        }
        if let Some(bound) = self.max {
            max = bound;
        }

        let kind = ScaleKind::parse(&self.kind)
            .ok_or_else(|| ChartError::UnknownScaleType(self.kind.clone()))?;

        match kind {
            ScaleKind::Log | ScaleKind::Symlog if min <= 0.0 => {
                return Err(ChartError::InvalidDomain(format!(
                    "{} scale needs a positive domain minimum, got {min}",
                    kind.as_str()
                )));
            }
            ScaleKind::Sqrt if min < 0.0 => {
                return Err(ChartError::InvalidDomain(format!(
                    "sqrt scale needs a non-negative domain minimum, got {min}"
                )));
            }
            _ => {}
        }

        Ok(Scale::new(kind, (min, max)))
    }
}

/// Partial scale options. The JSON key for the kind is `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOptions {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MergeDefaults for ScaleOptions {
    type Resolved = ScaleSpec;

    fn merge_defaults(self, defaults: &ScaleSpec) -> ScaleSpec {
        ScaleSpec {
            kind: self.kind.unwrap_or_else(|| defaults.kind.clone()),
            min: self.min.or(defaults.min),
            max: self.max.or(defaults.max),
        }
    }
}
