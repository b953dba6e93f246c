use super::{MetricRange, MetricRanges};
use crate::base::{Error, Metric, NDIM};
use crate::rsm::ResponseSurfaceSet;
use serde::{Deserialize, Serialize};

/// Defines whether a metric is minimized or maximized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    Minimize,
    Maximize,
}

/// Defines the objective function of a design optimization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Objective {
    /// Minimize or maximize a single metric
    Single { metric: Metric, sense: Sense },

    /// Minimize Σ |(metric(x) - min) / (max - min)| over the listed metrics
    NormalizedSum { terms: Vec<(Metric, MetricRange)> },
}

impl Objective {
    /// Allocates a normalized-sum objective
    ///
    /// Returns [Error::DegenerateRange] if any of the ranges has zero width.
    pub fn normalized_sum(metrics: &[Metric], ranges: &MetricRanges) -> Result<Self, Error> {
        if metrics.is_empty() {
            return Err("the normalized objective requires at least one metric".into());
        }
        let mut terms = Vec::with_capacity(metrics.len());
        for metric in metrics {
            let range = ranges.get(*metric);
            range.width(*metric)?;
            terms.push((*metric, range));
        }
        Ok(Objective::NormalizedSum { terms })
    }

    /// Validates the objective
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Objective::Single { .. } => Ok(()),
            Objective::NormalizedSum { terms } => {
                if terms.is_empty() {
                    return Err("the normalized objective requires at least one metric".into());
                }
                for (metric, range) in terms {
                    range.width(*metric)?;
                }
                Ok(())
            }
        }
    }

    /// Evaluates the function to be minimized (maximized metrics are negated)
    pub fn minimized_value(&self, surfaces: &ResponseSurfaceSet, x: &[f64; NDIM]) -> f64 {
        match self {
            Objective::Single { metric, sense } => {
                let v = surfaces.value(*metric, x);
                match sense {
                    Sense::Minimize => v,
                    Sense::Maximize => -v,
                }
            }
            Objective::NormalizedSum { terms } => terms
                .iter()
                .map(|(metric, range)| f64::abs((surfaces.value(*metric, x) - range.min) / (range.max - range.min)))
                .sum(),
        }
    }

    /// Evaluates the objective with its natural sign (the metric itself for single objectives)
    pub fn value(&self, surfaces: &ResponseSurfaceSet, x: &[f64; NDIM]) -> f64 {
        match self {
            Objective::Single { metric, .. } => surfaces.value(*metric, x),
            Objective::NormalizedSum { .. } => self.minimized_value(surfaces, x),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
