use super::BoundSearchRun;
use crate::base::{Error, Metric};
use crate::study::Sense;
use serde::{Deserialize, Serialize};

/// Holds the achievable range of a metric over the design space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Allocates a new instance
    pub fn new(min: f64, max: f64) -> Self {
        MetricRange { min, max }
    }

    /// Returns the width max - min
    ///
    /// Returns [Error::DegenerateRange] unless max > min (both finite).
    pub fn width(&self, metric: Metric) -> Result<f64, Error> {
        let width = self.max - self.min;
        if !(width > 0.0) || !width.is_finite() {
            return Err(Error::DegenerateRange {
                metric,
                min: self.min,
                max: self.max,
            });
        }
        Ok(width)
    }

    /// Returns the normalized deviation |(value - min) / (max - min)|
    pub fn normalize(&self, metric: Metric, value: f64) -> Result<f64, Error> {
        let width = self.width(metric)?;
        Ok(f64::abs((value - self.min) / width))
    }
}

/// Holds the achievable ranges of all metrics
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRanges {
    pub csa: MetricRange,
    pub fs: MetricRange,
    pub par: MetricRange,
    pub rs: MetricRange,
}

impl MetricRanges {
    /// Returns the range of a metric
    pub fn get(&self, metric: Metric) -> MetricRange {
        match metric {
            Metric::Csa => self.csa,
            Metric::Fs => self.fs,
            Metric::Par => self.par,
            Metric::Rs => self.rs,
        }
    }

    /// Extracts the ranges from the single-objective bound searches
    ///
    /// # Errors
    ///
    /// * [Error::BoundSearchIncomplete] if the minimization or maximization of a metric
    ///   is missing or did not converge
    /// * [Error::DegenerateRange] if a range has zero width
    pub fn from_bound_search(runs: &[BoundSearchRun]) -> Result<Self, Error> {
        let find = |metric: Metric, sense: Sense| -> Result<f64, Error> {
            match runs.iter().find(|r| r.metric == metric && r.sense == sense) {
                Some(run) if run.result.converged() => Ok(run.result.objective),
                _ => Err(Error::BoundSearchIncomplete(metric)),
            }
        };
        let mut ranges = [MetricRange::new(0.0, 0.0); 4];
        for metric in Metric::ALL {
            let range = MetricRange::new(find(metric, Sense::Minimize)?, find(metric, Sense::Maximize)?);
            range.width(metric)?;
            ranges[metric.index()] = range;
        }
        Ok(MetricRanges {
            csa: ranges[0],
            fs: ranges[1],
            par: ranges[2],
            rs: ranges[3],
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
