use super::{ResponseSurface, NTERM};
use crate::base::{DesignVars, Metric, Outputs, NDIM, REFERENCE_COEFFICIENTS};
use serde::{Deserialize, Serialize};

/// Holds one response surface per metric
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseSurfaceSet {
    pub csa: ResponseSurface,
    pub fs: ResponseSurface,
    pub par: ResponseSurface,
    pub rs: ResponseSurface,
}

impl ResponseSurfaceSet {
    /// Allocates a new instance from a table with one row per term and one column per metric
    pub fn from_table(table: &[[f64; 4]; NTERM]) -> Self {
        let column = |m: usize| {
            let mut c = [0.0; NTERM];
            for k in 0..NTERM {
                c[k] = table[k][m];
            }
            ResponseSurface::new(c)
        };
        ResponseSurfaceSet {
            csa: column(0),
            fs: column(1),
            par: column(2),
            rs: column(3),
        }
    }

    /// Returns the surfaces fitted to the reference sampling plan
    pub fn reference() -> Self {
        ResponseSurfaceSet::from_table(&REFERENCE_COEFFICIENTS)
    }

    /// Returns the surface of a metric
    pub fn get(&self, metric: Metric) -> &ResponseSurface {
        match metric {
            Metric::Csa => &self.csa,
            Metric::Fs => &self.fs,
            Metric::Par => &self.par,
            Metric::Rs => &self.rs,
        }
    }

    /// Evaluates one metric at x = (ar, w, t, l)
    pub fn value(&self, metric: Metric, x: &[f64; NDIM]) -> f64 {
        self.get(metric).value(x)
    }

    /// Evaluates all metrics at a design point
    pub fn evaluate(&self, x: &DesignVars) -> Outputs {
        let x = x.as_array();
        Outputs {
            csa: self.csa.value(&x),
            fs: self.fs.value(&x),
            par: self.par.value(&x),
            rs: self.rs.value(&x),
        }
    }

    /// Indicates whether all coefficients are finite
    pub fn is_finite(&self) -> bool {
        Metric::ALL.iter().all(|m| self.get(*m).is_finite())
    }
}

impl Default for ResponseSurfaceSet {
    fn default() -> Self {
        ResponseSurfaceSet::reference()
    }
}

/// Evaluates all metrics of a surface set at a design point
pub fn evaluate(surfaces: &ResponseSurfaceSet, x: &DesignVars) -> Outputs {
    surfaces.evaluate(x)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{evaluate, ResponseSurfaceSet};
    use crate::base::{baseline_input, DesignVars, Metric, REFERENCE_COEFFICIENTS};
    use russell_lab::approx_eq;

    #[test]
    fn from_table_works() {
        let set = ResponseSurfaceSet::reference();
        for metric in Metric::ALL {
            for k in 0..15 {
                assert_eq!(set.get(metric).coefficients[k], REFERENCE_COEFFICIENTS[k][metric.index()]);
            }
        }
        assert!(set.is_finite());
    }

    #[test]
    fn evaluate_works() {
        let set = ResponseSurfaceSet::reference();
        let out = evaluate(&set, &baseline_input());
        approx_eq(out.csa, -8.291607175, 1e-10);
        approx_eq(out.fs, 5.6054385, 1e-10);
        approx_eq(out.par, 35.304496975, 1e-10);
        approx_eq(out.rs, -20.8640675, 1e-10);
        let x = DesignVars::new(2.0, 120.0, 180.0, 1000.0);
        let out = set.evaluate(&x);
        for metric in Metric::ALL {
            assert_eq!(out.get(metric), set.value(metric, &x.as_array()));
        }
    }
}
