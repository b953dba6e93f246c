use crate::base::{Metric, Param, NDIM};
use crate::rsm::ResponseSurfaceSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines an inequality constraint on a metric or on a design parameter
///
/// Each constraint is evaluated as g(x) with feasible points giving g(x) ≥ 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserConstraint {
    /// metric(x) ≤ value
    MetricAtMost { metric: Metric, value: f64 },

    /// metric(x) ≥ value
    MetricAtLeast { metric: Metric, value: f64 },

    /// x[param] ≤ value
    ParamAtMost { param: Param, value: f64 },

    /// x[param] ≥ value
    ParamAtLeast { param: Param, value: f64 },
}

impl UserConstraint {
    /// Evaluates g(x)
    pub fn value(&self, surfaces: &ResponseSurfaceSet, x: &[f64; NDIM]) -> f64 {
        match *self {
            UserConstraint::MetricAtMost { metric, value } => value - surfaces.value(metric, x),
            UserConstraint::MetricAtLeast { metric, value } => surfaces.value(metric, x) - value,
            UserConstraint::ParamAtMost { param, value } => value - x[param.index()],
            UserConstraint::ParamAtLeast { param, value } => x[param.index()] - value,
        }
    }

    /// Indicates whether the constraint value is finite
    pub fn is_finite(&self) -> bool {
        match *self {
            UserConstraint::MetricAtMost { value, .. }
            | UserConstraint::MetricAtLeast { value, .. }
            | UserConstraint::ParamAtMost { value, .. }
            | UserConstraint::ParamAtLeast { value, .. } => value.is_finite(),
        }
    }
}

impl fmt::Display for UserConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserConstraint::MetricAtMost { metric, value } => write!(f, "{} ≤ {}", metric, value),
            UserConstraint::MetricAtLeast { metric, value } => write!(f, "{} ≥ {}", metric, value),
            UserConstraint::ParamAtMost { param, value } => write!(f, "{} ≤ {}", param, value),
            UserConstraint::ParamAtLeast { param, value } => write!(f, "{} ≥ {}", param, value),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::UserConstraint;
    use crate::base::{Metric, Param};
    use crate::rsm::ResponseSurfaceSet;
    use russell_lab::approx_eq;

    #[test]
    fn value_works() {
        let surfaces = ResponseSurfaceSet::reference();
        let x = [1.35, 150.0, 150.0, 1050.0];
        let rs = surfaces.value(Metric::Rs, &x);
        let ceiling = UserConstraint::MetricAtMost {
            metric: Metric::Rs,
            value: -40.0,
        };
        approx_eq(ceiling.value(&surfaces, &x), -40.0 - rs, 1e-14);
        let floor = UserConstraint::MetricAtLeast {
            metric: Metric::Rs,
            value: -40.0,
        };
        approx_eq(floor.value(&surfaces, &x), rs + 40.0, 1e-14);
        let t_max = UserConstraint::ParamAtMost {
            param: Param::T,
            value: 140.0,
        };
        assert_eq!(t_max.value(&surfaces, &x), -10.0);
        let l_min = UserConstraint::ParamAtLeast {
            param: Param::L,
            value: 1000.0,
        };
        assert_eq!(l_min.value(&surfaces, &x), 50.0);
    }

    #[test]
    fn display_and_serde_work() {
        let c = UserConstraint::MetricAtMost {
            metric: Metric::Rs,
            value: -40.0,
        };
        assert_eq!(format!("{}", c), "rs ≤ -40");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"kind":"metric_at_most","metric":"rs","value":-40.0}"#);
        let c: UserConstraint = serde_json::from_str(r#"{"kind":"param_at_most","param":"t","value":150.0}"#).unwrap();
        assert_eq!(
            c,
            UserConstraint::ParamAtMost {
                param: Param::T,
                value: 150.0
            }
        );
        assert_eq!(format!("{}", c), "t ≤ 150");
        let c = UserConstraint::ParamAtLeast {
            param: Param::Ar,
            value: 1.5,
        };
        assert_eq!(format!("{}", c), "ar ≥ 1.5");
    }
}
