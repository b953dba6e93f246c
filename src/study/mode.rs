use super::{MetricRanges, Objective, OptimizationProblem, Sense, UserConstraint};
use crate::base::{Bounds, DesignVars, Error, Metric, Outputs};
use crate::rsm::ResponseSurfaceSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the optimization modes of a design study
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    /// Minimize or maximize one metric within the bounds (used to find the metric ranges)
    SingleObjective { metric: Metric, sense: Sense },

    /// Minimize one metric while the other three do not exceed their baseline values
    BaselineConstrained { metric: Metric, baseline: Outputs },

    /// Minimize the normalized sum of the listed metrics
    MultiObjective { metrics: Vec<Metric> },

    /// Minimize the normalized sum of the listed metrics subject to user constraints
    UserConstrained {
        metrics: Vec<Metric>,
        constraints: Vec<UserConstraint>,
    },
}

impl Mode {
    /// Indicates whether the mode needs the metric ranges
    pub fn needs_ranges(&self) -> bool {
        matches!(self, Mode::MultiObjective { .. } | Mode::UserConstrained { .. })
    }

    /// Composes the optimization problem of this mode
    ///
    /// # Errors
    ///
    /// * [Error::InvalidInput] if the mode needs the metric ranges and they are not given
    /// * [Error::DegenerateRange] if a range has zero width
    pub fn problem(
        &self,
        surfaces: &ResponseSurfaceSet,
        bounds: &Bounds,
        x_ini: &DesignVars,
        ranges: Option<&MetricRanges>,
    ) -> Result<OptimizationProblem, Error> {
        let (objective, constraints) = match self {
            Mode::SingleObjective { metric, sense } => (
                Objective::Single {
                    metric: *metric,
                    sense: *sense,
                },
                Vec::new(),
            ),
            Mode::BaselineConstrained { metric, baseline } => (
                Objective::Single {
                    metric: *metric,
                    sense: Sense::Minimize,
                },
                Metric::ALL
                    .iter()
                    .filter(|other| *other != metric)
                    .map(|other| UserConstraint::MetricAtMost {
                        metric: *other,
                        value: baseline.get(*other),
                    })
                    .collect(),
            ),
            Mode::MultiObjective { metrics } => {
                let ranges = ranges.ok_or("the multi-objective mode requires the metric ranges")?;
                (Objective::normalized_sum(metrics, ranges)?, Vec::new())
            }
            Mode::UserConstrained { metrics, constraints } => {
                let ranges = ranges.ok_or("the user-constrained mode requires the metric ranges")?;
                (Objective::normalized_sum(metrics, ranges)?, constraints.clone())
            }
        };
        let problem = OptimizationProblem {
            surfaces: *surfaces,
            bounds: *bounds,
            objective,
            constraints,
            x_ini: *x_ini,
        };
        problem.validate()?;
        Ok(problem)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let join = |metrics: &[Metric]| metrics.iter().map(|m| m.name()).collect::<Vec<_>>().join(" + ");
        match self {
            Mode::SingleObjective { metric, sense } => match sense {
                Sense::Minimize => write!(f, "minimize {}", metric),
                Sense::Maximize => write!(f, "maximize {}", metric),
            },
            Mode::BaselineConstrained { metric, .. } => write!(f, "minimize {} (others ≤ baseline)", metric),
            Mode::MultiObjective { metrics } => write!(f, "minimize normalized {}", join(metrics)),
            Mode::UserConstrained { metrics, constraints } => {
                let list = constraints.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "minimize normalized {} subject to {}", join(metrics), list)
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Mode;
    use crate::base::{baseline_input, baseline_output, default_bounds, search_start, Error, Metric, Param};
    use crate::rsm::ResponseSurfaceSet;
    use crate::study::{MetricRange, MetricRanges, Objective, Sense, UserConstraint};

    fn sample_ranges() -> MetricRanges {
        MetricRanges {
            csa: MetricRange::new(-9.43869, -5.77914),
            fs: MetricRange::new(2.29728, 13.86750),
            par: MetricRange::new(22.09602, 49.95338),
            rs: MetricRange::new(-72.60378, -0.74782),
        }
    }

    #[test]
    fn single_objective_problem_works() {
        let mode = Mode::SingleObjective {
            metric: Metric::Rs,
            sense: Sense::Maximize,
        };
        assert!(!mode.needs_ranges());
        let surfaces = ResponseSurfaceSet::reference();
        let problem = mode.problem(&surfaces, &default_bounds(), &baseline_input(), None).unwrap();
        assert_eq!(
            problem.objective,
            Objective::Single {
                metric: Metric::Rs,
                sense: Sense::Maximize
            }
        );
        assert!(problem.constraints.is_empty());
        assert_eq!(problem.x_ini, baseline_input());
        assert_eq!(format!("{}", mode), "maximize rs");
    }

    #[test]
    fn baseline_constrained_problem_works() {
        let mode = Mode::BaselineConstrained {
            metric: Metric::Fs,
            baseline: baseline_output(),
        };
        let surfaces = ResponseSurfaceSet::reference();
        let problem = mode.problem(&surfaces, &default_bounds(), &search_start(), None).unwrap();
        assert_eq!(
            problem.constraints,
            vec![
                UserConstraint::MetricAtMost {
                    metric: Metric::Csa,
                    value: -8.04
                },
                UserConstraint::MetricAtMost {
                    metric: Metric::Par,
                    value: 35.32
                },
                UserConstraint::MetricAtMost {
                    metric: Metric::Rs,
                    value: -20.91
                },
            ]
        );
        assert_eq!(format!("{}", mode), "minimize fs (others ≤ baseline)");
    }

    #[test]
    fn normalized_problems_need_ranges() {
        let surfaces = ResponseSurfaceSet::reference();
        let mode = Mode::MultiObjective {
            metrics: vec![Metric::Par, Metric::Rs],
        };
        assert!(mode.needs_ranges());
        assert_eq!(
            mode.problem(&surfaces, &default_bounds(), &search_start(), None).err(),
            Some(Error::InvalidInput(
                "the multi-objective mode requires the metric ranges".to_string()
            ))
        );
        let ranges = sample_ranges();
        let problem = mode
            .problem(&surfaces, &default_bounds(), &search_start(), Some(&ranges))
            .unwrap();
        assert_eq!(
            problem.objective,
            Objective::NormalizedSum {
                terms: vec![(Metric::Par, ranges.par), (Metric::Rs, ranges.rs)]
            }
        );
        assert_eq!(format!("{}", mode), "minimize normalized par + rs");

        let mode = Mode::UserConstrained {
            metrics: Metric::ALL.to_vec(),
            constraints: vec![
                UserConstraint::MetricAtMost {
                    metric: Metric::Rs,
                    value: -40.0,
                },
                UserConstraint::ParamAtMost {
                    param: Param::T,
                    value: 150.0,
                },
            ],
        };
        let problem = mode
            .problem(&surfaces, &default_bounds(), &search_start(), Some(&ranges))
            .unwrap();
        assert_eq!(problem.constraints.len(), 2);
        assert_eq!(
            format!("{}", mode),
            "minimize normalized csa + fs + par + rs subject to rs ≤ -40, t ≤ 150"
        );
    }

    #[test]
    fn serde_works() {
        let mode: Mode = serde_json::from_str(r#"{"mode":"multi_objective","metrics":["par","rs"]}"#).unwrap();
        assert_eq!(
            mode,
            Mode::MultiObjective {
                metrics: vec![Metric::Par, Metric::Rs]
            }
        );
        let json = serde_json::to_string(&Mode::SingleObjective {
            metric: Metric::Csa,
            sense: Sense::Minimize,
        })
        .unwrap();
        assert_eq!(json, r#"{"mode":"single_objective","metric":"csa","sense":"minimize"}"#);
    }
}
