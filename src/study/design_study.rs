use super::{DesignResult, MetricRanges, Mode, Sense, StudyConfig};
use crate::base::{DesignVars, Error, Metric, Outputs};
use crate::StrError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;
use tracing::{info, warn};

/// Holds the result of the minimization or maximization of one metric
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundSearchRun {
    pub metric: Metric,
    pub sense: Sense,
    pub result: DesignResult,
}

/// Holds the result of the minimization of one metric constrained by the baseline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstrainedRun {
    pub metric: Metric,
    pub result: Result<DesignResult, String>,
}

/// Holds the results of all stages of a design study
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyReport {
    /// Metrics predicted by the surfaces at the baseline design
    pub baseline: Outputs,

    /// Minimization and maximization of each metric
    pub bound_search: Vec<BoundSearchRun>,

    /// Achievable ranges (or the reason why they are unavailable)
    pub ranges: Result<MetricRanges, String>,

    /// Minimization of each metric with the others bounded by the baseline
    pub baseline_constrained: Vec<ConstrainedRun>,

    /// Minimization of the normalized sum of the multi-objective metrics
    pub multi_objective: Result<DesignResult, String>,

    /// Minimization of the normalized sum subject to the user constraints
    pub user_constrained: Result<DesignResult, String>,
}

impl StudyReport {
    /// Writes a JSON file with the report
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Runs the optimization modes of a design study
///
/// The stages are:
///
/// 1. minimize and maximize each metric (in parallel), giving the achievable ranges
/// 2. minimize each metric with the other three not exceeding the baseline output
/// 3. minimize the normalized sum of the multi-objective metrics
/// 4. minimize the normalized sum of the user metrics subject to the user constraints
///
/// The failure of one run of stages 2 to 4 is recorded in the report and does not stop the others.
pub struct DesignStudy {
    config: StudyConfig,
}

impl DesignStudy {
    /// Allocates a new instance
    pub fn new(config: StudyConfig) -> Result<Self, Error> {
        if let Some(message) = config.validate() {
            return Err(Error::InvalidInput(message));
        }
        Ok(DesignStudy { config })
    }

    /// Returns the configuration
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Evaluates all metrics at a design point
    pub fn evaluate(&self, x: &DesignVars) -> Outputs {
        self.config.surfaces.evaluate(x)
    }

    /// Solves the problem of one mode
    pub fn run_mode(&self, mode: &Mode, x_ini: &DesignVars, ranges: Option<&MetricRanges>) -> Result<DesignResult, Error> {
        let c = &self.config;
        let res = mode.problem(&c.surfaces, &c.bounds, x_ini, ranges)?.solve(&c.optimizer)?;
        if res.converged() {
            info!(%mode, objective = res.objective, x = %res.x, "run converged");
        } else {
            warn!(%mode, objective = res.objective, max_violation = res.max_violation, "run did not converge");
        }
        Ok(res)
    }

    /// Minimizes and maximizes each metric within the bounds
    pub fn bound_search(&self) -> Result<Vec<BoundSearchRun>, Error> {
        let cases: Vec<(Metric, Sense)> = Metric::ALL
            .iter()
            .flat_map(|m| [(*m, Sense::Minimize), (*m, Sense::Maximize)])
            .collect();
        cases
            .par_iter()
            .map(|(metric, sense)| -> Result<BoundSearchRun, Error> {
                let mode = Mode::SingleObjective {
                    metric: *metric,
                    sense: *sense,
                };
                let result = self.run_mode(&mode, &self.config.bound_search_start, None)?;
                Ok(BoundSearchRun {
                    metric: *metric,
                    sense: *sense,
                    result,
                })
            })
            .collect()
    }

    /// Minimizes each metric with the other three not exceeding the baseline output
    pub fn baseline_constrained(&self) -> Vec<ConstrainedRun> {
        Metric::ALL
            .iter()
            .map(|metric| {
                let mode = Mode::BaselineConstrained {
                    metric: *metric,
                    baseline: self.config.baseline_output,
                };
                ConstrainedRun {
                    metric: *metric,
                    result: self
                        .run_mode(&mode, &self.config.search_start, None)
                        .map_err(|e| e.to_string()),
                }
            })
            .collect()
    }

    /// Minimizes the normalized sum of the multi-objective metrics
    pub fn multi_objective(&self, ranges: &MetricRanges) -> Result<DesignResult, Error> {
        let mode = Mode::MultiObjective {
            metrics: self.config.multi_objective_metrics.clone(),
        };
        self.run_mode(&mode, &self.config.search_start, Some(ranges))
    }

    /// Minimizes the normalized sum of the user metrics subject to the user constraints
    pub fn user_constrained(&self, ranges: &MetricRanges) -> Result<DesignResult, Error> {
        let mode = Mode::UserConstrained {
            metrics: self.config.user_objective_metrics.clone(),
            constraints: self.config.user_constraints.clone(),
        };
        self.run_mode(&mode, &self.config.search_start, Some(ranges))
    }

    /// Runs all stages
    ///
    /// Returns an error only if the bound searches cannot be set up.
    pub fn run(&self) -> Result<StudyReport, Error> {
        let baseline = self.evaluate(&self.config.baseline_input);
        info!(%baseline, "baseline design");

        info!("searching the metric ranges");
        let bound_search = self.bound_search()?;
        let ranges = MetricRanges::from_bound_search(&bound_search);
        if let Err(e) = &ranges {
            warn!(error = %e, "metric ranges are unavailable");
        }

        info!("minimizing each metric constrained by the baseline");
        let baseline_constrained = self.baseline_constrained();

        info!("minimizing the normalized objectives");
        let (multi_objective, user_constrained) = match &ranges {
            Ok(r) => (
                self.multi_objective(r).map_err(|e| e.to_string()),
                self.user_constrained(r).map_err(|e| e.to_string()),
            ),
            Err(e) => (Err(e.to_string()), Err(e.to_string())),
        };

        Ok(StudyReport {
            baseline,
            bound_search,
            ranges: ranges.map_err(|e| e.to_string()),
            baseline_constrained,
            multi_objective,
            user_constrained,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DesignStudy;
    use crate::base::{Error, Metric};
    use crate::study::{Sense, StudyConfig};

    #[test]
    fn new_captures_errors() {
        let mut config = StudyConfig::reference();
        config.user_objective_metrics.clear();
        assert_eq!(
            DesignStudy::new(config).err(),
            Some(Error::InvalidInput(
                "user_objective_metrics must not be empty".to_string()
            ))
        );
    }

    #[test]
    fn bound_search_works() {
        let study = DesignStudy::new(StudyConfig::reference()).unwrap();
        let runs = study.bound_search().unwrap();
        assert_eq!(runs.len(), 8);
        for metric in Metric::ALL {
            let min = runs
                .iter()
                .find(|r| r.metric == metric && r.sense == Sense::Minimize)
                .unwrap();
            let max = runs
                .iter()
                .find(|r| r.metric == metric && r.sense == Sense::Maximize)
                .unwrap();
            assert!(min.result.converged());
            assert!(max.result.converged());
            assert!(min.result.objective < max.result.objective);
        }
    }
}
