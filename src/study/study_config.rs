use super::UserConstraint;
use crate::base::{baseline_input, baseline_output, default_bounds, search_start};
use crate::base::{Bounds, DesignVars, Metric, Outputs, Param};
use crate::optim::OptimizerSettings;
use crate::rsm::ResponseSurfaceSet;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the input data of a design study
///
/// Missing fields in a JSON file are taken from the reference study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Response surfaces of the four metrics
    pub surfaces: ResponseSurfaceSet,

    /// Box bounds of the design space
    pub bounds: Bounds,

    /// Baseline design
    pub baseline_input: DesignVars,

    /// Metrics simulated at the baseline design (the constraints of the baseline-constrained mode)
    pub baseline_output: Outputs,

    /// Initial guess of the bound searches
    pub bound_search_start: DesignVars,

    /// Initial guess of the baseline-constrained, multi-objective and user-constrained modes
    pub search_start: DesignVars,

    /// Metrics combined by the multi-objective mode
    pub multi_objective_metrics: Vec<Metric>,

    /// Metrics combined by the user-constrained mode
    pub user_objective_metrics: Vec<Metric>,

    /// Constraints of the user-constrained mode
    pub user_constraints: Vec<UserConstraint>,

    /// Options of the optimizer
    pub optimizer: OptimizerSettings,
}

impl StudyConfig {
    /// Returns the configuration of the reference study
    pub fn reference() -> Self {
        StudyConfig {
            surfaces: ResponseSurfaceSet::reference(),
            bounds: default_bounds(),
            baseline_input: baseline_input(),
            baseline_output: baseline_output(),
            bound_search_start: baseline_input(),
            search_start: search_start(),
            multi_objective_metrics: vec![Metric::Par, Metric::Rs],
            user_objective_metrics: Metric::ALL.to_vec(),
            user_constraints: vec![
                UserConstraint::MetricAtMost {
                    metric: Metric::Rs,
                    value: -40.0,
                },
                UserConstraint::ParamAtMost {
                    param: Param::T,
                    value: 150.0,
                },
            ],
            optimizer: OptimizerSettings::new(),
        }
    }

    /// Parses a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse the study configuration")
    }

    /// Reads a JSON file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).map_err(|_| "cannot parse the study configuration")?;
        Ok(config)
    }

    /// Writes a JSON file
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

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !self.surfaces.is_finite() {
            return Some("the response surface coefficients must be finite".to_string());
        }
        if let Some(message) = self.bounds.validate() {
            return Some(message);
        }
        let points = [
            ("baseline_input", &self.baseline_input),
            ("bound_search_start", &self.bound_search_start),
            ("search_start", &self.search_start),
        ];
        for (name, x) in points {
            if !x.as_array().iter().all(|v| v.is_finite()) {
                return Some(format!("{} must be finite", name));
            }
        }
        if !self.baseline_output.as_array().iter().all(|v| v.is_finite()) {
            return Some("baseline_output must be finite".to_string());
        }
        if self.multi_objective_metrics.is_empty() {
            return Some("multi_objective_metrics must not be empty".to_string());
        }
        if self.user_objective_metrics.is_empty() {
            return Some("user_objective_metrics must not be empty".to_string());
        }
        if let Some(c) = self.user_constraints.iter().find(|c| !c.is_finite()) {
            return Some(format!("the limit of constraint {:?} must be finite", c));
        }
        self.optimizer.validate()
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        StudyConfig::reference()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
