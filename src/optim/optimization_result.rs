use serde::{Deserialize, Serialize};

/// Defines the outcome of an optimization run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The tolerances were satisfied
    Converged,

    /// The iteration budget was exhausted (or no descent was possible) before the tolerances were satisfied
    NotConverged,
}

/// Holds the results of an optimization run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Last iterate (the optimum if converged)
    pub x: Vec<f64>,

    /// Objective value at x
    pub f: f64,

    /// Largest constraint violation at x
    pub max_violation: f64,

    /// Convergence status
    pub status: Status,

    /// Total number of inner iterations
    pub n_iterations: usize,

    /// Number of outer (multiplier update) iterations
    pub n_outer: usize,

    /// Number of function evaluations
    pub n_evaluations: usize,
}

impl OptimizationResult {
    /// Indicates whether the run converged
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
