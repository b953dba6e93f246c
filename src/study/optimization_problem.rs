use super::{Objective, UserConstraint};
use crate::base::{Bounds, DesignVars, Error, Outputs, NDIM};
use crate::optim::{AugLagSolver, NonlinearProblem, OptimizerSettings, Status};
use crate::rsm::ResponseSurfaceSet;
use serde::{Deserialize, Serialize};

/// Holds an optimization problem over the response surfaces
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationProblem {
    /// Surrogate models of the metrics
    pub surfaces: ResponseSurfaceSet,

    /// Box bounds of the design space
    pub bounds: Bounds,

    /// Objective function
    pub objective: Objective,

    /// Inequality constraints (all must hold)
    pub constraints: Vec<UserConstraint>,

    /// Initial guess
    pub x_ini: DesignVars,
}

/// Holds the results of the optimization of a design
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Optimal (or last) design
    pub x: DesignVars,

    /// Objective value at x (the metric itself for single-metric objectives)
    pub objective: f64,

    /// All metrics at x
    pub outputs: Outputs,

    /// Largest constraint violation at x
    pub max_violation: f64,

    /// Convergence status
    pub status: Status,

    /// Number of optimizer iterations
    pub n_iterations: usize,
}

impl DesignResult {
    /// Indicates whether the run converged
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Copies a slice into a design vector
#[inline]
fn point(x: &[f64]) -> [f64; NDIM] {
    let mut p = [0.0; NDIM];
    for (i, v) in x.iter().take(NDIM).enumerate() {
        p[i] = *v;
    }
    p
}

impl OptimizationProblem {
    /// Validates all data
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(message) = self.bounds.validate() {
            return Err(Error::InvalidInput(message));
        }
        if !self.surfaces.is_finite() {
            return Err("the response surface coefficients must be finite".into());
        }
        if !self.x_ini.as_array().iter().all(|v| v.is_finite()) {
            return Err("the initial guess must be finite".into());
        }
        if let Some(c) = self.constraints.iter().find(|c| !c.is_finite()) {
            return Err(Error::InvalidInput(format!("the limit of constraint {:?} must be finite", c)));
        }
        self.objective.validate()
    }

    /// Solves the problem
    ///
    /// Returns an error if the input is inconsistent. A run that does not converge
    /// is returned with [Status::NotConverged].
    pub fn solve(&self, settings: &OptimizerSettings) -> Result<DesignResult, Error> {
        self.validate()?;
        let solver = AugLagSolver::new(*settings)?;
        let res = solver.solve(self, &self.x_ini.as_array())?;
        let x = DesignVars::from_slice(&res.x)?;
        Ok(DesignResult {
            x,
            objective: self.objective.value(&self.surfaces, &x.as_array()),
            outputs: self.surfaces.evaluate(&x),
            max_violation: res.max_violation,
            status: res.status,
            n_iterations: res.n_iterations,
        })
    }
}

impl NonlinearProblem for OptimizationProblem {
    fn lower(&self) -> Vec<f64> {
        self.bounds.lower().to_vec()
    }

    fn upper(&self) -> Vec<f64> {
        self.bounds.upper().to_vec()
    }

    fn objective(&self, x: &[f64]) -> f64 {
        self.objective.minimized_value(&self.surfaces, &point(x))
    }

    fn n_constraint(&self) -> usize {
        self.constraints.len()
    }

    fn constraint(&self, j: usize, x: &[f64]) -> f64 {
        self.constraints[j].value(&self.surfaces, &point(x))
    }
}

/// Solves an optimization problem
pub fn optimize(problem: &OptimizationProblem, settings: &OptimizerSettings) -> Result<DesignResult, Error> {
    problem.solve(settings)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
