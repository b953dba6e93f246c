use serde::{Deserialize, Serialize};

/// Defines the smallest allowed tolerance (OptimizerSettings)
pub const OPTIMIZER_MIN_TOL: f64 = 1e-15;

/// Holds the options to control the optimizer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Maximum number of (projected Newton or gradient) iterations per subproblem
    pub n_max_iterations: usize,

    /// Maximum number of multiplier updates
    pub n_max_outer: usize,

    /// Tolerance on the projected gradient (relative to 1 + |f|)
    pub tol_grad: f64,

    /// Tolerance on the decrease of the objective (relative to 1 + |f|) below which a subproblem stalls
    pub tol_f: f64,

    /// Tolerance on the step of the scaled variables below which a subproblem stalls
    pub tol_step: f64,

    /// Tolerance on the constraint violation
    pub tol_constraint: f64,

    /// Tolerance on the complementarity min(λ, |g|) (relative to 1 + |f|)
    pub tol_complementarity: f64,

    /// Step of the central finite differences in scaled variables
    pub fd_step: f64,

    /// Initial penalty parameter
    pub rho_ini: f64,

    /// Factor to increase the penalty when the violation does not decrease enough
    pub rho_factor: f64,

    /// Maximum penalty parameter
    pub rho_max: f64,

    /// Coefficient of the Armijo sufficient-decrease condition
    pub armijo: f64,
}

impl OptimizerSettings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        OptimizerSettings {
            n_max_iterations: 1000,
            n_max_outer: 50,
            tol_grad: 1e-6,
            tol_f: 1e-10,
            tol_step: 1e-9,
            tol_constraint: 1e-6,
            tol_complementarity: 1e-6,
            fd_step: 1e-7,
            rho_ini: 10.0,
            rho_factor: 10.0,
            rho_max: 1e10,
            armijo: 1e-4,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.n_max_outer < 1 {
            return Some(format!("n_max_outer = {} is incorrect; it must be ≥ 1", self.n_max_outer));
        }
        let tolerances = [
            ("tol_grad", self.tol_grad),
            ("tol_f", self.tol_f),
            ("tol_step", self.tol_step),
            ("tol_constraint", self.tol_constraint),
            ("tol_complementarity", self.tol_complementarity),
        ];
        for (name, value) in tolerances {
            if !(value >= OPTIMIZER_MIN_TOL) {
                return Some(format!(
                    "{} = {:?} is incorrect; it must be ≥ {:e}",
                    name, value, OPTIMIZER_MIN_TOL
                ));
            }
        }
        if !(self.fd_step > 0.0 && self.fd_step < 0.1) {
            return Some(format!(
                "fd_step = {:?} is incorrect; it must be 0 < h < 0.1",
                self.fd_step
            ));
        }
        if !(self.rho_ini > 0.0) {
            return Some(format!("rho_ini = {:?} is incorrect; it must be > 0.0", self.rho_ini));
        }
        if !(self.rho_factor > 1.0) {
            return Some(format!(
                "rho_factor = {:?} is incorrect; it must be > 1.0",
                self.rho_factor
            ));
        }
        if !(self.rho_max >= self.rho_ini) {
            return Some(format!(
                "rho_max = {:?} is incorrect; it must be ≥ rho_ini = {:?}",
                self.rho_max, self.rho_ini
            ));
        }
        if !(self.armijo > 0.0 && self.armijo < 0.5) {
            return Some(format!(
                "armijo = {:?} is incorrect; it must be 0 < c < 0.5",
                self.armijo
            ));
        }
        None // all good
    }
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        OptimizerSettings::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
