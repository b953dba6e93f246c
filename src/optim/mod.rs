//! Implements a bounded and inequality-constrained local minimizer

mod aug_lag_solver;
mod nonlinear_problem;
mod optimization_result;
mod optimizer_settings;
pub use crate::optim::aug_lag_solver::*;
pub use crate::optim::nonlinear_problem::*;
pub use crate::optim::optimization_result::*;
pub use crate::optim::optimizer_settings::*;
