use super::{NonlinearProblem, OptimizationResult, OptimizerSettings, Status};
use crate::base::Error;
use russell_lab::{mat_eigen_sym, Matrix, Vector};
use tracing::{debug, warn};

/// Smallest curvature estimate sᵀy accepted by the Barzilai-Borwein step
const BB_MIN_CURVATURE: f64 = 1e-300;

/// Smallest step length tried by the backtracking line search
const MIN_STEP_LENGTH: f64 = 1e-20;

/// Step of the differences of gradients approximating the Hessian (scaled variables)
const HESSIAN_STEP: f64 = 1e-4;

/// Newton steps require every eigenvalue of the reduced Hessian above this fraction of (1 + |λ|max)
const MIN_CURVATURE_RATIO: f64 = 1e-6;

/// Largest distance to a bound at which a variable may be held fixed
const ACTIVE_SET_WIDTH: f64 = 1e-3;

/// Solves bounded, inequality-constrained minimization problems with an augmented Lagrangian method
///
/// The outer loop updates the multipliers of the Powell-Hestenes-Rockafellar augmented Lagrangian
///
/// ```text
/// L(x; λ, ρ) = f(x) + Σⱼ [ ρ/2 max(0, λⱼ/ρ - gⱼ(x))² - λⱼ²/(2ρ) ]
/// λⱼ ← max(0, λⱼ - ρ gⱼ(x))
/// ```
///
/// and the inner loop minimizes L over the box. Variables lying on a bound with the gradient
/// pointing outwards are held fixed; the others take a Newton step when the reduced Hessian is
/// positive definite, or a Barzilai-Borwein gradient step otherwise. Both steps are projected
/// onto the box and accepted with Armijo backtracking. The variables are scaled onto the unit
/// box, the gradients are computed with finite differences and the Hessian with differences of
/// gradients plus the penalty term ρ ∇gⱼ ∇gⱼᵀ of the constraints in the quadratic branch.
///
/// A run converges when, after a multiplier update,
///
/// * the largest violation is below `tol_constraint`,
/// * the complementarity `min(λⱼ, |gⱼ|)` is below `tol_complementarity (1 + |f|)`,
/// * the projected gradient of `f - Σⱼ λⱼ gⱼ` is below `tol_grad (1 + |f|)`.
///
/// Stalled subproblems (tiny decrease and tiny step) never count as converged. After
/// `n_max_outer` updates the last iterate is returned with [Status::NotConverged].
pub struct AugLagSolver {
    settings: OptimizerSettings,
}

/// Holds the data of the augmented Lagrangian in scaled variables u ∈ [0, 1]ⁿ
struct ScaledLagrangian<'a> {
    problem: &'a dyn NonlinearProblem,
    lower: Vec<f64>,
    upper: Vec<f64>,
    span: Vec<f64>,
    lambda: Vec<f64>,
    rho: f64,
    fd_step: f64,
    x: Vec<f64>,
    n_evaluations: usize,
}

impl<'a> ScaledLagrangian<'a> {
    /// Sets x = lower + u · (upper - lower)
    fn set_x(&mut self, u: &[f64]) {
        for i in 0..self.x.len() {
            let v = self.lower[i] + u[i] * self.span[i];
            self.x[i] = f64::min(f64::max(v, self.lower[i]), self.upper[i]);
        }
    }

    /// Evaluates the augmented Lagrangian at u
    fn value(&mut self, u: &[f64]) -> f64 {
        self.set_x(u);
        self.n_evaluations += 1;
        let mut l = self.problem.objective(&self.x);
        for j in 0..self.lambda.len() {
            let g = self.problem.constraint(j, &self.x);
            let t = f64::max(0.0, self.lambda[j] / self.rho - g);
            l += 0.5 * self.rho * t * t - self.lambda[j] * self.lambda[j] / (2.0 * self.rho);
        }
        l
    }

    /// Evaluates the Lagrangian f - Σⱼ μⱼ gⱼ at u
    fn lagrangian(&mut self, u: &[f64], multipliers: &[f64]) -> f64 {
        self.set_x(u);
        self.n_evaluations += 1;
        let mut l = self.problem.objective(&self.x);
        for (j, mu) in multipliers.iter().enumerate() {
            l -= mu * self.problem.constraint(j, &self.x);
        }
        l
    }

    /// Evaluates the j-th constraint at u
    fn constraint(&mut self, j: usize, u: &[f64]) -> f64 {
        self.set_x(u);
        self.n_evaluations += 1;
        self.problem.constraint(j, &self.x)
    }

    /// Computes the gradient of a function of u with finite differences
    ///
    /// Central differences are used inside the box and second-order one-sided differences
    /// next to the bounds, so the function is never evaluated outside [0, 1]ⁿ.
    /// `fu` is the value of the function at u.
    fn gradient<F>(&mut self, u: &[f64], fu: f64, mut func: F) -> Vec<f64>
    where
        F: FnMut(&mut Self, &[f64]) -> f64,
    {
        let h = self.fd_step;
        let mut w = u.to_vec();
        let mut grad = vec![0.0; u.len()];
        for i in 0..u.len() {
            grad[i] = if u[i] - h >= 0.0 && u[i] + h <= 1.0 {
                w[i] = u[i] + h;
                let f_plus = func(self, &w);
                w[i] = u[i] - h;
                let f_minus = func(self, &w);
                (f_plus - f_minus) / (2.0 * h)
            } else {
                let s = if u[i] + h > 1.0 { -h } else { h };
                w[i] = u[i] + s;
                let f_1 = func(self, &w);
                w[i] = u[i] + 2.0 * s;
                let f_2 = func(self, &w);
                (-3.0 * fu + 4.0 * f_1 - f_2) / (2.0 * s)
            };
            w[i] = u[i];
        }
        grad
    }

    /// Approximates the Hessian of the augmented Lagrangian at u
    ///
    /// With μⱼ = max(0, λⱼ - ρ gⱼ), the curvature of f - Σⱼ μⱼ gⱼ comes from differences of
    /// gradients and each constraint with λⱼ - ρ gⱼ ≥ 0 adds ρ ∇gⱼ ∇gⱼᵀ.
    fn hessian(&mut self, u: &[f64]) -> Matrix {
        let n = u.len();
        let ncon = self.lambda.len();
        self.set_x(u);
        let g: Vec<f64> = (0..ncon).map(|j| self.problem.constraint(j, &self.x)).collect();
        let mu: Vec<f64> = (0..ncon)
            .map(|j| f64::max(0.0, self.lambda[j] - self.rho * g[j]))
            .collect();

        // curvature of the Lagrangian
        let l_0 = self.lagrangian(u, &mu);
        let grad_0 = self.gradient(u, l_0, |lag, v| lag.lagrangian(v, &mu));
        let mut hh = Matrix::new(n, n);
        let mut w = u.to_vec();
        for k in 0..n {
            let step = if u[k] + HESSIAN_STEP <= 1.0 {
                HESSIAN_STEP
            } else {
                -HESSIAN_STEP
            };
            w[k] = u[k] + step;
            let l_w = self.lagrangian(&w, &mu);
            let grad_w = self.gradient(&w, l_w, |lag, v| lag.lagrangian(v, &mu));
            w[k] = u[k];
            for i in 0..n {
                hh.set(i, k, (grad_w[i] - grad_0[i]) / step);
            }
        }
        for i in 0..n {
            for k in (i + 1)..n {
                let mean = 0.5 * (hh.get(i, k) + hh.get(k, i));
                hh.set(i, k, mean);
                hh.set(k, i, mean);
            }
        }

        // penalty
        for j in 0..ncon {
            if self.lambda[j] - self.rho * g[j] >= 0.0 {
                let dg = self.gradient(u, g[j], |lag, v| lag.constraint(j, v));
                for a in 0..n {
                    for b in 0..n {
                        hh.add(a, b, self.rho * dg[a] * dg[b]);
                    }
                }
            }
        }
        hh
    }

    /// Returns the projected gradient of f - Σⱼ λⱼ gⱼ at u (with the current multipliers)
    fn stationarity(&mut self, u: &[f64]) -> f64 {
        let lambda = self.lambda.clone();
        let l_0 = self.lagrangian(u, &lambda);
        let grad = self.gradient(u, l_0, |lag, v| lag.lagrangian(v, &lambda));
        projected_gradient(u, &grad)
    }
}

/// Projects onto [0, 1]
#[inline]
fn clamp_unit(v: f64) -> f64 {
    f64::min(f64::max(v, 0.0), 1.0)
}

/// Returns max |P(u - g) - u| where P projects onto the unit box
fn projected_gradient(u: &[f64], g: &[f64]) -> f64 {
    (0..u.len()).fold(0.0, |acc, i| f64::max(acc, f64::abs(clamp_unit(u[i] - g[i]) - u[i])))
}

/// Computes the Newton direction on the free variables
///
/// Returns None if the reduced Hessian is not positive definite.
fn newton_direction(hh: &Matrix, g: &[f64], free: &[usize]) -> Option<Vec<f64>> {
    let m = free.len();
    let mut a = Matrix::new(m, m);
    for (p, &i) in free.iter().enumerate() {
        for (q, &k) in free.iter().enumerate() {
            a.set(p, q, hh.get(i, k));
        }
    }
    let mut l = Vector::new(m);
    mat_eigen_sym(&mut l, &mut a, false).ok()?;
    let l_max = l.as_data().iter().fold(0.0, |acc, v| f64::max(acc, f64::abs(*v)));
    if !l.as_data().iter().all(|v| *v > MIN_CURVATURE_RATIO * (1.0 + l_max)) {
        return None;
    }

    // d = -V Λ⁻¹ Vᵀ g (the eigenvectors are the columns of a)
    let mut d = vec![0.0; m];
    for k in 0..m {
        let vg: f64 = (0..m).map(|p| a.get(p, k) * g[free[p]]).sum();
        for p in 0..m {
            d[p] -= a.get(p, k) * vg / l[k];
        }
    }
    Some(d)
}

/// Computes the Barzilai-Borwein step length from the previous iterate and gradient
fn barzilai_borwein(u: &[f64], g: &[f64], previous: Option<&(Vec<f64>, Vec<f64>)>) -> f64 {
    match previous {
        Some((u_prev, g_prev)) => {
            let mut sy = 0.0;
            let mut ss = 0.0;
            for i in 0..u.len() {
                let du = u[i] - u_prev[i];
                sy += du * (g[i] - g_prev[i]);
                ss += du * du;
            }
            let alpha = if sy > BB_MIN_CURVATURE { ss / sy } else { 1.0 };
            f64::min(f64::max(alpha, 1e-10), 1e10)
        }
        None => 1.0,
    }
}

impl AugLagSolver {
    /// Allocates a new instance
    pub fn new(settings: OptimizerSettings) -> Result<Self, Error> {
        if let Some(message) = settings.validate() {
            return Err(Error::InvalidInput(message));
        }
        Ok(AugLagSolver { settings })
    }

    /// Returns the settings
    pub fn settings(&self) -> &OptimizerSettings {
        &self.settings
    }

    /// Minimizes the problem starting from x_ini
    ///
    /// Returns an error only if the input is inconsistent; non-convergence is reported
    /// through [OptimizationResult::status].
    pub fn solve(&self, problem: &dyn NonlinearProblem, x_ini: &[f64]) -> Result<OptimizationResult, Error> {
        // check input
        let lower = problem.lower();
        let upper = problem.upper();
        let ndim = lower.len();
        if ndim == 0 {
            return Err("the problem must have at least one variable".into());
        }
        if upper.len() != ndim {
            return Err("lower and upper bounds must have the same length".into());
        }
        if x_ini.len() != ndim {
            return Err(Error::InvalidInput(format!(
                "the initial guess must have {} entries; got {}",
                ndim,
                x_ini.len()
            )));
        }
        for i in 0..ndim {
            if !lower[i].is_finite() || !upper[i].is_finite() || upper[i] <= lower[i] {
                return Err(Error::InvalidInput(format!(
                    "bounds of variable {} are incorrect: [{:?}, {:?}]",
                    i, lower[i], upper[i]
                )));
            }
            if !x_ini[i].is_finite() {
                return Err(Error::InvalidInput(format!("initial guess x[{}] is not finite", i)));
            }
        }

        // scaled problem
        let span: Vec<f64> = (0..ndim).map(|i| upper[i] - lower[i]).collect();
        let mut u: Vec<f64> = (0..ndim).map(|i| clamp_unit((x_ini[i] - lower[i]) / span[i])).collect();
        let ncon = problem.n_constraint();
        let mut lag = ScaledLagrangian {
            problem,
            lower,
            upper,
            span,
            lambda: vec![0.0; ncon],
            rho: self.settings.rho_ini,
            fd_step: self.settings.fd_step,
            x: vec![0.0; ndim],
            n_evaluations: 0,
        };

        // outer iterations
        let s = &self.settings;
        let mut status = Status::NotConverged;
        let mut n_iterations = 0;
        let mut n_outer = 0;
        let mut prev_violation = f64::INFINITY;
        for outer in 0..s.n_max_outer {
            n_outer = outer + 1;
            let (l_value, sub_converged, its) = self.minimize_subproblem(&mut lag, &mut u);
            n_iterations += its;

            // multipliers
            lag.set_x(&u);
            let f_value = problem.objective(&lag.x);
            let g: Vec<f64> = (0..ncon).map(|j| problem.constraint(j, &lag.x)).collect();
            let violation = g.iter().fold(0.0, |acc, gj| f64::max(acc, -gj));
            for j in 0..ncon {
                lag.lambda[j] = f64::max(0.0, lag.lambda[j] - lag.rho * g[j]);
            }
            let complementarity = (0..ncon).fold(0.0, |acc, j| f64::max(acc, f64::min(lag.lambda[j], f64::abs(g[j]))));

            // first-order optimality with the updated multipliers
            let stationarity = lag.stationarity(&u);
            debug!(
                outer,
                iterations = its,
                sub_converged,
                lagrangian = l_value,
                violation,
                complementarity,
                stationarity,
                rho = lag.rho,
                "augmented Lagrangian update"
            );
            let scale = 1.0 + f64::abs(f_value);
            if violation <= s.tol_constraint
                && complementarity <= s.tol_complementarity * scale
                && stationarity <= s.tol_grad * scale
            {
                status = Status::Converged;
                break;
            }
            if ncon == 0 {
                break;
            }

            // penalty
            if violation > 0.25 * prev_violation {
                lag.rho = f64::min(lag.rho * s.rho_factor, s.rho_max);
            }
            prev_violation = violation;
        }

        // results
        lag.set_x(&u);
        let x = lag.x.clone();
        let f = problem.objective(&x);
        let max_violation = problem.max_violation(&x);
        if status == Status::NotConverged {
            warn!(n_iterations, n_outer, max_violation, "optimizer did not converge");
        }
        Ok(OptimizationResult {
            x,
            f,
            max_violation,
            status,
            n_iterations,
            n_outer,
            n_evaluations: lag.n_evaluations,
        })
    }

    /// Minimizes the augmented Lagrangian over the unit box (projected Newton or gradient steps)
    ///
    /// Returns (L(u), converged, number of iterations); u is updated in place. The subproblem
    /// converges only when the projected gradient is small; a stalled or capped run returns false.
    fn minimize_subproblem(&self, lag: &mut ScaledLagrangian, u: &mut Vec<f64>) -> (f64, bool, usize) {
        let s = &self.settings;
        let n = u.len();
        let mut trial = vec![0.0; n];
        let mut fu = lag.value(u);
        let mut g = lag.gradient(u, fu, |lag, v| lag.value(v));
        let mut previous: Option<(Vec<f64>, Vec<f64>)> = None;
        for it in 0..s.n_max_iterations {
            let pg = projected_gradient(u, &g);
            if pg <= s.tol_grad * (1.0 + f64::abs(fu)) {
                return (fu, true, it);
            }

            // variables held at the bounds
            let width = f64::min(ACTIVE_SET_WIDTH, pg);
            let binding: Vec<bool> = (0..n)
                .map(|i| (u[i] <= width && g[i] > 0.0) || (u[i] >= 1.0 - width && g[i] < 0.0))
                .collect();
            let free: Vec<usize> = (0..n).filter(|i| !binding[*i]).collect();

            // search direction
            let mut d: Vec<f64> = g.iter().map(|gi| -gi).collect();
            let newton = if free.is_empty() {
                None
            } else {
                newton_direction(&lag.hessian(u), &g, &free)
            };
            let is_newton = newton.is_some();
            let mut alpha = match newton {
                Some(d_free) => {
                    for (p, &i) in free.iter().enumerate() {
                        d[i] = d_free[p];
                    }
                    1.0
                }
                None => barzilai_borwein(u, &g, previous.as_ref()),
            };

            // backtracking along the projection arc
            let f_trial = loop {
                for i in 0..n {
                    trial[i] = clamp_unit(u[i] + alpha * d[i]);
                }
                let f_trial = lag.value(&trial);
                let decrease: f64 = (0..n)
                    .map(|i| {
                        if is_newton && !binding[i] {
                            alpha * g[i] * d[i]
                        } else {
                            g[i] * (trial[i] - u[i])
                        }
                    })
                    .sum();
                if f_trial <= fu + s.armijo * decrease {
                    break f_trial;
                }
                alpha *= 0.5;
                if alpha < MIN_STEP_LENGTH {
                    return (fu, false, it);
                }
            };

            // update
            let df = fu - f_trial;
            let step = (0..n).fold(0.0, |acc, i| f64::max(acc, f64::abs(trial[i] - u[i])));
            previous = Some((u.clone(), g));
            u.copy_from_slice(&trial);
            fu = f_trial;
            g = lag.gradient(u, fu, |lag, v| lag.value(v));
            if df <= s.tol_f * (1.0 + f64::abs(fu)) && step <= s.tol_step {
                debug!(iteration = it, lagrangian = fu, "subproblem stalled");
                return (fu, false, it + 1);
            }
        }
        (fu, false, s.n_max_iterations)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
