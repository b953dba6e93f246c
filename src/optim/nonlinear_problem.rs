/// Defines a nonlinear minimization problem with box bounds and inequality constraints
///
/// ```text
/// minimize    f(x)
/// subject to  lower ≤ x ≤ upper
///             gⱼ(x) ≥ 0,  j = 0..n_constraint
/// ```
pub trait NonlinearProblem {
    /// Returns the lower bounds of the variables
    fn lower(&self) -> Vec<f64>;

    /// Returns the upper bounds of the variables
    fn upper(&self) -> Vec<f64>;

    /// Evaluates the objective function
    fn objective(&self, x: &[f64]) -> f64;

    /// Returns the number of inequality constraints
    fn n_constraint(&self) -> usize {
        0
    }

    /// Evaluates the j-th inequality constraint; feasible points give gⱼ(x) ≥ 0
    fn constraint(&self, _j: usize, _x: &[f64]) -> f64 {
        0.0
    }

    /// Returns the largest constraint violation max(0, -gⱼ(x))
    fn max_violation(&self, x: &[f64]) -> f64 {
        (0..self.n_constraint()).fold(0.0, |acc, j| f64::max(acc, -self.constraint(j, x)))
    }
}
