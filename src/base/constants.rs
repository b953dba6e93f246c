use super::{Bounds, DesignVars, Interval, Outputs};

/// Defines the coefficients of the reference response surfaces
///
/// Each row holds one polynomial term and each column one metric (csa, fs, par, rs).
/// The rows follow the layout of [crate::rsm::ResponseSurface]:
///
/// ```text
/// 1, ar, w, t, l, ar·w, ar·t, ar·l, w·t, w·l, t·l, ar², w², t², l²
/// ```
///
/// The coefficients were fitted to the simulations of a 40-point Latin Hypercube sampling plan.
pub const REFERENCE_COEFFICIENTS: [[f64; 4]; 15] = [
    [-2.614, 4.488e+01, -1.115e+00, -2.525e+01],
    [1.603e+00, -2.661e+00, -4.730e-01, -6.917e+00],
    [-5.571e-02, 6.620e-03, 9.627e-02, -2.497e-01],
    [-2.672e-03, 2.526e-02, 1.530e-03, -4.223e-01],
    [-7.064e-03, -6.753e-02, 3.117e-03, 1.103e-01],
    [-3.755e-03, -6.830e-03, 1.481e-03, -2.035e-03],
    [7.095e-04, 1.041e-03, 3.258e-04, 1.836e-02],
    [-1.061e-03, 1.163e-03, 1.678e-04, -1.595e-03],
    [2.558e-05, 2.606e-05, -1.051e-05, -2.257e-03],
    [-2.318e-05, -1.232e-05, 1.589e-04, 5.626e-04],
    [9.834e-06, -3.570e-05, -4.189e-06, 6.126e-04],
    [-7.453e-02, 4.846e-01, 1.291e-02, 2.517e+00],
    [2.158e-04, 1.780e-04, -1.974e-04, -9.313e-04],
    [-3.600e-05, 5.755e-05, 1.223e-05, -2.253e-04],
    [7.320e-06, 2.790e-05, -1.339e-06, -1.045e-04],
];

/// Returns the baseline design (ar, w, t, l)
pub fn baseline_input() -> DesignVars {
    DesignVars::new(1.35, 150.0, 150.0, 1050.0)
}

/// Returns the metrics recorded from the simulation of the baseline design
pub fn baseline_output() -> Outputs {
    Outputs {
        csa: -8.04,
        fs: 5.72,
        par: 35.32,
        rs: -20.91,
    }
}

/// Returns the initial guess used by the constrained and multi-objective searches
pub fn search_start() -> DesignVars {
    DesignVars::new(0.4, 200.0, 200.0, 900.0)
}

/// Returns the bounds of the design space covered by the sampling plan
pub fn default_bounds() -> Bounds {
    Bounds {
        ar: Interval::new(0.4, 2.3),
        w: Interval::new(100.0, 200.0),
        t: Interval::new(100.0, 200.0),
        l: Interval::new(900.0, 1200.0),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
