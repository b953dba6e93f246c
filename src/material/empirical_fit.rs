use serde::{Deserialize, Serialize};

/// Holds a linear fit `y = intercept + slope · x`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearFit {
    /// Allocates a new instance
    pub fn new(intercept: f64, slope: f64) -> Self {
        LinearFit { intercept, slope }
    }

    /// Evaluates the fit
    pub fn value(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Holds the empirical constants relating the aspect ratio to the material properties
///
/// The moduli and yield stresses are linear in the normalized aspect ratio (see
/// [crate::material::Regime::normalized_aspect_ratio]); stresses are in MPa.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalFit {
    pub young_1: LinearFit, // Young's modulus E1 along the grain direction
    pub young_2: LinearFit, // Young's modulus E2 across the grain direction
    pub yield_1: LinearFit, // yield stress ys1 along the grain direction
    pub yield_2: LinearFit, // yield stress ys2 across the grain direction
    pub poisson: f64,       // Poisson's coefficient ν1 = ν2
    pub elongation: f64,    // engineering strain at break eb
    pub density: f64,       // mass density
}

impl EmpiricalFit {
    /// Returns the constants of poly(L-lactic acid)
    pub fn plla() -> Self {
        EmpiricalFit {
            young_1: LinearFit::new(3062.0, -555.0),
            young_2: LinearFit::new(2196.0, 618.0),
            yield_1: LinearFit::new(65.0, -11.0),
            yield_2: LinearFit::new(46.0, 10.0),
            poisson: 0.35,
            elongation: 0.5,
            density: 1.2e-6,
        }
    }

    /// Computes the elastic moduli given the normalized aspect ratio
    pub fn moduli(&self, ar_mod: f64) -> ElasticModuli {
        let e1 = self.young_1.value(ar_mod);
        let e2 = self.young_2.value(ar_mod);
        let v1 = self.poisson;
        let v2 = self.poisson;
        ElasticModuli {
            e1,
            e2,
            g1: e1 / (2.0 * (1.0 + v1)),
            g2: 1.0 / (1.0 / e1 + 1.0 / e2 + 2.0 * v2 / e2),
            v1,
            v2,
        }
    }

    /// Computes the yield stresses given the normalized aspect ratio
    pub fn strength(&self, ar_mod: f64) -> StrengthParams {
        StrengthParams {
            ys1: self.yield_1.value(ar_mod),
            ys2: self.yield_2.value(ar_mod),
        }
    }
}

/// Holds the orthotropic elastic moduli
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElasticModuli {
    pub e1: f64, // Young's modulus along the grain direction
    pub e2: f64, // Young's modulus across the grain direction
    pub g1: f64, // shear modulus E1/(2(1+ν1))
    pub g2: f64, // shear modulus 1/(1/E1 + 1/E2 + 2ν2/E2)
    pub v1: f64, // Poisson's coefficient associated with E1
    pub v2: f64, // Poisson's coefficient associated with E2
}

impl ElasticModuli {
    /// Indicates whether all moduli are positive and finite
    pub fn is_physical(&self) -> bool {
        [self.e1, self.e2, self.g1, self.g2, self.v1, self.v2]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Holds the (engineering) yield stresses
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthParams {
    pub ys1: f64, // yield stress along the grain direction
    pub ys2: f64, // yield stress across the grain direction
}

impl StrengthParams {
    /// Indicates whether both yield stresses are positive and finite
    pub fn is_physical(&self) -> bool {
        self.ys1.is_finite() && self.ys2.is_finite() && self.ys1 > 0.0 && self.ys2 > 0.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{EmpiricalFit, LinearFit};
    use russell_lab::approx_eq;

    #[test]
    fn linear_fit_works() {
        let fit = LinearFit::new(3.0, -2.0);
        assert_eq!(fit.value(0.0), 3.0);
        assert_eq!(fit.value(1.5), 0.0);
    }

    #[test]
    fn moduli_and_strength_work() {
        let fit = EmpiricalFit::plla();
        let ar = 1.13625;
        let m = fit.moduli(ar);
        approx_eq(m.e1, 2431.38125, 1e-10);
        approx_eq(m.e2, 2898.2025, 1e-10);
        approx_eq(m.g1, 2431.38125 / 2.7, 1e-10);
        approx_eq(m.g2, 1.0 / (1.0 / 2431.38125 + 1.0 / 2898.2025 + 0.7 / 2898.2025), 1e-10);
        assert_eq!(m.v1, 0.35);
        assert_eq!(m.v2, 0.35);
        assert!(m.is_physical());
        let s = fit.strength(ar);
        approx_eq(s.ys1, 52.50125, 1e-12);
        approx_eq(s.ys2, 57.3625, 1e-12);
        assert!(s.is_physical());
    }

    #[test]
    fn extrapolation_becomes_non_physical() {
        // ar = 0.1 in the axial regime maps onto ar_mod = 10
        let fit = EmpiricalFit::plla();
        assert!(!fit.moduli(10.0).is_physical());
        assert!(!fit.strength(10.0).is_physical());
    }
}
