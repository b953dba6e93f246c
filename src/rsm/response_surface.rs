use crate::base::NDIM;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the number of terms of a quadratic surface with two-way interactions in four variables
pub const NTERM: usize = 15;

/// Holds the index pairs of the two-way interaction terms
const INTERACTIONS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Implements a quadratic response surface with two-way interactions
///
/// With `x = (ar, w, t, l)`, the surface reads:
///
/// ```text
/// y = c₀
///   + c₁ ar + c₂ w + c₃ t + c₄ l
///   + c₅ ar·w + c₆ ar·t + c₇ ar·l + c₈ w·t + c₉ w·l + c₁₀ t·l
///   + c₁₁ ar² + c₁₂ w² + c₁₃ t² + c₁₄ l²
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseSurface {
    pub coefficients: [f64; NTERM],
}

impl ResponseSurface {
    /// Allocates a new instance
    pub fn new(coefficients: [f64; NTERM]) -> Self {
        ResponseSurface { coefficients }
    }

    /// Allocates a new instance from a slice with exactly fifteen entries
    pub fn from_slice(coefficients: &[f64]) -> Result<Self, StrError> {
        if coefficients.len() != NTERM {
            return Err("a response surface requires exactly 15 coefficients");
        }
        let mut c = [0.0; NTERM];
        c.copy_from_slice(coefficients);
        Ok(ResponseSurface { coefficients: c })
    }

    /// Computes the polynomial terms (basis functions) at x
    pub fn terms(x: &[f64; NDIM]) -> [f64; NTERM] {
        let mut t = [0.0; NTERM];
        t[0] = 1.0;
        for i in 0..NDIM {
            t[1 + i] = x[i];
            t[11 + i] = x[i] * x[i];
        }
        for (k, (i, j)) in INTERACTIONS.iter().enumerate() {
            t[5 + k] = x[*i] * x[*j];
        }
        t
    }

    /// Evaluates the surface at x
    pub fn value(&self, x: &[f64; NDIM]) -> f64 {
        let t = ResponseSurface::terms(x);
        self.coefficients.iter().zip(t.iter()).map(|(c, t)| c * t).sum()
    }

    /// Indicates whether all coefficients are finite
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ResponseSurface, NTERM};
    use russell_lab::approx_eq;

    #[test]
    fn terms_follow_the_layout() {
        let t = ResponseSurface::terms(&[2.0, 3.0, 5.0, 7.0]);
        assert_eq!(
            t,
            [1.0, 2.0, 3.0, 5.0, 7.0, 6.0, 10.0, 14.0, 15.0, 21.0, 35.0, 4.0, 9.0, 25.0, 49.0]
        );
    }

    #[test]
    fn value_works() {
        // single terms
        for k in 0..NTERM {
            let mut c = [0.0; NTERM];
            c[k] = 1.0;
            let surface = ResponseSurface::new(c);
            let x = [2.0, 3.0, 5.0, 7.0];
            assert_eq!(surface.value(&x), ResponseSurface::terms(&x)[k]);
        }

        // y = 1 + ar + 0.5 w·l - t²
        let mut c = [0.0; NTERM];
        c[0] = 1.0;
        c[1] = 1.0;
        c[9] = 0.5;
        c[13] = -1.0;
        let surface = ResponseSurface::new(c);
        approx_eq(surface.value(&[1.5, 2.0, 3.0, 4.0]), 1.0 + 1.5 + 4.0 - 9.0, 1e-15);
    }

    #[test]
    fn from_slice_works() {
        let surface = ResponseSurface::from_slice(&[1.0; NTERM]).unwrap();
        assert!(surface.is_finite());
        assert_eq!(surface.value(&[0.0, 0.0, 0.0, 0.0]), 1.0);
        assert_eq!(
            ResponseSurface::from_slice(&[1.0; 3]).err(),
            Some("a response surface requires exactly 15 coefficients")
        );
        let mut c = [0.0; NTERM];
        c[3] = f64::NAN;
        assert!(!ResponseSurface::new(c).is_finite());
    }
}
