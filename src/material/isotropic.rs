use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds an isotropic linear elastic material
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IsotropicMaterial {
    pub density: f64, // mass density
    pub young: f64,   // Young's modulus
    pub poisson: f64, // Poisson's coefficient
}

impl IsotropicMaterial {
    /// Allocates a new instance
    pub fn new(density: f64, young: f64, poisson: f64) -> Result<Self, StrError> {
        if density <= 0.0 {
            return Err("density must be positive");
        }
        if young <= 0.0 {
            return Err("Young's modulus must be positive");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("Poisson's coefficient must satisfy -1 < ν < 0.5");
        }
        Ok(IsotropicMaterial { density, young, poisson })
    }

    /// Returns the PET balloon used to expand the stent
    pub fn balloon() -> Self {
        IsotropicMaterial {
            density: 1.38e-9,
            young: 2500.0,
            poisson: 0.4,
        }
    }

    /// Returns the shear modulus G = E / (2 (1 + ν))
    pub fn shear_modulus(&self) -> f64 {
        self.young / (2.0 * (1.0 + self.poisson))
    }

    /// Returns the bulk modulus K = E / (3 (1 - 2ν))
    pub fn bulk_modulus(&self) -> f64 {
        self.young / (3.0 * (1.0 - 2.0 * self.poisson))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
