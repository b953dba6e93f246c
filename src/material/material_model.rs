use super::{invert_compliance, ElasticModuli, EmpiricalFit, Regime, StrengthParams};
use crate::base::Error;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Holds the nine independent entries of the orthotropic stiffness matrix
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrthotropicStiffness {
    pub d1111: f64,
    pub d1122: f64,
    pub d2222: f64,
    pub d1133: f64,
    pub d2233: f64,
    pub d3333: f64,
    pub d1212: f64,
    pub d1313: f64,
    pub d2323: f64,
}

impl OrthotropicStiffness {
    /// Extracts the independent entries of a 6×6 stiffness matrix
    pub fn from_matrix(dd: &Matrix) -> Self {
        OrthotropicStiffness {
            d1111: dd.get(0, 0),
            d1122: dd.get(0, 1),
            d2222: dd.get(1, 1),
            d1133: dd.get(0, 2),
            d2233: dd.get(1, 2),
            d3333: dd.get(2, 2),
            d1212: dd.get(3, 3),
            d1313: dd.get(4, 4),
            d2323: dd.get(5, 5),
        }
    }

    /// Returns the entries in the order expected by orthotropic material definitions
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.d1111, self.d1122, self.d2222, self.d1133, self.d2233, self.d3333, self.d1212, self.d1313, self.d2323,
        ]
    }
}

/// Holds a point of the plastic hardening curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HardeningPoint {
    pub stress: f64,         // true stress
    pub plastic_strain: f64, // true plastic strain
}

/// Holds the yield-potential (stress) ratios of Hill's anisotropic yield function
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PotentialRatios {
    pub r11: f64,
    pub r22: f64,
    pub r33: f64,
    pub r12: f64,
    pub r13: f64,
    pub r23: f64,
}

impl PotentialRatios {
    /// Computes the ratios; the cross-grain direction carries ys2/ys1
    pub fn new(regime: Regime, strength: &StrengthParams) -> Self {
        let ratio = strength.ys2 / strength.ys1;
        let (r22, r33) = match regime {
            Regime::Circumferential => (ratio, 1.0),
            Regime::Axial => (1.0, ratio),
        };
        PotentialRatios {
            r11: 1.0,
            r22,
            r33,
            r12: 1.0,
            r13: 1.0,
            r23: 1.0,
        }
    }

    /// Returns the ratios as (R11, R22, R33, R12, R13, R23)
    pub fn as_array(&self) -> [f64; 6] {
        [self.r11, self.r22, self.r33, self.r12, self.r13, self.r23]
    }
}

/// Holds the orthotropic elastic-plastic material model
///
/// This is the payload of the material definition of the finite element model:
/// density, orthotropic elasticity, isotropic hardening and Hill's potential ratios.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialModel {
    /// Aspect ratio used to build the model
    pub ar: f64,

    /// Orientation regime
    pub regime: Regime,

    /// Mass density
    pub density: f64,

    /// Elastic moduli
    pub moduli: ElasticModuli,

    /// Engineering yield stresses
    pub strength: StrengthParams,

    /// Independent entries of the stiffness matrix
    pub stiffness: OrthotropicStiffness,

    /// Plastic hardening curve as (true stress, true plastic strain) pairs
    pub hardening: Vec<HardeningPoint>,

    /// Yield-potential ratios
    pub potential: PotentialRatios,
}

impl MaterialModel {
    /// Builds the PLLA model for a given aspect ratio
    pub fn new(ar: f64) -> Result<Self, Error> {
        MaterialModel::with_fit(ar, &EmpiricalFit::plla())
    }

    /// Builds the model for a given aspect ratio and set of empirical constants
    ///
    /// # Errors
    ///
    /// * [Error::InvalidAspectRatio] if `ar` does not fall in a regime or if the fit yields
    ///   non-positive moduli or yield stresses
    /// * [Error::SingularMatrix] if the compliance matrix cannot be inverted
    pub fn with_fit(ar: f64, fit: &EmpiricalFit) -> Result<Self, Error> {
        // regime
        let regime = Regime::classify(ar)?;
        let ar_mod = regime.normalized_aspect_ratio(ar);

        // elastic and strength parameters
        let moduli = fit.moduli(ar_mod);
        if !moduli.is_physical() {
            return Err(Error::InvalidAspectRatio {
                ar,
                reason: "the empirical fit yields non-positive elastic moduli",
            });
        }
        let strength = fit.strength(ar_mod);
        if !strength.is_physical() {
            return Err(Error::InvalidAspectRatio {
                ar,
                reason: "the empirical fit yields non-positive yield stresses",
            });
        }

        // stiffness
        let cc = regime.compliance(&moduli);
        let dd = invert_compliance(&cc)?;
        let stiffness = OrthotropicStiffness::from_matrix(&dd);

        // hardening
        let hardening = hardening_curve(strength.ys1, fit.elongation, moduli.e1);

        debug!(ar, ?regime, e1 = moduli.e1, e2 = moduli.e2, ys1 = strength.ys1, "material model built");
        Ok(MaterialModel {
            ar,
            regime,
            density: fit.density,
            moduli,
            strength,
            stiffness,
            hardening,
            potential: PotentialRatios::new(regime, &strength),
        })
    }

    /// Returns the compliance matrix
    pub fn compliance(&self) -> Matrix {
        self.regime.compliance(&self.moduli)
    }

    /// Returns the full 6×6 stiffness matrix
    pub fn stiffness_matrix(&self) -> Result<Matrix, Error> {
        invert_compliance(&self.compliance())
    }

    /// Returns the hardening curve as rows of (true stress, true plastic strain)
    pub fn plastic_table(&self) -> Vec<[f64; 2]> {
        self.hardening.iter().map(|p| [p.stress, p.plastic_strain]).collect()
    }
}

/// Builds the two-point hardening curve from engineering values
///
/// ```text
/// εt = ln(1 + eb)
/// σu = ys1 (1 + εt)
/// curve = [(ys1, 0), (σu, eb - σu/E1)]
/// ```
pub fn hardening_curve(ys1: f64, eb: f64, e1: f64) -> Vec<HardeningPoint> {
    let eb_true = f64::ln(1.0 + eb);
    let uts_true = ys1 * (1.0 + eb_true);
    vec![
        HardeningPoint {
            stress: ys1,
            plastic_strain: 0.0,
        },
        HardeningPoint {
            stress: uts_true,
            plastic_strain: eb - uts_true / e1,
        },
    ]
}

/// Builds the PLLA material model for a given aspect ratio
pub fn build_material_model(ar: f64) -> Result<MaterialModel, Error> {
    MaterialModel::new(ar)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
