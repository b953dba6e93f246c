use crate::base::Error;
use serde::{Deserialize, Serialize};

/// Defines the largest aspect ratio covered by the empirical fit
pub const AR_MAX: f64 = 2.3;

/// Defines the orientation regime of the microstructure given by the aspect ratio
///
/// ```text
/// Circumferential:  1 ≤ ar ≤ 2.3
/// Axial:            0 < ar < 1
/// ```
///
/// Any other aspect ratio is invalid and rejected by [Regime::classify].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Grains elongated along the circumferential direction
    Circumferential,

    /// Grains elongated along the axial direction
    Axial,
}

impl Regime {
    /// Classifies the aspect ratio
    pub fn classify(ar: f64) -> Result<Self, Error> {
        if ar >= 1.0 && ar <= AR_MAX {
            Ok(Regime::Circumferential)
        } else if ar > 0.0 && ar < 1.0 {
            Ok(Regime::Axial)
        } else {
            Err(Error::InvalidAspectRatio {
                ar,
                reason: "ar must satisfy 0 < ar ≤ 2.3",
            })
        }
    }

    /// Returns the aspect ratio mapped onto the circumferential range
    ///
    /// Both regimes share the same linear fits once `ar` is replaced by `1/ar` in the axial regime.
    pub fn normalized_aspect_ratio(self, ar: f64) -> f64 {
        match self {
            Regime::Circumferential => ar,
            Regime::Axial => 1.0 / ar,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Regime;
    use crate::base::Error;

    #[test]
    fn classify_works() {
        assert_eq!(Regime::classify(1.0), Ok(Regime::Circumferential));
        assert_eq!(Regime::classify(1.13625), Ok(Regime::Circumferential));
        assert_eq!(Regime::classify(2.3), Ok(Regime::Circumferential));
        assert_eq!(Regime::classify(0.999), Ok(Regime::Axial));
        assert_eq!(Regime::classify(0.4), Ok(Regime::Axial));
        for ar in [0.0, -1.0, 2.30001, 10.0, f64::NAN, f64::INFINITY] {
            match Regime::classify(ar) {
                Err(Error::InvalidAspectRatio { .. }) => (),
                other => panic!("ar = {:?} should be invalid; got {:?}", ar, other),
            }
        }
    }

    #[test]
    fn normalized_aspect_ratio_works() {
        assert_eq!(Regime::Circumferential.normalized_aspect_ratio(1.5), 1.5);
        assert_eq!(Regime::Axial.normalized_aspect_ratio(0.5), 2.0);
    }
}
