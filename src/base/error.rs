//! Error types for material-model building and design optimization
//!
//! Non-convergence of an optimization run is not an error; it is reported through
//! [crate::optim::Status] so that sweeps over many runs can carry on.

use super::Metric;
use crate::StrError;

/// Errors that can occur when building material models or composing optimization problems
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The aspect ratio is outside the regimes (or outside the range of the empirical fit)
    #[error("aspect ratio ar = {ar:?} is invalid: {reason}")]
    InvalidAspectRatio {
        /// The offending aspect ratio
        ar: f64,
        /// Why the aspect ratio was rejected
        reason: &'static str,
    },

    /// The compliance matrix could not be inverted
    #[error("compliance matrix is singular: {0}")]
    SingularMatrix(String),

    /// The achievable range of a metric has zero (or negative) width
    #[error("range of {metric} is degenerate: min = {min:?}, max = {max:?}")]
    DegenerateRange {
        /// The metric being normalized
        metric: Metric,
        /// Lower end of the range
        min: f64,
        /// Upper end of the range
        max: f64,
    },

    /// A single-objective bound search did not converge, thus ranges are unavailable
    #[error("bound search for {0} did not converge")]
    BoundSearchIncomplete(Metric),

    /// The input data is inconsistent
    #[error("{0}")]
    InvalidInput(String),
}

impl From<StrError> for Error {
    fn from(message: StrError) -> Self {
        Error::InvalidInput(message.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base::Metric;

    #[test]
    fn display_works() {
        let err = Error::InvalidAspectRatio {
            ar: 2.5,
            reason: "ar must satisfy 0 < ar ≤ 2.3",
        };
        assert_eq!(
            format!("{}", err),
            "aspect ratio ar = 2.5 is invalid: ar must satisfy 0 < ar ≤ 2.3"
        );
        let err = Error::DegenerateRange {
            metric: Metric::Rs,
            min: 1.0,
            max: 1.0,
        };
        assert_eq!(format!("{}", err), "range of rs is degenerate: min = 1.0, max = 1.0");
        let err = Error::BoundSearchIncomplete(Metric::Csa);
        assert_eq!(format!("{}", err), "bound search for csa did not converge");
    }

    #[test]
    fn from_str_error_works() {
        let err: Error = "x must have four entries".into();
        assert_eq!(err, Error::InvalidInput("x must have four entries".to_string()));
    }
}
