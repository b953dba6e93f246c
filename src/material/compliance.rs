use super::{ElasticModuli, Regime};
use crate::base::Error;
use russell_lab::{mat_inverse, Matrix};

/// Defines the size of the compliance and stiffness matrices (Voigt notation)
pub const NVOIGT: usize = 6;

/// Returns the compliance matrix of the circumferential regime
///
/// ```text
/// ┌                                                        ┐
/// │  1/E1  -ν2/E2  -ν1/E1     0     0     0                │
/// │ -ν2/E2   1/E2  -ν2/E2     0     0     0                │
/// │ -ν1/E1 -ν2/E2    1/E1     0     0     0                │
/// │     0      0       0   1/G2     0     0                │
/// │     0      0       0      0  1/G1     0                │
/// │     0      0       0      0     0  1/G2                │
/// └                                                        ┘
/// ```
pub fn compliance_circumferential(m: &ElasticModuli) -> Matrix {
    let (a, b, c) = (1.0 / m.e1, -m.v2 / m.e2, -m.v1 / m.e1);
    Matrix::from(&[
        [a, b, c, 0.0, 0.0, 0.0],
        [b, 1.0 / m.e2, b, 0.0, 0.0, 0.0],
        [c, b, a, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0 / m.g2, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0 / m.g1, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0 / m.g2],
    ])
}

/// Returns the compliance matrix of the axial regime
///
/// ```text
/// ┌                                                        ┐
/// │  1/E1  -ν1/E1  -ν2/E2     0     0     0                │
/// │ -ν1/E1   1/E1  -ν2/E2     0     0     0                │
/// │ -ν2/E2 -ν2/E2    1/E2     0     0     0                │
/// │     0      0       0   1/G2     0     0                │
/// │     0      0       0      0  1/G2     0                │
/// │     0      0       0      0     0  1/G1                │
/// └                                                        ┘
/// ```
pub fn compliance_axial(m: &ElasticModuli) -> Matrix {
    let (a, b, c) = (1.0 / m.e1, -m.v1 / m.e1, -m.v2 / m.e2);
    Matrix::from(&[
        [a, b, c, 0.0, 0.0, 0.0],
        [b, a, c, 0.0, 0.0, 0.0],
        [c, c, 1.0 / m.e2, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0 / m.g2, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0 / m.g2, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 1.0 / m.g1],
    ])
}

impl Regime {
    /// Returns the compliance matrix corresponding to this regime
    pub fn compliance(self, moduli: &ElasticModuli) -> Matrix {
        match self {
            Regime::Circumferential => compliance_circumferential(moduli),
            Regime::Axial => compliance_axial(moduli),
        }
    }
}

/// Inverts a compliance (or stiffness) matrix
///
/// Returns [Error::SingularMatrix] if the determinant vanishes or the inverse is not finite.
pub fn invert_compliance(cc: &Matrix) -> Result<Matrix, Error> {
    let (nrow, ncol) = cc.dims();
    if nrow != ncol {
        return Err(Error::InvalidInput(format!(
            "the compliance matrix must be square; got {}×{}",
            nrow, ncol
        )));
    }
    let mut dd = Matrix::new(nrow, ncol);
    let det = mat_inverse(&mut dd, cc).map_err(|e| Error::SingularMatrix(e.to_string()))?;
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularMatrix(format!("determinant = {:?}", det)));
    }
    for i in 0..nrow {
        for j in 0..ncol {
            if !dd.get(i, j).is_finite() {
                return Err(Error::SingularMatrix("the inverse has non-finite entries".to_string()));
            }
        }
    }
    Ok(dd)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{compliance_axial, compliance_circumferential, invert_compliance, NVOIGT};
    use crate::base::Error;
    use crate::material::{EmpiricalFit, Regime};
    use russell_lab::{approx_eq, mat_approx_eq, Matrix};

    fn check_symmetric(a: &Matrix) {
        for i in 0..NVOIGT {
            for j in 0..NVOIGT {
                assert_eq!(a.get(i, j), a.get(j, i));
            }
        }
    }

    #[test]
    fn templates_are_symmetric() {
        let m = EmpiricalFit::plla().moduli(1.5);
        check_symmetric(&compliance_circumferential(&m));
        check_symmetric(&compliance_axial(&m));
    }

    #[test]
    fn templates_swap_the_principal_axes() {
        let m = EmpiricalFit::plla().moduli(1.5);
        let circ = compliance_circumferential(&m);
        let axial = compliance_axial(&m);
        assert_eq!(circ.get(1, 1), 1.0 / m.e2);
        assert_eq!(axial.get(2, 2), 1.0 / m.e2);
        assert_eq!(circ.get(4, 4), 1.0 / m.g1);
        assert_eq!(axial.get(5, 5), 1.0 / m.g1);
        assert_eq!(circ.get(0, 2), -m.v1 / m.e1);
        assert_eq!(axial.get(0, 1), -m.v1 / m.e1);
        assert_eq!(Regime::Axial.compliance(&m).get(2, 2), axial.get(2, 2));
    }

    #[test]
    fn invert_compliance_works() {
        let m = EmpiricalFit::plla().moduli(1.13625);
        let cc = compliance_circumferential(&m);
        let dd = invert_compliance(&cc).unwrap();
        approx_eq(dd.get(0, 0), 3635.70247312686, 1e-8);
        approx_eq(dd.get(0, 1), 1914.6336293369495, 1e-8);
        approx_eq(dd.get(1, 1), 4238.446040535864, 1e-8);
        approx_eq(dd.get(3, 3), m.g2, 1e-9);
        approx_eq(dd.get(4, 4), m.g1, 1e-9);

        // round trip
        let cc_again = invert_compliance(&dd).unwrap();
        mat_approx_eq(&cc_again, &cc, 1e-12);
    }

    #[test]
    fn invert_compliance_captures_errors() {
        let singular = Matrix::from(&[[1.0, 2.0], [2.0, 4.0]]);
        match invert_compliance(&singular) {
            Err(Error::SingularMatrix(_)) => (),
            other => panic!("expected SingularMatrix; got {:?}", other),
        }
        let rectangular = Matrix::new(2, 3);
        assert_eq!(
            invert_compliance(&rectangular).err(),
            Some(Error::InvalidInput(
                "the compliance matrix must be square; got 2×3".to_string()
            ))
        );
    }
}
