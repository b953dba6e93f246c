use crate::StrError;
use std::f64::consts::PI;

/// Holds the results of the foreshortening calculation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Foreshortening {
    /// Length of the stent before expansion
    pub initial_length: f64,

    /// Length of the stent after expansion (and recoil)
    pub final_length: f64,

    /// Relative change of length (%)
    pub percent: f64,
}

/// Returns the mean of the values
fn mean(values: &[f64]) -> Result<f64, StrError> {
    if values.is_empty() {
        return Err("cannot compute the mean of an empty set of values");
    }
    Ok(values.iter().sum::<f64>() / (values.len() as f64))
}

/// Calculates the foreshortening from the axial coordinates of the end nodes
///
/// ```text
/// L₀ = mean(initial_left) - mean(initial_right)
/// L₁ = mean(final_left) - mean(final_right)
/// fs = |(L₁ - L₀) / L₀| · 100
/// ```
///
/// # Input
///
/// * `initial_left`, `initial_right` -- axial coordinates of the nodes at each end before expansion
/// * `final_left`, `final_right` -- axial coordinates of the same nodes after expansion
pub fn foreshortening(
    initial_left: &[f64],
    initial_right: &[f64],
    final_left: &[f64],
    final_right: &[f64],
) -> Result<Foreshortening, StrError> {
    let initial_length = mean(initial_left)? - mean(initial_right)?;
    let final_length = mean(final_left)? - mean(final_right)?;
    if initial_length == 0.0 {
        return Err("the initial length must not be zero");
    }
    Ok(Foreshortening {
        initial_length,
        final_length,
        percent: f64::abs((final_length - initial_length) / initial_length) * 100.0,
    })
}

/// Calculates the lumen cross-sectional area π r̄² from the radii of the inner nodes
pub fn cross_sectional_area(inner_radii: &[f64]) -> Result<f64, StrError> {
    let r = mean(inner_radii)?;
    Ok(f64::abs(PI * r * r))
}

/// Calculates the percentage of the artery wall covered by the stent
///
/// ```text
/// par = A / (2π r L) · 100
/// ```
///
/// where `A` is the outer surface area of the stent, `r` the outer radius and `L` the length.
pub fn coverage_ratio(outer_surface_area: f64, outer_radius: f64, length: f64) -> Result<f64, StrError> {
    if !(outer_radius > 0.0) {
        return Err("the outer radius must be positive");
    }
    if !(length > 0.0) {
        return Err("the length must be positive");
    }
    Ok(outer_surface_area / (2.0 * PI * outer_radius * length) * 100.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{coverage_ratio, cross_sectional_area, foreshortening};
    use russell_lab::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn foreshortening_works() {
        let res = foreshortening(&[5.0, 5.2, 4.8], &[0.0, 0.1, -0.1], &[4.8, 4.7], &[0.2, 0.3]).unwrap();
        approx_eq(res.initial_length, 5.0, 1e-15);
        approx_eq(res.final_length, 4.5, 1e-15);
        approx_eq(res.percent, 10.0, 1e-13);

        // elongation gives a positive value as well
        let res = foreshortening(&[2.0], &[0.0], &[2.5], &[0.0]).unwrap();
        assert_eq!(res.percent, 25.0);
    }

    #[test]
    fn foreshortening_captures_errors() {
        assert_eq!(
            foreshortening(&[], &[0.0], &[1.0], &[0.0]).err(),
            Some("cannot compute the mean of an empty set of values")
        );
        assert_eq!(
            foreshortening(&[1.0], &[1.0], &[1.0], &[0.0]).err(),
            Some("the initial length must not be zero")
        );
    }

    #[test]
    fn cross_sectional_area_works() {
        approx_eq(cross_sectional_area(&[1.5, 1.7, 1.6]).unwrap(), PI * 1.6 * 1.6, 1e-13);
        assert_eq!(
            cross_sectional_area(&[]).err(),
            Some("cannot compute the mean of an empty set of values")
        );
    }

    #[test]
    fn coverage_ratio_works() {
        let area = 2.0 * PI * 0.9 * 5.0 * 0.25;
        approx_eq(coverage_ratio(area, 0.9, 5.0).unwrap(), 25.0, 1e-13);
        assert_eq!(coverage_ratio(1.0, 0.0, 5.0).err(), Some("the outer radius must be positive"));
        assert_eq!(coverage_ratio(1.0, 0.9, -5.0).err(), Some("the length must be positive"));
    }
}
