use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the default crimp level (%) at which the radial force is measured
pub const DEFAULT_CRIMP_LEVEL: f64 = 10.0;

/// Holds the data extracted from a crimping simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialStiffnessInput {
    /// Radial reaction force of each crimp tool at each frame `[n_tools][n_frame]`
    pub tool_forces: Vec<Vec<f64>>,

    /// Mean radius of the inner nodes at each frame `[n_frame]`
    pub mean_radii: Vec<f64>,

    /// Mean radius of the inner nodes before crimping
    pub initial_radius: f64,

    /// Outer surface area of the stent
    pub outer_surface_area: f64,

    /// Number of crimp tools sharing the load
    pub n_tools: usize,

    /// Crimp level (%) at which the force is measured
    pub crimp_level: f64,
}

impl RadialStiffnessInput {
    /// Allocates a new instance with the default crimp level
    ///
    /// The number of tools is taken from the number of force series.
    pub fn new(tool_forces: Vec<Vec<f64>>, mean_radii: Vec<f64>, initial_radius: f64, outer_surface_area: f64) -> Self {
        let n_tools = tool_forces.len();
        RadialStiffnessInput {
            tool_forces,
            mean_radii,
            initial_radius,
            outer_surface_area,
            n_tools,
            crimp_level: DEFAULT_CRIMP_LEVEL,
        }
    }

    /// Validates all data
    pub fn validate(&self) -> Result<(), StrError> {
        if self.n_tools == 0 {
            return Err("the number of crimp tools must be at least one");
        }
        if self.tool_forces.len() != self.n_tools {
            return Err("the number of force series must equal the number of crimp tools");
        }
        let n_frame = self.mean_radii.len();
        if n_frame == 0 {
            return Err("at least one frame is required");
        }
        if self.tool_forces.iter().any(|series| series.len() != n_frame) {
            return Err("each force series must have one value per frame");
        }
        if !(self.initial_radius != 0.0 && self.initial_radius.is_finite()) {
            return Err("the initial radius must be finite and non-zero");
        }
        if !(self.outer_surface_area > 0.0) {
            return Err("the outer surface area must be positive");
        }
        if !self.crimp_level.is_finite() {
            return Err("the crimp level must be finite");
        }
        Ok(())
    }

    /// Returns the sum of the absolute radial forces of all tools at each frame
    pub fn summed_forces(&self) -> Vec<f64> {
        let n_frame = self.mean_radii.len();
        (0..n_frame)
            .map(|i| self.tool_forces.iter().map(|series| f64::abs(series[i])).sum())
            .collect()
    }

    /// Returns the crimp |(r - r₀) / r₀| · 100 at each frame
    pub fn crimp_percentages(&self) -> Vec<f64> {
        self.mean_radii
            .iter()
            .map(|r| f64::abs((r - self.initial_radius) / self.initial_radius) * 100.0)
            .collect()
    }
}

/// Interpolates linearly; outside the sampled range the end values are returned
///
/// The abscissae must be non-decreasing.
pub fn interpolate(x: f64, xp: &[f64], fp: &[f64]) -> Result<f64, StrError> {
    let n = xp.len();
    if n == 0 || fp.len() != n {
        return Err("the arrays for interpolation must be non-empty and have the same length");
    }
    if xp.windows(2).any(|w| w[1] < w[0]) {
        return Err("the abscissae for interpolation must be non-decreasing");
    }
    if x <= xp[0] {
        return Ok(fp[0]);
    }
    if x >= xp[n - 1] {
        return Ok(fp[n - 1]);
    }
    for i in 1..n {
        if x < xp[i] {
            let t = (x - xp[i - 1]) / (xp[i] - xp[i - 1]);
            return Ok(fp[i - 1] + t * (fp[i] - fp[i - 1]));
        }
    }
    Ok(fp[n - 1])
}

/// Calculates the radial stiffness as the force per unit area (per tool) at the crimp level
///
/// ```text
/// F  = interpolate(crimp_level, crimp, Σ|forces|)
/// rs = (F / A · 10⁶) / n_tools
/// ```
pub fn radial_stiffness(input: &RadialStiffnessInput) -> Result<f64, StrError> {
    input.validate()?;
    let force = interpolate(input.crimp_level, &input.crimp_percentages(), &input.summed_forces())
        .map_err(|_| "the crimp must be non-decreasing over the frames")?;
    Ok((force / input.outer_surface_area * 1e6) / (input.n_tools as f64))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{interpolate, radial_stiffness, RadialStiffnessInput, DEFAULT_CRIMP_LEVEL};
    use russell_lab::{approx_eq, array_approx_eq};

    fn sample_input() -> RadialStiffnessInput {
        // eight tools; the reactions are negative (compressive)
        let tool_forces = vec![vec![0.0, -1.0, -2.0]; 8];
        RadialStiffnessInput::new(tool_forces, vec![1.0, 0.95, 0.85], 1.0, 2.0)
    }

    #[test]
    fn interpolate_works() {
        let xp = [0.0, 5.0, 15.0];
        let fp = [0.0, 8.0, 16.0];
        assert_eq!(interpolate(-1.0, &xp, &fp), Ok(0.0));
        assert_eq!(interpolate(2.5, &xp, &fp), Ok(4.0));
        assert_eq!(interpolate(10.0, &xp, &fp), Ok(12.0));
        assert_eq!(interpolate(20.0, &xp, &fp), Ok(16.0));
        assert_eq!(interpolate(5.0, &[5.0], &[3.0]), Ok(3.0));
        assert_eq!(
            interpolate(1.0, &[0.0, 2.0, 1.0], &fp),
            Err("the abscissae for interpolation must be non-decreasing")
        );
        assert_eq!(
            interpolate(1.0, &[], &[]),
            Err("the arrays for interpolation must be non-empty and have the same length")
        );
    }

    #[test]
    fn radial_stiffness_works() {
        let input = sample_input();
        assert_eq!(input.n_tools, 8);
        assert_eq!(input.crimp_level, DEFAULT_CRIMP_LEVEL);
        assert_eq!(input.summed_forces(), vec![0.0, 8.0, 16.0]);
        array_approx_eq(&input.crimp_percentages(), &[0.0, 5.0, 15.0], 1e-13);
        approx_eq(radial_stiffness(&input).unwrap(), 750000.0, 1e-6);

        // beyond the last frame the last force is used
        let mut input = sample_input();
        input.crimp_level = 30.0;
        approx_eq(radial_stiffness(&input).unwrap(), 1e6, 1e-6);
    }

    #[test]
    fn radial_stiffness_captures_errors() {
        let mut input = sample_input();
        input.n_tools = 4;
        assert_eq!(
            radial_stiffness(&input).err(),
            Some("the number of force series must equal the number of crimp tools")
        );

        let mut input = sample_input();
        input.tool_forces[3].pop();
        assert_eq!(
            radial_stiffness(&input).err(),
            Some("each force series must have one value per frame")
        );

        let mut input = sample_input();
        input.mean_radii = vec![1.0, 0.85, 0.95];
        assert_eq!(
            radial_stiffness(&input).err(),
            Some("the crimp must be non-decreasing over the frames")
        );

        let mut input = sample_input();
        input.outer_surface_area = 0.0;
        assert_eq!(
            radial_stiffness(&input).err(),
            Some("the outer surface area must be positive")
        );
    }
}
