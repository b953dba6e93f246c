use russell_lab::approx_eq;
use stentopt::metrics::{coverage_ratio, cross_sectional_area, foreshortening, radial_stiffness};
use stentopt::metrics::{RadialStiffnessInput, DEFAULT_CRIMP_LEVEL};
use stentopt::StrError;
use std::f64::consts::PI;

#[test]
fn test_metrics_expanded_ring() -> Result<(), StrError> {
    // nodes on a ring of radius 1.4 (slightly perturbed)
    let n = 24;
    let radii: Vec<_> = (0..n).map(|i| 1.4 + if i % 2 == 0 { 0.01 } else { -0.01 }).collect();
    let csa = cross_sectional_area(&radii)?;
    approx_eq(csa, PI * 1.4 * 1.4, 1e-12);

    // a 5 mm stent shortening to 4.6 mm
    let left0 = vec![5.0; n];
    let right0 = vec![0.0; n];
    let left1 = vec![4.8; n];
    let right1 = vec![0.2; n];
    let fs = foreshortening(&left0, &right0, &left1, &right1)?;
    approx_eq(fs.final_length, 4.6, 1e-12);
    approx_eq(fs.percent, 8.0, 1e-10);

    // struts covering 20 % of the artery wall
    let outer_radius = 0.9;
    let length = 5.0;
    let area = 0.2 * 2.0 * PI * outer_radius * length;
    approx_eq(coverage_ratio(area, outer_radius, length)?, 20.0, 1e-12);
    Ok(())
}

#[test]
fn test_metrics_crimping() -> Result<(), StrError> {
    // eight crimp tools; the force grows linearly with the crimp
    let n_frame = 11;
    let r0 = 1.5;
    let mean_radii: Vec<_> = (0..n_frame).map(|i| r0 * (1.0 - 0.02 * (i as f64))).collect();
    let tool_forces: Vec<Vec<f64>> = (0..8)
        .map(|_| (0..n_frame).map(|i| -0.5 * (i as f64)).collect())
        .collect();
    let input = RadialStiffnessInput::new(tool_forces, mean_radii, r0, 4.0);
    assert_eq!(input.crimp_level, DEFAULT_CRIMP_LEVEL);

    // 10 % crimp happens at frame 5, where the summed force is 8 · 2.5 = 20
    let rs = radial_stiffness(&input)?;
    approx_eq(rs, (20.0 / 4.0 * 1e6) / 8.0, 1e-6);

    // with four tools declared, the input is inconsistent
    let mut wrong = input.clone();
    wrong.n_tools = 4;
    assert_eq!(
        radial_stiffness(&wrong).err(),
        Some("the number of force series must equal the number of crimp tools")
    );
    Ok(())
}
