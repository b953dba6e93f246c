//! Implements the post-processing of simulation results into the design metrics
//!
//! The functions take arrays already extracted from a result database (nodal coordinates,
//! reaction forces, surface areas) and return the scalar metrics.

mod geometry;
mod radial_stiffness;
pub use crate::metrics::geometry::*;
pub use crate::metrics::radial_stiffness::*;
