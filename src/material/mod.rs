//! Implements the orthotropic elastic-plastic material model of PLLA and the balloon material

mod compliance;
mod empirical_fit;
mod isotropic;
mod material_model;
mod regime;
pub use crate::material::compliance::*;
pub use crate::material::empirical_fit::*;
pub use crate::material::isotropic::*;
pub use crate::material::material_model::*;
pub use crate::material::regime::*;
