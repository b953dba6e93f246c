//! Makes available common structures needed to build materials and run design studies
//!
//! You may write `use stentopt::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Bounds, DesignVars, Error, Interval, Metric, Outputs, Param};
pub use crate::material::{build_material_model, IsotropicMaterial, MaterialModel, Regime};
pub use crate::optim::{OptimizationResult, OptimizerSettings, Status};
pub use crate::rsm::{ResponseSurface, ResponseSurfaceSet};
pub use crate::study::{DesignResult, DesignStudy, MetricRanges, Mode, OptimizationProblem, Sense, StudyConfig};
pub use crate::StrError;
