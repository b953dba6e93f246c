//! Implements the optimization modes and the design-study pipeline over response surfaces

mod design_study;
mod metric_range;
mod mode;
mod objective;
mod optimization_problem;
mod study_config;
mod user_constraint;
pub use crate::study::design_study::*;
pub use crate::study::metric_range::*;
pub use crate::study::mode::*;
pub use crate::study::objective::*;
pub use crate::study::optimization_problem::*;
pub use crate::study::study_config::*;
pub use crate::study::user_constraint::*;
