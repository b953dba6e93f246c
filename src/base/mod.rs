//! Implements the base structures shared by the material builder and the design optimizer

mod constants;
mod design_vars;
mod error;
mod metric;
pub use crate::base::constants::*;
pub use crate::base::design_vars::*;
pub use crate::base::error::*;
pub use crate::base::metric::*;
