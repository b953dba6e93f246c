//! Implements quadratic response-surface models of the design metrics

mod response_surface;
mod surface_set;
pub use crate::rsm::response_surface::*;
pub use crate::rsm::surface_set::*;
