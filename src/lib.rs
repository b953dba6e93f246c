//! Stentopt builds orthotropic elastic-plastic material models for polymeric stents and
//! optimizes stent designs over response-surface models of their performance metrics
//!
//! The crate has two independent numerical components:
//!
//! * [material] derives the orthotropic stiffness, plastic hardening and yield-potential
//!   ratios of PLLA from the aspect ratio of its microstructure
//! * [study] (on top of [rsm] and [optim]) evaluates quadratic response surfaces of the
//!   metrics csa, fs, par and rs and runs bounded (constrained) optimizations over the design
//!   space `(ar, w, t, l)`
//!
//! The [metrics] module turns values extracted from simulation results into the scalar metrics
//! that the response surfaces are fitted to.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod metrics;
pub mod optim;
pub mod prelude;
pub mod rsm;
pub mod study;
