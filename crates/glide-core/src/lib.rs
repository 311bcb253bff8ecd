//! Glide Core - Foundational types for the Glide flythrough animator
//!
//! This crate provides the pieces every other Glide crate depends on:
//! - `CatmullRomCurve` - Open Catmull-Rom path evaluation with parameter clamping
//! - Error types and Result alias

mod error;
pub mod spline;

pub use error::{GlideError, Result};
pub use spline::{CatmullRomCurve, CurveType};
