#![forbid(unsafe_code)]
//! cad_prelude: deterministic randomness and drawing helpers for parametric CAD scripts.
//!
//! Modules:
//! - rng: seeded generator with uniform, integer, choice, Gaussian, and Poisson draws
//! - sampling: blue-noise point generation (Poisson disc / Bridson)
//! - vector: n-dimensional arithmetic over plain `f64` slices
//! - shape: thin wrappers over the host kernel's shape operations
//!
//! Everything that draws randomness does so through one [`rng::SeededRng`]
//! instance, so a script seeded with a fixed value rebuilds the same model
//! every run.
pub mod error;
pub mod rng;
pub mod sampling;
pub mod shape;
pub mod vector;

/// Convenient re-exports for common types. Import with `use cad_prelude::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::rng::SeededRng;
    pub use crate::sampling::{PointSampling, PoissonDiscSampling};
    pub use crate::shape::{fuse_all, polar_array, polygon_through, ShapeOps};
}
