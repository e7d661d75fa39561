//! Seeded noise fields and domain warping

/// Smooth noise fields upsampled from a random lattice
pub mod field;
/// Coordinate and value perturbation driven by noise fields
pub mod warp;

use ndarray::Array2;

/// Scalar grid indexed by `(row, col)`
pub type Field = Array2<f64>;

pub use field::NoiseGenerator;
pub use warp::DomainWarp;
