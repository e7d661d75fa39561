//! Mathematical utilities for the pattern algorithms

/// Coordinate grids and toroidal shifts over 2D arrays
pub mod grid;
/// Periodic wave shapes used by the interference and banding patterns
pub mod waves;
