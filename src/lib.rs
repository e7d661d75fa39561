//! Parametric camouflage texture synthesis
//!
//! Seeded noise lattices are upsampled into smooth fields, warped, and fed to
//! one of eight pattern algorithms. Each algorithm produces an ordered list of
//! per-layer coverage masks which are painted over a base colour to form the
//! final raster.

#![forbid(unsafe_code)]

/// Coverage masks, the paint plan and the RGB canvas they are painted onto
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Periodic waves and coordinate grid helpers
pub mod math;
/// Seeded noise fields and domain warping
pub mod noise;
/// Colours, palettes and the per-mode preset table
pub mod palette;
/// Pattern parameters and the eight pattern algorithms
pub mod pattern;
/// Synthesis entry point and the background render worker
pub mod render;

pub use io::error::{CamoError, Result};
pub use pattern::mode::Mode;
pub use render::synthesis::{SynthesisRequest, synthesize};
