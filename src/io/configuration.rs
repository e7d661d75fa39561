//! Constants and runtime configuration defaults

// Canvas defaults
/// Default raster width in pixels
pub const DEFAULT_WIDTH: u32 = 900;
/// Default raster height in pixels
pub const DEFAULT_HEIGHT: u32 = 700;

/// Edge length of a pixelation block
pub const PIXEL_BLOCK_SIZE: u32 = 8;

// Noise lattices never get finer than this many pixels per cell
/// Floor applied to every noise scale
pub const MIN_NOISE_SCALE: f64 = 1.0;

// Parameter ranges exposed to the control surface
/// Allowed feature scale
pub const SCALE_RANGE: (f64, f64) = (5.0, 1000.0);
/// Allowed distortion
pub const DISTORTION_RANGE: (f64, f64) = (0.0, 200.0);
/// Allowed first feature control
pub const FEAT_A_RANGE: (f64, f64) = (0.0, 30.0);
/// Allowed second feature control
pub const FEAT_B_RANGE: (f64, f64) = (0.0, 50.0);
/// Lowest layer density
pub const DENSITY_MIN: u8 = 1;
/// Highest layer density
pub const DENSITY_MAX: u8 = 9;

// Palette randomization
/// Seed for palette shuffling and random colours when none is given
pub const DEFAULT_PALETTE_SEED: u64 = 42;

// Output settings
/// Output path for a single render
pub const DEFAULT_OUTPUT: &str = "camo.png";
/// Extension of every exported raster
pub const OUTPUT_EXTENSION: &str = "png";

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Filter used with `--quiet` when `RUST_LOG` is unset
pub const QUIET_LOG_FILTER: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
