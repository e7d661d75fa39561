//! Smooth noise fields built from a low-resolution random lattice
//!
//! A lattice of independent uniform samples is drawn from a seeded generator
//! and resampled to the canvas size with a bicubic (Catmull-Rom) filter. The
//! lattice spacing is the feature scale, so larger scales give larger blobs.

use crate::io::configuration::MIN_NOISE_SCALE;
use crate::noise::Field;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

type Lattice = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Lattice dimensions `(rows, cols)` for a field of `height × width` pixels
///
/// The scale is floored at [`MIN_NOISE_SCALE`] and the cell extent along each
/// axis at one pixel, so the lattice never gets finer than the canvas. The
/// `+ 2` keeps the lattice at least 2×2 for arbitrarily large scales.
pub fn lattice_dimensions(
    height: usize,
    width: usize,
    scale: f64,
    stretch_x: f64,
    stretch_y: f64,
) -> (usize, usize) {
    let scale = scale.max(MIN_NOISE_SCALE);
    let cell_y = (scale * stretch_y).max(1.0);
    let cell_x = (scale * stretch_x).max(1.0);
    let rows = (height as f64 / cell_y).floor() as usize + 2;
    let cols = (width as f64 / cell_x).floor() as usize + 2;
    (rows, cols)
}

/// Draws deterministic noise fields for one synthesis pass
///
/// Every field is seeded with `seed_base + seed_add`, so fields drawn with
/// different `seed_add` values within one pass are decorrelated while the
/// whole pass stays reproducible.
#[derive(Debug, Clone, Copy)]
pub struct NoiseGenerator {
    seed_base: u64,
    height: usize,
    width: usize,
}

impl NoiseGenerator {
    /// Create a generator for fields of `height × width` pixels
    pub const fn new(seed_base: u64, height: usize, width: usize) -> Self {
        Self {
            seed_base,
            height,
            width,
        }
    }

    /// Seed shared by every field of this pass
    pub const fn seed_base(&self) -> u64 {
        self.seed_base
    }

    /// Field shape as `(rows, cols)`
    pub const fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Isotropic noise field in `[0, 1]` with features roughly `scale` pixels wide
    pub fn field(&self, scale: f64, seed_add: u64) -> Field {
        self.stretched(scale, 1.0, 1.0, seed_add)
    }

    /// Noise field whose features are elongated by `stretch_x` and `stretch_y`
    pub fn stretched(&self, scale: f64, stretch_x: f64, stretch_y: f64, seed_add: u64) -> Field {
        if self.height == 0 || self.width == 0 {
            return Array2::zeros((self.height, self.width));
        }

        let (rows, cols) = lattice_dimensions(self.height, self.width, scale, stretch_x, stretch_y);
        let lattice = self.lattice(rows, cols, seed_add);
        let resampled = imageops::resize(
            &lattice,
            self.width as u32,
            self.height as u32,
            FilterType::CatmullRom,
        );

        // Catmull-Rom overshoots near sharp lattice steps
        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            resampled
                .get_pixel_checked(col as u32, row as u32)
                .map_or(0.0, |pixel| f64::from(pixel.0[0]).clamp(0.0, 1.0))
        })
    }

    /// Per-pixel independent uniform samples in `[0, 1)`
    pub fn uniform(&self, seed_add: u64) -> Field {
        let mut rng = StdRng::seed_from_u64(self.seed_base.wrapping_add(seed_add));
        Array2::from_shape_simple_fn((self.height, self.width), || rng.random::<f64>())
    }

    fn lattice(&self, rows: usize, cols: usize, seed_add: u64) -> Lattice {
        let mut rng = StdRng::seed_from_u64(self.seed_base.wrapping_add(seed_add));
        let samples = (0..rows * cols).map(|_| rng.random::<f32>()).collect();
        Lattice::from_vec(cols as u32, rows as u32, samples)
            .unwrap_or_else(|| Lattice::new(cols as u32, rows as u32))
    }
}
