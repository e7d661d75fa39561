//! Domain warping
//!
//! A warp is a noise field scaled by an amplitude. It either displaces pixel
//! coordinates before a periodic function is evaluated, or is added straight
//! onto a density map to roughen its threshold boundary.

use crate::math::grid::{column_coordinates, row_coordinates};
use crate::noise::{Field, NoiseGenerator};

/// Additive displacement field
#[derive(Debug, Clone)]
pub struct DomainWarp {
    displacement: Field,
}

impl DomainWarp {
    /// Draw a warp from a fresh noise field multiplied by `amplitude`
    pub fn new(noise: &NoiseGenerator, scale: f64, seed_add: u64, amplitude: f64) -> Self {
        Self::from_field(noise.field(scale, seed_add), amplitude)
    }

    /// Wrap an existing field, multiplied by `amplitude`
    pub fn from_field(field: Field, amplitude: f64) -> Self {
        Self {
            displacement: field * amplitude,
        }
    }

    /// Displacement added at each pixel
    pub const fn displacement(&self) -> &Field {
        &self.displacement
    }

    /// Additive value warp: jitter a density map's boundary
    pub fn apply(&self, map: Field) -> Field {
        map + &self.displacement
    }

    /// Column coordinates displaced by the warp
    pub fn warped_columns(&self) -> Field {
        let (height, width) = self.displacement.dim();
        column_coordinates(height, width) + &self.displacement
    }

    /// Row coordinates displaced by the warp
    pub fn warped_rows(&self) -> Field {
        let (height, width) = self.displacement.dim();
        row_coordinates(height, width) + &self.displacement
    }
}
