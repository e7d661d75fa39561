//! Pattern parameters and the eight pattern algorithms
//!
//! Every algorithm turns noise fields into an ordered [`PaintPlan`]: a list of
//! per-layer coverage masks painted first to last, so later steps overwrite
//! earlier ones where they overlap.

/// Banded-wave stripes
pub mod banded;
/// Blob family shared by the woodland and puzzle modes
pub mod blob;
/// Nested chips over the blob family
pub mod chip;
/// Dot-masked regions
pub mod dotted;
/// Non-base layers and visibility flags
pub mod layer;
/// Named modes mapped to algorithms
pub mod mode;
/// Pattern parameters, densities and seed offsets
pub mod params;
/// Polygonal triangle-wave interference
pub mod polygonal;
/// Cascaded scratches over blobs
pub mod scratch;
/// Regional fields with stippled edges
pub mod stipple;
/// Directional brush strokes
pub mod stroke;

use crate::compose::plan::PaintPlan;
use crate::noise::NoiseGenerator;
use crate::pattern::layer::Layer;
use crate::pattern::params::PatternParameters;

pub use banded::BandedWave;
pub use blob::{BlobFamily, Turbulence};
pub use chip::NestedChip;
pub use dotted::DotMaskedRegion;
pub use polygonal::PolygonalInterference;
pub use scratch::CascadedScratch;
pub use stipple::RegionalStipple;
pub use stroke::DirectionalStroke;

/// Everything an algorithm may read during one synthesis pass
#[derive(Debug, Clone, Copy)]
pub struct PatternContext {
    noise: NoiseGenerator,
    params: PatternParameters,
}

impl PatternContext {
    /// Bind parameters to a noise generator sized for the canvas
    pub const fn new(noise: NoiseGenerator, params: PatternParameters) -> Self {
        Self { noise, params }
    }

    /// Noise source for this pass
    pub const fn noise(&self) -> &NoiseGenerator {
        &self.noise
    }

    /// Pattern parameters for this pass
    pub const fn params(&self) -> &PatternParameters {
        &self.params
    }

    /// Coverage cutoff of `layer`
    pub fn cutoff(&self, layer: Layer) -> f64 {
        self.params.cutoff(layer)
    }

    /// Canvas shape as `(rows, cols)`
    pub const fn dim(&self) -> (usize, usize) {
        self.noise.dim()
    }
}

/// Turns noise into an ordered list of per-layer coverage masks
pub trait PatternAlgorithm {
    /// Compute the paint plan for one synthesis pass
    fn plan(&self, ctx: &PatternContext) -> PaintPlan;
}

/// The eight pattern algorithms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Triangle-wave cell web with a shifted shadow
    PolygonalInterference,
    /// Warped sine stripes with pinch modulation
    BandedWave,
    /// Three blob layers sharing a turbulence term
    BlobFamily(Turbulence),
    /// Blob family with nested chip overlay
    NestedChip,
    /// Warped regions with fine stipple
    RegionalStipple,
    /// Regions gated by a dot mask
    DotMaskedRegion,
    /// Stretched strokes with bristle texture
    DirectionalStroke,
    /// Blobs refined by repeated scratch multiplication
    CascadedScratch,
}

impl Algorithm {
    /// Check if every layer's mask grows monotonically with its density
    ///
    /// The dot-masked and cascaded-scratch algorithms compose two independent
    /// masks and are excluded.
    pub const fn is_density_monotone(&self) -> bool {
        !matches!(self, Self::DotMaskedRegion | Self::CascadedScratch)
    }
}

impl PatternAlgorithm for Algorithm {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        match *self {
            Self::PolygonalInterference => PolygonalInterference.plan(ctx),
            Self::BandedWave => BandedWave.plan(ctx),
            Self::BlobFamily(turbulence) => BlobFamily { turbulence }.plan(ctx),
            Self::NestedChip => NestedChip.plan(ctx),
            Self::RegionalStipple => RegionalStipple.plan(ctx),
            Self::DotMaskedRegion => DotMaskedRegion.plan(ctx),
            Self::DirectionalStroke => DirectionalStroke.plan(ctx),
            Self::CascadedScratch => CascadedScratch.plan(ctx),
        }
    }
}
