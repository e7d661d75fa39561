//! Numeric pattern parameters, densities and seeds

use crate::io::configuration::{
    DENSITY_MAX, DENSITY_MIN, DISTORTION_RANGE, FEAT_A_RANGE, FEAT_B_RANGE, SCALE_RANGE,
};
use crate::pattern::layer::Layer;

/// Layer density on the 1–9 scale
///
/// Higher density means a lower cutoff and therefore more coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Density(u8);

impl Density {
    /// Create a density, clamping into `1..=9`
    pub const fn new(value: u8) -> Self {
        if value < DENSITY_MIN {
            Self(DENSITY_MIN)
        } else if value > DENSITY_MAX {
            Self(DENSITY_MAX)
        } else {
            Self(value)
        }
    }

    /// Raw density value
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Coverage cutoff `1 - density / 10`, strictly decreasing in density
    pub fn cutoff(self) -> f64 {
        1.0 - f64::from(self.0) / 10.0
    }
}

/// Re-seed counter bumped by each "regenerate" action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeedOffset(pub u64);

impl SeedOffset {
    /// Offset after one more regenerate action
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Continuous pattern controls plus one density per layer
///
/// `feat_a` and `feat_b` are interpreted per algorithm (stretch, fade, blob
/// size, roughness, dot size, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParameters {
    /// Feature size in pixels, `5..=1000`
    pub scale: f64,
    /// Warp amplitude, `0..=200`
    pub distortion: f64,
    /// First algorithm-specific feature control, `0..=30`
    pub feat_a: f64,
    /// Second algorithm-specific feature control, `0..=50`
    pub feat_b: f64,
    /// Density of layers 1 to 3
    pub densities: [Density; 3],
}

impl PatternParameters {
    /// Create parameters, taking densities as raw values
    pub const fn new(
        scale: f64,
        distortion: f64,
        feat_a: f64,
        feat_b: f64,
        densities: [u8; 3],
    ) -> Self {
        Self {
            scale,
            distortion,
            feat_a,
            feat_b,
            densities: [
                Density::new(densities[0]),
                Density::new(densities[1]),
                Density::new(densities[2]),
            ],
        }
    }

    /// Copy with every control clamped into its documented range
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |value: f64, (min, max): (f64, f64)| {
            if value.is_nan() { min } else { value.clamp(min, max) }
        };
        Self {
            scale: clamp(self.scale, SCALE_RANGE),
            distortion: clamp(self.distortion, DISTORTION_RANGE),
            feat_a: clamp(self.feat_a, FEAT_A_RANGE),
            feat_b: clamp(self.feat_b, FEAT_B_RANGE),
            densities: self.densities,
        }
    }

    /// Density of `layer`
    pub fn density(&self, layer: Layer) -> Density {
        self.densities
            .get(layer.index())
            .copied()
            .unwrap_or(Density(DENSITY_MIN))
    }

    /// Replace the density of `layer`
    pub fn set_density(&mut self, layer: Layer, density: Density) {
        if let Some(slot) = self.densities.get_mut(layer.index()) {
            *slot = density;
        }
    }

    /// Coverage cutoff of `layer`
    pub fn cutoff(&self, layer: Layer) -> f64 {
        self.density(layer).cutoff()
    }

    /// Seed shared by every noise field of one synthesis pass
    ///
    /// The integer part of the scale is folded in so that scale changes also
    /// reshuffle the pattern.
    pub fn seed_base(&self, offset: SeedOffset) -> u64 {
        (self.scale.max(0.0).floor() as u64).wrapping_add(offset.0)
    }
}
