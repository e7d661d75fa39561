//! Blob family
//!
//! Three independent blob fields share one low-frequency turbulence term, so
//! their edges wobble together without the layers being identical.

use crate::compose::plan::PaintPlan;
use crate::noise::Field;
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};

const LAYER_SEEDS: [u64; 3] = [100, 200, 300];
const TURBULENCE_SEED: u64 = 400;

/// Source of the turbulence amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turbulence {
    /// Roughness taken from `feat_b`
    FromFeatB,
    /// Fixed roughness, ignoring `feat_b`
    Fixed(f64),
}

impl Turbulence {
    /// Roughness for the given `feat_b`; the added term is `roughness / 10`
    pub const fn roughness(self, feat_b: f64) -> f64 {
        match self {
            Self::FromFeatB => feat_b,
            Self::Fixed(value) => value,
        }
    }
}

/// Three correlated blob layers, painted 1, 2, 3
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobFamily {
    /// Where the turbulence amplitude comes from
    pub turbulence: Turbulence,
}

impl BlobFamily {
    /// Per-layer density maps, blob size from `feat_a`
    pub fn density_maps(&self, ctx: &PatternContext) -> [Field; 3] {
        let params = ctx.params();
        let noise = ctx.noise();

        let blob_scale = params.scale * (params.feat_a / 2.0);
        let roughness = self.turbulence.roughness(params.feat_b);
        let turbulence = noise.field(params.scale / 2.0, TURBULENCE_SEED) * (roughness / 10.0);

        LAYER_SEEDS.map(|seed| noise.field(blob_scale, seed) + &turbulence)
    }
}

impl PatternAlgorithm for BlobFamily {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let mut plan = PaintPlan::new();
        for (layer, map) in Layer::ALL.into_iter().zip(self.density_maps(ctx)) {
            plan.push_threshold(layer, &map, ctx.cutoff(layer));
        }
        plan
    }
}
