//! Dot-masked regions
//!
//! Coarse region fields decide where each colour may appear; a separate
//! fine dot field decides which of those pixels actually paint.

use crate::compose::plan::PaintPlan;
use crate::compose::threshold::{intersect, threshold};
use crate::noise::DomainWarp;
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};

/// Smallest dot feature size
pub const MIN_DOT_SCALE: f64 = 2.0;

const REGION_SEEDS: [u64; 3] = [500, 600, 700];
const MIX_SEED: u64 = 800;
const DOT_SEED: u64 = 900;

/// Speckled transitions between soft regions, painted 1, 2, 3
///
/// `feat_a` sets how many dots survive; `feat_b` sets the dot size.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotMaskedRegion;

/// Dot field cutoff, lower for larger `feat_a`
pub fn dot_cutoff(feat_a: f64) -> f64 {
    1.0 - feat_a / 18.0
}

impl PatternAlgorithm for DotMaskedRegion {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let params = ctx.params();
        let noise = ctx.noise();

        let mix = DomainWarp::new(noise, params.scale, MIX_SEED, params.distortion / 100.0);
        let dots = noise.field(params.feat_b.max(MIN_DOT_SCALE), DOT_SEED);
        let dot_mask = threshold(&dots, dot_cutoff(params.feat_a));

        let mut plan = PaintPlan::new();
        for (layer, seed) in Layer::ALL.into_iter().zip(REGION_SEEDS) {
            let region = mix.apply(noise.field(params.scale * 2.5, seed));
            let region_mask = threshold(&region, ctx.cutoff(layer));
            plan.push(layer, intersect(&region_mask, &dot_mask));
        }
        plan
    }
}
