//! Regional fields with stippled edges

use crate::compose::plan::PaintPlan;
use crate::noise::DomainWarp;
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};

/// Warp amplitude per unit of distortion
pub const WARP_WEIGHT: f64 = 0.01;
/// Fixed feature size of the stipple texture
pub const STIPPLE_SCALE: f64 = 3.0;

const WARP_SEED: u64 = 50;
const STIPPLE_SEED: u64 = 777;
const LAYER_SEEDS: [u64; 3] = [100, 200, 300];

/// Large soft regions whose edges are roughened by fine stipple
///
/// All three layers receive the same weak warp and the same stipple, painted
/// 1, 2, 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalStipple;

impl PatternAlgorithm for RegionalStipple {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let params = ctx.params();
        let noise = ctx.noise();

        let warp = DomainWarp::new(
            noise,
            params.scale * 3.0,
            WARP_SEED,
            params.distortion * WARP_WEIGHT,
        );
        let stipple = noise.field(STIPPLE_SCALE, STIPPLE_SEED) * (params.feat_b / 15.0);

        let mut plan = PaintPlan::new();
        for (layer, seed) in Layer::ALL.into_iter().zip(LAYER_SEEDS) {
            let region = warp.apply(noise.field(params.scale * 2.0, seed)) + &stipple;
            plan.push_threshold(layer, &region, ctx.cutoff(layer));
        }
        plan
    }
}
