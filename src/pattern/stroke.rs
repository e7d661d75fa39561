//! Directional brush strokes

use crate::compose::plan::PaintPlan;
use crate::noise::DomainWarp;
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};

const STROKE_SEEDS: [u64; 3] = [10, 20, 30];
const BRISTLE_SEED: u64 = 99;
const WARP_SEED: u64 = 500;

/// Horizontal elongation of the strokes for a given `feat_a`
pub fn stroke_stretch(feat_a: f64) -> f64 {
    (feat_a + 2.0).max(4.0)
}

/// Elongated strokes textured with fine bristles, painted 1, 2, 3
///
/// `feat_a` stretches the strokes; `feat_b` controls how much bristle
/// roughness shows inside them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionalStroke;

impl PatternAlgorithm for DirectionalStroke {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let params = ctx.params();
        let noise = ctx.noise();

        let stretch = stroke_stretch(params.feat_a);
        let bristles = noise.stretched(
            (params.scale / 5.0).max(1.0),
            stretch * 1.5,
            1.0,
            BRISTLE_SEED,
        );
        let mix = params.feat_b / 50.0;
        let texture = bristles.mapv(|b| b.mul_add(mix, 1.0 - mix));
        let warp = DomainWarp::new(noise, params.scale * 3.0, WARP_SEED, params.distortion / 150.0);

        let mut plan = PaintPlan::new();
        for (layer, seed) in Layer::ALL.into_iter().zip(STROKE_SEEDS) {
            let strokes = noise.stretched(params.scale * 2.0, stretch, 1.0, seed);
            let map = warp.apply(strokes * &texture);
            plan.push_threshold(layer, &map, ctx.cutoff(layer));
        }
        plan
    }
}
