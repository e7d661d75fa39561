//! Cascaded scratches over blobs
//!
//! One skin map is thresholded three times, each layer stricter than the
//! last, and the final layer is multiplied by the scratch field once more.

use crate::compose::plan::PaintPlan;
use crate::noise::{DomainWarp, Field};
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};
use ndarray::Zip;

/// Extra cutoff for layer 2 over the shared map
pub const SECOND_LAYER_MARGIN: f64 = 0.1;
/// Extra cutoff for layer 3 over the re-scratched map
pub const THIRD_LAYER_MARGIN: f64 = 0.15;

const BLOB_SEED: u64 = 100;
const SCRATCH_SEED: u64 = 200;
const WARP_SEED: u64 = 300;

/// Scratch marks over blobs over a lizard-skin base, painted 1, 2, 3
#[derive(Debug, Clone, Copy, Default)]
pub struct CascadedScratch;

impl CascadedScratch {
    /// Skin map shared by layers 1 and 2, and the scratch field
    pub fn skin(ctx: &PatternContext) -> (Field, Field) {
        let params = ctx.params();
        let noise = ctx.noise();

        let blobs = noise.stretched(params.scale, (params.feat_a / 2.0).max(1.0), 1.0, BLOB_SEED);
        let scratches = noise.stretched(
            (params.scale / 4.0).max(1.0),
            (params.feat_a * 2.0).max(5.0),
            1.0,
            SCRATCH_SEED,
        );
        let warp = DomainWarp::new(noise, params.scale * 2.0, WARP_SEED, params.distortion / 100.0);

        let skin = Zip::from(&blobs)
            .and(&scratches)
            .par_map_collect(|&b, &s| b * 0.7f64.mul_add(s, 0.3));
        (warp.apply(skin), scratches)
    }
}

impl PatternAlgorithm for CascadedScratch {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let (skin, scratches) = Self::skin(ctx);
        let rescratched = &skin * &scratches;

        let mut plan = PaintPlan::new();
        plan.push_threshold(Layer::First, &skin, ctx.cutoff(Layer::First));
        plan.push_threshold(
            Layer::Second,
            &skin,
            ctx.cutoff(Layer::Second) + SECOND_LAYER_MARGIN,
        );
        plan.push_threshold(
            Layer::Third,
            &rescratched,
            ctx.cutoff(Layer::Third) + THIRD_LAYER_MARGIN,
        );
        plan
    }
}
