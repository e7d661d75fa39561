//! Banded-wave stripes
//!
//! Rows are displaced by per-pixel jitter plus a stretched flow field, then a
//! sine is evaluated along the displaced row coordinate. A pinch field varies
//! the stripe amplitude so stripes swell and thin along their length.

use crate::compose::plan::PaintPlan;
use crate::math::grid::row_coordinates;
use crate::math::waves::pinch_amplitude;
use crate::noise::{DomainWarp, Field};
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};
use ndarray::Zip;

const JITTER_SEED: u64 = 1;
const FLOW_SEED: u64 = 10;
const PINCH_PRIMARY_SEED: u64 = 20;
const PINCH_SECONDARY_SEED: u64 = 30;

/// Extra cutoff that nests layer 3 inside the secondary band
pub const NESTED_BAND_MARGIN: f64 = 0.15;

/// Directional stripes in two interleaved bands
///
/// Layer 1 uses the primary band. Layers 2 and 3 share a phase-shifted,
/// slightly faster secondary band, layer 3 with a stricter cutoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandedWave;

impl BandedWave {
    /// Stripe maps `(primary, secondary)` before thresholding
    pub fn bands(ctx: &PatternContext) -> (Field, Field) {
        let params = ctx.params();
        let noise = ctx.noise();
        let (height, width) = ctx.dim();

        let jitter = noise.uniform(JITTER_SEED) * params.feat_b;
        let flow = DomainWarp::from_field(
            noise.stretched(params.scale * 2.0, params.feat_a, 1.0, FLOW_SEED),
            params.distortion,
        );
        let ys = flow.apply(row_coordinates(height, width) + &jitter);
        let freq = params.scale / 250.0;

        let pinch1 = noise.stretched(params.scale, params.feat_a / 2.0, 1.0, PINCH_PRIMARY_SEED);
        let primary = Zip::from(&ys)
            .and(&pinch1)
            .par_map_collect(|&y, &p| (y * freq).sin() * pinch_amplitude(p));

        let pinch2 = noise.stretched(params.scale, params.feat_a, 1.0, PINCH_SECONDARY_SEED);
        let secondary = Zip::from(&ys).and(&pinch2).par_map_collect(|&y, &p| {
            (y * freq).mul_add(1.2, 1.0).sin() * pinch_amplitude(p)
        });

        (primary, secondary)
    }
}

impl PatternAlgorithm for BandedWave {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let (primary, secondary) = Self::bands(ctx);

        let mut plan = PaintPlan::new();
        plan.push_threshold(Layer::First, &primary, ctx.cutoff(Layer::First));
        plan.push_threshold(Layer::Second, &secondary, ctx.cutoff(Layer::Second));
        plan.push_threshold(
            Layer::Third,
            &secondary,
            ctx.cutoff(Layer::Third) + NESTED_BAND_MARGIN,
        );
        plan
    }
}
