//! Nested chips over the blob family

use crate::compose::plan::PaintPlan;
use crate::pattern::blob::{BlobFamily, Turbulence};
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};

/// Roughness used for the underlying blobs regardless of `feat_b`
pub const BASE_ROUGHNESS: f64 = 20.0;
/// Extra cutoff for the chip centre over its rim
pub const CHIP_CENTER_MARGIN: f64 = 0.05;

const CHIP_SEED: u64 = 999;

/// Blob base overlaid with small chips
///
/// Chips above the layer 3 cutoff get layer 2's colour; a slightly stricter
/// cutoff paints the centre in layer 3's colour, leaving a layer 2 rim.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedChip;

impl PatternAlgorithm for NestedChip {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let mut plan = BlobFamily {
            turbulence: Turbulence::Fixed(BASE_ROUGHNESS),
        }
        .plan(ctx);

        let chips = ctx.noise().field(ctx.params().scale / 4.0, CHIP_SEED);
        let cutoff = ctx.cutoff(Layer::Third);
        plan.push_threshold(Layer::Second, &chips, cutoff);
        plan.push_threshold(Layer::Third, &chips, cutoff + CHIP_CENTER_MARGIN);
        plan
    }
}
