//! Polygonal triangle-wave interference
//!
//! Triangle waves along three axes 120° apart interfere into straight-edged
//! cells. The gaps between cells form a web which is faded out in patches,
//! copied as a shifted shadow, and painted over a low-frequency background.

use crate::compose::plan::PaintPlan;
use crate::compose::threshold::{complement, intersect, threshold};
use crate::math::grid::roll;
use crate::math::waves::hex_interference;
use crate::noise::DomainWarp;
use crate::pattern::layer::Layer;
use crate::pattern::{PatternAlgorithm, PatternContext};
use ndarray::Zip;

/// Toroidal offset of the shadow in pixels, applied on both axes
pub const SHADOW_OFFSET: usize = 15;

const BACKGROUND_SEED: u64 = 100;
const WARP_SEED: u64 = 200;
const FADE_SEED: u64 = 555;

/// Web/cell pattern with a drop shadow
///
/// Paint order: background (layer 1), shadow (layer 3), web (layer 2).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonalInterference;

/// Cutoff separating cells from web, from the `feat_b` line control
pub fn cell_cutoff(feat_b: f64) -> f64 {
    (feat_b / 50.0).mul_add(0.4, 0.4)
}

impl PatternAlgorithm for PolygonalInterference {
    fn plan(&self, ctx: &PatternContext) -> PaintPlan {
        let params = ctx.params();
        let noise = ctx.noise();

        let background = noise.field(params.scale * 3.0, BACKGROUND_SEED);

        let warp = DomainWarp::new(noise, params.scale * 4.0, WARP_SEED, params.distortion);
        let xs = warp.warped_columns();
        let ys = warp.warped_rows();
        let freq = params.scale / 500.0;
        let interference =
            Zip::from(&xs)
                .and(&ys)
                .par_map_collect(|&x, &y| hex_interference(x * freq, y * freq));

        let cells = threshold(&interference, cell_cutoff(params.feat_b));
        let web = complement(&cells);

        let fade = noise.field(params.scale * 4.0, FADE_SEED);
        let visible = threshold(&fade, params.feat_a / 40.0);
        let lines = intersect(&web, &visible);
        let shadow = roll(&lines, SHADOW_OFFSET, SHADOW_OFFSET);

        let mut plan = PaintPlan::new();
        plan.push_threshold(Layer::First, &background, 0.5);
        plan.push(Layer::Third, shadow);
        plan.push(Layer::Second, lines);
        plan
    }
}
