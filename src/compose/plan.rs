//! Ordered per-layer paint steps

use crate::compose::threshold::{CoverageMask, threshold};
use crate::noise::Field;
use crate::pattern::layer::Layer;

/// One mask painted in one layer's colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintStep {
    /// Layer whose colour is painted
    pub layer: Layer,
    /// Pixels the colour is written to
    pub mask: CoverageMask,
}

/// Paint steps in the order they must be applied
///
/// Later steps overwrite earlier ones, which is how shadows, rims and nested
/// sub-layers are built. A layer may appear in more than one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintPlan {
    steps: Vec<PaintStep>,
}

impl PaintPlan {
    /// Create an empty plan
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step painting `mask` in `layer`'s colour
    pub fn push(&mut self, layer: Layer, mask: CoverageMask) {
        self.steps.push(PaintStep { layer, mask });
    }

    /// Append a step painting wherever `map` exceeds `cutoff`
    pub fn push_threshold(&mut self, layer: Layer, map: &Field, cutoff: f64) {
        self.push(layer, threshold(map, cutoff));
    }

    /// Steps in paint order
    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    /// Masks painted by `layer`, in paint order
    pub fn masks_for(&self, layer: Layer) -> impl Iterator<Item = &CoverageMask> {
        self.steps
            .iter()
            .filter(move |step| step.layer == layer)
            .map(|step| &step.mask)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the plan paints nothing
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
