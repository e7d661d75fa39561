//! Coverage masks, the paint plan and the RGB canvas

/// RGB canvas that paint plans are composited onto
pub mod canvas;
/// Nearest-neighbour block pixelation post-filter
pub mod pixelate;
/// Ordered list of per-layer paint steps
pub mod plan;
/// Density map thresholding and mask algebra
pub mod threshold;

pub use canvas::Canvas;
pub use plan::{PaintPlan, PaintStep};
pub use threshold::CoverageMask;
