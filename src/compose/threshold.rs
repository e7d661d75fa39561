//! Density map thresholding and mask algebra

use crate::noise::Field;
use ndarray::{Array2, Zip};

/// Boolean grid marking where a layer paints
pub type CoverageMask = Array2<bool>;

/// Pixels whose density strictly exceeds `cutoff`
pub fn threshold(map: &Field, cutoff: f64) -> CoverageMask {
    Zip::from(map).par_map_collect(|&value| value > cutoff)
}

/// Pixels set in both masks
pub fn intersect(a: &CoverageMask, b: &CoverageMask) -> CoverageMask {
    Zip::from(a).and(b).par_map_collect(|&x, &y| x && y)
}

/// Pixels not set in `mask`
pub fn complement(mask: &CoverageMask) -> CoverageMask {
    mask.mapv(|set| !set)
}

/// Check that every pixel set in `inner` is also set in `outer`
pub fn is_subset(inner: &CoverageMask, outer: &CoverageMask) -> bool {
    inner.dim() == outer.dim() && Zip::from(inner).and(outer).all(|&i, &o| !i || o)
}

/// Fraction of pixels set, `0.0` for an empty mask
pub fn coverage_fraction(mask: &CoverageMask) -> f64 {
    if mask.is_empty() {
        return 0.0;
    }
    mask.iter().filter(|&&set| set).count() as f64 / mask.len() as f64
}
