//! Tests for thresholding and mask algebra

#[cfg(test)]
mod tests {
    use camogen::compose::threshold::{
        complement, coverage_fraction, intersect, is_subset, threshold,
    };
    use ndarray::{Array2, array};

    // Tests the threshold is strict
    // Verified by using >= instead of >
    #[test]
    fn test_threshold_strict() {
        let map = array![[0.2, 0.5], [0.7, 0.5]];
        assert_eq!(threshold(&map, 0.5), array![[false, false], [true, false]]);
    }

    // Tests intersection, complement and subset agree
    // Verified by using || in intersect
    #[test]
    fn test_mask_algebra() {
        let a = array![[true, true], [false, false]];
        let b = array![[true, false], [true, false]];
        let both = intersect(&a, &b);
        assert_eq!(both, array![[true, false], [false, false]]);
        assert!(is_subset(&both, &a));
        assert!(is_subset(&both, &b));
        assert!(!is_subset(&a, &b));
        assert_eq!(complement(&a), array![[false, false], [true, true]]);
    }

    // Tests subset rejects mismatched shapes
    // Verified by zipping without checking dimensions
    #[test]
    fn test_subset_shape_mismatch() {
        let small = Array2::from_elem((2, 2), false);
        let large = Array2::from_elem((3, 3), true);
        assert!(!is_subset(&small, &large));
    }

    // Tests coverage counts set pixels and handles empty masks
    // Verified by dividing by zero for empty masks
    #[test]
    fn test_coverage_fraction() {
        let mask = array![[true, false], [true, true]];
        assert!((coverage_fraction(&mask) - 0.75).abs() < f64::EPSILON);
        assert!(coverage_fraction(&Array2::from_elem((0, 4), true)).abs() < f64::EPSILON);
    }
}
