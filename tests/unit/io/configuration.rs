//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use camogen::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_LOG_FILTER, DEFAULT_OUTPUT, DEFAULT_WIDTH, DENSITY_MAX,
        DENSITY_MIN, DISTORTION_RANGE, FEAT_A_RANGE, FEAT_B_RANGE, OUTPUT_EXTENSION,
        PIXEL_BLOCK_SIZE, QUIET_LOG_FILTER, SCALE_RANGE,
    };
    use std::path::Path;

    // Tests ranges are well-formed
    // Verified by swapping one range's bounds
    #[test]
    fn test_ranges_ordered() {
        for (min, max) in [SCALE_RANGE, DISTORTION_RANGE, FEAT_A_RANGE, FEAT_B_RANGE] {
            assert!(min < max);
        }
        assert!(DENSITY_MIN < DENSITY_MAX);
        assert!(PIXEL_BLOCK_SIZE > 0);
        assert!(DEFAULT_WIDTH > PIXEL_BLOCK_SIZE && DEFAULT_HEIGHT > PIXEL_BLOCK_SIZE);
    }

    // Tests the default output uses the export extension
    // Verified by changing the default output to a jpg
    #[test]
    fn test_output_defaults() {
        let extension = Path::new(DEFAULT_OUTPUT).extension();
        assert_eq!(extension.and_then(|e| e.to_str()), Some(OUTPUT_EXTENSION));
        assert_ne!(DEFAULT_LOG_FILTER, QUIET_LOG_FILTER);
    }
}
