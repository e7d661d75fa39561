//! Tests for the dot-masked region algorithm

#[cfg(test)]
mod tests {
    use camogen::compose::threshold::threshold;
    use camogen::noise::NoiseGenerator;
    use camogen::pattern::dotted::{DotMaskedRegion, MIN_DOT_SCALE, dot_cutoff};
    use camogen::pattern::layer::Layer;
    use camogen::pattern::params::PatternParameters;
    use camogen::pattern::{PatternAlgorithm, PatternContext};

    // Tests the dot cutoff falls as feat_a grows
    // Verified by adding feat_a instead of subtracting it
    #[test]
    fn test_dot_cutoff() {
        assert!((dot_cutoff(0.0) - 1.0).abs() < 1e-12);
        assert!((dot_cutoff(9.0) - 0.5).abs() < 1e-12);
        assert!(dot_cutoff(18.0).abs() < 1e-12);
    }

    // Tests every layer mask lies inside the shared dot mask
    // Verified by skipping the intersection for one layer
    #[test]
    fn test_masks_gated_by_dots() {
        let params = PatternParameters::new(20.0, 10.0, 9.0, 1.0, [9, 9, 9]);
        let noise = NoiseGenerator::new(20, 40, 40);
        let ctx = PatternContext::new(noise, params);
        let plan = DotMaskedRegion.plan(&ctx);

        let dots = threshold(&noise.field(MIN_DOT_SCALE, 900), dot_cutoff(9.0));
        let layers: Vec<Layer> = plan.steps().iter().map(|s| s.layer).collect();
        assert_eq!(layers, Layer::ALL.to_vec());
        for step in plan.steps() {
            assert!(step.mask.iter().zip(dots.iter()).all(|(&m, &d)| !m || d));
        }
    }

    // Tests feat_a of zero leaves no dots to paint
    // Verified by using a non-strict threshold
    #[test]
    fn test_no_dots_paints_nothing() {
        let params = PatternParameters::new(20.0, 0.0, 0.0, 4.0, [9, 9, 9]);
        let ctx = PatternContext::new(NoiseGenerator::new(20, 32, 32), params);
        let plan = DotMaskedRegion.plan(&ctx);
        assert!(plan.steps().iter().all(|s| s.mask.iter().all(|&m| !m)));
    }
}
