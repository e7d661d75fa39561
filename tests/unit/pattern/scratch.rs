//! Tests for the cascaded scratch algorithm

#[cfg(test)]
mod tests {
    use camogen::compose::threshold::is_subset;
    use camogen::noise::NoiseGenerator;
    use camogen::pattern::layer::Layer;
    use camogen::pattern::params::PatternParameters;
    use camogen::pattern::scratch::CascadedScratch;
    use camogen::pattern::{PatternAlgorithm, PatternContext};

    fn context(densities: [u8; 3]) -> PatternContext {
        let params = PatternParameters::new(35.0, 0.0, 4.0, 0.0, densities);
        PatternContext::new(NoiseGenerator::new(35, 56, 56), params)
    }

    // Tests the skin map is bounded by the blob field without distortion
    // Verified by adding instead of multiplying the scratches
    #[test]
    fn test_skin_bounds() {
        let (skin, scratches) = CascadedScratch::skin(&context([5, 5, 5]));
        assert_eq!(skin.dim(), (56, 56));
        assert!(skin.iter().all(|&v| (0.0..=1.0 + 1e-9).contains(&v)));
        assert!(scratches.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    // Tests each layer nests in the previous one at equal densities
    // Verified by dropping the layer 2 margin
    #[test]
    fn test_layers_nested() {
        let plan = CascadedScratch.plan(&context([5, 5, 5]));
        let steps = plan.steps();
        let layers: Vec<Layer> = steps.iter().map(|s| s.layer).collect();
        assert_eq!(layers, Layer::ALL.to_vec());
        assert!(is_subset(&steps[1].mask, &steps[0].mask));
        assert!(is_subset(&steps[2].mask, &steps[1].mask));
    }
}
