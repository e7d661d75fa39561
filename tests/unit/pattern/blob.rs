//! Tests for the blob family

#[cfg(test)]
mod tests {
    use camogen::noise::NoiseGenerator;
    use camogen::pattern::blob::{BlobFamily, Turbulence};
    use camogen::pattern::layer::Layer;
    use camogen::pattern::params::PatternParameters;
    use camogen::pattern::{PatternAlgorithm, PatternContext};

    fn context(feat_b: f64) -> PatternContext {
        let params = PatternParameters::new(30.0, 0.0, 6.0, feat_b, [4, 5, 6]);
        PatternContext::new(NoiseGenerator::new(30, 40, 50), params)
    }

    // Tests roughness source selection
    // Verified by ignoring the fixed value
    #[test]
    fn test_roughness() {
        assert!((Turbulence::FromFeatB.roughness(12.0) - 12.0).abs() < f64::EPSILON);
        assert!((Turbulence::Fixed(0.5).roughness(12.0) - 0.5).abs() < f64::EPSILON);
    }

    // Tests density maps are offset by a non-negative shared turbulence term
    // Verified by subtracting the turbulence
    #[test]
    fn test_density_maps_range() {
        let family = BlobFamily {
            turbulence: Turbulence::FromFeatB,
        };
        let maps = family.density_maps(&context(10.0));
        for map in &maps {
            assert_eq!(map.dim(), (40, 50));
            assert!(map.iter().all(|&v| (0.0..=2.0 + 1e-9).contains(&v)));
        }
        assert_ne!(maps[0], maps[1]);
    }

    // Tests fixed turbulence ignores feat_b
    // Verified by reading feat_b for the fixed variant
    #[test]
    fn test_fixed_turbulence_ignores_feat_b() {
        let family = BlobFamily {
            turbulence: Turbulence::Fixed(0.5),
        };
        assert_eq!(
            family.density_maps(&context(0.0)),
            family.density_maps(&context(50.0))
        );
    }

    // Tests one step per layer in palette order
    // Verified by reversing the layer loop
    #[test]
    fn test_plan_layers() {
        let plan = BlobFamily {
            turbulence: Turbulence::FromFeatB,
        }
        .plan(&context(10.0));
        let layers: Vec<Layer> = plan.steps().iter().map(|s| s.layer).collect();
        assert_eq!(layers, Layer::ALL.to_vec());
    }
}
