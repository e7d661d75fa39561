//! Tests for synthesis requests and the render entry point

#[cfg(test)]
mod tests {
    use camogen::palette::Color;
    use camogen::pattern::layer::LayerVisibility;
    use camogen::pattern::params::{PatternParameters, SeedOffset};
    use camogen::{Mode, SynthesisRequest, synthesize};

    // Tests requests start from the mode preset at the default size
    // Verified by defaulting to the woodland preset
    #[test]
    fn test_for_mode_uses_preset() {
        let request = SynthesisRequest::for_mode(Mode::Dpm);
        let preset = Mode::Dpm.preset();
        assert_eq!(request.params, preset.params);
        assert_eq!(request.palette, preset.palette);
        assert_eq!((request.width, request.height), (900, 700));
        assert_eq!(request.seed_offset, SeedOffset(0));
        assert!(!request.pixelate);
        assert_eq!(SynthesisRequest::default().mode, Mode::Kryptek);
    }

    // Tests the context clamps parameters and derives the seed base
    // Verified by passing raw parameters through
    #[test]
    fn test_context_clamps() {
        let request = SynthesisRequest::for_mode(Mode::Woodland)
            .with_params(PatternParameters::new(2000.0, -1.0, 0.0, 0.0, [5, 5, 5]))
            .with_seed_offset(SeedOffset(4))
            .with_size(30, 20);
        let ctx = request.context();
        assert!((ctx.params().scale - 1000.0).abs() < f64::EPSILON);
        assert!(ctx.params().distortion.abs() < f64::EPSILON);
        assert_eq!(ctx.noise().seed_base(), 1004);
        assert_eq!(ctx.dim(), (20, 30));
    }

    // Tests the raster has the requested size
    // Verified by swapping width and height in the canvas
    #[test]
    fn test_output_size() {
        let image = synthesize(&SynthesisRequest::for_mode(Mode::Lizard).with_size(50, 30));
        assert_eq!(image.dimensions(), (50, 30));
    }

    // Tests hiding every layer yields a flat base raster
    // Verified by ignoring visibility in composite
    #[test]
    fn test_all_hidden_is_base() {
        let request = SynthesisRequest::for_mode(Mode::TigerStripe)
            .with_size(40, 40)
            .with_visibility(LayerVisibility::none());
        let base: image::Rgb<u8> = request.palette.base.into();
        assert!(synthesize(&request).pixels().all(|p| *p == base));
    }

    // Tests the output only uses palette colours
    // Verified by blending overlapping steps
    #[test]
    fn test_only_palette_colours() {
        let request = SynthesisRequest::for_mode(Mode::ChocolateChip).with_size(60, 40);
        let palette = request.palette;
        let allowed: Vec<Color> = std::iter::once(palette.base)
            .chain(palette.layers)
            .collect();
        let image = synthesize(&request);
        assert!(
            image
                .pixels()
                .all(|p| allowed.contains(&Color::new(p.0[0], p.0[1], p.0[2])))
        );
    }
}
