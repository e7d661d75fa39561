//! Single-pass synthesis
//!
//! A request carries everything the control surface owns: mode, parameters,
//! palette, visibility, canvas size and seed offset. Synthesis is a pure
//! function of the request; identical requests give identical rasters.

use crate::compose::canvas::Canvas;
use crate::compose::pixelate::pixelate;
use crate::compose::plan::PaintPlan;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PIXEL_BLOCK_SIZE};
use crate::noise::NoiseGenerator;
use crate::palette::Palette;
use crate::pattern::layer::LayerVisibility;
use crate::pattern::mode::Mode;
use crate::pattern::params::{PatternParameters, SeedOffset};
use crate::pattern::{PatternAlgorithm, PatternContext};
use image::RgbImage;
use std::time::Instant;
use tracing::debug;

/// Complete input of one synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Pattern style
    pub mode: Mode,
    /// Pattern controls, clamped before use
    pub params: PatternParameters,
    /// Base and layer colours
    pub palette: Palette,
    /// Which layers are painted
    pub visibility: LayerVisibility,
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    /// Regenerate counter mixed into every noise seed
    pub seed_offset: SeedOffset,
    /// Apply the block pixelation post-filter
    pub pixelate: bool,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}

impl SynthesisRequest {
    /// Request using `mode`'s preset at the default canvas size
    pub const fn for_mode(mode: Mode) -> Self {
        let preset = mode.preset();
        Self {
            mode,
            params: preset.params,
            palette: preset.palette,
            visibility: preset.visibility,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed_offset: SeedOffset(0),
            pixelate: false,
        }
    }

    /// Copy with a different canvas size
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Copy with a different seed offset
    #[must_use]
    pub const fn with_seed_offset(mut self, seed_offset: SeedOffset) -> Self {
        self.seed_offset = seed_offset;
        self
    }

    /// Copy with different pattern parameters
    #[must_use]
    pub const fn with_params(mut self, params: PatternParameters) -> Self {
        self.params = params;
        self
    }

    /// Copy with a different palette
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Copy with different layer visibility
    #[must_use]
    pub const fn with_visibility(mut self, visibility: LayerVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Copy with pixelation switched on or off
    #[must_use]
    pub const fn with_pixelate(mut self, pixelate: bool) -> Self {
        self.pixelate = pixelate;
        self
    }

    /// Algorithm inputs for this request
    pub fn context(&self) -> PatternContext {
        let params = self.params.clamped();
        let noise = NoiseGenerator::new(
            params.seed_base(self.seed_offset),
            self.height as usize,
            self.width as usize,
        );
        PatternContext::new(noise, params)
    }

    /// Ordered paint steps for this request, before visibility is applied
    pub fn plan(&self) -> PaintPlan {
        self.mode.algorithm().plan(&self.context())
    }
}

/// Render a request to an RGB raster
pub fn synthesize(request: &SynthesisRequest) -> RgbImage {
    let start = Instant::now();
    let plan = request.plan();

    let mut canvas = Canvas::new(request.width, request.height, request.palette.base);
    canvas.composite(&plan, &request.palette, &request.visibility);
    let image = canvas.into_image();

    debug!(
        mode = %request.mode,
        width = request.width,
        height = request.height,
        seed_offset = request.seed_offset.0,
        steps = plan.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "synthesized pattern"
    );

    if request.pixelate {
        pixelate(&image, PIXEL_BLOCK_SIZE)
    } else {
        image
    }
}
