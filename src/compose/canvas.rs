//! RGB canvas that paint plans are composited onto

use crate::compose::plan::PaintPlan;
use crate::compose::threshold::CoverageMask;
use crate::palette::{Color, Palette};
use crate::pattern::layer::LayerVisibility;
use image::RgbImage;

/// Raster cleared to the base colour and then overpainted layer by layer
///
/// Painting only ever overwrites pixels; nothing is blended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with `base`
    pub fn new(width: u32, height: u32, base: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, base.into()),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write `color` to every pixel set in `mask`
    ///
    /// The mask is indexed `(row, col)`; entries outside the canvas are ignored.
    pub fn paint(&mut self, mask: &CoverageMask, color: Color) {
        let rgb = image::Rgb::from(color);
        for ((row, col), _) in mask.indexed_iter().filter(|(_, set)| **set) {
            if let Some(pixel) = self.image.get_pixel_mut_checked(col as u32, row as u32) {
                *pixel = rgb;
            }
        }
    }

    /// Apply every visible step of `plan` in order
    pub fn composite(&mut self, plan: &PaintPlan, palette: &Palette, visibility: &LayerVisibility) {
        for step in plan.steps() {
            if visibility.is_visible(step.layer) {
                self.paint(&step.mask, palette.layer(step.layer));
            }
        }
    }

    /// Borrow the underlying raster
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Take the underlying raster
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
