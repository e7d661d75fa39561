//! Nearest-neighbour block pixelation
//!
//! The raster is sampled down to one pixel per block and blown back up, so
//! every block takes the colour found at its centre. Block centres map back
//! into their own block, which makes the filter idempotent.

use image::{Rgb, RgbImage};

const BLANK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixelate `image` into blocks of roughly `block_size` pixels
///
/// Each axis gets `max(1, len / block_size)` blocks.
pub fn pixelate(image: &RgbImage, block_size: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let block_size = block_size.max(1);
    let blocks_x = (width / block_size).max(1);
    let blocks_y = (height / block_size).max(1);

    let small = RgbImage::from_fn(blocks_x, blocks_y, |bx, by| {
        let x = block_center(bx, blocks_x, width);
        let y = block_center(by, blocks_y, height);
        image.get_pixel_checked(x, y).map_or(BLANK, |pixel| *pixel)
    });

    RgbImage::from_fn(width, height, |x, y| {
        let bx = block_of(x, blocks_x, width);
        let by = block_of(y, blocks_y, height);
        small.get_pixel_checked(bx, by).map_or(BLANK, |pixel| *pixel)
    })
}

// floor((block + 0.5) * len / blocks) in exact integer arithmetic
fn block_center(block: u32, blocks: u32, len: u32) -> u32 {
    let center = (2 * u64::from(block) + 1) * u64::from(len) / (2 * u64::from(blocks));
    (center as u32).min(len - 1)
}

fn block_of(pos: u32, blocks: u32, len: u32) -> u32 {
    let block = u64::from(pos) * u64::from(blocks) / u64::from(len);
    (block as u32).min(blocks - 1)
}
