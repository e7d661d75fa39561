//! Tests for block pixelation

#[cfg(test)]
mod tests {
    use camogen::compose::pixelate::pixelate;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]))
    }

    // Tests size is preserved and each block is uniform
    // Verified by sampling the block corner instead of its centre
    #[test]
    fn test_blocks_uniform() {
        let image = gradient(32, 24);
        let out = pixelate(&image, 8);
        assert_eq!(out.dimensions(), (32, 24));
        for by in 0..3 {
            for bx in 0..4 {
                let expected = out.get_pixel(bx * 8, by * 8);
                for y in by * 8..by * 8 + 8 {
                    for x in bx * 8..bx * 8 + 8 {
                        assert_eq!(out.get_pixel(x, y), expected);
                    }
                }
            }
        }
        assert_eq!(*out.get_pixel(0, 0), *image.get_pixel(4, 4));
    }

    // Tests pixelating twice changes nothing
    // Verified by sampling the first pixel of each block
    #[test]
    fn test_idempotent() {
        let image = gradient(45, 29);
        let once = pixelate(&image, 8);
        assert_eq!(pixelate(&once, 8), once);
    }

    // Tests images smaller than a block collapse to one colour
    // Verified by removing the one-block minimum
    #[test]
    fn test_small_image_single_block() {
        let out = pixelate(&gradient(5, 3), 8);
        assert_eq!(out.dimensions(), (5, 3));
        let first = *out.get_pixel(0, 0);
        assert!(out.pixels().all(|p| *p == first));
    }

    // Tests empty images pass through
    // Verified by dividing by a zero length
    #[test]
    fn test_empty_image() {
        let out = pixelate(&RgbImage::new(0, 0), 8);
        assert_eq!(out.dimensions(), (0, 0));
    }
}
