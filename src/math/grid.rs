//! Coordinate grids and toroidal shifts

use ndarray::{Array1, Array2};

/// `n` evenly spaced samples from `0` to `n` inclusive
///
/// Samples are spaced `n / (n - 1)` apart, so the last one lands on `n`.
pub fn linspace(n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::zeros(1),
        _ => Array1::linspace(0.0, n as f64, n),
    }
}

/// Column coordinate of every pixel in an `height × width` grid
pub fn column_coordinates(height: usize, width: usize) -> Array2<f64> {
    let xs = linspace(width);
    Array2::from_shape_fn((height, width), |(_, col)| xs.get(col).copied().unwrap_or(0.0))
}

/// Row coordinate of every pixel in an `height × width` grid
pub fn row_coordinates(height: usize, width: usize) -> Array2<f64> {
    let ys = linspace(height);
    Array2::from_shape_fn((height, width), |(row, _)| ys.get(row).copied().unwrap_or(0.0))
}

/// Toroidally shift a grid down by `rows` and right by `cols`
///
/// Values pushed past an edge wrap around to the opposite edge.
pub fn roll<T: Copy + Default>(grid: &Array2<T>, rows: usize, cols: usize) -> Array2<T> {
    let (height, width) = grid.dim();
    if height == 0 || width == 0 {
        return grid.clone();
    }

    let rows = rows % height;
    let cols = cols % width;
    Array2::from_shape_fn((height, width), |(row, col)| {
        let src_row = (row + height - rows) % height;
        let src_col = (col + width - cols) % width;
        grid.get((src_row, src_col)).copied().unwrap_or_default()
    })
}
