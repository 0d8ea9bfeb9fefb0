//! Canonical test data.

use tessel_core::Grid;
use tessel_image::RawPixels;

/// A `height × width` grid whose cell `(r, c)` holds `r * width + c`.
pub fn counting_grid(height: usize, width: usize) -> Grid<usize> {
    let mut grid = Grid::with_size(height, width);
    for (i, cell) in grid.cells_mut().enumerate() {
        *cell = i;
    }
    grid
}

/// A `height × width` RGB buffer where red encodes the row and green the
/// column (both scaled into `0..=255`), blue is constant 64.
///
/// Every row differs from every other, so vertical flips are detectable.
pub fn gradient_image(height: usize, width: usize) -> RawPixels {
    let scale = |i: usize, n: usize| -> u8 {
        if n <= 1 {
            0
        } else {
            (i * 255 / (n - 1)) as u8
        }
    };
    let mut data = Vec::with_capacity(height * width * 3);
    for r in 0..height {
        for c in 0..width {
            data.extend([scale(r, height), scale(c, width), 64]);
        }
    }
    RawPixels::new(width, height, data)
}
