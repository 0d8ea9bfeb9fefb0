//! Benchmark profiles and utilities for Tessel.
//!
//! - [`REFERENCE_SHAPE`]: the grid shape every benchmark uses by default
//! - [`noise_grid`]: a seeded grid of random scalars
//! - [`noise_image`]: a seeded random RGB image

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::Grid;
use tessel_image::Image;
use tessel_support::Sampler;

/// `(height, width)` of the reference benchmark grid (64K cells).
pub const REFERENCE_SHAPE: (usize, usize) = (256, 256);

/// A `height × width` grid of values in `0.0..=1.0`, reproducible per `seed`.
pub fn noise_grid(height: usize, width: usize, seed: u64) -> Grid<f32> {
    let mut sampler = Sampler::seeded(seed);
    let mut grid = Grid::with_size(height, width);
    for cell in grid.cells_mut() {
        *cell = sampler.real(0.0, 1.0);
    }
    grid
}

/// A `height × width` image of random colours, reproducible per `seed`.
pub fn noise_image(height: usize, width: usize, seed: u64) -> Image {
    let mut sampler = Sampler::seeded(seed);
    let mut image = Image::with_size(height, width);
    for pixel in image.pixels_mut().cells_mut() {
        *pixel = sampler.real3_uniform(0.0, 1.0);
    }
    image
}
