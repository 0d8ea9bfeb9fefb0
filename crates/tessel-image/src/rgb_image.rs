//! Linear RGB image stored in a [`Grid`].

use std::ops::{Index, IndexMut};
use std::path::Path;

use tessel_core::{Grid, Vec3};
use tracing::debug;

use crate::codec::{ImageCodec, RawPixels, CHANNELS};
use crate::error::ImageError;
use crate::png::PngCodec;

/// A 2D floating-point RGB image.
///
/// Pixels are linear RGB with channels in `[0, 1]`. The image remembers
/// whether it was flipped vertically on load so that [`write`](Self::write)
/// restores the original orientation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    pixels: Grid<Vec3>,
    flipped: bool,
}

impl Image {
    /// Create an empty `0 × 0` image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a black `height × width` image.
    pub fn with_size(height: usize, width: usize) -> Self {
        Self::from_grid(Grid::with_size(height, width))
    }

    /// Wrap an existing pixel grid. The image is not flipped.
    pub fn from_grid(pixels: Grid<Vec3>) -> Self {
        Self {
            pixels,
            flipped: false,
        }
    }

    /// Load an image from `path` through `codec`.
    pub fn read<C>(
        path: impl AsRef<Path>,
        flip_vertically: bool,
        codec: &C,
    ) -> Result<Self, ImageError>
    where
        C: ImageCodec + ?Sized,
    {
        let mut image = Self::new();
        image.load(path, flip_vertically, codec)?;
        Ok(image)
    }

    /// Load an image from `path` with the stock [`PngCodec`].
    pub fn open(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self, ImageError> {
        Self::read(path, flip_vertically, &PngCodec)
    }

    /// Replace this image's pixels with the file at `path`.
    ///
    /// Bytes are mapped to `[0, 1]` by dividing by 255. On error the image
    /// is left unchanged.
    pub fn load<C>(
        &mut self,
        path: impl AsRef<Path>,
        flip_vertically: bool,
        codec: &C,
    ) -> Result<(), ImageError>
    where
        C: ImageCodec + ?Sized,
    {
        let path = path.as_ref();
        let raw = codec.decode(path, flip_vertically)?;
        raw.validate()?;

        self.pixels.resize(raw.height, raw.width);
        for (pixel, rgb) in self.pixels.cells_mut().zip(raw.data.chunks_exact(CHANNELS)) {
            *pixel = Vec3::new(
                byte_to_channel(rgb[0]),
                byte_to_channel(rgb[1]),
                byte_to_channel(rgb[2]),
            );
        }
        self.flipped = flip_vertically;

        debug!(
            path = %path.display(),
            height = raw.height,
            width = raw.width,
            flipped = flip_vertically,
            "loaded image"
        );
        Ok(())
    }

    /// Write this image to `path` through `codec`, flipping back if it was
    /// flipped on load.
    pub fn write<C>(&self, path: impl AsRef<Path>, codec: &C) -> Result<(), ImageError>
    where
        C: ImageCodec + ?Sized,
    {
        let path = path.as_ref();
        codec.encode(path, &self.to_raw(), self.flipped)?;
        debug!(
            path = %path.display(),
            height = self.height(),
            width = self.width(),
            flipped = self.flipped,
            "wrote image"
        );
        Ok(())
    }

    /// Write this image to `path` as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        self.write(path, &PngCodec)
    }

    /// Convert to 8-bit RGB, scaling by 255 and clamping to `[0, 255]`.
    pub fn to_raw(&self) -> RawPixels {
        let mut data = Vec::with_capacity(self.pixels.cell_count() * CHANNELS);
        for pixel in self.pixels.cells() {
            data.extend([
                channel_to_byte(pixel.x),
                channel_to_byte(pixel.y),
                channel_to_byte(pixel.z),
            ]);
        }
        RawPixels::new(self.width(), self.height(), data)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// True if the image has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether the pixels were flipped vertically on load.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Pixel `(row, col)`, or `None` out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Vec3> {
        self.pixels.get(row, col)
    }

    /// The underlying pixel grid.
    pub fn pixels(&self) -> &Grid<Vec3> {
        &self.pixels
    }

    /// The underlying pixel grid, mutably.
    pub fn pixels_mut(&mut self) -> &mut Grid<Vec3> {
        &mut self.pixels
    }

    /// Unwrap into the pixel grid.
    pub fn into_grid(self) -> Grid<Vec3> {
        self.pixels
    }
}

impl Index<(usize, usize)> for Image {
    type Output = Vec3;

    fn index(&self, index: (usize, usize)) -> &Vec3 {
        &self.pixels[index]
    }
}

impl IndexMut<(usize, usize)> for Image {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vec3 {
        &mut self.pixels[index]
    }
}

fn byte_to_channel(byte: u8) -> f32 {
    f32::from(byte) / 255.0
}

/// Rounds to the nearest level so that a byte survives a load/write cycle.
/// NaN maps to 0.
fn channel_to_byte(channel: f32) -> u8 {
    (255.0 * channel).clamp(0.0, 255.0).round() as u8
}
