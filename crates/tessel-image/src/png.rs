//! PNG codec backed by the `image` crate.

use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::codec::{ImageCodec, RawPixels};
use crate::error::ImageError;

/// Decodes any format the `image` crate is built with and encodes PNG.
///
/// Decoded images are converted to 8-bit RGB, dropping alpha.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, path: &Path, flip_vertically: bool) -> Result<RawPixels, ImageError> {
        let decoded = image::open(path).map_err(|e| ImageError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();
        let mut pixels = RawPixels::new(width as usize, height as usize, rgb.into_raw());
        if flip_vertically {
            pixels.flip_vertical();
        }
        Ok(pixels)
    }

    fn encode(
        &self,
        path: &Path,
        pixels: &RawPixels,
        flip_vertically: bool,
    ) -> Result<(), ImageError> {
        pixels.validate()?;
        let save_error = |reason: String| ImageError::Save {
            path: path.to_path_buf(),
            reason,
        };
        let width = u32::try_from(pixels.width)
            .map_err(|_| save_error(format!("width {} exceeds u32", pixels.width)))?;
        let height = u32::try_from(pixels.height)
            .map_err(|_| save_error(format!("height {} exceeds u32", pixels.height)))?;

        let flipped;
        let data = if flip_vertically {
            let mut copy = pixels.clone();
            copy.flip_vertical();
            flipped = copy;
            &flipped.data
        } else {
            &pixels.data
        };

        image::save_buffer_with_format(path, data, width, height, ColorType::Rgb8, ImageFormat::Png)
            .map_err(|e| save_error(e.to_string()))
    }
}
