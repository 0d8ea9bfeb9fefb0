//! The boundary between images and file formats.

use std::path::Path;

use crate::error::ImageError;

/// Bytes per pixel in a [`RawPixels`] buffer (8-bit RGB).
pub const CHANNELS: usize = 3;

/// Row-major 8-bit RGB pixel data, as exchanged with an [`ImageCodec`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPixels {
    /// Pixels per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// `width * height * CHANNELS` bytes, top row first.
    pub data: Vec<u8>,
}

impl RawPixels {
    /// Wrap `data` without checking its length; see [`validate`](Self::validate).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Expected byte length for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width * self.height * CHANNELS
    }

    /// Check that `data` holds exactly `width * height` RGB triples.
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.data.len() == self.expected_len() {
            Ok(())
        } else {
            Err(ImageError::Malformed {
                expected: self.expected_len(),
                actual: self.data.len(),
            })
        }
    }

    /// Reverse the row order in place.
    pub fn flip_vertical(&mut self) {
        let stride = self.width * CHANNELS;
        if stride == 0 {
            return;
        }
        let rows = self.data.len() / stride;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (head, tail) = self.data.split_at_mut(bottom * stride);
            head[top * stride..(top + 1) * stride].swap_with_slice(&mut tail[..stride]);
        }
    }
}

/// Reads and writes 8-bit RGB pixel data.
///
/// `flip_vertically` asks the codec to reverse row order: on decode the
/// bottom file row becomes row 0, on encode row 0 becomes the bottom file
/// row. Decoding then encoding with the same flag round-trips a file.
pub trait ImageCodec {
    /// Decode the file at `path`.
    ///
    /// Fails with [`ImageError::Load`] carrying `path`.
    fn decode(&self, path: &Path, flip_vertically: bool) -> Result<RawPixels, ImageError>;

    /// Encode `pixels` to the file at `path`.
    ///
    /// Fails with [`ImageError::Save`] carrying `path`.
    fn encode(
        &self,
        path: &Path,
        pixels: &RawPixels,
        flip_vertically: bool,
    ) -> Result<(), ImageError>;
}
