//! Floating-point RGB images for Tessel.
//!
//! An [`Image`] owns a [`Grid`](tessel_core::Grid) of linear RGB
//! [`Vec3`](tessel_core::Vec3) pixels with channels in `[0, 1]`, plus the
//! vertical-flip flag it was loaded with so that writing mirrors the load
//! orientation.
//!
//! File formats are handled by an [`ImageCodec`]: the image converts
//! between floats and 8-bit RGB, and the codec moves those bytes to and from
//! disk. [`PngCodec`] is the stock implementation, backed by the `image`
//! crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod png;
pub mod rgb_image;

pub use codec::{ImageCodec, RawPixels, CHANNELS};
pub use error::ImageError;
pub use png::PngCodec;
pub use rgb_image::Image;
