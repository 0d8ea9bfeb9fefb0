//! Tessel: owned dynamic arrays, grids and floating-point images.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let mut grid = Grid::from_elem(3, 5, 5);
//! grid.fill(69);
//! grid.assign(4, 4, 3);
//! grid.resize(3, 3);
//! grid.resize(4, 4);
//! assert_eq!(grid[(2, 2)], 3);
//! assert_eq!(grid[(3, 3)], 0);
//!
//! let mut seq = sequence![1, 2, 3];
//! seq.resize(5);
//! assert_eq!(seq.as_slice(), &[1, 2, 3, 0, 0]);
//!
//! let mut sampler = Sampler::seeded(42);
//! let colour: Vec3 = sampler.real3_uniform(0.0, 1.0);
//! let mut image = Image::with_size(1, 1);
//! image[(0, 0)] = colour;
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`containers`] | `tessel-core` | `Sequence`, `Grid`, component vectors |
//! | [`image`] | `tessel-image` | `Image`, codecs, `ImageError` |
//! | [`support`] | `tessel-support` | `Sampler`, `Timer`, `to_bits` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Containers and vector types (`tessel-core`).
pub use tessel_core as containers;

/// Images and codecs (`tessel-image`).
pub use tessel_image as image;

/// Random sampling, timing and bit inspection (`tessel-support`).
pub use tessel_support as support;

pub use tessel_core::sequence;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use tessel_core::{sequence, Grid, Sequence};

    // Vectors
    pub use tessel_core::{IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};
    pub use tessel_core::{Vector2, Vector3, Vector4};

    // Images
    pub use tessel_image::{Image, ImageCodec, ImageError, PngCodec, RawPixels};

    // Support
    pub use tessel_support::{to_bits, Sampler, SamplerConfig, Timer};
}
