//! Test utilities and mock collaborators for Tessel development.
//!
//! Provides a drop-counting element type ([`tracked::Tracked`]) for proving
//! exactly-once release, an in-memory [`MockCodec`] standing in for file
//! formats, and small grid/image fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod mock_codec;
pub mod tracked;

pub use fixtures::{counting_grid, gradient_image};
pub use mock_codec::MockCodec;
pub use tracked::Tracked;
