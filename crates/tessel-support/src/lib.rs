//! Support collaborators for Tessel programs.
//!
//! - [`random`]: uniform sampling of scalars and [`Vector2`]/[`Vector3`]/
//!   [`Vector4`] over closed ranges, with a process-wide shared engine.
//! - [`timer`]: a pausable wall-clock stopwatch.
//! - [`bits`]: render a primitive's raw bit pattern as a string.
//!
//! [`Vector2`]: tessel_core::Vector2
//! [`Vector3`]: tessel_core::Vector3
//! [`Vector4`]: tessel_core::Vector4

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod config;
pub mod random;
pub mod timer;

pub use bits::{to_bits, BitPattern};
pub use config::SamplerConfig;
pub use random::{Sampler, UniformInt, UniformReal};
pub use timer::Timer;
