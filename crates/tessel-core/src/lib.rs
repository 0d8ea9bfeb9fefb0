//! Owned dynamic arrays for Tessel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two container primitives the rest of the workspace is built on:
//!
//! ```text
//! Grid<T>
//! └── Sequence<Sequence<T>>   (row-major, every row exactly `width` long)
//!     └── Sequence<T>         (one Box<[T]>, exactly `len` elements)
//! ```
//!
//! # Value semantics
//!
//! Every copy is deep: cloning a [`Sequence`] or [`Grid`] allocates a new
//! buffer and clones element-wise. Resizing keeps the overlapping prefix,
//! default-fills any newly exposed tail and drops the rest. Shrinking to
//! zero releases the buffer entirely, leaving a value equal to `new()`.
//!
//! # Checked and unchecked access
//!
//! `get`/`get_mut` return `Option`, `Index`/`IndexMut` panic out of range,
//! and `get_unchecked`/`get_unchecked_mut` perform no range validation at
//! all. The unchecked accessors live in the private `raw` module, the only
//! module in this crate allowed to contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod grid;
mod raw;
pub mod sequence;
pub mod vector;

pub use error::CapacityError;
pub use grid::Grid;
pub use sequence::Sequence;
pub use vector::{IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};
pub use vector::{Vector2, Vector3, Vector4};
