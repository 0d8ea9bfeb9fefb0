//! Owned, contiguous, resizable 1D buffer.
//!
//! A [`Sequence`] is a single `Box<[T]>`: exactly `len` live elements, no
//! spare capacity, and no allocation at all when empty. Unlike `Vec`, it has
//! no push/pop; it only changes length through [`resize`](Sequence::resize)
//! and [`assign`](Sequence::assign), both of which replace the buffer with
//! one of exactly the new length.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::CapacityError;

/// Build a [`Sequence`] from a literal list, like `vec!`.
///
/// ```
/// use tessel_core::{sequence, Sequence};
///
/// let a: Sequence<i32> = sequence![];
/// let b = sequence![1, 2, 3];
/// let c = sequence![0u8; 4];
/// assert!(a.is_empty());
/// assert_eq!(b.as_slice(), &[1, 2, 3]);
/// assert_eq!(c.len(), 4);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}

/// Owned, contiguous buffer of `T` with deep-copy value semantics.
#[derive(PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    /// Exactly `len` live elements. Empty boxes do not allocate.
    pub(crate) data: Box<[T]>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence. Does not allocate.
    pub fn new() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Create a sequence of `len` default-valued elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            data: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Create a sequence of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; len].into_boxed_slice(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the sequence holds no elements (and therefore no buffer).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared reference to the element at `index`, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable reference to the element at `index`, or `None` out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    ///
    /// The slice cannot change the sequence's length.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first element.
    ///
    /// Dangling (but non-null and aligned) when the sequence is empty.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterate over shared references in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over mutable references in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consume the sequence, returning its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Resize to `new_len` elements.
    ///
    /// Elements below `min(len, new_len)` keep their values, elements from
    /// the old length up to `new_len` are `T::default()`, and elements at or
    /// beyond `new_len` are dropped. Resizing to zero releases the buffer;
    /// the result is equal to [`Sequence::new`].
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len == self.len() {
            return;
        }
        if new_len == 0 {
            self.data = Box::default();
            return;
        }
        self.rebuild(Vec::with_capacity(new_len), new_len);
    }

    /// Like [`resize`](Self::resize), but reports allocation failure instead
    /// of aborting. On error the sequence is left unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), CapacityError>
    where
        T: Default,
    {
        if new_len == self.len() || new_len == 0 {
            self.resize(new_len);
            return Ok(());
        }
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(new_len)
            .map_err(|_| CapacityError::new::<T>(new_len))?;
        self.rebuild(buffer, new_len);
        Ok(())
    }

    /// Move the surviving prefix into `buffer`, default-fill the tail and
    /// adopt `buffer` as the new storage. `buffer` must be empty with
    /// capacity for `new_len`.
    fn rebuild(&mut self, mut buffer: Vec<T>, new_len: usize)
    where
        T: Default,
    {
        let old = std::mem::take(&mut self.data).into_vec();
        buffer.extend(old.into_iter().take(new_len));
        buffer.resize_with(new_len, T::default);
        self.data = buffer.into_boxed_slice();
    }

    /// Replace the contents with `new_len` clones of `value`.
    ///
    /// Prior contents are discarded regardless of the old length.
    pub fn assign(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len == self.len() {
            self.fill(value);
        } else {
            self.data = vec![value; new_len].into_boxed_slice();
        }
    }

    /// Overwrite every element with `value`. The length is unchanged.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Copy-assign from `source`, reusing the buffer when lengths match.
    fn clone_from(&mut self, source: &Self) {
        if self.len() == source.len() {
            self.data.clone_from_slice(&source.data);
        } else {
            *self = source.clone();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: Vec::from(values).into_boxed_slice(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Self {
            data: values.into(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
