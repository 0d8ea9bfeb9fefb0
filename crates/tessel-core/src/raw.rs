//! Unchecked element access.
//!
//! Every function here skips range validation. Callers must keep indices in
//! bounds; out-of-range access is undefined behaviour. Debug builds still
//! assert the bounds so test suites catch misuse.

#![allow(unsafe_code)]

use crate::grid::Grid;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Sequence::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: the caller guarantees `index < self.data.len()`.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Sequence::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: the caller guarantees `index < self.data.len()`.
        unsafe { self.data.get_unchecked_mut(index) }
    }
}

impl<T> Grid<T> {
    /// Row `row` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than [`height()`](Grid::height).
    pub unsafe fn row_unchecked(&self, row: usize) -> &Sequence<T> {
        // SAFETY: `rows.len() == height`, and the caller guarantees `row < height`.
        unsafe { self.rows.get_unchecked(row) }
    }

    /// Row `row` as a mutable slice without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than [`height()`](Grid::height).
    pub unsafe fn row_unchecked_mut(&mut self, row: usize) -> &mut [T] {
        // SAFETY: `rows.len() == height`, and the caller guarantees `row < height`.
        unsafe { self.rows.get_unchecked_mut(row) }.as_mut_slice()
    }

    /// Cell `(row, col)` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than [`height()`](Grid::height) and `col` less than
    /// [`width()`](Grid::width).
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        // SAFETY: every row holds exactly `width` cells, and the caller
        // guarantees `row < height` and `col < width`.
        unsafe { self.rows.get_unchecked(row).get_unchecked(col) }
    }

    /// Mutable cell `(row, col)` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than [`height()`](Grid::height) and `col` less than
    /// [`width()`](Grid::width).
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        // SAFETY: as for `get_unchecked`.
        unsafe { self.rows.get_unchecked_mut(row).get_unchecked_mut(col) }
    }
}
