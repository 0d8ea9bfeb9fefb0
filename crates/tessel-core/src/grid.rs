//! Row-major 2D array built from per-row [`Sequence`]s.
//!
//! A [`Grid`] owns a `Sequence<Sequence<T>>`. Every mutating operation
//! leaves every row exactly [`width()`](Grid::width) long. Mutable row
//! access hands out `&mut [T]` rather than `&mut Sequence<T>` so callers
//! cannot change one row's length.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::sequence::Sequence;

/// Owned 2D array with a uniform row width.
#[derive(PartialEq, Eq, Hash)]
pub struct Grid<T> {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) rows: Sequence<Sequence<T>>,
}

impl<T> Grid<T> {
    /// Create an empty `0 × 0` grid. Does not allocate.
    pub fn new() -> Self {
        Self {
            height: 0,
            width: 0,
            rows: Sequence::new(),
        }
    }

    /// Create a `height × width` grid of default-valued cells.
    pub fn with_size(height: usize, width: usize) -> Self
    where
        T: Default,
    {
        let mut rows: Sequence<Sequence<T>> = Sequence::with_len(height);
        for row in &mut rows {
            row.resize(width);
        }
        Self {
            height,
            width,
            rows,
        }
    }

    /// Create a `height × width` grid with every cell set to `value`.
    pub fn from_elem(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        let rows = (0..height)
            .map(|_| Sequence::from_elem(width, value.clone()))
            .collect();
        Self {
            height,
            width,
            rows,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// True if the grid has no rows or no columns.
    ///
    /// A grid with rows of width zero is empty even though it holds rows.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Cell `(row, col)`, or `None` out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Mutable cell `(row, col)`, or `None` out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Row `row`, or `None` out of range.
    pub fn row(&self, row: usize) -> Option<&Sequence<T>> {
        self.rows.get(row)
    }

    /// Row `row` as a mutable slice, or `None` out of range.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        self.rows.get_mut(row).map(Sequence::as_mut_slice)
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> std::slice::Iter<'_, Sequence<T>> {
        self.rows.iter()
    }

    /// Iterate over rows in order as mutable slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.rows.iter_mut().map(Sequence::as_mut_slice)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flat_map(Sequence::iter)
    }

    /// Iterate mutably over every cell in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut().flat_map(Sequence::iter_mut)
    }

    /// Reshape to `new_height × new_width`.
    ///
    /// The row container is resized first; rows it adds start empty. Every
    /// row, old and new, is then resized to `new_width`. Existing cells
    /// inside the new shape keep their values and all other cells are
    /// `T::default()`.
    pub fn resize(&mut self, new_height: usize, new_width: usize)
    where
        T: Default,
    {
        self.height = new_height;
        self.width = new_width;
        self.rows.resize(new_height);
        for row in &mut self.rows {
            row.resize(new_width);
        }
        self.debug_check_shape();
    }

    /// Overwrite every existing cell with `value`. The shape is unchanged.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for row in &mut self.rows {
            row.fill(value.clone());
        }
    }

    /// Reshape to `new_height × new_width` with every cell set to `value`,
    /// regardless of prior shape or content.
    pub fn assign(&mut self, new_height: usize, new_width: usize, value: T)
    where
        T: Clone,
    {
        self.height = new_height;
        self.width = new_width;
        // Rows added here start empty; `Sequence<T>: Default` holds for any `T`.
        self.rows.resize(new_height);
        for row in &mut self.rows {
            row.assign(new_width, value.clone());
        }
        self.debug_check_shape();
    }

    fn debug_check_shape(&self) {
        debug_assert_eq!(self.rows.len(), self.height);
        debug_assert!(self.rows.iter().all(|r| r.len() == self.width));
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.height = source.height;
        self.width = source.width;
        self.rows.clone_from(&source.rows);
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("rows", &self.rows)
            .finish()
    }
}

/// One line per row, cells separated by a single space.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `row >= height()` or `col >= width()`.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = Sequence<T>;

    /// # Panics
    ///
    /// Panics if `row >= height()`.
    fn index(&self, row: usize) -> &Sequence<T> {
        &self.rows[row]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Sequence<T>;
    type IntoIter = std::slice::Iter<'a, Sequence<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessel_test_utils::tracked::{self, Tracked};

    fn assert_shape<T>(g: &Grid<T>, height: usize, width: usize) {
        assert_eq!(g.height(), height);
        assert_eq!(g.width(), width);
        assert_eq!(g.rows().count(), height);
        assert!(g.rows().all(|r| r.len() == width));
    }

    fn all_equal<T: PartialEq>(g: &Grid<T>, value: &T) -> bool {
        g.cells().all(|c| c == value)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let g: Grid<i32> = Grid::new();
        assert_shape(&g, 0, 0);
        assert!(g.is_empty());
        assert_eq!(g, Grid::default());
    }

    #[test]
    fn with_size_default_fills() {
        let g: Grid<i32> = Grid::with_size(5, 3);
        assert_shape(&g, 5, 3);
        assert!(all_equal(&g, &0));
        assert_eq!(g.cell_count(), 15);
    }

    #[test]
    fn from_elem_fills() {
        let g = Grid::from_elem(3, 5, 5);
        assert_shape(&g, 3, 5);
        assert!(all_equal(&g, &5));
    }

    #[test]
    fn emptiness_is_any_zero_dimension() {
        assert!(Grid::<u8>::with_size(0, 5).is_empty());
        assert!(Grid::<u8>::with_size(5, 0).is_empty());
        assert!(Grid::<u8>::with_size(0, 0).is_empty());
        assert!(!Grid::<u8>::with_size(2, 2).is_empty());
    }

    #[test]
    fn zero_width_grid_keeps_rows() {
        let g: Grid<u8> = Grid::with_size(4, 0);
        assert_eq!(g.rows().count(), 4);
        assert!(g.rows().all(Sequence::is_empty));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn index_and_get_agree() {
        let mut g: Grid<i32> = Grid::with_size(2, 3);
        g[(1, 2)] = 7;
        assert_eq!(g.get(1, 2), Some(&7));
        assert_eq!(g[1][2], 7);
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
        *g.get_mut(0, 0).unwrap() = 1;
        assert_eq!(g.row(0).unwrap().as_slice(), &[1, 0, 0]);
    }

    #[test]
    fn row_mut_cannot_change_width() {
        let mut g = Grid::from_elem(2, 2, 1);
        let row = g.row_mut(1).unwrap();
        row[0] = 3;
        assert_eq!(row.len(), 2);
        assert!(g.row_mut(2).is_none());
        assert_eq!(g[(1, 0)], 3);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let g: Grid<i32> = Grid::with_size(2, 2);
        let _ = g[(0, 2)];
    }

    #[test]
    fn rows_iterate_in_order() {
        let mut g: Grid<usize> = Grid::with_size(3, 2);
        for (i, row) in g.rows_mut().enumerate() {
            row.fill(i);
        }
        let firsts: Vec<usize> = (&g).into_iter().map(|r| r[0]).collect();
        assert_eq!(firsts, vec![0, 1, 2]);
        for c in g.cells_mut() {
            *c += 1;
        }
        assert_eq!(g.cells().copied().collect::<Vec<_>>(), vec![1, 1, 2, 2, 3, 3]);
    }

    // ── Mutators ────────────────────────────────────────────────

    #[test]
    fn resize_keeps_overlap_and_defaults_rest() {
        let mut g: Grid<i32> = Grid::with_size(2, 2);
        g[(0, 0)] = 1;
        g[(0, 1)] = 2;
        g[(1, 0)] = 3;
        g[(1, 1)] = 4;
        g.resize(3, 3);
        assert_shape(&g, 3, 3);
        assert_eq!(g.to_string(), "1 2 0\n3 4 0\n0 0 0\n");
        g.resize(1, 1);
        assert_eq!(g.to_string(), "1\n");
    }

    #[test]
    fn resize_to_zero_height_keeps_width() {
        let mut g = Grid::from_elem(3, 3, 1);
        g.resize(0, 4);
        assert_shape(&g, 0, 4);
        assert!(g.is_empty());
    }

    #[test]
    fn fill_keeps_shape() {
        let mut g = Grid::from_elem(3, 5, 5);
        g.fill(69);
        assert_shape(&g, 3, 5);
        assert!(all_equal(&g, &69));
    }

    #[test]
    fn assign_overrides_shape_and_content() {
        let mut g = Grid::from_elem(3, 5, 5);
        g.assign(2, 2, 0);
        assert_shape(&g, 2, 2);
        assert!(all_equal(&g, &0));
        g.assign(4, 4, 3);
        assert_shape(&g, 4, 4);
        assert!(all_equal(&g, &3));
    }

    #[test]
    fn reference_walkthrough() {
        let mut g = Grid::from_elem(3, 5, 5);
        assert!(all_equal(&g, &5));
        g.fill(69);
        assert_shape(&g, 3, 5);
        assert!(all_equal(&g, &69));
        g.assign(2, 2, 0);
        assert_shape(&g, 2, 2);
        assert!(all_equal(&g, &0));
        g.assign(4, 4, 3);
        assert_shape(&g, 4, 4);
        assert!(all_equal(&g, &3));
        g.resize(3, 3);
        assert_shape(&g, 3, 3);
        assert!(all_equal(&g, &3));
        g.resize(4, 4);
        assert_shape(&g, 4, 4);
        assert_eq!(g.to_string(), "3 3 3 0\n3 3 3 0\n3 3 3 0\n0 0 0 0\n");
    }

    #[test]
    fn clone_is_deep() {
        let original = Grid::from_elem(2, 2, 1);
        let mut copy = original.clone();
        copy[(0, 0)] = 5;
        assert_eq!(original[(0, 0)], 1);

        let mut target = Grid::from_elem(4, 1, 0);
        target.clone_from(&original);
        assert_eq!(target, original);
    }

    #[test]
    fn display_empty_grid_renders_nothing() {
        assert_eq!(Grid::<u8>::new().to_string(), "");
    }

    #[test]
    fn every_cell_dropped_exactly_once() {
        tracked::reset();
        {
            let mut g: Grid<Tracked> = Grid::with_size(3, 3);
            g.resize(5, 2);
            g.assign(2, 4, Tracked::new(1));
            g.fill(Tracked::new(2));
            let copy = g.clone();
            g.resize(0, 0);
            g.clone_from(&copy);
        }
        assert_eq!(tracked::live(), 0);
        assert_eq!(tracked::created(), tracked::dropped());
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_grid() -> impl Strategy<Value = Grid<i32>> {
        (0usize..8, 0usize..8).prop_flat_map(|(h, w)| {
            proptest::collection::vec(any::<i32>(), h * w).prop_map(move |cells| {
                let mut g = Grid::with_size(h, w);
                for (dst, src) in g.cells_mut().zip(cells) {
                    *dst = src;
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn resize_upholds_shape_and_overlap(g in arb_grid(), h in 0usize..10, w in 0usize..10) {
            let before = g.clone();
            let mut g = g;
            g.resize(h, w);
            prop_assert_eq!(g.height(), h);
            prop_assert_eq!(g.width(), w);
            prop_assert!(g.rows().all(|r| r.len() == w));
            for r in 0..h {
                for c in 0..w {
                    let expected = before.get(r, c).copied().unwrap_or_default();
                    prop_assert_eq!(g[(r, c)], expected);
                }
            }
        }

        #[test]
        fn assign_matches_resize_then_fill(g in arb_grid(), h in 0usize..10, w in 0usize..10, v in any::<i32>()) {
            let mut assigned = g.clone();
            assigned.assign(h, w, v);
            let mut filled = g;
            filled.resize(h, w);
            filled.fill(v);
            prop_assert_eq!(assigned, filled);
        }

        #[test]
        fn fill_preserves_shape(g in arb_grid(), v in any::<i32>()) {
            let (h, w) = (g.height(), g.width());
            let mut g = g;
            g.fill(v);
            prop_assert_eq!((g.height(), g.width()), (h, w));
            prop_assert!(g.cells().all(|&c| c == v));
        }
    }
}
