//! Drop-counting element type.
//!
//! Counters are thread-local, so each `#[test]` (which runs on its own
//! thread) sees its own totals. Call [`reset`] at the start of a test.

use std::cell::Cell;

thread_local! {
    static CREATED: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
}

/// An `i32` that records every construction and drop.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked(pub i32);

impl Tracked {
    pub fn new(value: i32) -> Self {
        CREATED.with(|c| c.set(c.get() + 1));
        Self(value)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DROPPED.with(|c| c.set(c.get() + 1));
    }
}

/// Zero both counters for the current thread.
pub fn reset() {
    CREATED.with(|c| c.set(0));
    DROPPED.with(|c| c.set(0));
}

/// Values constructed on this thread since the last [`reset`].
pub fn created() -> usize {
    CREATED.with(Cell::get)
}

/// Values dropped on this thread since the last [`reset`].
pub fn dropped() -> usize {
    DROPPED.with(Cell::get)
}

/// Values still alive. Negative means something was dropped twice.
pub fn live() -> isize {
    created() as isize - dropped() as isize
}
