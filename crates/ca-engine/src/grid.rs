//! Double-buffered cell storage: a flat `current` buffer and a flat `next`
//! buffer of identical shape, swapped by exchanging `Vec` descriptors (O(1))
//! rather than copying elements.
//!
//! This departs from the source's element-wise swap (see SPEC_FULL.md §3) in
//! favor of `std::mem::swap`, which the §9 design notes explicitly license.

use crate::cell::Cell;
use crate::geometry::{Coord, Shape};

/// Owns both cell buffers for the engine's lifetime.
pub struct Grid<T: Cell> {
    shape: Shape,
    current: Vec<T>,
    next: Vec<T>,
}

impl<T: Cell> Grid<T> {
    /// Allocate both buffers, filled with `fill`.
    pub fn new(shape: Shape, fill: T) -> Self {
        let len = shape.len();
        Self {
            shape,
            current: vec![fill; len],
            next: vec![fill; len],
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn get(&self, coord: &Coord) -> T {
        self.current[self.shape.to_index(coord)]
    }

    #[inline]
    pub fn current_slice(&self) -> &[T] {
        &self.current
    }

    /// Mutable access into `current`, for seeding (`Engine::init_condition`).
    /// Not used mid-step: the rule pass only reads `current` through `get`.
    #[inline]
    pub fn current_mut(&mut self, coord: &Coord) -> &mut T {
        let index = self.shape.to_index(coord);
        &mut self.current[index]
    }

    #[inline]
    pub fn set_next(&mut self, coord: &Coord, cell: T) {
        let index = self.shape.to_index(coord);
        self.next[index] = cell;
    }

    /// Reset `next` to the default ("empty") cell value. Required before each
    /// step's compute phase so unoccupied destinations stay empty and motion
    /// collisions are detectable.
    pub fn reset_next_to_default(&mut self) {
        self.next.fill(T::default());
    }

    /// Exchange `current` and `next`. After this, the post-swap `current`
    /// equals the pre-swap `next` and vice versa; both buffers remain
    /// allocated and distinct.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
