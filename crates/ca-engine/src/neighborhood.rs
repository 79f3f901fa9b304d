//! For a focus cell, produces the ordered sequence of neighboring cell
//! values under the active boundary policy and neighborhood shape.
//!
//! A view borrows a `Grid`'s current buffer read-only; it owns no cells of
//! its own and performs no fallible operations, it is a logical iterator,
//! per SPEC_FULL.md §4.

use crate::cell::Cell;
use crate::geometry::{enumerate_offsets, wrap, Boundary, Coord, NeighborhoodShape};
use crate::grid::Grid;

/// The geometry half of the engine's configuration: shape, boundary, radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryConfig {
    pub shape: NeighborhoodShape,
    pub boundary: Boundary,
    pub radius: i64,
}

/// A read-only view over a grid's current buffer for one (shape, boundary,
/// radius) configuration.
pub struct NeighborhoodView<'a, T: Cell> {
    grid: &'a Grid<T>,
    config: GeometryConfig,
}

impl<'a, T: Cell> NeighborhoodView<'a, T> {
    pub fn new(grid: &'a Grid<T>, config: GeometryConfig) -> Self {
        Self { grid, config }
    }

    /// True under a Walled boundary when `coord` lies on the boundary of any
    /// active axis (index `0` or `dims[axis] - 1`).
    pub fn is_frozen(&self, coord: &Coord) -> bool {
        if self.config.boundary != Boundary::Walled {
            return false;
        }
        let shape = self.grid.shape();
        (0..shape.rank).any(|axis| {
            let c = coord[axis];
            c == 0 || c == shape.dims[axis] as i64 - 1
        })
    }

    /// Canonical-order neighbor values (focus cell included, per the
    /// enumeration conventions in `geometry`). Under CutOff (and Walled's
    /// non-frozen interior), neighbors outside `[0, dims[axis])` on any axis
    /// are simply omitted, so the returned sequence can be shorter near
    /// borders.
    pub fn neighbors(&self, coord: &Coord) -> Vec<T> {
        let shape = self.grid.shape();
        let rank = shape.rank;
        let offsets = enumerate_offsets(rank, self.config.radius, self.config.shape);
        let mut out = Vec::with_capacity(offsets.len());
        match self.config.boundary {
            Boundary::Periodic => {
                for off in &offsets {
                    let mut wrapped: Coord = [0; 3];
                    for axis in 0..rank {
                        wrapped[axis] = wrap(coord[axis], off[axis], shape.dims[axis]);
                    }
                    out.push(self.grid.get(&wrapped));
                }
            }
            Boundary::Walled | Boundary::CutOff => {
                for off in &offsets {
                    let mut candidate: Coord = [0; 3];
                    let mut in_bounds = true;
                    for axis in 0..rank {
                        let c = coord[axis] + off[axis];
                        if c < 0 || c >= shape.dims[axis] as i64 {
                            in_bounds = false;
                            break;
                        }
                        candidate[axis] = c;
                    }
                    if in_bounds {
                        out.push(self.grid.get(&candidate));
                    }
                }
            }
        }
        out
    }
}
