//! Drives one generation advance: NeighborhoodView + RuleEngine for every
//! cell, the motion write-through convention, and the current/next commit.
//!
//! Concurrency (SPEC_FULL.md §6): the per-cell rule pass runs in a `rayon`
//! compute phase that only reads the grid's `current` buffer and returns a
//! `(coord, new_coord, new_value)` triple per cell, and never writes `next`
//! directly. A sequential commit phase then applies those triples, in
//! ascending focus-cell index order, to `next`. That makes the documented
//! "last write wins" behavior on a motion collision a concrete, reproducible
//! rule instead of a data race, and gives the error-cancellation contract in
//! §5 for free: if any cell's rule errors, `collect` short-circuits before
//! the commit phase runs, so nothing is written and the grid stays on its
//! pre-step generation.

use rayon::prelude::*;

use crate::cell::Cell;
use crate::error::EngineResult;
use crate::geometry::Coord;
use crate::grid::Grid;
use crate::neighborhood::{GeometryConfig, NeighborhoodView};
use crate::rule::{self, CustomRule, RuleSelect};

/// Advance `grid` by exactly one generation.
pub fn step<T: Cell>(
    grid: &mut Grid<T>,
    geometry: GeometryConfig,
    rule_select: RuleSelect,
    num_states: i64,
    custom: Option<&dyn CustomRule<T>>,
) -> EngineResult<()> {
    let shape = grid.shape();
    let n = shape.len();
    let grid_ref: &Grid<T> = grid;

    let results: Vec<(Coord, T)> = (0..n)
        .into_par_iter()
        .map(|index| -> EngineResult<(Coord, T)> {
            let coord = shape.to_coord(index);
            let view = NeighborhoodView::new(grid_ref, geometry);
            if view.is_frozen(&coord) {
                return Ok((coord, grid_ref.get(&coord)));
            }
            let neighbors = view.neighbors(&coord);
            let focus = grid_ref.get(&coord);
            rule::apply(rule_select, coord, focus, &neighbors, num_states, custom)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    grid.reset_next_to_default();
    for (new_coord, new_value) in results {
        if new_value != T::default() {
            grid.set_next(&new_coord, new_value);
        }
    }
    grid.swap();
    Ok(())
}
