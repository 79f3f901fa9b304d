//! Applies one of {Parity, Majority, Custom} to a neighborhood to produce the
//! focus cell's next-generation value (and, for Custom rules, a possibly
//! relocated coordinate).

use crate::cell::Cell;
use crate::error::{EngineError, EngineResult, ErrorCode};
use crate::geometry::Coord;

/// Which rule a step applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSelect {
    Parity,
    Majority,
    Custom,
}

impl Default for RuleSelect {
    fn default() -> Self {
        Self::Majority
    }
}

/// A user-supplied transition rule. May relocate the focus cell by writing a
/// new value into `coord`.
///
/// Context the rule needs (the redesign note in SPEC_FULL.md §5 drops the
/// source's process-wide statics) is expected to be captured by the
/// implementer: a closure's environment, or fields on a small struct that
/// implements this trait directly.
pub trait CustomRule<T: Cell>: Send + Sync {
    fn apply(&self, coord: &mut Coord, neighbors: &[T], focus: &mut T);
}

impl<T, F> CustomRule<T> for F
where
    T: Cell,
    F: Fn(&mut Coord, &[T], &mut T) + Send + Sync,
{
    fn apply(&self, coord: &mut Coord, neighbors: &[T], focus: &mut T) {
        self(coord, neighbors, focus)
    }
}

/// Apply `select` to one focus cell, returning the (possibly relocated)
/// coordinate and the value to write into `next`.
pub fn apply<T: Cell>(
    select: RuleSelect,
    coord: Coord,
    focus: T,
    neighbors: &[T],
    num_states: i64,
    custom: Option<&dyn CustomRule<T>>,
) -> EngineResult<(Coord, T)> {
    match select {
        RuleSelect::Parity => {
            let sum: i64 = neighbors.iter().map(|c| c.state()).sum();
            let mut new_cell = T::default();
            new_cell.set_state(sum.rem_euclid(num_states));
            Ok((coord, new_cell))
        }
        RuleSelect::Majority => {
            let mut counts = vec![0usize; num_states.max(0) as usize];
            for n in neighbors {
                let s = n.state();
                if s >= 0 && s < num_states {
                    counts[s as usize] += 1;
                }
            }
            let mut best_state = 0i64;
            let mut best_count = 0usize;
            for (state, count) in counts.into_iter().enumerate() {
                if count > best_count {
                    best_count = count;
                    best_state = state as i64;
                }
            }
            let mut new_cell = T::default();
            new_cell.set_state(best_state);
            Ok((coord, new_cell))
        }
        RuleSelect::Custom => {
            let rule = custom.ok_or_else(|| EngineError::code(ErrorCode::CustomRuleMissing))?;
            let mut new_coord = coord;
            let mut new_cell = focus;
            rule.apply(&mut new_coord, neighbors, &mut new_cell);
            Ok((new_coord, new_cell))
        }
    }
}
