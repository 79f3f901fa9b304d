//! Cell contract shared by Parity, Majority, and Custom rules.
//!
//! `state` is the only field the built-in rules read or write; Custom rules
//! may read and write whatever else a concrete `Cell` carries.

/// Contract a grid element must satisfy.
///
/// `Send + Sync` is a Rust-native addition over the literal contract: the
/// Stepper parallelizes the per-cell rule pass with `rayon`, so `T` must be
/// safely shareable across worker threads.
pub trait Cell: Default + Copy + PartialEq + Send + Sync {
    fn state(&self) -> i64;
    fn set_state(&mut self, state: i64);
}

/// A trivial integer-only cell, for callers that don't need extra attributes.
///
/// Replaces the source's hand-specialized integer engine: one generic
/// `Engine<T>` suffices once `T = IntCell` satisfies the `Cell` contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntCell(pub i64);

impl Cell for IntCell {
    #[inline]
    fn state(&self) -> i64 {
        self.0
    }

    #[inline]
    fn set_state(&mut self, state: i64) {
        self.0 = state;
    }
}

impl From<i64> for IntCell {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
