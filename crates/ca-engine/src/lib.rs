//! A generic 1D/2D/3D cellular-automata engine: Moore/Von Neumann
//! neighborhoods, Periodic/Walled/CutOff boundaries, and
//! Parity/Majority/Custom transition rules over any cell type satisfying
//! [`Cell`].
//!
//! No logging dependency lives here by design (SPEC_FULL.md §9): this crate
//! returns `Result`s and leaves presentation, tracing, CLI, config file
//! parsing, to callers such as `galaxy-cli`.

mod cell;
mod engine;
mod error;
mod geometry;
mod grid;
mod neighborhood;
mod rule;
mod stepper;

pub use cell::{Cell, IntCell};
pub use engine::{Config, Engine};
pub use error::{EngineError, EngineResult, ErrorCode};
pub use geometry::{Boundary, Coord, NeighborhoodShape, Shape};
pub use neighborhood::{GeometryConfig, NeighborhoodView};
pub use rule::{CustomRule, RuleSelect};
