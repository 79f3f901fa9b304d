//! Configuration object and public operations: dimension setup, boundary
//! setup, rule setup, initial seeding, step, inspection.
//!
//! State machine (SPEC_FULL.md §7): `Unconfigured -> Shaped` (via
//! `set_dimensions_*`) `-> Seeded` (via `init_condition`) `-> Advancing` (via
//! `step`). Setters other than dimensions may be called in any state.
//! Failed calls leave the engine in its prior state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cell::Cell;
use crate::error::{EngineError, EngineResult, ErrorCode};
use crate::geometry::{Boundary, NeighborhoodShape, Shape};
use crate::grid::Grid;
use crate::neighborhood::GeometryConfig;
use crate::rule::{CustomRule, RuleSelect};
use crate::stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineState {
    Unconfigured,
    Shaped,
    Seeded,
    Advancing,
}

/// Engine configuration: neighborhood shape, boundary policy and radius,
/// state count, and rule selection.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub neighborhood: NeighborhoodShape,
    pub boundary: Boundary,
    pub radius: i64,
    pub num_states: i64,
    pub rule: RuleSelect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neighborhood: NeighborhoodShape::default(),
            boundary: Boundary::default(),
            radius: 1,
            num_states: 2,
            rule: RuleSelect::default(),
        }
    }
}

/// The CA engine façade. Owns both cell buffers (via `Grid`) for its
/// lifetime; dimensions are set exactly once.
pub struct Engine<T: Cell> {
    config: Config,
    grid: Option<Grid<T>>,
    state: EngineState,
    steps_taken: u64,
}

impl<T: Cell> Default for Engine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cell> Engine<T> {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            grid: None,
            state: EngineState::Unconfigured,
            steps_taken: 0,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn shape(&self) -> Option<Shape> {
        self.grid.as_ref().map(Grid::shape)
    }

    /// Read a cell's current value, for inspection between steps.
    pub fn get(&self, coord: &crate::geometry::Coord) -> Option<T> {
        self.grid.as_ref().map(|grid| grid.get(coord))
    }

    pub fn set_neighborhood(&mut self, shape: NeighborhoodShape) {
        self.config.neighborhood = shape;
    }

    /// Fails with `InvalidRadius` if `radius <= 0`; fails with
    /// `RadiusTooLarge` if `radius` exceeds `floor(dims[axis] / 2)` on any
    /// active axis, once dimensions are configured.
    pub fn set_boundary(&mut self, boundary: Boundary, radius: i64) -> EngineResult<()> {
        if radius <= 0 {
            return Err(EngineError::code(ErrorCode::InvalidRadius));
        }
        if let Some(grid) = &self.grid {
            Self::validate_radius(radius, grid.shape())?;
        }
        self.config.boundary = boundary;
        self.config.radius = radius;
        Ok(())
    }

    fn validate_radius(radius: i64, shape: Shape) -> EngineResult<()> {
        for axis in 0..shape.rank {
            if radius > (shape.dims[axis] / 2) as i64 {
                return Err(EngineError::new(
                    ErrorCode::RadiusTooLarge,
                    format!(
                        "radius {radius} exceeds floor(dims[{axis}]/2) = {}",
                        shape.dims[axis] / 2
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn set_num_states(&mut self, n: i64) -> EngineResult<()> {
        if n < 2 {
            return Err(EngineError::code(ErrorCode::InvalidNumStates));
        }
        self.config.num_states = n;
        Ok(())
    }

    /// Always succeeds; a Custom rule function is not required until `step`.
    pub fn set_rule(&mut self, rule: RuleSelect) {
        self.config.rule = rule;
    }

    fn set_dimensions(&mut self, rank: usize, dims: [usize; 3], fill: T) -> EngineResult<()> {
        if self.grid.is_some() {
            return Err(EngineError::code(ErrorCode::AlreadyInitialized));
        }
        let shape = Shape::new(rank, dims);
        if shape.is_empty() {
            return Err(EngineError::new(ErrorCode::AllocationFailed, "a dimension is zero"));
        }
        Self::validate_radius(self.config.radius, shape)?;
        self.grid = Some(Grid::new(shape, fill));
        self.state = EngineState::Shaped;
        Ok(())
    }

    pub fn set_dimensions_1d(&mut self, d1: usize, fill: T) -> EngineResult<()> {
        self.set_dimensions(1, [d1, 1, 1], fill)
    }

    pub fn set_dimensions_2d(&mut self, d1: usize, d2: usize, fill: T) -> EngineResult<()> {
        self.set_dimensions(2, [d1, d2, 1], fill)
    }

    pub fn set_dimensions_3d(&mut self, d1: usize, d2: usize, d3: usize, fill: T) -> EngineResult<()> {
        self.set_dimensions(3, [d1, d2, d3], fill)
    }

    /// Independently samples a uniform `[0,1)` draw per cell; sets `state :=
    /// state` when the draw is below `density`. Other fields are left as
    /// they were (the default the grid was allocated with).
    ///
    /// `seed`: `None` derives a seed from wall-clock time (the only place
    /// non-determinism enters this engine, by explicit caller choice); `Some`
    /// gives a fully reproducible stream.
    pub fn init_condition(&mut self, state: i64, density: f64, seed: Option<u64>) -> EngineResult<()> {
        if state < 0 || state >= self.config.num_states {
            return Err(EngineError::code(ErrorCode::InvalidStateCondition));
        }
        let grid = self
            .grid
            .as_mut()
            .ok_or_else(|| EngineError::code(ErrorCode::CellsNull))?;
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(time_derived_seed()),
        };
        let shape = grid.shape();
        for index in 0..shape.len() {
            let coord = shape.to_coord(index);
            let draw: f64 = rng.gen();
            if draw < density {
                grid.current_mut(&coord).set_state(state);
            }
        }
        self.state = EngineState::Seeded;
        Ok(())
    }

    /// One generation advance. `custom` is required (and used) only when
    /// `config.rule == RuleSelect::Custom`.
    pub fn step(&mut self, custom: Option<&dyn CustomRule<T>>) -> EngineResult<()> {
        let grid = self
            .grid
            .as_mut()
            .ok_or_else(|| EngineError::code(ErrorCode::CellsNull))?;
        let geometry = GeometryConfig {
            shape: self.config.neighborhood,
            boundary: self.config.boundary,
            radius: self.config.radius,
        };
        stepper::step(grid, geometry, self.config.rule, self.config.num_states, custom)?;
        self.steps_taken += 1;
        self.state = EngineState::Advancing;
        Ok(())
    }

    /// Canonical text rendering (SPEC_FULL.md §6): rank-1 is one
    /// whitespace-separated line; rank-2 is one line per row; rank-3 prints a
    /// `Printing i'th slice of Tensor` header before each rank-2 slice.
    pub fn print_grid(&self, sink: &mut dyn Write) -> std::io::Result<()> {
        let grid = match &self.grid {
            Some(grid) => grid,
            None => return Ok(()),
        };
        let shape = grid.shape();
        match shape.rank {
            1 => {
                let row = axis0_states(grid, shape.dims[0]);
                writeln!(sink, "{}", row.join(" "))?;
            }
            2 => {
                for i in 0..shape.dims[0] {
                    let row = row_states(grid, i as i64, shape.dims[1]);
                    writeln!(sink, "{}", row.join(" "))?;
                }
            }
            3 => {
                for i in 0..shape.dims[0] {
                    writeln!(sink, "Printing {i}'th slice of Tensor")?;
                    for j in 0..shape.dims[1] {
                        let row = row_states_3d(grid, i as i64, j as i64, shape.dims[2]);
                        writeln!(sink, "{}", row.join(" "))?;
                    }
                }
            }
            _ => unreachable!("rank must be 1, 2, or 3"),
        }
        Ok(())
    }

    pub fn error_message(code: ErrorCode) -> &'static str {
        code.message()
    }
}

fn axis0_states<T: Cell>(grid: &Grid<T>, len: usize) -> Vec<String> {
    (0..len)
        .map(|k| grid.get(&[k as i64, 0, 0]).state().to_string())
        .collect()
}

fn row_states<T: Cell>(grid: &Grid<T>, i: i64, len: usize) -> Vec<String> {
    (0..len)
        .map(|j| grid.get(&[i, j as i64, 0]).state().to_string())
        .collect()
}

fn row_states_3d<T: Cell>(grid: &Grid<T>, i: i64, j: i64, len: usize) -> Vec<String> {
    (0..len)
        .map(|k| grid.get(&[i, j, k as i64]).state().to_string())
        .collect()
}

fn time_derived_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
