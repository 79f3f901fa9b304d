//! The "galaxy" example client: a toy gravity rule driving `ca-engine` over a
//! 3D grid of mass-bearing cells, configured by a short stdin prompt session.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use ca_engine::{Boundary, Cell, Coord, CustomRule, Engine, ErrorCode, NeighborhoodShape, RuleSelect};

/// Overrides for the parts of the run that aren't worth re-asking on every
/// invocation; everything else is still gathered interactively.
#[derive(Parser)]
#[command(name = "galaxy-cli")]
#[command(about = "Toy gravity cellular automaton on top of ca-engine")]
struct Cli {
    /// Fixes the initial-condition RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct GalaxyCell {
    state: i64,
    mass: f64,
}

impl Cell for GalaxyCell {
    fn state(&self) -> i64 {
        self.state
    }

    fn set_state(&mut self, state: i64) {
        self.state = state;
    }
}

/// Moves a non-empty cell toward whichever Moore neighbor (including itself)
/// carries the greatest mass, accumulating mass on arrival. Ties keep the
/// focus cell in place.
struct GalaxyRule {
    radius: i64,
    min_mass: f64,
    max_mass: f64,
    dims: [usize; 3],
}

fn wrap_axis(i: i64, d: usize) -> i64 {
    let d = d as i64;
    ((i % d) + d) % d
}

impl CustomRule<GalaxyCell> for GalaxyRule {
    fn apply(&self, coord: &mut Coord, neighbors: &[GalaxyCell], focus: &mut GalaxyCell) {
        if focus.state == 0 {
            return;
        }
        // `neighbors` is in the Moore canonical order from `enumerate_offsets`:
        // a base-(2r+1) digit per axis, most significant axis first, each
        // digit offset by `-radius`. The all-zero offset (no move) sits at
        // the midpoint of the sequence.
        let center = neighbors.len() / 2;
        let (best_index, best_mass) = neighbors
            .iter()
            .enumerate()
            .map(|(i, n)| (i, n.mass))
            .fold((center, neighbors[center].mass), |(bi, bm), (i, m)| {
                if m > bm {
                    (i, m)
                } else {
                    (bi, bm)
                }
            });
        if best_index != center {
            let side = 2 * self.radius + 1;
            let k = (best_index as i64) % side - self.radius;
            let rest = (best_index as i64) / side;
            let j = rest % side - self.radius;
            let i = rest / side - self.radius;
            coord[0] = wrap_axis(coord[0] + i, self.dims[0]);
            coord[1] = wrap_axis(coord[1] + j, self.dims[1]);
            coord[2] = wrap_axis(coord[2] + k, self.dims[2]);
        }
        focus.mass = (focus.mass + best_mass / 2.0).clamp(self.min_mass, self.max_mass);
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("reading stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_parsed<T: std::str::FromStr>(label: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = prompt(label)?;
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("invalid value for {label}: {e}"))
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let d1: usize = prompt_parsed("axis 1 size (>= 3)")?;
    let d2: usize = prompt_parsed("axis 2 size (>= 3)")?;
    let d3: usize = prompt_parsed("axis 3 size (>= 3)")?;
    if d1 < 3 || d2 < 3 || d3 < 3 {
        bail!("every axis size must be at least 3");
    }

    let min_mass: f64 = prompt_parsed("minimum mass (>= 1)")?;
    let max_mass: f64 = prompt_parsed("maximum mass (> minimum)")?;
    if min_mass < 1.0 || max_mass <= min_mass {
        bail!("mass bounds must satisfy 1 <= min < max");
    }

    let density: f64 = prompt_parsed("density (0,1]")?;
    if density <= 0.0 || density > 1.0 {
        bail!("density must be in (0,1]");
    }

    let max_radius = (d2.min(d3) / 2).max(1) as i64;
    let radius: i64 = prompt_parsed(&format!("boundary radius [1,{max_radius}]"))?;

    let time_step: f64 = prompt_parsed("time step (>= 0.1, echoed only)")?;
    if time_step < 0.1 {
        bail!("time step must be >= 0.1");
    }

    let steps: u64 = prompt_parsed("step count (> 0)")?;
    if steps == 0 {
        bail!("step count must be > 0");
    }

    tracing::info!(d1, d2, d3, min_mass, max_mass, density, radius, time_step, steps, "galaxy configured");

    let mut engine: Engine<GalaxyCell> = Engine::new();
    engine.set_neighborhood(NeighborhoodShape::Moore);
    engine
        .set_boundary(Boundary::Periodic, radius)
        .map_err(engine_error)?;
    engine.set_rule(RuleSelect::Custom);
    engine
        .set_dimensions_3d(d1, d2, d3, GalaxyCell::default())
        .map_err(engine_error)?;
    engine
        .init_condition(1, density, cli.seed)
        .map_err(engine_error)?;

    let rule = GalaxyRule {
        radius,
        min_mass,
        max_mass,
        dims: [d1, d2, d3],
    };
    for step in 0..steps {
        let started = std::time::Instant::now();
        engine.step(Some(&rule)).map_err(engine_error)?;
        let occupied = occupied_count(&engine);
        tracing::info!(step, occupied, elapsed_ms = started.elapsed().as_millis() as u64, "stepped");
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    engine.print_grid(&mut lock).context("writing final grid")?;
    Ok(())
}

fn occupied_count(engine: &Engine<GalaxyCell>) -> usize {
    let Some(shape) = engine.shape() else {
        return 0;
    };
    (0..shape.len())
        .filter(|&i| {
            let coord = shape.to_coord(i);
            engine.get(&coord).map(|c| c.state != 0).unwrap_or(false)
        })
        .count()
}

fn engine_error(err: ca_engine::EngineError) -> anyhow::Error {
    let message = Engine::<GalaxyCell>::error_message(err.code);
    anyhow::Error::new(err).context(message.to_string())
}

fn main() {
    SubscriberBuilder::default().with_target(false).init();
    if let Err(err) = run() {
        eprintln!("galaxy-cli: {err:#}");
        let code = err
            .downcast_ref::<ca_engine::EngineError>()
            .map(|e| e.code as i32)
            .unwrap_or(ErrorCode::AllocationFailed as i32);
        std::process::exit(code);
    }
}
