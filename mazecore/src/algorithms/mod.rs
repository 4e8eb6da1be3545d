mod depth_first_carver;
mod depth_first_solver;
mod path;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{error::MazeError, events::MazeObserver, grid::Grid};
pub use depth_first_carver::DepthFirstCarver;
pub use depth_first_solver::DepthFirstSolver;
pub use path::Path;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Creates the generator rng, returns it together with the seed actually used.
pub fn random_from_seed(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Carves passages into a grid so that it becomes a maze.
pub trait MazeGenerator: fmt::Debug {
    fn generate(&self, grid: &mut Grid, rng: &mut Random, observer: &mut dyn MazeObserver);
}

/// Finds a path from [`Grid::entry`] to [`Grid::exit`].
///
/// Solvers own the visited flags of the grid, they reset them before starting.
pub trait MazeSolver: fmt::Debug {
    fn solve(&self, grid: &mut Grid, observer: &mut dyn MazeObserver) -> Result<Path, MazeError>;
}

/// Result of a full construct, generate and solve sequence.
#[derive(Debug, Clone)]
pub struct MazeRun {
    pub grid: Grid,
    pub seed: u64,
    pub solution: Result<Path, MazeError>,
}

/// Builds a `rows x cols` grid, carves it with [`DepthFirstCarver`] and solves it
/// with [`DepthFirstSolver`]. Only construction errors are returned as `Err`,
/// a failed search is reported in [`MazeRun::solution`].
pub fn generate_and_solve(
    rows: i32,
    cols: i32,
    seed: Option<u64>,
    observer: &mut dyn MazeObserver,
) -> Result<MazeRun, MazeError> {
    let mut grid = Grid::new(rows, cols)?;
    let (mut rng, seed) = random_from_seed(seed);
    log::debug!("generating {}x{} maze with seed {}", rows, cols, seed);

    DepthFirstCarver.generate(&mut grid, &mut rng, observer);
    let solution = DepthFirstSolver.solve(&mut grid, observer);

    Ok(MazeRun {
        grid,
        seed,
        solution,
    })
}
