use rand::seq::SliceRandom as _;

use super::{MazeGenerator, Random};
use crate::{
    events::{EventKind, MazeEvent, MazeObserver},
    grid::{Grid, Neighbors},
};

/// Randomized depth-first carving, also known as the recursive backtracker.
///
/// From the current cell a random unvisited neighbor is chosen, the wall to it
/// is removed and carving continues from there. Dead ends pop back to the
/// previous cell. Runs on an explicit stack, so grid size is limited by memory
/// only. Leaves every cell marked visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstCarver;

impl MazeGenerator for DepthFirstCarver {
    fn generate(&self, grid: &mut Grid, rng: &mut Random, observer: &mut dyn MazeObserver) {
        if grid.removed_wall_count() > 0 {
            log::warn!("carving a grid that already has passages, result may contain cycles");
        }
        grid.reset_visited();

        let mut stack = Vec::with_capacity(grid.cell_count());

        let start = grid.entry();
        grid.set_visited(start, true);
        observer.on_event(MazeEvent::new(start, EventKind::Visited));
        stack.push(start);

        while let Some(&current) = stack.last() {
            let unvisited = grid
                .neighbors(current)
                .into_iter()
                .filter(|&(_, pos)| !grid.is_visited(pos))
                .collect::<Neighbors>();

            let Some(&(dir, chosen)) = unvisited.choose(rng) else {
                stack.pop();
                continue;
            };

            grid.remove_wall(current, dir);
            observer.on_event(MazeEvent::new(current, EventKind::WallRemoved(dir)));
            log::trace!("carved {} -> {}", current, chosen);

            grid.set_visited(chosen, true);
            observer.on_event(MazeEvent::new(chosen, EventKind::Visited));
            stack.push(chosen);
        }

        log::debug!(
            "carved {} passages into {}x{} grid",
            grid.removed_wall_count(),
            grid.rows(),
            grid.cols()
        );
    }
}
