use super::{MazeSolver, Path};
use crate::{
    coord::{Coord, Direction},
    error::MazeError,
    events::{EventKind, MazeEvent, MazeObserver},
    grid::Grid,
};

const ORDER: [Direction; 4] = Direction::in_order();

/// One level of the search, the cell and how many directions of [`ORDER`]
/// were already tried from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Coord,
    next: usize,
}

impl Frame {
    fn new(pos: Coord) -> Self {
        Self { pos, next: 0 }
    }

    /// Direction of the edge most recently taken out of this frame.
    fn last_tried(&self) -> Option<Direction> {
        self.next.checked_sub(1).and_then(|i| ORDER.get(i).copied())
    }

    fn advance(&mut self, grid: &Grid) -> Option<Direction> {
        while let Some(&dir) = ORDER.get(self.next) {
            self.next += 1;
            if grid.can_pass(self.pos, dir) && !grid.is_visited(self.pos.step(dir)) {
                return Some(dir);
            }
        }
        None
    }
}

/// Depth-first search from the entry to the exit, trying up, down, left, right.
///
/// Cells stay visited after a failed branch, so each cell is entered at most
/// once. The visited flags are reset before the search starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSolver;

impl DepthFirstSolver {
    fn visit(grid: &mut Grid, pos: Coord, observer: &mut dyn MazeObserver) {
        grid.set_visited(pos, true);
        observer.on_event(MazeEvent::new(pos, EventKind::Visited));
    }

    fn found(stack: &[Frame], observer: &mut dyn MazeObserver) -> Path {
        let path = Path::new(stack.iter().map(|frame| frame.pos).collect());
        for (pos, dir) in path.steps() {
            observer.on_event(MazeEvent::new(pos, EventKind::EdgeConfirmed(dir)));
        }
        log::debug!("found path of {} cells", path.len());
        path
    }
}

impl MazeSolver for DepthFirstSolver {
    fn solve(&self, grid: &mut Grid, observer: &mut dyn MazeObserver) -> Result<Path, MazeError> {
        grid.reset_visited();

        let (entry, exit) = (grid.entry(), grid.exit());
        let mut stack = vec![Frame::new(entry)];
        Self::visit(grid, entry, observer);
        if entry == exit {
            return Ok(Self::found(&stack, observer));
        }

        while let Some(frame) = stack.last_mut() {
            let pos = frame.pos;
            match frame.advance(grid) {
                Some(dir) => {
                    observer.on_event(MazeEvent::new(pos, EventKind::EdgeTried(dir)));

                    let next = pos.step(dir);
                    stack.push(Frame::new(next));
                    Self::visit(grid, next, observer);

                    if next == exit {
                        return Ok(Self::found(&stack, observer));
                    }
                }
                None => {
                    log::trace!("dead end at {}", pos);
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        if let Some(dir) = parent.last_tried() {
                            observer
                                .on_event(MazeEvent::new(parent.pos, EventKind::EdgeRejected(dir)));
                        }
                    }
                }
            }
        }

        log::debug!("no path, explored {} cells", grid.visited_count());
        Err(MazeError::NoPathFound)
    }
}
