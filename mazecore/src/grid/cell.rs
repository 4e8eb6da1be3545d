use crate::coord::Direction;

/// A single square of the grid.
///
/// Starts with all four walls standing and not visited. Walls are only ever
/// removed through [`Grid`](super::Grid), which clears the matching flag on
/// the neighbor in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    visited: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: Direction) {
        match wall {
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    /// Returns `true` if the wall on the given side is standing.
    pub fn wall(&self, wall: Direction) -> bool {
        match wall {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_open(&self, wall: Direction) -> bool {
        !self.wall(wall)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
