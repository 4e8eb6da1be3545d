use crate::{
    coord::{Coord, Direction},
    grid::Grid,
};

/// Ordered cells from the entry to the exit of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Coord>);

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.0.contains(&pos)
    }

    /// Steps of the path as `(from, direction)`.
    pub fn steps(&self) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.0
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]).map(|dir| (w[0], dir)))
    }

    /// Checks that the path starts at the entry, ends at the exit and that every
    /// step moves to an adjacent cell without crossing a wall.
    pub fn is_valid_for(&self, grid: &Grid) -> bool {
        if self.first() != Some(grid.entry()) || self.last() != Some(grid.exit()) {
            return false;
        }

        self.0
            .windows(2)
            .all(|w| grid.wall_between(w[0], w[1]) == Ok(false))
    }
}
