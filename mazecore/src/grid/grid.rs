use smallvec::SmallVec;

use crate::{
    array::Array2D,
    coord::{Coord, Direction},
    error::MazeError,
    grid::cell::Cell,
};

/// In-bounds neighbors of a cell, tagged with the direction leading to them.
pub type Neighbors = SmallVec<[(Direction, Coord); 4]>;

/// Rectangular maze of `rows x cols` cells.
///
/// Entry is always `(0, 0)` and exit `(rows - 1, cols - 1)`. A wall between
/// two cells is stored on both of them, every removal goes through
/// [`Grid::remove_wall`] so the two flags never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            cells: Array2D::new(Cell::new(), rows as usize, cols as usize),
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn size(&self) -> Coord {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entry(&self) -> Coord {
        Coord::ZERO
    }

    pub fn exit(&self) -> Coord {
        self.size() - Coord(1, 1)
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell(&self, pos: Coord) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter_pos()
    }

    /// Returns the in-bounds neighbors of `pos` in the order up, down, left, right.
    pub fn neighbors(&self, pos: Coord) -> Neighbors {
        if !self.is_in_bounds(pos) {
            return Neighbors::new();
        }

        Direction::in_order()
            .into_iter()
            .map(|dir| (dir, pos.step(dir)))
            .filter(|&(_, next)| self.is_in_bounds(next))
            .collect()
    }

    /// Whether the wall on side `dir` of `pos` is standing.
    ///
    /// Border walls and positions outside of the grid always report a wall.
    pub fn wall(&self, pos: Coord, dir: Direction) -> bool {
        self.cell(pos).map_or(true, |cell| cell.wall(dir))
    }

    pub fn wall_between(&self, a: Coord, b: Coord) -> Result<bool, MazeError> {
        let dir = self.shared_side(a, b)?;
        Ok(self.wall(a, dir))
    }

    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> Result<(), MazeError> {
        let dir = self.shared_side(a, b)?;
        self.remove_wall(a, dir);
        Ok(())
    }

    /// Clears the wall on side `dir` of `pos` together with the matching wall
    /// of the neighbor. Border walls are permanent, `false` is returned for them.
    pub fn remove_wall(&mut self, pos: Coord, dir: Direction) -> bool {
        let next = pos.step(dir);
        if !self.is_in_bounds(pos) || !self.is_in_bounds(next) {
            return false;
        }

        self.cells[pos].remove_wall(dir);
        self.cells[next].remove_wall(dir.reverse());
        true
    }

    /// Whether one can step from `pos` in direction `dir`.
    pub fn can_pass(&self, pos: Coord, dir: Direction) -> bool {
        self.is_in_bounds(pos.step(dir)) && !self.wall(pos, dir)
    }

    pub fn is_visited(&self, pos: Coord) -> bool {
        self.cell(pos).is_some_and(Cell::is_visited)
    }

    pub(crate) fn set_visited(&mut self, pos: Coord, visited: bool) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.set_visited(visited);
        }
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_visited(false);
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Every open internal edge, listed once as `(pos, Down)` or `(pos, Right)`.
    pub fn passages(&self) -> Vec<(Coord, Direction)> {
        let mut passages = Vec::new();
        for pos in self.positions() {
            for dir in [Direction::Down, Direction::Right] {
                if self.can_pass(pos, dir) {
                    passages.push((pos, dir));
                }
            }
        }
        passages
    }

    pub fn removed_wall_count(&self) -> usize {
        self.passages().len()
    }

    fn shared_side(&self, a: Coord, b: Coord) -> Result<Direction, MazeError> {
        match Direction::between(a, b) {
            Some(dir) if self.is_in_bounds(a) && self.is_in_bounds(b) => Ok(dir),
            _ => Err(MazeError::NotAdjacent(a, b)),
        }
    }
}
