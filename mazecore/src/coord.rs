use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position on the grid as `(row, col)`.
///
/// Signed so that an offset pointing off the grid is still representable,
/// bounds are checked by the [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn step(self, dir: Direction) -> Coord {
        self + dir.offset()
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed priority used by the solver.
    pub const fn in_order() -> [Direction; 4] {
        use Direction::*;
        [Up, Down, Left, Right]
    }

    pub fn offset(self) -> Coord {
        match self {
            Self::Up => Coord(-1, 0),
            Self::Down => Coord(1, 0),
            Self::Left => Coord(0, -1),
            Self::Right => Coord(0, 1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the direction leading from `from` to `to`,
    /// or `None` if the two are not adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let diff: (i32, i32) = (to - from).into();
        match diff {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_between_adjacent() {
        let c = Coord(3, 3);
        for dir in Direction::in_order() {
            assert_eq!(Direction::between(c, c.step(dir)), Some(dir));
            assert_eq!(Direction::between(c.step(dir), c), Some(dir.reverse()));
        }
    }

    #[test]
    fn direction_between_not_adjacent() {
        assert_eq!(Direction::between(Coord(0, 0), Coord(0, 0)), None);
        assert_eq!(Direction::between(Coord(0, 0), Coord(1, 1)), None);
        assert_eq!(Direction::between(Coord(0, 0), Coord(0, 2)), None);
    }

    #[test]
    fn reverse_is_involution() {
        for dir in Direction::in_order() {
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.offset() + dir.reverse().offset(), Coord::ZERO);
        }
    }
}
