use thiserror::Error;

use crate::coord::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid grid dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("Cells {0} and {1} are not adjacent")]
    NotAdjacent(Coord, Coord),
    #[error("No path from entry to exit")]
    NoPathFound,
}
