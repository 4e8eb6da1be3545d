//! Perfect maze generation over a rectangular grid and depth-first path search.
//!
//! The [`Grid`](grid::Grid) owns all cell state. A [`MazeGenerator`](algorithms::MazeGenerator)
//! carves a spanning tree into it, a [`MazeSolver`](algorithms::MazeSolver) then walks from
//! the entry (top-left) to the exit (bottom-right). Both report every state change to a
//! [`MazeObserver`](events::MazeObserver), which may be `()` when nobody is watching.

pub mod algorithms;
pub mod array;
pub mod coord;
pub mod error;
pub mod events;
pub mod grid;

pub use error::MazeError;
