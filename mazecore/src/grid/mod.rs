pub mod cell;
pub use cell::Cell;
#[allow(clippy::module_inception)]
pub mod grid;
pub use grid::{Grid, Neighbors};
