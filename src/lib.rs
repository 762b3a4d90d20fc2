//! Perfect maze generation over a rectangular grid, advanced one step at a
//! time so a caller can animate or inspect every carve and backtrack.

pub mod config;
pub mod driver;
pub mod error;
pub mod generators;
pub mod grids;

#[cfg(test)]
mod testing;

pub use config::MazeConfig;
pub use driver::StepDriver;
pub use error::{MazeError, Result};
pub use generators::{
    Chooser, Generator, GeneratorKind, GrowingTree, RecursiveBacktracker, RngChooser, Step,
    Strategy,
};
pub use grids::cell::Cell;
pub use grids::wall_grid::WallGrid;
pub use grids::{CellState, Coord, Dimensions, Direction};
