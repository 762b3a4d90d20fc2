use thiserror::Error;

use crate::grids::{Coord, Direction};

pub type Result<T> = std::result::Result<T, MazeError>;

/// Errors surfaced by grid construction and wall carving. Boundaries, dead
/// ends and an empty frontier are ordinary outcomes and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero; no grid is built.
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// `open_wall_pair` was handed two cells that do not share the stated side.
    #[error("{to} is not the {direction} neighbor of {from}")]
    NotAdjacent {
        from: Coord,
        to: Coord,
        direction: Direction,
    },

    #[error("{coord} lies outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
}
