use crate::grids::{CellState, Coord, Direction};

/// Per-cell generation state. Walls start closed; a set bit in `walls_open`
/// means the side at that `Direction::wall_index` is passable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    visited: bool,
    walls_open: u8,
    state: CellState,
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            visited: false,
            walls_open: 0,
            state: CellState::Available,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.coord.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.coord.y
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn walls_open(&self) -> u8 {
        self.walls_open
    }

    #[inline]
    pub fn is_open(&self, direction: Direction) -> bool {
        self.walls_open & direction.mask() != 0
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |dir| self.is_open(*dir))
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        debug_assert_ne!(
            self.state,
            CellState::Completed,
            "walls of completed cell {} must not change",
            self.coord
        );
        self.walls_open |= direction.mask();
    }

    // joins the frontier
    pub(crate) fn mark_current(&mut self) {
        self.visited = true;
        self.state = CellState::Current;
    }

    pub(crate) fn mark_completed(&mut self) {
        debug_assert!(self.visited);
        self.state = CellState::Completed;
    }
}
