//! Shared helpers for the unit tests.

use std::collections::VecDeque;

use crate::generators::{Chooser, Generator};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{CellState, Coord, Direction};

/// Probes directions in a fixed order and always answers `index` with the
/// same slot (clamped to the range asked for).
pub(crate) struct FixedChooser {
    order: [Direction; 4],
    index: usize,
}

impl FixedChooser {
    pub(crate) fn new(order: [Direction; 4]) -> Self {
        Self { order, index: 0 }
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

impl Chooser for FixedChooser {
    fn directions(&mut self) -> [Direction; 4] {
        self.order
    }

    fn index(&mut self, len: usize) -> usize {
        self.index.min(len - 1)
    }
}

/// Steps until `Done`, returning how many steps did work.
pub(crate) fn run_until_done<G: Generator + ?Sized>(generator: &mut G) -> usize {
    let mut steps = 0;
    while !generator.step_generation().unwrap().is_done() {
        steps += 1;
    }
    steps
}

pub(crate) fn assert_walls_symmetric(grid: &WallGrid) {
    for cell in grid.cells() {
        for dir in Direction::ALL {
            match grid.neighbor(cell.coord(), dir) {
                Some(other) => assert_eq!(
                    cell.is_open(dir),
                    grid.is_open(other, dir.opposite()),
                    "asymmetric wall between {} and {}",
                    cell.coord(),
                    other
                ),
                None => assert!(
                    !cell.is_open(dir),
                    "{} is open towards the edge ({})",
                    cell.coord(),
                    dir
                ),
            }
        }
    }
}

/// Opened wall pairs form a spanning tree: `n - 1` edges, all cells reached,
/// and every cell finalized.
pub(crate) fn assert_spanning_tree(grid: &WallGrid) {
    assert_walls_symmetric(grid);
    assert_eq!(grid.passages().len(), grid.len() - 1);

    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([Coord::new(0, 0)]);
    seen[0] = true;
    let mut reached = 1;

    while let Some(coord) = queue.pop_front() {
        for dir in Direction::ALL {
            if !grid.is_open(coord, dir) {
                continue;
            }
            if let Some(next) = grid.neighbor(coord, dir) {
                let index = next.x * grid.height() + next.y;
                if !seen[index] {
                    seen[index] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
    }
    assert_eq!(reached, grid.len(), "maze is not connected");

    for cell in grid.cells() {
        assert!(cell.is_visited());
        assert_eq!(cell.state(), CellState::Completed);
    }
}
