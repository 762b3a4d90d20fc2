use log::debug;

use crate::error::Result;
use crate::generators::{
    carve_from, seed_start, Chooser, Generator, GeneratorKind, RngChooser, Step,
};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;

/// Depth-first maze carving with an explicit path stack. The active cell is
/// always the top of the path; it is popped once it has no unvisited
/// neighbor left.
pub struct RecursiveBacktracker<C = RngChooser> {
    grid: WallGrid,
    path: Vec<Coord>,
    completed: Vec<Coord>,
    chooser: C,
}

impl<C: Chooser> RecursiveBacktracker<C> {
    /// `grid` must be freshly built; one random cell is seeded as the start.
    pub fn new(mut grid: WallGrid, mut chooser: C) -> Self {
        let start = seed_start(&mut grid, &mut chooser);
        debug!("recursive backtracker starting at {}", start);

        Self {
            grid,
            path: vec![start],
            completed: Vec::new(),
            chooser,
        }
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }
}

impl<C: Chooser> Generator for RecursiveBacktracker<C> {
    fn step_generation(&mut self) -> Result<Step> {
        let current = match self.path.last() {
            Some(&current) => current,
            None => return Ok(Step::Done),
        };

        match carve_from(&mut self.grid, &mut self.chooser, current)? {
            Some((next, direction)) => {
                self.path.push(next);
                Ok(Step::Progress {
                    from: current,
                    to: next,
                    direction,
                })
            }
            None => {
                self.path.pop();
                self.grid.mark_completed(current);
                self.completed.push(current);
                debug!("backtracked from {}, path length {}", current, self.path.len());
                Ok(Step::Backtrack { cell: current })
            }
        }
    }

    fn is_done(&self) -> bool {
        self.path.is_empty()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn frontier(&self) -> &[Coord] {
        &self.path
    }

    fn completed(&self) -> &[Coord] {
        &self.completed
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::RecursiveBacktracker
    }
}
