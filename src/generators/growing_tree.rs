use log::debug;

use crate::error::Result;
use crate::generators::{
    carve_from, seed_start, Chooser, Generator, GeneratorKind, RngChooser, Step, Strategy,
};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;

/// Growing tree carving. Each step picks an active cell from the frontier
/// according to `strategy`, then either carves into an unvisited neighbor or
/// retires the active cell from wherever it sits in the frontier.
///
/// `Strategy::Newest` makes the same random draws in the same order as
/// [`RecursiveBacktracker`](crate::generators::RecursiveBacktracker) and so
/// produces the same maze for the same chooser.
pub struct GrowingTree<C = RngChooser> {
    grid: WallGrid,
    frontier: Vec<Coord>,
    completed: Vec<Coord>,
    strategy: Strategy,
    chooser: C,
}

impl<C: Chooser> GrowingTree<C> {
    pub fn new(mut grid: WallGrid, strategy: Strategy, mut chooser: C) -> Self {
        let start = seed_start(&mut grid, &mut chooser);
        debug!("growing tree ({:?}) starting at {}", strategy, start);

        Self {
            grid,
            frontier: vec![start],
            completed: Vec::new(),
            strategy,
            chooser,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    // frontier must be non-empty
    fn select(&mut self) -> usize {
        match self.strategy {
            Strategy::Random => self.chooser.index(self.frontier.len()),
            Strategy::Newest => self.frontier.len() - 1,
            Strategy::Oldest => 0,
        }
    }
}

impl<C: Chooser> Generator for GrowingTree<C> {
    fn step_generation(&mut self) -> Result<Step> {
        if self.frontier.is_empty() {
            return Ok(Step::Done);
        }

        let position = self.select();
        let active = self.frontier[position];

        match carve_from(&mut self.grid, &mut self.chooser, active)? {
            Some((next, direction)) => {
                self.frontier.push(next);
                Ok(Step::Progress {
                    from: active,
                    to: next,
                    direction,
                })
            }
            None => {
                // keep insertion order intact for Newest/Oldest
                self.frontier.remove(position);
                self.grid.mark_completed(active);
                self.completed.push(active);
                debug!(
                    "retired {} from frontier slot {}, {} left",
                    active,
                    position,
                    self.frontier.len()
                );
                Ok(Step::Backtrack { cell: active })
            }
        }
    }

    fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    fn completed(&self) -> &[Coord] {
        &self.completed
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::GrowingTree(self.strategy)
    }
}
