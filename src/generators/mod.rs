pub mod backtracker;
pub mod growing_tree;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};

pub use backtracker::RecursiveBacktracker;
pub use growing_tree::GrowingTree;

/// Outcome of a single generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A passage was carved from `from` into the previously unvisited `to`,
    /// which is now `Current` and on the frontier.
    Progress {
        from: Coord,
        to: Coord,
        direction: Direction,
    },
    /// `cell` had no unvisited neighbor left and is now `Completed`.
    Backtrack { cell: Coord },
    /// The frontier is empty.
    Done,
}

impl Step {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

pub trait Generator {
    /// Does one probe cycle on the active cell. Returns `Step::Done` for
    /// every call once the frontier has emptied, without touching the grid.
    fn step_generation(&mut self) -> Result<Step>;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
    fn frontier(&self) -> &[Coord];
    /// Cells in the order they were finalized.
    fn completed(&self) -> &[Coord];
    fn kind(&self) -> GeneratorKind;
}

/// How the growing tree picks its active cell from the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    #[default]
    RecursiveBacktracker,
    GrowingTree(Strategy),
}

impl GeneratorKind {
    pub fn build(self, grid: WallGrid, chooser: Box<dyn Chooser>) -> Box<dyn Generator> {
        match self {
            GeneratorKind::RecursiveBacktracker => Box::new(RecursiveBacktracker::new(grid, chooser)),
            GeneratorKind::GrowingTree(strategy) => {
                Box::new(GrowingTree::new(grid, strategy, chooser))
            }
        }
    }
}

/// Source of the random decisions a generator makes.
pub trait Chooser {
    /// Order in which to probe the four neighbors.
    fn directions(&mut self) -> [Direction; 4];
    /// Uniform pick in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for Box<C> {
    fn directions(&mut self) -> [Direction; 4] {
        (**self).directions()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

pub struct RngChooser<R = StdRng> {
    rng: R,
}

impl RngChooser<StdRng> {
    /// Reproducible: the same seed always yields the same maze.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn directions(&mut self) -> [Direction; 4] {
        Direction::shuffled(&mut self.rng)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Seeds a fresh grid with one uniformly chosen start cell.
pub(crate) fn seed_start<C: Chooser + ?Sized>(grid: &mut WallGrid, chooser: &mut C) -> Coord {
    let start = grid.coord_of(chooser.index(grid.len()));
    grid.mark_current(start);
    start
}

/// Probes the neighbors of `active` in shuffled order and carves into the
/// first unvisited one. `None` means `active` is a dead end.
pub(crate) fn carve_from<C: Chooser + ?Sized>(
    grid: &mut WallGrid,
    chooser: &mut C,
    active: Coord,
) -> Result<Option<(Coord, Direction)>> {
    for direction in chooser.directions() {
        let next = match grid.neighbor(active, direction) {
            Some(next) => next,
            None => continue,
        };
        if grid.is_visited(next) {
            continue;
        }

        grid.open_wall_pair(active, next, direction)?;
        grid.mark_current(next);
        trace!("carved {} -> {} going {}", active, next, direction);

        return Ok(Some((next, direction)));
    }

    Ok(None)
}
