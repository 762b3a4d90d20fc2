use log::info;

use crate::error::Result;
use crate::generators::{Generator, GeneratorKind, Step};
use crate::grids::wall_grid::WallGrid;

/// Sequences calls into a generator. Pacing is left to the caller: the
/// driver only ever advances when asked to.
pub struct StepDriver {
    generator: Box<dyn Generator>,
    steps_taken: usize,
    finished: bool,
}

impl StepDriver {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self {
            generator,
            steps_taken: 0,
            finished: false,
        }
    }

    /// One unit of work. Keeps returning `Step::Done` after completion.
    pub fn step(&mut self) -> Result<Step> {
        if self.finished {
            return Ok(Step::Done);
        }

        let step = self.generator.step_generation()?;
        if step.is_done() {
            self.finished = true;
            let grid = self.generator.grid();
            info!(
                "{:?} finished a {}x{} maze: {} passages in {} steps",
                self.generator.kind(),
                grid.width(),
                grid.height(),
                grid.passages().len(),
                self.steps_taken
            );
        } else {
            self.steps_taken += 1;
        }

        Ok(step)
    }

    /// Steps until `Done`; returns the number of steps that did work.
    pub fn run_to_completion(&mut self) -> Result<usize> {
        let before = self.steps_taken;
        while !self.step()?.is_done() {}
        Ok(self.steps_taken - before)
    }

    /// At most `n` steps, stopping early at `Done`. Returns the number of
    /// steps that did work.
    pub fn run_for_n_steps(&mut self, n: usize) -> Result<usize> {
        let before = self.steps_taken;
        for _ in 0..n {
            if self.step()?.is_done() {
                break;
            }
        }
        Ok(self.steps_taken - before)
    }

    /// True once a step has reported `Done`.
    pub fn is_done(&self) -> bool {
        self.finished
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn kind(&self) -> GeneratorKind {
        self.generator.kind()
    }

    pub fn grid(&self) -> &WallGrid {
        self.generator.grid()
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }
}
