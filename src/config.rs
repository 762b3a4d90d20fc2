use log::debug;

use crate::driver::StepDriver;
use crate::error::{MazeError, Result};
use crate::generators::{Chooser, GeneratorKind, RngChooser};
use crate::grids::wall_grid::WallGrid;
use crate::grids::Dimensions;

const DEFAULT_DIMS: (usize, usize) = (15, 15);

/// Everything needed to start one maze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub algorithm: GeneratorKind,
    /// `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMS.0,
            height: DEFAULT_DIMS.1,
            algorithm: GeneratorKind::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: GeneratorKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<Dimensions> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        Ok(Dimensions {
            width: self.width,
            height: self.height,
        })
    }

    pub fn chooser(&self) -> Box<dyn Chooser> {
        match self.seed {
            Some(seed) => Box::new(RngChooser::seeded(seed)),
            None => Box::new(RngChooser::from_entropy()),
        }
    }

    /// Validates, builds a fresh grid and hands it to the chosen generator.
    pub fn build(&self) -> Result<StepDriver> {
        let dims = self.validate()?;
        let grid = WallGrid::with_dims(dims.width, dims.height)?;
        debug!(
            "building {:?} for a {}x{} grid, seed {:?}",
            self.algorithm, dims.width, dims.height, self.seed
        );

        Ok(StepDriver::new(self.algorithm.build(grid, self.chooser())))
    }
}
