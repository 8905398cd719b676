use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::analysis;
use crate::cells::{CellState, Position};
use crate::errors::*;
use crate::generators;
use crate::grid::{CellIter, Grid};
use crate::grid_dimensions::MazeDimensions;
use crate::pathing;
use crate::units::{CellSize, ColumnsCount, Height, RowsCount, Width};

/// Everything needed to build a maze. Two engines built from the same config with a seed
/// hold identical grids.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeConfig {
    pub width: Width,
    pub height: Height,
    pub cell_size: CellSize,
    pub solve: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct MazeBuilder {
    config: MazeConfig,
}

impl MazeBuilder {
    pub fn new(width: Width, height: Height, cell_size: CellSize) -> MazeBuilder {
        MazeBuilder {
            config: MazeConfig {
                width,
                height,
                cell_size,
                solve: false,
                seed: None,
            },
        }
    }

    pub fn from_config(config: MazeConfig) -> MazeBuilder {
        MazeBuilder { config }
    }

    /// Also find and mark the route from start to stop.
    pub fn solve(mut self, solve: bool) -> Self {
        self.config.solve = solve;
        self
    }

    /// Seed the random number generator for a reproducible maze.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn build(self) -> Result<MazeEngine> {
        MazeEngine::from_config(self.config)
    }
}

/// A carved, and optionally solved, maze sized to fit a pixel area.
///
/// All the work happens at construction; afterwards the grid is read only. To get a
/// different maze build a new engine, or `regenerate` this one.
#[derive(Debug)]
pub struct MazeEngine {
    config: MazeConfig,
    seed: u64,
    grid: Grid,
    solved: bool,
    rng: StdRng,
}

impl MazeEngine {
    /// Build a maze for `width` x `height` pixels drawn with square cells of `cell_size` pixels.
    pub fn new(width: Width, height: Height, cell_size: CellSize, solve: bool) -> Result<MazeEngine> {
        MazeBuilder::new(width, height, cell_size).solve(solve).build()
    }

    pub fn from_config(config: MazeConfig) -> Result<MazeEngine> {
        let dimensions = MazeDimensions::from_pixels(config.width, config.height, config.cell_size)?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let grid = generators::recursive_backtracker(Grid::new(dimensions), &mut rng);
        debug_assert!(analysis::is_perfect_maze(&grid));

        let grid = if config.solve {
            pathing::backtrack_solve(grid, &mut rng)?
        } else {
            grid
        };

        debug!("built {}x{} maze from seed {}{}",
               dimensions.columns().0,
               dimensions.rows().0,
               seed,
               if config.solve { ", solved" } else { "" });

        Ok(MazeEngine {
            config,
            seed,
            grid,
            solved: config.solve,
            rng,
        })
    }

    /// Discard this maze and build another with the same parameters.
    ///
    /// A seeded engine derives the next seed from its own generator, so a sequence of
    /// regenerated mazes is reproducible too.
    pub fn regenerate(mut self) -> Result<MazeEngine> {
        let rng = &mut self.rng;
        let seed = self.config.seed.map(|_| rng.gen());
        MazeEngine::from_config(MazeConfig { seed, ..self.config })
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// The seed the maze was generated from, whether given or drawn at random.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the cell at `pos`, `None` if outside the grid.
    #[inline]
    pub fn state_at(&self, pos: Position) -> Option<CellState> {
        self.grid.get(pos)
    }

    /// Every cell with its position, row by row.
    #[inline]
    pub fn iter(&self) -> CellIter {
        self.grid.iter()
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.grid.start()
    }

    #[inline]
    pub fn stop(&self) -> Position {
        self.grid.stop()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.grid.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.grid.rows()
    }

    #[inline]
    pub fn cell_size(&self) -> CellSize {
        self.config.cell_size
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.config.height
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The route from just inside the start to just inside the stop, if solved.
    pub fn solution(&self) -> Option<Vec<Position>> {
        if self.solved {
            pathing::solution_path(&self.grid)
        } else {
            None
        }
    }
}

impl fmt::Display for MazeEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
