//! **mazes** generates perfect mazes with a randomized depth first backtracker and solves
//! them with the same walk.
//!
//! A maze is sized to fit a pixel area drawn with square cells. Every cell of the grid is a
//! wall, a passage, the start or stop punched through the border, or part of the solution.
//! Logical cells sit at odd coordinates with walls or carved connectors between them.
//!
//! ```no_run
//! use mazes::units::{CellSize, Height, Width};
//! use mazes::MazeEngine;
//!
//! let maze = MazeEngine::new(Width(1010), Height(610), CellSize(10), true).unwrap();
//! println!("{}", maze);
//! ```

pub mod analysis;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;

pub use crate::maze::{MazeBuilder, MazeConfig, MazeEngine};
