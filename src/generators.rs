use log::{debug, trace};
use rand::Rng;

use crate::cells::{CellState, Position};
use crate::grid::Grid;

/// One move of a backtracking walk over the grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Step {
    /// Moved forward onto a cell not seen before.
    Advance { from: Position, to: Position },
    /// Hit a dead end and retreated to the previous cell in the history.
    Backtrack { from: Position, to: Position },
}

/// Carve a perfect maze into a freshly initialised grid with the randomized depth first
/// backtracker.
///
/// Starting just inside the entrance, the walk repeatedly knocks through the wall to a
/// random unvisited logical cell two steps away. When every neighbour has been visited it
/// walks back along its history until it finds a cell with an unvisited neighbour. The walk
/// ends once every logical cell has been visited, leaving a spanning tree: every cell is
/// reachable and there is exactly one route between any two cells.
pub fn recursive_backtracker<R: Rng>(grid: Grid, rng: &mut R) -> Grid {
    let mut carver = Carver::new(grid, rng);
    let steps = carver.by_ref().count();
    debug!("carved {} cells in {} steps", carver.visited(), steps);
    carver.into_grid()
}

/// The backtracking carver run one `Step` at a time.
///
/// The grid can be inspected between steps, e.g. to animate the carving. The sequence is
/// finite and cannot be restarted.
#[derive(Debug)]
pub struct Carver<R: Rng> {
    grid: Grid,
    rng: R,
    history: Vec<Position>,
    current: Position,
    visited: usize,
    target: usize,
    stuck: bool,
}

impl<R: Rng> Carver<R> {
    pub fn new(mut grid: Grid, rng: R) -> Carver<R> {
        let current = grid.dimensions().entry_cell();
        let target = grid.dimensions().logical_cells();
        grid.set(current, CellState::Path);

        Carver {
            grid,
            rng,
            history: Vec::with_capacity(target),
            current,
            visited: 1,
            target,
            stuck: false,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell the walk is standing on.
    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    /// Logical cells visited so far, including the first.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.visited >= self.target || self.stuck
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl<R: Rng> Iterator for Carver<R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.is_done() {
            return None;
        }

        let from = self.current;
        match self.grid.random_neighbour_in_state(&mut self.rng, from, 2, CellState::Empty) {
            Some(to) => {
                self.grid.set(from.midpoint(to), CellState::Path);
                self.grid.set(to, CellState::Path);
                self.history.push(from);
                self.current = to;
                self.visited += 1;
                trace!("carve {} -> {}", from, to);
                Some(Step::Advance { from, to })
            }
            None => {
                if let Some(to) = self.history.pop() {
                    self.current = to;
                    trace!("carve backtrack {} -> {}", from, to);
                    Some(Step::Backtrack { from, to })
                } else {
                    // Every logical cell is reachable from the entry cell, so the history
                    // only empties once all of them have been visited.
                    debug_assert!(false, "carver stuck at {} after {} of {} cells",
                                  from, self.visited, self.target);
                    self.stuck = true;
                    None
                }
            }
        }
    }
}
