use fnv::FnvHashSet;
use log::{debug, trace, warn};
use rand::Rng;

use crate::cells::{CellState, Position};
use crate::errors::*;
use crate::generators::Step;
use crate::grid::Grid;

/// Find the route from the entrance to the exit of a carved maze, marking it `Solution`.
///
/// This is the carving walk again, one step at a time over `Path` cells instead of two
/// steps over `Empty` cells. Cells on dead end branches are reset to `Empty` as the walk
/// backs out of them, so once the exit is reached only the route is left marked.
/// Start and stop keep their own states.
///
/// Fails with `NoPathFound` if the walk runs out of history before reaching the exit,
/// which only happens on a grid that was not carved into a connected maze.
pub fn backtrack_solve<R: Rng>(grid: Grid, rng: &mut R) -> Result<Grid> {
    let mut solver = Solver::new(grid, rng);
    let mut steps = 0;
    while let Some(step) = solver.next() {
        step?;
        steps += 1;
    }
    debug!("solved in {} steps, route has {} cells", steps, solver.route_len());
    Ok(solver.into_grid())
}

/// The backtracking solver run one `Step` at a time.
///
/// Yields `Err(NoPathFound)` once if the search is exhausted, then ends.
#[derive(Debug)]
pub struct Solver<R: Rng> {
    grid: Grid,
    rng: R,
    history: Vec<Position>,
    current: Position,
    goal: Position,
    exhausted: bool,
}

impl<R: Rng> Solver<R> {
    pub fn new(mut grid: Grid, rng: R) -> Solver<R> {
        let current = grid.dimensions().entry_cell();
        let goal = grid.dimensions().exit_cell();
        grid.set(current, CellState::Solution);

        Solver {
            grid,
            rng,
            history: Vec::new(),
            current,
            goal,
            exhausted: false,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.current == self.goal
    }

    /// Cells currently marked as the route, including the one being stood on.
    #[inline]
    pub fn route_len(&self) -> usize {
        self.history.len() + 1
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl<R: Rng> Iterator for Solver<R> {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Result<Step>> {
        if self.exhausted || self.is_solved() {
            return None;
        }

        let from = self.current;
        match self.grid.random_neighbour_in_state(&mut self.rng, from, 1, CellState::Path) {
            Some(to) => {
                self.history.push(from);
                self.grid.set(to, CellState::Solution);
                self.current = to;
                trace!("solve {} -> {}", from, to);
                Some(Ok(Step::Advance { from, to }))
            }
            None => {
                if let Some(to) = self.history.pop() {
                    self.grid.set(from, CellState::Empty);
                    self.current = to;
                    trace!("solve backtrack {} -> {}", from, to);
                    Some(Ok(Step::Backtrack { from, to }))
                } else {
                    self.exhausted = true;
                    warn!("no path from {} to {}", self.grid.start(), self.grid.stop());
                    Some(Err(ErrorKind::NoPathFound(self.grid.start(), self.grid.stop()).into()))
                }
            }
        }
    }
}

/// The cells marked `Solution`, in order from the cell inside the entrance to the cell
/// inside the exit.
///
/// Returns `None` unless the marked cells form exactly one simple route between the two.
pub fn solution_path(grid: &Grid) -> Option<Vec<Position>> {
    let entry = grid.dimensions().entry_cell();
    let exit = grid.dimensions().exit_cell();

    if grid.get(entry) != Some(CellState::Solution) {
        return None;
    }

    let marked = grid.count(CellState::Solution);
    let mut seen = FnvHashSet::with_capacity_and_hasher(marked, Default::default());
    let mut path = vec![entry];
    seen.insert(entry);

    let mut current = entry;
    while current != exit {
        let onward = grid.neighbours_in_state(current, 1, CellState::Solution)
            .into_iter()
            .filter(|pos| !seen.contains(pos))
            .collect::<Vec<_>>();
        if onward.len() != 1 {
            return None;
        }
        current = onward[0];
        seen.insert(current);
        path.push(current);
    }

    if path.len() == marked { Some(path) } else { None }
}
