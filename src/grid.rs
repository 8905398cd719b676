use rand::seq::SliceRandom;
use rand::Rng;
use std::slice;

use crate::cells::{CellState, CompassPrimary, Position, PositionSmallVec};
use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnsCount, RowsCount};

/// A rectangular grid of cell states stored row major in one flat buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    dimensions: MazeDimensions,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate the grid in its pre-carving state: walls on the border and between
    /// every pair of logical cells, logical cells `Empty`, start and stop punched
    /// through the left and right borders.
    pub fn new(dimensions: MazeDimensions) -> Grid {
        let ColumnsCount(columns) = dimensions.columns();
        let RowsCount(rows) = dimensions.rows();

        let mut grid = Grid {
            dimensions,
            cells: vec![CellState::Wall; columns * rows],
        };

        for y in (1..rows - 1).step_by(2) {
            for x in (1..columns - 1).step_by(2) {
                grid.cells[x + y * columns] = CellState::Empty;
            }
        }

        let (start, stop) = (dimensions.start(), dimensions.stop());
        grid.set(start, CellState::Start);
        grid.set(stop, CellState::Stop);

        grid
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.dimensions.start()
    }

    #[inline]
    pub fn stop(&self) -> Position {
        self.dimensions.stop()
    }

    /// State of the cell at `pos`, `None` if outside the grid.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.dimensions.index_of(pos).map(|index| self.cells[index])
    }

    /// Overwrite the state at `pos`, returning the previous state.
    /// Returns `None` and changes nothing if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, state: CellState) -> Option<CellState> {
        let index = self.dimensions.index_of(pos)?;
        let previous = self.cells[index];
        self.cells[index] = state;
        Some(previous)
    }

    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.dimensions.contains(pos)
    }

    /// Cells `distance` steps away to the south, north, east and west that lie in the grid.
    pub fn neighbours(&self, pos: Position, distance: u32) -> PositionSmallVec {
        CompassPrimary::ALL.iter()
            .filter_map(|&dir| pos.offset(dir, distance))
            .filter(|&neighbour| self.is_valid_position(neighbour))
            .collect()
    }

    /// Neighbours `distance` steps away whose current state is `wanted`.
    pub fn neighbours_in_state(&self, pos: Position, distance: u32, wanted: CellState) -> PositionSmallVec {
        CompassPrimary::ALL.iter()
            .filter_map(|&dir| pos.offset(dir, distance))
            .filter(|&neighbour| self.get(neighbour) == Some(wanted))
            .collect()
    }

    /// Pick one of the `wanted` state neighbours uniformly at random.
    pub fn random_neighbour_in_state<R: Rng>(&self,
                                             rng: &mut R,
                                             pos: Position,
                                             distance: u32,
                                             wanted: CellState)
                                             -> Option<Position> {
        self.neighbours_in_state(pos, distance, wanted).choose(rng).cloned()
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Every cell with its position, row by row.
    pub fn iter(&self) -> CellIter {
        CellIter {
            cells: self.cells.iter().enumerate(),
            dimensions: &self.dimensions,
        }
    }

    /// The cell states one row at a time, top to bottom.
    pub fn iter_row(&self) -> slice::Chunks<CellState> {
        self.cells.chunks(self.dimensions.columns().0)
    }

    /// The logical (odd, interior) cell positions, row by row.
    pub fn logical_cells<'a>(&'a self) -> impl Iterator<Item = Position> + 'a {
        let ColumnsCount(columns) = self.columns();
        let RowsCount(rows) = self.rows();
        (1..rows - 1).step_by(2).flat_map(move |y| {
            (1..columns - 1).step_by(2).map(move |x| Position::new(x as u32, y as u32))
        })
    }
}

#[derive(Debug, Clone)]
pub struct CellIter<'a> {
    cells: std::iter::Enumerate<slice::Iter<'a, CellState>>,
    dimensions: &'a MazeDimensions,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = (Position, CellState);

    fn next(&mut self) -> Option<Self::Item> {
        let dimensions = self.dimensions;
        self.cells.next().map(|(index, &state)| (dimensions.position_of(index), state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}
impl<'a> ExactSizeIterator for CellIter<'a> {} // default impl using size_hint()

impl<'a> IntoIterator for &'a Grid {
    type Item = (Position, CellState);
    type IntoIter = CellIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
