use crate::cells::Position;
use crate::errors::*;
use crate::units::{CellSize, ColumnsCount, Height, NodesCount, RowsCount, Width};

/// Smallest column or row count with an interior, a start and a stop.
pub const MIN_GRID_SIDE: usize = 5;

/// The column and row counts of a maze grid, both odd and at least `MIN_GRID_SIDE`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    columns: ColumnsCount,
    rows: RowsCount,
}

impl MazeDimensions {
    /// Fit as many whole cells of `cell_size` pixels into the pixel area as possible,
    /// rounding each side down to an odd count.
    pub fn from_pixels(width: Width, height: Height, cell_size: CellSize) -> Result<MazeDimensions> {
        let invalid = || ErrorKind::InvalidDimensions(width.0, height.0, cell_size.0);

        if cell_size.0 == 0 {
            return Err(invalid().into());
        }

        let columns = largest_odd_at_most((width.0 / cell_size.0) as usize);
        let rows = largest_odd_at_most((height.0 / cell_size.0) as usize);

        MazeDimensions::new(ColumnsCount(columns), RowsCount(rows)).ok_or_else(|| invalid().into())
    }

    /// Dimensions from already known counts. `None` unless both are odd and large enough.
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> Option<MazeDimensions> {
        let valid = |n: usize| n >= MIN_GRID_SIDE && n % 2 == 1 && n <= u32::max_value() as usize;
        if valid(columns.0) && valid(rows.0) {
            Some(MazeDimensions { columns, rows })
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.columns.0 * self.rows.0)
    }

    /// Number of logical (odd, interior) cells, which is the number of cells the carver visits.
    #[inline]
    pub fn logical_cells(&self) -> usize {
        (self.columns.0 - 1) * (self.rows.0 - 1) / 4
    }

    /// Entrance on the left border, one row down from the corner.
    #[inline]
    pub fn start(&self) -> Position {
        Position::new(0, 1)
    }

    /// Exit on the right border, one row up from the corner.
    #[inline]
    pub fn stop(&self) -> Position {
        Position::new(self.columns.0 as u32 - 1, self.rows.0 as u32 - 2)
    }

    /// The interior cell just inside the entrance, where carving and solving begin.
    #[inline]
    pub fn entry_cell(&self) -> Position {
        let start = self.start();
        Position::new(start.x + 1, start.y)
    }

    /// The interior cell just inside the exit, where solving ends.
    #[inline]
    pub fn exit_cell(&self) -> Position {
        let stop = self.stop();
        Position::new(stop.x - 1, stop.y)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (pos.x as usize) < self.columns.0 && (pos.y as usize) < self.rows.0
    }

    #[inline]
    pub fn is_border(&self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x as usize == self.columns.0 - 1 ||
        pos.y as usize == self.rows.0 - 1
    }

    /// Row major index of an in bounds position.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.x as usize + pos.y as usize * self.columns.0)
        } else {
            None
        }
    }

    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.columns.0) as u32, (index / self.columns.0) as u32)
    }
}

fn largest_odd_at_most(n: usize) -> usize {
    if n % 2 == 1 { n } else { n.saturating_sub(1) }
}
