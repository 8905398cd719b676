use itertools::Itertools;
use std::fmt;

use crate::cells::CellState;
use crate::grid::Grid;

/// One character per cell state, as used by the text rendering of a grid.
pub fn glyph_of(state: CellState) -> char {
    match state {
        CellState::Wall => '#',
        CellState::Empty | CellState::Path => ' ',
        CellState::Start => 'S',
        CellState::Stop => 'E',
        CellState::Solution => '.',
    }
}

// One line per grid row, no trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.iter_row()
            .map(|row| row.iter().map(|&state| glyph_of(state)).collect::<String>())
            .join("\n");
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::recursive_backtracker;
    use crate::grid_dimensions::MazeDimensions;
    use crate::pathing::backtrack_solve;
    use crate::units::{ColumnsCount, RowsCount};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(columns: usize, rows: usize) -> Grid {
        Grid::new(MazeDimensions::new(ColumnsCount(columns), RowsCount(rows)).unwrap())
    }

    #[test]
    fn uncarved_grid() {
        let text = format!("{}", grid(7, 5));
        assert_eq!(text,
                   "#######\n\
                    S # # #\n\
                    #######\n\
                    # # # E\n\
                    #######");
    }

    #[test]
    fn one_line_per_row() {
        let g = grid(11, 9);
        let text = g.to_string();
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|line| line.chars().count() == 11));
    }

    #[test]
    fn solved_minimum_maze() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = recursive_backtracker(grid(5, 5), &mut rng);
        let g = backtrack_solve(g, &mut rng).unwrap();
        let text = g.to_string();

        assert_eq!(text.matches('.').count(), 5);
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
        assert!(text.starts_with("#####\nS."));
        // The one logical cell off the route and its connector.
        assert_eq!(text.matches(' ').count(), 2);
    }
}
