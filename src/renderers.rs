use image::{Pixel, Rgba, RgbaImage};
use log::debug;
use std::path::Path;

use crate::cells::CellState;
use crate::errors::*;
use crate::maze::MazeEngine;
use crate::units::{CellSize, Height, Width};

/// Fills the image area the grid does not cover.
pub const BACKGROUND: Rgba<u8> = Rgba([192, 192, 192, 255]);

/// Colour a cell state is drawn with. The solution is translucent and meant to be blended
/// over an open cell.
pub fn colour_of(state: CellState) -> Rgba<u8> {
    match state {
        CellState::Wall => Rgba([0, 0, 0, 255]),
        CellState::Empty | CellState::Path => Rgba([255, 255, 255, 255]),
        CellState::Start => Rgba([0, 255, 0, 255]),
        CellState::Stop => Rgba([255, 0, 0, 255]),
        CellState::Solution => Rgba([0, 0, 255, 77]),
    }
}

/// The square each cell occupies in pixels: `(left, top, side, state)`, row by row.
pub fn cell_rects<'a>(maze: &'a MazeEngine) -> impl Iterator<Item = (u32, u32, u32, CellState)> + 'a {
    let CellSize(side) = maze.cell_size();
    maze.iter().map(move |(pos, state)| (pos.x * side, pos.y * side, side, state))
}

/// Draw the maze at its full pixel size.
pub fn render_image(maze: &MazeEngine) -> RgbaImage {
    let (Width(width), Height(height)) = (maze.width(), maze.height());
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);
    let open = colour_of(CellState::Empty);

    for (left, top, side, state) in cell_rects(maze) {
        let colour = colour_of(state);
        for y in top..(top + side).min(height) {
            for x in left..(left + side).min(width) {
                if state == CellState::Solution {
                    let mut blended = open;
                    blended.blend(&colour);
                    image.put_pixel(x, y, blended);
                } else {
                    image.put_pixel(x, y, colour);
                }
            }
        }
    }

    image
}

/// Render the maze and write it out as a PNG file.
pub fn save_png<P: AsRef<Path>>(maze: &MazeEngine, path: P) -> Result<()> {
    let path = path.as_ref();
    render_image(maze).save(path)?;
    debug!("saved maze image {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Position;
    use crate::maze::MazeBuilder;
    use std::fs;

    fn maze(width: u32, height: u32, cell: u32, solve: bool) -> MazeEngine {
        MazeBuilder::new(Width(width), Height(height), CellSize(cell))
            .solve(solve)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn state_colours() {
        assert_eq!(colour_of(CellState::Wall), Rgba([0, 0, 0, 255]));
        assert_eq!(colour_of(CellState::Empty), colour_of(CellState::Path));
        assert_eq!(colour_of(CellState::Start), Rgba([0, 255, 0, 255]));
        assert_eq!(colour_of(CellState::Stop), Rgba([255, 0, 0, 255]));
        assert!(colour_of(CellState::Solution)[3] < 255);
    }

    #[test]
    fn one_rect_per_cell() {
        let m = maze(101, 101, 10, false);
        let rects = cell_rects(&m).collect::<Vec<_>>();
        assert_eq!(rects.len(), 81);
        assert_eq!(rects[0], (0, 0, 10, CellState::Wall));
        assert_eq!(rects[9], (0, 10, 10, CellState::Start));
        assert_eq!(rects[9 * 7 + 8], (80, 70, 10, CellState::Stop));
    }

    #[test]
    fn image_pixels() {
        let m = maze(105, 105, 10, true);
        let image = render_image(&m);
        assert_eq!(image.dimensions(), (105, 105));

        assert_eq!(*image.get_pixel(0, 0), colour_of(CellState::Wall));
        assert_eq!(*image.get_pixel(5, 15), colour_of(CellState::Start));
        assert_eq!(*image.get_pixel(85, 75), colour_of(CellState::Stop));
        // beyond the 9x9 cells
        assert_eq!(*image.get_pixel(100, 100), BACKGROUND);

        let entry = m.grid().dimensions().entry_cell();
        assert_eq!(m.state_at(entry), Some(CellState::Solution));
        let route = *image.get_pixel(entry.x * 10 + 5, entry.y * 10 + 5);
        assert_eq!(route[2], 255);
        assert!(route[0] > 0 && route[0] < 255);
        assert_eq!(route[0], route[1]);
    }

    #[test]
    fn unsolved_image_has_no_route_colour() {
        let m = maze(105, 105, 10, false);
        let image = render_image(&m);
        let open = colour_of(CellState::Empty);
        let inside = m.grid().dimensions().entry_cell();
        assert_eq!(m.state_at(inside), Some(CellState::Path));
        assert_eq!(*image.get_pixel(15, 15), open);
        assert_eq!(m.state_at(Position::new(0, 0)), Some(CellState::Wall));
    }

    #[test]
    fn writes_png() {
        let m = maze(210, 110, 10, true);
        let path = std::env::temp_dir().join(format!("mazes-renderers-{}.png", std::process::id()));
        save_png(&m, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.dimensions(), (210, 110));
        assert_eq!(loaded, render_image(&m));
    }
}
