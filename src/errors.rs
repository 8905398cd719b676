// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get all of them.
#![allow(deprecated)]

use crate::cells::Position;
use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidDimensions(width: u32, height: u32, cell_size: u32) {
            description("invalid maze dimensions")
            display("cannot fit a maze of {} pixel cells into {}x{} pixels (need at least 5x5 cells)",
                    cell_size, width, height)
        }
        NoPathFound(start: Position, goal: Position) {
            description("no path through the maze")
            display("no path from {} to {}", start, goal)
        }
    }
}
