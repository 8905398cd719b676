use docopt::Docopt;
use error_chain::bail;
use log::info;
use mazes::{
    analysis,
    renderers,
    units::{CellSize, Height, Width},
    MazeBuilder,
    MazeEngine,
};
use serde_derive::Deserialize;
use std::fs;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--width=<px>] [--height=<px>] [--cell-pixels=<n>] [--no-solve] [--seed=<n>] [--count=<n>] [--image-out=<path>] [--text-out=<path>] [--save-edges=<path>] [--verify]

Options:
    -h --help              Show this screen.
    --width=<px>           Width in pixels of the area the maze is fitted to [default: 1010].
    --height=<px>          Height in pixels of the area the maze is fitted to [default: 610].
    --cell-pixels=<n>      Pixel length of one side of a square cell [default: 10].
    --no-solve             Do not mark the route from start to stop.
    --seed=<n>             Seed the random number generator for a reproducible maze.
    --count=<n>            Generate n mazes in turn, keeping the last one [default: 1].
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --text-out=<path>      Output file path for a textual rendering of the maze. Printed to stdout if neither output path is given.
    --save-edges=<path>    Serialize the maze passages to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --verify               Check the maze is perfect and log some measurements of it.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: u32,
    flag_height: u32,
    flag_cell_pixels: u32,
    flag_no_solve: bool,
    flag_seed: Option<u64>,
    flag_count: usize,
    flag_image_out: String,
    flag_text_out: String,
    flag_save_edges: String,
    flag_verify: bool,
}

// The driver's errors wrap the library's along with the command line and file failures.
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let builder = MazeBuilder::new(Width(args.flag_width),
                                   Height(args.flag_height),
                                   CellSize(args.flag_cell_pixels))
        .solve(!args.flag_no_solve);
    let builder = match args.flag_seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };

    let mut maze = builder.build()?;
    for _ in 1..args.flag_count {
        maze = maze.regenerate()?;
    }
    info!("{}x{} maze from seed {}", maze.columns().0, maze.rows().0, maze.seed());

    if args.flag_verify {
        verify_maze(&maze)?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if !args.flag_image_out.is_empty() {
        renderers::save_png(&maze, &args.flag_image_out)
            .chain_err(|| format!("Failed to write maze to image file {}", args.flag_image_out))?;
    }

    if !args.flag_text_out.is_empty() {
        fs::write(&args.flag_text_out, format!("{}\n", maze))
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    } else if args.flag_image_out.is_empty() {
        println!("{}", maze);
    }

    Ok(())
}

fn verify_maze(maze: &MazeEngine) -> Result<()> {
    let grid = maze.grid();
    if !analysis::is_perfect_maze(grid) {
        bail!("maze from seed {} is not perfect", maze.seed());
    }

    let passages = analysis::passage_graph(grid);
    info!("perfect maze: {} cells, {} passages, {} dead ends",
          passages.node_count().0,
          passages.edge_count().0,
          analysis::dead_ends(grid));

    if let Some(distances) = analysis::distances_from(grid, grid.dimensions().entry_cell()) {
        info!("furthest cells are {} steps from the entrance", distances.max());
    }
    if let Some(route) = maze.solution() {
        info!("solution visits {} cells", route.len());
    }
    Ok(())
}

fn save_maze_graph(maze: &MazeEngine, file_path: &str) -> Result<()> {
    let passages = analysis::passage_graph(maze.grid());
    let graph = passages.graph();

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", graph.node_count(), graph.edge_count()));
    for edge in graph.edge_indices() {
        if let Some((src, dst)) = graph.edge_endpoints(edge) {
            graph_data.push_str(&format!("{} {}\n", src.index() + 1, dst.index() + 1));
        }
    }

    fs::write(file_path, graph_data)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    Ok(())
}
