//! Read only checks and measurements over a carved grid.
//!
//! The grid itself only knows cell states. Here the logical cells and the open connectors
//! between them are lifted into a graph so the maze can be checked for being perfect
//! (a spanning tree) and measured.

use bit_set::BitSet;
use fnv::FnvHashMap;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::VecDeque;

use crate::cells::{CompassPrimary, Position};
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};

/// Undirected graph with a node per logical cell and an edge per open connector.
#[derive(Debug, Clone)]
pub struct PassageGraph {
    graph: UnGraph<Position, ()>,
    nodes: FnvHashMap<Position, NodeIndex>,
}

impl PassageGraph {
    pub fn new(grid: &Grid) -> PassageGraph {
        let cells_count = grid.dimensions().logical_cells();
        let mut graph = UnGraph::with_capacity(cells_count, cells_count);
        let mut nodes = FnvHashMap::with_capacity_and_hasher(cells_count, Default::default());

        for pos in grid.logical_cells() {
            nodes.insert(pos, graph.add_node(pos));
        }

        // Only look east and south, each connector is then seen once.
        for pos in grid.logical_cells() {
            for &dir in &[CompassPrimary::East, CompassPrimary::South] {
                let connector = pos.offset(dir, 1);
                let beyond = pos.offset(dir, 2).and_then(|p| nodes.get(&p).cloned());
                let is_open = connector.and_then(|c| grid.get(c)).map_or(false, |s| s.is_open());

                if let (true, Some(other)) = (is_open, beyond) {
                    graph.add_edge(nodes[&pos], other, ());
                }
            }
        }

        PassageGraph { graph, nodes }
    }

    #[inline]
    pub fn graph(&self) -> &UnGraph<Position, ()> {
        &self.graph
    }

    #[inline]
    pub fn node_count(&self) -> NodesCount {
        NodesCount(self.graph.node_count())
    }

    #[inline]
    pub fn edge_count(&self) -> EdgesCount {
        EdgesCount(self.graph.edge_count())
    }

    /// Number of passages leading out of a logical cell, `None` for any other position.
    pub fn degree(&self, pos: Position) -> Option<usize> {
        self.nodes.get(&pos).map(|&index| self.graph.neighbors(index).count())
    }

    /// Connected, acyclic and with exactly one edge fewer than nodes.
    pub fn is_spanning_tree(&self) -> bool {
        let NodesCount(nodes) = self.node_count();
        let EdgesCount(edges) = self.edge_count();
        nodes > 0 && edges == nodes - 1 && connected_components(&self.graph) == 1 &&
        !is_cyclic_undirected(&self.graph)
    }
}

pub fn passage_graph(grid: &Grid) -> PassageGraph {
    PassageGraph::new(grid)
}

/// Is there exactly one route between every pair of logical cells?
pub fn is_perfect_maze(grid: &Grid) -> bool {
    passage_graph(grid).is_spanning_tree()
}

/// Logical cells with a single way in or out.
pub fn dead_ends(grid: &Grid) -> usize {
    let passages = passage_graph(grid);
    grid.logical_cells()
        .filter(|&pos| passages.degree(pos) == Some(1))
        .count()
}

/// Steps from one cell to every reachable open cell of a grid.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Position,
    reached: BitSet,
    steps: Vec<u32>,
    max: u32,
    columns: usize,
}

/// Breadth first flood from `start` over every non wall cell.
/// `None` if `start` is outside the grid or is a wall.
pub fn distances_from(grid: &Grid, start: Position) -> Option<Distances> {
    let start_index = grid.dimensions().index_of(start)?;
    if !grid.get(start)?.is_open() {
        return None;
    }

    let mut reached = BitSet::with_capacity(grid.size());
    let mut steps = vec![0; grid.size()];
    let mut max = 0;
    let mut frontier = VecDeque::new();

    reached.insert(start_index);
    frontier.push_back(start);

    while let Some(pos) = frontier.pop_front() {
        let distance = steps[pos.x as usize + pos.y as usize * grid.columns().0];
        if distance > max {
            max = distance;
        }

        for neighbour in grid.neighbours(pos, 1) {
            let open = grid.get(neighbour).map_or(false, |s| s.is_open());
            if let (true, Some(index)) = (open, grid.dimensions().index_of(neighbour)) {
                if reached.insert(index) {
                    steps[index] = distance + 1;
                    frontier.push_back(neighbour);
                }
            }
        }
    }

    Some(Distances {
        start,
        reached,
        steps,
        max,
        columns: grid.columns().0,
    })
}

impl Distances {
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Steps from the start to `pos`, `None` if unreachable.
    pub fn to(&self, pos: Position) -> Option<u32> {
        if pos.x as usize >= self.columns {
            return None;
        }
        let index = pos.x as usize + pos.y as usize * self.columns;
        if self.reached.contains(index) {
            Some(self.steps[index])
        } else {
            None
        }
    }

    /// Number of cells reachable from the start, including itself.
    pub fn reachable(&self) -> usize {
        self.reached.len()
    }

    pub fn furthest_points(&self) -> Vec<Position> {
        self.reached
            .iter()
            .filter(|&index| self.steps[index] == self.max)
            .map(|index| Position::new((index % self.columns) as u32, (index / self.columns) as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CellState;
    use crate::generators::recursive_backtracker;
    use crate::grid_dimensions::MazeDimensions;
    use crate::units::{ColumnsCount, RowsCount};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blank_grid(columns: usize, rows: usize) -> Grid {
        Grid::new(MazeDimensions::new(ColumnsCount(columns), RowsCount(rows)).unwrap())
    }

    fn carved(columns: usize, rows: usize, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        recursive_backtracker(blank_grid(columns, rows), &mut rng)
    }

    #[test]
    fn blank_grid_has_no_passages() {
        let g = blank_grid(9, 7);
        let passages = passage_graph(&g);
        assert_eq!(passages.node_count(), NodesCount(12));
        assert_eq!(passages.edge_count(), EdgesCount(0));
        assert!(!passages.is_spanning_tree());
        assert_eq!(dead_ends(&g), 0);
    }

    #[test]
    fn hand_carved_corridor() {
        // 7x5: logical cells (1,1), (3,1), (5,1), (1,3), (3,3), (5,3)
        let mut g = blank_grid(7, 5);
        for &(x, y) in &[(2, 1), (4, 1), (5, 2), (4, 3), (2, 3)] {
            g.set(Position::new(x, y), CellState::Path);
        }
        let passages = passage_graph(&g);
        assert_eq!(passages.edge_count(), EdgesCount(5));
        assert!(passages.is_spanning_tree());
        assert_eq!(passages.degree(Position::new(1, 1)), Some(1));
        assert_eq!(passages.degree(Position::new(3, 1)), Some(2));
        assert_eq!(passages.degree(Position::new(2, 1)), None);
        assert_eq!(dead_ends(&g), 2);
    }

    #[test]
    fn a_loop_is_not_perfect() {
        let mut g = blank_grid(5, 5);
        for &(x, y) in &[(2, 1), (3, 2), (2, 3), (1, 2)] {
            g.set(Position::new(x, y), CellState::Path);
        }
        let passages = passage_graph(&g);
        assert_eq!(passages.edge_count(), EdgesCount(4));
        assert!(!passages.is_spanning_tree());
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn stop_punch_is_not_a_passage() {
        let g = carved(9, 9, 1);
        let passages = passage_graph(&g);
        assert_eq!(passages.edge_count().0, passages.node_count().0 - 1);
    }

    #[test]
    fn carved_maze_is_perfect_and_connected() {
        let g = carved(31, 25, 2);
        assert!(is_perfect_maze(&g));

        let distances = distances_from(&g, g.dimensions().entry_cell()).unwrap();
        assert!(g.logical_cells().all(|pos| distances.to(pos).is_some()));
        // every open cell, plus the start and stop punches
        let open = g.iter().filter(|&(_, s)| s.is_open()).count();
        assert_eq!(distances.reachable(), open);
    }

    #[test]
    fn distances_from_walls_or_outside_are_none() {
        let g = carved(9, 9, 3);
        assert!(distances_from(&g, Position::new(0, 0)).is_none());
        assert!(distances_from(&g, Position::new(20, 20)).is_none());
    }

    #[test]
    fn distances_along_a_corridor() {
        let mut g = blank_grid(7, 5);
        for &(x, y) in &[(2, 1), (4, 1), (5, 2), (4, 3), (2, 3)] {
            g.set(Position::new(x, y), CellState::Path);
        }
        let distances = distances_from(&g, Position::new(1, 1)).unwrap();
        assert_eq!(distances.start(), Position::new(1, 1));
        assert_eq!(distances.to(Position::new(1, 1)), Some(0));
        assert_eq!(distances.to(Position::new(0, 1)), Some(1));
        assert_eq!(distances.to(Position::new(5, 1)), Some(4));
        assert_eq!(distances.to(Position::new(1, 3)), Some(10));
        assert_eq!(distances.to(Position::new(6, 3)), Some(7));
        assert_eq!(distances.to(Position::new(2, 2)), None);
        assert_eq!(distances.to(Position::new(7, 1)), None);
        assert_eq!(distances.max(), 10);
        assert_eq!(distances.furthest_points(), vec![Position::new(1, 3)]);
    }
}
