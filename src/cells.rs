use smallvec::SmallVec;
use std::fmt;

/// The state of one grid cell.
///
/// Logical maze cells sit at odd (x, y) coordinates and the walls between them at the
/// midpoints, so a carved passage is just a connector cell turned from `Wall` to `Path`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    /// Solid wall, never walkable.
    Wall,
    /// Not yet visited by the carver, or abandoned by the solver.
    Empty,
    /// Carved and walkable.
    Path,
    /// Entrance punched through the left border.
    Start,
    /// Exit punched through the right border.
    Stop,
    /// On the route found by the solver.
    Solution,
}

impl CellState {
    /// Can a walker stand on this cell once the maze has been carved?
    #[inline]
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Position {
        Position { x, y }
    }

    /// The position `distance` cells away in the given direction, if it is representable.
    /// No check is made against any grid bounds.
    pub fn offset(self, dir: CompassPrimary, distance: u32) -> Option<Position> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(distance).map(|y| Position { x, y }),
            CompassPrimary::South => y.checked_add(distance).map(|y| Position { x, y }),
            CompassPrimary::East => x.checked_add(distance).map(|x| Position { x, y }),
            CompassPrimary::West => x.checked_sub(distance).map(|x| Position { x, y }),
        }
    }

    /// The cell halfway between two positions on the same row or column.
    #[inline]
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Manhattan distance between two positions.
    pub fn steps_to(self, other: Position) -> u32 {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy
    }

    /// Both coordinates odd, i.e. a logical maze cell rather than a connector.
    #[inline]
    pub fn is_logical_cell(self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }
}

impl From<(u32, u32)> for Position {
    fn from(x_y_pair: (u32, u32)) -> Position {
        Position::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub type PositionSmallVec = SmallVec<[Position; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::South,
                                          CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::West];
}
