/// Pixel width of the drawing surface a maze is sized for.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub u32);
/// Pixel height of the drawing surface a maze is sized for.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub u32);
/// Side length in pixels of one grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellSize(pub u32);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);
