/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Row-major linear index of a cell, `y * width + x`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Boards are stored as `(height, width)` arrays so that the standard layout
/// matches the linear index order.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Which sides of the board a cell touches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    pub fn of(index: CellIndex, width: Coord, height: Coord) -> Self {
        let width = usize::from(width);
        let height = usize::from(height);
        Self {
            top: index < width,
            bottom: index >= width * (height - 1),
            left: index % width == 0,
            right: index % width == width - 1,
        }
    }

    /// Whether a step of `(dx, dy)` would cross one of the touched sides.
    const fn blocks(self, (dx, dy): (isize, isize)) -> bool {
        (dx < 0 && self.left)
            || (dx > 0 && self.right)
            || (dy < 0 && self.top)
            || (dy > 0 && self.bottom)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighborhood {
    /// All 8 surrounding cells, used for counting mines.
    Moore,
    /// The 4 orthogonal cells, used for cascading reveals.
    VonNeumann,
}

impl Neighborhood {
    const fn displacements(self) -> &'static [(isize, isize)] {
        match self {
            Self::Moore => &MOORE,
            Self::VonNeumann => &VON_NEUMANN,
        }
    }
}

const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const VON_NEUMANN: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug)]
pub struct NeighborIter {
    center: CellIndex,
    width: isize,
    edges: Edges,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub fn new(center: CellIndex, (width, height): Coord2, neighborhood: Neighborhood) -> Self {
        Self {
            center,
            width: isize::try_from(width).unwrap_or(isize::MAX),
            edges: Edges::of(center, width, height),
            displacements: neighborhood.displacements(),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &delta = self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            if self.edges.blocks(delta) {
                continue;
            }

            let (dx, dy) = delta;
            if let Some(next) = self.center.checked_add_signed(dx + dy * self.width) {
                return Some(next);
            }
        }
    }
}
