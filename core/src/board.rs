use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of cells for one game session, addressed by row-major linear index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
}

impl Board {
    fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
            revealed_count: 0,
        }
    }

    /// Builds an unrevealed board with mines at `mines`.
    pub fn from_mine_indexes(size: Coord2, mines: &[CellIndex]) -> Result<Self> {
        let mine_count = CellCount::try_from(mines.len()).unwrap_or(CellCount::MAX);
        BoardConfig::new(size.0, size.1, mine_count)?;

        let mut board = Self::empty(size);
        for &index in mines {
            if index >= board.len() {
                return Err(BoardError::InvalidMineIndex(index));
            }
            let nd_index = board.nd_index(index);
            let cell = &mut board.cells[nd_index];
            if cell.has_mine {
                return Err(BoardError::DuplicateMineIndex(index));
            }
            cell.has_mine = true;
        }
        board.mine_count = mine_count;

        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    /// Number of cells, also one past the largest valid index.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn total_cells(&self) -> CellCount {
        self.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(BoardError::IndexOutOfBounds {
                index,
                len: self.total_cells(),
            })
        }
    }

    pub fn index_of(&self, (x, y): Coord2) -> Result<CellIndex> {
        let (width, height) = self.size();
        if x < width && y < height {
            Ok(usize::from(y) * usize::from(width) + usize::from(x))
        } else {
            Err(BoardError::IndexOutOfBounds {
                index: usize::from(y) * usize::from(width) + usize::from(x),
                len: self.total_cells(),
            })
        }
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        let width = usize::from(self.width());
        Ok(((index % width) as Coord, (index / width) as Coord))
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.validate_index(index).ok().map(|index| self[index])
    }

    /// # Panics
    ///
    /// Panics if `index` is outside the board, see [`Board::get`].
    pub fn has_mine(&self, index: CellIndex) -> bool {
        self[index].has_mine
    }

    /// # Panics
    ///
    /// Panics if `index` is outside the board, see [`Board::get`].
    pub fn is_revealed(&self, index: CellIndex) -> bool {
        self[index].is_revealed
    }

    pub fn neighbors(&self, index: CellIndex, neighborhood: Neighborhood) -> NeighborIter {
        NeighborIter::new(index, self.size(), neighborhood)
    }

    /// Mines among the valid 8-neighborhood of `index`.
    pub fn adjacent_mine_count(&self, index: CellIndex) -> u8 {
        self.neighbors(index, Neighborhood::Moore)
            .filter(|&pos| self[pos].has_mine)
            .count() as u8
    }

    pub fn mine_indexes(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.has_mine)
            .map(|(index, _)| index)
    }

    /// What a renderer should show at `index` right now.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn view(&self, index: CellIndex) -> CellView {
        let cell = self[index];
        match (cell.is_revealed, cell.has_mine) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Mine,
            (true, false) => CellView::from_adjacent(self.adjacent_mine_count(index)),
        }
    }

    /// Returns whether the cell was hidden before.
    pub(crate) fn mark_revealed(&mut self, index: CellIndex) -> bool {
        let nd_index = self.nd_index(index);
        let cell = &mut self.cells[nd_index];
        if cell.is_revealed {
            return false;
        }
        cell.is_revealed = true;
        self.revealed_count += 1;
        true
    }

    fn nd_index(&self, index: CellIndex) -> [usize; 2] {
        let width = self.cells.ncols();
        [index / width, index % width]
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.nd_index(index)]
    }
}
