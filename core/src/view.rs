use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a renderer needs, detached from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub game_over: bool,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board, game_over: bool) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);

        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = board.view(index);
        }

        Self {
            size,
            game_over,
            cells,
        }
    }

    pub fn at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    pub fn row(&self, y: Coord) -> impl Iterator<Item = CellView> + '_ {
        self.cells.row(y.into()).into_iter().copied()
    }
}
