use thiserror::Error;

use crate::{CellCount, CellIndex, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board configuration: {width}x{height} with {mines} mines")]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Mine index {0} is outside the board")]
    InvalidMineIndex(CellIndex),
    #[error("Mine index {0} was given more than once")]
    DuplicateMineIndex(CellIndex),
    #[error("Cell index {index} is out of bounds for a board of {len} cells")]
    IndexOutOfBounds { index: CellIndex, len: CellCount },
    #[error("No board has been generated yet")]
    NoBoard,
    #[error("Game is over, no new reveals are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, BoardError>;
