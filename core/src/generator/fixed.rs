use super::*;

/// Places mines at a known list of linear indexes, for replays and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedGenerator {
    mines: Vec<CellIndex>,
}

impl FixedGenerator {
    pub fn new(mines: impl Into<Vec<CellIndex>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        config.validate()?;
        let board = Board::from_mine_indexes(config.size(), &self.mines)?;
        if board.mine_count() != config.mines {
            log::warn!(
                "Fixed layout has {} mines, requested {}",
                board.mine_count(),
                config.mines
            );
            return Err(BoardError::InvalidConfiguration {
                width: config.width,
                height: config.height,
                mines: config.mines,
            });
        }
        Ok(board)
    }
}
