use super::*;

/// Uniform placement: shuffle every linear index and mine the first `mines` of them.
///
/// No start cell is kept safe, the first reveal may hit a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffleGenerator {
    seed: Option<u64>,
}

impl ShuffleGenerator {
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub const fn unseeded() -> Self {
        Self { seed: None }
    }
}

impl MineGenerator for ShuffleGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let mut indexes: Vec<CellIndex> = (0..config.total_cells() as CellIndex).collect();
        match self.seed {
            Some(seed) => indexes.shuffle(&mut SmallRng::seed_from_u64(seed)),
            None => indexes.shuffle(&mut rand::rng()),
        }
        indexes.truncate(config.mines as usize);

        log::debug!(
            "Placing {} mines on a {}x{} board (seed: {:?})",
            config.mines,
            config.width,
            config.height,
            self.seed
        );
        Board::from_mine_indexes(config.size(), &indexes)
    }
}
