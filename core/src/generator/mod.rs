use crate::*;
pub use fixed::*;
pub use shuffle::*;

mod fixed;
mod shuffle;

pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board>;
}
