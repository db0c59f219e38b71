//! Single-player minesweeper grid engine.
//!
//! A [`Minefield`] owns the current [`Board`], places mines through a
//! [`MineGenerator`], and answers reveal requests with plain data that a
//! presentation layer can render directly.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Largest side length a presentation layer offers by default.
pub const DEFAULT_MAX_SIDE: Coord = 30;

/// Upper bound for a configured `max_side`, keeps boards at a million cells.
pub const MAX_SIDE_CEILING: Coord = 1000;

/// Parameters of a new game before any clamping by the caller.
pub const DEFAULT_CONFIG: BoardConfig = BoardConfig::new_unchecked(20, 20, 50);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_side: Coord,
}

impl Limits {
    /// Clamps `max_side` into `2..=MAX_SIDE_CEILING`, the smallest range that
    /// still admits a valid board.
    pub fn new(max_side: Coord) -> Self {
        let clamped = max_side.clamp(2, MAX_SIDE_CEILING);
        if clamped != max_side {
            log::info!("Clamped max side {} to {}", max_side, clamped);
        }
        Self { max_side: clamped }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_side: DEFAULT_MAX_SIDE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Validates the parameters, at least one cell must stay mine-free.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Clamps the parameters the way an input form does: each side into
    /// `1..=max_side`, then mines into `1..=area - 1` for the clamped area.
    pub fn clamped(width: Coord, height: Coord, mines: CellCount, limits: &Limits) -> Self {
        let max_side = limits.max_side.clamp(2, MAX_SIDE_CEILING);
        let width = width.clamp(1, max_side);
        let mut height = height.clamp(1, max_side);
        if mult(width, height) < 2 {
            log::debug!("Single cell board has no valid mine count, growing height to 2");
            height = 2;
        }
        let mines = mines.clamp(1, mult(width, height) - 1);
        Self::new_unchecked(width, height, mines)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = self.width >= 1
            && self.height >= 1
            && self.mines >= 1
            && self.mines < self.total_cells();
        if valid {
            Ok(())
        } else {
            log::warn!(
                "Rejecting board configuration {}x{} with {} mines",
                self.width,
                self.height,
                self.mines
            );
            Err(BoardError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                mines: self.mines,
            })
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
