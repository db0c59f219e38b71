use serde::{Deserialize, Serialize};

/// State stored for a single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) is_revealed: bool,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }
}

/// What a presentation layer shows for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Mine,
    Empty,
    Numbered(u8),
}

impl CellView {
    pub const fn from_adjacent(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Numbered(count)
        }
    }
}
