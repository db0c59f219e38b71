use serde::{Deserialize, Serialize};

use crate::*;

/// What the engine does with reveal requests once a mine has been hit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverPolicy {
    /// Keep answering reveals, the caller decides when to stop.
    #[default]
    Permissive,
    /// Reject reveals with [`BoardError::GameOver`] until the next board.
    Locked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// A hidden mine was opened.
    GameOver,
    /// A hidden safe cell with this many adjacent mines was opened.
    Numbered(u8),
    /// A hidden safe cell with no adjacent mines was opened and cascaded.
    Empty,
    /// The cell was already open and holds a mine.
    Mine,
    /// The cell was already open and is safe.
    Safe,
}

impl RevealOutcome {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub index: CellIndex,
    pub view: CellView,
}

/// Result of one reveal call: the outcome at the requested cell and every cell
/// that changed, the requested one first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub outcome: RevealOutcome,
    pub changed: Vec<CellUpdate>,
}

impl Reveal {
    fn unchanged(outcome: RevealOutcome) -> Self {
        Self {
            outcome,
            changed: Vec::new(),
        }
    }
}

impl Board {
    /// Opens `index`, cascading through 4-connected cells that have no
    /// adjacent mines.
    pub fn reveal(&mut self, index: CellIndex) -> Result<Reveal> {
        use RevealOutcome::*;

        let index = self.validate_index(index)?;
        let cell = self[index];

        if cell.is_revealed {
            return Ok(Reveal::unchanged(if cell.has_mine { Mine } else { Safe }));
        }

        self.mark_revealed(index);

        if cell.has_mine {
            log::debug!("Mine hit at {}", index);
            return Ok(Reveal {
                outcome: GameOver,
                changed: vec![CellUpdate {
                    index,
                    view: CellView::Mine,
                }],
            });
        }

        let adjacent_mines = self.adjacent_mine_count(index);
        let mut changed = vec![CellUpdate {
            index,
            view: CellView::from_adjacent(adjacent_mines),
        }];

        if adjacent_mines > 0 {
            return Ok(Reveal {
                outcome: Numbered(adjacent_mines),
                changed,
            });
        }

        self.cascade(index, &mut changed);
        log::trace!("Cascade from {} opened {} cells", index, changed.len());

        Ok(Reveal {
            outcome: Empty,
            changed,
        })
    }

    /// Iterative flood fill over hidden cells. Neighbors of a zero cell are
    /// never mines.
    fn cascade(&mut self, origin: CellIndex, changed: &mut Vec<CellUpdate>) {
        let mut to_visit: Vec<CellIndex> = self.hidden_orthogonal_neighbors(origin).collect();

        while let Some(visit_index) = to_visit.pop() {
            if !self.mark_revealed(visit_index) {
                continue;
            }

            let visit_adjacent_mines = self.adjacent_mine_count(visit_index);
            changed.push(CellUpdate {
                index: visit_index,
                view: CellView::from_adjacent(visit_adjacent_mines),
            });

            if visit_adjacent_mines == 0 {
                to_visit.extend(self.hidden_orthogonal_neighbors(visit_index));
            }
        }
    }

    fn hidden_orthogonal_neighbors(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        self.neighbors(index, Neighborhood::VonNeumann)
            .filter(|&pos| !self[pos].is_revealed)
    }
}

/// Owns the current board and answers the presentation layer's requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minefield {
    board: Option<Board>,
    policy: GameOverPolicy,
    game_over: bool,
}

impl Minefield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: GameOverPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> GameOverPolicy {
        self.policy
    }

    /// Replaces the current board with a freshly shuffled one.
    pub fn generate(&mut self, width: Coord, height: Coord, mines: CellCount) -> Result<&Board> {
        let config = BoardConfig::new(width, height, mines)?;
        self.generate_with(config, ShuffleGenerator::unseeded())
    }

    /// Replaces the current board with one built by `generator`. On error the
    /// previous board is kept.
    pub fn generate_with(
        &mut self,
        config: BoardConfig,
        generator: impl MineGenerator,
    ) -> Result<&Board> {
        let board = generator.generate(config)?;
        Ok(self.load(board))
    }

    /// Replaces the current board with `board` as-is.
    pub fn load(&mut self, board: Board) -> &Board {
        self.game_over = false;
        self.board.insert(board)
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Whether a mine has been opened on the current board.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<Reveal> {
        let board = self.board.as_mut().ok_or(BoardError::NoBoard)?;

        if self.game_over && matches!(self.policy, GameOverPolicy::Locked) {
            return Err(BoardError::GameOver);
        }

        let reveal = board.reveal(index)?;
        if reveal.outcome.is_game_over() {
            self.game_over = true;
        }
        Ok(reveal)
    }

    pub fn reveal_at(&mut self, coords: Coord2) -> Result<Reveal> {
        let board = self.board.as_ref().ok_or(BoardError::NoBoard)?;
        let index = board.index_of(coords)?;
        self.reveal(index)
    }

    pub fn view(&self) -> Option<BoardView> {
        self.board
            .as_ref()
            .map(|board| BoardView::from_board(board, self.game_over))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[CellIndex]) -> Minefield {
        let mut engine = Minefield::new();
        engine.load(Board::from_mine_indexes(size, mines).unwrap());
        engine
    }

    fn changed_indexes(reveal: &Reveal) -> Vec<CellIndex> {
        let mut indexes: Vec<_> = reveal.changed.iter().map(|update| update.index).collect();
        indexes.sort_unstable();
        indexes
    }

    fn revealed_indexes(engine: &Minefield) -> Vec<CellIndex> {
        let board = engine.board().unwrap();
        (0..board.len())
            .filter(|&index| board.is_revealed(index))
            .collect()
    }

    #[test]
    fn reveal_corner_opens_zero_region_and_border() {
        let mut engine = layout((3, 3), &[8]);

        let reveal = engine.reveal(0).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::Empty);
        assert_eq!(reveal.changed[0].index, 0);
        assert_eq!(changed_indexes(&reveal), vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let board = engine.board().unwrap();
        for index in [0, 1, 2, 3, 6] {
            assert_eq!(board.view(index), CellView::Empty);
        }
        for index in [4, 5, 7] {
            assert_eq!(board.view(index), CellView::Numbered(1));
        }
        assert!(!board.is_revealed(8));
    }

    #[test]
    fn reveal_next_to_mine_is_numbered_without_cascade() {
        let mut engine = layout((2, 2), &[0]);

        let reveal = engine.reveal(1).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::Numbered(1));
        assert_eq!(
            reveal.changed,
            vec![CellUpdate {
                index: 1,
                view: CellView::Numbered(1),
            }]
        );
        assert_eq!(revealed_indexes(&engine), vec![1]);
    }

    #[test]
    fn reveal_mine_is_game_over_without_cascade() {
        let mut engine = layout((3, 3), &[4]);

        let reveal = engine.reveal(4).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::GameOver);
        assert_eq!(changed_indexes(&reveal), vec![4]);
        assert_eq!(revealed_indexes(&engine), vec![4]);
        assert!(engine.is_game_over());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut engine = layout((3, 3), &[8]);

        engine.reveal(0).unwrap();
        let before = engine.clone();
        let again = engine.reveal(0).unwrap();

        assert_eq!(again, Reveal::unchanged(RevealOutcome::Safe));
        assert_eq!(engine, before);

        engine.reveal(8).unwrap();
        assert_eq!(
            engine.reveal(8).unwrap(),
            Reveal::unchanged(RevealOutcome::Mine)
        );
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut engine = layout((5, 5), &[0, 12, 24]);
        let mut revealed = Vec::new();

        for index in [20, 4, 3, 12, 6, 20] {
            engine.reveal(index).unwrap();
            let now = revealed_indexes(&engine);
            assert!(revealed.iter().all(|index| now.contains(index)));
            revealed = now;
        }
    }

    #[test]
    fn cascade_uses_orthogonal_steps_only() {
        // mines in the other two corners: 0 has no adjacent mines but its
        // diagonal neighbor 4 is only reachable diagonally
        let mut engine = layout((3, 3), &[2, 6]);

        let reveal = engine.reveal(0).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::Empty);
        assert_eq!(changed_indexes(&reveal), vec![0, 1, 3]);
        let board = engine.board().unwrap();
        assert!(!board.is_revealed(4));
        assert_eq!(board.adjacent_mine_count(8), 0);
        assert!(!board.is_revealed(8));
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        // 5x1 row with a mine in the middle
        let mut engine = layout((5, 1), &[2]);

        let reveal = engine.reveal(0).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::Empty);
        assert_eq!(changed_indexes(&reveal), vec![0, 1]);
        assert_eq!(revealed_indexes(&engine), vec![0, 1]);
    }

    #[test]
    fn cascade_reports_every_changed_cell_once() {
        let mut engine = layout((6, 4), &[23]);

        let reveal = engine.reveal(0).unwrap();
        let board = engine.board().unwrap();

        assert_eq!(reveal.changed.len(), board.revealed_count() as usize);
        assert_eq!(reveal.changed.len(), 23);
        for update in &reveal.changed {
            assert_eq!(board.view(update.index), update.view);
        }
    }

    #[test]
    fn cascade_handles_large_open_boards() {
        let config = BoardConfig::new(1000, 1000, 1).unwrap();
        let mut engine = Minefield::new();
        engine
            .generate_with(config, FixedGenerator::new([999_999]))
            .unwrap();

        let reveal = engine.reveal(0).unwrap();

        assert_eq!(reveal.outcome, RevealOutcome::Empty);
        assert_eq!(reveal.changed.len(), 999_999);
    }

    #[test]
    fn reveal_rejects_out_of_bounds_without_mutation() {
        let mut engine = layout((2, 2), &[0]);

        assert_eq!(
            engine.reveal(4),
            Err(BoardError::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            engine.reveal_at((2, 0)),
            Err(BoardError::IndexOutOfBounds { index: 2, len: 4 })
        );
        assert!(revealed_indexes(&engine).is_empty());
    }

    #[test]
    fn reveal_without_board_fails() {
        let mut engine = Minefield::new();

        assert_eq!(engine.reveal(0), Err(BoardError::NoBoard));
        assert!(engine.view().is_none());
    }

    #[test]
    fn reveal_at_maps_coordinates() {
        let mut engine = layout((3, 2), &[0]);

        let reveal = engine.reveal_at((1, 1)).unwrap();

        assert_eq!(reveal.changed[0].index, 4);
        assert_eq!(reveal.outcome, RevealOutcome::Numbered(1));
    }

    #[test]
    fn permissive_policy_keeps_answering_after_game_over() {
        let mut engine = layout((2, 2), &[0]);

        engine.reveal(0).unwrap();

        assert_eq!(engine.reveal(3).unwrap().outcome, RevealOutcome::Numbered(1));
        assert!(engine.is_game_over());
    }

    #[test]
    fn locked_policy_rejects_reveals_after_game_over() {
        let mut engine = Minefield::with_policy(GameOverPolicy::Locked);
        engine.load(Board::from_mine_indexes((2, 2), &[0]).unwrap());

        assert_eq!(engine.reveal(3).unwrap().outcome, RevealOutcome::Numbered(1));
        assert_eq!(engine.reveal(0).unwrap().outcome, RevealOutcome::GameOver);
        assert_eq!(engine.reveal(1), Err(BoardError::GameOver));

        engine.load(Board::from_mine_indexes((2, 2), &[0]).unwrap());
        assert!(!engine.is_game_over());
        assert!(engine.reveal(1).is_ok());
    }

    #[test]
    fn generate_replaces_board_and_clears_game_over() {
        let mut engine = layout((2, 2), &[0]);
        engine.reveal(0).unwrap();

        let board = engine.generate(4, 3, 5).unwrap();

        assert_eq!(board.size(), (4, 3));
        assert_eq!(board.mine_count(), 5);
        assert_eq!(board.revealed_count(), 0);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn failed_generate_keeps_previous_board() {
        let mut engine = layout((2, 2), &[0]);

        assert!(engine.generate(1, 1, 1).is_err());
        assert_eq!(engine.board().unwrap().size(), (2, 2));
    }
}
