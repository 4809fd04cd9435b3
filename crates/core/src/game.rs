//! Game module - a board plus its undo/redo history
//!
//! `Game` is the mutable session object: every applied move pushes the
//! pre-move board onto the history so undo restores it exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::dealer::deal;
use crate::enumerate::{legal_moves, MoveList};
use crate::error::{MoveError, RedoError, UndoError};
use crate::executor::{execute, MoveOutcome};
use crate::history::History;
use crate::rng::Seed;
use crate::rules::{validate, Rules};
use crate::snapshot::{GameSnapshot, RestoreError, SavedGame, SAVE_VERSION};
use crate::types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    Won,
}

/// Complete game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: History,
}

impl Game {
    /// Deal a new game; a missing seed is drawn from the thread RNG
    pub fn new(seed: Option<Seed>, rules: Rules) -> Self {
        let seed = seed.unwrap_or_else(Seed::random);
        info!(seed = seed.value(), "new game");
        Self::from_board(deal(seed, rules))
    }

    /// Start a session from an existing position with empty history
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: History::new(),
        }
    }

    /// Replace the current game with a fresh deal under the same rules
    pub fn new_game(&mut self, seed: Option<Seed>) {
        let rules = *self.board.rules();
        *self = Self::new(seed, rules);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.board.is_won() {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    pub fn score(&self) -> i32 {
        self.board.score()
    }

    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board)
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        validate(&self.board, mv).is_ok()
    }

    /// Validate and apply a move, recording the prior board for undo
    pub fn apply_move(&mut self, mv: &Move) -> Result<MoveOutcome, MoveError> {
        let plan = validate(&self.board, mv)?;
        self.history.record(self.board.clone());
        let outcome = execute(&mut self.board, &plan);
        debug!(
            kind = outcome.kind.as_str(),
            cards = outcome.cards,
            points = outcome.points.total,
            score = outcome.score,
            "applied move"
        );
        if outcome.won {
            info!(moves = self.board.moves(), score = outcome.score, "game won");
        }
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Result<(), UndoError> {
        self.history.undo(&mut self.board)?;
        debug!(moves = self.board.moves(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), RedoError> {
        self.history.redo(&mut self.board)?;
        debug!(moves = self.board.moves(), "redo");
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, &self.history)
    }

    pub fn save(&self) -> SavedGame {
        SavedGame {
            version: SAVE_VERSION,
            board: self.board.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a save, re-checking every stored board
    pub fn restore(saved: SavedGame) -> Result<Self, RestoreError> {
        saved.verify()?;
        let SavedGame {
            mut board, history, ..
        } = saved;
        board.refresh_won();
        Ok(Self { board, history })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardParts;
    use crate::types::{Card, CardId, MoveKind, Rank, Suit};

    fn nearly_won() -> Board {
        let mut parts = BoardParts::default();
        for suit in Suit::ALL {
            parts.foundations[suit.index()] =
                Rank::ALL.iter().map(|&rank| Card::new(suit, rank).face_up()).collect();
        }
        let king = parts.foundations[Suit::Clubs.index()].pop().unwrap();
        parts.waste.push(king);
        Board::from_parts(parts)
    }

    #[test]
    fn test_apply_records_history() {
        let mut game = Game::new(Some(Seed(42)), Rules::default());
        let start = game.board().clone();

        let outcome = game.apply_move(&Move::draw()).unwrap();
        assert_eq!(outcome.kind, MoveKind::Draw);
        assert_eq!(game.history().undo_depth(), 1);

        game.undo().unwrap();
        assert_eq!(game.board(), &start);
        assert_eq!(game.undo(), Err(UndoError::NoHistory));
    }

    #[test]
    fn test_rejected_move_not_recorded() {
        let mut game = Game::new(Some(Seed(42)), Rules::default());
        let before = game.board().clone();
        assert!(game.apply_move(&Move::recycle()).is_err());
        assert_eq!(game.board(), &before);
        assert!(!game.history().can_undo());
    }

    #[test]
    fn test_winning_move_ends_game() {
        let mut game = Game::from_board(nearly_won());
        assert_eq!(game.phase(), Phase::Playing);

        let king = CardId::new(Suit::Clubs, Rank::King);
        let outcome = game.apply_move(&Move::waste_to_foundation(king)).unwrap();
        assert!(outcome.won);
        assert_eq!(game.phase(), Phase::Won);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.apply_move(&Move::draw()), Err(MoveError::GameWon));

        // Undo leaves the terminal state.
        game.undo().unwrap();
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_save_restore_keeps_history() {
        let mut game = Game::new(Some(Seed(5)), Rules::default());
        game.apply_move(&Move::draw()).unwrap();
        game.apply_move(&Move::draw()).unwrap();
        game.undo().unwrap();

        let restored = Game::restore(game.save()).unwrap();
        assert_eq!(restored, game);
        assert!(restored.history().can_redo());
    }

    #[test]
    fn test_new_game_keeps_rules() {
        let rules = Rules::default().with_draw_mode(crate::types::DrawMode::Three);
        let mut game = Game::new(Some(Seed(1)), rules);
        game.apply_move(&Move::draw()).unwrap();
        game.new_game(Some(Seed(2)));
        assert_eq!(game.board().rules(), &rules);
        assert_eq!(game.board().moves(), 0);
        assert!(!game.history().can_undo());
    }
}
