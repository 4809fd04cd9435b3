//! Klondike rules engine - pure, deterministic, and testable
//!
//! This crate owns every rule of single-player Klondike: dealing, move
//! validation and execution, scoring, win detection, undo/redo and move
//! enumeration. It performs no I/O and knows nothing about rendering, so
//! the same engine drives a terminal front end, a GUI or a headless solver.
//!
//! # Module Structure
//!
//! - [`deck`]: the 52-card factory and composition check
//! - [`rng`]: seeds and the ChaCha8-backed shuffle
//! - [`board`]: stock, waste, four foundations and seven tableau columns
//! - [`dealer`]: seeded opening layout
//! - [`rules`]: rule switches and the move validator
//! - [`executor`]: applies validated moves, flips reveals, updates score
//! - [`scoring`]: configurable score tariff
//! - [`history`]: undo/redo snapshot stacks
//! - [`enumerate`]: all legal moves for a board
//! - [`game`]: board plus history as one session
//! - [`snapshot`]: masked views and saved games
//!
//! # Example
//!
//! ```
//! use klondike_core::{Game, Rules, Seed};
//! use klondike_types::Move;
//!
//! let mut game = Game::new(Some(Seed(42)), Rules::default());
//! assert_eq!(game.board().stock().len(), 24);
//!
//! game.apply_move(&Move::draw()).unwrap();
//! assert_eq!(game.board().waste().len(), 1);
//!
//! game.undo().unwrap();
//! assert!(game.board().waste().is_empty());
//! ```

pub mod board;
pub mod dealer;
pub mod deck;
pub mod enumerate;
pub mod error;
pub mod executor;
pub mod game;
pub mod history;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use klondike_types as types;

pub use board::{Board, BoardParts};
pub use dealer::deal;
pub use deck::{ordered_deck, verify_deck};
pub use enumerate::MoveList;
pub use error::{InvariantError, MoveError, RedoError, UndoError, Violation};
pub use executor::{apply, MoveOutcome};
pub use game::{Game, Phase};
pub use history::History;
pub use rng::{DealRng, Seed};
pub use rules::{can_stack_foundation, can_stack_tableau, is_run, validate, Plan, Rules};
pub use scoring::{apply_delta, calculate_score, move_points, ScoreResult, ScoringRules};
pub use snapshot::{GameSnapshot, RestoreError, SavedGame, SAVE_VERSION};

use types::Move;

/// Deal a board under default rules; a missing seed is drawn at random
pub fn new_game(seed: Option<Seed>) -> Board {
    deal(seed.unwrap_or_else(Seed::random), Rules::default())
}

/// Apply a move to a copy of `board`
///
/// The input board is never modified; on success the returned board is the
/// position after the move.
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, MoveError> {
    let mut next = board.clone();
    apply(&mut next, mv)?;
    Ok(next)
}

pub fn legal_moves(board: &Board) -> MoveList {
    enumerate::legal_moves(board)
}

pub fn is_legal(board: &Board, mv: &Move) -> bool {
    rules::is_legal(board, mv)
}

/// All four foundations hold thirteen cards
pub fn is_won(board: &Board) -> bool {
    board.is_won()
}
