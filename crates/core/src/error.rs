//! Error types for the rules engine
//!
//! Every fallible entry point returns one of these; none of them leave the
//! board partially mutated. `code()` gives the stable identifier used by the
//! session protocol.

use thiserror::Error;

use klondike_types::{CardId, PileRef};

/// Why a structurally valid move breaks the Klondike rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    #[error("card is not the top of its pile")]
    NotTopCard,
    #[error("card is face down")]
    FaceDown,
    #[error("cards from the chosen card upward are not a movable run")]
    BrokenRun,
    #[error("only a king can fill an empty column")]
    NeedsKing,
    #[error("only an ace can start a foundation")]
    NeedsAce,
    #[error("card belongs on a different foundation")]
    WrongSuit,
    #[error("card must be the opposite color of the column top")]
    SameColor,
    #[error("card rank does not continue the target pile")]
    WrongRank,
    #[error("target column top is face down")]
    TargetFaceDown,
    #[error("source and target are the same pile")]
    SamePile,
    #[error("stock must be empty before recycling the waste")]
    StockNotEmpty,
    #[error("no recycles left")]
    RecycleLimit,
    #[error("moving cards off a foundation is disabled")]
    ReverseMovesDisabled,
}

impl Violation {
    pub fn code(self) -> &'static str {
        match self {
            Violation::NotTopCard => "not_top_card",
            Violation::FaceDown => "face_down",
            Violation::BrokenRun => "broken_run",
            Violation::NeedsKing => "needs_king",
            Violation::NeedsAce => "needs_ace",
            Violation::WrongSuit => "wrong_suit",
            Violation::SameColor => "same_color",
            Violation::WrongRank => "wrong_rank",
            Violation::TargetFaceDown => "target_face_down",
            Violation::SamePile => "same_pile",
            Violation::StockNotEmpty => "stock_not_empty",
            Violation::RecycleLimit => "recycle_limit",
            Violation::ReverseMovesDisabled => "reverse_moves_disabled",
        }
    }
}

/// Rejection of a requested move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Malformed request: missing fields, unknown ids, mismatched piles.
    #[error("invalid move: {0}")]
    InvalidMove(&'static str),
    #[error("{0} is empty")]
    EmptySource(PileRef),
    #[error("rule violation: {0}")]
    RuleViolation(#[from] Violation),
    #[error("card {0} is not on the board")]
    CardNotFound(CardId),
    #[error("the game is already won")]
    GameWon,
}

impl MoveError {
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::InvalidMove(_) => "invalid_move",
            MoveError::EmptySource(_) => "empty_source",
            MoveError::RuleViolation(_) => "rule_violation",
            MoveError::CardNotFound(_) => "card_not_found",
            MoveError::GameWon => "game_won",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    NoHistory,
}

impl UndoError {
    pub fn code(self) -> &'static str {
        "no_history"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RedoError {
    #[error("nothing to redo")]
    NothingToRedo,
}

impl RedoError {
    pub fn code(self) -> &'static str {
        "nothing_to_redo"
    }
}

/// A board that breaks one of the structural invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("board holds {0} cards, expected 52")]
    CardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
    #[error("card id {0:?} does not match its suit and rank")]
    MismatchedCard(CardId),
    #[error("foundation {0} is not an ascending same-suit pile from the ace")]
    FoundationOrder(usize),
    #[error("a stock card is face up")]
    StockFaceUp,
    #[error("a waste card is face down")]
    WasteFaceDown,
    #[error("column {0} has a face-down card above a face-up card or a face-down top")]
    HiddenCard(usize),
    #[error("face-up cards in column {0} do not form a run")]
    BrokenRun(usize),
    #[error("won flag disagrees with the foundations")]
    WonFlag,
}
