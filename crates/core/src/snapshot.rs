//! Snapshots: the read-only view handed to collaborators, and the saved-game
//! format used for persistence

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::error::InvariantError;
use crate::history::History;
use crate::types::{Card, DrawMode, FOUNDATION_COUNT};

/// Format version written by [`SavedGame`]
pub const SAVE_VERSION: u32 = 1;

/// Label shown for a face-down tableau card
pub const HIDDEN_LABEL: &str = "##";

/// A board and its history, persisted as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    pub board: Board,
    #[serde(default)]
    pub history: History,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("unsupported save version {0} (expected {SAVE_VERSION})")]
    UnsupportedVersion(u32),
    #[error("saved board is invalid: {0}")]
    Board(#[source] InvariantError),
    #[error("history snapshot {index} is invalid: {source}")]
    History {
        index: usize,
        #[source]
        source: InvariantError,
    },
}

impl RestoreError {
    pub fn code(&self) -> &'static str {
        match self {
            RestoreError::UnsupportedVersion(_) => "unsupported_version",
            RestoreError::Board(_) => "invalid_board",
            RestoreError::History { .. } => "invalid_history",
        }
    }
}

impl SavedGame {
    /// Check the version and every stored board
    pub fn verify(&self) -> Result<(), RestoreError> {
        if self.version != SAVE_VERSION {
            return Err(RestoreError::UnsupportedVersion(self.version));
        }
        self.board.check_invariants().map_err(RestoreError::Board)?;
        for (index, board) in self.history.snapshots().enumerate() {
            board
                .check_invariants()
                .map_err(|source| RestoreError::History { index, source })?;
        }
        Ok(())
    }
}

/// Player-facing view of a board: face-down cards are masked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: Option<u64>,
    pub draw_mode: DrawMode,
    pub stock: usize,
    pub waste: Vec<String>,
    pub foundations: [Vec<String>; FOUNDATION_COUNT],
    pub tableau: Vec<Vec<String>>,
    pub score: i32,
    pub moves: u32,
    pub recycles: u32,
    pub won: bool,
    pub can_undo: bool,
    pub can_redo: bool,
}

fn visible_label(card: &Card) -> String {
    if card.face_up {
        card.label()
    } else {
        HIDDEN_LABEL.to_string()
    }
}

impl GameSnapshot {
    pub fn capture(board: &Board, history: &History) -> Self {
        let labels = |pile: &[Card]| pile.iter().map(visible_label).collect::<Vec<_>>();
        Self {
            seed: board.seed().map(|seed| seed.value()),
            draw_mode: board.rules().draw_mode,
            stock: board.stock().len(),
            waste: labels(board.waste()),
            foundations: board.foundations().clone().map(|pile| labels(pile.as_slice())),
            tableau: board.columns().iter().map(|column| labels(column.as_slice())).collect(),
            score: board.score(),
            moves: board.moves(),
            recycles: board.recycles(),
            won: board.is_won(),
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
        }
    }

    /// Number of face-down cards left on the tableau
    pub fn hidden(&self) -> usize {
        self.tableau
            .iter()
            .flatten()
            .filter(|label| label.as_str() == HIDDEN_LABEL)
            .count()
    }
}
