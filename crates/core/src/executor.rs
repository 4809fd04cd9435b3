//! Move executor - applies validated plans

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::MoveError;
use crate::rules::{validate, Plan};
use crate::scoring::{apply_delta, calculate_score, ScoreResult};
use crate::types::{CardId, Move, MoveKind, PileRef};

/// What a successful move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// Number of cards carried by the move.
    pub cards: usize,
    /// Tableau card turned face up by the move, if any.
    pub revealed: Option<CardId>,
    pub points: ScoreResult,
    /// Running score after the move.
    pub score: i32,
    pub won: bool,
}

/// Validate and apply a move in place
///
/// The board is untouched when an error is returned.
pub fn apply(board: &mut Board, mv: &Move) -> Result<MoveOutcome, MoveError> {
    let plan = validate(board, mv)?;
    Ok(execute(board, &plan))
}

/// Apply a plan produced by [`validate`] against this same board
pub(crate) fn execute(board: &mut Board, plan: &Plan) -> MoveOutcome {
    let mut cards = board.pile_mut(plan.source()).split_off(plan.start());
    match plan.kind() {
        // Cards come off the stock one at a time, so the deepest drawn card ends on top.
        MoveKind::Draw => {
            cards.reverse();
            cards.iter_mut().for_each(|card| card.face_up = true);
        }
        // Turning the waste over restores the original stock order.
        MoveKind::Recycle => {
            cards.reverse();
            cards.iter_mut().for_each(|card| card.face_up = false);
            board.recycles += 1;
        }
        _ => {}
    }
    board.pile_mut(plan.target()).extend(cards);

    let revealed = match plan.source() {
        PileRef::Tableau(col) => reveal_top(board, col as usize),
        _ => None,
    };

    let points = calculate_score(
        &board.rules.scoring,
        plan.kind(),
        plan.count(),
        revealed.is_some(),
    );
    board.moves = board.moves.saturating_add(1);
    board.score = apply_delta(board.score, points.total);
    board.refresh_won();

    MoveOutcome {
        kind: plan.kind(),
        cards: plan.count(),
        revealed,
        points,
        score: board.score,
        won: board.won,
    }
}

fn reveal_top(board: &mut Board, col: usize) -> Option<CardId> {
    let top = board.tableau[col].last_mut()?;
    if top.face_up {
        return None;
    }
    top.face_up = true;
    Some(top.id)
}
