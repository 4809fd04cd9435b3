//! Legal move enumeration
//!
//! Candidates are generated per source pile and kept only if the validator
//! accepts them, so every listed move applies cleanly.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rules::is_legal;
use crate::types::{Move, PileRef, FOUNDATION_COUNT, MAX_LEGAL_MOVES, TABLEAU_COLUMNS};

/// Fixed-capacity list of legal moves
pub type MoveList = ArrayVec<Move, MAX_LEGAL_MOVES>;

/// Every legal move, in a stable order
///
/// Foundation plays come first (waste, then columns left to right), then
/// waste to tableau, tableau to tableau by source column, start card and
/// destination, then foundation to tableau, then the single stock action.
/// A won board has no moves.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    if board.is_won() {
        return moves;
    }
    let mut push = |mv: Move| {
        if is_legal(board, &mv) {
            // Capacity covers the worst case of 86 moves.
            let _ = moves.try_push(mv);
        }
    };

    let waste_top = board.top(PileRef::Waste).map(|card| card.id);
    let waste_index = board.waste().len().saturating_sub(1) as u8;

    if let Some(card) = waste_top {
        push(Move::waste_to_foundation(card).with_source_index(waste_index));
    }
    for from in 0..TABLEAU_COLUMNS {
        if let Some(top) = board.column(from).last() {
            let index = (board.column(from).len() - 1) as u8;
            push(Move::tableau_to_foundation(top.id, from as u8).with_source_index(index));
        }
    }

    if let Some(card) = waste_top {
        for to in 0..TABLEAU_COLUMNS {
            push(
                Move::waste_to_tableau(card, to as u8)
                    .with_source_index(waste_index)
                    .with_target_index(board.column(to).len() as u8),
            );
        }
    }

    for from in 0..TABLEAU_COLUMNS {
        let column = board.column(from);
        for start in board.first_face_up(from)..column.len() {
            let card = column[start].id;
            for to in (0..TABLEAU_COLUMNS).filter(|&to| to != from) {
                push(
                    Move::tableau_to_tableau(card, from as u8, start as u8, to as u8)
                        .with_target_index(board.column(to).len() as u8),
                );
            }
        }
    }

    if board.rules().allow_foundation_to_tableau {
        for slot in 0..FOUNDATION_COUNT {
            let pile = board.pile(PileRef::Foundation(slot as u8));
            let Some(top) = pile.last() else { continue };
            for to in 0..TABLEAU_COLUMNS {
                push(
                    Move::foundation_to_tableau(top.id, to as u8)
                        .with_source_index((pile.len() - 1) as u8)
                        .with_target_index(board.column(to).len() as u8),
                );
            }
        }
    }

    if board.stock().is_empty() {
        push(Move::recycle());
    } else {
        push(Move::draw());
    }

    moves
}
