//! Hint ranking - scores every legal move by the position it leads to

use klondike_core::{apply_move, is_won, legal_moves, Board};
use klondike_types::{Move, MoveKind, PileRef, TABLEAU_COLUMNS};

const FOUNDATION_WEIGHT: i64 = 2100;
const REVEAL_WEIGHT: i64 = 480;
const EMPTY_COLUMN_WEIGHT: i64 = 120;
const MOBILITY_WEIGHT: i64 = 24;
const FOUNDATION_BONUS: i64 = 700;
const WASTE_TO_TABLEAU_BONUS: i64 = 120;
const WIN_BONUS: i64 = 100_000;
const DRAW_PENALTY: i64 = 800;
const REVERSE_PENALTY: i64 = 1500;
const IDLE_PENALTY: i64 = 350;

/// A legal move with its heuristic score (higher is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMove {
    pub mv: Move,
    pub score: i64,
}

fn empty_columns(board: &Board) -> i64 {
    (0..TABLEAU_COLUMNS)
        .filter(|&col| board.column(col).is_empty())
        .count() as i64
}

fn card_moves(board: &Board) -> i64 {
    legal_moves(board)
        .iter()
        .filter(|mv| !mv.kind.is_stock_action())
        .count() as i64
}

/// King run already at the bottom of its column moved to another empty column
fn is_idle_king_shuffle(board: &Board, mv: &Move) -> bool {
    mv.kind == MoveKind::TableauToTableau
        && mv.source_index == Some(0)
        && matches!(mv.target, Some(PileRef::Tableau(to)) if board.column(to as usize).is_empty())
}

fn score_move(current: &Board, next: &Board, mv: &Move, current_card_moves: i64) -> i64 {
    let foundation_delta = next.foundation_count() as i64 - current.foundation_count() as i64;
    let reveal_delta = current.hidden_count() as i64 - next.hidden_count() as i64;
    let empty_delta = empty_columns(next) - empty_columns(current);
    let mobility_delta = card_moves(next) - current_card_moves;

    let mut score = foundation_delta * FOUNDATION_WEIGHT
        + reveal_delta * REVEAL_WEIGHT
        + empty_delta * EMPTY_COLUMN_WEIGHT
        + mobility_delta * MOBILITY_WEIGHT;

    match mv.kind {
        MoveKind::WasteToFoundation | MoveKind::TableauToFoundation => score += FOUNDATION_BONUS,
        MoveKind::FoundationToTableau => score -= REVERSE_PENALTY,
        MoveKind::Draw | MoveKind::Recycle => {
            if current_card_moves > 0 {
                score -= DRAW_PENALTY;
            }
        }
        MoveKind::WasteToTableau => score += WASTE_TO_TABLEAU_BONUS,
        MoveKind::TableauToTableau => {
            if is_idle_king_shuffle(current, mv) {
                score -= IDLE_PENALTY;
            }
        }
    }
    if is_won(next) {
        score += WIN_BONUS;
    }
    score
}

/// Every legal move with its score, best first
///
/// Ties keep enumeration order, so the ranking is deterministic.
pub fn rank_moves(board: &Board) -> Vec<RankedMove> {
    let current_card_moves = card_moves(board);
    let mut ranked: Vec<RankedMove> = legal_moves(board)
        .into_iter()
        .filter_map(|mv| {
            let next = apply_move(board, &mv).ok()?;
            Some(RankedMove {
                mv,
                score: score_move(board, &next, &mv, current_card_moves),
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top-ranked move, if any move is legal
pub fn best_hint(board: &Board) -> Option<Move> {
    rank_moves(board).first().map(|ranked| ranked.mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_core::{deal, BoardParts, Rules, Seed};
    use klondike_types::{Card, CardId, Rank, Suit};

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).face_up()
    }

    #[test]
    fn test_prefers_foundation_play() {
        let mut parts = BoardParts::default();
        parts.stock = vec![Card::new(Suit::Clubs, Rank::Nine)];
        parts.waste = vec![up(Suit::Spades, Rank::Ace)];
        parts.tableau[0] = vec![up(Suit::Hearts, Rank::King)];
        let board = Board::from_parts(parts);

        let hint = best_hint(&board).unwrap();
        assert_eq!(hint.kind, MoveKind::WasteToFoundation);
        assert_eq!(hint.card, Some(CardId::new(Suit::Spades, Rank::Ace)));
    }

    #[test]
    fn test_prefers_reveal_over_draw() {
        let mut parts = BoardParts::default();
        parts.stock = vec![Card::new(Suit::Clubs, Rank::Nine)];
        parts.tableau[0] = vec![Card::new(Suit::Diamonds, Rank::Four), up(Suit::Hearts, Rank::Seven)];
        parts.tableau[1] = vec![up(Suit::Spades, Rank::Eight)];
        let board = Board::from_parts(parts);

        let ranked = rank_moves(&board);
        assert_eq!(ranked[0].mv.kind, MoveKind::TableauToTableau);
        assert_eq!(ranked.last().map(|r| r.mv.kind), Some(MoveKind::Draw));
    }

    #[test]
    fn test_ranking_covers_every_legal_move() {
        let board = deal(Seed(42), Rules::default());
        let ranked = rank_moves(&board);
        assert_eq!(ranked.len(), legal_moves(&board).len());
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn test_won_board_has_no_hint() {
        let mut parts = BoardParts::default();
        for suit in Suit::ALL {
            parts.foundations[suit.index()] = Rank::ALL.iter().map(|&r| up(suit, r)).collect();
        }
        assert_eq!(best_hint(&Board::from_parts(parts)), None);
    }
}
