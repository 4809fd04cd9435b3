//! Safe autoplay - foundation plays that can never cost the player a move

use klondike_core::{is_legal, Board, Game};
use klondike_types::{Card, Move, PileRef, Rank, Suit, TABLEAU_COLUMNS};
use tracing::debug;

fn rank_value(board: &Board, suit: Suit) -> u8 {
    board.foundation_rank(suit).map(Rank::value).unwrap_or(0)
}

/// Whether sending `card` to its foundation is free of downside
///
/// Aces and twos always are. Otherwise both foundations of the opposite color
/// must have reached one rank below the card, so no tableau card could still
/// need it to build on.
pub fn is_safe_foundation_card(board: &Board, card: &Card) -> bool {
    let value = card.value();
    if value <= 2 {
        return true;
    }
    let (a, b) = if card.suit.is_red() {
        (Suit::Spades, Suit::Clubs)
    } else {
        (Suit::Hearts, Suit::Diamonds)
    };
    rank_value(board, a) + 1 >= value && rank_value(board, b) + 1 >= value
}

/// First safe foundation play: the waste top, then columns left to right
pub fn safe_foundation_move(board: &Board) -> Option<Move> {
    let waste = board
        .top(PileRef::Waste)
        .map(|card| (card, Move::waste_to_foundation(card.id)));
    let columns = (0..TABLEAU_COLUMNS).filter_map(|col| {
        board
            .column(col)
            .last()
            .map(|card| (card, Move::tableau_to_foundation(card.id, col as u8)))
    });

    waste
        .into_iter()
        .chain(columns)
        .find(|(card, mv)| is_safe_foundation_card(board, card) && is_legal(board, mv))
        .map(|(_, mv)| mv)
}

/// Apply safe foundation plays until none remain; returns how many were made
///
/// Each play is recorded in the game's history like any other move.
pub fn autoplay(game: &mut Game) -> usize {
    let mut played = 0;
    while let Some(mv) = safe_foundation_move(game.board()) {
        if game.apply_move(&mv).is_err() {
            break;
        }
        played += 1;
    }
    if played > 0 {
        debug!(played, "autoplay");
    }
    played
}
