//! Dealer - shuffle a fresh deck and lay out the opening position

use tracing::debug;

use crate::board::Board;
use crate::deck::{ordered_deck, verify_deck};
use crate::rng::{DealRng, Seed};
use crate::rules::Rules;
use crate::types::{Card, TABLEAU_COLUMNS};

/// Deal a new board
///
/// Column `i` receives `i + 1` cards with only its last card face up; the
/// remaining 24 cards form the stock, face down, top last.
///
/// # Panics
///
/// Panics if the shuffled deck is not exactly the 52 distinct cards. That
/// can only happen through a defect in the deck factory or the shuffle.
pub fn deal(seed: Seed, rules: Rules) -> Board {
    let mut deck = ordered_deck();
    DealRng::new(seed).shuffle(&mut deck);
    if let Err(err) = verify_deck(&deck) {
        panic!("dealer produced a malformed deck: {err}");
    }

    let mut cards = deck.into_iter();
    let mut tableau: [Vec<Card>; TABLEAU_COLUMNS] = Default::default();
    for (col, column) in tableau.iter_mut().enumerate() {
        column.extend(cards.by_ref().take(col + 1));
        if let Some(top) = column.last_mut() {
            top.face_up = true;
        }
    }
    let stock: Vec<Card> = cards.collect();

    debug!(seed = seed.value(), draw = rules.draw_mode.count(), "dealt board");
    Board::dealt(seed, rules, stock, tableau)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STOCK_AFTER_DEAL;

    #[test]
    fn test_deal_layout() {
        let board = deal(Seed(42), Rules::default());
        for col in 0..TABLEAU_COLUMNS {
            let column = board.column(col);
            assert_eq!(column.len(), col + 1);
            assert!(column[..col].iter().all(|card| !card.face_up));
            assert!(column[col].face_up);
        }
        assert_eq!(board.stock().len(), STOCK_AFTER_DEAL);
        assert!(board.stock().iter().all(|card| !card.face_up));
        assert!(board.waste().is_empty());
        assert_eq!(board.foundation_count(), 0);
        assert_eq!(board.seed(), Some(Seed(42)));
        assert_eq!(board.check_invariants(), Ok(()));
    }

    #[test]
    fn test_deal_deterministic() {
        assert_eq!(deal(Seed(42), Rules::default()), deal(Seed(42), Rules::default()));
        assert_ne!(
            deal(Seed(42), Rules::default()).columns(),
            deal(Seed(43), Rules::default()).columns()
        );
    }
}
