//! Deck factory and composition check

use std::collections::HashSet;

use crate::error::InvariantError;
use crate::types::{Card, CardId, Rank, Suit, DECK_SIZE};

/// A fresh deck in id order (♠A..♠K, ♥A..♥K, ♦A..♦K, ♣A..♣K), all face down
pub fn ordered_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::new(Suit::Spades, Rank::Ace); DECK_SIZE];
    for (slot, (suit, rank)) in deck.iter_mut().zip(
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank))),
    ) {
        *slot = Card::new(suit, rank);
    }
    deck
}

/// Check that `cards` is exactly one copy of each of the 52 cards
pub fn verify_deck<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), InvariantError> {
    let mut seen: HashSet<CardId> = HashSet::with_capacity(DECK_SIZE);
    let mut count = 0usize;
    for card in cards {
        count += 1;
        if card.id != CardId::new(card.suit, card.rank) {
            return Err(InvariantError::MismatchedCard(card.id));
        }
        if !seen.insert(card.id) {
            return Err(InvariantError::DuplicateCard(card.id));
        }
    }
    if count != DECK_SIZE {
        return Err(InvariantError::CardCount(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_deck_is_id_ordered() {
        let deck = ordered_deck();
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, CardId(i as u8));
            assert!(!card.face_up);
        }
        assert!(verify_deck(&deck).is_ok());
    }

    #[test]
    fn verify_rejects_duplicates_and_short_decks() {
        let mut deck = ordered_deck();
        deck[5] = deck[4];
        assert_eq!(verify_deck(&deck), Err(InvariantError::DuplicateCard(deck[4].id)));

        let deck = ordered_deck();
        assert_eq!(verify_deck(&deck[..51]), Err(InvariantError::CardCount(51)));
    }

    #[test]
    fn verify_rejects_forged_ids() {
        let mut deck = ordered_deck();
        deck[0].id = CardId(60);
        assert_eq!(verify_deck(&deck), Err(InvariantError::MismatchedCard(CardId(60))));
    }
}
