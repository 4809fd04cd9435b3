//! Board module - the five pile collections and game counters
//!
//! Pile order convention: the last element of every pile is its top card.
//! Foundation slot `i` holds suit `Suit::ALL[i]`.
//!
//! The board carries its own [`Rules`] so that legality is a pure function of
//! the board value, and so that a saved board replays under the rules it was
//! dealt with.

use serde::{Deserialize, Serialize};

use crate::deck::verify_deck;
use crate::error::InvariantError;
use crate::rng::Seed;
use crate::rules::{is_run, Rules};
use crate::types::{
    Card, CardId, PileRef, Rank, Suit, FOUNDATION_COUNT, RANKS_PER_SUIT, TABLEAU_COLUMNS,
};

/// Raw pile contents for building a board directly (fixtures, restored games)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardParts {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub rules: Rules,
}

/// Complete position of one game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub(crate) tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub(crate) rules: Rules,
    /// Seed the board was dealt from; `None` for hand-built boards.
    pub(crate) seed: Option<Seed>,
    pub(crate) moves: u32,
    pub(crate) score: i32,
    pub(crate) recycles: u32,
    pub(crate) won: bool,
}

impl Board {
    /// Build a board from raw piles without checking invariants
    ///
    /// Counters start at zero. Use [`Board::check_invariants`] when the
    /// parts come from outside the engine.
    pub fn from_parts(parts: BoardParts) -> Self {
        let mut board = Self {
            stock: parts.stock,
            waste: parts.waste,
            foundations: parts.foundations,
            tableau: parts.tableau,
            rules: parts.rules,
            seed: None,
            moves: 0,
            score: 0,
            recycles: 0,
            won: false,
        };
        board.refresh_won();
        board
    }

    pub(crate) fn dealt(
        seed: Seed,
        rules: Rules,
        stock: Vec<Card>,
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
    ) -> Self {
        Self {
            seed: Some(seed),
            ..Self::from_parts(BoardParts {
                stock,
                waste: Vec::new(),
                foundations: Default::default(),
                tableau,
                rules,
            })
        }
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Tableau column `col`; empty for out-of-range columns
    pub fn column(&self, col: usize) -> &[Card] {
        self.tableau.get(col).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn columns(&self) -> &[Vec<Card>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// Contents of any pile; empty for out-of-range references
    pub fn pile(&self, pile: PileRef) -> &[Card] {
        match pile {
            PileRef::Stock => &self.stock,
            PileRef::Waste => &self.waste,
            PileRef::Foundation(i) => self
                .foundations
                .get(i as usize)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            PileRef::Tableau(i) => self.column(i as usize),
        }
    }

    pub fn top(&self, pile: PileRef) -> Option<&Card> {
        self.pile(pile).last()
    }

    /// Pile to mutate; `pile` must be in range (plans are validated first)
    pub(crate) fn pile_mut(&mut self, pile: PileRef) -> &mut Vec<Card> {
        match pile {
            PileRef::Stock => &mut self.stock,
            PileRef::Waste => &mut self.waste,
            PileRef::Foundation(i) => &mut self.foundations[i as usize],
            PileRef::Tableau(i) => &mut self.tableau[i as usize],
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    /// Number of moves applied since the deal
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of times the waste has been turned back into the stock
    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    /// All four foundations are complete
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == RANKS_PER_SUIT as usize)
    }

    pub(crate) fn refresh_won(&mut self) {
        self.won = self.is_won();
    }

    /// Highest rank on the suit's foundation, if any
    pub fn foundation_rank(&self, suit: Suit) -> Option<Rank> {
        self.foundation(suit).last().map(|card| card.rank)
    }

    /// Cards played to foundations so far
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// Index of the first face-up card in a column (the column length if none)
    pub fn first_face_up(&self, col: usize) -> usize {
        let column = self.column(col);
        column
            .iter()
            .position(|card| card.face_up)
            .unwrap_or(column.len())
    }

    /// Face-down cards still on the tableau
    pub fn hidden_count(&self) -> usize {
        self.tableau
            .iter()
            .flatten()
            .filter(|card| !card.face_up)
            .count()
    }

    /// Every card on the board, pile by pile
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Pile and position of a card
    pub fn locate(&self, id: CardId) -> Option<(PileRef, usize)> {
        let find = |pile: &[Card]| pile.iter().position(|card| card.id == id);

        if let Some(i) = find(&self.stock) {
            return Some((PileRef::Stock, i));
        }
        if let Some(i) = find(&self.waste) {
            return Some((PileRef::Waste, i));
        }
        for (slot, pile) in self.foundations.iter().enumerate() {
            if let Some(i) = find(pile) {
                return Some((PileRef::Foundation(slot as u8), i));
            }
        }
        for (col, pile) in self.tableau.iter().enumerate() {
            if let Some(i) = find(pile) {
                return Some((PileRef::Tableau(col as u8), i));
            }
        }
        None
    }

    /// Verify deck composition and pile-shape invariants
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        verify_deck(self.cards())?;

        if self.stock.iter().any(|card| card.face_up) {
            return Err(InvariantError::StockFaceUp);
        }
        if self.waste.iter().any(|card| !card.face_up) {
            return Err(InvariantError::WasteFaceDown);
        }

        for (slot, pile) in self.foundations.iter().enumerate() {
            let ordered = pile.iter().enumerate().all(|(i, card)| {
                card.face_up && card.suit.index() == slot && card.value() as usize == i + 1
            });
            if !ordered {
                return Err(InvariantError::FoundationOrder(slot));
            }
        }

        for (col, column) in self.tableau.iter().enumerate() {
            let first_up = self.first_face_up(col);
            let hidden_above = column[first_up..].iter().any(|card| !card.face_up);
            if hidden_above || (!column.is_empty() && first_up == column.len()) {
                return Err(InvariantError::HiddenCard(col));
            }
            if !is_run(&column[first_up..]) {
                return Err(InvariantError::BrokenRun(col));
            }
        }

        if self.won != self.is_won() {
            return Err(InvariantError::WonFlag);
        }
        Ok(())
    }
}
