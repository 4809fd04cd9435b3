//! Move validator
//!
//! `validate` resolves a [`Move`] against a [`Board`] into a [`Plan`] or
//! explains why it is illegal. It never mutates; the executor only ever runs
//! plans produced here.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{MoveError, Violation};
use crate::scoring::ScoringRules;
use crate::types::{
    Card, DrawMode, Move, MoveKind, PileRef, Rank, Suit, FOUNDATION_COUNT, TABLEAU_COLUMNS,
};

/// Rule switches carried by every board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub draw_mode: DrawMode,
    /// Allow taking the top foundation card back onto the tableau.
    pub allow_foundation_to_tableau: bool,
    /// Maximum number of waste recycles; `None` is unlimited.
    pub recycle_limit: Option<u32>,
    pub scoring: ScoringRules,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::One,
            allow_foundation_to_tableau: true,
            recycle_limit: None,
            scoring: ScoringRules::default(),
        }
    }
}

impl Rules {
    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }
}

/// A validated move, resolved to concrete pile positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    kind: MoveKind,
    source: PileRef,
    start: usize,
    count: usize,
    target: PileRef,
}

impl Plan {
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn source(&self) -> PileRef {
        self.source
    }

    /// Index in the source pile of the first card that moves
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of cards that move
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn target(&self) -> PileRef {
        self.target
    }
}

/// Whether `card` may be placed on a column whose exposed card is `top`
pub fn can_stack_tableau(top: Option<&Card>, card: &Card) -> Result<(), Violation> {
    match top {
        None if card.rank == Rank::King => Ok(()),
        None => Err(Violation::NeedsKing),
        Some(top) if !top.face_up => Err(Violation::TargetFaceDown),
        Some(top) if top.color() == card.color() => Err(Violation::SameColor),
        Some(top) if top.value() != card.value() + 1 => Err(Violation::WrongRank),
        Some(_) => Ok(()),
    }
}

/// Whether `card` may be placed on the `slot` foundation whose top is `top`
pub fn can_stack_foundation(slot: Suit, top: Option<&Card>, card: &Card) -> Result<(), Violation> {
    if card.suit != slot {
        return Err(Violation::WrongSuit);
    }
    match top {
        None if card.rank == Rank::Ace => Ok(()),
        None => Err(Violation::NeedsAce),
        Some(top) if card.value() == top.value() + 1 => Ok(()),
        Some(_) => Err(Violation::WrongRank),
    }
}

/// Face-up, strictly descending, alternating-color sequence
pub fn is_run(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.face_up)
        && cards
            .windows(2)
            .all(|pair| pair[0].color() != pair[1].color() && pair[0].value() == pair[1].value() + 1)
}

pub fn is_legal(board: &Board, mv: &Move) -> bool {
    validate(board, mv).is_ok()
}

/// Check a move against the board without touching it
pub fn validate(board: &Board, mv: &Move) -> Result<Plan, MoveError> {
    if board.is_won() {
        return Err(MoveError::GameWon);
    }
    check_shape(mv)?;

    match mv.kind {
        MoveKind::Draw => validate_draw(board, mv),
        MoveKind::Recycle => validate_recycle(board, mv),
        _ => validate_card_move(board, mv),
    }
}

fn pile_in_range(pile: PileRef) -> bool {
    match pile {
        PileRef::Stock | PileRef::Waste => true,
        PileRef::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
        PileRef::Tableau(i) => (i as usize) < TABLEAU_COLUMNS,
    }
}

fn check_shape(mv: &Move) -> Result<(), MoveError> {
    if !std::iter::once(mv.source).chain(mv.target).all(pile_in_range) {
        return Err(MoveError::InvalidMove("pile index out of range"));
    }

    let source_ok = matches!(
        (mv.kind, mv.source),
        (MoveKind::Draw, PileRef::Stock)
            | (MoveKind::Recycle, PileRef::Waste)
            | (MoveKind::WasteToTableau | MoveKind::WasteToFoundation, PileRef::Waste)
            | (
                MoveKind::TableauToTableau | MoveKind::TableauToFoundation,
                PileRef::Tableau(_)
            )
            | (MoveKind::FoundationToTableau, PileRef::Foundation(_))
    );
    if !source_ok {
        return Err(MoveError::InvalidMove("source pile does not match the move kind"));
    }

    let target_ok = match (mv.kind, mv.target) {
        (MoveKind::Draw, None | Some(PileRef::Waste)) => true,
        (MoveKind::Recycle, None | Some(PileRef::Stock)) => true,
        (
            MoveKind::WasteToFoundation | MoveKind::TableauToFoundation,
            None | Some(PileRef::Foundation(_)),
        ) => true,
        (
            MoveKind::WasteToTableau | MoveKind::TableauToTableau | MoveKind::FoundationToTableau,
            None,
        ) => return Err(MoveError::InvalidMove("move names no target column")),
        (
            MoveKind::WasteToTableau | MoveKind::TableauToTableau | MoveKind::FoundationToTableau,
            Some(PileRef::Tableau(_)),
        ) => true,
        _ => false,
    };
    if !target_ok {
        return Err(MoveError::InvalidMove("target pile does not match the move kind"));
    }
    Ok(())
}

/// A stock action may optionally name the card it turns; it must be the source top.
fn check_named_top(pile: &[Card], mv: &Move) -> Result<(), MoveError> {
    match mv.card {
        Some(id) if pile.last().map(|card| card.id) != Some(id) => Err(MoveError::InvalidMove(
            "card is not the top of the source pile",
        )),
        _ => Ok(()),
    }
}

fn validate_draw(board: &Board, mv: &Move) -> Result<Plan, MoveError> {
    let stock = board.stock();
    if stock.is_empty() {
        return Err(MoveError::EmptySource(PileRef::Stock));
    }
    check_named_top(stock, mv)?;

    let count = board.rules().draw_mode.count().min(stock.len());
    Ok(Plan {
        kind: MoveKind::Draw,
        source: PileRef::Stock,
        start: stock.len() - count,
        count,
        target: PileRef::Waste,
    })
}

fn validate_recycle(board: &Board, mv: &Move) -> Result<Plan, MoveError> {
    if !board.stock().is_empty() {
        return Err(Violation::StockNotEmpty.into());
    }
    let waste = board.waste();
    if waste.is_empty() {
        return Err(MoveError::EmptySource(PileRef::Waste));
    }
    if let Some(limit) = board.rules().recycle_limit {
        if board.recycles() >= limit {
            return Err(Violation::RecycleLimit.into());
        }
    }
    check_named_top(waste, mv)?;

    Ok(Plan {
        kind: MoveKind::Recycle,
        source: PileRef::Waste,
        start: 0,
        count: waste.len(),
        target: PileRef::Stock,
    })
}

fn validate_card_move(board: &Board, mv: &Move) -> Result<Plan, MoveError> {
    let id = mv
        .card
        .ok_or(MoveError::InvalidMove("move names no card"))?;
    if !id.is_valid() {
        return Err(MoveError::InvalidMove("unknown card id"));
    }

    let source = board.pile(mv.source);
    if source.is_empty() {
        return Err(MoveError::EmptySource(mv.source));
    }

    let (found_in, index) = board.locate(id).ok_or(MoveError::CardNotFound(id))?;
    if found_in != mv.source {
        return Err(MoveError::InvalidMove("card is not in the source pile"));
    }
    if mv.source_index.is_some_and(|i| i as usize != index) {
        return Err(MoveError::InvalidMove("source index does not match the card position"));
    }

    let card = &source[index];
    if !card.face_up {
        return Err(Violation::FaceDown.into());
    }
    if mv.kind == MoveKind::TableauToTableau {
        if !is_run(&source[index..]) {
            return Err(Violation::BrokenRun.into());
        }
    } else if index + 1 != source.len() {
        return Err(Violation::NotTopCard.into());
    }
    if mv.kind == MoveKind::FoundationToTableau && !board.rules().allow_foundation_to_tableau {
        return Err(Violation::ReverseMovesDisabled.into());
    }

    // Foundation moves may leave the target implicit.
    let target = mv.target.unwrap_or(PileRef::foundation_of(card.suit));
    if target == mv.source {
        return Err(Violation::SamePile.into());
    }

    let target_pile = board.pile(target);
    if mv.target_index.is_some_and(|i| i as usize != target_pile.len()) {
        return Err(MoveError::InvalidMove("target index does not match the target pile"));
    }

    match target {
        PileRef::Tableau(_) => can_stack_tableau(target_pile.last(), card)?,
        PileRef::Foundation(slot) => {
            let suit = Suit::from_index(slot as usize)
                .ok_or(MoveError::InvalidMove("pile index out of range"))?;
            can_stack_foundation(suit, target_pile.last(), card)?
        }
        PileRef::Stock | PileRef::Waste => {
            return Err(MoveError::InvalidMove("target pile does not match the move kind"))
        }
    }

    Ok(Plan {
        kind: mv.kind,
        source: mv.source,
        start: index,
        count: source.len() - index,
        target,
    })
}
