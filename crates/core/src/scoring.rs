//! Scoring module - per-move point tariff
//!
//! The default tariff:
//! - foundation placement: +10
//! - reveal of a face-down tableau card: +5
//! - waste to tableau: +5
//! - tableau to tableau: +1 per card moved
//! - stock draw and recycle: 0
//! - foundation back to tableau: -10
//!
//! The running score is floored at zero.

use serde::{Deserialize, Serialize};

use crate::types::{
    MoveKind, DRAW_POINTS, FOUNDATION_POINTS, FOUNDATION_TO_TABLEAU_POINTS, RECYCLE_POINTS,
    REVEAL_POINTS, TABLEAU_RUN_POINTS_PER_CARD, WASTE_TO_TABLEAU_POINTS,
};

/// Point values keyed by move kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub foundation: i32,
    pub reveal: i32,
    pub waste_to_tableau: i32,
    pub tableau_per_card: i32,
    pub draw: i32,
    pub recycle: i32,
    pub foundation_to_tableau: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            foundation: FOUNDATION_POINTS,
            reveal: REVEAL_POINTS,
            waste_to_tableau: WASTE_TO_TABLEAU_POINTS,
            tableau_per_card: TABLEAU_RUN_POINTS_PER_CARD,
            draw: DRAW_POINTS,
            recycle: RECYCLE_POINTS,
            foundation_to_tableau: FOUNDATION_TO_TABLEAU_POINTS,
        }
    }
}

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points for the move itself.
    pub move_points: i32,
    /// Reveal bonus, zero when nothing was turned over.
    pub reveal_points: i32,
    pub total: i32,
}

/// Points for a move of `kind` carrying `cards` cards
pub fn move_points(rules: &ScoringRules, kind: MoveKind, cards: usize) -> i32 {
    match kind {
        MoveKind::WasteToFoundation | MoveKind::TableauToFoundation => rules.foundation,
        MoveKind::WasteToTableau => rules.waste_to_tableau,
        MoveKind::TableauToTableau => {
            rules.tableau_per_card.saturating_mul(cards.min(i32::MAX as usize) as i32)
        }
        MoveKind::Draw => rules.draw,
        MoveKind::Recycle => rules.recycle,
        MoveKind::FoundationToTableau => rules.foundation_to_tableau,
    }
}

pub fn calculate_score(
    rules: &ScoringRules,
    kind: MoveKind,
    cards: usize,
    revealed: bool,
) -> ScoreResult {
    let move_points = move_points(rules, kind, cards);
    let reveal_points = if revealed { rules.reveal } else { 0 };
    ScoreResult {
        move_points,
        reveal_points,
        total: move_points.saturating_add(reveal_points),
    }
}

/// Apply a delta to a running score, never dropping below zero
///
/// The floor discards the part of a penalty that would go negative. At a
/// score of zero, taking a card off a foundation costs nothing and putting
/// it back earns the placement points, so a single round trip can gain one
/// placement. Further round trips net zero.
pub fn apply_delta(score: i32, delta: i32) -> i32 {
    score.saturating_add(delta).max(0)
}
