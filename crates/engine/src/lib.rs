//! Play assistance built on the rules engine
//!
//! - [`hint`]: heuristic ranking of legal moves
//! - [`autoplay`]: foundation plays that are always safe to make
//!
//! Nothing here changes the rules; every suggested move is taken from
//! `klondike_core::legal_moves` and applied through the same validator.

pub mod autoplay;
pub mod hint;

pub use autoplay::{autoplay, is_safe_foundation_card, safe_foundation_move};
pub use hint::{best_hint, rank_moves, RankedMove};
