//! Core types module - shared card, pile and move definitions
//!
//! This crate defines the vocabulary shared by the rules engine, the hint
//! engine and the session adapter. All types are plain data with serde
//! support so that boards and moves can cross the JSON session boundary
//! unchanged.
//!
//! # Deck layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DECK_SIZE` | 52 | Cards in a standard deck |
//! | `RANKS_PER_SUIT` | 13 | Ace through King |
//! | `FOUNDATION_COUNT` | 4 | One foundation per suit |
//! | `TABLEAU_COLUMNS` | 7 | Working columns |
//! | `STOCK_AFTER_DEAL` | 24 | Cards left in stock after the deal |
//!
//! # Card identity
//!
//! Every card carries a [`CardId`] in `0..52`, laid out suit by suit in
//! [`Suit::ALL`] order: `id = suit_index * 13 + (rank_value - 1)`.
//!
//! # Examples
//!
//! ```
//! use klondike_types::{CardId, Rank, Suit, Move, PileRef};
//!
//! let ace = CardId::new(Suit::Spades, Rank::Ace);
//! assert_eq!(ace.label(), "A♠");
//! assert_eq!(CardId::from_str("as"), Some(ace));
//!
//! let mv = Move::waste_to_foundation(ace);
//! assert_eq!(mv.target, Some(PileRef::Foundation(0)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// Ranks per suit (Ace..King)
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of suits, and therefore foundations
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns
pub const TABLEAU_COLUMNS: usize = 7;

/// Cards dealt onto the tableau (1 + 2 + ... + 7)
pub const DEALT_TABLEAU_CARDS: usize = 28;

/// Cards remaining in the stock right after the deal
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - DEALT_TABLEAU_CARDS;

/// Upper bound on simultaneously legal moves.
///
/// 8 foundation moves, 7 waste→tableau, 42 tableau→tableau (at most one run
/// start per column pair), 28 foundation→tableau and one stock action.
pub const MAX_LEGAL_MOVES: usize = 96;

/// Default points for placing a card on a foundation
pub const FOUNDATION_POINTS: i32 = 10;

/// Default points for revealing a face-down tableau card
pub const REVEAL_POINTS: i32 = 5;

/// Default points for moving the waste top onto the tableau
pub const WASTE_TO_TABLEAU_POINTS: i32 = 5;

/// Default points per card moved between tableau columns
pub const TABLEAU_RUN_POINTS_PER_CARD: i32 = 1;

/// Default points for a stock draw
pub const DRAW_POINTS: i32 = 0;

/// Default points for recycling the waste into the stock
pub const RECYCLE_POINTS: i32 = 0;

/// Default points for taking a card back off a foundation
pub const FOUNDATION_TO_TABLEAU_POINTS: i32 = -10;


/// Card color, used for alternating tableau runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in foundation order (♠, ♥, ♦, ♣)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in foundation slot order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Foundation slot / id block index (0..4)
    pub fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Parse a suit from a letter or symbol (case-insensitive)
    ///
    /// Accepts "s", "h", "d", "c", the full names and the suit symbols.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" | "spades" | "♠" => Some(Suit::Spades),
            "h" | "hearts" | "♥" => Some(Suit::Hearts),
            "d" | "diamonds" | "♦" => Some(Suit::Diamonds),
            "c" | "clubs" | "♣" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Card rank, Ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (Ace) through 13 (King)
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        if value == 0 {
            return None;
        }
        Self::ALL.get(value as usize - 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse a rank label (case-insensitive); "T" is accepted for ten
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(Rank::Ace),
            "t" | "10" => Some(Rank::Ten),
            "j" => Some(Rank::Jack),
            "q" => Some(Rank::Queen),
            "k" => Some(Rank::King),
            digits => match digits.parse::<u8>() {
                Ok(v @ 2..=9) => Rank::from_value(v),
                _ => None,
            },
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or_else(|| format!("rank value {value} is outside 1..=13"))
    }
}

/// Unique token identifying one of the 52 cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() as u8 * RANKS_PER_SUIT + (rank.value() - 1))
    }

    /// Whether the id names one of the 52 cards
    pub fn is_valid(self) -> bool {
        (self.0 as usize) < DECK_SIZE
    }

    pub fn suit(self) -> Option<Suit> {
        if !self.is_valid() {
            return None;
        }
        Suit::from_index((self.0 / RANKS_PER_SUIT) as usize)
    }

    pub fn rank(self) -> Option<Rank> {
        if !self.is_valid() {
            return None;
        }
        Rank::from_value(self.0 % RANKS_PER_SUIT + 1)
    }

    /// Short label such as "A♠" or "10♥"; "??" for out-of-range ids
    pub fn label(self) -> String {
        match (self.suit(), self.rank()) {
            (Some(suit), Some(rank)) => format!("{}{}", rank.as_str(), suit.symbol()),
            _ => "??".to_string(),
        }
    }

    /// Parse a short label: rank followed by suit letter or symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_types::{CardId, Rank, Suit};
    ///
    /// assert_eq!(CardId::from_str("AS"), Some(CardId::new(Suit::Spades, Rank::Ace)));
    /// assert_eq!(CardId::from_str("10♦"), Some(CardId::new(Suit::Diamonds, Rank::Ten)));
    /// assert_eq!(CardId::from_str("ZZ"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let (split, _) = s.char_indices().last()?;
        let (rank, suit) = s.split_at(split);
        Some(Self::new(Suit::from_str(suit)?, Rank::from_str(rank)?))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A playing card and its orientation
///
/// Suit and rank are fixed by the id; only `face_up` changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::new(suit, rank),
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn label(&self) -> String {
        self.id.label()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}", self.id)
        } else {
            write!(f, "[{}]", self.id)
        }
    }
}

/// How many cards a stock draw turns over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(DrawMode::One),
            3 => Some(DrawMode::Three),
            _ => None,
        }
    }
}

/// Reference to a pile on the board
///
/// Foundation indices follow [`Suit::ALL`]; tableau indices are 0..7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pile", content = "index", rename_all = "snake_case")]
pub enum PileRef {
    Stock,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl PileRef {
    pub fn foundation_of(suit: Suit) -> Self {
        PileRef::Foundation(suit.index() as u8)
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, PileRef::Tableau(_))
    }
}

impl fmt::Display for PileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileRef::Stock => f.write_str("stock"),
            PileRef::Waste => f.write_str("waste"),
            PileRef::Foundation(i) => match Suit::from_index(*i as usize) {
                Some(suit) => write!(f, "foundation {}", suit.symbol()),
                None => write!(f, "foundation #{i}"),
            },
            PileRef::Tableau(i) => write!(f, "column {}", *i as u16 + 1),
        }
    }
}

/// Closed set of move kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Turn 1 or 3 cards from the stock onto the waste
    Draw,
    /// Turn the whole waste back over into an empty stock
    Recycle,
    WasteToTableau,
    WasteToFoundation,
    /// Move a face-up run between columns
    TableauToTableau,
    TableauToFoundation,
    /// Take the top foundation card back onto the tableau
    FoundationToTableau,
}

impl MoveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Draw => "draw",
            MoveKind::Recycle => "recycle",
            MoveKind::WasteToTableau => "waste_to_tableau",
            MoveKind::WasteToFoundation => "waste_to_foundation",
            MoveKind::TableauToTableau => "tableau_to_tableau",
            MoveKind::TableauToFoundation => "tableau_to_foundation",
            MoveKind::FoundationToTableau => "foundation_to_tableau",
        }
    }

    /// Stock actions carry no card
    pub fn is_stock_action(self) -> bool {
        matches!(self, MoveKind::Draw | MoveKind::Recycle)
    }
}

/// A requested move
///
/// `source_index` is the position of `card` inside the source pile and
/// `target_index` the position it will occupy in the target pile; both are
/// optional and checked when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardId>,
    pub source: PileRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_index: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_index: Option<u8>,
}

impl Move {
    fn new(kind: MoveKind, card: Option<CardId>, source: PileRef, target: PileRef) -> Self {
        Self {
            kind,
            card,
            source,
            source_index: None,
            target: Some(target),
            target_index: None,
        }
    }

    pub fn draw() -> Self {
        Self::new(MoveKind::Draw, None, PileRef::Stock, PileRef::Waste)
    }

    pub fn recycle() -> Self {
        Self::new(MoveKind::Recycle, None, PileRef::Waste, PileRef::Stock)
    }

    pub fn waste_to_tableau(card: CardId, column: u8) -> Self {
        Self::new(
            MoveKind::WasteToTableau,
            Some(card),
            PileRef::Waste,
            PileRef::Tableau(column),
        )
    }

    /// Target foundation is derived from the card's suit
    pub fn waste_to_foundation(card: CardId) -> Self {
        Self::new(
            MoveKind::WasteToFoundation,
            Some(card),
            PileRef::Waste,
            foundation_for(card),
        )
    }

    pub fn tableau_to_tableau(card: CardId, from: u8, index: u8, to: u8) -> Self {
        Self {
            source_index: Some(index),
            ..Self::new(
                MoveKind::TableauToTableau,
                Some(card),
                PileRef::Tableau(from),
                PileRef::Tableau(to),
            )
        }
    }

    pub fn tableau_to_foundation(card: CardId, from: u8) -> Self {
        Self::new(
            MoveKind::TableauToFoundation,
            Some(card),
            PileRef::Tableau(from),
            foundation_for(card),
        )
    }

    pub fn foundation_to_tableau(card: CardId, column: u8) -> Self {
        Self::new(
            MoveKind::FoundationToTableau,
            Some(card),
            foundation_for(card),
            PileRef::Tableau(column),
        )
    }

    pub fn with_source_index(mut self, index: u8) -> Self {
        self.source_index = Some(index);
        self
    }

    pub fn with_target_index(mut self, index: u8) -> Self {
        self.target_index = Some(index);
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.card, self.target) {
            (Some(card), Some(target)) => write!(f, "{card} {} -> {target}", self.source),
            (None, Some(target)) => write!(f, "{} {} -> {target}", self.kind.as_str(), self.source),
            _ => write!(f, "{} from {}", self.kind.as_str(), self.source),
        }
    }
}

fn foundation_for(card: CardId) -> PileRef {
    match card.suit() {
        Some(suit) => PileRef::foundation_of(suit),
        // Out-of-range ids are rejected by the validator; keep the slot visibly bogus.
        None => PileRef::Foundation(u8::MAX),
    }
}
