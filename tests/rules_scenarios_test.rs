//! Rule scenarios driven through the public facade

use klondike::core::{apply_move, is_legal, is_won, Board, BoardParts, Game, MoveError, Violation};
use klondike::types::{Card, CardId, Move, Rank, Suit, FOUNDATION_POINTS, REVEAL_POINTS};

fn up(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank).face_up()
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn id(label: &str) -> CardId {
    CardId::from_str(label).unwrap()
}

#[test]
fn test_waste_ace_to_foundation() {
    let mut parts = BoardParts::default();
    parts.waste = vec![up(Suit::Hearts, Rank::Nine), up(Suit::Spades, Rank::Ace)];
    let board = Board::from_parts(parts);
    assert!(board.foundation(Suit::Spades).is_empty());

    let next = apply_move(&board, &Move::waste_to_foundation(id("AS"))).unwrap();
    assert_eq!(next.foundation(Suit::Spades), &[up(Suit::Spades, Rank::Ace)]);
    assert_eq!(next.score() - board.score(), FOUNDATION_POINTS);
    assert_eq!(next.waste().len(), 1);
    assert_eq!(next.moves(), 1);
}

#[test]
fn test_king_onto_occupied_column_rejected() {
    let mut parts = BoardParts::default();
    parts.tableau[0] = vec![up(Suit::Hearts, Rank::King)];
    parts.tableau[1] = vec![down(Suit::Clubs, Rank::Two), up(Suit::Clubs, Rank::Five)];
    let board = Board::from_parts(parts);

    let mv = Move::tableau_to_tableau(id("KH"), 0, 0, 1);
    let err = apply_move(&board, &mv).unwrap_err();
    assert!(matches!(err, MoveError::RuleViolation(_)), "{err}");
    assert_eq!(board.column(1).len(), 2);
    assert!(!is_legal(&board, &mv));

    // An empty column takes it.
    assert!(is_legal(&board, &Move::tableau_to_tableau(id("KH"), 0, 0, 4)));
}

#[test]
fn test_reveal_bonus_credited_once() {
    let mut parts = BoardParts::default();
    parts.stock = vec![down(Suit::Diamonds, Rank::Queen)];
    parts.tableau[0] = vec![down(Suit::Clubs, Rank::Two), up(Suit::Hearts, Rank::Seven)];
    parts.tableau[1] = vec![up(Suit::Spades, Rank::Eight)];
    let mut game = Game::from_board(Board::from_parts(parts));

    let outcome = game
        .apply_move(&Move::tableau_to_tableau(id("7H"), 0, 1, 1))
        .unwrap();
    assert_eq!(outcome.revealed, Some(id("2C")));
    assert_eq!(outcome.points.reveal_points, REVEAL_POINTS);
    assert!(game.board().column(0)[0].face_up);
    let score = game.score();

    let outcome = game.apply_move(&Move::draw()).unwrap();
    assert_eq!(outcome.revealed, None);
    assert_eq!(game.score(), score);
}

#[test]
fn test_won_board_rejects_moves() {
    let mut parts = BoardParts::default();
    for suit in Suit::ALL {
        parts.foundations[suit.index()] = Rank::ALL.iter().map(|&rank| up(suit, rank)).collect();
    }
    let king = parts.foundations[Suit::Diamonds.index()].pop().unwrap();
    parts.tableau[6] = vec![king];
    let board = Board::from_parts(parts);
    assert!(!is_won(&board));

    let won = apply_move(&board, &Move::tableau_to_foundation(id("KD"), 6)).unwrap();
    assert!(is_won(&won));
    assert!(won.foundations().iter().all(|pile| pile.len() == 13));
    assert_eq!(apply_move(&won, &Move::draw()), Err(MoveError::GameWon));
    assert_eq!(
        apply_move(&won, &Move::foundation_to_tableau(id("KD"), 0)),
        Err(MoveError::GameWon)
    );
}

#[test]
fn test_recycle_limit() {
    let mut parts = BoardParts::default();
    parts.stock = vec![down(Suit::Clubs, Rank::Nine)];
    parts.rules.recycle_limit = Some(1);
    let mut game = Game::from_board(Board::from_parts(parts));

    game.apply_move(&Move::draw()).unwrap();
    game.apply_move(&Move::recycle()).unwrap();
    game.apply_move(&Move::draw()).unwrap();
    assert_eq!(
        game.apply_move(&Move::recycle()),
        Err(MoveError::RuleViolation(Violation::RecycleLimit))
    );
    assert_eq!(game.board().recycles(), 1);
}

#[test]
fn test_malformed_moves() {
    let mut parts = BoardParts::default();
    parts.tableau[0] = vec![up(Suit::Hearts, Rank::King)];
    let board = Board::from_parts(parts);

    let mut no_card = Move::tableau_to_foundation(id("KH"), 0);
    no_card.card = None;
    assert!(matches!(apply_move(&board, &no_card), Err(MoveError::InvalidMove(_))));

    let out_of_range = Move::tableau_to_tableau(id("KH"), 0, 0, 9);
    assert!(matches!(apply_move(&board, &out_of_range), Err(MoveError::InvalidMove(_))));

    let missing = Move::tableau_to_foundation(id("AS"), 0);
    assert_eq!(apply_move(&board, &missing), Err(MoveError::CardNotFound(id("AS"))));

    let empty = Move::tableau_to_foundation(id("AS"), 3);
    assert!(matches!(apply_move(&board, &empty), Err(MoveError::EmptySource(_))));
}
