//! Property tests over random play-outs

use proptest::prelude::*;

use klondike::core::{apply, apply_move, is_legal, is_won, legal_moves, Board, Game, Rules, Seed};
use klondike::types::{CardId, DrawMode, Move, MoveKind, PileRef};

fn any_rules() -> impl Strategy<Value = Rules> {
    (any::<bool>(), any::<bool>(), prop::option::of(0u32..3)).prop_map(|(three, reverse, limit)| {
        let mut rules = Rules::default();
        if three {
            rules.draw_mode = DrawMode::Three;
        }
        rules.allow_foundation_to_tableau = reverse;
        rules.recycle_limit = limit;
        rules
    })
}

fn pile() -> impl Strategy<Value = PileRef> {
    prop_oneof![
        Just(PileRef::Stock),
        Just(PileRef::Waste),
        (0u8..5).prop_map(PileRef::Foundation),
        (0u8..8).prop_map(PileRef::Tableau),
    ]
}

fn kind() -> impl Strategy<Value = MoveKind> {
    prop_oneof![
        Just(MoveKind::Draw),
        Just(MoveKind::Recycle),
        Just(MoveKind::WasteToTableau),
        Just(MoveKind::WasteToFoundation),
        Just(MoveKind::TableauToTableau),
        Just(MoveKind::TableauToFoundation),
        Just(MoveKind::FoundationToTableau),
    ]
}

/// Arbitrary, mostly illegal, moves
fn any_move() -> impl Strategy<Value = Move> {
    (
        kind(),
        prop::option::of(0u8..56),
        pile(),
        prop::option::of(0u8..20),
        prop::option::of(pile()),
        prop::option::of(0u8..20),
    )
        .prop_map(|(kind, card, source, source_index, target, target_index)| Move {
            kind,
            card: card.map(CardId),
            source,
            source_index,
            target,
            target_index,
        })
}

/// Board reached by following `choices` through the legal move lists
fn play_out(seed: u64, rules: Rules, choices: &[usize]) -> Vec<Board> {
    let mut board = klondike::core::deal(Seed(seed), rules);
    let mut boards = vec![board.clone()];
    for &choice in choices {
        let moves = legal_moves(&board);
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        board = apply_move(&board, &mv).expect("listed move applies");
        boards.push(board.clone());
    }
    boards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every reachable board keeps all 52 cards, ordered foundations and
    /// well-formed columns.
    #[test]
    fn prop_structure_preserved(
        seed in any::<u64>(),
        rules in any_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..120),
    ) {
        for board in play_out(seed, rules, &choices) {
            prop_assert_eq!(board.check_invariants(), Ok(()));
            prop_assert_eq!(board.card_count(), 52);
            prop_assert_eq!(is_won(&board), board.foundations().iter().all(|p| p.len() == 13));
        }
    }

    /// Every enumerated move passes validation.
    #[test]
    fn prop_enumerator_sound(
        seed in any::<u64>(),
        rules in any_rules(),
        choices in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        for board in play_out(seed, rules, &choices) {
            for mv in legal_moves(&board) {
                prop_assert!(is_legal(&board, &mv), "{}", mv);
            }
        }
    }

    /// Undo after any legal move restores the exact prior board.
    #[test]
    fn prop_undo_restores(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
        pick in any::<usize>(),
    ) {
        let boards = play_out(seed, Rules::default(), &choices);
        let board = boards.last().cloned().unwrap_or_else(|| klondike::core::new_game(Some(Seed(seed))));
        let moves = legal_moves(&board);
        prop_assume!(!moves.is_empty());

        let mut game = Game::from_board(board.clone());
        game.apply_move(&moves[pick % moves.len()]).unwrap();
        game.undo().unwrap();
        prop_assert_eq!(game.board(), &board);
    }

    /// Rejected moves leave the board untouched.
    #[test]
    fn prop_rejection_is_clean(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
        attempts in prop::collection::vec(any_move(), 1..30),
    ) {
        let boards = play_out(seed, Rules::default(), &choices);
        let board = boards.last().cloned().unwrap_or_else(|| klondike::core::new_game(Some(Seed(seed))));
        for mv in attempts {
            let mut target = board.clone();
            match apply(&mut target, &mv) {
                Ok(_) => prop_assert!(is_legal(&board, &mv)),
                Err(_) => {
                    prop_assert!(!is_legal(&board, &mv));
                    prop_assert_eq!(&target, &board);
                }
            }
        }
    }
}
