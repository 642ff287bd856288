//! Property tests over seeds and board sizes.

use std::time::Duration;

use flag_pairs::board::{generate, Board, CardState};
use flag_pairs::core::{BoardSize, Coord, GameRng, ImageId};
use flag_pairs::session::{GameSession, Phase};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

fn any_size() -> impl Strategy<Value = BoardSize> {
    prop_oneof![
        Just(BoardSize::Four),
        Just(BoardSize::Six),
        Just(BoardSize::Eight),
    ]
}

fn image_counts(board: &Board) -> FxHashMap<ImageId, usize> {
    let mut counts = FxHashMap::default();
    for card in board.cards() {
        *counts.entry(card.image).or_default() += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_board_is_paired(seed in any::<u64>(), size in any_size(), extra in 0usize..64) {
        let pool = size.pair_count() + extra;
        let board = generate(size.edge(), pool, &mut GameRng::new(seed)).unwrap();
        let counts = image_counts(&board);

        prop_assert_eq!(board.len(), size.card_count());
        prop_assert_eq!(counts.len(), size.pair_count());
        prop_assert!(counts.values().all(|&c| c == 2));
        prop_assert!(counts.keys().all(|image| (image.raw() as usize) < pool));
        prop_assert!(board.cards().iter().all(|card| card.state == CardState::Hidden));
    }

    #[test]
    fn same_seed_same_board(seed in any::<u64>(), size in any_size()) {
        let a = Board::generate(size, 32, &mut GameRng::new(seed)).unwrap();
        let b = Board::generate(size, 32, &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn matching_every_pair_wins(seed in any::<u64>(), size in any_size()) {
        let mut session = GameSession::default();
        session.start(size, &mut GameRng::new(seed)).unwrap();
        let pairs = session.board().unwrap().pairs();
        prop_assert_eq!(pairs.len(), size.pair_count());

        for [a, b] in pairs {
            session.reveal(a);
            session.reveal(b);
            session.advance(Duration::from_millis(1000));
        }

        prop_assert!(session.check_victory());
        prop_assert_eq!(session.phase(), Phase::Won);
        prop_assert_eq!(session.matched_pairs(), size.pair_count());
        let victories = session.notifications().iter().filter(|n| n.is_victory()).count();
        prop_assert_eq!(victories, 1);
    }

    #[test]
    fn random_clicks_keep_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0usize..5, 0usize..5, 0u64..1500), 1..200),
    ) {
        let mut session = GameSession::default();
        session.start(BoardSize::Four, &mut GameRng::new(seed)).unwrap();

        for (x, y, wait) in clicks {
            session.reveal(Coord::new(x, y));
            prop_assert!(session.pending().len() <= 2);

            session.advance(Duration::from_millis(wait));
            prop_assert!(session.pending().len() <= 2);

            if let Some(board) = session.board() {
                let revealed = board.coords_in_state(CardState::Revealed).count();
                prop_assert_eq!(revealed, session.pending().len());
                prop_assert_eq!(board.matched_count() % 2, 0);
            }
        }
    }

    #[test]
    fn repeated_reveal_is_idempotent(seed in any::<u64>(), x in 0usize..4, y in 0usize..4) {
        let mut session = GameSession::default();
        session.start(BoardSize::Four, &mut GameRng::new(seed)).unwrap();
        let coord = Coord::new(x, y);

        session.reveal(coord);
        let board_after_first = session.board().cloned();
        let notes_after_first = session.notifications().len();

        prop_assert!(session.reveal(coord).is_ignored());
        prop_assert_eq!(session.pending(), &[coord][..]);
        prop_assert_eq!(session.board().cloned(), board_after_first);
        prop_assert_eq!(session.notifications().len(), notes_after_first);
    }
}
