//! Invariants over random games.

use crazy8::{
    Card, DECK_SIZE, Deck, DrawnCardPolicy, Game, GameError, GameOptions, GameState, Suit,
    TurnState,
};
use proptest::prelude::*;

fn assert_conserved(state: &GameState) {
    let mut cards = state.all_cards();
    cards.sort();
    let mut expected: Vec<Card> = Deck::standard().cards().to_vec();
    expected.sort();

    assert_eq!(state.card_count(), DECK_SIZE);
    assert_eq!(cards, expected);
}

/// Applies one player move chosen by `kind` and `pick`, then runs the
/// computer if it is its turn.
fn step(game: &Game, kind: u8, pick: usize) {
    match game.state() {
        TurnState::PlayerTurn => {
            if kind % 3 == 0 {
                let _ = game.draw_card();
            } else {
                let hand = game.player_hand();
                let _ = game.play_card(hand[pick % hand.len()]);
            }
        }
        TurnState::AwaitingSuitChoice => {
            game.choose_suit(Suit::ALL[pick % Suit::ALL.len()]).unwrap();
        }
        TurnState::ComputerTurn | TurnState::GameOver(_) => {}
    }
    if game.state() == TurnState::ComputerTurn {
        game.computer_play().unwrap();
    }
}

fn policy() -> impl Strategy<Value = DrawnCardPolicy> {
    prop_oneof![
        Just(DrawnCardPolicy::AutoPlay),
        Just(DrawnCardPolicy::KeepInHand)
    ]
}

proptest! {
    #[test]
    fn cards_are_conserved(
        seed in any::<u64>(),
        drawn_card in policy(),
        moves in prop::collection::vec((any::<u8>(), any::<usize>()), 1..300),
    ) {
        let game = Game::new(GameOptions::default().with_drawn_card(drawn_card), seed);
        assert_conserved(&game.state.lock());

        for (kind, pick) in moves {
            step(&game, kind, pick);
            assert_conserved(&game.state.lock());
        }
    }

    #[test]
    fn suit_choice_locks_out_play_and_draw(
        seed in any::<u64>(),
        moves in prop::collection::vec((any::<u8>(), any::<usize>()), 1..300),
    ) {
        let game = Game::new(GameOptions::default(), seed);

        for (kind, pick) in moves {
            if game.state() == TurnState::AwaitingSuitChoice {
                let before = game.state.lock().clone();
                let hand = game.player_hand();
                if let Some(&card) = hand.first() {
                    let refused =
                        matches!(game.play_card(card), Err(GameError::IllegalState { .. }));
                    prop_assert!(refused, "play accepted while choosing a suit");
                }
                let refused = matches!(game.draw_card(), Err(GameError::IllegalState { .. }));
                prop_assert!(refused, "draw accepted while choosing a suit");
                let after = game.state.lock().clone();
                prop_assert_eq!(after, before);
            }
            step(&game, kind, pick);
        }
    }

    #[test]
    fn finished_games_stay_finished(
        seed in any::<u64>(),
        moves in prop::collection::vec((any::<u8>(), any::<usize>()), 1..600),
    ) {
        let game = Game::new(GameOptions::default(), seed);

        for (kind, pick) in moves {
            if let TurnState::GameOver(winner) = game.state() {
                let before = game.state.lock().clone();
                prop_assert!(before.hand(winner).is_empty());
                prop_assert_eq!(game.draw_card(), Err(GameError::GameOver));
                prop_assert_eq!(game.computer_play(), Err(GameError::GameOver));
                prop_assert_eq!(game.choose_suit(Suit::Hearts), Err(GameError::GameOver));
                let after = game.state.lock().clone();
                prop_assert_eq!(after, before);
                break;
            }
            step(&game, kind, pick);
        }
    }
}
