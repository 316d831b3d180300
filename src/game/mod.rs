//! Turn engine and state management.

use core::fmt;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::{GameError, Intent};
use crate::options::GameOptions;
use crate::rules::is_valid_play;
use crate::snapshot::Snapshot;

mod actions;
mod computer;
pub mod state;

pub use state::{GameState, HAND_SIZE, Side, TurnState};

/// A Crazy Eights game between a human player and the computer.
///
/// The game owns every card on the table and accepts one intent at a time:
/// each intent takes the state lock for its whole run, so observers only ever
/// see the state between intents. Locks are always taken state first, then
/// RNG.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The cards on the table and whose turn it is.
    pub state: Mutex<GameState>,
    /// Random number generator for shuffles and the computer's suit choices.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a game with the given seed and deals the first hand.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8::{Game, GameOptions, TurnState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), TurnState::PlayerTurn);
    /// assert_eq!(game.player_hand().len(), 7);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::deal(&mut rng);

        let game = Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(rng),
        };
        game.opened(&mut game.state.lock());
        game
    }

    /// Clears the table and deals a new game.
    ///
    /// This is the only way out of [`TurnState::GameOver`].
    pub fn start_game(&self) {
        let mut state = self.state.lock();
        *state = GameState::deal(&mut *self.rng.lock());
        self.opened(&mut state);
    }

    fn opened(&self, state: &mut GameState) {
        self.announce(state, format_args!("Your turn! Play a card or draw."));
        tracing::info!(
            top = ?state.top(),
            deck = state.deck.len(),
            "game started"
        );
    }

    /// Writes the status message, if status messages are enabled.
    fn announce(&self, state: &mut GameState, message: fmt::Arguments<'_>) {
        state.status.clear();
        if self.options.status_messages {
            state.status = alloc::fmt::format(message);
        }
    }

    /// Checks that the game is waiting for `intent` in the `expected` state.
    fn ensure_turn(
        state: &GameState,
        intent: Intent,
        expected: TurnState,
    ) -> Result<(), GameError> {
        match state.turn {
            TurnState::GameOver(_) => Err(GameError::GameOver),
            turn if turn == expected => Ok(()),
            turn => Err(GameError::IllegalState {
                intent,
                state: turn,
            }),
        }
    }

    /// Ends a turn in which `side` played a card: the game is over if its hand
    /// is empty, otherwise the other side moves.
    fn finish_play(&self, state: &mut GameState, side: Side) {
        if state.hand(side).is_empty() {
            state.turn = TurnState::GameOver(side);
            let message = match side {
                Side::Player => "You win!",
                Side::Computer => "Computer wins!",
            };
            self.announce(state, format_args!("{message}"));
            tracing::info!(winner = ?side, "game over");
        } else {
            state.turn = TurnState::turn_of(side.opponent());
        }
    }

    /// Returns the current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state.lock().turn
    }

    /// Returns a render-ready view of the table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&*self.state.lock())
    }

    /// Returns the active top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.state.lock().top()
    }

    /// Returns a copy of the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> Vec<Card> {
        self.state.lock().player.cards().to_vec()
    }

    /// Returns the number of cards in the computer's hand.
    #[must_use]
    pub fn computer_hand_len(&self) -> usize {
        self.state.lock().computer.len()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.lock().deck.len()
    }

    /// Consumes the game and returns its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state.into_inner()
    }
}

/// Returns whether `card` may go on `top`; anything goes on an empty pile.
fn playable_on(top: Option<Card>, card: Card) -> bool {
    top.is_none_or(|top| is_valid_play(card, top))
}
