use rand::Rng;

use crate::card::Card;
use crate::error::{GameError, Intent};
use crate::policy;
use crate::result::{ComputerAction, Played};

use super::{Game, GameState, Side, TurnState, playable_on};

impl Game {
    /// Runs the computer's turn.
    ///
    /// The computer plays the first matching non-wild card in its hand, else
    /// its first 8 with a random suit. With nothing to play it draws one card
    /// and plays it if it fits. If nothing can be drawn it passes. The turn is
    /// applied as a whole; afterwards the game is back on
    /// [`TurnState::PlayerTurn`] or over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is not the computer's turn.
    /// Running out of cards is not an error here; the computer passes.
    pub fn computer_play(&self) -> Result<ComputerAction, GameError> {
        let mut state = self.state.lock();
        self.run_computer_turn(&mut state)
            .inspect_err(|err| tracing::debug!(%err, "computer turn rejected"))
    }

    fn run_computer_turn(&self, state: &mut GameState) -> Result<ComputerAction, GameError> {
        Self::ensure_turn(state, Intent::ComputerTurn, TurnState::ComputerTurn)?;

        let mut rng = self.rng.lock();
        let top = state.top();
        let choice = match top {
            Some(top) => policy::choose_card(state.computer.cards(), top),
            None => (!state.computer.is_empty()).then_some(0),
        };

        if let Some(card) = choice.and_then(|index| state.computer.take(index)) {
            let played = Self::computer_discard(state, card, &mut *rng);
            self.announce_computer_play(state, "played", played);
            self.finish_play(state, Side::Computer);
            return Ok(ComputerAction::Played(played));
        }

        let Ok(card) = state.deck.draw(&mut state.discard, &mut *rng) else {
            state.turn = TurnState::PlayerTurn;
            self.announce(
                state,
                format_args!("Deck empty! Computer passes. Your turn! Play a card or draw."),
            );
            tracing::debug!("computer passed");
            return Ok(ComputerAction::Passed);
        };
        state.computer.add_card(card);
        tracing::debug!(deck = state.deck.len(), "computer drew");

        if playable_on(state.top(), card) && state.computer.remove(card) {
            let played = Self::computer_discard(state, card, &mut *rng);
            self.announce_computer_play(state, "drew and played", played);
            self.finish_play(state, Side::Computer);
            return Ok(ComputerAction::DrewAndPlayed(played));
        }

        state.turn = TurnState::PlayerTurn;
        self.announce(
            state,
            format_args!("Computer drew a card. Your turn! Play a card or draw."),
        );
        Ok(ComputerAction::Drew)
    }

    /// Puts a card from the computer's hand on the discard pile.
    fn computer_discard<R: Rng + ?Sized>(state: &mut GameState, card: Card, rng: &mut R) -> Played {
        let entry = policy::discard_for(card, rng);
        state.discard.push(entry);
        tracing::debug!(%card, declared = ?entry.declared_suit(), "computer played");
        Played {
            card,
            declared_suit: entry.declared_suit(),
        }
    }

    fn announce_computer_play(&self, state: &mut GameState, verb: &str, played: Played) {
        match played.declared_suit {
            Some(suit) => self.announce(
                state,
                format_args!(
                    "Computer {verb} {} and chose {suit}. Your turn! Play a card or draw.",
                    played.card.rank
                ),
            ),
            None => self.announce(
                state,
                format_args!(
                    "Computer {verb} {}. Your turn! Play a card or draw.",
                    played.card
                ),
            ),
        }
    }
}
