use crate::card::{Card, Suit};
use crate::deck::Discard;
use crate::error::{GameError, Intent, InvalidMove};
use crate::options::DrawnCardPolicy;
use crate::result::DrawOutcome;
use crate::rules::is_valid_play;

use super::{Game, GameState, Side, TurnState, playable_on};

impl Game {
    /// Player action: play a card from hand.
    ///
    /// An 8 leaves the game in [`TurnState::AwaitingSuitChoice`] until
    /// [`choose_suit`](Self::choose_suit) is called. Any other card goes on
    /// the discard pile and passes the turn, unless it was the player's last.
    ///
    /// Returns the turn state after the play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, the
    /// card is not in the player's hand, or it does not match the top card.
    /// Nothing changes on error.
    pub fn play_card(&self, card: Card) -> Result<TurnState, GameError> {
        let mut state = self.state.lock();
        self.play_from_hand(&mut state, card)
            .inspect_err(|err| tracing::debug!(%card, %err, "play rejected"))
    }

    fn play_from_hand(&self, state: &mut GameState, card: Card) -> Result<TurnState, GameError> {
        Self::ensure_turn(state, Intent::PlayCard, TurnState::PlayerTurn)?;

        if !state.player.contains(card) {
            return Err(InvalidMove::NotInHand(card).into());
        }
        if let Some(top) = state.top() {
            if !is_valid_play(card, top) {
                return Err(InvalidMove::NoMatch { card, top }.into());
            }
        }

        state.player.remove(card);
        state.must_play = None;

        if card.is_wild() {
            state.pending_wild = Some(card);
            state.turn = TurnState::AwaitingSuitChoice;
            self.announce(state, format_args!("You played an 8! Choose a suit."));
            tracing::debug!(%card, "player played wild card");
        } else {
            state.discard.push(Discard::plain(card));
            self.announce(state, format_args!("You played {card}. Computer's turn..."));
            tracing::debug!(%card, "player played");
            self.finish_play(state, Side::Player);
        }

        Ok(state.turn)
    }

    /// Player action: draw a card.
    ///
    /// A card that cannot be played ends the player's turn. A playable card is
    /// handled according to [`GameOptions::drawn_card`](crate::GameOptions).
    /// A kept playable card must be followed by a play before the player may
    /// draw again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, or
    /// the player still holds a kept playable card; nothing changes in that
    /// case. Returns [`GameError::EmptyDeck`] if the
    /// deck and the discard pile beneath its top are both exhausted; the turn
    /// then passes to the computer and no card moves.
    pub fn draw_card(&self) -> Result<DrawOutcome, GameError> {
        let mut state = self.state.lock();
        self.draw_for_player(&mut state)
            .inspect_err(|err| tracing::debug!(%err, "draw rejected"))
    }

    fn draw_for_player(&self, state: &mut GameState) -> Result<DrawOutcome, GameError> {
        Self::ensure_turn(state, Intent::DrawCard, TurnState::PlayerTurn)?;
        if state.must_play.is_some() {
            return Err(GameError::IllegalState {
                intent: Intent::DrawCard,
                state: state.turn,
            });
        }

        let drawn = state.deck.draw(&mut state.discard, &mut *self.rng.lock());
        let card = match drawn {
            Ok(card) => card,
            Err(err) => {
                state.turn = TurnState::ComputerTurn;
                self.announce(state, format_args!("Deck empty! Computer's turn..."));
                return Err(err.into());
            }
        };

        state.player.add_card(card);
        tracing::debug!(%card, deck = state.deck.len(), "player drew");

        if !playable_on(state.top(), card) {
            state.turn = TurnState::ComputerTurn;
            self.announce(state, format_args!("No valid play. Computer's turn..."));
            return Ok(DrawOutcome::Kept(card));
        }

        match self.options.drawn_card {
            DrawnCardPolicy::AutoPlay => {
                match self.play_from_hand(state, card)? {
                    TurnState::AwaitingSuitChoice => {
                        self.announce(state, format_args!("You drew an 8! Choose a suit."));
                    }
                    TurnState::ComputerTurn => {
                        self.announce(
                            state,
                            format_args!("You drew {card} and played it. Computer's turn..."),
                        );
                    }
                    _ => {}
                }
                Ok(DrawOutcome::Played(card))
            }
            DrawnCardPolicy::KeepInHand => {
                state.must_play = Some(card);
                self.announce(state, format_args!("You drew {card}. You can play it now."));
                Ok(DrawOutcome::Kept(card))
            }
        }
    }

    /// Player action: name the suit of the 8 just played.
    ///
    /// The 8 goes on the discard pile carrying `suit`, then the turn passes
    /// (or the game ends if it was the player's last card).
    ///
    /// Returns the turn state after the choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or no 8 is waiting for a suit.
    pub fn choose_suit(&self, suit: Suit) -> Result<TurnState, GameError> {
        let mut state = self.state.lock();
        self.declare_suit(&mut state, suit)
            .inspect_err(|err| tracing::debug!(%suit, %err, "suit choice rejected"))
    }

    fn declare_suit(&self, state: &mut GameState, suit: Suit) -> Result<TurnState, GameError> {
        Self::ensure_turn(state, Intent::ChooseSuit, TurnState::AwaitingSuitChoice)?;

        let Some(card) = state.pending_wild.take() else {
            return Err(GameError::IllegalState {
                intent: Intent::ChooseSuit,
                state: state.turn,
            });
        };

        state.discard.push(Discard::wild(card, suit));
        self.announce(state, format_args!("You chose {suit}. Computer's turn..."));
        tracing::debug!(%card, %suit, "player declared suit");
        self.finish_play(state, Side::Player);

        Ok(state.turn)
    }
}
