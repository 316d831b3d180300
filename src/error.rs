//! Error types for game operations.

use core::fmt;

use thiserror::Error;

use crate::card::Card;
use crate::game::TurnState;

/// The deck is empty and the discard pile has nothing to reshuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left to draw")]
pub struct EmptyDeckError;

/// Reasons a card play is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// The card is not in the acting hand.
    #[error("{0} is not in your hand")]
    NotInHand(Card),
    /// The card matches neither the rank nor the suit of the top card.
    #[error("{card} does not match {top}; play matching rank/suit or an 8")]
    NoMatch {
        /// The card that was offered.
        card: Card,
        /// The active top of the discard pile.
        top: Card,
    },
}

/// An action requested of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play a card from the player's hand.
    PlayCard,
    /// Draw a card for the player.
    DrawCard,
    /// Declare the suit of a wild card.
    ChooseSuit,
    /// Run the computer's turn.
    ComputerTurn,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayCard => "play a card",
            Self::DrawCard => "draw a card",
            Self::ChooseSuit => "choose a suit",
            Self::ComputerTurn => "run the computer turn",
        })
    }
}

/// Errors returned by game intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The card cannot be played.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
    /// Nothing is left to draw.
    #[error("deck empty")]
    EmptyDeck,
    /// The game has ended.
    #[error("the game is over")]
    GameOver,
    /// The intent is not accepted in the current turn state.
    #[error("cannot {intent} while {state:?}")]
    IllegalState {
        /// The refused intent.
        intent: Intent,
        /// The state the game was in.
        state: TurnState,
    },
}

impl From<EmptyDeckError> for GameError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}
