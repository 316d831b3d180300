//! Outcome types returned by intents.

use crate::card::{Card, Suit};

/// What became of a card the player drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card went into the player's hand.
    Kept(Card),
    /// The card was playable and was played at once.
    Played(Card),
}

impl DrawOutcome {
    /// Returns the drawn card.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::Kept(card) | Self::Played(card) => card,
        }
    }
}

/// A card the computer put on the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Played {
    /// The card as printed.
    pub card: Card,
    /// The suit the computer named, if the card is wild.
    pub declared_suit: Option<Suit>,
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerAction {
    /// Played a card from its hand.
    Played(Played),
    /// Had nothing to play, drew a card and played it.
    DrewAndPlayed(Played),
    /// Had nothing to play and kept the card it drew.
    Drew,
    /// Had nothing to play and nothing could be drawn.
    Passed,
}
