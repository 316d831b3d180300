//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::{Deck, Discard, DiscardPile};
use crate::hand::Hand;

/// Cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 7;

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

/// Whose move the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the player to play or draw.
    PlayerTurn,
    /// The player has put down an 8 and must name its suit.
    AwaitingSuitChoice,
    /// Waiting for the computer's turn to be run.
    ComputerTurn,
    /// The game has ended with a winner.
    GameOver(Side),
}

impl TurnState {
    /// The state in which `side` is to move.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Computer => Self::ComputerTurn,
        }
    }

    /// Returns the winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::GameOver(side) => Some(side),
            _ => None,
        }
    }
}

/// Everything on the table for one game.
///
/// Every card is in exactly one place: the deck, a hand, the discard pile, or
/// (while the player names a suit) `pending_wild`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The face-down draw pile.
    pub deck: Deck,
    /// The face-up discard pile.
    pub discard: DiscardPile,
    /// The player's hand.
    pub player: Hand,
    /// The computer's hand.
    pub computer: Hand,
    /// Whose move it is.
    pub turn: TurnState,
    /// The 8 the player has put down but not yet given a suit.
    pub pending_wild: Option<Card>,
    /// A playable card the player drew and kept; no further draw is allowed
    /// until the player plays a card.
    pub must_play: Option<Card>,
    /// Human-readable description of the last transition.
    pub status: String,
}

impl GameState {
    /// Builds and shuffles a fresh deck, deals [`HAND_SIZE`] cards to each
    /// side and turns up the first discard.
    ///
    /// Cards go to the player and the computer alternately, player first,
    /// each taken from the top of the deck.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);

        let mut player = Hand::new();
        let mut computer = Hand::new();
        for _ in 0..HAND_SIZE {
            if let Some(card) = deck.pop() {
                player.add_card(card);
            }
            if let Some(card) = deck.pop() {
                computer.add_card(card);
            }
        }

        let mut discard = DiscardPile::new();
        if let Some(card) = deck.pop() {
            discard.push(Discard::plain(card));
        }

        Self {
            deck,
            discard,
            player,
            computer,
            turn: TurnState::PlayerTurn,
            pending_wild: None,
            must_play: None,
            status: String::new(),
        }
    }

    /// Returns the hand of `side`.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Returns the active top of the discard pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.discard.top()
    }

    /// Returns every card on the table as printed, wherever it lies.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.player.cards());
        cards.extend_from_slice(self.computer.cards());
        cards.extend(self.discard.cards());
        cards.extend(self.pending_wild);
        cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.player.len()
            + self.computer.len()
            + self.discard.len()
            + usize::from(self.pending_wild.is_some())
    }
}
