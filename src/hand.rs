//! Player and computer hands.

use alloc::vec::Vec;

use crate::card::Card;

/// The cards held by one side, in the order they were received.
///
/// Order only matters for display and for the computer's scan; the rules
/// treat a hand as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`, in that order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes one copy of `card`, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        self.position(card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Removes and returns the card at `index`.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the index of `card` in the hand.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&held| held == card)
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
