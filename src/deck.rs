//! Draw pile and discard pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// Shuffles `items` in place.
///
/// This is a Fisher–Yates shuffle: walking from the last index down to 1, each
/// element is swapped with a uniformly chosen element at or below it, so every
/// permutation is equally likely for a uniform source.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// The face-down draw pile. The last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates the unshuffled 52-card deck, suit by suit, ace to king.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Removes and returns the top card, without reshuffling.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws the top card, reshuffling the discard pile into the deck first
    /// if the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty and the discard pile
    /// holds nothing beneath its top card.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        discard: &mut DiscardPile,
        rng: &mut R,
    ) -> Result<Card, EmptyDeckError> {
        if self.cards.is_empty() {
            self.reshuffle_from(discard, rng);
        }
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Moves every discard beneath the top card into the deck and shuffles it.
    ///
    /// Wild cards return with their printed suit. Returns the number of cards
    /// moved.
    pub fn reshuffle_from<R: Rng + ?Sized>(
        &mut self,
        discard: &mut DiscardPile,
        rng: &mut R,
    ) -> usize {
        let mut recycled = discard.take_beneath_top();
        let moved = recycled.len();
        if moved > 0 {
            shuffle(&mut recycled, rng);
            self.cards.append(&mut recycled);
            tracing::debug!(moved, deck = self.cards.len(), "reshuffled discard pile");
        }
        moved
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A card lying on the discard pile.
///
/// The suit declared for a wild card belongs to the pile entry, not to the
/// card, and is set once when the card is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discard {
    card: Card,
    declared: Option<Suit>,
}

impl Discard {
    /// A card played at face value.
    #[must_use]
    pub const fn plain(card: Card) -> Self {
        Self {
            card,
            declared: None,
        }
    }

    /// A wild card played with a declared suit.
    #[must_use]
    pub const fn wild(card: Card, suit: Suit) -> Self {
        Self {
            card,
            declared: Some(suit),
        }
    }

    /// Returns the card as printed.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns the declared suit, if this entry is a wild card with one.
    #[must_use]
    pub const fn declared_suit(&self) -> Option<Suit> {
        self.declared
    }

    /// Returns the card as the rules see it: the printed rank with the
    /// declared suit, if any.
    #[must_use]
    pub fn active(&self) -> Card {
        Card::new(self.card.rank, self.declared.unwrap_or(self.card.suit))
    }
}

/// The face-up discard pile. The last entry is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    entries: Vec<Discard>,
}

impl DiscardPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a pile of plain cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            entries: cards.iter().copied().map(Discard::plain).collect(),
        }
    }

    /// Puts an entry on top of the pile.
    pub fn push(&mut self, entry: Discard) {
        self.entries.push(entry);
    }

    /// Returns the active top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.entries.last().map(Discard::active)
    }

    /// Returns the top entry.
    #[must_use]
    pub fn top_entry(&self) -> Option<&Discard> {
        self.entries.last()
    }

    /// Returns the entries, bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[Discard] {
        &self.entries
    }

    /// Returns the printed cards, bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().map(Discard::card)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes everything beneath the top entry, returning the printed cards.
    fn take_beneath_top(&mut self) -> Vec<Card> {
        let Some(top) = self.entries.pop() else {
            return Vec::new();
        };
        let beneath = self.entries.drain(..).map(|entry| entry.card).collect();
        self.entries.push(top);
        beneath
    }
}
