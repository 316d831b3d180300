//! Computer opponent decisions.
//!
//! The policy is greedy: it sheds a matching card when it can, keeps its wild
//! cards for when nothing else fits, and names a random suit when it does play
//! one. All randomness comes from the caller's RNG, so a seeded game replays
//! the same decisions.

use rand::Rng;

use crate::card::{Card, Suit};
use crate::deck::Discard;
use crate::rules::is_valid_play;

/// Picks the card the computer plays on `top`.
///
/// Scans in hand order for the first non-wild card that matches `top`, then
/// for the first wild card. Returns its index, or `None` when nothing in the
/// hand can be played.
///
/// # Example
///
/// ```
/// use crazy8::{Card, Rank, Suit, choose_card};
///
/// let hand = [
///     Card::new(Rank::Eight, Suit::Clubs),
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Spades),
/// ];
/// let top = Card::new(Rank::Five, Suit::Spades);
/// assert_eq!(choose_card(&hand, top), Some(2));
/// ```
#[must_use]
pub fn choose_card(hand: &[Card], top: Card) -> Option<usize> {
    hand.iter()
        .position(|&card| !card.is_wild() && is_valid_play(card, top))
        .or_else(|| hand.iter().position(|card| card.is_wild()))
}

/// Picks one of the four suits uniformly at random.
pub fn random_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::ALL.len())]
}

/// Builds the discard entry for a card the computer plays, declaring a
/// random suit when the card is wild.
pub fn discard_for<R: Rng + ?Sized>(card: Card, rng: &mut R) -> Discard {
    if card.is_wild() {
        Discard::wild(card, random_suit(rng))
    } else {
        Discard::plain(card)
    }
}
