//! Move legality.

use crate::card::Card;

/// Returns whether `card` may be played on `top`.
///
/// A wild card is always playable; any other card must share the rank or the
/// suit of `top`. `top` is the active top of the discard pile, so a wild card
/// there carries the suit its player declared.
///
/// # Example
///
/// ```
/// use crazy8::{Card, Rank, Suit, is_valid_play};
///
/// let top = Card::new(Rank::Five, Suit::Spades);
/// assert!(is_valid_play(Card::new(Rank::King, Suit::Spades), top));
/// assert!(is_valid_play(Card::new(Rank::Five, Suit::Hearts), top));
/// assert!(is_valid_play(Card::new(Rank::Eight, Suit::Clubs), top));
/// assert!(!is_valid_play(Card::new(Rank::King, Suit::Hearts), top));
/// ```
#[must_use]
pub fn is_valid_play(card: Card, top: Card) -> bool {
    card.is_wild() || card.rank == top.rank || card.suit == top.suit
}
