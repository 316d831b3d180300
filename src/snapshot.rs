//! Render-ready view of a game.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, TurnState};

/// Everything a presentation layer needs to draw the table.
///
/// The computer's cards are hidden; only their number is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player's cards, in hand order.
    pub player_hand: Vec<Card>,
    /// Number of cards in the computer's hand.
    pub computer_hand_size: usize,
    /// The active top of the discard pile. A wild card shows its declared suit.
    pub top_card: Option<Card>,
    /// The 8 the player has put down and must name a suit for.
    pub pending_wild: Option<Card>,
    /// The drawn card the player kept and must follow up with a play.
    pub must_play: Option<Card>,
    /// Whose move it is.
    pub turn_state: TurnState,
    /// Description of the last transition.
    pub status_message: String,
    /// Number of cards in the deck.
    pub deck_size: usize,
    /// Number of cards in the discard pile.
    pub discard_size: usize,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            player_hand: state.player.cards().to_vec(),
            computer_hand_size: state.computer.len(),
            top_card: state.top(),
            pending_wild: state.pending_wild,
            must_play: state.must_play,
            turn_state: state.turn,
            status_message: state.status.clone(),
            deck_size: state.deck.len(),
            discard_size: state.discard.len(),
        }
    }
}
