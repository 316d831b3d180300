//! A Crazy Eights game engine with optional `no_std` support.
//!
//! Two sides, a human player and the computer, take turns discarding cards
//! that match the rank or suit of the top of the discard pile. An 8 is wild:
//! it can be played on anything and its player names the suit to follow. The
//! first side to empty its hand wins.
//!
//! The crate provides a [`Game`] type that owns the deck, both hands and the
//! discard pile, accepts the player's intents, runs the computer's turn and
//! produces a [`Snapshot`] for whatever renders the table.
//!
//! # Example
//!
//! ```
//! use crazy8::{Game, GameOptions, TurnState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! if game.draw_card().is_ok() && game.state() == TurnState::ComputerTurn {
//!     game.computer_play().unwrap();
//! }
//! let snapshot = game.snapshot();
//! assert!(!snapshot.player_hand.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod rules;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, ParseSuitError, Rank, Suit, WILD_RANK};
pub use deck::{Deck, Discard, DiscardPile, shuffle};
pub use error::{EmptyDeckError, GameError, Intent, InvalidMove};
pub use game::{Game, GameState, HAND_SIZE, Side, TurnState};
pub use hand::Hand;
pub use options::{DrawnCardPolicy, GameOptions};
pub use policy::{choose_card, random_suit};
pub use result::{ComputerAction, DrawOutcome, Played};
pub use rules::is_valid_play;
pub use snapshot::Snapshot;
