//! Game configuration options.

/// What happens when the player draws a card that can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawnCardPolicy {
    /// The drawn card is played at once.
    #[default]
    AutoPlay,
    /// The drawn card stays in hand and the player keeps the turn, so it can
    /// be played with an explicit follow-up play.
    KeepInHand,
}

/// Configuration options for a game.
///
/// The rules themselves are fixed; these settings only shape how the engine
/// talks to its presentation layer. Use the builder methods to customize:
///
/// ```
/// use crazy8::{DrawnCardPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_drawn_card(DrawnCardPolicy::KeepInHand)
///     .with_status_messages(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Handling of a playable card drawn by the player.
    pub drawn_card: DrawnCardPolicy,
    /// Whether the engine writes human-readable status messages.
    pub status_messages: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            drawn_card: DrawnCardPolicy::AutoPlay,
            status_messages: true,
        }
    }
}

impl GameOptions {
    /// Sets the policy for a playable card drawn by the player.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8::{DrawnCardPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_drawn_card(DrawnCardPolicy::KeepInHand);
    /// assert_eq!(options.drawn_card, DrawnCardPolicy::KeepInHand);
    /// ```
    #[must_use]
    pub const fn with_drawn_card(mut self, policy: DrawnCardPolicy) -> Self {
        self.drawn_card = policy;
        self
    }

    /// Sets whether status messages are written.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8::GameOptions;
    ///
    /// let options = GameOptions::default().with_status_messages(false);
    /// assert_eq!(options.status_messages, false);
    /// ```
    #[must_use]
    pub const fn with_status_messages(mut self, enabled: bool) -> Self {
        self.status_messages = enabled;
        self
    }
}
