use crazy8::{
    Card, ComputerAction, DrawOutcome, Game, GameError, GameOptions, Played, Side, Snapshot, Suit,
    TurnState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&self) -> Result<JsValue, JsValue> {
        self.game.start_game();
        self.snapshot()
    }

    /// Plays the card at `index` in the player's hand, as rendered.
    #[wasm_bindgen(js_name = playCard)]
    pub fn play_card(&self, index: u32) -> Result<JsValue, JsValue> {
        let card = self
            .game
            .player_hand()
            .get(index as usize)
            .copied()
            .ok_or_else(|| JsValue::from_str("no card at that position"))?;
        self.game.play_card(card).map_err(js_err)?;
        self.snapshot()
    }

    /// Draws a card for the player. An empty deck still passes the turn, so
    /// it comes back as a draw with no card rather than an error.
    #[wasm_bindgen(js_name = drawCard)]
    pub fn draw_card(&self) -> Result<JsValue, JsValue> {
        let draw = JsDraw::from_result(self.game.draw_card(), self.game.snapshot());
        to_js_value(&draw.map_err(js_err)?)
    }

    /// Names the suit of the pending 8; accepts a symbol (`♥`) or a name.
    #[wasm_bindgen(js_name = chooseSuit)]
    pub fn choose_suit(&self, suit: &str) -> Result<JsValue, JsValue> {
        let suit = suit.parse::<Suit>().map_err(js_err)?;
        self.game.choose_suit(suit).map_err(js_err)?;
        self.snapshot()
    }

    #[wasm_bindgen(js_name = computerTurn)]
    pub fn computer_turn(&self) -> Result<JsValue, JsValue> {
        let action = self.game.computer_play().map_err(js_err)?;
        to_js_value(&JsComputerTurn::new(action, self.game.snapshot()))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    winner: Option<&'static str>,
    player_hand: Vec<JsCard>,
    computer_hand_size: u32,
    top_card: Option<JsCard>,
    pending_wild: Option<JsCard>,
    must_play: Option<JsCard>,
    status: String,
    deck_size: u32,
    discard_size: u32,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            state: state_to_str(snapshot.turn_state),
            winner: snapshot.turn_state.winner().map(side_to_str),
            player_hand: snapshot.player_hand.into_iter().map(card_to_js).collect(),
            computer_hand_size: snapshot.computer_hand_size as u32,
            top_card: snapshot.top_card.map(card_to_js),
            pending_wild: snapshot.pending_wild.map(card_to_js),
            must_play: snapshot.must_play.map(card_to_js),
            status: snapshot.status_message,
            deck_size: snapshot.deck_size as u32,
            discard_size: snapshot.discard_size as u32,
        }
    }
}

#[derive(Serialize)]
struct JsDraw {
    card: Option<JsCard>,
    played: bool,
    deck_empty: bool,
    snapshot: JsSnapshot,
}

impl JsDraw {
    fn from_result(
        result: Result<DrawOutcome, GameError>,
        snapshot: Snapshot,
    ) -> Result<Self, GameError> {
        let outcome = match result {
            Ok(outcome) => Some(outcome),
            Err(GameError::EmptyDeck) => None,
            Err(err) => return Err(err),
        };
        Ok(Self {
            card: outcome.map(|outcome| card_to_js(outcome.card())),
            played: matches!(outcome, Some(DrawOutcome::Played(_))),
            deck_empty: outcome.is_none(),
            snapshot: JsSnapshot::from(snapshot),
        })
    }
}

#[derive(Serialize)]
struct JsComputerTurn {
    action: &'static str,
    played: Option<JsCard>,
    declared_suit: Option<&'static str>,
    snapshot: JsSnapshot,
}

impl JsComputerTurn {
    fn new(action: ComputerAction, snapshot: Snapshot) -> Self {
        let (name, played) = match action {
            ComputerAction::Played(played) => ("Played", Some(played)),
            ComputerAction::DrewAndPlayed(played) => ("DrewAndPlayed", Some(played)),
            ComputerAction::Drew => ("Drew", None),
            ComputerAction::Passed => ("Passed", None),
        };

        Self {
            action: name,
            played: played.map(|Played { card, .. }| card_to_js(card)),
            declared_suit: played
                .and_then(|played| played.declared_suit)
                .map(suit_to_str),
            snapshot: JsSnapshot::from(snapshot),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: &'static str,
    label: String,
    wild: bool,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.label(),
        suit: suit_to_str(card.suit),
        label: card.to_string(),
        wild: card.is_wild(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Computer => "Computer",
    }
}

fn state_to_str(state: TurnState) -> &'static str {
    match state {
        TurnState::PlayerTurn => "PlayerTurn",
        TurnState::AwaitingSuitChoice => "AwaitingSuitChoice",
        TurnState::ComputerTurn => "ComputerTurn",
        TurnState::GameOver(_) => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
