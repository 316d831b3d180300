//! CLI Crazy Eights example.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crazy8::{Card, ComputerAction, Game, GameOptions, Side, Snapshot, Suit, TurnState};
use tracing_subscriber::EnvFilter;

const THINKING: Duration = Duration::from_millis(800);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        match snapshot.turn_state {
            TurnState::PlayerTurn => {
                let input = prompt_line("Card number to play, [d]raw, or [q]uit: ");
                let result = match input.as_str() {
                    "q" | "quit" => return,
                    "d" | "draw" => game.draw_card().map(|_| ()),
                    other => match other.parse::<usize>() {
                        Ok(number) => match snapshot.player_hand.get(number.wrapping_sub(1)) {
                            Some(&card) => game.play_card(card).map(|_| ()),
                            None => {
                                println!("No card with that number.");
                                continue;
                            }
                        },
                        Err(_) => {
                            println!("Unknown action.");
                            continue;
                        }
                    },
                };

                if let Err(err) = result {
                    println!("{err}");
                }
            }
            TurnState::AwaitingSuitChoice => {
                let input = prompt_line("Suit ([s]pades, [h]earts, [d]iamonds, [c]lubs): ");
                if input == "q" || input == "quit" {
                    return;
                }
                match input.parse::<Suit>() {
                    Ok(suit) => {
                        if let Err(err) = game.choose_suit(suit) {
                            println!("{err}");
                        }
                    }
                    Err(err) => println!("{err}."),
                }
            }
            TurnState::ComputerTurn => {
                println!("Computer is thinking...");
                thread::sleep(THINKING);
                match game.computer_play() {
                    Ok(ComputerAction::Drew) => println!("Computer drew a card."),
                    Ok(_) => {}
                    Err(err) => println!("Computer error: {err}"),
                }
            }
            TurnState::GameOver(winner) => {
                match winner {
                    Side::Player => println!("You emptied your hand first."),
                    Side::Computer => println!("The computer emptied its hand first."),
                }
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => game.start_game(),
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nDeck: {} cards | Discard: {} cards | Computer holds {} cards",
        snapshot.deck_size, snapshot.discard_size, snapshot.computer_hand_size
    );

    let top = snapshot
        .top_card
        .map_or_else(|| "(none)".to_string(), |card| format_card(&card));
    println!("Top of discard: {top}");
    if let Some(card) = snapshot.pending_wild {
        println!("Waiting for a suit for {}", format_card(&card));
    }

    let hand = snapshot
        .player_hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Your hand: {hand}");

    if !snapshot.status_message.is_empty() {
        println!("{}", snapshot.status_message);
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    let text = card.to_string();
    if card.is_wild() {
        colorize(&text, "33")
    } else {
        colorize(&text, color_code)
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
