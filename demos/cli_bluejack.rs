//! CLI bluejack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bluejack::{Card, Hand, Round, RoundState, Suit, Turn};

/// Delay between dealer draws so each card is observable on its own.
const DEALER_PACING: Duration = Duration::from_millis(500);

fn main() {
    println!("Bluejack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let round = Round::new(seed);

    round.subscribe(|snapshot| {
        if snapshot.state.is_terminal() {
            println!("--- round over ---");
        }
    });

    loop {
        print_table(&round);

        match round.state() {
            RoundState::Playing => {}
            RoundState::UserWon => println!("You won!"),
            RoundState::DealerWon => println!("Dealer won."),
            RoundState::Tie => println!("It's a tie."),
        }

        if round.state().is_terminal() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    round.reset();
                    continue;
                }
                _ => break,
            }
        }

        match prompt_line("Action (h)it / (s)tick / (r)eset / (q)uit: ").as_str() {
            "h" | "hit" => {
                if let Err(err) = round.hit() {
                    println!("Action error: {err}");
                }
            }
            "s" | "stick" => {
                if let Err(err) = round.stick() {
                    println!("Action error: {err}");
                    continue;
                }

                // Drive the dealer one paced step at a time.
                while round.state() == RoundState::Playing && round.turn() == Turn::Dealer {
                    thread::sleep(DEALER_PACING);
                    match round.advance_dealer() {
                        Ok(Some(card)) => println!("Dealer draws {}.", format_card(card)),
                        Ok(None) => {}
                        Err(err) => {
                            println!("Dealer error: {err}");
                            break;
                        }
                    }
                }
            }
            "r" | "reset" => round.reset(),
            "q" | "quit" => break,
            _ => println!("Unknown action."),
        }
    }

    println!("Goodbye.");
}

fn print_table(round: &Round) {
    println!();
    println!(
        "Dealer: {} (total {})",
        format_hand(&round.dealer_hand()),
        round.dealer_total()
    );
    println!(
        "You:    {} (total {})",
        format_hand(&round.user_hand()),
        round.user_total()
    );
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let suit = match card.suit {
        Suit::Spades => '\u{2660}',
        Suit::Diamonds => '\u{2666}',
        Suit::Clubs => '\u{2663}',
        Suit::Hearts => '\u{2665}',
    };
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    format!("{rank}{suit}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
