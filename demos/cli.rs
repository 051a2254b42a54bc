//! Terminal table for the four-seat game.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use spacedeck::{Card, Command, HandStatus, RoundOptions, Screen, SeatMap, Session, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "spacedeck=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(RoundOptions::default(), seed);

    // Row labels are built once; rendering looks seats up by identity.
    let labels = SeatMap::from_fn(|seat| {
        let colour = if seat.is_dealer() { "35" } else { "36" };
        colorize(&format!("{:<7}", seat.name()), colour)
    });

    loop {
        match session.screen() {
            Screen::Home => {
                println!("\nSpace Deck");
                match prompt_line("[enter] play, [q] quit: ").as_str() {
                    "q" | "quit" => return,
                    _ => {
                        session.play();
                    }
                }
            }
            Screen::Game => {
                print_table(&session, &labels);
                println!("{}", session.status());

                let command = match prompt_line("[d]eal [p]ass [s]tand [r]estart [h]ome [q]uit: ")
                    .as_str()
                {
                    "d" | "deal" => Command::Deal,
                    "p" | "pass" => Command::Pass,
                    "s" | "stand" => Command::Stand,
                    "r" | "restart" => Command::Restart,
                    "h" | "home" => {
                        session.return_home();
                        continue;
                    }
                    "q" | "quit" => return,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };

                if let Err(err) = session.dispatch(command) {
                    println!("{}", colorize(&err.to_string(), "90"));
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
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(session: &Session, labels: &SeatMap<String>) {
    let round = session.round();
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    for (seat, label) in labels.iter() {
        let participant = round.participant(seat);
        let marker = if round.current() == Some(seat) { "*" } else { " " };
        println!(
            "{marker} {label} {:<32} | total {:>2} | {}",
            format_hand(participant.hand().cards()),
            participant.total(),
            format_status(participant.hand().status()),
        );
    }
    println!();
}

fn format_status(status: HandStatus) -> String {
    match status {
        HandStatus::Active => "playing".to_string(),
        HandStatus::Stood => "stands".to_string(),
        HandStatus::Busted => colorize("bust", "31"),
    }
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
