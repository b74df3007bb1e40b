//! Line-oriented calculator host
//!
//! Each input line is split on whitespace. Every word is either a key
//! name (`7`, `+`, `.`, `Enter`, `Backspace`, `Escape`, `%`) or one of
//! the extra commands below. History and theme are kept in a JSON file
//! so they survive restarts.
//!
//! Extra commands:
//! - `sqrt`, `sq`, `inv`: square root, square, reciprocal
//! - `history`: list history rows
//! - `pick N`: re-use the result of history row N
//! - `forget`: clear history
//! - `theme`: toggle light/dark
//! - `quit`
//!
//! Run with: cargo run --example repl -- [storage-file]
//! Set RUST_LOG=reckon=debug to see dispatched commands.

use reckon::core::Command;
use reckon::shell::{Calculator, FileStore};
use reckon::CalculatorConfig;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn parse_word<'a>(word: &str, rest: &mut impl Iterator<Item = &'a str>) -> Option<Command> {
    match word {
        "sqrt" => Some(Command::SquareRoot),
        "sq" => Some(Command::Square),
        "inv" => Some(Command::Reciprocal),
        "forget" => Some(Command::ClearHistory),
        "theme" => Some(Command::ToggleTheme),
        "=" => Some(Command::Evaluate),
        "pick" => rest
            .next()
            .and_then(|n| n.parse().ok())
            .map(Command::SelectHistory),
        other => Command::from_key(other),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "reckon-session.json".to_string());

    let display = |value: &str| println!("[{:>20}]", value);
    let mut calc = Calculator::new(CalculatorConfig::default(), FileStore::open(&path), display)?;

    println!("reckon: theme {}, {} history rows", calc.theme().as_str(), calc.history().len());
    calc.render();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();

        while let Some(word) = words.next() {
            match word {
                "quit" => return Ok(()),
                "history" => {
                    for (i, entry) in calc.history().entries().iter().enumerate() {
                        println!("  {}: {}", i, entry);
                    }
                    continue;
                }
                _ => {}
            }

            if let Some(command) = parse_word(word, &mut words) {
                calc.dispatch(command);
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                // Multi-digit words are typed one digit at a time.
                for digit in word.chars() {
                    if let Some(command) = Command::from_key(&digit.to_string()) {
                        calc.dispatch(command);
                    }
                }
            } else {
                eprintln!("unknown input '{}'", word);
            }
        }
        io::stdout().flush()?;
    }

    Ok(())
}
