//! MoneyHero terminal game.
//!
//! A line-oriented interface for playing MoneyHero. Each round prints the
//! current scenario and its choices, acknowledges the pick immediately, and
//! reveals the next scenario only once resolution completes.
//!
//! Runs on offline fallback content when GEMINI_API_KEY is not set.

use moneyhero_core::{GameSession, Scenario, SessionError};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if std::env::var("GEMINI_API_KEY").is_err() && std::env::var("API_KEY").is_err() {
        println!("Note: GEMINI_API_KEY not set; playing with offline scenarios only.");
        println!();
    }

    run(GameSession::from_env()).await
}

async fn run(mut session: GameSession) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== MoneyHero: Level Up Your Life! ===");
    println!();
    println!("Commands:");
    println!("  1, 2, ...  - Pick a choice");
    println!("  #status    - Show your stats");
    println!("  #help      - Show this help");
    println!("  #quit      - Exit the game");
    println!();

    if let Some(scenario) = session.current_scenario() {
        print_scenario(scenario, session.level(), session.stats().wallet);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            match command {
                "quit" | "exit" => {
                    println!("Goodbye, hero!");
                    break;
                }
                "status" => print_status(&session),
                "help" => print_help(),
                _ => println!("[ERROR] Unknown command: #{command}"),
            }
            continue;
        }

        let Some(choice_id) = pick_choice_id(&session, line) else {
            println!("[ERROR] Pick a choice by number (e.g. 1) or id.");
            continue;
        };

        match session.choose(&choice_id) {
            Ok(outcome) => {
                // Immediate acknowledgment; the next scenario resolves after.
                println!();
                println!("*** {}", outcome.message);
                println!(
                    "    Wallet: {} QAR | Brain Power: {} | Fun: {}/100",
                    outcome.stats.wallet, outcome.stats.brain_power, outcome.stats.fun_meter
                );
                println!();
                println!("Finding your next challenge...");
                println!();

                session.resolve_next().await?;

                if let Some(scenario) = session.current_scenario() {
                    print_scenario(scenario, session.level(), session.stats().wallet);
                }
            }
            Err(SessionError::UnknownChoice(id)) => {
                println!("[ERROR] No such choice: {id}");
            }
            Err(e) => {
                println!("[ERROR] {e}");
            }
        }
    }

    Ok(())
}

/// Map player input (a 1-based number or a raw choice id) to a choice id.
fn pick_choice_id(session: &GameSession, input: &str) -> Option<String> {
    let scenario = session.current_scenario()?;

    if let Ok(n) = input.parse::<usize>() {
        return scenario.choices.get(n.checked_sub(1)?).map(|c| c.id.clone());
    }

    scenario
        .choices
        .iter()
        .find(|c| c.id == input)
        .map(|c| c.id.clone())
}

fn print_scenario(scenario: &Scenario, level: u32, wallet: i64) {
    println!("--- Level {level}: {} ---", scenario.title);
    if !scenario.category.is_empty() {
        println!("Lesson: {}", scenario.category);
    }
    println!();
    println!("{}", scenario.description);
    println!();
    for (i, choice) in scenario.choices.iter().enumerate() {
        let lock = if choice.is_affordable(wallet) { "" } else { " (locked)" };
        println!(
            "  {}. {} {}{lock}",
            i + 1,
            choice.emoji,
            choice.text
        );
        println!("     {}", choice.subtext);
    }
    println!();
    println!("Illustration: {}", scenario.illustration_url());
    println!();
}

fn print_status(session: &GameSession) {
    let stats = session.stats();
    println!("[STATUS]");
    println!("  Level: {}", session.level());
    println!("  Wallet: {} QAR", stats.wallet);
    println!("  Brain Power: {}", stats.brain_power);
    println!("  Fun Meter: {}/100", stats.fun_meter);
    if !session.history().is_empty() {
        println!("  Choices so far: {}", session.history().join(" -> "));
    }
}

fn print_help() {
    println!("MoneyHero - a financial literacy adventure for kids");
    println!();
    println!("Usage: moneyhero [--help]");
    println!();
    println!("Set GEMINI_API_KEY (or API_KEY) to enable live scenario");
    println!("generation; without it the game uses offline scenarios.");
    println!();
    println!("In game:");
    println!("  1, 2, ...  - Pick a choice");
    println!("  #status    - Show your stats");
    println!("  #help      - Show this help");
    println!("  #quit      - Exit the game");
}
