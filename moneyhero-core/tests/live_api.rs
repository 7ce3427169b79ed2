//! Live API integration tests.
//!
//! These hit the real Gemini API and are ignored by default.
//!
//! Run with: `GEMINI_API_KEY=$GEMINI_API_KEY cargo test -p moneyhero-core live_api -- --ignored --nocapture`

use moneyhero_core::{PlayerStats, ScenarioDirector};

fn setup() {
    let _ = dotenvy::dotenv();
}

fn has_api_key() -> bool {
    std::env::var("GEMINI_API_KEY").is_ok() || std::env::var("API_KEY").is_ok()
}

#[tokio::test]
#[ignore]
async fn test_live_generation_respects_invariants() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: GEMINI_API_KEY not set");
        return;
    }

    let director = ScenarioDirector::from_env();
    let stats = PlayerStats {
        wallet: 120,
        brain_power: 30,
        fun_meter: 60,
    };

    let scenario = director.next_scenario(4, stats, Some("Walk Away")).await;

    println!("Title: {}", scenario.title);
    println!("Category: {}", scenario.category);
    println!("Description: {}", scenario.description);
    for choice in &scenario.choices {
        println!(
            "  [{}] {} ({:+} QAR) - {}",
            choice.id, choice.text, choice.effect.wallet_change, choice.subtext
        );
    }

    // Whether generation succeeded or fell back, the invariants hold.
    assert_eq!(scenario.id, 5);
    assert!(!scenario.title.is_empty());
    assert!(!scenario.choices.is_empty());
    assert!(scenario.has_affordable_choice(stats.wallet));
}
