//! Financial literacy adventure engine with AI scenario generation.
//!
//! This crate provides:
//! - The MoneyHero game state model (stats, choices, scenarios)
//! - A scenario director that resolves each next scenario: scripted early
//!   levels, a debt guard, a timed generative call, an offline fallback
//! - An affordability sanitizer guaranteeing every scenario is playable
//!
//! # Quick Start
//!
//! ```ignore
//! use moneyhero_core::GameSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Runs on offline content when GEMINI_API_KEY is not set.
//!     let mut session = GameSession::from_env();
//!
//!     let scenario = session.current_scenario().unwrap();
//!     println!("{}: {}", scenario.title, scenario.description);
//!
//!     let outcome = session.choose("c2")?;
//!     println!("{}", outcome.message);
//!     session.resolve_next().await?;
//!     Ok(())
//! }
//! ```

pub mod content;
pub mod director;
pub mod fallback;
pub mod sanitize;
pub mod scenario;
pub mod session;
pub mod stats;
pub mod testing;

// Primary public API
pub use director::{DirectorConfig, DirectorError, ScenarioDirector, TextModel};
pub use fallback::fallback_scenario;
pub use sanitize::sanitize_choices;
pub use scenario::{illustration_url, Choice, Scenario};
pub use session::{GameSession, GameState, Outcome, SessionError};
pub use stats::{ChoiceEffect, ChoiceKind, PlayerStats};
pub use testing::{MockModel, MockReply, TestHarness};
