//! GameSession - the primary public API for playing MoneyHero.
//!
//! A session owns the game state and the scenario director. Each round is
//! two explicit steps: `choose` applies the picked choice's effect and
//! acknowledges it immediately, `resolve_next` completes the (possibly
//! slow) resolution of the following scenario. The current scenario stays
//! in place and further choices are rejected while a resolution is
//! outstanding.

use crate::content;
use crate::director::{ScenarioDirector, TextModel};
use crate::scenario::Scenario;
use crate::stats::{ChoiceKind, PlayerStats};
use gemini::Gemini;
use thiserror::Error;

/// Errors from GameSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no choice with id {0:?} in the current scenario")]
    UnknownChoice(String),

    #[error("a scenario resolution is already in progress")]
    ResolutionPending,

    #[error("no scenario resolution is pending")]
    NothingPending,

    #[error("the session has no current scenario")]
    NoScenario,
}

/// The data held across a whole play session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current level, starting at 1.
    pub level: u32,
    pub stats: PlayerStats,
    pub current_scenario: Option<Scenario>,
    /// Labels of every accepted choice, append-only.
    pub history: Vec<String>,
    /// True while the next scenario is being resolved.
    pub is_loading: bool,
    pub game_over: bool,
}

impl GameState {
    /// A fresh session: level 1, starting stats, the opening scenario.
    pub fn new() -> Self {
        Self {
            level: 1,
            stats: PlayerStats::starting(),
            current_scenario: Some(content::initial_scenario()),
            history: Vec::new(),
            is_loading: false,
            game_over: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The immediate acknowledgment of an accepted choice.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Label of the picked choice.
    pub choice_text: String,
    /// Message shown to the player right away.
    pub message: String,
    pub kind: ChoiceKind,
    /// Stats after the choice's effect was applied.
    pub stats: PlayerStats,
}

/// A MoneyHero play session.
pub struct GameSession<M: TextModel = Gemini> {
    director: ScenarioDirector<M>,
    state: GameState,
    /// Label of the choice awaiting resolution, if any.
    pending_label: Option<String>,
}

impl GameSession<Gemini> {
    /// Create a session using the environment credential.
    ///
    /// A missing key is fine: the session runs on offline content.
    pub fn from_env() -> Self {
        Self::with_director(ScenarioDirector::from_env())
    }
}

impl<M: TextModel> GameSession<M> {
    /// Create a session with a specific director.
    pub fn with_director(director: ScenarioDirector<M>) -> Self {
        Self {
            director,
            state: GameState::new(),
            pending_label: None,
        }
    }

    /// Accept a choice by id: apply its effect, record it, and mark the
    /// session loading. Returns the acknowledgment to show immediately.
    ///
    /// Rejects a second submission while a resolution is outstanding.
    pub fn choose(&mut self, choice_id: &str) -> Result<Outcome, SessionError> {
        if self.state.is_loading {
            return Err(SessionError::ResolutionPending);
        }

        let scenario = self
            .state
            .current_scenario
            .as_ref()
            .ok_or(SessionError::NoScenario)?;

        let choice = scenario
            .choices
            .iter()
            .find(|c| c.id == choice_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownChoice(choice_id.to_string()))?;

        self.state.stats = self.state.stats.apply(&choice.effect);
        self.state.history.push(choice.text.clone());
        self.state.is_loading = true;
        self.pending_label = Some(choice.text.clone());

        Ok(Outcome {
            choice_text: choice.text,
            message: choice.outcome_message,
            kind: choice.kind,
            stats: self.state.stats,
        })
    }

    /// Complete the pending resolution: fetch the next scenario, advance the
    /// level, and clear the loading flag.
    ///
    /// Resolution itself cannot fail (the director absorbs every generation
    /// failure); this only errors when nothing is pending.
    pub async fn resolve_next(&mut self) -> Result<&Scenario, SessionError> {
        let label = self.pending_label.take().ok_or(SessionError::NothingPending)?;

        let next = self
            .director
            .next_scenario(self.state.level, self.state.stats, Some(&label))
            .await;

        self.state.level += 1;
        self.state.current_scenario = Some(next);
        self.state.is_loading = false;

        // current_scenario was just set
        self.state
            .current_scenario
            .as_ref()
            .ok_or(SessionError::NoScenario)
    }

    /// Accept a choice and resolve the next scenario in one call.
    pub async fn play(&mut self, choice_id: &str) -> Result<Outcome, SessionError> {
        let outcome = self.choose(choice_id)?;
        self.resolve_next().await?;
        Ok(outcome)
    }

    /// Get the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the scenario currently shown to the player.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.state.current_scenario.as_ref()
    }

    /// Get the current stats.
    pub fn stats(&self) -> PlayerStats {
        self.state.stats
    }

    /// Get the current level.
    pub fn level(&self) -> u32 {
        self.state.level
    }

    /// Get the accepted-choice history.
    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    /// Whether a resolution is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }
}
