//! The scenario director.
//!
//! `ScenarioDirector` resolves the next scenario for a level and stat
//! snapshot. Scripted levels and the debt guard complete without
//! suspension; the generative path races a timed model call against the
//! offline fallback library. Every branch funnels through the sanitizer,
//! and no failure escapes to the caller.

use super::parse::parse_scenario;
use super::prompt::{build_prompt, Concept};
use crate::content;
use crate::fallback::fallback_scenario;
use crate::sanitize::sanitize_choices;
use crate::scenario::Scenario;
use crate::stats::PlayerStats;
use gemini::Gemini;
use log::{debug, warn};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// How long the generative call may run before the fallback wins the race.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(4);

/// Wallet below this bypasses generation entirely.
pub const DEBT_GUARD_THRESHOLD: i64 = 20;

/// Internal failure taxonomy for the generative path. Never surfaced to the
/// player; logged and absorbed into the fallback branch.
#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("no API key configured")]
    NoApiKey,

    #[error("generation timed out")]
    Timeout,

    #[error("model error: {0}")]
    Model(#[from] gemini::Error),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// The seam between the director and the generative text service.
///
/// Production uses the Gemini client; tests substitute scripted or
/// never-resolving models.
pub trait TextModel: Send + Sync {
    /// Generate raw text for a prompt.
    fn generate(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, gemini::Error>> + Send;
}

impl TextModel for Gemini {
    fn generate(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, gemini::Error>> + Send {
        async move {
            let request = gemini::Request::new(prompt)
                .with_response_mime_type("application/json")
                .with_thinking_budget(0);
            let response = Gemini::generate(self, request).await?;
            Ok(response.text())
        }
    }
}

/// Configuration for the director.
#[derive(Debug, Clone)]
pub struct DirectorConfig {
    /// Deadline for the generative call.
    pub timeout: Duration,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            timeout: GENERATION_TIMEOUT,
        }
    }
}

/// Resolves where each next scenario comes from.
pub struct ScenarioDirector<M = Gemini> {
    model: Option<M>,
    config: DirectorConfig,
}

impl ScenarioDirector<Gemini> {
    /// Create a director from the GEMINI_API_KEY environment variable.
    ///
    /// A missing key is a valid, expected condition: the director comes up
    /// offline and serves fallback content instead.
    pub fn from_env() -> Self {
        match Gemini::from_env() {
            Ok(client) => Self::with_model(client),
            Err(_) => {
                debug!("no API key configured, running offline");
                Self::offline()
            }
        }
    }
}

impl<M: TextModel> ScenarioDirector<M> {
    /// Create a director backed by the given model.
    pub fn with_model(model: M) -> Self {
        Self {
            model: Some(model),
            config: DirectorConfig::default(),
        }
    }

    /// Create a director with no model. All generative requests fall back.
    pub fn offline() -> Self {
        Self {
            model: None,
            config: DirectorConfig::default(),
        }
    }

    /// Configure the director.
    pub fn with_config(mut self, config: DirectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve the next scenario for the given level and post-choice stats.
    ///
    /// Evaluated in strict priority order: scripted levels, debt guard,
    /// generative path, fallback. This never fails; the worst case is
    /// offline library content after the timeout.
    pub async fn next_scenario(
        &self,
        current_level: u32,
        stats: PlayerStats,
        previous_choice: Option<&str>,
    ) -> Scenario {
        if let Some(label) = previous_choice {
            debug!("resolving level {} after choice {label:?}", current_level + 1);
        }

        // Scripted early levels: zero network, fixed lessons.
        if current_level == 1 {
            return content::subscription_trap();
        }
        if current_level == 2 {
            return content::eidiyah_surprise();
        }

        // Debt guard: near-zero funds never touches the network.
        if stats.wallet < DEBT_GUARD_THRESHOLD {
            debug!("debt guard active at wallet {}", stats.wallet);
            return fallback_scenario(current_level + 1, stats.wallet);
        }

        match self.try_generate(current_level, stats.wallet).await {
            Ok(scenario) => scenario,
            Err(e) => {
                warn!("scenario generation failed ({e}), using fallback");
                fallback_scenario(current_level + 1, stats.wallet)
            }
        }
    }

    /// The generative path: prompt, timed model call, defensive parse,
    /// sanitize, stamp.
    async fn try_generate(&self, current_level: u32, wallet: i64) -> Result<Scenario, DirectorError> {
        let model = self.model.as_ref().ok_or(DirectorError::NoApiKey)?;

        let concept = Concept::random();
        let prompt = build_prompt(&concept, wallet);

        // Single-winner race: whichever of the model call and the deadline
        // settles first decides the path. On timeout the in-flight call is
        // dropped, never awaited again.
        let text = tokio::time::timeout(self.config.timeout, model.generate(prompt))
            .await
            .map_err(|_| DirectorError::Timeout)??;

        let mut scenario = parse_scenario(&text)?;

        if scenario.category.is_empty() {
            scenario.category = concept.topic.to_string();
        }
        scenario.id = current_level + 1;
        scenario.choices = sanitize_choices(scenario.choices, wallet);

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_levels_are_fixed() {
        let director: ScenarioDirector<Gemini> = ScenarioDirector::offline();

        for stats in [
            PlayerStats::starting(),
            PlayerStats {
                wallet: 0,
                brain_power: 0,
                fun_meter: 0,
            },
        ] {
            let s = director.next_scenario(1, stats, Some("anything")).await;
            assert_eq!(s.title, "The Subscription Trap");
            assert_eq!(s.id, 2);

            let s = director.next_scenario(2, stats, None).await;
            assert_eq!(s.title, "Eidiyah Surprise");
            assert_eq!(s.id, 3);
        }
    }

    #[tokio::test]
    async fn test_debt_guard_skips_generation() {
        // Offline director would fail generation; the debt guard must
        // short-circuit before that path is even considered.
        let director: ScenarioDirector<Gemini> = ScenarioDirector::offline();
        let stats = PlayerStats {
            wallet: 10,
            brain_power: 0,
            fun_meter: 50,
        };

        let s = director.next_scenario(5, stats, None).await;
        assert_eq!(s.title, "Garage Helper");
        assert_eq!(s.id, 6);
        assert!(s.choices.iter().any(|c| c.effect.wallet_change == 20));
    }

    #[tokio::test]
    async fn test_offline_director_falls_back() {
        let director: ScenarioDirector<Gemini> = ScenarioDirector::offline();
        let stats = PlayerStats {
            wallet: 100,
            brain_power: 0,
            fun_meter: 50,
        };

        let s = director.next_scenario(4, stats, None).await;
        assert_eq!(s.id, 5);
        assert!(s.has_affordable_choice(100));
    }
}
