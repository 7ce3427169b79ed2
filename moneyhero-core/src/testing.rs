//! Testing utilities for the MoneyHero engine.
//!
//! This module provides tools for integration testing:
//! - `MockModel` for deterministic testing without API calls
//! - `TestHarness` wiring a session to a scripted model

use crate::director::{DirectorConfig, ScenarioDirector, TextModel};
use crate::session::GameSession;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

/// One scripted model behavior.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Resolve with this text.
    Text(String),
    /// Resolve with a network error.
    Fail,
    /// Never resolve. Exercises the timeout race.
    Hang,
}

/// A mock text model that returns scripted replies.
///
/// Replies are consumed in order; when the queue is empty the configured
/// default behavior repeats. Every prompt is recorded for assertions.
pub struct MockModel {
    replies: Mutex<VecDeque<MockReply>>,
    default: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    /// A model whose every unscripted call fails.
    pub fn new() -> Self {
        Self::with_default(MockReply::Fail)
    }

    /// A model that always returns the given text.
    pub fn responding(text: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(text.into()))
    }

    /// A model that never resolves.
    pub fn hanging() -> Self {
        Self::with_default(MockReply::Hang)
    }

    fn with_default(default: MockReply) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply to be consumed before the default behavior.
    pub fn queue(&self, reply: MockReply) {
        lock(&self.replies).push_back(reply);
    }

    /// All prompts the director has sent so far.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl TextModel for MockModel {
    fn generate(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, gemini::Error>> + Send {
        lock(&self.prompts).push(prompt);
        let reply = lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| self.default.clone());

        async move {
            match reply {
                MockReply::Text(text) => Ok(text),
                MockReply::Fail => Err(gemini::Error::Network("scripted failure".to_string())),
                MockReply::Hang => std::future::pending().await,
            }
        }
    }
}

impl<T: TextModel> TextModel for Arc<T> {
    fn generate(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, gemini::Error>> + Send {
        (**self).generate(prompt)
    }
}

/// A session wired to a shared mock model.
pub struct TestHarness {
    pub session: GameSession<Arc<MockModel>>,
    pub model: Arc<MockModel>,
}

impl TestHarness {
    /// Harness whose model fails unless scripted.
    pub fn new() -> Self {
        Self::with_model(MockModel::new())
    }

    /// Harness backed by the given model.
    pub fn with_model(model: MockModel) -> Self {
        Self::with_model_and_config(model, DirectorConfig::default())
    }

    /// Harness with a custom director configuration (e.g. a short timeout
    /// so hang tests finish quickly).
    pub fn with_model_and_config(model: MockModel, config: DirectorConfig) -> Self {
        let model = Arc::new(model);
        let director = ScenarioDirector::with_model(Arc::clone(&model)).with_config(config);
        Self {
            session: GameSession::with_director(director),
            model,
        }
    }

    /// Queue a generation response.
    pub fn expect_generation(&self, json: impl Into<String>) -> &Self {
        self.model.queue(MockReply::Text(json.into()));
        self
    }

    /// Current wallet balance.
    pub fn wallet(&self) -> i64 {
        self.session.stats().wallet
    }

    /// Title of the scenario currently shown.
    pub fn current_title(&self) -> Option<&str> {
        self.session.current_scenario().map(|s| s.title.as_str())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PlayerStats;

    #[tokio::test]
    async fn test_mock_model_scripted_then_default() {
        let model = MockModel::new();
        model.queue(MockReply::Text("first".to_string()));

        assert_eq!(model.generate("p1".to_string()).await.unwrap(), "first");
        assert!(model.generate("p2".to_string()).await.is_err());
        assert_eq!(model.prompts(), ["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_harness_round_trip() {
        let mut harness = TestHarness::new();
        assert_eq!(harness.current_title(), Some("The Candy Shop Trap"));

        harness.session.play("c1").await.unwrap();
        assert_eq!(harness.wallet(), 450);
        assert_eq!(harness.current_title(), Some("The Subscription Trap"));
    }

    #[tokio::test]
    async fn test_prompt_carries_wallet() {
        let model = Arc::new(MockModel::new());
        let director = ScenarioDirector::with_model(Arc::clone(&model));
        let stats = PlayerStats {
            wallet: 73,
            brain_power: 0,
            fun_meter: 50,
        };

        // Level 3 is past the scripted levels and above the debt guard, so
        // the director must consult the model.
        let _ = director.next_scenario(3, stats, None).await;

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Wallet: 73 QAR"));
    }
}
