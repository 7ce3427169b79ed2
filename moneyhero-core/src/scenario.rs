//! Scenario and choice types.
//!
//! Wire names are camelCase to match the JSON schema the generator is asked
//! to produce, so hand-authored and generated content share one shape.

use crate::stats::{ChoiceEffect, ChoiceKind};
use serde::{Deserialize, Serialize};

/// One selectable option within a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Unique within the owning scenario.
    pub id: String,
    /// Short button label.
    pub text: String,
    /// Short annotation under the label.
    pub subtext: String,
    /// Display glyph.
    pub emoji: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: ChoiceKind,
    pub effect: ChoiceEffect,
    /// Message shown after the choice is picked.
    pub outcome_message: String,
}

fn default_kind() -> ChoiceKind {
    ChoiceKind::Spending
}

impl Choice {
    /// Whether picking this choice would overdraw the given wallet.
    pub fn is_affordable(&self, wallet: i64) -> bool {
        self.effect.wallet_change >= 0 || self.effect.wallet_change.abs() <= wallet
    }
}

/// One decision point shown to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// The level this scenario becomes current for. Generated content omits
    /// it; the director stamps it before returning.
    #[serde(default)]
    pub id: u32,
    pub title: String,
    /// Educational topic label, used only for display grouping.
    #[serde(default)]
    pub category: String,
    /// Prompt fragment for the illustration provider.
    #[serde(default)]
    pub image_keyword: String,
    #[serde(default)]
    pub image_alt: String,
    pub description: String,
    pub choices: Vec<Choice>,
}

impl Scenario {
    /// Whether at least one choice is playable at the given wallet.
    pub fn has_affordable_choice(&self, wallet: i64) -> bool {
        self.choices.iter().any(|c| c.is_affordable(wallet))
    }

    /// Best-effort illustration URL for this scenario.
    ///
    /// The provider is keyed by a sanitized keyword and a numeric seed tied
    /// to the scenario id, so the same scenario always gets the same image.
    pub fn illustration_url(&self) -> String {
        illustration_url(&self.image_keyword, self.id)
    }
}

/// Build the illustration provider URL for a keyword and seed.
pub fn illustration_url(keyword: &str, seed: u32) -> String {
    let keyword = encode_keyword(keyword);
    format!(
        "https://image.pollinations.ai/prompt/minimalist%20flat%20vector%20art%20childrens%20book%20illustration%20{keyword}%20pastel%20colors%20white%20background?width=600&height=300&nologo=true&seed={seed}"
    )
}

/// Keep the keyword URL-safe: alphanumerics pass through, runs of anything
/// else collapse to a single encoded space.
fn encode_keyword(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut pending_space = false;
    for ch in keyword.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push_str("%20");
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ChoiceEffect;

    fn choice(wallet_change: i64) -> Choice {
        Choice {
            id: "t1".to_string(),
            text: "Test".to_string(),
            subtext: String::new(),
            emoji: String::new(),
            kind: ChoiceKind::Spending,
            effect: ChoiceEffect::new(wallet_change, 0, 0),
            outcome_message: String::new(),
        }
    }

    #[test]
    fn test_affordability() {
        assert!(choice(0).is_affordable(0));
        assert!(choice(20).is_affordable(0));
        assert!(choice(-10).is_affordable(10));
        assert!(!choice(-11).is_affordable(10));
    }

    #[test]
    fn test_illustration_url_encodes_keyword() {
        let url = illustration_url("candy shop, sweets!", 3);
        assert!(url.contains("candy%20shop%20sweets"));
        assert!(url.ends_with("seed=3"));
        assert!(!url.contains(','));
        assert!(!url.contains('!'));
    }

    #[test]
    fn test_parses_generated_shape() {
        // Generated content has no id or imageAlt and uses camelCase keys.
        let json = r#"{
            "title": "Cupcake Day",
            "category": "Trade & Profit",
            "description": "Buy ingredients and sell cupcakes.",
            "imageKeyword": "cupcakes bakery",
            "choices": [
                {
                    "id": "g1",
                    "text": "Bake & Sell",
                    "subtext": "Invest 20",
                    "emoji": "🧁",
                    "type": "investing",
                    "effect": { "walletChange": -20, "brainPowerChange": 10, "funMeterChange": 5 },
                    "outcomeMessage": "You made a profit!"
                }
            ]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.id, 0);
        assert_eq!(scenario.title, "Cupcake Day");
        assert_eq!(scenario.choices[0].kind, ChoiceKind::Investing);
        assert_eq!(scenario.choices[0].effect.wallet_change, -20);
    }
}
