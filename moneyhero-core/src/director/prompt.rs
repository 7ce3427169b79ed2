//! Prompt construction for scenario generation.
//!
//! This module only formats text. No parsing, no networking, no game logic.

use rand::seq::SliceRandom;

/// A pedagogical concept the generator is steered toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub topic: &'static str,
    pub guidance: &'static str,
}

/// The rotation of lessons the generative path draws from.
pub const CONCEPTS: [Concept; 4] = [
    Concept {
        topic: "Trade & Profit",
        guidance: "Buy ingredients for 20, sell cupcakes for 40. Profit = 20. (Business)",
    },
    Concept {
        topic: "Smart Spending",
        guidance: "Needs vs Wants. School shoes vs cool sneakers. (Budgeting)",
    },
    Concept {
        topic: "Charity",
        guidance: "Donate to help others. It brings blessings. (Charity)",
    },
    Concept {
        topic: "Patience",
        guidance: "Wait for a sale vs buy now at full price. (Saving)",
    },
];

impl Concept {
    /// Pick a random concept from the rotation.
    pub fn random() -> Concept {
        *CONCEPTS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&CONCEPTS[0])
    }
}

/// Build the generation prompt for a concept and the current wallet.
///
/// Encodes the target audience, the lesson, the wallet, the hard generation
/// constraints (no found money, no interest, every cost affordable), and the
/// exact JSON shape the parser expects.
pub fn build_prompt(concept: &Concept, wallet: i64) -> String {
    let mut prompt = String::new();

    prompt.push_str("Target: Kids 7-14.\n");
    prompt.push_str(&format!("Scenario: {}.\n", concept.topic));
    prompt.push_str(&format!("Wallet: {wallet} QAR.\n"));
    prompt.push_str(&format!("Guidance: {}.\n\n", concept.guidance));

    prompt.push_str("RULES:\n");
    prompt.push_str("1. NO \"Finding money\". NO Interest.\n");
    prompt.push_str(&format!("2. Choices MUST be affordable (Max cost {wallet}).\n"));
    prompt.push_str("3. Output JSON. Simple text.\n\n");

    prompt.push_str(
        "Schema: { title, category, description, imageKeyword, choices: \
         [{id, text, subtext, emoji, type, effect: {walletChange, brainPowerChange, \
         funMeterChange}, outcomeMessage}] }\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_encodes_wallet_and_topic() {
        let prompt = build_prompt(&CONCEPTS[0], 120);
        assert!(prompt.contains("Wallet: 120 QAR"));
        assert!(prompt.contains("Trade & Profit"));
        assert!(prompt.contains("Max cost 120"));
        assert!(prompt.contains("walletChange"));
    }

    #[test]
    fn test_random_concept_is_from_rotation() {
        for _ in 0..20 {
            let concept = Concept::random();
            assert!(CONCEPTS.contains(&concept));
        }
    }
}
