//! Defensive parsing of generated scenario text.
//!
//! The model is asked for strict JSON but offers no guarantee. Everything
//! here assumes the worst: markdown fences around the payload, stray
//! quoting inside free-text fields, missing optional fields.

use super::agent::DirectorError;
use crate::scenario::Scenario;

/// Strip markdown code fences and surrounding whitespace from a raw
/// model response, leaving the JSON payload.
pub fn strip_fences(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Clean a free-text field the model may have wrapped in stray JSON syntax:
/// surrounding quotes, a leaked `"key": "value"` fragment, escape slashes.
pub fn clean_field(text: &str) -> String {
    let mut cleaned = text
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();

    if let Some(idx) = cleaned.rfind("\": \"") {
        cleaned = cleaned[idx + 4..].replace('"', "");
    }

    cleaned.replace('\\', "")
}

/// Parse a raw model response into a scenario.
///
/// Returns `Malformed` if the payload is not valid JSON for the scenario
/// shape or carries no choices at all. Free-text fields are cleaned after
/// parsing.
pub fn parse_scenario(raw: &str) -> Result<Scenario, DirectorError> {
    let payload = strip_fences(raw);

    let mut scenario: Scenario = serde_json::from_str(&payload)
        .map_err(|e| DirectorError::Malformed(e.to_string()))?;

    if scenario.choices.is_empty() {
        return Err(DirectorError::Malformed("no choices in response".to_string()));
    }

    scenario.title = clean_field(&scenario.title);
    scenario.description = clean_field(&scenario.description);
    scenario.category = clean_field(&scenario.category);

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "The Cupcake Stand",
        "category": "Trade & Profit",
        "description": "Buy ingredients and sell cupcakes at school.",
        "imageKeyword": "cupcake stand school",
        "choices": [
            {
                "id": "g1", "text": "Bake & Sell", "subtext": "Invest 20", "emoji": "🧁",
                "type": "investing",
                "effect": { "walletChange": -20, "brainPowerChange": 10, "funMeterChange": 5 },
                "outcomeMessage": "Profit!"
            },
            {
                "id": "g2", "text": "Skip it", "subtext": "Keep your money", "emoji": "😴",
                "type": "saving",
                "effect": { "walletChange": 0, "brainPowerChange": 0, "funMeterChange": 0 },
                "outcomeMessage": "Nothing ventured."
            }
        ]
    }"#;

    #[test]
    fn test_parses_plain_json() {
        let scenario = parse_scenario(SAMPLE).unwrap();
        assert_eq!(scenario.title, "The Cupcake Stand");
        assert_eq!(scenario.choices.len(), 2);
    }

    #[test]
    fn test_strips_markdown_fences() {
        let fenced = format!("```json\n{SAMPLE}\n```");
        let scenario = parse_scenario(&fenced).unwrap();
        assert_eq!(scenario.title, "The Cupcake Stand");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_scenario("I cannot help with that."),
            Err(DirectorError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_empty_choices() {
        let json = r#"{ "title": "Empty", "description": "Nothing", "choices": [] }"#;
        assert!(matches!(
            parse_scenario(json),
            Err(DirectorError::Malformed(_))
        ));
    }

    #[test]
    fn test_clean_field_strips_artifacts() {
        assert_eq!(clean_field("\"Quoted Title\""), "Quoted Title");
        assert_eq!(clean_field("title\": \"Leaked Value"), "Leaked Value");
        assert_eq!(clean_field("back\\slash"), "backslash");
        assert_eq!(clean_field("plain text"), "plain text");
    }
}
