//! Player stats and choice effects.
//!
//! Stats are mutated only by applying a `ChoiceEffect`. The fun meter is
//! clamped to [0, 100]; wallet and brain power are unbounded at this layer
//! (affordability is enforced by the sanitizer, not here).

use serde::{Deserialize, Deserializer, Serialize};

/// The player's running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Pocket money in QAR.
    pub wallet: i64,
    /// Financial knowledge earned so far.
    pub brain_power: i64,
    /// Enjoyment, clamped to [0, 100].
    pub fun_meter: i64,
}

impl PlayerStats {
    /// The stats every new session starts with.
    pub fn starting() -> Self {
        Self {
            wallet: 500,
            brain_power: 0,
            fun_meter: 80,
        }
    }

    /// Apply a choice's effect, returning the new stats.
    ///
    /// Pure arithmetic. Only the fun meter is clamped.
    pub fn apply(&self, effect: &ChoiceEffect) -> Self {
        Self {
            wallet: self.wallet + effect.wallet_change,
            brain_power: self.brain_power + effect.brain_power_change,
            fun_meter: (self.fun_meter + effect.fun_meter_change).clamp(0, 100),
        }
    }
}

/// The signed deltas a choice applies to the player's stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceEffect {
    #[serde(default)]
    pub wallet_change: i64,
    #[serde(default)]
    pub brain_power_change: i64,
    #[serde(default)]
    pub fun_meter_change: i64,
}

impl ChoiceEffect {
    pub const NONE: ChoiceEffect = ChoiceEffect {
        wallet_change: 0,
        brain_power_change: 0,
        fun_meter_change: 0,
    };

    pub fn new(wallet_change: i64, brain_power_change: i64, fun_meter_change: i64) -> Self {
        Self {
            wallet_change,
            brain_power_change,
            fun_meter_change,
        }
    }
}

/// The educational category of a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    Spending,
    Saving,
    Investing,
    Earning,
    Charity,
}

impl ChoiceKind {
    /// Parse a kind label leniently. Unrecognized labels coerce to
    /// `Spending` so generated content can never smuggle in an
    /// out-of-vocabulary kind.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "saving" => ChoiceKind::Saving,
            "investing" => ChoiceKind::Investing,
            "earning" => ChoiceKind::Earning,
            "charity" => ChoiceKind::Charity,
            _ => ChoiceKind::Spending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChoiceKind::Spending => "spending",
            ChoiceKind::Saving => "saving",
            ChoiceKind::Investing => "investing",
            ChoiceKind::Earning => "earning",
            ChoiceKind::Charity => "charity",
        }
    }
}

impl<'de> Deserialize<'de> for ChoiceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ChoiceKind::parse_lenient(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_effect() {
        let stats = PlayerStats::starting();
        let next = stats.apply(&ChoiceEffect::new(-50, 10, 20));

        assert_eq!(next.wallet, 450);
        assert_eq!(next.brain_power, 10);
        assert_eq!(next.fun_meter, 100);
    }

    #[test]
    fn test_fun_meter_clamps_high() {
        let mut stats = PlayerStats::starting();
        for _ in 0..10 {
            stats = stats.apply(&ChoiceEffect::new(0, 0, 50));
        }
        assert_eq!(stats.fun_meter, 100);
    }

    #[test]
    fn test_fun_meter_clamps_low() {
        let mut stats = PlayerStats::starting();
        for _ in 0..10 {
            stats = stats.apply(&ChoiceEffect::new(0, 0, -50));
        }
        assert_eq!(stats.fun_meter, 0);
    }

    #[test]
    fn test_wallet_unclamped_here() {
        // Debt prevention belongs to the sanitizer, not stat arithmetic.
        let stats = PlayerStats::starting().apply(&ChoiceEffect::new(-600, 0, 0));
        assert_eq!(stats.wallet, -100);
    }

    #[test]
    fn test_kind_lenient_parse() {
        assert_eq!(ChoiceKind::parse_lenient("saving"), ChoiceKind::Saving);
        assert_eq!(ChoiceKind::parse_lenient("Charity"), ChoiceKind::Charity);
        assert_eq!(ChoiceKind::parse_lenient("unknown_xyz"), ChoiceKind::Spending);
        assert_eq!(ChoiceKind::parse_lenient(""), ChoiceKind::Spending);
    }

    #[test]
    fn test_kind_deserialize_coerces() {
        let kind: ChoiceKind = serde_json::from_str("\"gambling\"").unwrap();
        assert_eq!(kind, ChoiceKind::Spending);
    }
}
